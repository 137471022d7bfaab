//! The style configuration both compilers read.
//!
//! A [`Config`] is an ordered list of [`Definition`]s. Each definition names one
//! CSS declaration and lists its value variants ([`Rule`]s), plus optional
//! pseudo-class/element variants and optional media-query variants
//! ([`MediaQuery`]).
//!
//! Configurations are either built in code with the builder methods or loaded
//! from JSON through [`Config::from_json_str`] and friends (see [`load`]).
//!
//! ## Example
//!
//! ```rust
//! use funcss::config::{Config, Definition};
//!
//! let config = Config::default()
//!     .with(
//!         Definition::new("background-color")
//!             .rule("red", "#ff4b5b")
//!             .rule("green", "#00d4a8")
//!             .pseudo(":hover")
//!             .media("@narrow", "(min-width:20rem)"),
//!     )
//!     .with(Definition::new("display").keyword("flex").keyword("none"));
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.definitions.len(), 2);
//! ```

pub mod load;

use crate::error::ConfigError;

/// One value variant of a declaration: `key` is the label used in class names,
/// `value` the literal CSS value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub key: String,
    pub value: Option<String>,
}

impl Rule {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// A rule whose key doubles as its value (`display: flex`).
    pub fn keyword(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// The CSS value to emit. Falls back to the key when no value is set.
    pub fn value(&self) -> &str {
        match self.value.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => &self.key,
        }
    }
}

/// A media-query variant: `key` is the `@`-prefixed label, `query` the expression
/// that follows `@media`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaQuery {
    pub key: String,
    pub query: String,
}

impl MediaQuery {
    pub fn new(key: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            query: query.into(),
        }
    }
}

/// One styleable declaration and its variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    /// The CSS property name, e.g. `background-color`.
    pub name: String,
    pub rules: Vec<Rule>,
    /// Pseudo selectors such as `:hover` or `::placeholder`.
    pub pseudo: Option<Vec<String>>,
    pub media: Option<Vec<MediaQuery>>,
}

impl Definition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            pseudo: None,
            media: None,
        }
    }

    pub fn rule(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.rules.push(Rule::new(key, value));
        self
    }

    pub fn keyword(mut self, key: impl Into<String>) -> Self {
        self.rules.push(Rule::keyword(key));
        self
    }

    /// Adds a pseudo selector, creating the `pseudo` section if needed.
    pub fn pseudo(mut self, selector: impl Into<String>) -> Self {
        self.pseudo
            .get_or_insert_with(Vec::new)
            .push(selector.into());
        self
    }

    /// Adds a media query, creating the `media` section if needed.
    pub fn media(mut self, key: impl Into<String>, query: impl Into<String>) -> Self {
        self.media
            .get_or_insert_with(Vec::new)
            .push(MediaQuery::new(key, query));
        self
    }

    pub fn find_rule(&self, key: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.key == key)
    }

    pub fn rule_keys(&self) -> Vec<String> {
        self.rules.iter().map(|rule| rule.key.clone()).collect()
    }

    pub fn media_keys(&self) -> Option<Vec<String>> {
        self.media
            .as_ref()
            .map(|media| media.iter().map(|m| m.key.clone()).collect())
    }

    /// Checks the invariants a definition needs for its accessor to be usable.
    ///
    /// `index` is the position in the configuration, used when the name itself
    /// is missing.
    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName { index });
        }
        if self.rules.is_empty() {
            return Err(ConfigError::EmptyRules {
                definition: self.name.clone(),
            });
        }
        if self.rules.iter().any(|rule| rule.key.is_empty()) {
            return Err(ConfigError::EmptyRuleKey {
                definition: self.name.clone(),
            });
        }
        for selector in self.pseudo.iter().flatten() {
            if !selector.starts_with(':') {
                return Err(ConfigError::PseudoPrefix {
                    definition: self.name.clone(),
                    selector: selector.clone(),
                });
            }
        }
        for media in self.media.iter().flatten() {
            if !media.key.starts_with('@') {
                return Err(ConfigError::MediaKeyPrefix {
                    definition: self.name.clone(),
                    key: media.key.clone(),
                });
            }
        }
        Ok(())
    }
}

/// An ordered list of definitions.
///
/// Order decides the order of the emitted CSS. Two definitions whose names
/// camel-case to the same key share one accessor slot and the later one wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub definitions: Vec<Definition>,
}

impl Config {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    pub fn with(mut self, definition: Definition) -> Self {
        self.definitions.push(definition);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Validates every definition, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.definitions
            .iter()
            .enumerate()
            .try_for_each(|(index, definition)| definition.validate(index))
    }
}

impl From<Vec<Definition>> for Config {
    fn from(definitions: Vec<Definition>) -> Self {
        Self::new(definitions)
    }
}

impl FromIterator<Definition> for Config {
    fn from_iter<T: IntoIterator<Item = Definition>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
