//! Class-name accessors.
//!
//! The accessor compiler turns every [`Definition`] of a [`Config`] into an
//! [`Accessor`] keyed by the camel-cased declaration name, collected in a
//! [`Stylesheet`]. An accessor takes a rule key plus optional variant tokens and
//! renders the class name the CSS compiler emitted for that combination:
//!
//! ```rust
//! use funcss::accessor::{compile, ValidationMode};
//! use funcss::config::{Config, Definition};
//!
//! let config = Config::default().with(
//!     Definition::new("background-color")
//!         .rule("red", "#ff4b5b")
//!         .pseudo(":hover")
//!         .media("@narrow", "(min-width:20rem)"),
//! );
//! let sheet = compile(&config, ValidationMode::Strict);
//! let bg = sheet.get("backgroundColor").unwrap();
//!
//! assert_eq!(bg.get(Some("red"), &[]).as_deref(), Some("background-color--red"));
//! assert_eq!(bg.get(Some("red"), &["@narrow"]).as_deref(), Some("background-color--red--narrow"));
//! assert_eq!(bg.get(Some("red"), &[":hover"]).as_deref(), Some("background-color--red--hover"));
//! assert_eq!(bg.get(None, &[]), None);
//! ```
//!
//! ## Validation
//!
//! In [`ValidationMode::Strict`] every call is checked against the definition:
//! the rule key must exist, `@` tokens must name one of its media queries and
//! `:` tokens one of its pseudo selectors. A failed check is sent to the
//! [`Diagnostics`] channel and the call yields `None`. Tokens with neither
//! prefix are rendered without checks. [`ValidationMode::Skipped`] renders
//! every call as-is.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::config::{Config, Definition};
use crate::error::AccessError;
use crate::naming::{camel_case, render_class_name};

/// Whether accessors check their arguments against the configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Check every call and report mismatches.
    #[default]
    Strict,
    /// Render without checks, for deployed builds.
    Skipped,
}

/// Receives the message of every failed accessor call.
pub trait Diagnostics: Send + Sync {
    fn report(&self, message: &str);
}

impl<F> Diagnostics for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, message: &str) {
        self(message)
    }
}

/// Sends diagnostics to the `log` facade at error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Keeps every reported message in memory.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// The messages reported so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.messages().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn report(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

/// Computes class names for one definition.
#[derive(Clone)]
pub struct Accessor {
    definition: Arc<Definition>,
    mode: ValidationMode,
    diagnostics: Arc<dyn Diagnostics>,
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("name", &self.definition.name)
            .field("mode", &self.mode)
            .finish()
    }
}

impl Accessor {
    pub fn new(
        definition: Definition,
        mode: ValidationMode,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        Self {
            definition: Arc::new(definition),
            mode,
            diagnostics,
        }
    }

    /// The declaration name, e.g. `background-color`.
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Renders the class name for `rule` and `variants`.
    ///
    /// Returns `None` when `rule` is `None`, or when validation fails; in the
    /// latter case the failure is sent to the diagnostics channel first. Empty
    /// variant tokens are ignored.
    pub fn get(&self, rule: Option<&str>, variants: &[&str]) -> Option<String> {
        self.report(self.try_get(rule, variants))
    }

    /// Like [`get`](Self::get) but returns the validation failure instead of
    /// reporting it.
    pub fn try_get(
        &self,
        rule: Option<&str>,
        variants: &[&str],
    ) -> Result<Option<String>, AccessError> {
        let args: Vec<Option<&str>> = std::iter::once(rule)
            .chain(variants.iter().copied().map(Some))
            .collect();
        self.try_call(&args)
    }

    /// Variadic form: the first argument is the rule key, the rest are variant
    /// tokens. Absent trailing arguments are ignored.
    pub fn call(&self, args: &[Option<&str>]) -> Option<String> {
        self.report(self.try_call(args))
    }

    /// Like [`call`](Self::call) but returns the validation failure instead of
    /// reporting it.
    pub fn try_call(&self, args: &[Option<&str>]) -> Result<Option<String>, AccessError> {
        let Some((Some(rule), variants)) = args.split_first() else {
            return Ok(None);
        };

        if self.mode == ValidationMode::Strict {
            self.validate(rule, variants)?;
        }

        let tokens = std::iter::once(Some(self.name())).chain(args.iter().copied());
        Ok(Some(render_class_name(tokens)))
    }

    fn report(&self, result: Result<Option<String>, AccessError>) -> Option<String> {
        match result {
            Ok(class) => class,
            Err(err) => {
                self.diagnostics.report(&err.to_string());
                None
            }
        }
    }

    fn validate(&self, rule: &str, variants: &[Option<&str>]) -> Result<(), AccessError> {
        let definition = &*self.definition;

        if definition.find_rule(rule).is_none() {
            return Err(AccessError::UnknownRuleKey {
                key: rule.to_string(),
                definition: definition.name.clone(),
                available: definition.rule_keys(),
            });
        }

        for variant in variants.iter().flatten() {
            if variant.starts_with('@') {
                validate_media(definition, variant)?;
            } else if variant.starts_with(':') {
                validate_pseudo(definition, variant)?;
            }
        }
        Ok(())
    }
}

fn validate_media(definition: &Definition, key: &str) -> Result<(), AccessError> {
    let Some(media) = &definition.media else {
        return Err(AccessError::MissingMediaSection {
            key: key.to_string(),
            definition: definition.name.clone(),
        });
    };
    if media.iter().any(|m| m.key == key) {
        return Ok(());
    }
    Err(AccessError::UnknownMediaKey {
        key: key.to_string(),
        definition: definition.name.clone(),
        available: media.iter().map(|m| m.key.clone()).collect(),
    })
}

fn validate_pseudo(definition: &Definition, key: &str) -> Result<(), AccessError> {
    let Some(pseudo) = &definition.pseudo else {
        return Err(AccessError::MissingPseudoSection {
            key: key.to_string(),
            definition: definition.name.clone(),
        });
    };
    if pseudo.iter().any(|p| p == key) {
        return Ok(());
    }
    Err(AccessError::UnknownPseudoKey {
        key: key.to_string(),
        definition: definition.name.clone(),
        available: pseudo.clone(),
    })
}

/// Accessors keyed by camel-cased declaration name.
#[derive(Clone, Debug, Default)]
pub struct Stylesheet {
    accessors: HashMap<String, Accessor>,
}

impl Stylesheet {
    /// Looks up an accessor by camel-cased name, e.g. `paddingTop`.
    pub fn get(&self, key: &str) -> Option<&Accessor> {
        self.accessors.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.accessors.contains_key(key)
    }

    /// All accessor keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.accessors.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Accessor)> {
        self.accessors.iter().map(|(key, accessor)| (key.as_str(), accessor))
    }
}

/// Builds a [`Stylesheet`] from a configuration.
#[derive(Clone)]
pub struct AccessorCompiler {
    mode: ValidationMode,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Default for AccessorCompiler {
    fn default() -> Self {
        Self::new(ValidationMode::default())
    }
}

impl AccessorCompiler {
    /// A compiler reporting through [`LogDiagnostics`].
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            diagnostics: Arc::new(LogDiagnostics),
        }
    }

    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn compile(&self, config: &Config) -> Stylesheet {
        let mut accessors = HashMap::with_capacity(config.definitions.len());
        for definition in &config.definitions {
            let key = camel_case(&definition.name);
            let accessor = Accessor::new(definition.clone(), self.mode, self.diagnostics.clone());
            if let Some(previous) = accessors.insert(key.clone(), accessor) {
                log::warn!(
                    "definition '{}' replaces accessor '{key}' of definition '{}'",
                    definition.name,
                    previous.name()
                );
            }
        }
        log::debug!(
            "compiled {} accessors ({:?} validation)",
            accessors.len(),
            self.mode
        );
        Stylesheet { accessors }
    }
}

/// Compiles accessors reporting through [`LogDiagnostics`].
pub fn compile(config: &Config, mode: ValidationMode) -> Stylesheet {
    AccessorCompiler::new(mode).compile(config)
}
