//! Error types for configuration loading and accessor lookups.
//!
//! - [`FuncssError`]: crate-level error returned by loading and orchestration
//! - [`ConfigError`]: a configuration that breaks one of the load-time invariants
//! - [`AccessError`]: an accessor call that does not match its definition
//!
//! Accessor errors are never fatal. [`Accessor::get`](crate::accessor::Accessor::get)
//! reports them through the diagnostics channel and yields no class name.

use thiserror::Error;

/// Errors that can occur while loading a configuration or running the compilers.
#[derive(Error, Debug)]
pub enum FuncssError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The configuration document is not valid JSON or has an unknown shape.
    #[error("malformed configuration document: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred while reading a configuration or writing CSS.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FuncssError>;

/// A configuration that breaks one of the load-time invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A definition has an empty declaration name.
    #[error("definition #{index} has an empty name")]
    EmptyName { index: usize },

    /// A definition declares no rules at all.
    #[error("definition '{definition}' has no rules")]
    EmptyRules { definition: String },

    /// A rule entry is neither `key` nor `[key, value]`.
    #[error("definition '{definition}' has a malformed rule entry: {reason}")]
    MalformedRule { definition: String, reason: String },

    /// A rule has an empty key.
    #[error("definition '{definition}' has a rule with an empty key")]
    EmptyRuleKey { definition: String },

    /// A media key does not start with `@`.
    #[error("media key '{key}' of definition '{definition}' must start with '@'")]
    MediaKeyPrefix { definition: String, key: String },

    /// A media query expression is not a string.
    #[error("media query '{key}' of definition '{definition}' must be a string")]
    MediaQueryType { definition: String, key: String },

    /// A pseudo selector does not start with `:`.
    #[error("pseudo selector '{selector}' of definition '{definition}' must start with ':'")]
    PseudoPrefix { definition: String, selector: String },
}

/// An accessor call that does not match the definition it belongs to.
///
/// The `Display` text is the message sent to the diagnostics channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The rule key is not one of the definition's rules.
    #[error(
        "Couldn't find '{key}' rule for '{definition}' definition. Available rules are: {}",
        .available.join(", ")
    )]
    UnknownRuleKey {
        key: String,
        definition: String,
        available: Vec<String>,
    },

    /// A `@` variant was passed to a definition without a `media` section.
    #[error(
        "You're trying to access '{key}' media query for '{definition}' definition, but the definition doesn't include any 'media' property at all. Try checking your funcss definitions for errors."
    )]
    MissingMediaSection { key: String, definition: String },

    /// A `@` variant that is not one of the definition's media keys.
    #[error(
        "Couldn't find '{key}' media query for '{definition}' definition. Available media queries are: {}",
        .available.join(", ")
    )]
    UnknownMediaKey {
        key: String,
        definition: String,
        available: Vec<String>,
    },

    /// A `:` variant was passed to a definition without a `pseudo` section.
    #[error(
        "You're trying to access '{key}' pseudo class/element for '{definition}' definition, but the definition doesn't include any 'pseudo' property at all. Try checking your funcss definitions for errors."
    )]
    MissingPseudoSection { key: String, definition: String },

    /// A `:` variant that is not one of the definition's pseudo selectors.
    #[error(
        "Couldn't find '{key}' pseudo class/element for '{definition}' definition. Available pseudo classes/elements are: {}",
        .available.join(", ")
    )]
    UnknownPseudoKey {
        key: String,
        definition: String,
        available: Vec<String>,
    },
}

impl AccessError {
    /// The token that failed validation.
    pub fn key(&self) -> &str {
        match self {
            AccessError::UnknownRuleKey { key, .. }
            | AccessError::MissingMediaSection { key, .. }
            | AccessError::UnknownMediaKey { key, .. }
            | AccessError::MissingPseudoSection { key, .. }
            | AccessError::UnknownPseudoKey { key, .. } => key,
        }
    }

    /// The declaration name of the definition the accessor belongs to.
    pub fn definition(&self) -> &str {
        match self {
            AccessError::UnknownRuleKey { definition, .. }
            | AccessError::MissingMediaSection { definition, .. }
            | AccessError::UnknownMediaKey { definition, .. }
            | AccessError::MissingPseudoSection { definition, .. }
            | AccessError::UnknownPseudoKey { definition, .. } => definition,
        }
    }
}
