//! JSON loading for [`Config`].
//!
//! Three document shapes have been used for funcss configurations. All of them
//! are normalised into the canonical [`Config`] and then validated, so the
//! compilers only ever see one schema.
//!
//! 1. A list of definition objects:
//!
//! ```json
//! [{ "name": "color", "rules": [["red", "#f00"]], "pseudo": [":hover"] }]
//! ```
//!
//! 2. A list of `[name, body]` pairs:
//!
//! ```json
//! [["color", { "rules": [["red", "#f00"]] }]]
//! ```
//!
//! 3. An object keyed by declaration name (key order is kept):
//!
//! ```json
//! { "color": { "rules": { "red": "#f00" } } }
//! ```
//!
//! Inside a body, `rules` is either a list of `"key"`, `["key"]`,
//! `["key", value]` or `["key", null]` entries, or an object of
//! `key: value` pairs where a `null` or empty value means "use the key".
//! `media` is either a list of `[key, query]` pairs or a `key: query` object.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::{Config, Definition, MediaQuery, Rule};
use crate::error::{ConfigError, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawConfig {
    List(Vec<RawEntry>),
    Keyed(Map<String, Value>),
}

// `Pair` must come first: a derived struct also accepts a sequence, which
// would swallow `[name, body]` entries.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Pair(String, RawBody),
    Named(RawNamedDefinition),
}

#[derive(Deserialize)]
struct RawNamedDefinition {
    name: String,
    #[serde(default)]
    rules: Option<RawRules>,
    #[serde(default)]
    pseudo: Option<Vec<String>>,
    #[serde(default)]
    media: Option<RawMedia>,
}

#[derive(Deserialize)]
struct RawBody {
    #[serde(default)]
    rules: Option<RawRules>,
    #[serde(default)]
    pseudo: Option<Vec<String>>,
    #[serde(default)]
    media: Option<RawMedia>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRules {
    List(Vec<Value>),
    Keyed(Map<String, Value>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMedia {
    List(Vec<(String, Value)>),
    Keyed(Map<String, Value>),
}

impl Config {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(source)?;
        normalize(raw)
    }

    /// Converts and validates an already parsed JSON value.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let raw: RawConfig = serde_json::from_value(value)?;
        normalize(raw)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading configuration from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }
}

fn normalize(raw: RawConfig) -> Result<Config> {
    let mut definitions = Vec::new();
    match raw {
        RawConfig::List(entries) => {
            for entry in entries {
                let definition = match entry {
                    RawEntry::Pair(name, body) => {
                        build_definition(name, body.rules, body.pseudo, body.media)?
                    }
                    RawEntry::Named(named) => {
                        build_definition(named.name, named.rules, named.pseudo, named.media)?
                    }
                };
                definitions.push(definition);
            }
        }
        RawConfig::Keyed(map) => {
            for (name, value) in map {
                let body: RawBody = serde_json::from_value(value)?;
                definitions.push(build_definition(name, body.rules, body.pseudo, body.media)?);
            }
        }
    }

    let config = Config::new(definitions);
    config.validate()?;
    log::debug!("loaded {} definitions", config.definitions.len());
    Ok(config)
}

fn build_definition(
    name: String,
    rules: Option<RawRules>,
    pseudo: Option<Vec<String>>,
    media: Option<RawMedia>,
) -> std::result::Result<Definition, ConfigError> {
    let rules = match rules {
        Some(rules) => convert_rules(&name, rules)?,
        None => Vec::new(),
    };
    let media = match media {
        Some(media) => Some(convert_media(&name, media)?),
        None => None,
    };
    Ok(Definition {
        name,
        rules,
        pseudo,
        media,
    })
}

fn convert_rules(name: &str, rules: RawRules) -> std::result::Result<Vec<Rule>, ConfigError> {
    match rules {
        RawRules::List(entries) => entries
            .into_iter()
            .map(|entry| list_rule(name, entry))
            .collect(),
        RawRules::Keyed(map) => map
            .into_iter()
            .map(|(key, value)| -> std::result::Result<Rule, ConfigError> {
                let value = optional_string(name, &key, value)?;
                Ok(Rule { key, value })
            })
            .collect(),
    }
}

fn list_rule(name: &str, entry: Value) -> std::result::Result<Rule, ConfigError> {
    let malformed = |reason: String| ConfigError::MalformedRule {
        definition: name.to_string(),
        reason,
    };

    match entry {
        Value::String(key) => Ok(Rule::keyword(key)),
        Value::Array(items) if (1..=2).contains(&items.len()) => {
            let mut items = items.into_iter();
            let key = match items.next() {
                Some(Value::String(key)) => key,
                other => {
                    return Err(malformed(format!(
                        "rule key must be a string, found {}",
                        describe(other.as_ref())
                    )));
                }
            };
            let value = match items.next() {
                Some(value) => optional_string(name, &key, value)?,
                None => None,
            };
            Ok(Rule { key, value })
        }
        Value::Array(items) => Err(malformed(format!(
            "expected [key] or [key, value], found {} elements",
            items.len()
        ))),
        other => Err(malformed(format!(
            "expected a string or a list, found {}",
            describe(Some(&other))
        ))),
    }
}

fn optional_string(
    name: &str,
    key: &str,
    value: Value,
) -> std::result::Result<Option<String>, ConfigError> {
    match value {
        Value::Null => Ok(None),
        Value::String(value) => Ok(Some(value)),
        other => Err(ConfigError::MalformedRule {
            definition: name.to_string(),
            reason: format!(
                "value of rule '{key}' must be a string or null, found {}",
                describe(Some(&other))
            ),
        }),
    }
}

fn convert_media(name: &str, media: RawMedia) -> std::result::Result<Vec<MediaQuery>, ConfigError> {
    let pairs: Vec<(String, Value)> = match media {
        RawMedia::List(pairs) => pairs,
        RawMedia::Keyed(map) => map.into_iter().collect(),
    };
    pairs
        .into_iter()
        .map(|(key, query)| match query {
            Value::String(query) => Ok(MediaQuery { key, query }),
            _ => Err(ConfigError::MediaQueryType {
                definition: name.to_string(),
                key,
            }),
        })
        .collect()
}

fn describe(value: Option<&Value>) -> &'static str {
    match value {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(_)) => "a number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "a list",
        Some(Value::Object(_)) => "an object",
    }
}
