//! # funcss - functional CSS from one configuration
//!
//! funcss compiles a declarative style configuration into two artifacts that
//! always agree with each other:
//!
//! - **CSS text**: one single-declaration class per (declaration, value) pair,
//!   plus pseudo-class/element and media-query variants
//! - **Accessors**: one function per declaration that returns the class name
//!   for a value key and optional variants, validated against the configuration
//!
//! Application code references styles by semantic key (`backgroundColor("red")`)
//! instead of hand-written class strings.
//!
//! ## Quick Start
//!
//! ```rust
//! use funcss::config::{Config, Definition};
//! use funcss::css::CompileOptions;
//! use funcss::host::MemoryHost;
//! use funcss::accessor::ValidationMode;
//!
//! let config = Config::default().with(
//!     Definition::new("background-color")
//!         .rule("red", "#ff4b5b")
//!         .rule("green", "#00d4a8")
//!         .pseudo(":hover")
//!         .media("@narrow", "(min-width:20rem)"),
//! );
//!
//! let mut host = MemoryHost::new();
//! let sheet = funcss::run(&config, &CompileOptions::default(), ValidationMode::Strict, &mut host)
//!     .expect("memory host never fails");
//!
//! let bg = sheet.get("backgroundColor").unwrap();
//! let class = bg.get(Some("red"), &[":hover"]).unwrap();
//! assert_eq!(class, "background-color--red--hover");
//! assert!(host.css().contains(".background-color--red--hover:hover{background-color:#ff4b5b}"));
//! ```
//!
//! ## Modules
//!
//! - [`config`]: configuration data model, builder and JSON loading
//! - [`naming`]: token stripping, class-name rendering and camel-casing
//! - [`css`]: the CSS compiler
//! - [`accessor`]: the accessor compiler and the [`Stylesheet`] it returns
//! - [`host`]: the style-injection capability used by [`run`]
//! - [`error`]: error types

pub mod accessor;
pub mod config;
pub mod css;
pub mod error;
pub mod host;
pub mod naming;

use std::sync::Arc;

pub use accessor::{Accessor, Diagnostics, Stylesheet, ValidationMode};
pub use config::{Config, Definition, MediaQuery, Rule};
pub use css::CompileOptions;
pub use error::{AccessError, ConfigError, FuncssError, Result};
pub use host::{MemoryHost, StyleHost, WriterHost};

use accessor::AccessorCompiler;

/// Both compiled artifacts of one configuration.
#[derive(Clone, Debug)]
pub struct Generated {
    pub css: String,
    pub stylesheet: Stylesheet,
}

/// Runs the CSS and accessor compilers with shared settings.
#[derive(Clone, Default)]
pub struct Generator {
    options: CompileOptions,
    accessors: AccessorCompiler,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn globals(mut self, globals: impl Into<String>) -> Self {
        self.options.globals = Some(globals.into());
        self
    }

    /// Sets the validation mode, keeping the current diagnostics channel.
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.accessors = self.accessors.mode(mode);
        self
    }

    pub fn diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.accessors = self.accessors.with_diagnostics(diagnostics);
        self
    }

    /// Compiles both artifacts without side effects.
    pub fn generate(&self, config: &Config) -> Generated {
        Generated {
            css: css::compile(config, &self.options),
            stylesheet: self.accessors.compile(config),
        }
    }

    /// Compiles both artifacts, injects the CSS into `host` and returns the
    /// accessors.
    pub fn run(&self, config: &Config, mut host: impl StyleHost) -> Result<Stylesheet> {
        let Generated { css, stylesheet } = self.generate(config);
        host.create_style_resource(&css)?;
        Ok(stylesheet)
    }
}

/// Compiles both artifacts of `config` without side effects.
pub fn generate(config: &Config, options: &CompileOptions, mode: ValidationMode) -> Generated {
    Generator::new()
        .options(options.clone())
        .mode(mode)
        .generate(config)
}

/// Compiles `config`, injects the CSS into `host` once and returns the
/// accessors. Diagnostics go to the `log` facade.
pub fn run(
    config: &Config,
    options: &CompileOptions,
    mode: ValidationMode,
    host: impl StyleHost,
) -> Result<Stylesheet> {
    Generator::new()
        .options(options.clone())
        .mode(mode)
        .run(config, host)
}
