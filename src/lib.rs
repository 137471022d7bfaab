//! Command-line front end for [`funcss`].
//!
//! The library crate re-exports [`funcss`] so applications can depend on this
//! package alone; the `funcss` binary compiles a JSON configuration into a CSS
//! file:
//!
//! ```text
//! funcss styles.json --globals reset.css -o public/funcss.css
//! funcss styles.json --list
//! ```

pub mod cli;
pub mod error;
pub mod log_init;

pub use error::{CliError, Result};
pub use funcss::{
    AccessError, Accessor, CompileOptions, Config, ConfigError, Definition, Diagnostics,
    FuncssError, Generated, Generator, MediaQuery, MemoryHost, Rule, StyleHost, Stylesheet,
    ValidationMode, WriterHost, accessor, config, css, generate, host, naming, run,
};
