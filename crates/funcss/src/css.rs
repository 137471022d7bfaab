//! CSS text generation.
//!
//! [`compile`] walks a [`Config`] and emits one flat CSS string. For every
//! definition, in configuration order:
//!
//! 1. one block per rule: `.color--red{color:#f00}`
//! 2. when `pseudo` is present, one block per (pseudo selector, rule), grouped
//!    by selector: `.color--red--hover:hover{color:#f00}`
//! 3. when `media` is present, one `@media` block per media query wrapping one
//!    block per rule: `@media (min-width:40rem){.color--red--wide{color:#f00}}`
//!
//! Optional globals from [`CompileOptions`] are prepended verbatim. No
//! whitespace is emitted between blocks.
//!
//! ## Example
//!
//! ```rust
//! use funcss::config::{Config, Definition};
//! use funcss::css::{compile, CompileOptions};
//!
//! let config = Config::default().with(Definition::new("display").keyword("flex"));
//! let css = compile(&config, &CompileOptions::default());
//! assert_eq!(css, ".display--flex{display:flex}");
//! ```

use crate::config::{Config, Definition, Rule};
use crate::naming::render_class_name;

/// Options for [`compile`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Raw CSS placed before the generated blocks (resets, custom properties).
    pub globals: Option<String>,
}

impl CompileOptions {
    pub fn with_globals(globals: impl Into<String>) -> Self {
        Self {
            globals: Some(globals.into()),
        }
    }
}

/// Compiles `config` into a single CSS string.
pub fn compile(config: &Config, options: &CompileOptions) -> String {
    let mut out = CssWriter::default();

    if let Some(globals) = &options.globals {
        out.raw(globals);
    }

    for definition in &config.definitions {
        write_definition(&mut out, definition);
    }

    let css = out.finish();
    log::debug!(
        "compiled {} definitions into {} bytes of CSS",
        config.definitions.len(),
        css.len()
    );
    css
}

fn write_definition(out: &mut CssWriter, definition: &Definition) {
    let name = definition.name.as_str();

    for rule in &definition.rules {
        let class = render_class_name([Some(name), Some(rule.key.as_str())]);
        out.block(&class, "", name, rule);
    }

    // The raw selector follows the stripped suffix: `.color--red--hover:hover`.
    for pseudo in definition.pseudo.iter().flatten() {
        for rule in &definition.rules {
            let class =
                render_class_name([Some(name), Some(rule.key.as_str()), Some(pseudo.as_str())]);
            out.block(&class, pseudo, name, rule);
        }
    }

    for media in definition.media.iter().flatten() {
        out.open_media(&media.query);
        for rule in &definition.rules {
            let class = render_class_name([
                Some(name),
                Some(rule.key.as_str()),
                Some(media.key.as_str()),
            ]);
            out.block(&class, "", name, rule);
        }
        out.close();
    }
}

/// Incremental output buffer for CSS blocks.
#[derive(Default)]
struct CssWriter {
    buf: String,
}

impl CssWriter {
    fn raw(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Writes `.{class}{suffix}{{property}:{value}}`.
    fn block(&mut self, class: &str, suffix: &str, property: &str, rule: &Rule) {
        log::trace!("emit .{class}{suffix}");
        self.buf.push('.');
        self.buf.push_str(class);
        self.buf.push_str(suffix);
        self.buf.push('{');
        self.buf.push_str(property);
        self.buf.push(':');
        self.buf.push_str(rule.value());
        self.buf.push('}');
    }

    fn open_media(&mut self, query: &str) {
        self.buf.push_str("@media ");
        self.buf.push_str(query);
        self.buf.push('{');
    }

    fn close(&mut self) {
        self.buf.push('}');
    }

    fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Definition;

    fn compile_one(definition: Definition) -> String {
        compile(&Config::default().with(definition), &CompileOptions::default())
    }

    #[test]
    fn base_blocks_follow_rule_order() {
        let css = compile_one(
            Definition::new("color")
                .rule("red", "#f00")
                .rule("blue", "#00f"),
        );
        assert_eq!(css, ".color--red{color:#f00}.color--blue{color:#00f}");
    }

    #[test]
    fn keyword_rule_uses_key_as_value() {
        let css = compile_one(Definition::new("text-align").keyword("center").rule("left", ""));
        assert_eq!(
            css,
            ".text-align--center{text-align:center}.text-align--left{text-align:left}"
        );
    }

    #[test]
    fn pseudo_blocks_are_grouped_by_selector() {
        let css = compile_one(
            Definition::new("color")
                .rule("red", "#f00")
                .rule("blue", "#00f")
                .pseudo(":hover")
                .pseudo("::after"),
        );
        assert_eq!(
            css,
            concat!(
                ".color--red{color:#f00}",
                ".color--blue{color:#00f}",
                ".color--red--hover:hover{color:#f00}",
                ".color--blue--hover:hover{color:#00f}",
                ".color--red--after::after{color:#f00}",
                ".color--blue--after::after{color:#00f}",
            )
        );
    }

    #[test]
    fn media_blocks_wrap_every_rule() {
        let css = compile_one(
            Definition::new("margin")
                .rule("sm", "0.5rem")
                .media("@wide", "(min-width:40rem)"),
        );
        assert_eq!(
            css,
            ".margin--sm{margin:0.5rem}@media (min-width:40rem){.margin--sm--wide{margin:0.5rem}}"
        );
    }

    #[test]
    fn empty_variant_sections_emit_nothing() {
        let mut definition = Definition::new("margin").rule("sm", "0.5rem");
        definition.pseudo = Some(Vec::new());
        definition.media = Some(Vec::new());
        assert_eq!(compile_one(definition), ".margin--sm{margin:0.5rem}");
    }

    #[test]
    fn globals_are_prepended_verbatim() {
        let config = Config::default().with(Definition::new("display").keyword("none"));
        let css = compile(&config, &CompileOptions::with_globals("*{box-sizing:border-box}\n"));
        assert_eq!(css, "*{box-sizing:border-box}\n.display--none{display:none}");
    }

    #[test]
    fn empty_config_yields_only_globals() {
        assert_eq!(compile(&Config::default(), &CompileOptions::default()), "");
        assert_eq!(
            compile(&Config::default(), &CompileOptions::with_globals(":root{}")),
            ":root{}"
        );
    }
}
