//! Where compiled CSS goes once [`run`](crate::run) has produced it.
//!
//! A [`StyleHost`] is the one outward-facing capability of the crate: it makes
//! a CSS string take effect in whatever rendering context the application has.
//! [`run`](crate::run) calls it exactly once per invocation and never reads back
//! or removes what earlier calls injected.

use std::io::Write;

use crate::error::Result;

/// Makes stylesheet text active in a rendering context.
pub trait StyleHost {
    /// Adds `css` as a new style resource.
    fn create_style_resource(&mut self, css: &str) -> Result<()>;
}

impl<H: StyleHost + ?Sized> StyleHost for &mut H {
    fn create_style_resource(&mut self, css: &str) -> Result<()> {
        (**self).create_style_resource(css)
    }
}

/// Collects injected stylesheets in memory, in injection order.
///
/// Useful for server-side rendering, where the collected CSS is later
/// inlined into a `<style>` element of the rendered page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryHost {
    resources: Vec<String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// All injected stylesheets concatenated.
    pub fn css(&self) -> String {
        self.resources.concat()
    }

    /// Renders every injected stylesheet as a `<style>` element.
    pub fn to_html(&self) -> String {
        self.resources
            .iter()
            .map(|css| format!("<style type=\"text/css\">{css}</style>"))
            .collect()
    }
}

impl StyleHost for MemoryHost {
    fn create_style_resource(&mut self, css: &str) -> Result<()> {
        self.resources.push(css.to_string());
        Ok(())
    }
}

/// Writes each injected stylesheet to an [`io::Write`](std::io::Write) sink.
#[derive(Debug)]
pub struct WriterHost<W: Write> {
    writer: W,
}

impl<W: Write> WriterHost<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StyleHost for WriterHost<W> {
    fn create_style_resource(&mut self, css: &str) -> Result<()> {
        self.writer.write_all(css.as_bytes())?;
        self.writer.flush()?;
        log::debug!("wrote {} bytes of CSS", css.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_host_keeps_every_resource() {
        let mut host = MemoryHost::new();
        host.create_style_resource(".a{color:red}").unwrap();
        host.create_style_resource(".b{color:blue}").unwrap();
        assert_eq!(host.resources().len(), 2);
        assert_eq!(host.css(), ".a{color:red}.b{color:blue}");
    }

    #[test]
    fn memory_host_renders_style_elements() {
        let mut host = MemoryHost::new();
        host.create_style_resource(".a{color:red}").unwrap();
        assert_eq!(
            host.to_html(),
            "<style type=\"text/css\">.a{color:red}</style>"
        );
    }

    #[test]
    fn writer_host_writes_css_bytes() {
        let mut host = WriterHost::new(Vec::new());
        host.create_style_resource(".a{color:red}").unwrap();
        assert_eq!(host.into_inner(), b".a{color:red}".to_vec());
    }

    #[test]
    fn mutable_reference_is_a_host() {
        fn inject(mut host: impl StyleHost) {
            host.create_style_resource(".x{top:0}").unwrap();
        }
        let mut host = MemoryHost::new();
        inject(&mut host);
        assert_eq!(host.css(), ".x{top:0}");
    }
}
