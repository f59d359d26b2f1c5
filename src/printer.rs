use std::{any::type_name, io::Write};

use log::debug;

use crate::{
    config::Config,
    error::RenderError,
    inspect::Inspect,
    leaf::short_type_name,
    render::{dot::DotRenderer, text::TextRenderer},
};

/// Renderer entry points bound to a [`Config`].
///
/// Each call starts from empty traversal state; nothing carries over between
/// calls, so one `Printer` can be shared freely.
///
/// ```
/// let printer = pp::Printer::new().indent("  ");
/// assert_eq!(printer.to_string(&vec![1, 2]), "[\n  1\n  2\n]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Printer {
    config: Config,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Replaces the indent unit.
    pub fn indent(mut self, unit: impl Into<String>) -> Self {
        self.config.indent = unit.into();
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Writes the text rendering of `value` to `out`.
    ///
    /// Stops at the first failed write; `out` keeps the partial output.
    pub fn fprint<T: Inspect + ?Sized>(
        &self,
        out: &mut dyn Write,
        value: &T,
    ) -> Result<(), RenderError> {
        debug!("text render of {}", short_type_name(type_name::<T>()));
        TextRenderer::new(out, &self.config.indent).render(value)
    }

    /// Text rendering of `value` to stdout.
    pub fn print<T: Inspect + ?Sized>(&self, value: &T) -> Result<(), RenderError> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.fprint(&mut lock, value)
    }

    /// Text rendering of `value` as a string.
    pub fn to_string<T: Inspect + ?Sized>(&self, value: &T) -> String {
        let mut buf = Vec::new();
        // Writes into a Vec never fail.
        let _ = self.fprint(&mut buf, value);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Writes the Graphviz rendering of `value` to `out`.
    pub fn fdot<T: Inspect + ?Sized>(
        &self,
        out: &mut dyn Write,
        value: &T,
    ) -> Result<(), RenderError> {
        debug!("dot render of {}", short_type_name(type_name::<T>()));
        DotRenderer::new(out).render(value)
    }

    /// Graphviz rendering of `value` as a string.
    pub fn dot_string<T: Inspect + ?Sized>(&self, value: &T) -> String {
        let mut buf = Vec::new();
        // Writes into a Vec never fail.
        let _ = self.fdot(&mut buf, value);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
