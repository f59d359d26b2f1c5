use std::{collections::HashSet, io::Write};

use log::trace;

use super::{Render, walk};
use crate::{
    error::RenderError,
    inspect::Inspect,
    shape::{Identity, Map, Record, Sequence},
};

/// Marker written in place of hidden record members.
const ELLIPSIS: &str = "…";

/// Indented text renderer.
///
/// Cycle detection only covers the current recursion path: a value shared by
/// two siblings is printed twice, a value that contains itself prints
/// `<cycle>` on the second visit.
pub(crate) struct TextRenderer<'w> {
    out: &'w mut dyn Write,
    unit: &'w str,
    /// Line break plus the indentation of the current nesting level.
    indent: String,
    path: HashSet<Identity>,
}

impl<'w> TextRenderer<'w> {
    pub(crate) fn new(out: &'w mut dyn Write, unit: &'w str) -> Self {
        Self {
            out,
            unit,
            indent: String::from("\n"),
            path: HashSet::new(),
        }
    }

    pub(crate) fn render<V: Inspect + ?Sized>(&mut self, value: &V) -> Result<(), RenderError> {
        walk(self, value)
    }

    fn write(&mut self, text: &str) -> Result<(), RenderError> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_indent(&mut self) -> Result<(), RenderError> {
        self.out.write_all(self.indent.as_bytes())?;
        Ok(())
    }

    fn nest(&mut self) -> usize {
        let depth = self.indent.len();
        self.indent.push_str(self.unit);
        depth
    }

    fn unnest(&mut self, depth: usize) {
        self.indent.truncate(depth);
    }
}

impl Render for TextRenderer<'_> {
    type Node = ();

    fn leaf(&mut self, text: &str) -> Result<(), RenderError> {
        self.write(text)
    }

    fn enter(&mut self, identity: Identity) -> Result<Option<()>, RenderError> {
        if self.path.insert(identity) {
            return Ok(None);
        }
        trace!("cycle at {:#x}", identity.addr());
        self.write("<cycle>")?;
        Ok(Some(()))
    }

    fn leave(&mut self, identity: Identity, _node: &()) {
        self.path.remove(&identity);
    }

    fn sequence(&mut self, sequence: &Sequence<'_>) -> Result<(), RenderError> {
        self.write("[")?;
        let depth = self.nest();
        for item in &sequence.items {
            self.write_indent()?;
            walk(self, *item)?;
        }
        self.unnest(depth);
        self.write_indent()?;
        self.write("]")
    }

    fn record(&mut self, record: &Record<'_>) -> Result<(), RenderError> {
        let hidden = record.has_hidden();
        if record.visible().next().is_none() && !hidden {
            self.write(record.name)?;
            return self.write("{}");
        }

        self.write(record.name)?;
        self.write(" {")?;
        let depth = self.nest();
        for (name, value) in record.visible() {
            self.write_indent()?;
            self.write(name)?;
            self.write(": ")?;
            walk(self, value)?;
        }
        if hidden {
            self.write_indent()?;
            self.write(ELLIPSIS)?;
        }
        self.unnest(depth);
        self.write_indent()?;
        self.write("}")
    }

    fn map(&mut self, map: &Map<'_>) -> Result<(), RenderError> {
        self.write(map.name)?;
        self.write(" {")?;
        let depth = self.nest();
        for (key, value) in &map.entries {
            self.write_indent()?;
            walk(self, *key)?;
            self.write(": ")?;
            walk(self, *value)?;
        }
        self.unnest(depth);
        self.write_indent()?;
        self.write("}")
    }
}
