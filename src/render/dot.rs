use std::{collections::HashMap, io::Write};

use log::trace;

use super::{Render, walk, text::TextRenderer};
use crate::{
    error::RenderError,
    inspect::Inspect,
    leaf::{quote, short_type_name},
    shape::{Identity, Map, Record, Sequence},
};

/// Graphviz `digraph` renderer.
///
/// Unlike the text renderer, every reference target is remembered for the
/// whole call: a value reachable along several paths becomes a single node
/// with several incoming edges, and cycles close back onto existing nodes.
pub(crate) struct DotRenderer<'w> {
    out: &'w mut dyn Write,
    next: usize,
    seen: HashMap<Identity, usize>,
}

impl<'w> DotRenderer<'w> {
    pub(crate) fn new(out: &'w mut dyn Write) -> Self {
        Self {
            out,
            next: 0,
            seen: HashMap::new(),
        }
    }

    pub(crate) fn render<V: Inspect + ?Sized>(&mut self, value: &V) -> Result<(), RenderError> {
        self.out.write_all(b"digraph {\n")?;
        walk(self, value)?;
        self.out.write_all(b"}")?;
        Ok(())
    }

    fn node(&mut self, label: &str) -> Result<usize, RenderError> {
        let id = self.next;
        self.next += 1;
        writeln!(self.out, "\tn{} [label={}]", id, quote(label))?;
        Ok(id)
    }

    fn edge(&mut self, src: usize, dst: usize, label: Option<&str>) -> Result<(), RenderError> {
        match label {
            Some(label) => writeln!(self.out, "\tn{} -> n{} [label={}]", src, dst, quote(label))?,
            None => writeln!(self.out, "\tn{} -> n{}", src, dst)?,
        }
        Ok(())
    }
}

impl Render for DotRenderer<'_> {
    type Node = usize;

    fn leaf(&mut self, text: &str) -> Result<usize, RenderError> {
        self.node(text)
    }

    fn enter(&mut self, identity: Identity) -> Result<Option<usize>, RenderError> {
        if let Some(&id) = self.seen.get(&identity) {
            if id < self.next {
                trace!("reusing node n{} for {:#x}", id, identity.addr());
                return Ok(Some(id));
            }
            // Back at a reserved id before any node was declared for it: the
            // references loop onto themselves with nothing in between.
            trace!("empty reference loop at {:#x}", identity.addr());
            return self.node("<cycle>").map(Some);
        }
        // The target's first node takes the next id, so a cycle back to it
        // resolves before the node is finished.
        self.seen.insert(identity, self.next);
        Ok(None)
    }

    fn leave(&mut self, identity: Identity, node: &usize) {
        // Differs from the reserved id only when the target was itself a
        // reference to an already seen value.
        self.seen.insert(identity, *node);
    }

    fn sequence(&mut self, sequence: &Sequence<'_>) -> Result<usize, RenderError> {
        let id = self.node(&format!("{}[]", short_type_name(sequence.elem)))?;
        for item in &sequence.items {
            let child = walk(self, *item)?;
            self.edge(id, child, None)?;
        }
        Ok(id)
    }

    fn record(&mut self, record: &Record<'_>) -> Result<usize, RenderError> {
        let id = self.node(record.name)?;
        for (name, value) in record.visible() {
            let child = walk(self, value)?;
            self.edge(id, child, Some(name))?;
        }
        Ok(id)
    }

    fn map(&mut self, map: &Map<'_>) -> Result<usize, RenderError> {
        let id = self.node(map.name)?;
        for (key, value) in &map.entries {
            let label = key_label(*key)?;
            let child = walk(self, *value)?;
            self.edge(id, child, Some(&label))?;
        }
        Ok(id)
    }
}

/// Keys label edges with their text rendering.
fn key_label(key: &dyn Inspect) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    TextRenderer::new(&mut buf, "\t").render(key)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
