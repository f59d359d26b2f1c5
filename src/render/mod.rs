//! Text and graph renderers over one shared traversal.
//!
//! [`walk`] classifies one value and calls back into a [`Render`]
//! implementation. Renderers recurse by calling [`walk`] on children, so the
//! traversal stays depth-first and streams straight into the sink.

pub(crate) mod dot;
pub(crate) mod text;

use crate::{
    error::RenderError,
    inspect::Inspect,
    leaf, order,
    shape::{Identity, Map, Record, Reference, Sequence, Shape, Target},
};

/// Callbacks a renderer provides for each shape class.
pub(crate) trait Render {
    /// What a rendered value evaluates to (unit for text, a node id for
    /// graphs).
    type Node;

    /// Scalar, placeholder, custom text or `nil`.
    fn leaf(&mut self, text: &str) -> Result<Self::Node, RenderError>;

    /// About to follow a reference with this identity. Returning a node stops
    /// the traversal of that branch.
    fn enter(&mut self, identity: Identity) -> Result<Option<Self::Node>, RenderError>;

    /// The reference entered with [`Render::enter`] rendered as `node`.
    fn leave(&mut self, identity: Identity, node: &Self::Node);

    fn sequence(&mut self, sequence: &Sequence<'_>) -> Result<Self::Node, RenderError>;

    fn record(&mut self, record: &Record<'_>) -> Result<Self::Node, RenderError>;

    /// Entries arrive sorted by key.
    fn map(&mut self, map: &Map<'_>) -> Result<Self::Node, RenderError>;
}

/// Renders one value. A custom rendering wins over everything else.
pub(crate) fn walk<R, V>(renderer: &mut R, value: &V) -> Result<R::Node, RenderError>
where
    R: Render + ?Sized,
    V: Inspect + ?Sized,
{
    if let Some(text) = value.pretty_print() {
        return renderer.leaf(&text);
    }
    walk_shape(renderer, value.shape())
}

fn walk_shape<R: Render + ?Sized>(
    renderer: &mut R,
    shape: Shape<'_>,
) -> Result<R::Node, RenderError> {
    match shape {
        Shape::Invalid => renderer.leaf("nil"),
        Shape::Bool(b) => renderer.leaf(if b { "true" } else { "false" }),
        Shape::Int(i) => renderer.leaf(&i.to_string()),
        Shape::Uint(u) => renderer.leaf(&u.to_string()),
        Shape::Float(f) => renderer.leaf(&leaf::format_float(f)),
        Shape::Complex(c) => renderer.leaf(&leaf::format_complex(c)),
        Shape::Str(s) => renderer.leaf(&leaf::quote(&s)),
        Shape::Sequence(sequence) => renderer.sequence(&sequence),
        Shape::Reference(reference) => walk_reference(renderer, reference),
        Shape::Record(record) => renderer.record(&record),
        Shape::Map(mut map) => {
            order::sort_entries(&mut map.entries);
            renderer.map(&map)
        }
        Shape::Chan => renderer.leaf("<chan>"),
        Shape::Func => renderer.leaf("<function>"),
        Shape::UnsafePointer => renderer.leaf("<unsafe pointer>"),
    }
}

fn walk_reference<R: Render + ?Sized>(
    renderer: &mut R,
    reference: Reference<'_>,
) -> Result<R::Node, RenderError> {
    let Some(target) = reference.target else {
        return renderer.leaf("nil");
    };
    let Some(identity) = reference.identity else {
        return walk_target(renderer, target);
    };
    if let Some(node) = renderer.enter(identity)? {
        return Ok(node);
    }
    let node = walk_target(renderer, target)?;
    renderer.leave(identity, &node);
    Ok(node)
}

fn walk_target<R: Render + ?Sized>(
    renderer: &mut R,
    target: Target<'_>,
) -> Result<R::Node, RenderError> {
    match target {
        Target::Borrowed(value) => walk(renderer, value),
        Target::Guard(guard) => walk(renderer, &*guard),
        Target::Rc(rc) => walk(renderer, &*rc),
        Target::Arc(arc) => walk(renderer, &*arc),
        Target::Custom(text) => renderer.leaf(&text),
        Target::Shape(shape) => walk_shape(renderer, *shape),
    }
}
