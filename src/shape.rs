use std::{borrow::Cow, cell, rc::Rc, sync::Arc};

use crate::inspect::Inspect;

/// Structural classification of a value, as seen by the renderers.
///
/// Every [`Inspect`] implementation answers with exactly one shape. Composite
/// shapes borrow their children from the inspected value; nothing is copied.
pub enum Shape<'a> {
    /// No value at all. Renders as `nil`.
    Invalid,
    Bool(bool),
    /// Any signed integer width.
    Int(i128),
    /// Any unsigned integer width.
    Uint(u128),
    Float(f64),
    Complex(Complex),
    /// Text; rendered quoted and escaped.
    Str(Cow<'a, str>),
    Sequence(Sequence<'a>),
    Reference(Reference<'a>),
    Record(Record<'a>),
    Map(Map<'a>),
    /// Channel-like endpoint, rendered as `<chan>`.
    Chan,
    /// Callable, rendered as `<function>`.
    Func,
    /// Raw memory pointer, rendered as `<unsafe pointer>`.
    UnsafePointer,
}

impl Shape<'_> {
    /// Whether the shape has children.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Shape::Sequence(_) | Shape::Reference(_) | Shape::Record(_) | Shape::Map(_)
        )
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Invalid => "invalid",
            Shape::Bool(_) => "bool",
            Shape::Int(_) => "int",
            Shape::Uint(_) => "uint",
            Shape::Float(_) => "float",
            Shape::Complex(_) => "complex",
            Shape::Str(_) => "string",
            Shape::Sequence(_) => "sequence",
            Shape::Reference(_) => "reference",
            Shape::Record(_) => "record",
            Shape::Map(_) => "map",
            Shape::Chan => "chan",
            Shape::Func => "function",
            Shape::UnsafePointer => "unsafe pointer",
        }
    }
}

/// Complex number with `f64` parts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// Ordered run of elements, rendered in storage order.
pub struct Sequence<'a> {
    /// Full type name of the element type, as returned by
    /// [`std::any::type_name`]. The graph renderer shortens it for labels.
    pub elem: &'static str,
    pub items: Vec<&'a dyn Inspect>,
}

impl<'a> Sequence<'a> {
    pub fn new(elem: &'static str, items: Vec<&'a dyn Inspect>) -> Self {
        Self { elem, items }
    }

    /// Builds a sequence over any iterator of inspectable elements.
    pub fn of<T, I>(items: I) -> Self
    where
        T: Inspect + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Self {
            elem: std::any::type_name::<T>(),
            items: items.into_iter().map(|item| item as &dyn Inspect).collect(),
        }
    }
}

impl<'a> From<Sequence<'a>> for Shape<'a> {
    fn from(sequence: Sequence<'a>) -> Self {
        Shape::Sequence(sequence)
    }
}

/// Identity of the storage a reference points at.
///
/// Two identities are equal when they name the same address and the same
/// pointee type, so a struct and its first field never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    addr: usize,
    ty: &'static str,
}

impl Identity {
    /// Identity of the value behind `ptr`, or `None` for zero-sized values
    /// whose addresses are not unique.
    pub fn of<T: ?Sized>(ptr: &T) -> Option<Self> {
        if std::mem::size_of_val(ptr) == 0 {
            return None;
        }
        Some(Self {
            addr: ptr as *const T as *const () as usize,
            ty: std::any::type_name::<T>(),
        })
    }

    pub fn addr(&self) -> usize {
        self.addr
    }
}

/// What a present reference lends to the traversal.
pub enum Target<'a> {
    Borrowed(&'a dyn Inspect),
    /// Contents of a `RefCell`, kept borrowed for the duration of the visit.
    Guard(cell::Ref<'a, dyn Inspect + 'a>),
    /// Strong handle obtained by upgrading an `rc::Weak`.
    Rc(Rc<dyn Inspect + 'a>),
    /// Strong handle obtained by upgrading a `sync::Weak`.
    Arc(Arc<dyn Inspect + 'a>),
    /// Pointee that supplied its own rendering.
    Custom(String),
    /// Pointee classified up front. Used for unsized pointees such as `str`
    /// and slices, which cannot be lent as `&dyn Inspect`.
    Shape(Box<Shape<'a>>),
}

impl<'a> Target<'a> {
    /// Resolves `value` into a target without requiring it to be sized.
    /// The custom rendering is consulted first, as it would be during a walk.
    pub fn of<T: Inspect + ?Sized>(value: &'a T) -> Self {
        match value.pretty_print() {
            Some(text) => Target::Custom(text),
            None => Target::Shape(Box::new(value.shape())),
        }
    }

    fn is_leaf(&self) -> bool {
        match self {
            Target::Custom(_) => true,
            Target::Shape(shape) => !shape.is_composite(),
            _ => false,
        }
    }
}

/// Pointer, box, optional or cell: a transparent hop to another value.
pub struct Reference<'a> {
    /// `None` for optional wrappers and cells that share storage with their
    /// parent and therefore cannot close a cycle on their own.
    pub identity: Option<Identity>,
    /// `None` when the reference is absent (`nil`).
    pub target: Option<Target<'a>>,
}

impl<'a> Reference<'a> {
    pub fn absent() -> Self {
        Self {
            identity: None,
            target: None,
        }
    }

    /// A transparent hop without identity.
    pub fn to(target: &'a dyn Inspect) -> Self {
        Self {
            identity: None,
            target: Some(Target::Borrowed(target)),
        }
    }

    /// A pointer to `target`, keyed by the target's address.
    ///
    /// Pointers to leaves get no identity: a leaf cannot close a cycle, and
    /// equal literals may share storage.
    pub fn pointer<T: Inspect + ?Sized>(target: &'a T) -> Self {
        let resolved = Target::of(target);
        let identity = if resolved.is_leaf() {
            None
        } else {
            Identity::of(target)
        };
        Self {
            identity,
            target: Some(resolved),
        }
    }

    /// An owning pointer (`Box`, `Rc`, `Arc`) to `target`, keyed by the
    /// target's address. Unlike [`Reference::pointer`], leaves keep their
    /// identity, so a shared `Rc<String>` is one value.
    pub fn owned<T: Inspect + ?Sized>(target: &'a T) -> Self {
        Self {
            identity: Identity::of(target),
            target: Some(Target::of(target)),
        }
    }

    pub fn with_target(identity: Option<Identity>, target: Target<'a>) -> Self {
        Self {
            identity,
            target: Some(target),
        }
    }
}

impl<'a> From<Reference<'a>> for Shape<'a> {
    fn from(reference: Reference<'a>) -> Self {
        Shape::Reference(reference)
    }
}

/// One member of a [`Record`].
pub struct Field<'a> {
    pub name: &'a str,
    /// `None` when the member is hidden; hidden members are elided.
    pub value: Option<&'a dyn Inspect>,
}

impl Field<'_> {
    pub fn is_hidden(&self) -> bool {
        self.value.is_none()
    }
}

/// Struct-like value with named members in declaration order.
///
/// ```
/// use pp::{Inspect, Record, Shape};
///
/// struct Point {
///     x: i32,
///     y: i32,
///     cache: Vec<u8>,
/// }
///
/// impl Inspect for Point {
///     fn shape(&self) -> Shape<'_> {
///         Record::new("Point")
///             .field("x", &self.x)
///             .field("y", &self.y)
///             .hidden("cache")
///             .into()
///     }
/// }
///
/// let p = Point { x: 1, y: 2, cache: vec![] };
/// assert_eq!(pp::to_string(&p), "Point {\n\tx: 1\n\ty: 2\n\t…\n}");
/// ```
pub struct Record<'a> {
    pub name: &'a str,
    pub fields: Vec<Field<'a>>,
}

impl<'a> Record<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &'a str, value: &'a dyn Inspect) -> Self {
        self.fields.push(Field {
            name,
            value: Some(value),
        });
        self
    }

    pub fn hidden(mut self, name: &'a str) -> Self {
        self.fields.push(Field { name, value: None });
        self
    }

    pub fn visible(&self) -> impl Iterator<Item = (&'a str, &'a dyn Inspect)> + '_ {
        self.fields
            .iter()
            .filter_map(|field| field.value.map(|value| (field.name, value)))
    }

    pub fn has_hidden(&self) -> bool {
        self.fields.iter().any(Field::is_hidden)
    }
}

impl<'a> From<Record<'a>> for Shape<'a> {
    fn from(record: Record<'a>) -> Self {
        Shape::Record(record)
    }
}

/// Associative container. Entries may be given in any order; the engine sorts
/// them by key before rendering.
pub struct Map<'a> {
    pub name: &'a str,
    pub entries: Vec<(&'a dyn Inspect, &'a dyn Inspect)>,
}

impl<'a> Map<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, key: &'a dyn Inspect, value: &'a dyn Inspect) -> Self {
        self.entries.push((key, value));
        self
    }

    pub fn of<K, V, I>(name: &'a str, entries: I) -> Self
    where
        K: Inspect + 'a,
        V: Inspect + 'a,
        I: IntoIterator<Item = (&'a K, &'a V)>,
    {
        Self {
            name,
            entries: entries
                .into_iter()
                .map(|(k, v)| (k as &dyn Inspect, v as &dyn Inspect))
                .collect(),
        }
    }
}

impl<'a> From<Map<'a>> for Shape<'a> {
    fn from(map: Map<'a>) -> Self {
        Shape::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_distinguishes_pointee_types() {
        #[repr(C)]
        struct Outer {
            first: u64,
        }
        let outer = Outer { first: 7 };
        let a = Identity::of(&outer).map(|id| id.addr());
        let b = Identity::of(&outer.first).map(|id| id.addr());
        assert_eq!(a, b);
        assert_ne!(Identity::of(&outer), Identity::of(&outer.first));
    }

    #[test]
    fn zero_sized_values_have_no_identity() {
        assert_eq!(Identity::of(&()), None);
        let empty: [u8; 0] = [];
        assert_eq!(Identity::of(&empty), None);
    }

    #[test]
    fn record_tracks_hidden_members() {
        let x = 1;
        let record = Record::new("T").field("x", &x).hidden("y");
        assert!(record.has_hidden());
        assert_eq!(record.visible().count(), 1);
        assert_eq!(record.fields.len(), 2);
    }
}
