//! Pretty-printer for arbitrary values.
//!
//! Produces a lightweight, Go-syntax-like rendering that elides most type
//! information, keeping only record and map names. The intent is to show a
//! data structure, such as a syntax tree, without clutter. The same traversal
//! also renders Graphviz `dot` graphs.
//!
//! Values describe their structure through [`Inspect`]; `#[derive(Inspect)]`
//! covers structs and enums, and the standard containers and pointers are
//! implemented here.
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//!
//! #[derive(pp::Inspect)]
//! struct T {
//!     pub x: Option<Rc<RefCell<T>>>,
//! }
//!
//! let t = Rc::new(RefCell::new(T { x: None }));
//! t.borrow_mut().x = Some(t.clone());
//!
//! // Passed through the pointer, the first revisit is a cycle.
//! assert_eq!(pp::to_string(&t), "T {\n\tx: <cycle>\n}");
//!
//! // A copy of the record is not on the cycle, so it prints one level deeper.
//! let copy = T { x: t.borrow().x.clone() };
//! assert_eq!(pp::to_string(&copy), "T {\n\tx: T {\n\t\tx: <cycle>\n\t}\n}");
//! # t.borrow_mut().x = None;
//! ```
//!
//! # Text and graph semantics
//!
//! The text renderer only prunes cycles: a value shared by two fields is
//! printed under both. The graph renderer remembers every reference target for
//! the whole call and draws shared values as a single node.

extern crate self as pp;

pub mod config;
pub mod error;
pub mod inspect;
pub mod leaf;
mod order;
pub mod printer;
mod render;
pub mod shape;

use std::io::Write;

pub use config::Config;
pub use error::RenderError;
pub use inspect::{Function, Inspect, Stringify};
pub use printer::Printer;
pub use shape::{Complex, Field, Identity, Map, Record, Reference, Sequence, Shape, Target};

#[cfg(feature = "derive")]
pub use pp_derive::Inspect;

/// Writes the text rendering of `value` to `out` with the default indent.
pub fn fprint<T: Inspect + ?Sized>(out: &mut dyn Write, value: &T) -> Result<(), RenderError> {
    Printer::new().fprint(out, value)
}

/// Writes the text rendering of `value` to stdout.
pub fn print<T: Inspect + ?Sized>(value: &T) -> Result<(), RenderError> {
    Printer::new().print(value)
}

/// Text rendering of `value`.
pub fn to_string<T: Inspect + ?Sized>(value: &T) -> String {
    Printer::new().to_string(value)
}

/// Writes the Graphviz `digraph` rendering of `value` to `out`.
pub fn fdot<T: Inspect + ?Sized>(out: &mut dyn Write, value: &T) -> Result<(), RenderError> {
    Printer::new().fdot(out, value)
}

/// Graphviz `digraph` rendering of `value`.
pub fn dot_string<T: Inspect + ?Sized>(value: &T) -> String {
    Printer::new().dot_string(value)
}
