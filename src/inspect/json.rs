//! JSON documents, so anything serde can serialize can also be inspected by
//! going through `serde_json::to_value`.

use std::borrow::Cow;

use serde_json::Value;

use super::Inspect;
use crate::shape::{Map, Sequence, Shape};

impl Inspect for Value {
    fn shape(&self) -> Shape<'_> {
        match self {
            Value::Null => Shape::Invalid,
            Value::Bool(b) => Shape::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Shape::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Shape::Uint(u128::from(u))
                } else {
                    Shape::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Shape::Str(Cow::Borrowed(s)),
            Value::Array(items) => Sequence::of(items).into(),
            Value::Object(object) => Map::of("Object", object).into(),
        }
    }
}
