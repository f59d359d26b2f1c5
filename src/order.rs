//! Deterministic ordering for map keys and unordered set elements.
//!
//! Booleans sort false before true, numbers by value regardless of their
//! signedness or width, strings by code point. Mixed classes sort in that
//! order; any other key shape sorts last and keeps its storage order.

use std::cmp::Ordering;

use crate::{
    inspect::Inspect,
    shape::{Shape, Target},
};

#[derive(Debug, Clone)]
enum SortKey {
    Bool(bool),
    Number(Number),
    Str(String),
    Other,
}

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i128),
    Uint(u128),
    Float(f64),
}

impl SortKey {
    fn of(value: &dyn Inspect) -> Self {
        if let Some(text) = value.pretty_print() {
            return SortKey::Str(text);
        }
        Self::of_shape(value.shape())
    }

    fn of_shape(shape: Shape<'_>) -> Self {
        match shape {
            Shape::Bool(b) => SortKey::Bool(b),
            Shape::Int(i) => SortKey::Number(Number::Int(i)),
            Shape::Uint(u) => SortKey::Number(Number::Uint(u)),
            Shape::Float(f) => SortKey::Number(Number::Float(f)),
            Shape::Str(s) => SortKey::Str(s.into_owned()),
            // Keys behind pointers order by what they point at.
            Shape::Reference(reference) => match reference.target {
                Some(Target::Borrowed(value)) => Self::of(value),
                Some(Target::Guard(guard)) => Self::of(&*guard),
                Some(Target::Rc(rc)) => Self::of(&*rc),
                Some(Target::Arc(arc)) => Self::of(&*arc),
                Some(Target::Custom(text)) => SortKey::Str(text),
                Some(Target::Shape(shape)) => Self::of_shape(*shape),
                None => SortKey::Other,
            },
            _ => SortKey::Other,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Bool(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Str(_) => 2,
            SortKey::Other => 3,
        }
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (Number::Uint(a), Number::Uint(b)) => a.cmp(&b),
            (Number::Int(a), Number::Uint(b)) => match u128::try_from(a) {
                Ok(a) => a.cmp(&b),
                Err(_) => Ordering::Less,
            },
            (Number::Uint(_), Number::Int(_)) => other.cmp(self).reverse(),
            (Number::Float(a), Number::Float(b)) => compare_floats(a, b),
            (Number::Int(a), Number::Float(b)) => compare_int_float(a, b),
            (Number::Uint(a), Number::Float(b)) => compare_uint_float(a, b),
            (Number::Float(_), _) => other.cmp(self).reverse(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

/// 2^127 and 2^128, both exact in `f64`.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
const U128_BOUND: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// NaN sorts after every number; `-0.0` equals `0.0`.
fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison: the float's integral part is compared as an integer and
/// its fraction breaks ties, so no precision is lost above 2^53.
fn compare_int_float(int: i128, float: f64) -> Ordering {
    if float.is_nan() || float >= I128_BOUND {
        return Ordering::Less;
    }
    if float < -I128_BOUND {
        return Ordering::Greater;
    }
    let whole = float.trunc();
    int.cmp(&(whole as i128))
        .then_with(|| compare_floats(whole, float))
}

fn compare_uint_float(uint: u128, float: f64) -> Ordering {
    if float.is_nan() || float >= U128_BOUND {
        return Ordering::Less;
    }
    if float < 0.0 {
        return Ordering::Greater;
    }
    let whole = float.trunc();
    uint.cmp(&(whole as u128))
        .then_with(|| compare_floats(whole, float))
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.cmp(b),
            (SortKey::Str(a), SortKey::Str(b)) => a.cmp(b),
            (SortKey::Other, SortKey::Other) => Ordering::Equal,
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

/// Sorts map entries by key. Stable, so keys without a defined order keep
/// their storage order.
pub(crate) fn sort_entries<'a>(entries: &mut [(&'a dyn Inspect, &'a dyn Inspect)]) {
    let mut keyed: Vec<(SortKey, (&'a dyn Inspect, &'a dyn Inspect))> = entries
        .iter()
        .map(|&(key, value)| (SortKey::of(key), (key, value)))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    for (slot, (_, entry)) in entries.iter_mut().zip(keyed) {
        *slot = entry;
    }
}

/// Sorts the elements of an unordered collection with the key order.
pub(crate) fn sort_values<'a>(values: &mut [&'a dyn Inspect]) {
    let mut keyed: Vec<(SortKey, &'a dyn Inspect)> =
        values.iter().map(|&value| (SortKey::of(value), value)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    for (slot, (_, value)) in values.iter_mut().zip(keyed) {
        *slot = value;
    }
}
