//! The capability query every renderable value answers.
//!
//! A type opts into pretty-printing by describing its [`Shape`]; the renderers
//! do the rest. Most user types get this from `#[derive(Inspect)]`; standard
//! library types are covered here.

use std::{borrow::Cow, fmt};

use crate::shape::Shape;

mod impls;
mod json;

/// Structural description of a value for the pretty-printers.
pub trait Inspect {
    /// Classifies the value. Called again on every visit, so it should be
    /// cheap and must not mutate anything.
    fn shape(&self) -> Shape<'_>;

    /// Custom rendering, used verbatim instead of [`Inspect::shape`].
    ///
    /// Takes precedence over every structural rule, cycle detection included,
    /// so implementations must not render themselves recursively.
    fn pretty_print(&self) -> Option<String> {
        None
    }
}

/// Renders the wrapped value with its [`fmt::Display`] output.
///
/// ```
/// use std::net::Ipv4Addr;
///
/// let addr = pp::Stringify(Ipv4Addr::LOCALHOST);
/// assert_eq!(pp::to_string(&addr), "127.0.0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Stringify<T>(pub T);

impl<T: fmt::Display> Inspect for Stringify<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(Cow::Owned(self.0.to_string()))
    }

    fn pretty_print(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Marks any value as a callable; rendered as `<function>`.
#[derive(Clone, Copy, Default)]
pub struct Function<F>(pub F);

impl<F> Inspect for Function<F> {
    fn shape(&self) -> Shape<'_> {
        Shape::Func
    }
}

/// Implements [`Inspect`] for types through their [`fmt::Display`] output.
///
/// ```
/// struct Celsius(f64);
///
/// impl std::fmt::Display for Celsius {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}°C", self.0)
///     }
/// }
///
/// pp::inspect_display!(Celsius);
///
/// assert_eq!(pp::to_string(&Celsius(21.5)), "21.5°C");
/// ```
#[macro_export]
macro_rules! inspect_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Inspect for $ty {
                fn shape(&self) -> $crate::Shape<'_> {
                    $crate::Shape::Str(::std::borrow::Cow::Owned(::std::string::ToString::to_string(self)))
                }

                fn pretty_print(&self) -> ::std::option::Option<::std::string::String> {
                    ::std::option::Option::Some(::std::string::ToString::to_string(self))
                }
            }
        )+
    };
}
