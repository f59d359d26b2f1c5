//! Derive macro for `pp::Inspect`.

use proc_macro::TokenStream;

mod inspect;

/// Derives `pp::Inspect`.
///
/// Structs render as records named after the type; enums as records named
/// `Enum::Variant`. Tuple fields are named `0`, `1`, ... Fields that are not
/// `pub` are hidden and show up as a single `…` line.
///
/// # Attributes
///
/// - `#[inspect(skip)]` on a field: hide it even if it is `pub`.
/// - `#[inspect(rename = "name")]` on a field: use another member name.
/// - `#[inspect(display)]` on the type: render with its `Display` output.
///
/// # Example
///
/// ```ignore
/// #[derive(Inspect)]
/// pub struct Node {
///     pub value: i64,
///     pub children: Vec<Node>,
///     cached_height: usize,
/// }
/// ```
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    inspect::derive_inspect_impl(input)
}
