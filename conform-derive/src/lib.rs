//! Derive macro for `conform::Conform`.
//!
//! Generates the field walker of a struct from its `#[conform(...)]`
//! attributes:
//! * `#[conform("trim,lower")]` on a field - annotation applied to the field
//! * `#[conform(skip)]` on a field - field never visited
//! * `#[conform(wrapped)]` on the struct - wrapped scalar: an annotated field
//!   of this type applies the annotation to its single `String` member

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Attribute parsing.
mod attr;
/// Code generation.
mod expand;

/// Derives `Conform` and `ConformField` for a struct.
///
/// ```ignore
/// #[derive(Conform)]
/// struct Signup {
///     #[conform("trim,email")]
///     email: String,
///     #[conform("trim,name")]
///     name: Option<String>,
///     address: Address,
///     #[conform(skip)]
///     created_at: SystemTime,
/// }
/// ```
///
/// Every field that is neither annotated nor skipped is still visited
/// without an annotation, so nested records are walked recursively. Such
/// fields must implement `ConformField`.
#[proc_macro_derive(Conform, attributes(conform))]
pub fn derive_conform(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::derive_conform(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
