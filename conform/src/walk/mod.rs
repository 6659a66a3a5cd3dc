//! Record walking.
//!
//! Records implement [`Conform`], normally through `#[derive(Conform)]`, which
//! visits every field in declaration order and hands it the field's parsed
//! annotation. Field types implement [`ConformField`] and decide what to do
//! with it:
//!
//! | field type | behavior |
//! |---|---|
//! | `String` | annotation applied |
//! | `Option<T>` | `None` untouched, `Some` dispatched to `T` |
//! | `Vec<T>`, `[T; N]`, `VecDeque<T>`, `Box<[T]>` | each element, in index order |
//! | `HashMap<K, V>`, `BTreeMap<K, V>` | each value walked as a nested record, keys untouched |
//! | derived record | walked recursively |
//! | `#[conform(wrapped)]` record | annotation applied to its single string |
//! | numbers, `bool`, `char` | ignored |
//!
//! Untyped JSON records are walked with a [`Schema`] instead.

mod executor;
mod impls;
pub mod schema;

pub use schema::{example_schema, FieldRule, Schema};

use crate::error::ConformResult;
use crate::registry::Registry;
use crate::transform::Chain;

/// A record whose annotated string fields can be normalized in place.
pub trait Conform {
    /// Normalize every annotated field, resolving extension directives
    /// against `registry`.
    fn conform(&mut self, registry: &Registry);
}

/// A value sitting in a record field, a sequence slot or a map entry.
pub trait ConformField {
    /// Visit the value as a record field carrying `chain` (or no annotation).
    fn conform_field(&mut self, chain: Option<&Chain>, registry: &Registry);

    /// Visit the value as an element of an annotated sequence.
    ///
    /// Strings take the sequence's annotation; records ignore it and recurse.
    fn conform_element(&mut self, chain: Option<&Chain>, registry: &Registry) {
        self.conform_field(chain, registry);
    }

    /// Visit the value as the value of a map entry: records recurse, bare
    /// strings have no annotation of their own and stay untouched.
    fn conform_nested(&mut self, registry: &Registry) {
        let _ = registry;
    }
}

impl<T: Conform + ?Sized> Conform for Box<T> {
    fn conform(&mut self, registry: &Registry) {
        (**self).conform(registry);
    }
}

/// Normalize a record in place using the process-wide registry.
///
/// A `&mut` reference always points at an addressable record, so the
/// structural [`crate::ConformError::NotAPointer`] cannot occur here; the
/// result type is shared with [`Schema::apply`].
pub fn apply<T: Conform + ?Sized>(record: &mut T) -> ConformResult<()> {
    apply_with(record, Registry::global())
}

/// Normalize a record in place using an explicit registry.
pub fn apply_with<T: Conform + ?Sized>(record: &mut T, registry: &Registry) -> ConformResult<()> {
    record.conform(registry);
    Ok(())
}
