//! `ConformField` for std types.

use std::collections::{BTreeMap, HashMap, VecDeque};

use super::ConformField;
use crate::registry::Registry;
use crate::transform::Chain;

impl ConformField for String {
    fn conform_field(&mut self, chain: Option<&Chain>, registry: &Registry) {
        if let Some(chain) = chain {
            log::trace!("Applying '{}'", chain);
            let conformed = chain.apply(self, registry);
            *self = conformed;
        }
    }
}

// Option<String> is the nullable string: None is never dereferenced.
impl<T: ConformField> ConformField for Option<T> {
    fn conform_field(&mut self, chain: Option<&Chain>, registry: &Registry) {
        if let Some(inner) = self {
            inner.conform_field(chain, registry);
        }
    }

    fn conform_element(&mut self, chain: Option<&Chain>, registry: &Registry) {
        if let Some(inner) = self {
            inner.conform_element(chain, registry);
        }
    }

    fn conform_nested(&mut self, registry: &Registry) {
        if let Some(inner) = self {
            inner.conform_nested(registry);
        }
    }
}

impl<T: ConformField + ?Sized> ConformField for Box<T> {
    fn conform_field(&mut self, chain: Option<&Chain>, registry: &Registry) {
        (**self).conform_field(chain, registry);
    }

    fn conform_element(&mut self, chain: Option<&Chain>, registry: &Registry) {
        (**self).conform_element(chain, registry);
    }

    fn conform_nested(&mut self, registry: &Registry) {
        (**self).conform_nested(registry);
    }
}

// =============================================================================
// Sequences
// =============================================================================

impl<T: ConformField> ConformField for [T] {
    fn conform_field(&mut self, chain: Option<&Chain>, registry: &Registry) {
        for element in self.iter_mut() {
            element.conform_element(chain, registry);
        }
    }

    fn conform_nested(&mut self, registry: &Registry) {
        for element in self.iter_mut() {
            element.conform_nested(registry);
        }
    }
}

impl<T: ConformField> ConformField for Vec<T> {
    fn conform_field(&mut self, chain: Option<&Chain>, registry: &Registry) {
        self.as_mut_slice().conform_field(chain, registry);
    }

    fn conform_nested(&mut self, registry: &Registry) {
        self.as_mut_slice().conform_nested(registry);
    }
}

impl<T: ConformField, const N: usize> ConformField for [T; N] {
    fn conform_field(&mut self, chain: Option<&Chain>, registry: &Registry) {
        self.as_mut_slice().conform_field(chain, registry);
    }

    fn conform_nested(&mut self, registry: &Registry) {
        self.as_mut_slice().conform_nested(registry);
    }
}

impl<T: ConformField> ConformField for VecDeque<T> {
    fn conform_field(&mut self, chain: Option<&Chain>, registry: &Registry) {
        for element in self.iter_mut() {
            element.conform_element(chain, registry);
        }
    }

    fn conform_nested(&mut self, registry: &Registry) {
        for element in self.iter_mut() {
            element.conform_nested(registry);
        }
    }
}

// =============================================================================
// Mappings
// =============================================================================

// Values are rewritten in place; keys are never touched.
impl<K, V: ConformField, S> ConformField for HashMap<K, V, S> {
    fn conform_field(&mut self, _chain: Option<&Chain>, registry: &Registry) {
        self.conform_nested(registry);
    }

    fn conform_nested(&mut self, registry: &Registry) {
        for value in self.values_mut() {
            value.conform_nested(registry);
        }
    }
}

impl<K, V: ConformField> ConformField for BTreeMap<K, V> {
    fn conform_field(&mut self, _chain: Option<&Chain>, registry: &Registry) {
        self.conform_nested(registry);
    }

    fn conform_nested(&mut self, registry: &Registry) {
        for value in self.values_mut() {
            value.conform_nested(registry);
        }
    }
}

// =============================================================================
// Ignored kinds
// =============================================================================

macro_rules! ignored_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ConformField for $ty {
                fn conform_field(&mut self, _chain: Option<&Chain>, _registry: &Registry) {}
            }
        )*
    };
}

ignored_fields!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
