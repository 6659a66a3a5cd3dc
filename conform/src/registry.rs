//! Extension Registry - caller-supplied transforms looked up by directive name
//!
//! Directives that are not built in are resolved against a [`Registry`].
//! A process-wide instance backs [`register_transform`] and the
//! convenience entry points; explicit registries can be built and passed to
//! [`crate::apply_with`] when a scoped table is preferable.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::transform::Chain;

/// A registered transform.
pub type TransformFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Process-wide registry, empty at start-up.
static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Table of extension transforms (name -> function)
///
/// Lookups take a shared lock, registration an exclusive one. The function is
/// cloned out of the table before it runs, so a transform may register other
/// transforms without deadlocking.
#[derive(Default)]
pub struct Registry {
    transforms: RwLock<HashMap<String, TransformFn>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry
    pub fn global() -> &'static Registry {
        &GLOBAL_REGISTRY
    }

    /// Register `transform` under `name`, replacing any previous entry
    pub fn register<F>(&self, name: impl Into<String>, transform: F)
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let name = name.into();
        log::debug!("Registering transform '{}'", name);
        self.transforms.write().insert(name, Arc::new(transform));
    }

    /// Look up a transform by exact name
    pub fn get(&self, name: &str) -> Option<TransformFn> {
        self.transforms.read().get(name).cloned()
    }

    /// Whether a transform is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.transforms.read().contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.transforms.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.transforms.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.read().is_empty()
    }

    /// Apply a comma-separated directive list to `input`, resolving
    /// extensions against this registry
    pub fn transform_chain(&self, input: &str, directives: &str) -> String {
        Chain::parse(directives).apply(input, self)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("transforms", &self.names())
            .finish()
    }
}

/// Register a transform in the process-wide registry.
///
/// Registering the same name twice replaces the earlier function.
pub fn register_transform<F>(name: impl Into<String>, transform: F)
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    Registry::global().register(name, transform);
}
