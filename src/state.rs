//! Shared application state for all routes.

use crate::store::TodoStore;

/// Holds only the store's connection settings; there is no in-process cache or shared
/// mutable data, so cloning per request is cheap.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: TodoStore,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }
}
