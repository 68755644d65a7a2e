//! Request-level rules that sit between handlers and the store.

mod validation;
pub use validation::RequestValidator;
