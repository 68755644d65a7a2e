//! Route tables.

pub mod assets;
pub mod common;
pub mod todo;

pub use assets::asset_routes;
pub use common::common_routes;
pub use todo::todo_routes;
