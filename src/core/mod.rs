//! Business logic: error types, pure services and the stateful transaction store.

pub mod errors;
pub mod services;
pub mod transaction_store;
pub mod utils;
