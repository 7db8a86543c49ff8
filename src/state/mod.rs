//! Process-wide state: the generic record store, the record type it holds,
//! and the `AppState` handed to every route.

pub mod app;
pub mod item;
pub mod store;

pub use app::{AppState, ItemStore};

#[cfg(test)]
mod tests;
