//! Application composition root and shared state.

mod bootstrap;
mod config_service;
mod paths;
mod state;

pub use bootstrap::{bootstrap, AppBootstrap};
pub use paths::StickyPaths;
pub use state::AppState;
