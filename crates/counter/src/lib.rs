pub mod aggregate;
pub mod cache;
pub mod collector;
pub mod config;
pub mod directory;
pub mod discovery;
pub mod window;

#[cfg(test)]
pub mod testutil;

pub use aggregate::{run_cycle, DataNode};
pub use cache::ResultCache;
pub use config::Settings;
pub use window::ActivityWindow;
