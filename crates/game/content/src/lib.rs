//! Data-driven tuning for the brawler.
//!
//! Every gameplay number has a compiled-in default in [`brawl_core::GameConfig`].
//! This crate reads overrides from TOML or RON files so balance changes never
//! need a rebuild:
//! - game tuning (`config.toml` / `config.ron`)
//! - any other serde section a host wants to keep next to it, such as the
//!   runtime's session settings
//!
//! Loaded values are validated before they are handed out.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigFormat, ConfigLoader, ContentFactory, LoadResult};
