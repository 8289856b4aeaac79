// src/config/mod.rs

//! Optional `Runcmd.toml` configuration: runner defaults only.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, DefaultSection};
