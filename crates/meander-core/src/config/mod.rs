//! Configuration for pattern rendering and scrolling
//!
//! Settings can be built programmatically through the `with_*` setters or
//! loaded from a YAML file. Every field has a default, so an empty file is a
//! valid configuration.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;

#[cfg(test)]
mod tests;

use crate::errors::Result;
use std::path::Path;

/// Load a configuration from a YAML file
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<MeanderConfig> {
    ConfigLoader::from_file(path).await
}
