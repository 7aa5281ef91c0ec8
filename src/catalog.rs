use crate::error::{Result, ResultExt};
use errcopy::{Classifier, MessageCatalog};
use std::path::Path;
use tracing::debug;

/// Catalog picked up from the working directory when `--config` is not given
pub const DEFAULT_CATALOG_FILE: &str = "errcopy.toml";

/// Build a classifier from an explicit catalog, the local default file, or
/// the built-in copy, in that order
pub fn load_classifier(config: Option<&str>) -> Result<Classifier> {
    let path = match config {
        Some(path) => Path::new(path),
        None if Path::new(DEFAULT_CATALOG_FILE).exists() => Path::new(DEFAULT_CATALOG_FILE),
        None => {
            debug!("Using built-in message catalog");
            return Ok(Classifier::default());
        }
    };

    debug!(path = %path.display(), "Loading message catalog");
    let catalog = MessageCatalog::load(path)
        .with_context(|| "Could not use message catalog")?;
    Ok(Classifier::new(catalog))
}
