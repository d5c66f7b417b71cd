use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, Mutex};

use crate::catalog::{load_catalog, MealCatalog};
use crate::error::Result;

/// Catalogs already loaded in this process, keyed by source path.
static CATALOG_CACHE: LazyLock<Mutex<HashMap<PathBuf, Arc<MealCatalog>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Load a catalog once per process and hand out shared read-only copies.
pub fn load_cached<P: AsRef<Path>>(path: P) -> Result<Arc<MealCatalog>> {
    let path = path.as_ref().to_path_buf();
    let mut cache = CATALOG_CACHE.lock().unwrap_or_else(|e| e.into_inner());

    if let Some(catalog) = cache.get(&path) {
        return Ok(Arc::clone(catalog));
    }

    let catalog = Arc::new(load_catalog(&path)?);
    cache.insert(path, Arc::clone(&catalog));
    Ok(catalog)
}

/// Drop every cached catalog so the next load re-reads its source.
pub fn clear_cache() {
    CATALOG_CACHE
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .clear();
}
