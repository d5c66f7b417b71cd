use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::UserConstraints;

/// Load user profiles from a JSON object keyed by user id.
///
/// A missing file is treated as an empty store.
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, UserConstraints>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save user profiles as pretty-printed JSON.
pub fn save_profiles<P: AsRef<Path>>(
    path: P,
    profiles: &BTreeMap<String, UserConstraints>,
) -> Result<()> {
    let json = serde_json::to_string_pretty(profiles)?;
    fs::write(path, json)?;
    Ok(())
}
