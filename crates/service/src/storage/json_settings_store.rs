use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tracing::debug;

use crate::settings::{SettingsError, SettingsPort};

/// JSON file-backed settings store.
///
/// Holds a live `HashMap<String, String>` in memory and a durable copy in a
/// JSON file. `set_property` only touches the live map; `save_property`
/// rewrites the file through a temp file and rename, so readers of the file
/// never observe a half-written document.
pub struct JsonSettingsStore {
    live: RwLock<HashMap<String, String>>,
    durable: RwLock<HashMap<String, String>>,
    file_path: PathBuf,
}

impl JsonSettingsStore {
    /// Open the store at `path`. Creates the file with an empty map if missing.
    /// A file that is not a JSON string map is rejected.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, SettingsError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let map: HashMap<String, String> = match fs::read(&file_path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| SettingsError::Corrupt(format!("{}: {e}", file_path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty = HashMap::new();
                write_atomic(&file_path, &empty)?;
                empty
            }
            Err(e) => return Err(SettingsError::Io(e.to_string())),
        };
        debug!(path = %file_path.display(), keys = map.len(), "settings store opened");

        Ok(Arc::new(Self {
            live: RwLock::new(map.clone()),
            durable: RwLock::new(map),
            file_path,
        }))
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

fn write_atomic(path: &Path, map: &HashMap<String, String>) -> Result<(), SettingsError> {
    let data = serde_json::to_vec_pretty(map).map_err(|e| SettingsError::Io(e.to_string()))?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, data).map_err(|e| SettingsError::Io(e.to_string()))?;
    fs::rename(&tmp, path).map_err(|e| SettingsError::Io(e.to_string()))?;
    Ok(())
}

impl SettingsPort for JsonSettingsStore {
    fn get_string(&self, key: &str) -> Option<String> {
        let map = self.live.read().unwrap_or_else(|e| e.into_inner());
        map.get(key).cloned()
    }

    fn set_property(&self, key: &str, value: &str) {
        let mut map = self.live.write().unwrap_or_else(|e| e.into_inner());
        map.insert(key.to_string(), value.to_string());
    }

    fn save_property(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut map = self.durable.write().unwrap_or_else(|e| e.into_inner());
        let previous = map.insert(key.to_string(), value.to_string());
        if let Err(e) = write_atomic(&self.file_path, &map) {
            // keep the in-memory durable copy equal to what is on disk
            match previous {
                Some(v) => map.insert(key.to_string(), v),
                None => map.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
