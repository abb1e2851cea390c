use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// File name of the user store inside the repository metadata directory.
pub const STORE_FILE_NAME: &str = "git-users.json";

/// Return the store path for a given metadata directory.
#[must_use]
pub fn store_path(git_dir: &Path) -> PathBuf {
    git_dir.join(STORE_FILE_NAME)
}

/// One saved identity. The display name is the key in [`UserStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    /// Optional credential placeholder, stored as plain text (`null` when skipped).
    #[serde(default)]
    pub password: Option<String>,
}

impl UserRecord {
    pub fn new(email: impl Into<String>, password: Option<String>) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }
}

/// Name → record mapping persisted as a JSON object.
///
/// Entries keep insertion order so that the numbered listing shown to the user
/// matches the order in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStore {
    path: PathBuf,
    users: IndexMap<String, UserRecord>,
}

impl UserStore {
    /// An empty store that will be written to `path` on the next save.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            users: IndexMap::new(),
        }
    }

    /// Load the store from `path`.
    ///
    /// A missing file yields an empty store. So does a file that is not a JSON
    /// object of `{ "email": .., "password": .. }` records; its content is
    /// discarded and will be overwritten by the next save.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no user store yet");
                return Ok(Self::empty(path));
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        let users = match serde_json::from_slice::<IndexMap<String, UserRecord>>(&bytes) {
            Ok(users) => users,
            Err(e) => {
                info!(path = %path.display(), error = %e, "discarding unreadable user store");
                IndexMap::new()
            }
        };
        debug!(path = %path.display(), count = users.len(), "loaded user store");

        Ok(Self { path, users })
    }

    /// Serialize the whole mapping and atomically replace the file on disk.
    ///
    /// # Errors
    /// Returns an error if the temporary file cannot be written or renamed.
    pub fn save(&self) -> Result<()> {
        let json =
            serde_json::to_string_pretty(&self.users).context("failed to serialize user store")?;

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes())
            .context("failed to write user store")?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        debug!(path = %self.path.display(), count = self.users.len(), "saved user store");
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&UserRecord> {
        self.users.get(name)
    }

    /// Entry at a zero-based position in display order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&str, &UserRecord)> {
        self.users
            .get_index(index)
            .map(|(name, record)| (name.as_str(), record))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UserRecord)> {
        self.users
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Insert or overwrite. An overwritten name keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, record: UserRecord) -> Option<UserRecord> {
        self.users.insert(name.into(), record)
    }

    /// Remove by name, keeping the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<UserRecord> {
        self.users.shift_remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = store_path(tmp.path());
        (tmp, path)
    }

    #[test]
    fn missing_file_is_empty_store() {
        let (_tmp, path) = temp_store();
        let store = UserStore::load(&path).expect("load");
        assert!(store.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn invalid_syntax_loads_as_empty() {
        let (_tmp, path) = temp_store();
        fs::write(&path, "{ not json").expect("write");
        let store = UserStore::load(&path).expect("load must not fail");
        assert!(store.is_empty());
    }

    #[test]
    fn wrong_shape_loads_as_empty() {
        let (_tmp, path) = temp_store();
        fs::write(&path, r#"{"A": {"name": "no email field"}}"#).expect("write");
        assert!(UserStore::load(&path).expect("load").is_empty());

        fs::write(&path, r#"["A", "B"]"#).expect("write");
        assert!(UserStore::load(&path).expect("load").is_empty());
    }

    #[test]
    fn corrupt_file_is_overwritten_on_next_save() {
        // Known data-loss behaviour: the unparsed original is not kept.
        let (_tmp, path) = temp_store();
        fs::write(&path, r#"{"A": {"email": "a@x.com"},"#).expect("write");

        let mut store = UserStore::load(&path).expect("load");
        store.insert("B", UserRecord::new("b@x.com", None));
        store.save().expect("save");

        let reloaded = UserStore::load(&path).expect("reload");
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.get("A").is_none());
        assert!(reloaded.get("B").is_some());
    }

    #[test]
    fn missing_password_field_defaults_to_none() {
        let (_tmp, path) = temp_store();
        fs::write(&path, r#"{"A": {"email": "a@x.com"}}"#).expect("write");
        let store = UserStore::load(&path).expect("load");
        assert_eq!(store.get("A"), Some(&UserRecord::new("a@x.com", None)));
    }

    #[test]
    fn reload_matches_last_saved_state() {
        let (_tmp, path) = temp_store();
        let mut store = UserStore::load(&path).expect("load");

        store.insert("A", UserRecord::new("a@x.com", None));
        store.save().expect("save");
        store.insert("B", UserRecord::new("b@x.com", Some("hunter2".into())));
        store.save().expect("save");
        store.insert("C", UserRecord::new("c@x.com", None));
        store.save().expect("save");
        store.remove("A");
        store.save().expect("save");

        let reloaded = UserStore::load(&path).expect("reload");
        assert_eq!(reloaded, store);
        let names: Vec<&str> = reloaded.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["B", "C"]);
    }

    #[test]
    fn overwrite_keeps_single_key_and_position() {
        let (_tmp, path) = temp_store();
        let mut store = UserStore::empty(&path);
        store.insert("A", UserRecord::new("a@x.com", None));
        store.insert("B", UserRecord::new("b@x.com", None));

        let previous = store.insert("A", UserRecord::new("a@new.com", Some("s".into())));
        assert_eq!(previous, Some(UserRecord::new("a@x.com", None)));
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.get_index(0),
            Some(("A", &UserRecord::new("a@new.com", Some("s".into()))))
        );
    }

    #[test]
    fn saved_json_uses_null_for_skipped_password() {
        let (_tmp, path) = temp_store();
        let mut store = UserStore::empty(&path);
        store.insert("Jane Doe", UserRecord::new("jane@example.com", None));
        store.save().expect("save");

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(
            value,
            serde_json::json!({"Jane Doe": {"email": "jane@example.com", "password": null}})
        );
    }

    #[test]
    fn empty_store_saves_as_empty_object() {
        let (_tmp, path) = temp_store();
        let mut store = UserStore::empty(&path);
        store.insert("A", UserRecord::new("a@x.com", None));
        store.save().expect("save");
        store.remove("A");
        store.save().expect("save");

        assert_eq!(fs::read_to_string(&path).expect("read"), "{}");
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        // A directory where the file should be cannot be read as a store.
        let path = store_path(tmp.path());
        fs::create_dir(&path).expect("mkdir");
        assert!(UserStore::load(&path).is_err());
    }
}
