use std::{
	collections::HashMap,
	fs,
	path::PathBuf,
	sync::Mutex,
};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

#[derive(Debug, Serialize, Deserialize)]
struct Entry {
	value: Value,
	expires_at_unix: i64,
}

/// Durable cache tier backed by a single JSON file. Strictly an optimization:
/// callers swallow every error here and proceed uncached. Writes rewrite the
/// whole file under a lock, so concurrent writers serialize within one
/// process; across processes the usual last-write-wins rule applies.
pub struct FileCache {
	path: PathBuf,
	write_lock: Mutex<()>,
}
impl FileCache {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into(), write_lock: Mutex::new(()) }
	}

	pub fn get(&self, key: &str, now: OffsetDateTime) -> crate::Result<Option<Value>> {
		let entries = self.read_entries()?;
		let Some(entry) = entries.get(key) else { return Ok(None) };

		if entry.expires_at_unix <= now.unix_timestamp() {
			return Ok(None);
		}

		Ok(Some(entry.value.clone()))
	}

	pub fn put(&self, key: &str, value: Value, expires_at: OffsetDateTime) -> crate::Result<()> {
		let _guard = self.write_lock.lock().unwrap_or_else(|err| err.into_inner());
		let mut entries = self.read_entries()?;

		entries.insert(key.to_string(), Entry {
			value,
			expires_at_unix: expires_at.unix_timestamp(),
		});

		// Expired entries are purged on write so the file does not grow forever.
		let now_unix = OffsetDateTime::now_utc().unix_timestamp();

		entries.retain(|_, entry| entry.expires_at_unix > now_unix);

		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent)?;
		}

		fs::write(&self.path, serde_json::to_vec(&entries)?)?;

		Ok(())
	}

	fn read_entries(&self) -> crate::Result<HashMap<String, Entry>> {
		let raw = match fs::read(&self.path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
			Err(err) => return Err(err.into()),
		};

		Ok(serde_json::from_slice(&raw)?)
	}
}
