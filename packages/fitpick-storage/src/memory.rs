use std::{collections::HashMap, sync::Mutex};

use serde_json::Value;
use time::OffsetDateTime;

struct Entry {
	value: Value,
	expires_at: OffsetDateTime,
}

/// Fast process-local cache tier. Writes are last-write-wins; a lost
/// read-then-write race at worst costs one redundant upstream fetch.
#[derive(Default)]
pub struct MemoryCache {
	entries: Mutex<HashMap<String, Entry>>,
}
impl MemoryCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, key: &str, now: OffsetDateTime) -> Option<Value> {
		let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());
		let entry = entries.get(key)?;

		if entry.expires_at <= now {
			entries.remove(key);

			return None;
		}

		Some(entry.value.clone())
	}

	pub fn put(&self, key: &str, value: Value, expires_at: OffsetDateTime) {
		let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());

		entries.insert(key.to_string(), Entry { value, expires_at });
	}
}
