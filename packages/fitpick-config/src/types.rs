use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub search: Search,
	pub source: Source,
	pub cache: Cache,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Search {
	/// Cap on the number of distinct queries a plan may contain.
	pub max_queries: u32,
	/// Below this many non-excluded primary candidates, the rescue stage fires.
	pub candidate_floor: u32,
	/// Result-count hint sent to the source adapter per fetch.
	pub fetch_hits: u32,
	/// A budget_max at or above this value is treated as unlimited.
	pub budget_ceiling: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Source {
	pub mode: String,
	pub endpoint: String,
	pub application_id: Option<String>,
	pub timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cache {
	pub ttl_hours: i64,
	pub durable_path: Option<String>,
}
