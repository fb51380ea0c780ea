mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Cache, Config, Search, Service, Source};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.search.max_queries == 0 {
		return Err(Error::Validation {
			message: "search.max_queries must be greater than zero.".to_string(),
		});
	}
	if cfg.search.candidate_floor == 0 {
		return Err(Error::Validation {
			message: "search.candidate_floor must be greater than zero.".to_string(),
		});
	}
	if cfg.search.fetch_hits == 0 {
		return Err(Error::Validation {
			message: "search.fetch_hits must be greater than zero.".to_string(),
		});
	}
	if cfg.search.budget_ceiling == 0 {
		return Err(Error::Validation {
			message: "search.budget_ceiling must be greater than zero.".to_string(),
		});
	}
	if !matches!(cfg.source.mode.as_str(), "rakuten" | "offline") {
		return Err(Error::Validation {
			message: "source.mode must be one of rakuten or offline.".to_string(),
		});
	}
	if cfg.source.mode == "rakuten" && cfg.source.endpoint.trim().is_empty() {
		return Err(Error::Validation {
			message: "source.endpoint must be non-empty when source.mode is rakuten.".to_string(),
		});
	}
	if cfg.source.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "source.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.cache.ttl_hours <= 0 {
		return Err(Error::Validation {
			message: "cache.ttl_hours must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	// An empty application id means the live adapter is unavailable, not misconfigured.
	if cfg.source.application_id.as_deref().map(|id| id.trim().is_empty()).unwrap_or(false) {
		cfg.source.application_id = None;
	}
	if cfg.cache.durable_path.as_deref().map(|path| path.trim().is_empty()).unwrap_or(false) {
		cfg.cache.durable_path = None;
	}
}
