pub mod cache;
pub mod search;

mod error;

pub use error::{Error, Result};
pub use search::SearchResponse;

use std::{future::Future, pin::Pin, sync::Arc};

use time::{Duration, OffsetDateTime};

use fitpick_config::Config;
use fitpick_domain::CandidateItem;
use fitpick_providers::{FetchQuery, offline, rakuten};
use fitpick_storage::{FileCache, MemoryCache};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A candidate source fetches raw marketplace items for one query. The
/// deployment mode picks the implementation: the live Rakuten client or the
/// offline fixture pool.
pub trait CandidateSource
where
	Self: Send + Sync,
{
	fn fetch<'a>(
		&'a self,
		cfg: &'a fitpick_config::Source,
		query: &'a FetchQuery,
	) -> BoxFuture<'a, fitpick_providers::Result<Vec<CandidateItem>>>;
}

/// Injected cache service owned by the orchestration layer; get/put with
/// expiry, never a correctness dependency.
pub trait ResultCache
where
	Self: Send + Sync,
{
	fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Option<SearchResponse>>;
	fn put<'a>(
		&'a self,
		key: &'a str,
		value: &'a SearchResponse,
		ttl: Duration,
	) -> BoxFuture<'a, ()>;
}

pub struct FitpickService {
	pub cfg: Config,
	pub source: Arc<dyn CandidateSource>,
	pub cache: Arc<dyn ResultCache>,
}
impl FitpickService {
	pub fn new(cfg: Config) -> Self {
		let source: Arc<dyn CandidateSource> = match cfg.source.mode.as_str() {
			"offline" => Arc::new(OfflineSource),
			_ => Arc::new(RakutenSource),
		};
		let cache = Arc::new(TieredCache::new(
			cfg.cache.durable_path.as_deref().map(FileCache::new),
		));

		Self { cfg, source, cache }
	}

	pub fn with_parts(
		cfg: Config,
		source: Arc<dyn CandidateSource>,
		cache: Arc<dyn ResultCache>,
	) -> Self {
		Self { cfg, source, cache }
	}
}

struct RakutenSource;
impl CandidateSource for RakutenSource {
	fn fetch<'a>(
		&'a self,
		cfg: &'a fitpick_config::Source,
		query: &'a FetchQuery,
	) -> BoxFuture<'a, fitpick_providers::Result<Vec<CandidateItem>>> {
		Box::pin(rakuten::fetch(cfg, query))
	}
}

struct OfflineSource;
impl CandidateSource for OfflineSource {
	fn fetch<'a>(
		&'a self,
		_cfg: &'a fitpick_config::Source,
		query: &'a FetchQuery,
	) -> BoxFuture<'a, fitpick_providers::Result<Vec<CandidateItem>>> {
		Box::pin(async move { Ok(offline::fixture_candidates(query)) })
	}
}

/// Default cache: always the in-memory tier, plus the durable file tier when
/// configured. Durable failures are logged and swallowed; the pipeline then
/// simply runs uncached.
pub struct TieredCache {
	memory: MemoryCache,
	durable: Option<FileCache>,
}
impl TieredCache {
	pub fn new(durable: Option<FileCache>) -> Self {
		Self { memory: MemoryCache::new(), durable }
	}
}
impl ResultCache for TieredCache {
	fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Option<SearchResponse>> {
		Box::pin(async move {
			let now = OffsetDateTime::now_utc();

			if let Some(value) = self.memory.get(key, now) {
				return serde_json::from_value(value).ok();
			}

			let durable = self.durable.as_ref()?;

			match durable.get(key, now) {
				Ok(Some(value)) => serde_json::from_value(value).ok(),
				Ok(None) => None,
				Err(err) => {
					tracing::debug!(%err, "Durable cache read failed; treating as a miss.");

					None
				},
			}
		})
	}

	fn put<'a>(
		&'a self,
		key: &'a str,
		value: &'a SearchResponse,
		ttl: Duration,
	) -> BoxFuture<'a, ()> {
		Box::pin(async move {
			let Ok(encoded) = serde_json::to_value(value) else { return };
			let expires_at = OffsetDateTime::now_utc() + ttl;

			self.memory.put(key, encoded.clone(), expires_at);

			if let Some(durable) = self.durable.as_ref()
				&& let Err(err) = durable.put(key, encoded, expires_at)
			{
				tracing::debug!(%err, "Durable cache write failed; entry kept in memory only.");
			}
		})
	}
}
