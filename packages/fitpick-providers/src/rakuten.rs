use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::{Error, FetchQuery, Result};
use fitpick_domain::{CandidateItem, Site};

const IMAGE_SIZE: &str = "800x800";

#[derive(Debug, Deserialize)]
struct IchibaResponse {
	#[serde(rename = "Items", default)]
	items: Vec<IchibaEntry>,
}

#[derive(Debug, Deserialize)]
struct IchibaEntry {
	#[serde(rename = "Item")]
	item: IchibaItem,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IchibaItem {
	item_code: String,
	item_name: String,
	item_price: u64,
	item_url: String,
	shop_name: Option<String>,
	item_caption: Option<String>,
	#[serde(default)]
	medium_image_urls: Vec<IchibaImage>,
	#[serde(default)]
	small_image_urls: Vec<IchibaImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IchibaImage {
	image_url: String,
}

/// Fetches raw candidates from the Rakuten Ichiba item-search API. Missing
/// credentials surface as `Error::Unavailable`, distinct from HTTP failures.
pub async fn fetch(
	cfg: &fitpick_config::Source,
	query: &FetchQuery,
) -> Result<Vec<CandidateItem>> {
	let Some(application_id) = cfg.application_id.as_deref() else {
		return Err(Error::Unavailable {
			message: "source.application_id is not configured.".to_string(),
		});
	};

	if cfg.endpoint.trim().is_empty() {
		return Err(Error::Unavailable { message: "source.endpoint is not configured.".to_string() });
	}

	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let mut params: Vec<(&str, String)> = vec![
		("applicationId", application_id.to_string()),
		("format", "json".to_string()),
		("keyword", query.keyword.clone()),
		("hits", query.hits.to_string()),
		("imageFlag", "1".to_string()),
	];

	if let Some(min_price) = query.min_price {
		params.push(("minPrice", min_price.to_string()));
	}
	if let Some(max_price) = query.max_price {
		params.push(("maxPrice", max_price.to_string()));
	}

	let res = client.get(&cfg.endpoint).query(&params).send().await?;
	let body: IchibaResponse = res.error_for_status()?.json().await?;

	Ok(body.items.into_iter().map(|entry| into_candidate(entry.item)).collect())
}

fn into_candidate(item: IchibaItem) -> CandidateItem {
	let image_url = item
		.medium_image_urls
		.first()
		.or(item.small_image_urls.first())
		.map(|image| upscale_image_url(&image.image_url));

	CandidateItem {
		id: item.item_code,
		site: Site::Rakuten,
		name: item.item_name,
		price: item.item_price,
		image_url,
		url: item.item_url,
		brand: item.shop_name,
		summary: item.item_caption,
		score: None,
		size_prediction: None,
	}
}

/// Rakuten serves thumbnails by default; rewrite the `_ex=` size parameter so
/// cards render the large rendition.
fn upscale_image_url(url: &str) -> String {
	if let Some(idx) = url.find("_ex=") {
		let head = &url[..idx + "_ex=".len()];
		let tail = &url[idx + "_ex=".len()..];
		let rest = tail.trim_start_matches(|ch: char| ch.is_ascii_digit() || ch == 'x');

		return format!("{head}{IMAGE_SIZE}{rest}");
	}
	if url.contains('?') {
		return format!("{url}&_ex={IMAGE_SIZE}");
	}

	format!("{url}?_ex={IMAGE_SIZE}")
}
