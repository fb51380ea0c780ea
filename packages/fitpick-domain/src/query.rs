use crate::{ItemType, SearchRequest, text};

/// Filler words that carry no search intent; any token containing one is
/// dropped during keyword extraction.
const STOP_WORDS: [&str; 10] =
	["欲しい", "ほしい", "探し", "探して", "探す", "感じ", "みたい", "っぽい", "系", "風"];

/// Marketplace labels per item type, most generic first. The primary query
/// uses the first label and the rescue query the second, so the two queries
/// differ whenever an alternate label exists.
pub fn item_labels(item_type: ItemType) -> &'static [&'static str] {
	match item_type {
		ItemType::Tops => &["トップス", "ブラウス", "カットソー", "ニット"],
		ItemType::Outer => &["アウター", "コート", "ジャケット"],
		ItemType::Bottoms => &["ボトムス", "パンツ", "スカート"],
		ItemType::Onepiece => &["ワンピース", "ドレス"],
		ItemType::Shoes => &["シューズ", "スニーカー", "パンプス"],
		ItemType::Bags => &["バッグ", "トート", "ショルダー"],
		ItemType::Others => &["服", "アイテム"],
	}
}

/// Tokenizes free text into search keywords. Never returns an empty list for
/// non-empty input: when stop-word removal would drop every token, the whole
/// normalized string is kept as a single keyword.
pub fn extract_keywords(free_text: &str) -> Vec<String> {
	let normalized = text::normalize(free_text);
	let tokens: Vec<String> = normalized
		.split(|ch: char| ch.is_whitespace() || matches!(ch, ',' | '、' | '/'))
		.filter(|token| !token.is_empty())
		.filter(|token| !STOP_WORDS.iter().any(|word| token.contains(word)))
		.map(|token| token.to_string())
		.collect();

	if tokens.is_empty() && !normalized.is_empty() {
		return vec![normalized];
	}

	tokens
}

pub fn primary_query(request: &SearchRequest) -> String {
	let labels = item_labels(request.item_type);
	let mut tokens: Vec<&str> = vec![labels[0]];
	let keywords = extract_keywords(&request.free_text);

	for keyword in keywords.iter().take(2) {
		tokens.push(keyword);
	}
	if let Some(gender) = request.gender {
		tokens.push(gender.query_token());
	}
	if let Some(color) = request.color.first() {
		tokens.push(color);
	}

	join_tokens(&tokens)
}

pub fn rescue_query(request: &SearchRequest) -> String {
	let labels = item_labels(request.item_type);
	let mut tokens: Vec<&str> = vec![labels.get(1).copied().unwrap_or(labels[0])];
	let keywords = extract_keywords(&request.free_text);

	for keyword in keywords.iter().take(1) {
		tokens.push(keyword);
	}
	if let Some(gender) = request.gender {
		tokens.push(gender.query_token());
	}

	join_tokens(&tokens)
}

/// Full query plan: primary first, rescue second, deduplicated preserving
/// first-seen order, trivial (<2 char) queries discarded, capped.
pub fn build_queries(request: &SearchRequest, max_queries: u32) -> Vec<String> {
	let mut out = Vec::new();

	for query in [primary_query(request), rescue_query(request)] {
		if query.chars().count() < 2 {
			continue;
		}
		if out.contains(&query) {
			continue;
		}

		out.push(query);
	}

	out.truncate(max_queries as usize);

	out
}

fn join_tokens(tokens: &[&str]) -> String {
	tokens.iter().filter(|token| !token.is_empty()).copied().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
	use super::{build_queries, extract_keywords, primary_query, rescue_query};
	use crate::{Gender, ItemType, SearchRequest};

	fn request(free_text: &str, item_type: ItemType) -> SearchRequest {
		SearchRequest {
			free_text: free_text.to_string(),
			item_type,
			budget_min: 3_000,
			budget_max: 12_000,
			gender: None,
			season: Vec::new(),
			color: Vec::new(),
			material: Vec::new(),
			mood: None,
			exclude: Vec::new(),
		}
	}

	#[test]
	fn keywords_split_on_comma_slash_and_ideographic_comma() {
		assert_eq!(extract_keywords("白,綺麗め/シンプル、カジュアル"), vec![
			"白",
			"綺麗め",
			"シンプル",
			"カジュアル"
		]);
	}

	#[test]
	fn keywords_drop_stop_word_tokens() {
		assert_eq!(extract_keywords("白い トップス 欲しい"), vec!["白い", "トップス"]);
	}

	#[test]
	fn keywords_never_empty_for_non_empty_input() {
		let keywords = extract_keywords("欲しい");

		assert_eq!(keywords, vec!["欲しい"]);
	}

	#[test]
	fn keywords_empty_for_blank_input() {
		assert!(extract_keywords("   ").is_empty());
	}

	#[test]
	fn primary_uses_first_label_two_keywords_gender_and_color() {
		let mut request = request("白 綺麗め シンプル", ItemType::Tops);
		request.gender = Some(Gender::Womens);
		request.color = vec!["白".to_string()];

		assert_eq!(primary_query(&request), "トップス 白 綺麗め レディース 白");
	}

	#[test]
	fn rescue_uses_alternate_label_and_one_keyword() {
		let mut request = request("白 綺麗め", ItemType::Tops);
		request.gender = Some(Gender::Mens);

		assert_eq!(rescue_query(&request), "ブラウス 白 メンズ");
	}

	#[test]
	fn rescue_differs_from_primary_when_alternate_label_exists() {
		let request = request("白 綺麗め", ItemType::Onepiece);

		assert_ne!(primary_query(&request), rescue_query(&request));
	}

	#[test]
	fn plan_is_distinct_non_trivial_and_capped() {
		let request = request("白 綺麗め シンプル", ItemType::Tops);
		let queries = build_queries(&request, 6);

		assert!(!queries.is_empty());
		assert!(queries.len() <= 6);

		for (idx, query) in queries.iter().enumerate() {
			assert!(query.chars().count() >= 2);
			assert!(!queries[idx + 1..].contains(query));
		}
	}

	#[test]
	fn plan_orders_primary_before_rescue() {
		let request = request("白", ItemType::Others);
		let queries = build_queries(&request, 6);

		assert_eq!(queries[0], primary_query(&request));
		assert_eq!(queries[1], rescue_query(&request));
	}

	#[test]
	fn plan_respects_cap() {
		let queries = build_queries(&request("白 綺麗め", ItemType::Tops), 1);

		assert_eq!(queries.len(), 1);
	}
}
