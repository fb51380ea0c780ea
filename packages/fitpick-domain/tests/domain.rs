use fitpick_domain::{
	BudgetWindow, CandidateItem, Gender, ItemType, SearchRequest, Site, query, select, text,
};

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

fn candidate(id: &str, name: &str, price: u64) -> CandidateItem {
	CandidateItem {
		id: id.to_string(),
		site: Site::Rakuten,
		name: name.to_string(),
		price,
		image_url: Some(format!("https://img.example.com/shop/{id}/main.jpg")),
		url: format!("https://example.com/{id}"),
		brand: None,
		summary: None,
		score: None,
		size_prediction: None,
	}
}

#[test]
fn query_plans_are_distinct_and_non_trivial_for_every_item_type() {
	let item_types = [
		ItemType::Tops,
		ItemType::Outer,
		ItemType::Bottoms,
		ItemType::Onepiece,
		ItemType::Shoes,
		ItemType::Bags,
		ItemType::Others,
	];

	for item_type in item_types {
		for free_text in ["白 綺麗め", "欲しい", "ジャケット/アウター、秋"] {
			let mut request = request(free_text, item_type);
			request.gender = Some(Gender::Womens);

			let queries = query::build_queries(&request, 6);

			assert!(!queries.is_empty());
			assert!(queries.len() <= 6);

			for (idx, q) in queries.iter().enumerate() {
				assert!(q.chars().count() >= 2, "trivial query {q:?}");
				assert!(!queries[idx + 1..].contains(q), "duplicate query {q:?}");
			}
		}
	}
}

#[test]
fn rescue_query_differs_from_primary() {
	for item_type in [ItemType::Tops, ItemType::Onepiece, ItemType::Others] {
		let request = request("白 綺麗め シンプル", item_type);

		assert_ne!(query::primary_query(&request), query::rescue_query(&request));
	}
}

#[test]
fn primary_query_leads_with_item_label_and_keywords() {
	let request = request("白 きれいめ トップス", ItemType::Tops);
	let primary = query::primary_query(&request);
	let tokens: Vec<&str> = primary.split(' ').collect();

	assert_eq!(tokens[0], query::item_labels(ItemType::Tops)[0]);
	assert!(tokens.len() <= 3);
	assert!(tokens.contains(&"白"));
}

#[test]
fn selection_never_repeats_url_or_image_identity() {
	let mut pool: Vec<CandidateItem> = (0..12)
		.map(|idx| candidate(&format!("item-{idx}"), &format!("白 ブラウス {idx}号"), 6_000))
		.collect();

	// Mirror listing: same product image behind a different host and URL.
	let mut mirror = candidate("mirror", "白 ブラウス 別店舗", 6_200);
	mirror.image_url =
		Some("https://cdn.other.example/shop/item-0/main.jpg?_ex=64x64".to_string());

	pool.push(mirror);

	let window = BudgetWindow { min: 3_000, max: Some(12_000) };
	let selected = select::select_top_four(&pool, &request("白 ブラウス", ItemType::Tops), window);

	assert!(selected.len() <= 4);

	for (idx, item) in selected.iter().enumerate() {
		for other in &selected[idx + 1..] {
			assert_ne!(item.url, other.url);
			assert_ne!(
				item.image_url.as_deref().map(select::normalize_image_identity),
				other.image_url.as_deref().map(select::normalize_image_identity)
			);
		}
	}
}

#[test]
fn normalization_is_shared_between_cache_keys_and_matching() {
	let spaced = text::normalize("白い  トップス\nきれいめ");
	let tight = text::normalize("白い トップス きれいめ");

	assert_eq!(spaced, tight);
}
