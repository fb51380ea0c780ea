use crate::{BudgetWindow, CandidateItem, SearchRequest};

/// Listing patterns that are never worth recommending regardless of score:
/// lucky bags, bulk lots, B-stock, multi-item sets, and clearance dumps.
const BAN_WORDS: [&str; 5] = ["福袋", "まとめ売り", "訳あり", "セット", "在庫処分"];

/// Pure predicate; the checks are ORed, so their order never changes the
/// outcome and adding exclusion words can only grow the excluded set.
pub fn should_exclude(
	item: &CandidateItem,
	request: &SearchRequest,
	window: BudgetWindow,
) -> bool {
	let text = item.search_text();

	if BAN_WORDS.iter().any(|word| text.contains(word)) {
		return true;
	}
	if request
		.exclude
		.iter()
		.filter(|word| !word.trim().is_empty())
		.any(|word| text.contains(word.as_str()))
	{
		return true;
	}

	!window.contains(item.price)
}
