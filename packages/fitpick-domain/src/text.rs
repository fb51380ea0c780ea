use unicode_normalization::UnicodeNormalization;

/// Canonicalizes free text for cache keys and keyword matching: NFKC, trim,
/// lowercase, whitespace runs (including newlines) collapsed to one space.
/// Matching stays normalization-consistent because every comparison site runs
/// through this same function.
pub fn normalize(input: &str) -> String {
	let nfkc: String = input.nfkc().collect();
	let lowered = nfkc.trim().to_lowercase();
	let mut out = String::with_capacity(lowered.len());
	let mut pending_space = false;

	for ch in lowered.chars() {
		if ch.is_whitespace() {
			pending_space = !out.is_empty();

			continue;
		}
		if pending_space {
			out.push(' ');

			pending_space = false;
		}

		out.push(ch);
	}

	out
}

#[cfg(test)]
mod tests {
	use super::normalize;

	#[test]
	fn collapses_whitespace_runs() {
		assert_eq!(normalize("  white \t clean   top "), "white clean top");
	}

	#[test]
	fn strips_newlines() {
		assert_eq!(normalize("white\ntop\r\nblouse"), "white top blouse");
	}

	#[test]
	fn lowercases() {
		assert_eq!(normalize("White TOP"), "white top");
	}

	#[test]
	fn nfkc_folds_fullwidth_forms() {
		assert_eq!(normalize("Ｗｈｉｔｅ　ｔｏｐ"), "white top");
	}

	#[test]
	fn is_total_on_empty_input() {
		assert_eq!(normalize(""), "");
		assert_eq!(normalize("   "), "");
	}

	#[test]
	fn is_idempotent() {
		let once = normalize("  Ｗｈｉｔｅ \n top ");

		assert_eq!(normalize(&once), once);
	}
}
