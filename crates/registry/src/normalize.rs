//! Input normalization helpers shared by the registries.

/// Title-cases `input`: the first letter of every word is upper-cased and
/// the rest lower-cased, with word boundaries at any non-alphabetic
/// character (`"joHN"` → `"John"`, `"mary-jane o'brien"` → `"Mary-Jane
/// O'Brien"`).
pub(crate) fn title_case(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	let mut at_word_start = true;
	for ch in input.chars() {
		if ch.is_alphabetic() {
			if at_word_start {
				out.extend(ch.to_uppercase());
			} else {
				out.extend(ch.to_lowercase());
			}
			at_word_start = false;
		} else {
			out.push(ch);
			at_word_start = true;
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::title_case;

	#[test]
	fn capitalizes_each_word() {
		assert_eq!(title_case("joHN"), "John");
		assert_eq!(title_case("jane doe"), "Jane Doe");
		assert_eq!(title_case("mary-jane o'brien"), "Mary-Jane O'Brien");
	}

	#[test]
	fn leaves_non_alphabetic_input_alone() {
		assert_eq!(title_case(""), "");
		assert_eq!(title_case("123"), "123");
	}
}
