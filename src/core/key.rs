//! Canonical anagram keys
//!
//! Two words are anagrams of each other exactly when their sorted characters match.

/// Fold a raw dictionary line or query to the form stored in the index
#[inline]
#[must_use]
pub fn fold(word: &str) -> String {
    word.to_lowercase()
}

/// Compute the anagram-class key of an already folded word
///
/// The key is the word's characters sorted by code point. It depends only on the
/// multiset of characters, so every permutation of a word shares one key.
///
/// # Examples
/// ```
/// use anagram_finder::core::canonical_key;
///
/// assert_eq!(canonical_key("listen"), "eilnst");
/// assert_eq!(canonical_key("silent"), canonical_key("enlist"));
/// assert_eq!(canonical_key(""), "");
/// ```
#[must_use]
pub fn canonical_key(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::seq::SliceRandom;

    #[test]
    fn key_sorts_characters() {
        assert_eq!(canonical_key("banana"), "aaabnn");
        assert_eq!(canonical_key("listen"), "eilnst");
    }

    #[test]
    fn key_of_empty_word() {
        assert_eq!(canonical_key(""), "");
    }

    #[test]
    fn key_keeps_repeated_characters() {
        assert_eq!(canonical_key("aaa"), "aaa");
        assert_eq!(canonical_key("abba"), "aabb");
        assert_ne!(canonical_key("aab"), canonical_key("abb"));
    }

    #[test]
    fn key_handles_non_ascii() {
        assert_eq!(canonical_key("été"), canonical_key("éét"));
        assert_ne!(canonical_key("été"), canonical_key("tée"));
        assert_eq!(canonical_key("naïve"), canonical_key("vaïen"));
    }

    #[test]
    fn key_of_shuffled_word_is_unchanged() {
        let word = "conversation";
        let mut chars: Vec<char> = word.chars().collect();
        let mut rng = rand::rng();

        for _ in 0..20 {
            chars.shuffle(&mut rng);
            let shuffled: String = chars.iter().collect();
            assert_eq!(canonical_key(&shuffled), canonical_key(word));
        }
    }

    #[test]
    fn fold_lowercases() {
        assert_eq!(fold("Listen"), "listen");
        assert_eq!(fold("ÉTÉ"), "été");
    }

    proptest! {
        #[test]
        fn prop_key_is_permutation_invariant(word in "\\PC{0,12}", seed in any::<u64>()) {
            use rand::SeedableRng;

            let mut chars: Vec<char> = word.chars().collect();
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            chars.shuffle(&mut rng);
            let permuted: String = chars.into_iter().collect();

            prop_assert_eq!(canonical_key(&permuted), canonical_key(&word));
        }

        #[test]
        fn prop_key_preserves_length(word in "[a-z]{0,16}") {
            prop_assert_eq!(canonical_key(&word).chars().count(), word.chars().count());
        }
    }
}
