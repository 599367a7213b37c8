use crate::vocabulary::VOCABULARY;

/// Returns true when any vocabulary term occurs anywhere in `text`, ignoring
/// case. Substring containment, not whole words: "skillet" matches "skill".
pub fn is_career_related(text: &str) -> bool {
    matched_term(text).is_some()
}

/// First vocabulary term found in `text`, in vocabulary order.
pub fn matched_term(text: &str) -> Option<&'static str> {
    if text.is_empty() {
        return None;
    }
    let lowered = text.to_lowercase();
    VOCABULARY
        .iter()
        .copied()
        .find(|term| lowered.contains(term))
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
