use super::*;

#[test]
fn empty_input_is_not_career_related() {
    assert!(!is_career_related(""));
    assert_eq!(matched_term(""), None);
}

#[test]
fn every_vocabulary_term_matches_on_its_own_and_embedded() {
    for term in VOCABULARY {
        assert!(is_career_related(term), "bare term should match: {term}");
        let embedded = format!("zzz {} zzz", term.to_uppercase());
        assert!(is_career_related(&embedded), "embedded term should match: {term}");
    }
}

#[test]
fn matching_ignores_case() {
    assert!(is_career_related("Polish my RESUME please"));
    assert!(is_career_related("LinkedIn headline ideas"));
}

#[test]
fn matching_is_substring_not_whole_word() {
    assert_eq!(matched_term("the skillet is hot"), Some("skill"));
    assert!(is_career_related("paycheck"));
}

#[test]
fn unrelated_text_is_rejected() {
    for text in [
        "What's the weather today?",
        "zzz",
        "   ",
        "bonjour tout le monde",
        "quel temps fera-t-on?",
    ] {
        assert!(!is_career_related(text), "should not match: {text}");
    }
}

#[test]
fn career_question_is_accepted() {
    assert!(is_career_related("How do I write a resume summary?"));
    assert_eq!(
        matched_term("How do I write a resume summary?"),
        Some("resume")
    );
}
