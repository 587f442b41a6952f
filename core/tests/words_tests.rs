use digest_core::words::{body_word_count, word_count};
use serde_json::json;

#[test]
fn it_splits_on_any_unicode_whitespace() {
    // no-break space and ideographic space both separate words
    assert_eq!(word_count("quia\u{00A0}et\u{3000}suscipit"), 3);
    assert_eq!(word_count("line one\nline two\r\n"), 4);
}

#[test]
fn it_splits_on_ascii_information_separators() {
    assert_eq!(word_count("a\u{1c}b\u{1d}c\u{1e}d\u{1f}e"), 5);
    assert_eq!(word_count("\u{1f}\u{1f}lead and trail\u{1c}"), 3);
}

#[test]
fn it_counts_empty_text_as_zero() {
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count(" \t\n "), 0);
}

#[test]
fn it_treats_non_string_bodies_as_zero_words() {
    assert_eq!(body_word_count(None), 0);
    assert_eq!(body_word_count(Some(&json!(null))), 0);
    assert_eq!(body_word_count(Some(&json!(42))), 0);
    assert_eq!(body_word_count(Some(&json!(["a", "b"]))), 0);
    assert_eq!(body_word_count(Some(&json!("a b c"))), 3);
}
