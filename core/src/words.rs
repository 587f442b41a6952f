use serde_json::Value;

/// Separator set: Unicode White_Space plus the ASCII file/group/record/unit
/// separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Count separator-delimited words. Runs of separators collapse and
/// leading/trailing ones are ignored.
pub fn word_count(text: &str) -> usize {
    text.split(is_separator).filter(|w| !w.is_empty()).count()
}

/// Word count of a JSON body field. Anything but a string counts as zero words.
pub fn body_word_count(body: Option<&Value>) -> usize {
    match body {
        Some(Value::String(s)) => word_count(s),
        _ => 0,
    }
}
