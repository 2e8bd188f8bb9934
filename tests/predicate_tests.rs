use urlref::chars;

fn accepts_each(predicate: fn(&str) -> bool, members: &str) {
    for c in members.chars() {
        assert!(predicate(&c.to_string()), "should accept {c:?}");
    }
}

fn rejects_each(predicate: fn(&str) -> bool, samples: &[&str]) {
    for sample in samples {
        assert!(!predicate(sample), "should reject {sample:?}");
    }
}

#[test]
fn is_hex_matches_the_hex_digits() {
    accepts_each(chars::is_hex, "0123456789abcdefABCDEF");
    rejects_each(chars::is_hex, &["G", "AA", "."]);
}

#[test]
fn is_safe_matches_the_safe_chars() {
    accepts_each(chars::is_safe, "$-_.+");
    rejects_each(chars::is_safe, &["$$", "a", "@", "Z"]);
}

#[test]
fn is_extra_matches_the_extra_chars() {
    accepts_each(chars::is_extra, "!*'(),");
    rejects_each(chars::is_extra, &["!!", "a", "@", "Z"]);
}

#[test]
fn is_national_matches_the_national_chars() {
    accepts_each(chars::is_national, "{}|\\^~[]`");
    rejects_each(chars::is_national, &["{{", "a", "@", "Z"]);
}

#[test]
fn is_reserved_matches_the_reserved_chars() {
    accepts_each(chars::is_reserved, ";/?:@&=");
    rejects_each(chars::is_reserved, &[";;", "a", "!", "Z"]);
}

#[test]
fn is_punctuation_matches_the_punctuation_chars() {
    accepts_each(chars::is_punctuation, "<>#%\"");
    rejects_each(chars::is_punctuation, &["<<", "a", "@", "Z"]);
}

#[test]
fn every_predicate_is_trivially_true_on_the_empty_string() {
    assert!(chars::is_hex(""));
    assert!(chars::is_safe(""));
    assert!(chars::is_extra(""));
    assert!(chars::is_national(""));
    assert!(chars::is_reserved(""));
    assert!(chars::is_punctuation(""));
}

#[test]
fn every_predicate_is_false_on_multi_char_input() {
    // even when every character is in the class
    assert!(!chars::is_hex("ab"));
    assert!(!chars::is_safe("-_"));
    assert!(!chars::is_extra("()"));
    assert!(!chars::is_national("{}"));
    assert!(!chars::is_reserved("//"));
    assert!(!chars::is_punctuation("<>"));
}
