use super::*;

const RESERVED: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("fun", TokenKind::Fun),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

// === Reserved words ===

#[test]
fn every_reserved_word_resolves() {
    for &(text, kind) in RESERVED {
        assert_eq!(lookup(text), Some(kind), "{text}");
        assert!(kind.is_keyword());
    }
}

#[test]
fn kind_name_is_uppercase_word() {
    for &(text, kind) in RESERVED {
        assert_eq!(kind.name(), text.to_ascii_uppercase());
    }
}

// === Identifiers ===

#[test]
fn prefixes_and_extensions_are_identifiers() {
    assert_eq!(lookup("classroom"), None);
    assert_eq!(lookup("clas"), None);
    assert_eq!(lookup("orchid"), None);
    assert_eq!(lookup("variable"), None);
    assert_eq!(lookup("returns"), None);
}

#[test]
fn case_sensitive() {
    assert_eq!(lookup("Class"), None);
    assert_eq!(lookup("NIL"), None);
    assert_eq!(lookup("True"), None);
}

#[test]
fn length_guard_rejects_short_and_long() {
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("i"), None);
    assert_eq!(lookup("whilst"), None);
    assert_eq!(lookup("returning"), None);
}

#[test]
fn underscore_start_is_identifier() {
    assert_eq!(lookup("_if"), None);
    assert_eq!(lookup("__"), None);
}
