use super::*;
use pretty_assertions::assert_eq;

// === Operator mapping ===

#[test]
fn structural_tokens() {
    let source = "(){},.-+;*/";
    let mut cooker = TokenCooker::new(source);

    let expected = [
        (RawTag::LeftParen, TokenKind::LeftParen),
        (RawTag::RightParen, TokenKind::RightParen),
        (RawTag::LeftBrace, TokenKind::LeftBrace),
        (RawTag::RightBrace, TokenKind::RightBrace),
        (RawTag::Comma, TokenKind::Comma),
        (RawTag::Dot, TokenKind::Dot),
        (RawTag::Minus, TokenKind::Minus),
        (RawTag::Plus, TokenKind::Plus),
        (RawTag::Semicolon, TokenKind::Semicolon),
        (RawTag::Star, TokenKind::Star),
        (RawTag::Slash, TokenKind::Slash),
    ];
    for (offset, (tag, kind)) in (0u32..).zip(expected) {
        let tok = cooker.cook(tag, offset, 1);
        assert_eq!(tok.as_ref().map(|t| t.kind), Some(kind));
        assert_eq!(tok.map(|t| t.lexeme), tag.lexeme().map(str::to_owned));
    }
    assert!(cooker.errors().is_empty());
}

#[test]
fn compound_operators() {
    let source = "== != <= >=";
    let mut cooker = TokenCooker::new(source);

    let kinds = [
        cooker.cook(RawTag::EqualEqual, 0, 2),
        cooker.cook(RawTag::BangEqual, 3, 2),
        cooker.cook(RawTag::LessEqual, 6, 2),
        cooker.cook(RawTag::GreaterEqual, 9, 2),
    ]
    .map(|t| t.map(|t| (t.kind, t.lexeme)));
    assert_eq!(
        kinds,
        [
            Some((TokenKind::EqualEqual, "==".to_owned())),
            Some((TokenKind::BangEqual, "!=".to_owned())),
            Some((TokenKind::LessEqual, "<=".to_owned())),
            Some((TokenKind::GreaterEqual, ">=".to_owned())),
        ]
    );
}

// === Identifiers and keywords ===

#[test]
fn identifier_is_not_keyword() {
    let mut cooker = TokenCooker::new("classroom");
    let tok = cooker.cook(RawTag::Ident, 0, 9);
    assert_eq!(
        tok,
        Some(Token::new(TokenKind::Identifier, "classroom", Literal::None, 1))
    );
}

#[test]
fn keyword_resolves() {
    let mut cooker = TokenCooker::new("x class");
    let tok = cooker.cook(RawTag::Ident, 2, 5);
    assert_eq!(tok, Some(Token::new(TokenKind::Class, "class", Literal::None, 1)));
}

// === Numbers ===

#[test]
fn integer_number() {
    let mut cooker = TokenCooker::new("1234");
    let tok = cooker.cook(RawTag::Number, 0, 4);
    assert_eq!(
        tok,
        Some(Token::new(TokenKind::Number, "1234", Literal::Number(1234.0), 1))
    );
}

#[test]
fn fractional_number_keeps_lexeme() {
    let mut cooker = TokenCooker::new("123.4500");
    let tok = cooker.cook(RawTag::Number, 0, 8);
    assert_eq!(
        tok,
        Some(Token::new(TokenKind::Number, "123.4500", Literal::Number(123.45), 1))
    );
}

#[test]
fn oversized_number_decodes_to_infinity() {
    let source = "9".repeat(400);
    let mut cooker = TokenCooker::new(&source);
    let tok = cooker.cook(RawTag::Number, 0, 400);
    assert_eq!(tok.map(|t| t.literal), Some(Literal::Number(f64::INFINITY)));
    assert!(cooker.errors().is_empty());
}

// === Strings ===

#[test]
fn string_literal_strips_quotes() {
    let mut cooker = TokenCooker::new("\"hello\"");
    let tok = cooker.cook(RawTag::String, 0, 7);
    assert_eq!(
        tok,
        Some(Token::new(
            TokenKind::String,
            "\"hello\"",
            Literal::Text("hello".to_owned()),
            1
        ))
    );
}

#[test]
fn empty_string_literal() {
    let mut cooker = TokenCooker::new("\"\"");
    let tok = cooker.cook(RawTag::String, 0, 2);
    assert_eq!(tok.map(|t| t.literal), Some(Literal::Text(String::new())));
}

#[test]
fn multiline_string_starts_on_first_line_and_advances_counter() {
    let mut cooker = TokenCooker::new("\"a\nb\nc\"");
    let tok = cooker.cook(RawTag::String, 0, 7);
    assert_eq!(tok.map(|t| t.line), Some(1));
    assert_eq!(cooker.line(), 3);
}

// === Newlines ===

#[test]
fn newline_bumps_line() {
    let mut cooker = TokenCooker::new("\n\n+");
    assert_eq!(cooker.cook(RawTag::Newline, 0, 1), None);
    assert_eq!(cooker.cook(RawTag::Newline, 1, 1), None);
    let tok = cooker.cook(RawTag::Plus, 2, 1);
    assert_eq!(tok.map(|t| t.line), Some(3));
}

// === Errors ===

#[test]
fn invalid_char_reports_character() {
    let mut cooker = TokenCooker::new("\n@");
    cooker.cook(RawTag::Newline, 0, 1);
    assert_eq!(cooker.cook(RawTag::InvalidChar, 1, 1), None);
    assert_eq!(
        cooker.errors(),
        &[ScanError::UnexpectedCharacter {
            line: 2,
            character: '@'
        }]
    );
}

#[test]
fn invalid_multibyte_char_reports_whole_char() {
    let mut cooker = TokenCooker::new("€");
    assert_eq!(cooker.cook(RawTag::InvalidChar, 0, 3), None);
    assert_eq!(
        cooker.errors(),
        &[ScanError::UnexpectedCharacter {
            line: 1,
            character: '€'
        }]
    );
}

#[test]
fn unterminated_string_single_line() {
    let mut cooker = TokenCooker::new("\"abc");
    assert_eq!(cooker.cook(RawTag::UnterminatedString, 0, 4), None);
    assert_eq!(cooker.into_errors(), vec![ScanError::UnterminatedString { line: 1 }]);
}

#[test]
fn unterminated_string_reports_line_at_end_of_input() {
    let mut cooker = TokenCooker::new("\"abc\ndef\n");
    assert_eq!(cooker.cook(RawTag::UnterminatedString, 0, 9), None);
    assert_eq!(cooker.line(), 3);
    assert_eq!(cooker.errors(), &[ScanError::UnterminatedString { line: 3 }]);
}
