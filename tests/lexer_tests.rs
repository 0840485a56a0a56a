use cminus::errors::{CmError, CmResult};
use cminus::frontend::lexer::scan;
use cminus::frontend::token::{Token, TokenType};
use cminus::LineNumber;

fn tok(kind: TokenType, lexeme: &str, line: usize) -> (Token, usize) {
    (Token::new(kind, lexeme), line)
}

#[test]
fn test_reserved_words_and_identifiers() -> CmResult<()> {
    let source = "int main void while whilex Else";
    let mut state = LineNumber::default();
    let tokens = scan(&mut state, source)?;
    assert_eq!(
        tokens,
        vec![
            tok(TokenType::Int, "int", 1),
            tok(TokenType::Id, "main", 1),
            tok(TokenType::Void, "void", 1),
            tok(TokenType::While, "while", 1),
            tok(TokenType::Id, "whilex", 1),
            tok(TokenType::Id, "Else", 1),
            tok(TokenType::EndFile, "", 1),
        ]
    );
    Ok(())
}

#[test]
fn test_symbols() -> CmResult<()> {
    let source = "+ - * / < <= > >= == != = ; , ( ) [ ] { }";
    let mut state = LineNumber::default();
    let kinds: Vec<TokenType> = scan(&mut state, source)?
        .into_iter()
        .map(|(token, _)| token.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenType::Plus,
            TokenType::Minus,
            TokenType::Times,
            TokenType::Over,
            TokenType::LessThan,
            TokenType::LessThanEqual,
            TokenType::GreaterThan,
            TokenType::GreaterThanEqual,
            TokenType::Equal,
            TokenType::NotEqual,
            TokenType::Assign,
            TokenType::Semicolon,
            TokenType::Comma,
            TokenType::LParen,
            TokenType::RParen,
            TokenType::LBrack,
            TokenType::RBrack,
            TokenType::LBrace,
            TokenType::RBrace,
            TokenType::EndFile,
        ]
    );
    Ok(())
}

#[test]
fn test_line_numbers_and_comments() -> CmResult<()> {
    let source = "/* header\n   comment */\nint x;\nx = 42;\n";
    let mut state = LineNumber::default();
    let tokens = scan(&mut state, source)?;
    assert_eq!(
        tokens,
        vec![
            tok(TokenType::Int, "int", 3),
            tok(TokenType::Id, "x", 3),
            tok(TokenType::Semicolon, ";", 3),
            tok(TokenType::Id, "x", 4),
            tok(TokenType::Assign, "=", 4),
            tok(TokenType::Num, "42", 4),
            tok(TokenType::Semicolon, ";", 4),
            tok(TokenType::EndFile, "", 5),
        ]
    );
    assert_eq!(state.line, 5);
    Ok(())
}

#[test]
fn test_division_is_not_a_comment() -> CmResult<()> {
    let source = "a / b /**/ c";
    let mut state = LineNumber::default();
    let tokens = scan(&mut state, source)?;
    assert_eq!(
        tokens,
        vec![
            tok(TokenType::Id, "a", 1),
            tok(TokenType::Over, "/", 1),
            tok(TokenType::Id, "b", 1),
            tok(TokenType::Id, "c", 1),
            tok(TokenType::EndFile, "", 1),
        ]
    );
    Ok(())
}

#[test]
fn test_error_tokens() -> CmResult<()> {
    let source = "x ! y @ 12ab";
    let mut state = LineNumber::default();
    let tokens = scan(&mut state, source)?;
    assert_eq!(
        tokens,
        vec![
            tok(TokenType::Id, "x", 1),
            tok(TokenType::Error, "!", 1),
            tok(TokenType::Id, "y", 1),
            tok(TokenType::Error, "@", 1),
            tok(TokenType::Error, "12ab", 1),
            tok(TokenType::EndFile, "", 1),
        ]
    );
    Ok(())
}

#[test]
fn test_unterminated_comment() {
    let source = "int x;\n/* never closed\n\n";
    let mut state = LineNumber::default();
    let result = scan(&mut state, source);
    if let Err(CmError::UnterminatedComment { line }) = result {
        assert_eq!(line, 2);
    } else {
        panic!("Expected an UnterminatedComment error, but got: {:?}", result);
    }
}

#[test]
fn test_empty_source() -> CmResult<()> {
    let mut state = LineNumber::default();
    let tokens = scan(&mut state, "")?;
    assert_eq!(tokens, vec![tok(TokenType::EndFile, "", 1)]);
    Ok(())
}

#[test]
fn test_comment_glued_to_tokens() -> CmResult<()> {
    let source = "x/* inline */y\n  /* spans\n */ z";
    let mut state = LineNumber::default();
    let tokens = scan(&mut state, source)?;
    assert_eq!(
        tokens,
        vec![
            tok(TokenType::Id, "x", 1),
            tok(TokenType::Id, "y", 1),
            tok(TokenType::Id, "z", 3),
            tok(TokenType::EndFile, "", 3),
        ]
    );
    Ok(())
}
