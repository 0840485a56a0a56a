use crate::errors::{CmError, CmResult};
use crate::frontend::token::{reserved_lookup, Token, TokenType};
use crate::LineNumber;
use std::{iter::Peekable, str::Chars};
use tracing::{debug, trace};

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    state: &'a mut LineNumber,
}

impl<'a> Lexer<'a> {
    pub fn new(file_content: &'a str, state: &'a mut LineNumber) -> Self {
        Self {
            chars: file_content.chars().peekable(),
            state,
        }
    }

    pub fn scan(mut self) -> CmResult<Vec<(Token, usize)>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            let line = self.state.line;
            match self.scan_token() {
                Some(token) => {
                    trace!(line, kind = %token.kind, lexeme = %token.lexeme, "scanned token");
                    tokens.push((token, line));
                }
                None => {
                    tokens.push((Token::new(TokenType::EndFile, ""), line));
                    break;
                }
            }
        }
        debug!(count = tokens.len(), lines = self.state.line, "scan finished");
        Ok(tokens)
    }

    fn skip_whitespace_and_comments(&mut self) -> CmResult<()> {
        loop {
            match self.chars.peek().copied() {
                Some('/') if self.comment_follows() => self.scan_comment()?,
                Some(ch) if ch.is_whitespace() => self.scan_whitespace(),
                _ => break,
            }
        }
        Ok(())
    }

    // Looks past a '/' without consuming it.
    fn comment_follows(&self) -> bool {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.peek() == Some(&'*')
    }

    fn scan_token(&mut self) -> Option<Token> {
        let ch = *self.chars.peek()?;
        let token = if ch.is_ascii_alphabetic() {
            self.scan_identifier()
        } else if ch.is_ascii_digit() {
            self.scan_number()
        } else {
            match ch {
                '<' => self.scan_with_equal(TokenType::LessThan, TokenType::LessThanEqual),
                '>' => self.scan_with_equal(TokenType::GreaterThan, TokenType::GreaterThanEqual),
                '=' => self.scan_with_equal(TokenType::Assign, TokenType::Equal),
                '!' => self.scan_with_equal(TokenType::Error, TokenType::NotEqual),
                _ => self.scan_single_char_token(ch),
            }
        };
        Some(token)
    }

    fn scan_comment(&mut self) -> CmResult<()> {
        let start_line = self.state.line;
        self.chars.next(); // Consume '/'
        self.chars.next(); // Consume '*'
        let mut star = false;
        while let Some(ch) = self.chars.next() {
            match ch {
                '/' if star => return Ok(()),
                '*' => star = true,
                '\n' => {
                    self.state.line += 1;
                    star = false;
                }
                _ => star = false,
            }
        }
        Err(CmError::UnterminatedComment { line: start_line })
    }

    fn scan_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            if ch == '\n' {
                self.state.line += 1;
            }
            self.chars.next();
        }
    }

    fn take_while(&mut self, lexeme: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(&ch) = self.chars.peek() {
            if !pred(ch) {
                break;
            }
            lexeme.push(ch);
            self.chars.next();
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let mut lexeme = String::new();
        self.take_while(&mut lexeme, |ch| ch.is_ascii_alphabetic());
        let kind = reserved_lookup(&lexeme).unwrap_or(TokenType::Id);
        Token::new(kind, lexeme)
    }

    fn scan_number(&mut self) -> Token {
        let mut lexeme = String::new();
        self.take_while(&mut lexeme, |ch| ch.is_ascii_digit());
        // a letter glued to a number is not a valid token
        if self.chars.peek().is_some_and(|ch| ch.is_ascii_alphabetic()) {
            self.take_while(&mut lexeme, |ch| ch.is_ascii_alphanumeric());
            return Token::new(TokenType::Error, lexeme);
        }
        Token::new(TokenType::Num, lexeme)
    }

    fn scan_with_equal(&mut self, single: TokenType, with_equal: TokenType) -> Token {
        let mut lexeme = String::new();
        if let Some(ch) = self.chars.next() {
            lexeme.push(ch);
        }
        if self.chars.peek() == Some(&'=') {
            self.chars.next();
            lexeme.push('=');
            return Token::new(with_equal, lexeme);
        }
        Token::new(single, lexeme)
    }

    fn scan_single_char_token(&mut self, ch: char) -> Token {
        self.chars.next(); // Consume the character
        let kind = match ch {
            '+' => TokenType::Plus,
            '-' => TokenType::Minus,
            '*' => TokenType::Times,
            '/' => TokenType::Over,
            ';' => TokenType::Semicolon,
            ',' => TokenType::Comma,
            '(' => TokenType::LParen,
            ')' => TokenType::RParen,
            '[' => TokenType::LBrack,
            ']' => TokenType::RBrack,
            '{' => TokenType::LBrace,
            '}' => TokenType::RBrace,
            _ => TokenType::Error,
        };
        Token::new(kind, ch.to_string())
    }
}

// Convenience function mirroring the lexer API
pub fn scan(state: &mut LineNumber, file_content: &str) -> CmResult<Vec<(Token, usize)>> {
    Lexer::new(file_content, state).scan()
}
