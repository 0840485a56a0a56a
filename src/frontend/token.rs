/// Token tags produced by the C-Minus scanner.
///
/// The discriminants are stable so that tags can cross a boundary as raw
/// numbers (see [`TokenType::try_from`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenType {
    // book-keeping tokens
    EndFile = 0,
    Error,
    // reserved words
    Else,
    If,
    Int,
    Return,
    Void,
    While,
    // multicharacter tokens
    Id,
    Num,
    // special symbols
    Plus,
    Minus,
    Times,
    Over,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    Equal,
    NotEqual,
    Assign,
    Semicolon,
    Comma,
    LParen,
    RParen,
    LBrack,
    RBrack,
    LBrace,
    RBrace,
}

const ALL_TOKENS: [TokenType; 29] = [
    TokenType::EndFile,
    TokenType::Error,
    TokenType::Else,
    TokenType::If,
    TokenType::Int,
    TokenType::Return,
    TokenType::Void,
    TokenType::While,
    TokenType::Id,
    TokenType::Num,
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
];

impl TokenType {
    pub fn is_reserved_word(self) -> bool {
        matches!(
            self,
            TokenType::Else
                | TokenType::If
                | TokenType::Int
                | TokenType::Return
                | TokenType::Void
                | TokenType::While
        )
    }

    /// Literal text of a special symbol, `None` for every other tag.
    pub fn symbol(self) -> Option<&'static str> {
        let text = match self {
            TokenType::Plus => "+",
            TokenType::Minus => "-",
            TokenType::Times => "*",
            TokenType::Over => "/",
            TokenType::LessThan => "<",
            TokenType::LessThanEqual => "<=",
            TokenType::GreaterThan => ">",
            TokenType::GreaterThanEqual => ">=",
            TokenType::Equal => "==",
            TokenType::NotEqual => "!=",
            TokenType::Assign => "=",
            TokenType::Semicolon => ";",
            TokenType::Comma => ",",
            TokenType::LParen => "(",
            TokenType::RParen => ")",
            TokenType::LBrack => "[",
            TokenType::RBrack => "]",
            TokenType::LBrace => "{",
            TokenType::RBrace => "}",
            _ => return None,
        };
        Some(text)
    }
}

impl TryFrom<u8> for TokenType {
    type Error = u8;

    fn try_from(tag: u8) -> Result<Self, u8> {
        ALL_TOKENS.get(usize::from(tag)).copied().ok_or(tag)
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Maps an identifier-shaped lexeme to its reserved word, if it is one.
pub fn reserved_lookup(lexeme: &str) -> Option<TokenType> {
    match lexeme {
        "else" => Some(TokenType::Else),
        "if" => Some(TokenType::If),
        "int" => Some(TokenType::Int),
        "return" => Some(TokenType::Return),
        "void" => Some(TokenType::Void),
        "while" => Some(TokenType::While),
        _ => None,
    }
}

/// A scanned token: its tag together with the text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenType, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }
}
