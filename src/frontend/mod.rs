pub mod lexer;
pub mod token;

pub use lexer::{scan, Lexer};
pub use token::{Token, TokenType};
