use crate::errors::CmResult;
use crate::frontend::token::{Token, TokenType};
use std::io::Write;

/// Prints a token and its lexeme to the listing.
pub fn print_token<W: Write + ?Sized>(out: &mut W, token: TokenType, lexeme: &str) -> CmResult<()> {
    if token.is_reserved_word() {
        writeln!(out, "reserved word: {}", lexeme)?;
    } else if let Some(symbol) = token.symbol() {
        writeln!(out, "{}", symbol)?;
    } else {
        match token {
            TokenType::EndFile => writeln!(out, "EOF")?,
            TokenType::Num => writeln!(out, "NUM, val= {}", lexeme)?,
            TokenType::Id => writeln!(out, "ID, name= {}", lexeme)?,
            TokenType::Error => writeln!(out, "ERROR: {}", lexeme)?,
            // reserved words and symbols are handled above
            _ => writeln!(out, "Unknown token: {}", token as u8)?,
        }
    }
    Ok(())
}

/// Prints a token handed over as a raw tag, reporting tags outside the
/// token set instead of failing.
pub fn print_token_tag<W: Write + ?Sized>(out: &mut W, tag: u8, lexeme: &str) -> CmResult<()> {
    match TokenType::try_from(tag) {
        Ok(token) => print_token(out, token, lexeme),
        Err(tag) => {
            writeln!(out, "Unknown token: {}", tag)?;
            Ok(())
        }
    }
}

/// Writes the scan listing: optionally each source line, followed by the
/// tokens found on it.
pub fn write_scan_listing<W: Write + ?Sized>(
    out: &mut W,
    source: &str,
    tokens: &[(Token, usize)],
    echo_source: bool,
) -> CmResult<()> {
    let mut pending = tokens.iter().peekable();
    for (index, text) in source.lines().enumerate() {
        let lineno = index + 1;
        if echo_source {
            writeln!(out, "{:>4}: {}", lineno, text)?;
        }
        while let Some((token, line)) = pending.next_if(|(_, line)| *line <= lineno) {
            write_traced_token(out, token, *line)?;
        }
    }
    for (token, line) in pending {
        write_traced_token(out, token, *line)?;
    }
    Ok(())
}

fn write_traced_token<W: Write + ?Sized>(out: &mut W, token: &Token, line: usize) -> CmResult<()> {
    write!(out, "\t{}: ", line)?;
    print_token(out, token.kind, &token.lexeme)
}
