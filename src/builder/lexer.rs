//! Tokenisation of formula text.
//!
//! The alphabet of a formula is:
//! - Atoms, each a single (ASCII) uppercase letter.
//! - The connectives `~`, `&`, `|`, `->`, and `<->`.
//! - Parentheses.
//!
//! Whitespace separates nothing and is discarded.
//! Any other character is an error, noted with its position.
//!
//! ```rust
//! # use plres::builder::lexer::{tokenise, Token};
//! let tokens = tokenise("(P -> Q) <-> ~R").unwrap();
//! let kinds = tokens.iter().map(|lexeme| lexeme.token).collect::<Vec<_>>();
//!
//! assert_eq!(kinds, vec![Token::Open, Token::Atom('P'), Token::Implies, Token::Atom('Q'),
//!                        Token::Close, Token::Iff, Token::Not, Token::Atom('R')]);
//!
//! assert_eq!(tokens[5].position, 9);
//! ```

use crate::{
    misc::log::targets::{self},
    structures::atom::{is_atom, Atom},
    types::err::{self},
};

/// A token of a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Atom(Atom),
    Not,
    And,
    Or,
    Implies,
    Iff,
    Open,
    Close,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(atom) => write!(f, "{atom}"),
            Self::Not => write!(f, "~"),
            Self::And => write!(f, "&"),
            Self::Or => write!(f, "|"),
            Self::Implies => write!(f, "->"),
            Self::Iff => write!(f, "<->"),
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
        }
    }
}

/// A token paired with the (zero-based) character position at which the token begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub position: usize,
}

/// Splits formula text into a sequence of lexemes.
pub fn tokenise(text: &str) -> Result<Vec<Lexeme>, err::LexError> {
    let characters = text.chars().collect::<Vec<_>>();
    let mut lexemes = Vec::with_capacity(characters.len());

    let mut position = 0;
    while position < characters.len() {
        let character = characters[position];

        let (token, width) = match character {
            c if c.is_whitespace() => {
                position += 1;
                continue;
            }

            '~' => (Token::Not, 1),
            '&' => (Token::And, 1),
            '|' => (Token::Or, 1),
            '(' => (Token::Open, 1),
            ')' => (Token::Close, 1),

            '-' if characters.get(position + 1) == Some(&'>') => (Token::Implies, 2),

            '<' if characters[position..].starts_with(&['<', '-', '>']) => (Token::Iff, 3),

            c if is_atom(c) => (Token::Atom(c), 1),

            _ => {
                log::debug!(target: targets::LEXER, "Invalid character '{character}' at {position}");
                return Err(err::LexError {
                    character,
                    position,
                });
            }
        };

        lexemes.push(Lexeme { token, position });
        position += width;
    }

    log::trace!(target: targets::LEXER, "{} tokens from '{text}'", lexemes.len());
    Ok(lexemes)
}
