//! Error types used in the library.
//!
//! - Lexical and parse errors abort the conversion of a single formula, and carry the position of the offending character or token.
//! - Resolution errors abort a proof attempt when a resource limit is reached, and carry the counts observed up to that point so a caller may retry with larger limits.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The umbrella error, returned from any procedure which may fail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Lex(LexError),
    Parse(ParseError),
    Resolution(ResolutionError),
}

/// The kind of an abort, as reported to a caller.
///
/// Lexical errors are reported as parse errors, as either prevents a formula from being read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AbortKind {
    StepLimitExceeded,
    ClauseLimitExceeded,
    ParseError,
}

impl ErrorKind {
    /// The kind of abort the error represents.
    pub fn abort_kind(&self) -> AbortKind {
        match self {
            Self::Lex(_) | Self::Parse(_) => AbortKind::ParseError,
            Self::Resolution(ResolutionError::StepLimitExceeded { .. }) => {
                AbortKind::StepLimitExceeded
            }
            Self::Resolution(ResolutionError::ClauseLimitExceeded { .. }) => {
                AbortKind::ClauseLimitExceeded
            }
        }
    }
}

impl std::fmt::Display for AbortKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StepLimitExceeded => write!(f, "StepLimitExceeded"),
            Self::ClauseLimitExceeded => write!(f, "ClauseLimitExceeded"),
            Self::ParseError => write!(f, "ParseError"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Resolution(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// A character outside of the formula alphabet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LexError {
    /// The offending character.
    pub character: char,

    /// The (zero-based) character position of the offending character in the input.
    pub position: usize,
}

impl From<LexError> for ErrorKind {
    fn from(e: LexError) -> Self {
        ErrorKind::Lex(e)
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid character '{}' at position {}",
            self.character, self.position
        )
    }
}

/// Noted errors when parsing a token sequence.
///
/// Positions are character positions of the relevant token in the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input contained no tokens.
    Empty,

    /// The input ended where some further token was required.
    UnexpectedEnd,

    /// An opening parenthesis at the given position was never closed.
    UnmatchedOpen(usize),

    /// A closing parenthesis at the given position has no matching opening parenthesis.
    UnmatchedClose(usize),

    /// A token where no alternative of the grammar applies.
    UnexpectedToken { token: String, position: usize },

    /// The formula nests deeper than the parser permits, first exceeded at the given position.
    DepthLimit(usize),

    /// The normal form of the formula would contain more literals than permitted.
    NormalFormLimit,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty expression"),
            Self::UnexpectedEnd => write!(f, "Unexpected end of input"),
            Self::UnmatchedOpen(position) => {
                write!(f, "Missing closing parenthesis for '(' at position {position}")
            }
            Self::UnmatchedClose(position) => {
                write!(f, "Unmatched ')' at position {position}")
            }
            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{token}' at position {position}")
            }
            Self::DepthLimit(position) => {
                write!(f, "Formula nested too deeply at position {position}")
            }
            Self::NormalFormLimit => write!(f, "Formula too large to normalise"),
        }
    }
}

/// Resource limits reached during a proof attempt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionError {
    /// The step limit was reached with clauses remaining in the set of support.
    StepLimitExceeded { steps: usize, peak_clauses: usize },

    /// The clause set reached the clause limit.
    ClauseLimitExceeded { steps: usize, peak_clauses: usize },
}

impl From<ResolutionError> for ErrorKind {
    fn from(e: ResolutionError) -> Self {
        ErrorKind::Resolution(e)
    }
}

impl std::fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StepLimitExceeded {
                steps,
                peak_clauses,
            } => write!(
                f,
                "Maximum step limit exceeded ({steps} steps, at most {peak_clauses} clauses)"
            ),
            Self::ClauseLimitExceeded {
                steps,
                peak_clauses,
            } => write!(
                f,
                "Maximum clause limit exceeded ({steps} steps, at most {peak_clauses} clauses)"
            ),
        }
    }
}
