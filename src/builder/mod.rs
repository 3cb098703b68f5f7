/*!
Tools for building expressions from formula text.

Reading a formula is split into two stages:
- [Lexing](lexer), from text to a sequence of tokens.
- [Parsing](parser), from a sequence of tokens to an [expression](crate::structures::expression::Expr).

[parse_formula] composes the two.

```rust
# use plres::builder::parse_formula;
# use plres::types::err::{ErrorKind, ParseError};
let parsed = parse_formula("(P -> Q) & ~R").unwrap();
assert_eq!(parsed.expression.to_string(), "(P -> Q) & ~R");
assert_eq!(parsed.atoms.len(), 3);

assert!(matches!(parse_formula("P & q"), Err(ErrorKind::Lex(_))));
assert!(matches!(parse_formula("(P"), Err(ErrorKind::Parse(ParseError::UnmatchedOpen(0)))));
```
*/

pub mod lexer;
pub mod parser;

pub use parser::ParsedFormula;

use crate::types::err::{self};

/// Reads formula text to an expression, together with the atoms of the formula.
pub fn parse_formula(text: &str) -> Result<ParsedFormula, err::ErrorKind> {
    let lexemes = lexer::tokenise(text)?;
    let parsed = parser::parse_lexemes(&lexemes)?;
    Ok(parsed)
}
