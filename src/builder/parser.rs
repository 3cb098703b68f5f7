//! A recursive descent parser from a sequence of [lexemes](crate::builder::lexer::Lexeme) to an [expression](Expr).
//!
//! The grammar, from lowest to highest precedence:
//!
//! ```none
//! formula    := iff
//! iff        := implies ( "<->" implies )?
//! implies    := or ( "->" implies )?
//! or         := and ( "|" and )*
//! and        := unary ( "&" unary )*
//! unary      := "~" unary | "(" formula ")" | ATOM
//! ```
//!
//! So, implication is right associative, conjunction and disjunction are left associative, and equivalence does not associate --- `P <-> Q <-> R` is an error and must be written with parentheses.
//!
//! Alongside the expression, a parse returns the atoms which occur in the formula.
//! This registry is built fresh for each call.
//!
//! # Depth
//!
//! Both the parser and the procedures applied to an expression recurse on the structure of an expression.
//! To keep recursion bounded, a formula may not nest (through negation, parentheses, or right-nested implication) deeper than [FORMULA_DEPTH_LIMIT], and the expression built may not be taller than [FORMULA_DEPTH_LIMIT].

use std::collections::BTreeSet;

use crate::{
    builder::lexer::{Lexeme, Token},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        expression::{Connective, Expr},
    },
    types::err::{self},
};

/// The maximum nesting depth, and expression height, of a formula.
pub const FORMULA_DEPTH_LIMIT: usize = 256;

/// The result of a parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedFormula {
    /// The expression read.
    pub expression: Expr,

    /// Each atom which occurs in the expression.
    pub atoms: BTreeSet<Atom>,
}

/// An expression paired with its height, to avoid recomputing heights while building.
struct Node {
    expression: Expr,
    height: usize,
}

impl Node {
    fn leaf(expression: Expr) -> Self {
        Node {
            expression,
            height: 1,
        }
    }
}

/// The state of a parse.
struct Parser<'t> {
    lexemes: &'t [Lexeme],
    index: usize,
    depth: usize,
    atoms: BTreeSet<Atom>,
}

/// Parses a sequence of lexemes to an expression.
///
/// Each lexeme must be consumed, and so any lexeme after a complete formula is an error.
pub fn parse_lexemes(lexemes: &[Lexeme]) -> Result<ParsedFormula, err::ParseError> {
    if lexemes.is_empty() {
        return Err(err::ParseError::Empty);
    }

    let mut parser = Parser {
        lexemes,
        index: 0,
        depth: 0,
        atoms: BTreeSet::default(),
    };

    let node = parser.formula()?;

    if let Some(lexeme) = parser.peek() {
        log::debug!(target: targets::PARSER, "Trailing token '{}' at {}", lexeme.token, lexeme.position);
        return match lexeme.token {
            Token::Close => Err(err::ParseError::UnmatchedClose(lexeme.position)),
            _ => Err(unexpected(lexeme)),
        };
    }

    log::trace!(target: targets::PARSER, "Parsed: {}", node.expression);

    Ok(ParsedFormula {
        expression: node.expression,
        atoms: parser.atoms,
    })
}

fn unexpected(lexeme: Lexeme) -> err::ParseError {
    err::ParseError::UnexpectedToken {
        token: lexeme.token.to_string(),
        position: lexeme.position,
    }
}

impl Parser<'_> {
    fn peek(&self) -> Option<Lexeme> {
        self.lexemes.get(self.index).copied()
    }

    fn next(&mut self) -> Option<Lexeme> {
        let lexeme = self.peek();
        if lexeme.is_some() {
            self.index += 1;
        }
        lexeme
    }

    /// Consumes the next lexeme if it is the given token.
    fn eat(&mut self, token: Token) -> Option<Lexeme> {
        match self.peek() {
            Some(lexeme) if lexeme.token == token => self.next(),
            _ => None,
        }
    }

    fn descend(&mut self, position: usize) -> Result<(), err::ParseError> {
        self.depth += 1;
        match self.depth > FORMULA_DEPTH_LIMIT {
            true => Err(err::ParseError::DepthLimit(position)),
            false => Ok(()),
        }
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// Joins two nodes by a connective, so long as the result is not too tall.
    fn join(
        connective: Connective,
        left: Node,
        right: Node,
        position: usize,
    ) -> Result<Node, err::ParseError> {
        let height = 1 + left.height.max(right.height);
        if height > FORMULA_DEPTH_LIMIT {
            return Err(err::ParseError::DepthLimit(position));
        }
        Ok(Node {
            expression: Expr::binary(connective, left.expression, right.expression),
            height,
        })
    }

    fn formula(&mut self) -> Result<Node, err::ParseError> {
        self.iff()
    }

    fn iff(&mut self) -> Result<Node, err::ParseError> {
        let left = self.implies()?;
        match self.eat(Token::Iff) {
            Some(lexeme) => {
                let right = self.implies()?;
                Self::join(Connective::Iff, left, right, lexeme.position)
            }
            None => Ok(left),
        }
    }

    fn implies(&mut self) -> Result<Node, err::ParseError> {
        let left = self.or()?;
        match self.eat(Token::Implies) {
            Some(lexeme) => {
                self.descend(lexeme.position)?;
                let right = self.implies()?;
                self.ascend();
                Self::join(Connective::Implies, left, right, lexeme.position)
            }
            None => Ok(left),
        }
    }

    fn or(&mut self) -> Result<Node, err::ParseError> {
        let mut left = self.and()?;
        while let Some(lexeme) = self.eat(Token::Or) {
            let right = self.and()?;
            left = Self::join(Connective::Or, left, right, lexeme.position)?;
        }
        Ok(left)
    }

    fn and(&mut self) -> Result<Node, err::ParseError> {
        let mut left = self.unary()?;
        while let Some(lexeme) = self.eat(Token::And) {
            let right = self.unary()?;
            left = Self::join(Connective::And, left, right, lexeme.position)?;
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Node, err::ParseError> {
        let Some(lexeme) = self.next() else {
            return Err(err::ParseError::UnexpectedEnd);
        };

        match lexeme.token {
            Token::Not => {
                self.descend(lexeme.position)?;
                let operand = self.unary()?;
                self.ascend();

                let height = operand.height + 1;
                if height > FORMULA_DEPTH_LIMIT {
                    return Err(err::ParseError::DepthLimit(lexeme.position));
                }
                Ok(Node {
                    expression: Expr::not(operand.expression),
                    height,
                })
            }

            Token::Open => {
                self.descend(lexeme.position)?;
                let inner = self.formula()?;
                match self.next() {
                    Some(Lexeme {
                        token: Token::Close,
                        ..
                    }) => {}
                    None => return Err(err::ParseError::UnmatchedOpen(lexeme.position)),
                    Some(other) => return Err(unexpected(other)),
                }
                self.ascend();
                Ok(inner)
            }

            Token::Atom(atom) => {
                self.atoms.insert(atom);
                Ok(Node::leaf(Expr::atom(atom)))
            }

            _ => Err(unexpected(lexeme)),
        }
    }
}
