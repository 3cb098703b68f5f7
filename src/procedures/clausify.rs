//! Conversion of an expression in conjunctive normal form to a collection of clauses.
//!
//! Each conjunction yields the clauses of its conjuncts, in order.
//! Each (maximal) disjunction yields a single clause, made of every literal reachable through disjunctions.
//! And, each literal yields the unit clause of the literal.
//!
//! A clause containing some literal and its negation is true on every valuation, and so is dropped.
//! Likewise, a clause already yielded is not yielded again.
//! So, the collection of clauses may be empty (in which case the expression is true on every valuation).
//!
//! ```rust
//! # use plres::procedures::clausify::clauses_from_str;
//! # use plres::structures::clause::Clause;
//! let clauses = clauses_from_str("(P -> Q) & ~R").unwrap();
//! let strings = clauses.iter().map(|clause| clause.as_string()).collect::<Vec<_>>();
//!
//! assert_eq!(strings, vec!["[~P, Q]", "[~R]"]);
//!
//! assert!(clauses_from_str("P | ~P").unwrap().is_empty());
//! ```
//!
//! If an expression is not in conjunctive normal form the subexpression which breaks the form is [normalised](crate::procedures::normalise) before clausification, and so any expression may be given.

use std::collections::HashSet;

use crate::{
    builder::parse_formula,
    misc::log::targets::{self},
    procedures::normalise::{normalise, normalise_within_limit},
    structures::{
        clause::{CClause, Clause},
        expression::{Connective, Expr},
    },
    types::err::{self},
};

/// The clauses of an expression in conjunctive normal form.
pub fn clausify(cnf: &Expr) -> Vec<CClause> {
    let mut seen = HashSet::new();
    let mut clauses = Vec::default();

    for clause in clauses_of(cnf) {
        if clause.is_tautology() {
            log::trace!(target: targets::CLAUSIFY, "Tautology skipped: {}", clause.as_string());
            continue;
        }
        if seen.insert(clause.clone()) {
            clauses.push(clause);
        }
    }

    log::debug!(target: targets::CLAUSIFY, "{} clauses from {cnf}", clauses.len());
    clauses
}

/// Parses, normalises, and clausifies a formula.
///
/// The formula is normalised [within the limit](crate::procedures::normalise::NORMAL_FORM_LIMIT) on the size of a normal form.
pub fn clauses_from_str(formula: &str) -> Result<Vec<CClause>, err::ErrorKind> {
    let parsed = parse_formula(formula)?;
    Ok(clausify(&normalise_within_limit(&parsed.expression)?))
}

fn clauses_of(expression: &Expr) -> Vec<CClause> {
    match expression {
        Expr::Binary(Connective::And, left, right) => {
            let mut clauses = clauses_of(left);
            clauses.extend(clauses_of(right));
            clauses
        }

        Expr::Binary(Connective::Or, ..) => {
            let mut clause = CClause::default();
            match extend_disjunction(expression, &mut clause) {
                true => vec![clause],
                false => clauses_of(&normalise(expression)),
            }
        }

        _ => match expression.as_literal() {
            Some(literal) => vec![CClause::from([literal])],
            None => clauses_of(&normalise(expression)),
        },
    }
}

/// Adds each literal reachable through disjunctions to the clause.
///
/// Returns false if some disjunct is neither a disjunction nor a literal.
fn extend_disjunction(expression: &Expr, clause: &mut CClause) -> bool {
    match expression {
        Expr::Binary(Connective::Or, left, right) => {
            extend_disjunction(left, clause) && extend_disjunction(right, clause)
        }

        _ => match expression.as_literal() {
            Some(literal) => {
                clause.insert(literal);
                true
            }
            None => false,
        },
    }
}
