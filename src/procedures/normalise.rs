//! Conversion of an expression to conjunctive normal form.
//!
//! # Overview
//!
//! Normalisation is four passes over an expression, applied in order:
//!
//! 1. [eliminate_conditionals] --- `A <-> B` becomes `(A -> B) & (B -> A)`, and `A -> B` becomes `~A | B`.
//! 2. [push_negations] --- `~(A & B)` becomes `~A | ~B`, `~(A | B)` becomes `~A & ~B`, and `~~A` becomes `A`.
//! 3. [distribute_disjunctions] --- `A | (B & C)` becomes `(A | B) & (A | C)`, and `(A & B) | C` becomes `(A | C) & (B | C)`.
//! 4. [collapse_duplicates] --- a conjunction or disjunction of two structurally identical expressions becomes the expression.
//!
//! Each pass is total and pure: any expression may be given to any pass, and a fresh expression is returned.
//! Each pass preserves the value of an expression on every valuation.
//!
//! After all four passes an expression is a conjunction of disjunctions of literals (any of which may be trivial).
//! And, [normalise] is idempotent --- an expression returned from [normalise] is returned unchanged by a further call.
//!
//! ```rust
//! # use plres::builder::parse_formula;
//! # use plres::procedures::normalise::normalise;
//! let parsed = parse_formula("(P & Q) <-> R").unwrap();
//! let cnf = normalise(&parsed.expression);
//!
//! assert_eq!(cnf.to_string(), "((~P | ~Q) | R) & ((~R | P) & (~R | Q))");
//! assert_eq!(normalise(&cnf), cnf);
//! ```
//!
//! # Size
//!
//! Both eliminating an equivalence and distributing a disjunction copy subexpressions, so a short formula may have a normal form exponentially larger than the formula.
//! For example, the normal form of `P <-> (Q <-> (R <-> (S <-> (T <-> U))))` has tens of thousands of literals, and each further equivalence multiplies this.
//!
//! [normal_form_size] computes the number of literals the distributed form of an expression contains from the expression alone, without building anything.
//! And, [normalise_within_limit] refuses any expression whose normal form would contain more than [NORMAL_FORM_LIMIT] literals.
//! Formulas read as premises or goals are normalised within the limit.

use crate::{
    misc::log::targets::{self},
    structures::expression::{Connective, Expr},
    types::err::{self},
};

/// The most literals the normal form of a formula may contain.
pub const NORMAL_FORM_LIMIT: usize = 1 << 16;

/// Applies each normalisation pass to the expression, in order.
pub fn normalise(expression: &Expr) -> Expr {
    let without_conditionals = eliminate_conditionals(expression);
    log::trace!(target: targets::NORMALISE, "Conditionals eliminated: {without_conditionals}");

    let negations_pushed = push_negations(&without_conditionals);
    log::trace!(target: targets::NORMALISE, "Negations pushed: {negations_pushed}");

    let distributed = distribute_disjunctions(&negations_pushed);
    log::trace!(target: targets::NORMALISE, "Disjunctions distributed: {distributed}");

    let collapsed = collapse_duplicates(&distributed);
    log::debug!(target: targets::NORMALISE, "{expression} normalised to {collapsed}");

    collapsed
}

/// As [normalise], though an error if the normal form would contain more than [NORMAL_FORM_LIMIT] literals.
pub fn normalise_within_limit(expression: &Expr) -> Result<Expr, err::ParseError> {
    let size = normal_form_size(expression);
    if size > NORMAL_FORM_LIMIT {
        log::debug!(target: targets::NORMALISE, "Normal form of {size} literals refused");
        return Err(err::ParseError::NormalFormLimit);
    }
    Ok(normalise(expression))
}

/// The number of literals in the distributed form of the expression, before duplicates are collapsed.
///
/// Counts saturate at [usize::MAX].
pub fn normal_form_size(expression: &Expr) -> usize {
    spread(expression).positive.literals
}

/// The shape of a conjunction of disjunctions.
#[derive(Clone, Copy)]
struct Conjuncts {
    clauses: usize,
    literals: usize,
}

impl Conjuncts {
    const LITERAL: Conjuncts = Conjuncts {
        clauses: 1,
        literals: 1,
    };

    fn and(self, other: Conjuncts) -> Conjuncts {
        Conjuncts {
            clauses: self.clauses.saturating_add(other.clauses),
            literals: self.literals.saturating_add(other.literals),
        }
    }

    /// Each conjunct of `self` is paired with each conjunct of `other`, as in [disjoin].
    fn or(self, other: Conjuncts) -> Conjuncts {
        Conjuncts {
            clauses: self.clauses.saturating_mul(other.clauses),
            literals: self
                .literals
                .saturating_mul(other.clauses)
                .saturating_add(other.literals.saturating_mul(self.clauses)),
        }
    }
}

/// The shapes of the normal forms of an expression and of its negation.
struct Spread {
    positive: Conjuncts,
    negative: Conjuncts,
}

fn spread(expression: &Expr) -> Spread {
    match expression {
        Expr::Atom(_) => Spread {
            positive: Conjuncts::LITERAL,
            negative: Conjuncts::LITERAL,
        },

        Expr::Negation(operand) => {
            let operand = spread(operand);
            Spread {
                positive: operand.negative,
                negative: operand.positive,
            }
        }

        Expr::Binary(connective, left, right) => {
            let (left, right) = (spread(left), spread(right));
            match connective {
                Connective::And => Spread {
                    positive: left.positive.and(right.positive),
                    negative: left.negative.or(right.negative),
                },

                Connective::Or => Spread {
                    positive: left.positive.or(right.positive),
                    negative: left.negative.and(right.negative),
                },

                Connective::Implies => Spread {
                    positive: left.negative.or(right.positive),
                    negative: left.positive.and(right.negative),
                },

                // (~A | B) & (~B | A), and its negation (A & ~B) | (B & ~A).
                Connective::Iff => Spread {
                    positive: left
                        .negative
                        .or(right.positive)
                        .and(right.negative.or(left.positive)),
                    negative: left
                        .positive
                        .and(right.negative)
                        .or(right.positive.and(left.negative)),
                },
            }
        }
    }
}

/// Rewrites equivalences and implications in terms of negation, conjunction, and disjunction.
pub fn eliminate_conditionals(expression: &Expr) -> Expr {
    match expression {
        Expr::Atom(_) => expression.clone(),

        Expr::Negation(operand) => Expr::not(eliminate_conditionals(operand)),

        Expr::Binary(Connective::Iff, left, right) => {
            let left = eliminate_conditionals(left);
            let right = eliminate_conditionals(right);
            Expr::and(
                Expr::or(Expr::not(left.clone()), right.clone()),
                Expr::or(Expr::not(right), left),
            )
        }

        Expr::Binary(Connective::Implies, left, right) => Expr::or(
            Expr::not(eliminate_conditionals(left)),
            eliminate_conditionals(right),
        ),

        Expr::Binary(connective, left, right) => Expr::binary(
            *connective,
            eliminate_conditionals(left),
            eliminate_conditionals(right),
        ),
    }
}

/// Pushes negations inward until each negation applies to an atom.
///
/// Any conditional met under a negation is eliminated, as a negated conditional has no literal form otherwise.
pub fn push_negations(expression: &Expr) -> Expr {
    negation_normal(expression, false)
}

/// The negation normal form of the expression, or of the negation of the expression if `negate` is set.
fn negation_normal(expression: &Expr, negate: bool) -> Expr {
    match expression {
        Expr::Atom(_) => match negate {
            true => Expr::not(expression.clone()),
            false => expression.clone(),
        },

        Expr::Negation(operand) => negation_normal(operand, !negate),

        Expr::Binary(Connective::And, left, right) => {
            let left = negation_normal(left, negate);
            let right = negation_normal(right, negate);
            match negate {
                true => Expr::or(left, right),
                false => Expr::and(left, right),
            }
        }

        Expr::Binary(Connective::Or, left, right) => {
            let left = negation_normal(left, negate);
            let right = negation_normal(right, negate);
            match negate {
                true => Expr::and(left, right),
                false => Expr::or(left, right),
            }
        }

        Expr::Binary(Connective::Implies | Connective::Iff, ..) => {
            negation_normal(&eliminate_conditionals(expression), negate)
        }
    }
}

/// Distributes disjunction over conjunction until no disjunction has a conjunction as a subexpression.
///
/// Conditionals and negations are treated as opaque.
pub fn distribute_disjunctions(expression: &Expr) -> Expr {
    match expression {
        Expr::Binary(Connective::And, left, right) => Expr::and(
            distribute_disjunctions(left),
            distribute_disjunctions(right),
        ),

        Expr::Binary(Connective::Or, left, right) => {
            disjoin(distribute_disjunctions(left), distribute_disjunctions(right))
        }

        _ => expression.clone(),
    }
}

/// The disjunction of two distributed expressions, distributed.
fn disjoin(left: Expr, right: Expr) -> Expr {
    match (left, right) {
        (left, Expr::Binary(Connective::And, right_left, right_right)) => Expr::and(
            disjoin(left.clone(), *right_left),
            disjoin(left, *right_right),
        ),

        (Expr::Binary(Connective::And, left_left, left_right), right) => Expr::and(
            disjoin(*left_left, right.clone()),
            disjoin(*left_right, right),
        ),

        (left, right) => Expr::or(left, right),
    }
}

/// Collapses any conjunction or disjunction of structurally identical expressions to the expression.
///
/// Subexpressions are collapsed before comparison, so `(P | P) & P` collapses to `P`.
pub fn collapse_duplicates(expression: &Expr) -> Expr {
    match expression {
        Expr::Atom(_) => expression.clone(),

        Expr::Negation(operand) => Expr::not(collapse_duplicates(operand)),

        Expr::Binary(connective, left, right) => {
            let left = collapse_duplicates(left);
            let right = collapse_duplicates(right);
            match connective {
                Connective::And | Connective::Or if left == right => left,
                _ => Expr::binary(*connective, left, right),
            }
        }
    }
}

#[cfg(test)]
mod normalise_tests {
    use super::*;
    use crate::builder::parse_formula;

    fn expression(text: &str) -> Expr {
        parse_formula(text).unwrap().expression
    }

    #[test]
    fn implication() {
        assert_eq!(
            eliminate_conditionals(&expression("P -> Q")),
            expression("~P | Q")
        );
    }

    #[test]
    fn equivalence() {
        assert_eq!(
            eliminate_conditionals(&expression("P <-> Q")),
            expression("(~P | Q) & (~Q | P)")
        );
    }

    #[test]
    fn nested_conditionals() {
        let eliminated = eliminate_conditionals(&expression("(P -> Q) -> ~(R <-> P)"));
        assert_eq!(
            eliminated,
            expression("~(~P | Q) | ~((~R | P) & (~P | R))")
        );
    }

    #[test]
    fn de_morgan() {
        assert_eq!(push_negations(&expression("~(P & Q)")), expression("~P | ~Q"));
        assert_eq!(push_negations(&expression("~(P | Q)")), expression("~P & ~Q"));
        assert_eq!(push_negations(&expression("~~~P")), expression("~P"));
        assert_eq!(
            push_negations(&expression("~(~(P & ~Q) | R)")),
            expression("(P & ~Q) & ~R")
        );
    }

    #[test]
    fn negated_conditional() {
        assert_eq!(push_negations(&expression("~(P -> Q)")), expression("P & ~Q"));
    }

    #[test]
    fn distribution() {
        assert_eq!(
            distribute_disjunctions(&expression("P | (Q & R)")),
            expression("(P | Q) & (P | R)")
        );
        assert_eq!(
            distribute_disjunctions(&expression("(P & Q) | R")),
            expression("(P | R) & (Q | R)")
        );
        assert_eq!(
            distribute_disjunctions(&expression("(P & Q) | (R & S)")),
            expression("((P | R) & (Q | R)) & ((P | S) & (Q | S))")
        );
    }

    #[test]
    fn duplicates() {
        assert_eq!(collapse_duplicates(&expression("(P | P) & P")), expression("P"));
        assert_eq!(
            collapse_duplicates(&expression("(P | Q) & (P | Q)")),
            expression("P | Q")
        );
        assert_eq!(collapse_duplicates(&expression("P -> P")), expression("P -> P"));
    }

    /// `P <-> (Q <-> ...)` with the given number of equivalences.
    fn equivalence_chain(length: usize) -> String {
        let atoms = ['P', 'Q', 'R', 'S'];
        let mut formula = "T".to_string();
        for index in (0..length).rev() {
            formula = format!("{} <-> ({formula})", atoms[index % atoms.len()]);
        }
        formula
    }

    #[test]
    fn size_matches_distribution() {
        for text in [
            "P",
            "P <-> Q",
            "(P & Q) | (R & S)",
            "~(P -> (Q | ~R))",
            "(P & Q) <-> (R | S)",
        ] {
            let expression = expression(text);
            let distributed = distribute_disjunctions(&push_negations(&eliminate_conditionals(
                &expression,
            )));
            assert_eq!(
                normal_form_size(&expression),
                literal_count(&distributed),
                "{text}"
            );
        }
    }

    fn literal_count(expression: &Expr) -> usize {
        match expression {
            Expr::Binary(_, left, right) => literal_count(left) + literal_count(right),
            _ => 1,
        }
    }

    #[test]
    fn normal_form_limit() {
        let short = expression(&equivalence_chain(4));
        assert!(normalise_within_limit(&short).is_ok());
        assert!(normalise_within_limit(&Expr::not(short)).is_ok());

        // Fine as given, though too large when negated.
        let medium = expression(&equivalence_chain(5));
        assert!(normalise_within_limit(&medium).is_ok());
        assert_eq!(
            normalise_within_limit(&Expr::not(medium)),
            Err(err::ParseError::NormalFormLimit)
        );

        let long = expression(&equivalence_chain(30));
        assert_eq!(normal_form_size(&long), usize::MAX);
        assert_eq!(
            normalise_within_limit(&long),
            Err(err::ParseError::NormalFormLimit)
        );
    }

    #[test]
    fn idempotent() {
        for text in [
            "(P -> Q) & ~R",
            "((P | Q) | ~R) & S",
            "(P & Q) <-> (R | S)",
            "~(P <-> ~(Q & R)) | (S -> P)",
        ] {
            let cnf = normalise(&expression(text));
            assert_eq!(normalise(&cnf), cnf, "{text}");
        }
    }
}
