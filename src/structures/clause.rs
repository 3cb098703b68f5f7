//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as an ordered set of literals.
//! So, the order in which literals are added to a clause is irrelevant, and duplicate literals collapse.
//!
//! ```rust
//! # use plres::structures::literal::{CLiteral, Literal};
//! # use plres::structures::clause::{CClause, Clause};
//! let p = CLiteral::new('P', true);
//! let q = CLiteral::new('Q', true);
//!
//! let clause = CClause::from([q, -p, q]);
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.as_string(), "[~P, Q]");
//!
//! let resolvents = clause.resolvents(&CClause::from([p]));
//! assert_eq!(resolvents, vec![CClause::from([q])]);
//! ```
//!
//! - The empty clause is always false (never true).
//! - A clause containing some literal and its negation is a tautology, and always true.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use std::collections::BTreeSet;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// A string representation of the clause, with literals in order.
    /// The empty clause is represented as `EMPTY`.
    fn as_string(&self) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order and without repetition.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool;

    /// Whether every literal of the clause is a literal of `other`.
    fn subsumes(&self, other: &Self) -> bool;

    /// Whether the clause subsumes `other` and has fewer literals than `other`.
    fn strictly_subsumes(&self, other: &Self) -> bool {
        self.size() < other.size() && self.subsumes(other)
    }

    /// Every resolvent of the clause with `other`, one for each complementary pair of literals.
    ///
    /// The resolvents are not filtered, and so may include tautologies.
    fn resolvents(&self, other: &Self) -> Vec<CClause>;

    /// The value of the clause on the valuation, if determined.
    fn value_on(&self, valuation: &impl Valuation) -> Option<bool>;
}

/// The implementation of a clause as an ordered set of literals.
pub type SetClause = BTreeSet<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = SetClause;

impl Clause for SetClause {
    fn as_string(&self) -> String {
        if self.is_empty() {
            return "EMPTY".to_string();
        }
        let literals = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        format!("[{}]", literals.join(", "))
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        let mut previous = None;
        self.iter().filter_map(move |literal| {
            // Literals are ordered by atom, so repetitions are adjacent.
            match previous.replace(literal.atom()) {
                Some(atom) if atom == literal.atom() => None,
                _ => Some(literal.atom()),
            }
        })
    }

    fn is_tautology(&self) -> bool {
        self.iter()
            .any(|literal| !literal.polarity() && self.contains(&literal.negate()))
    }

    fn subsumes(&self, other: &Self) -> bool {
        self.is_subset(other)
    }

    fn resolvents(&self, other: &Self) -> Vec<CClause> {
        let mut resolvents = Vec::default();
        for literal in self {
            let complement = literal.negate();
            if other.contains(&complement) {
                let resolvent = self
                    .iter()
                    .filter(|l| *l != literal)
                    .chain(other.iter().filter(|l| **l != complement))
                    .copied()
                    .collect::<CClause>();
                resolvents.push(resolvent);
            }
        }
        resolvents
    }

    fn value_on(&self, valuation: &impl Valuation) -> Option<bool> {
        let mut the_value = Some(false);
        for literal in self {
            match valuation.value_of(literal.atom()) {
                Some(value) if value == literal.polarity() => return Some(true),
                Some(_) => {}
                None => the_value = None,
            }
        }
        the_value
    }
}
