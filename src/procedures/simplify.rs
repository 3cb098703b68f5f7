//! Simplification of a collection of clauses.
//!
//! Two kinds of clause are removed:
//! - Tautologies, as a tautology is true on every valuation and so never contributes to a refutation.
//! - Subsumed clauses, where a clause is subsumed if some other clause of the collection is a strict subset of the clause.
//!   As any resolvent of a subsumed clause is subsumed by a resolvent of the subsuming clause (or by the subsuming clause itself), subsumed clauses are redundant.
//!
//! The empty clause is a subset of every clause, and so is never subsumed.
//!
//! When simplifying a [clause database](ClauseDB) the caller chooses which clauses may subsume others.
//! During a proof attempt these are the clauses which have entered the set of support (see [resolution](crate::procedures::resolution)).
//!
//! ```rust
//! # use plres::procedures::{clausify::clauses_from_str, simplify::simplify};
//! # use plres::structures::clause::Clause;
//! let clauses = clauses_from_str("(P | Q) & P & (Q | R | ~R)").unwrap();
//! assert_eq!(clauses.len(), 2);
//!
//! let simplified = simplify(&clauses);
//! assert_eq!(simplified.len(), 1);
//! assert_eq!(simplified[0].as_string(), "[P]");
//! ```

use std::collections::HashSet;

use crate::{
    db::ClauseDB,
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
};

/// The clauses of the collection which are neither tautologies nor subsumed, in order and without repetition.
pub fn simplify(clauses: &[CClause]) -> Vec<CClause> {
    let mut seen = HashSet::new();
    let candidates = clauses
        .iter()
        .filter(|clause| !clause.is_tautology())
        .filter(|clause| seen.insert(*clause))
        .collect::<Vec<_>>();

    let simplified = candidates
        .iter()
        .filter(|clause| {
            !candidates
                .iter()
                .any(|other| other.strictly_subsumes(clause))
        })
        .map(|clause| (*clause).clone())
        .collect::<Vec<_>>();

    if simplified.len() < clauses.len() {
        log::debug!(target: targets::SIMPLIFY, "{} clauses simplified to {}", clauses.len(), simplified.len());
    }

    simplified
}

impl ClauseDB {
    /// Removes tautologies, and each clause strictly subsumed by some clause of the database on which `may_subsume` holds.
    ///
    /// Returns the clauses removed, in order of addition.
    pub fn simplify(&mut self, may_subsume: impl Fn(&CClause) -> bool) -> Vec<CClause> {
        let subsumers = self
            .iter()
            .filter(|clause| may_subsume(clause))
            .cloned()
            .collect::<Vec<_>>();

        let removed = self.retain(|clause| {
            !clause.is_tautology()
                && !subsumers
                    .iter()
                    .any(|subsumer| subsumer.strictly_subsumes(clause))
        });

        if !removed.is_empty() {
            log::debug!(target: targets::SIMPLIFY, "{} clauses removed from the database", removed.len());
        }
        removed
    }
}
