/*!
The clause database --- the clause set of a proof attempt.

Clauses are stored in order of addition, and iteration over the database follows this order.
This keeps a proof attempt deterministic, as the order in which clauses are considered fixes the content of a trace.

Alongside the ordered store an index of clauses is kept, so membership is checked by value.
A clause is stored at most once.

```rust
# use plres::db::ClauseDB;
# use plres::structures::clause::CClause;
# use plres::structures::literal::{CLiteral, Literal};
let p = CLiteral::new('P', true);

let mut clause_db = ClauseDB::default();
assert!(clause_db.insert(CClause::from([p])));
assert!(!clause_db.insert(CClause::from([p])));

assert_eq!(clause_db.len(), 1);
assert!(clause_db.contains(&CClause::from([p])));
```
*/

use std::collections::HashSet;

use crate::{
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
};

/// An insertion-ordered set of clauses.
#[derive(Clone, Debug, Default)]
pub struct ClauseDB {
    clauses: Vec<CClause>,
    index: HashSet<CClause>,
}

impl ClauseDB {
    /// Adds a clause to the database, returning false if the clause was already present.
    pub fn insert(&mut self, clause: CClause) -> bool {
        match self.index.insert(clause.clone()) {
            true => {
                log::trace!(target: targets::CLAUSE_DB, "Added: {}", clause.as_string());
                self.clauses.push(clause);
                true
            }
            false => false,
        }
    }

    pub fn contains(&self, clause: &CClause) -> bool {
        self.index.contains(clause)
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// An iterator over the clauses of the database, in order of addition.
    pub fn iter(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// The clauses of the database, in order of addition.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// Keeps only those clauses on which `keep` holds, returning the clauses removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&CClause) -> bool) -> Vec<CClause> {
        let mut removed = Vec::default();
        let clauses = std::mem::take(&mut self.clauses);
        for clause in clauses {
            match keep(&clause) {
                true => self.clauses.push(clause),
                false => {
                    self.index.remove(&clause);
                    log::trace!(target: targets::CLAUSE_DB, "Removed: {}", clause.as_string());
                    removed.push(clause);
                }
            }
        }
        removed
    }

    /// Removes every clause from the database.
    pub fn clear(&mut self) {
        self.clauses.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod clause_db_tests {
    use super::*;
    use crate::structures::literal::{CLiteral, Literal};

    #[test]
    fn retain_preserves_order() {
        let mut clause_db = ClauseDB::default();
        for atom in ['P', 'Q', 'R', 'S'] {
            clause_db.insert(CClause::from([CLiteral::new(atom, true)]));
        }

        let removed = clause_db.retain(|clause| !clause.contains(&CLiteral::new('Q', true)));
        assert_eq!(removed, vec![CClause::from([CLiteral::new('Q', true)])]);

        let remaining = clause_db
            .iter()
            .map(|clause| clause.as_string())
            .collect::<Vec<_>>();
        assert_eq!(remaining, vec!["[P]", "[R]", "[S]"]);

        assert!(!clause_db.contains(&CClause::from([CLiteral::new('Q', true)])));
        assert!(clause_db.insert(CClause::from([CLiteral::new('Q', true)])));
    }
}
