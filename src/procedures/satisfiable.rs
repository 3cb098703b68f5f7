/*!
A check of whether a collection of clauses is satisfiable.

# Overview

The check is a plain DPLL search, without learning or backjumping:
- A clause with some literal true on the valuation is ignored.
- A clause with every literal false on the valuation is a conflict, and the valuation is abandoned.
- A clause with a single literal left without a value asserts the literal.
- If nothing is asserted, an atom without a value is decided, first true and then false.

Atoms are single letters, so a search decides at most twenty six atoms and the recursion is shallow.

The check is used by the [Simplify](crate::config::Strategy::Simplify) strategy, which removes subsumed clauses only when the premises of a proof attempt are satisfiable.
See [resolution](crate::procedures::resolution) for details.

```rust
# use plres::procedures::{clausify::clauses_from_str, satisfiable::satisfiable};
let clauses = clauses_from_str("(P | Q) & (~P | Q) & (P | ~Q)").unwrap();
assert!(satisfiable(&clauses));

let clauses = clauses_from_str("(P | Q) & (~P | Q) & (P | ~Q) & (~P | ~Q)").unwrap();
assert!(!satisfiable(&clauses));
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
};

/// The status of a clause on a partial valuation.
enum Status {
    Satisfied,
    Conflict,
    Asserting(CLiteral),
    Open(Atom),
}

/// Whether some valuation makes every clause of the collection true.
pub fn satisfiable(clauses: &[CClause]) -> bool {
    let result = search(clauses, CValuation::default());
    log::debug!(target: targets::SATISFIABLE, "{} clauses, satisfiable: {result}", clauses.len());
    result
}

fn search(clauses: &[CClause], mut valuation: CValuation) -> bool {
    loop {
        let mut asserted = false;
        let mut decision = None;

        for clause in clauses {
            match status(clause, &valuation) {
                Status::Satisfied => {}

                Status::Conflict => return false,

                Status::Asserting(literal) => {
                    log::trace!(target: targets::SATISFIABLE, "Asserted: {literal}");
                    valuation.insert(literal.atom(), literal.polarity());
                    asserted = true;
                }

                Status::Open(atom) => {
                    if decision.is_none() {
                        decision = Some(atom);
                    }
                }
            }
        }

        if asserted {
            continue;
        }

        let Some(atom) = decision else {
            return true;
        };

        return [true, false].into_iter().any(|value| {
            let mut valuation = valuation.clone();
            valuation.insert(atom, value);
            search(clauses, valuation)
        });
    }
}

fn status(clause: &CClause, valuation: &CValuation) -> Status {
    if clause
        .iter()
        .any(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
    {
        return Status::Satisfied;
    }

    let mut unvalued = clause
        .iter()
        .filter(|literal| valuation.value_of(literal.atom()).is_none());

    match (unvalued.next(), unvalued.next()) {
        (None, _) => Status::Conflict,
        (Some(literal), None) => Status::Asserting(*literal),
        (Some(literal), Some(_)) => Status::Open(literal.atom()),
    }
}

#[cfg(test)]
mod satisfiable_tests {
    use super::*;
    use crate::{
        procedures::clausify::clauses_from_str,
        structures::{clause::Clause, valuation::valuations_over},
    };

    fn clauses(formula: &str) -> Vec<CClause> {
        clauses_from_str(formula).unwrap()
    }

    #[test]
    fn trivial() {
        assert!(satisfiable(&[]));
        assert!(!satisfiable(&[CClause::default()]));
        assert!(satisfiable(&clauses("P")));
        assert!(!satisfiable(&clauses("P & ~P")));
    }

    #[test]
    fn assertion_chain() {
        assert!(!satisfiable(&clauses(
            "P & (~P | Q) & (~Q | R) & (~R | S) & ~S"
        )));
        assert!(satisfiable(&clauses("P & (~P | Q) & (~Q | R) & (~R | S)")));
    }

    #[test]
    fn pigeonhole() {
        // Three pigeons, two holes: A and B for the first pigeon, C and D for the second, E and F for the third.
        let formula = "(A | B) & (C | D) & (E | F) \
                       & (~A | ~C) & (~A | ~E) & (~C | ~E) \
                       & (~B | ~D) & (~B | ~F) & (~D | ~F)";
        assert!(!satisfiable(&clauses(formula)));
    }

    #[test]
    fn agrees_with_valuations() {
        for formula in [
            "(P | Q) & (~P | R) & (~Q | R) & ~R",
            "(P | Q | R) & (~P | ~Q) & (~Q | ~R) & (~P | ~R)",
            "(P <-> Q) & (Q <-> ~R) & (R <-> P)",
            "(P -> Q) & (Q -> R) & (R -> S) & P & ~S",
            "(P | ~Q) & (Q | ~R) & (R | ~S) & (S | ~P)",
        ] {
            let clauses = clauses(formula);
            let atoms = clauses.iter().flat_map(|clause| clause.atoms()).collect();
            let expected = valuations_over(&atoms)
                .any(|valuation| clauses.iter().all(|c| c.value_on(&valuation) == Some(true)));
            assert_eq!(satisfiable(&clauses), expected, "{formula}");
        }
    }
}
