/*!
Valuations --- assignments of (boolean) values to atoms.

A valuation need not be total.
The value of an [expression](crate::structures::expression::Expr) or [clause](crate::structures::clause::Clause) on a valuation is `None` when the valuation is silent on some atom the value depends on.

The canonical valuation is a map from atoms to booleans:

```rust
# use plres::structures::valuation::{valuations_over, CValuation, Valuation};
# use std::collections::BTreeSet;
let atoms = BTreeSet::from(['P', 'Q']);
let all = valuations_over(&atoms).collect::<Vec<CValuation>>();

assert_eq!(all.len(), 4);
assert!(all.iter().all(|valuation| valuation.value_of('P').is_some()));
assert_eq!(all[0].value_of('R'), None);
```
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::structures::atom::Atom;

/// Something which may return the value of an atom.
pub trait Valuation {
    /// The value of the atom on the valuation, if defined.
    fn value_of(&self, atom: Atom) -> Option<bool>;
}

/// The canonical implementation of a valuation.
pub type CValuation = BTreeMap<Atom, bool>;

impl Valuation for CValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(&atom).copied()
    }
}

/// An iterator over every total valuation of the given atoms.
///
/// The first valuation assigns false to every atom, and the last assigns true to every atom.
pub fn valuations_over(atoms: &BTreeSet<Atom>) -> impl Iterator<Item = CValuation> + '_ {
    // Atoms are single letters, so at most 26 bits of the mask are used.
    let count = 1_u64 << atoms.len();
    (0..count).map(move |mask| {
        atoms
            .iter()
            .enumerate()
            .map(|(index, atom)| (*atom, mask & (1 << index) != 0))
            .collect()
    })
}
