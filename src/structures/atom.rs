/*!
(The representation of) an atom.

Atoms are opaque propositional symbols, identified by name.
Within formulas an atom is written as a single (ASCII) uppercase letter, and so an atom is represented by that letter.

```rust
# use plres::structures::atom::{is_atom, Atom};
let p: Atom = 'P';
assert!(is_atom(p));
assert!(!is_atom('p'));
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = char;

/// Whether the character names an atom.
pub fn is_atom(character: char) -> bool {
    character.is_ascii_uppercase()
}
