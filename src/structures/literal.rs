//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [ABLiteral] structure, made of an atom (the 'a') and a boolean (the 'b').
//! A polarity of `true` is a positive literal, and a polarity of `false` the negation of the atom.
//!
//! An example:
//!
//! ```rust
//! # use plres::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new('P', true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 'P');
//! assert!(!literal.negate().polarity());
//!
//! assert_eq!(-literal, CLiteral::new('P', false));
//! assert_eq!(format!("{}", -literal), "~P");
//! ```
//!
//! Implementation of the literal trait requires implementation of two additional traits:
//! - [Ord]
//!   + Literals should be ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
//! - [Hash](std::hash::Hash)
//!   + Literals are hashable in order to allow clauses (and so sets of clauses) to be compared by value.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// Whether the literal is the negation of `other`.
    fn complements(&self, other: &Self) -> bool {
        self.atom() == other.atom() && self.polarity() != other.polarity()
    }
}

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug)]
pub struct ABLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

/// The canonical implementation of a literal.
pub type CLiteral = ABLiteral;

impl Literal for ABLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }
}

// Traits

impl PartialOrd for ABLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ABLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl PartialEq for ABLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.atom == other.atom && self.polarity == other.polarity
    }
}

impl Eq for ABLiteral {}

impl std::hash::Hash for ABLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.atom.hash(state);
        self.polarity.hash(state);
    }
}

impl std::ops::Neg for ABLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for ABLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "~{}", self.atom),
        }
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn negation_orders_first() {
        let p = CLiteral::new('P', true);
        assert!(-p < p);
        assert!(p < CLiteral::new('Q', false));
    }

    #[test]
    fn complements() {
        let p = CLiteral::new('P', true);
        assert!(p.complements(&-p));
        assert!(!p.complements(&p));
        assert!(!p.complements(&CLiteral::new('Q', false)));
    }
}
