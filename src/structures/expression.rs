/*!
Expressions --- the tree representation of a formula.

An expression is one of:
- An [atom](crate::structures::atom).
- The negation of an expression.
- A binary [connective](Connective) applied to a pair of expressions.

Each expression owns its subexpressions, and so expressions are trees (and never contain cycles).
Expressions are never mutated, and each [normalisation](crate::procedures::normalise) pass builds a fresh expression.

```rust
# use plres::structures::expression::Expr;
let p_implies_q = Expr::implies(Expr::atom('P'), Expr::atom('Q'));
let expression = Expr::and(p_implies_q, Expr::not(Expr::atom('R')));

assert_eq!(expression.to_string(), "(P -> Q) & ~R");
assert_eq!(expression.height(), 3);
```
*/

use std::collections::BTreeSet;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// Binary connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
    Implies,
    Iff,
}

impl Connective {
    /// The symbol used for the connective when writing a formula.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Implies => "->",
            Self::Iff => "<->",
        }
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    Atom(Atom),
    Negation(Box<Expr>),
    Binary(Connective, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn atom(atom: Atom) -> Self {
        Self::Atom(atom)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Expr) -> Self {
        Self::Negation(Box::new(operand))
    }

    pub fn binary(connective: Connective, left: Expr, right: Expr) -> Self {
        Self::Binary(connective, Box::new(left), Box::new(right))
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Self::binary(Connective::And, left, right)
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Self::binary(Connective::Or, left, right)
    }

    pub fn implies(left: Expr, right: Expr) -> Self {
        Self::binary(Connective::Implies, left, right)
    }

    pub fn iff(left: Expr, right: Expr) -> Self {
        Self::binary(Connective::Iff, left, right)
    }

    /// The literal the expression is, if the expression is an atom or a negated atom.
    pub fn as_literal(&self) -> Option<CLiteral> {
        match self {
            Self::Atom(atom) => Some(CLiteral::new(*atom, true)),
            Self::Negation(operand) => match operand.as_ref() {
                Self::Atom(atom) => Some(CLiteral::new(*atom, false)),
                _ => None,
            },
            Self::Binary(..) => None,
        }
    }

    /// The number of nodes on the longest path from the root of the expression to an atom.
    pub fn height(&self) -> usize {
        match self {
            Self::Atom(_) => 1,
            Self::Negation(operand) => 1 + operand.height(),
            Self::Binary(_, left, right) => 1 + left.height().max(right.height()),
        }
    }

    /// The atoms of the expression.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        let mut atoms = BTreeSet::default();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut BTreeSet<Atom>) {
        match self {
            Self::Atom(atom) => {
                atoms.insert(*atom);
            }
            Self::Negation(operand) => operand.collect_atoms(atoms),
            Self::Binary(_, left, right) => {
                left.collect_atoms(atoms);
                right.collect_atoms(atoms);
            }
        }
    }

    /// The value of the expression on the valuation, if determined.
    ///
    /// Evaluation is strict: if the value of any atom is undefined so is the value of the expression.
    pub fn value_on(&self, valuation: &impl Valuation) -> Option<bool> {
        match self {
            Self::Atom(atom) => valuation.value_of(*atom),
            Self::Negation(operand) => operand.value_on(valuation).map(|value| !value),
            Self::Binary(connective, left, right) => {
                let left = left.value_on(valuation)?;
                let right = right.value_on(valuation)?;
                let value = match connective {
                    Connective::And => left && right,
                    Connective::Or => left || right,
                    Connective::Implies => !left || right,
                    Connective::Iff => left == right,
                };
                Some(value)
            }
        }
    }

    /// Writes the operand of a connective, wrapped in parentheses if the operand is itself a binary expression.
    fn fmt_operand(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary(..) => write!(f, "({self})"),
            _ => write!(f, "{self}"),
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(atom) => write!(f, "{atom}"),
            Self::Negation(operand) => {
                write!(f, "~")?;
                operand.fmt_operand(f)
            }
            Self::Binary(connective, left, right) => {
                left.fmt_operand(f)?;
                write!(f, " {connective} ")?;
                right.fmt_operand(f)
            }
        }
    }
}

#[cfg(test)]
mod expression_tests {
    use super::*;
    use crate::structures::valuation::CValuation;

    #[test]
    fn display_nested() {
        let expression = Expr::not(Expr::and(
            Expr::atom('P'),
            Expr::iff(Expr::atom('Q'), Expr::not(Expr::atom('R'))),
        ));
        assert_eq!(expression.to_string(), "~(P & (Q <-> ~R))");
    }

    #[test]
    fn literals() {
        assert_eq!(
            Expr::not(Expr::atom('P')).as_literal(),
            Some(CLiteral::new('P', false))
        );
        assert_eq!(Expr::not(Expr::not(Expr::atom('P'))).as_literal(), None);
    }

    #[test]
    fn value() {
        let expression = Expr::iff(
            Expr::implies(Expr::atom('P'), Expr::atom('Q')),
            Expr::or(Expr::not(Expr::atom('P')), Expr::atom('Q')),
        );
        let mut valuation = CValuation::default();
        valuation.insert('P', true);
        assert_eq!(expression.value_on(&valuation), None);

        for p in [true, false] {
            for q in [true, false] {
                valuation.insert('P', p);
                valuation.insert('Q', q);
                assert_eq!(expression.value_on(&valuation), Some(true));
            }
        }
    }
}
