//! Various procedures for reading formulas and proving goals.
//!
//! The procedures form a pipeline, from a parsed [expression](crate::structures::expression::Expr) to a verdict:
//! [normalise] → [clausify] → [resolution] (with [simplify] as an optional strategy, guarded by [satisfiable]).
//!
//! For the most part these are functions over expressions or clauses, though [resolution] is a method accessed via a context, and primarily placed here for documentation.

pub mod clausify;
pub mod normalise;
pub mod resolution;
pub mod satisfiable;
pub mod simplify;
