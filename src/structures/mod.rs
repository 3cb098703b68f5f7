//! Key structures, such as literals, clauses, and expressions.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//! Use of a trait or it's canonical implementation within the library is situational.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//! A formula is written as text, read into an [expression](expression), and converted to a set of [clauses](clause), interpreted as the conjunction of those clauses.
//! The conversion preserves the truth value of the formula on every [valuation](valuation).
//!
//! ## Clause sets
//!
//! The clause set of a proof attempt is stored in the [clause database](crate::db).
//! A subset of the clause set, the set of support, is held by the [context](crate::context).

pub mod atom;
pub mod clause;
pub mod expression;
pub mod literal;
pub mod valuation;
