//! A library for proving goals from premises of propositional logic by resolution refutation.
//!
//! plres reads formulas written with single uppercase letters for atoms and the connectives `~`, `&`, `|`, `->`, and `<->`.
//! A goal is proven from some premises by converting the premises and the negation of the goal to clauses, and deriving the empty clause by a set-of-support restricted resolution search.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config), which records the premises, the goal, and the limits of a search.
//! A proof is then attempted with [prove](crate::context::Context::prove), which returns either a [report](crate::reports::Report) or an [error](crate::types::err) noting the limit reached.
//!
//! Internally, a formula passes through a short pipeline:
//! - Text is read to an [expression](crate::structures::expression::Expr) by the [builder].
//! - The expression is rewritten to conjunctive normal form by [normalise](crate::procedures::normalise).
//! - The normal form is read to clauses by [clausify](crate::procedures::clausify).
//!
//! The clauses are stored in a [clause database](crate::db), from which the [resolution](crate::procedures::resolution) procedure searches for the empty clause.
//!
//! Useful starting points, then, may be:
//! - The [resolution procedure](crate::procedures::resolution) to inspect the dynamics of a proof attempt.
//! - The [structures] to familiarise yourself with the abstract elements of a proof and their representation (expressions, literals, clauses, etc.)
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Prove a goal by hypothetical syllogism.
//!
//! ```rust
//! # use plres::config::Config;
//! # use plres::context::Context;
//! let config = Config::new(["(P -> Q) & (Q -> R)", "P"], "R");
//! let mut the_context = Context::from_config(config);
//!
//! let report = the_context.prove().unwrap();
//! assert!(report.provable);
//!
//! for step in &report.trace {
//!     println!("{step}");
//! }
//! ```
//!
//! + Read the clauses of a formula.
//!
//! ```rust
//! # use plres::procedures::clausify::clauses_from_str;
//! # use plres::structures::clause::Clause;
//! let clauses = clauses_from_str("P <-> Q").unwrap();
//! let strings = clauses.iter().map(|clause| clause.as_string()).collect::<Vec<_>>();
//! assert_eq!(strings, vec!["[~P, Q]", "[P, ~Q]"]);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are lists in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the clause database](crate::db) can be filtered with `RUST_LOG=clause_db …` or,
//! - The clause drawn at each step of a search, without the resolvents derived, can be found with `RUST_LOG=resolution=debug …`
//!

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;
