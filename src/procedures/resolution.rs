//! Proof of a goal from premises by resolution refutation.
//!
//! # Overview
//!
//! A goal follows from a collection of premises exactly when the premises together with the negation of the goal are unsatisfiable.
//! And, a collection of clauses is unsatisfiable exactly when the empty clause may be derived from the collection by resolution.
//!
//! So, [prove](Context::prove) clausifies each premise and the negation of the goal, and searches for a derivation of the empty clause.
//!
//! The search is restricted by a set of support, seeded with the clauses of the negated goal.
//! Each step draws a clause from the set of support and resolves the clause against every other clause of the clause set.
//! Every new resolvent is added to both the clause set and the set of support.
//!
//! Roughly, and abstracting from the limits on a search:
//!
//! ```rust,ignore
//! while let Some(clause) = self.selection.draw(&mut self.sos, ..) {
//!     match self.resolve_against_all(&clause) {
//!         Step::Refutation => return proven,
//!
//!         Step::Resolvents(batch) => {
//!             // Simplify, if required.
//!             for resolvent in batch {
//!                 self.clause_db.insert(resolvent.clone());
//!                 self.sos.push_back(resolvent);
//!             }
//!         }
//!     }
//! }
//! not proven
//! ```
//!
//! # Simplification
//!
//! With the [Simplify](crate::config::Strategy::Simplify) strategy, after each step tautologies and subsumed clauses are removed (see [simplify](crate::procedures::simplify)).
//! Only a *supported* clause, one which has entered the set of support at some point, may subsume another:
//! - A resolvent strictly subsumed by some other resolvent of the step, or by some supported clause of the clause set, is dropped.
//! - A clause of the clause set strictly subsumed by some supported clause of the clause set is removed.
//!
//! A clause removed from the clause set is removed from the set of support as well, and so the set of support is always contained in the clause set.
//!
//! A premise is never drawn from the set of support, and so a premise never subsumes.
//!
//! Further, subsumption is only applied when the premises are [satisfiable](crate::procedures::satisfiable).
//! With satisfiable premises a search with or without simplification is complete, and so the verdicts of the two agree.
//! With unsatisfiable premises whether the empty clause is found depends on which resolvents happen to duplicate premises, and a search with simplification proceeds exactly as a search without.
//!
//! # Limits
//!
//! A search is abandoned with an [error](err::ResolutionError) when:
//! - Some clause remains in the set of support after the configured maximum number of steps.
//! - The clause set reaches the configured maximum number of clauses, checked after seeding and after each step.
//!
//! Each error records the steps taken and the largest size of the clause set, so the caller may retry with larger limits.
//!
//! # Completeness
//!
//! Only clauses which descend from the negated goal are used to extend the clause set.
//! So, an inconsistency among the premises alone is not found, and `P, ~P` does not prove `Q`.
//!
//! # Example
//!
//! ```rust
//! # use plres::config::{Config, Strategy};
//! # use plres::context::Context;
//! # use plres::types::err::{self};
//! let mut config = Config::new(["(P -> Q) & (Q -> R)", "P"], "R");
//! config.strategy.value = Strategy::Simplify;
//!
//! let mut the_context = Context::from_config(config);
//! let report = the_context.prove().unwrap();
//! assert!(report.provable);
//! assert_eq!(report.steps, 3);
//!
//! the_context.config.max_clauses.value = 1;
//! assert!(matches!(
//!     the_context.prove(),
//!     Err(err::ErrorKind::Resolution(
//!         err::ResolutionError::ClauseLimitExceeded { steps: 0, .. }
//!     ))
//! ));
//! ```

use std::collections::HashSet;

use crate::{
    builder::parse_formula,
    config::Strategy,
    context::{Context, ContextState},
    misc::log::targets::{self},
    procedures::{
        clausify::{clausify, clauses_from_str},
        normalise::normalise_within_limit,
        satisfiable::satisfiable,
        simplify::simplify,
    },
    reports::{Report, TraceEntry},
    structures::{
        clause::{CClause, Clause},
        expression::Expr,
    },
    types::err::{self},
};

/// The outcome of resolving a clause against the clause set.
enum Step {
    /// The empty clause was derived.
    Refutation,

    /// Each resolvent new to the clause set, in order of derivation.
    Resolvents(Vec<CClause>),
}

impl Context {
    /// Attempts to prove the configured goal from the configured premises.
    ///
    /// Any state from a previous attempt is cleared.
    pub fn prove(&mut self) -> Result<Report, err::ErrorKind> {
        self.reset();
        self.state = ContextState::Proving;

        match self.search() {
            Ok(report) => {
                self.state = match report.provable {
                    true => ContextState::Proven,
                    false => ContextState::Unproven,
                };
                log::info!(target: targets::RESOLUTION, "{} after {} steps", self.state, report.steps);
                Ok(report)
            }

            Err(e) => {
                self.state = ContextState::Aborted;
                log::info!(target: targets::RESOLUTION, "Aborted: {e}");
                Err(e)
            }
        }
    }

    fn search(&mut self) -> Result<Report, err::ErrorKind> {
        let premises = self.seed()?;

        let simplifying = match self.config.strategy.value {
            Strategy::SetOfSupport => false,
            Strategy::Simplify => match satisfiable(&premises) {
                true => true,
                false => {
                    log::info!(target: targets::RESOLUTION, "Premises unsatisfiable, so no clause is simplified");
                    false
                }
            },
        };

        self.counters.note_clause_count(self.clause_db.len());
        self.check_clause_limit()?;

        loop {
            if self.sos.is_empty() {
                return Ok(self.report(false));
            }

            if self.counters.steps >= self.config.max_steps.value {
                return Err(err::ResolutionError::StepLimitExceeded {
                    steps: self.counters.steps,
                    peak_clauses: self.counters.peak_clauses,
                }
                .into());
            }

            let Some(clause) = self.selection.draw(&mut self.sos, &mut self.rng) else {
                return Ok(self.report(false));
            };
            log::debug!(target: targets::RESOLUTION, "Step {}: {}", self.counters.steps + 1, clause.as_string());

            let mut batch = match self.resolve_against_all(&clause) {
                Step::Refutation => {
                    self.counters.steps += 1;
                    self.counters.note_clause_count(self.clause_db.len());
                    return Ok(self.report(true));
                }

                Step::Resolvents(batch) => batch,
            };

            self.counters.steps += 1;

            if simplifying {
                batch = simplify(&batch);
                batch.retain(|resolvent| !self.supported_subsumer_of(resolvent));

                let removed = self
                    .clause_db
                    .simplify(|clause| self.supported.contains(clause));
                if !removed.is_empty() {
                    self.sos.retain(|clause| self.clause_db.contains(clause));
                }
            }

            for resolvent in batch {
                self.clause_db.insert(resolvent.clone());
                self.supported.insert(resolvent.clone());
                self.sos.push_back(resolvent);
            }

            self.counters.note_clause_count(self.clause_db.len());
            self.check_clause_limit()?;
        }
    }

    /// Clausifies the premises into the clause set, and the negated goal into both the set of support and the clause set.
    ///
    /// Returns the clauses of the premises.
    fn seed(&mut self) -> Result<Vec<CClause>, err::ErrorKind> {
        let mut premises = Vec::default();
        for premise in &self.config.premises {
            for clause in clauses_from_str(premise)? {
                self.clause_db.insert(clause.clone());
                premises.push(clause);
            }
        }

        let goal = parse_formula(&self.config.goal)?;
        let negated_goal = normalise_within_limit(&Expr::not(goal.expression))?;

        for clause in clausify(&negated_goal) {
            self.clause_db.insert(clause.clone());
            self.supported.insert(clause.clone());
            self.sos.push_back(clause);
        }

        log::debug!(target: targets::RESOLUTION, "Seeded {} clauses, {} supported", self.clause_db.len(), self.sos.len());
        Ok(premises)
    }

    /// Whether some supported clause of the clause set strictly subsumes the clause.
    fn supported_subsumer_of(&self, clause: &CClause) -> bool {
        self.clause_db
            .iter()
            .any(|other| self.supported.contains(other) && other.strictly_subsumes(clause))
    }

    /// Resolves the clause against every other clause of the clause set, in order of addition.
    fn resolve_against_all(&mut self, clause: &CClause) -> Step {
        let mut batch = Vec::default();
        let mut seen = HashSet::new();

        for other in self.clause_db.iter() {
            if other == clause {
                continue;
            }

            for resolvent in clause.resolvents(other) {
                if resolvent.is_empty() {
                    log::debug!(target: targets::RESOLUTION, "Refutation from {} and {}", clause.as_string(), other.as_string());
                    self.trace.push(TraceEntry {
                        first: clause.clone(),
                        second: other.clone(),
                        resolvent,
                    });
                    return Step::Refutation;
                }

                if resolvent.is_tautology() {
                    continue;
                }

                if self.clause_db.contains(&resolvent) || seen.contains(&resolvent) {
                    continue;
                }

                log::trace!(target: targets::RESOLUTION, "Resolvent: {}", resolvent.as_string());
                self.trace.push(TraceEntry {
                    first: clause.clone(),
                    second: other.clone(),
                    resolvent: resolvent.clone(),
                });
                seen.insert(resolvent.clone());
                batch.push(resolvent);
            }
        }

        Step::Resolvents(batch)
    }

    fn check_clause_limit(&self) -> Result<(), err::ResolutionError> {
        match self.clause_db.len() >= self.config.max_clauses.value {
            true => Err(err::ResolutionError::ClauseLimitExceeded {
                steps: self.counters.steps,
                peak_clauses: self.counters.peak_clauses,
            }),
            false => Ok(()),
        }
    }

    fn report(&self, provable: bool) -> Report {
        Report {
            provable,
            steps: self.counters.steps,
            peak_clauses: self.counters.peak_clauses,
            trace: self.trace.iter().map(|entry| entry.to_string()).collect(),
        }
    }
}
