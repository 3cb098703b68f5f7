/*!
The context --- within which a proof attempt takes place.

A context is built from a [configuration](crate::config::Config) and owns every piece of state a proof attempt requires:
- The clause set, stored in a [clause database](crate::db::ClauseDB).
- The set of support, a queue of clauses drawn from in accordance with some [Selection] policy.
- A record of each clause which has entered the set of support.
- [Counters] for the steps taken and the largest clause set seen.
- The trace of resolution steps taken.

Each call to [prove](Context::prove) resets this state, and so repeated attempts from the same context do not interfere with one another.

# Example
```rust
# use plres::context::Context;
# use plres::config::Config;
let config = Config::new(["P -> Q", "P"], "Q");
let mut the_context = Context::from_config(config);

let report = the_context.prove().unwrap();
assert!(report.provable);
assert_eq!(report.trace.last().unwrap(), "Resolved [~P] with [P] -> EMPTY");

assert_eq!(the_context.counters.steps, report.steps);
```
*/

mod counters;
pub use counters::Counters;
mod selection;
pub use selection::Selection;

use std::collections::{HashSet, VecDeque};

use rand::SeedableRng;

use crate::{
    config::Config, db::ClauseDB, generic::minimal_pcg::MinimalPCG32, reports::TraceEntry,
    structures::clause::CClause,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// No proof has been attempted.
    Configuration,

    /// A proof is being attempted.
    Proving,

    /// The goal was proven from the premises.
    Proven,

    /// The set of support was exhausted without proving the goal.
    Unproven,

    /// The attempt was abandoned at some limit.
    Aborted,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Proving => write!(f, "Proving"),
            Self::Proven => write!(f, "Proven"),
            Self::Unproven => write!(f, "Unproven"),
            Self::Aborted => write!(f, "Aborted"),
        }
    }
}

/// The context of a proof attempt.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a proof attempt.
    pub counters: Counters,

    /// The clause set.
    /// See [db](crate::db) for details.
    pub clause_db: ClauseDB,

    /// The set of support.
    pub(crate) sos: VecDeque<CClause>,

    /// Each clause which has entered the set of support during the current attempt, including those since drawn.
    pub(crate) supported: HashSet<CClause>,

    /// The policy by which clauses are drawn from the set of support.
    pub selection: Selection,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng, used by [Selection::Random].
    pub(crate) rng: MinimalPCG32,

    pub(crate) trace: Vec<TraceEntry>,
}

impl Context {
    /// Creates a context from some given configuration, drawing from the set of support in order of addition.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,

            counters: Counters::default(),
            clause_db: ClauseDB::default(),
            sos: VecDeque::default(),
            supported: HashSet::default(),

            selection: Selection::default(),
            state: ContextState::Configuration,
            rng: MinimalPCG32::seed_from_u64(0),

            trace: Vec::default(),
        }
    }

    /// Sets the policy by which clauses are drawn from the set of support.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// The resolution steps of the most recent attempt, in the order taken.
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    /// The clauses remaining in the set of support.
    pub fn set_of_support(&self) -> impl Iterator<Item = &CClause> {
        self.sos.iter()
    }

    /// Clears the state of any previous attempt.
    pub(crate) fn reset(&mut self) {
        self.counters = Counters::default();
        self.clause_db.clear();
        self.sos.clear();
        self.supported.clear();
        self.trace.clear();
        self.state = ContextState::Configuration;

        let seed = match self.selection {
            Selection::Random(seed) => seed,
            Selection::Fifo | Selection::Shortest => 0,
        };
        self.rng = MinimalPCG32::seed_from_u64(seed);
    }
}
