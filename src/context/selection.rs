use std::collections::VecDeque;

use rand_core::RngCore;

use crate::{
    generic::minimal_pcg::MinimalPCG32,
    structures::clause::{CClause, Clause},
};

/// Policies for drawing a clause from the set of support.
///
/// Each policy is fair: a clause added to the set of support is drawn after finitely many other clauses.[^fair]
/// The policy may change the steps taken and the trace of an attempt, though not whether a goal is proven.
///
/// [^fair]: For [Shortest](Selection::Shortest) this follows from the set of support being drawn from a finite collection of clauses, as clauses are never stored twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// The clause added earliest.
    #[default]
    Fifo,

    /// The clause with fewest literals, with ties broken by the clause added earliest.
    Shortest,

    /// Some clause, drawn at random from a source seeded with the given value.
    Random(u64),
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fifo => write!(f, "Fifo"),
            Self::Shortest => write!(f, "Shortest"),
            Self::Random(seed) => write!(f, "Random({seed})"),
        }
    }
}

impl Selection {
    /// Removes a clause from the queue in accordance with the policy.
    pub(crate) fn draw(
        &self,
        queue: &mut VecDeque<CClause>,
        rng: &mut MinimalPCG32,
    ) -> Option<CClause> {
        match self {
            Self::Fifo => queue.pop_front(),

            Self::Shortest => {
                let index = queue
                    .iter()
                    .enumerate()
                    .min_by_key(|(index, clause)| (clause.size(), *index))
                    .map(|(index, _)| index)?;
                queue.remove(index)
            }

            Self::Random(_) => match queue.len() {
                0 => None,
                length => queue.remove(rng.next_u32() as usize % length),
            },
        }
    }
}
