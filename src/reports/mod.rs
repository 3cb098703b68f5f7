/*!
Reports for the context.

A successful or exhausted proof attempt yields a [Report].
An attempt abandoned at some limit yields an [error](crate::types::err::ResolutionError) instead, and so there is no report of an unknown outcome.
*/

use crate::structures::clause::{CClause, Clause};

/// A single resolution step: the clause drawn from the set of support, the clause resolved against, and the resolvent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    pub first: CClause,
    pub second: CClause,
    pub resolvent: CClause,
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Resolved {} with {} -> {}",
            self.first.as_string(),
            self.second.as_string(),
            self.resolvent.as_string()
        )
    }
}

/// The outcome of a proof attempt which ran to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Whether the empty clause was derived.
    pub provable: bool,

    /// The number of resolution steps taken.
    pub steps: usize,

    /// The largest size of the clause set during the attempt.
    pub peak_clauses: usize,

    /// Each resolution step which derived a new clause, in order.
    pub trace: Vec<String>,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.provable {
            true => writeln!(f, "RESULT: Goal is proven")?,
            false => writeln!(f, "RESULT: Goal cannot be proven")?,
        }
        writeln!(f, "Steps: {}", self.steps)?;
        write!(f, "Maximum clauses in memory: {}", self.peak_clauses)
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::structures::literal::{CLiteral, Literal};

    #[test]
    fn trace_entry_display() {
        let entry = TraceEntry {
            first: CClause::from([CLiteral::new('Q', false)]),
            second: CClause::from([CLiteral::new('P', false), CLiteral::new('Q', true)]),
            resolvent: CClause::from([CLiteral::new('P', false)]),
        };
        assert_eq!(entry.to_string(), "Resolved [~Q] with [~P, Q] -> [~P]");

        let refutation = TraceEntry {
            first: CClause::from([CLiteral::new('P', false)]),
            second: CClause::from([CLiteral::new('P', true)]),
            resolvent: CClause::default(),
        };
        assert_eq!(refutation.to_string(), "Resolved [~P] with [P] -> EMPTY");
    }

    #[test]
    fn report_display() {
        let report = Report {
            provable: false,
            steps: 1,
            peak_clauses: 1,
            trace: Vec::default(),
        };
        assert_eq!(
            report.to_string(),
            "RESULT: Goal cannot be proven\nSteps: 1\nMaximum clauses in memory: 1"
        );
    }
}
