/// Counts for a proof attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// The number of resolution steps taken, where a step resolves one clause from the set of support against the clause set.
    pub steps: usize,

    /// The largest size of the clause set observed.
    pub peak_clauses: usize,
}

impl Counters {
    /// Notes the current size of the clause set.
    pub fn note_clause_count(&mut self, count: usize) {
        self.peak_clauses = self.peak_clauses.max(count);
    }
}
