//! Generic structures, not specific to proof search.

pub mod minimal_pcg;
