use std::str::FromStr;

/// Variant strategies for a resolution search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strategy {
    /// Every resolution step takes one clause from the set of support.
    SetOfSupport = 0,

    /// As [SetOfSupport](Strategy::SetOfSupport), and after each step tautological and subsumed clauses are removed.
    Simplify = 1,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SetOfSupport => write!(f, "SetOfSupport"),
            Self::Simplify => write!(f, "Simplify"),
        }
    }
}

impl Strategy {
    /// The minimum Strategy type.
    pub const MIN: Strategy = Strategy::SetOfSupport;

    /// The maximum Strategy type.
    pub const MAX: Strategy = Strategy::Simplify;
}

impl TryFrom<u8> for Strategy {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::SetOfSupport),
            1 => Ok(Self::Simplify),
            _ => Err(value),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" | "sos" | "SetOfSupport" => Ok(Self::SetOfSupport),

            "1" | "simplify" | "Simplify" => Ok(Self::Simplify),

            unknown => Err(format!(
                "unknown strategy '{unknown}', expected 0 (set-of-support) or 1 (set-of-support + simplification)"
            )),
        }
    }
}
