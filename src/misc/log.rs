/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when following a proof attempt or diagnosing an issue.

Note, no log implementation is provided by the library.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [lexing](crate::builder::lexer)
    pub const LEXER: &str = "lexer";

    /// Logs related to [parsing](crate::builder::parser)
    pub const PARSER: &str = "parser";

    /// Logs related to [normalisation](crate::procedures::normalise)
    pub const NORMALISE: &str = "normalise";

    /// Logs related to [clausification](crate::procedures::clausify)
    pub const CLAUSIFY: &str = "clausify";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [simplification](crate::procedures::simplify)
    pub const SIMPLIFY: &str = "simplify";

    /// Logs related to [satisfiability checks](crate::procedures::satisfiable)
    pub const SATISFIABLE: &str = "satisfiable";

    /// Logs related to the [clause database](crate::db)
    pub const CLAUSE_DB: &str = "clause_db";
}
