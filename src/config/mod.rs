/*!
Configuration of a proof attempt.

A [Config] is the record of a single proof attempt: the premises, the goal, and the limits within which the goal should be proven.

The configuration is fixed when a [context](crate::context) is built, and the context reads from the configuration when [prove](crate::context::Context::prove) is called.

Configurable values are [ConfigOption]s, which pair a value with a name and the bounds any value must fall within.

```rust
# use plres::config::{Config, Strategy};
let mut config = Config::new(["P -> Q", "P"], "Q");
assert_eq!(config.max_steps.value, 1000);

config.strategy.value = Strategy::Simplify;
assert!(!config.max_clauses.permits(&0));
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod strategy;
pub use strategy::Strategy;

/// Default values of a configuration.
pub mod defaults {
    use super::Strategy;

    pub const STRATEGY: Strategy = Strategy::SetOfSupport;
    pub const MAX_STEPS: usize = 1000;
    pub const MAX_CLAUSES: usize = 10_000;
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The premises, each a formula.
    pub premises: Vec<String>,

    /// The goal, to be proven from the premises.
    pub goal: String,

    /// The strategy to use for the resolution search.
    pub strategy: ConfigOption<Strategy>,

    /// The number of steps after which a search is abandoned.
    pub max_steps: ConfigOption<usize>,

    /// The number of clauses at which a search is abandoned.
    pub max_clauses: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            premises: Vec::default(),
            goal: String::default(),

            strategy: ConfigOption {
                name: "strategy",
                min: Strategy::MIN,
                max: Strategy::MAX,
                value: defaults::STRATEGY,
            },

            max_steps: ConfigOption {
                name: "max_steps",
                min: 0,
                max: usize::MAX,
                value: defaults::MAX_STEPS,
            },

            max_clauses: ConfigOption {
                name: "max_clauses",
                min: 1,
                max: usize::MAX,
                value: defaults::MAX_CLAUSES,
            },
        }
    }
}

impl Config {
    /// A default configuration for proving the goal from the premises.
    pub fn new<P: Into<String>>(
        premises: impl IntoIterator<Item = P>,
        goal: impl Into<String>,
    ) -> Self {
        Config {
            premises: premises.into_iter().map(Into::into).collect(),
            goal: goal.into(),
            ..Config::default()
        }
    }
}
