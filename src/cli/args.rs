use clap::{Parser, Subcommand};

use plres::config::{Config, Strategy};

/// Proves goals from premises of propositional logic by resolution refutation
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Attempt to prove a goal from some premises
    Prove {
        /// A premise, may be given any number of times
        #[arg(short, long = "premise")]
        premises: Vec<String>,

        /// The goal
        #[arg(short, long)]
        goal: String,

        /// The strategy to use, where 0 is set-of-support and 1 is set-of-support with simplification
        #[arg(short, long, default_value = "0")]
        strategy: Strategy,

        /// The number of steps after which a search is abandoned
        #[arg(long)]
        max_steps: Option<usize>,

        /// The number of clauses at which a search is abandoned
        #[arg(long)]
        max_clauses: Option<usize>,
    },

    /// Display the clauses of some formulas
    Cnf {
        /// The formulas, each given as a single argument
        #[arg(required = true)]
        formulas: Vec<String>,
    },
}

/// A configuration from the arguments of the prove command.
///
/// Out of bounds values are reported, and the default value is kept.
pub fn config_from_args(
    premises: Vec<String>,
    goal: String,
    strategy: Strategy,
    max_steps: Option<usize>,
    max_clauses: Option<usize>,
) -> Config {
    let mut the_config = Config::new(premises, goal);

    the_config.strategy.value = strategy;

    if let Some(value) = max_steps {
        let (min, max) = the_config.max_steps.min_max();
        match the_config.max_steps.permits(&value) {
            true => the_config.max_steps.value = value,
            false => println!(
                "{} requires a value between {min} and {max}",
                the_config.max_steps.name
            ),
        }
    }

    if let Some(value) = max_clauses {
        let (min, max) = the_config.max_clauses.min_max();
        match the_config.max_clauses.permits(&value) {
            true => the_config.max_clauses.value = value,
            false => println!(
                "{} requires a value between {min} and {max}",
                the_config.max_clauses.name
            ),
        }
    }

    the_config
}
