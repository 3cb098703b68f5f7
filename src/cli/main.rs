use clap::Parser;

use plres::{
    context::Context,
    types::err::{self},
};

mod args;
mod misc;

use args::{config_from_args, Args, Command};

/// Exit codes.
mod exit {
    pub const PROVEN: i32 = 0;
    pub const NOT_PROVEN: i32 = 10;
    pub const PARSE_ERROR: i32 = 2;
    pub const LIMIT: i32 = 3;
}

fn main() {
    #[cfg(feature = "logger")]
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Prove {
            premises,
            goal,
            strategy,
            max_steps,
            max_clauses,
        } => {
            let config = config_from_args(premises, goal, strategy, max_steps, max_clauses);
            let mut the_context = Context::from_config(config);

            match the_context.prove() {
                Ok(report) => {
                    misc::print_report(&report);
                    match report.provable {
                        true => std::process::exit(exit::PROVEN),
                        false => std::process::exit(exit::NOT_PROVEN),
                    }
                }

                Err(e) => {
                    misc::print_abort(&e);
                    match e.abort_kind() {
                        err::AbortKind::ParseError => std::process::exit(exit::PARSE_ERROR),
                        err::AbortKind::StepLimitExceeded
                        | err::AbortKind::ClauseLimitExceeded => std::process::exit(exit::LIMIT),
                    }
                }
            }
        }

        Command::Cnf { formulas } => {
            if !misc::print_clauses(&formulas) {
                std::process::exit(exit::PARSE_ERROR);
            }
        }
    }
}
