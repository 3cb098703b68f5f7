use rand::{RngCore, SeedableRng};

use plres::{
    config::{Config, Strategy},
    context::{Context, Selection},
    generic::minimal_pcg::MinimalPCG32,
    procedures::{clausify::clauses_from_str, satisfiable::satisfiable},
    reports::Report,
    types::err::{self},
};

fn prove_with(
    premises: &[&str],
    goal: &str,
    strategy: Strategy,
    selection: Selection,
) -> Result<Report, err::ErrorKind> {
    let mut config = Config::new(premises.iter().copied(), goal);
    config.strategy.value = strategy;
    Context::from_config(config)
        .with_selection(selection)
        .prove()
}

fn prove(premises: &[&str], goal: &str) -> Result<Report, err::ErrorKind> {
    prove_with(premises, goal, Strategy::SetOfSupport, Selection::Fifo)
}

/// Premises, goal, and whether the goal follows from the premises.
const PROBLEMS: [(&[&str], &str, bool); 9] = [
    (&["P -> Q", "P"], "Q", true),
    (&["(P -> Q) & (Q -> R)", "P"], "R", true),
    (&["P <-> Q", "Q"], "P", true),
    (&["P | Q", "P -> R", "Q -> R"], "R", true),
    (&["P -> Q"], "~Q -> ~P", true),
    (&["(P -> Q) & (Q -> R)", "P | S", "S -> T"], "R | T", true),
    (&[], "P | ~P", true),
    (&["P"], "~P", false),
    (&["P | Q"], "P", false),
];

const ATOMS: [char; 4] = ['P', 'Q', 'R', 'S'];

/// A disjunction of one to three literals.
fn random_clause(rng: &mut MinimalPCG32) -> String {
    let size = 1 + rng.next_u32() as usize % 3;
    (0..size)
        .map(|_| {
            let atom = ATOMS[rng.next_u32() as usize % ATOMS.len()];
            match rng.next_u32() % 2 {
                0 => format!("~{atom}"),
                _ => atom.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Up to five premises, each a clause, and a goal whose negation is one or two clauses.
///
/// About a quarter of the premise sets are made inconsistent with a complementary pair of units.
fn random_problem(rng: &mut MinimalPCG32) -> (Vec<String>, String) {
    let count = rng.next_u32() % 6;
    let mut premises = (0..count).map(|_| random_clause(rng)).collect::<Vec<_>>();

    if rng.next_u32() % 4 == 0 {
        let atom = ATOMS[rng.next_u32() as usize % ATOMS.len()];
        premises.push(atom.to_string());
        premises.push(format!("~{atom}"));
    }

    let count = 1 + rng.next_u32() % 2;
    let negated_goal = (0..count)
        .map(|_| format!("({})", random_clause(rng)))
        .collect::<Vec<_>>()
        .join(" & ");

    (premises, format!("~({negated_goal})"))
}

fn clauses_of(formulas: &[&str]) -> Vec<plres::structures::clause::CClause> {
    formulas
        .iter()
        .flat_map(|formula| clauses_from_str(formula).unwrap())
        .collect()
}

mod basic {
    use super::*;

    #[test]
    fn modus_ponens() {
        let report = prove(&["P -> Q", "P"], "Q").unwrap();
        assert!(report.provable);
        assert_eq!(report.steps, 2);
        assert_eq!(report.peak_clauses, 4);
        assert_eq!(report.trace.last().unwrap(), "Resolved [~P] with [P] -> EMPTY");
    }

    #[test]
    fn hypothetical_syllogism() {
        let report = prove(&["(P -> Q) & (Q -> R)", "P"], "R").unwrap();
        assert!(report.provable);
        assert_eq!(report.steps, 3);
        assert_eq!(report.peak_clauses, 6);
        assert_eq!(
            report.trace,
            vec![
                "Resolved [~R] with [~Q, R] -> [~Q]",
                "Resolved [~Q] with [~P, Q] -> [~P]",
                "Resolved [~P] with [P] -> EMPTY",
            ]
        );
    }

    #[test]
    fn not_provable() {
        let report = prove(&["P"], "~P").unwrap();
        assert!(!report.provable);
        assert_eq!(report.steps, 1);
        assert_eq!(report.peak_clauses, 1);
    }

    #[test]
    fn verdicts() {
        for (premises, goal, provable) in PROBLEMS {
            let report = prove(premises, goal).unwrap();
            assert_eq!(report.provable, provable, "{premises:?} ⊢ {goal}");
        }
    }

    #[test]
    fn inconsistent_premises_unused() {
        // Only clauses descended from the negated goal are extended.
        let report = prove(&["P", "~P"], "Q").unwrap();
        assert!(!report.provable);
    }
}

mod limits {
    use super::*;

    #[test]
    fn clause_limit_at_seeding() {
        let mut config = Config::new(["(P -> Q) & (Q -> R)", "P"], "R");
        config.max_clauses.value = 1;

        let result = Context::from_config(config).prove();
        assert_eq!(
            result,
            Err(err::ErrorKind::Resolution(
                err::ResolutionError::ClauseLimitExceeded {
                    steps: 0,
                    peak_clauses: 4
                }
            ))
        );
        assert_eq!(
            result.unwrap_err().abort_kind(),
            err::AbortKind::ClauseLimitExceeded
        );
    }

    #[test]
    fn clause_limit_after_step() {
        let mut config = Config::new(["(P -> Q) & (Q -> R)", "P"], "R");
        config.max_clauses.value = 5;

        assert_eq!(
            Context::from_config(config).prove(),
            Err(err::ErrorKind::Resolution(
                err::ResolutionError::ClauseLimitExceeded {
                    steps: 1,
                    peak_clauses: 5
                }
            ))
        );
    }

    #[test]
    fn step_limit() {
        let mut config = Config::new(["(P -> Q) & (Q -> R)", "P"], "R");
        config.max_steps.value = 1;

        let result = Context::from_config(config).prove();
        assert_eq!(
            result,
            Err(err::ErrorKind::Resolution(
                err::ResolutionError::StepLimitExceeded {
                    steps: 1,
                    peak_clauses: 5
                }
            ))
        );

        let message = result.unwrap_err().to_string();
        assert!(message.contains("1 steps"));
        assert!(message.contains("5 clauses"));
    }

    #[test]
    fn retry_with_larger_limits() {
        let mut config = Config::new(["(P -> Q) & (Q -> R)", "P"], "R");
        config.max_steps.value = 1;

        let mut the_context = Context::from_config(config);
        assert!(the_context.prove().is_err());

        the_context.config.max_steps.value = 3;
        assert!(the_context.prove().unwrap().provable);
    }

    #[test]
    fn parse_errors() {
        let result = prove(&["P -> (Q"], "Q");
        assert_eq!(result.unwrap_err().abort_kind(), err::AbortKind::ParseError);

        let result = prove(&["P"], "p");
        assert_eq!(
            result,
            Err(err::ErrorKind::Lex(err::LexError {
                character: 'p',
                position: 0
            }))
        );

        let mut equivalences = "P".to_string();
        for _ in 0..30 {
            equivalences = format!("Q <-> ({equivalences})");
        }
        let result = prove(&["P"], &equivalences);
        assert_eq!(
            result,
            Err(err::ErrorKind::Parse(err::ParseError::NormalFormLimit))
        );
    }
}

mod strategies {
    use super::*;

    #[test]
    fn simplification_keeps_verdicts() {
        for (premises, goal, _) in PROBLEMS {
            let plain = prove_with(premises, goal, Strategy::SetOfSupport, Selection::Fifo).unwrap();
            let simplified = prove_with(premises, goal, Strategy::Simplify, Selection::Fifo).unwrap();

            assert_eq!(plain.provable, simplified.provable, "{premises:?} ⊢ {goal}");
            assert!(simplified.steps <= plain.steps, "{premises:?} ⊢ {goal}");
            assert!(simplified.peak_clauses <= plain.peak_clauses, "{premises:?} ⊢ {goal}");
        }
    }

    #[test]
    fn simplification_reduces_peak() {
        let plain = prove_with(
            &["(P -> Q) & (Q -> R)", "P"],
            "R",
            Strategy::SetOfSupport,
            Selection::Fifo,
        )
        .unwrap();
        let simplified = prove_with(
            &["(P -> Q) & (Q -> R)", "P"],
            "R",
            Strategy::Simplify,
            Selection::Fifo,
        )
        .unwrap();

        assert_eq!(plain.peak_clauses, 6);
        assert_eq!(simplified.peak_clauses, 5);
    }

    #[test]
    fn simplification_keeps_verdicts_on_random_problems() {
        let mut rng = MinimalPCG32::seed_from_u64(17);
        let mut inconsistent = 0;
        let mut provable = 0;

        for _ in 0..256 {
            let (premises, goal) = random_problem(&mut rng);
            let premises = premises.iter().map(String::as_str).collect::<Vec<_>>();

            let plain = prove_with(&premises, &goal, Strategy::SetOfSupport, Selection::Fifo).unwrap();
            let simplified = prove_with(&premises, &goal, Strategy::Simplify, Selection::Fifo).unwrap();

            assert_eq!(plain.provable, simplified.provable, "{premises:?} ⊢ {goal}");
            assert!(simplified.steps <= plain.steps, "{premises:?} ⊢ {goal}");
            assert!(simplified.peak_clauses <= plain.peak_clauses, "{premises:?} ⊢ {goal}");

            let premise_clauses = clauses_of(&premises);
            match satisfiable(&premise_clauses) {
                true => {
                    // With satisfiable premises the search is complete.
                    let negated_goal = format!("~({goal})");
                    let mut clauses = premise_clauses;
                    clauses.extend(clauses_of(&[negated_goal.as_str()]));
                    assert_eq!(plain.provable, !satisfiable(&clauses), "{premises:?} ⊢ {goal}");
                }
                false => inconsistent += 1,
            }

            if plain.provable {
                provable += 1;
            }
        }

        assert!(inconsistent > 0);
        assert!(provable > 0);
    }

    #[test]
    fn inconsistent_premises_keep_verdicts() {
        for (premises, goal) in [
            (&["P", "~P", "~Q"][..], "~(S & (P | Q))"),
            (&["Q | ~R", "Q", "S", "~Q", "~Q | ~S | ~P"][..], "~P | ~S"),
        ] {
            let plain = prove_with(premises, goal, Strategy::SetOfSupport, Selection::Fifo).unwrap();
            let simplified = prove_with(premises, goal, Strategy::Simplify, Selection::Fifo).unwrap();

            assert!(plain.provable, "{premises:?} ⊢ {goal}");
            assert_eq!(plain, simplified, "{premises:?} ⊢ {goal}");
        }

        let report = prove_with(
            &["Q | ~R", "Q", "S", "~Q", "~Q | ~S | ~P"],
            "~P | ~S",
            Strategy::Simplify,
            Selection::Fifo,
        )
        .unwrap();
        assert_eq!((report.steps, report.peak_clauses), (6, 13));
    }

    #[test]
    fn subsumed_goal_clauses_not_rederived() {
        // The premise [~P] is a subset of the goal clause [~P, ~Q], which is kept.
        let report = prove_with(
            &["S | Q", "~P", "~S | ~Q"],
            "P & Q",
            Strategy::Simplify,
            Selection::Fifo,
        )
        .unwrap();
        assert!(!report.provable);
        assert_eq!(report.steps, 2);
    }
}

mod selection {
    use super::*;

    #[test]
    fn verdict_independent_of_selection() {
        let mut selections = vec![Selection::Fifo, Selection::Shortest];
        selections.extend((0..16).map(Selection::Random));

        for strategy in [Strategy::SetOfSupport, Strategy::Simplify] {
            for selection in &selections {
                for (premises, goal, provable) in PROBLEMS {
                    let report = prove_with(premises, goal, strategy, *selection).unwrap();
                    assert_eq!(
                        report.provable, provable,
                        "{premises:?} ⊢ {goal} with {strategy} and {selection}"
                    );
                }
            }
        }
    }

    #[test]
    fn seeded_selection_repeats() {
        let premises = ["(P -> Q) & (Q -> R)", "P | S", "S -> T"];
        let first = prove_with(&premises, "R | T", Strategy::SetOfSupport, Selection::Random(7)).unwrap();
        let second = prove_with(&premises, "R | T", Strategy::SetOfSupport, Selection::Random(7)).unwrap();
        assert_eq!(first, second);
    }
}
