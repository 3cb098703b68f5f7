use plres::{
    procedures::clausify::clauses_from_str,
    reports::Report,
    structures::clause::Clause,
    types::err::{self},
};

pub fn print_report(report: &Report) {
    println!("{report}");

    if !report.trace.is_empty() {
        println!("Proof sequence:");
        for (index, step) in report.trace.iter().enumerate() {
            println!("{:>4}. {step}", index + 1);
        }
    }
}

pub fn print_abort(e: &err::ErrorKind) {
    println!("ABORT ({}): {e}", e.abort_kind());
}

/// Prints the clauses of each formula, returning false if some formula could not be read.
pub fn print_clauses(formulas: &[String]) -> bool {
    let mut all_read = true;

    for formula in formulas {
        match clauses_from_str(formula) {
            Ok(clauses) => {
                let strings = clauses
                    .iter()
                    .map(|clause| clause.as_string())
                    .collect::<Vec<_>>();
                match strings.is_empty() {
                    true => println!("{formula}: (no clauses)"),
                    false => println!("{formula}: {}", strings.join(" & ")),
                }
            }

            Err(e) => {
                println!("{formula}: {e}");
                all_read = false;
            }
        }
    }

    all_read
}
