//! Command-line driver for the clause checker.
//!
//! Stands in for the desktop UI collaborator: loads the library for a
//! (department, reinsurer) pair, reads pasted lines from stdin, prints the
//! per-line match report and the bulleted markup, and optionally writes
//! the portable RTF bytes for pasting into a word processor.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clausekit::audit::AuditLog;
use clausekit::highlight::matched_tokens;
use clausekit::interface::Department;
use clausekit::render::{build_review_items, decide_lines};
use clausekit::resolve::best_unique_matches;
use clausekit::session::{split_input_lines, DecisionSets, Session};
use clausekit::{library, render, rtf, LineDecision};

#[derive(Parser)]
#[command(name = "clausekit", about = "Match pasted clause lines against a clause library")]
struct Args {
    /// Root directory holding the per-department clause library files
    #[arg(long)]
    library_root: PathBuf,

    /// Department name, e.g. "Liability" or "Property / Special Risks"
    #[arg(long)]
    department: String,

    /// Reinsurer whose library to load
    #[arg(long)]
    reinsurer: String,

    /// Username recorded in the usage log
    #[arg(long, default_value = "cli")]
    user: String,

    /// Write the portable RTF bullet list to this file
    #[arg(long)]
    rtf_out: Option<PathBuf>,

    /// Directory for the usage log (no log is written when absent)
    #[arg(long)]
    audit_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let department = Department::from_name(&args.department)
        .with_context(|| format!("unknown department `{}`", args.department))?;
    let session = Session {
        username: args.user.clone(),
        department,
        reinsurer: args.reinsurer.clone(),
        is_admin: false,
    };

    let clauses = library::load_for(&args.library_root, department, &args.reinsurer);
    if clauses.is_empty() {
        log::warn!(
            "empty clause library for {} / {}; every line will be unmatched",
            department,
            args.reinsurer
        );
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading input lines from stdin")?;
    let lines = split_input_lines(&text);

    let matches = best_unique_matches(&lines, &clauses, department);
    let decisions = DecisionSets::initial(&lines, &matches);

    for (idx, (line, m)) in lines.iter().zip(&matches).enumerate() {
        match m {
            Some(m) => {
                let clause = &clauses[m.clause];
                let tokens = matched_tokens(line, clause);
                println!(
                    "line {idx}: matched \"{}\" score={} (matched on: {})",
                    clause.name,
                    m.score,
                    tokens.join(", ")
                );
            }
            None => println!("line {idx}: no match"),
        }
    }

    let items = build_review_items(&lines, &clauses, &matches, &decisions);
    let kept = decide_lines(&matches, &decisions)
        .iter()
        .filter(|d| !matches!(d, LineDecision::UnmatchedRejected))
        .count();
    println!("{kept}/{} lines kept", lines.len());
    println!("{}", render::bulleted_html(&items));

    if let Some(path) = &args.rtf_out {
        fs::write(path, rtf::build_rtf_bullets(&items))
            .with_context(|| format!("writing RTF to {}", path.display()))?;
        println!("wrote RTF to {}", path.display());
    }

    if let Some(dir) = &args.audit_dir {
        let log = AuditLog::open(dir).context("opening usage log")?;
        log.record(&session, "analyze").context("recording usage")?;
    }

    Ok(())
}
