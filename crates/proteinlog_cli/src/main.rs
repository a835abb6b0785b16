//! Terminal front end for the protein tracker.
//!
//! # Responsibility
//! - Forward add/edit/delete/goal intents from stdin into the entry store.
//! - Re-render the dashboard through the observer contract after each
//!   accepted mutation.
//!
//! # Invariants
//! - All store access goes through the public tracker API; the CLI holds
//!   no state of its own beyond the input loop.

use log::info;
use proteinlog_core::{
    core_version, default_log_level, init_logging, EntryId, ProteinTracker, TrackerEvent,
    TrackerObserver, TrackerSnapshot,
};
use std::io::{self, BufRead, Write};
use std::str::SplitWhitespace;
use std::sync::Arc;

/// Re-renders the dashboard whenever the store reports a change.
struct DashboardRenderer;

impl TrackerObserver for DashboardRenderer {
    fn on_change(&self, _event: &TrackerEvent, snapshot: &TrackerSnapshot) {
        render(snapshot);
    }
}

fn render(snapshot: &TrackerSnapshot) {
    println!(
        "goal {:.1}g | consumed {:.1}g | remaining {:.1}g",
        snapshot.daily_goal_grams, snapshot.total_consumed_grams, snapshot.remaining_goal_grams
    );
    if snapshot.today.is_empty() {
        println!("  (no entries today)");
        return;
    }
    for entry in &snapshot.today {
        println!(
            "  {}  {:>6.1}g  {}",
            short_id(entry.id),
            entry.amount_grams,
            entry.logged_at.format("%H:%M")
        );
    }
}

fn short_id(id: EntryId) -> String {
    id.to_string().chars().take(8).collect()
}

/// Resolves a unique id prefix against all stored entries.
///
/// Prefixes are matched case-insensitively; ambiguous or unknown prefixes
/// are reported back to the user, never guessed.
fn resolve_entry_id(tracker: &ProteinTracker, prefix: &str) -> Result<EntryId, String> {
    let prefix = prefix.to_ascii_lowercase();
    let mut matches = tracker
        .entries()
        .iter()
        .filter(|entry| entry.id.to_string().starts_with(&prefix));
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry.id),
        (Some(_), Some(_)) => Err(format!("id prefix `{prefix}` is ambiguous")),
        (None, _) => Err(format!("no entry matches id prefix `{prefix}`")),
    }
}

fn parse_amount(arg: Option<&str>) -> Result<f64, String> {
    let raw = arg.ok_or_else(|| "expected an amount in grams".to_string())?;
    raw.parse().map_err(|_| format!("`{raw}` is not a number"))
}

fn print_help() {
    println!("commands:");
    println!("  add <grams>               log a protein entry");
    println!("  edit <id-prefix> <grams>  change an entry's amount");
    println!("  rm <id-prefix>            delete an entry");
    println!("  goal <grams>              set the daily goal");
    println!("  today                     show the dashboard");
    println!("  quit                      exit");
}

/// Runs one mutating command against the store.
fn run_mutation(
    tracker: &mut ProteinTracker,
    command: &str,
    parts: &mut SplitWhitespace<'_>,
) -> Result<(), String> {
    match command {
        "add" => {
            let grams = parse_amount(parts.next())?;
            tracker.add_entry(grams).map_err(|err| err.to_string())?;
        }
        "edit" => {
            let prefix = parts
                .next()
                .ok_or_else(|| "expected an id prefix".to_string())?;
            let id = resolve_entry_id(tracker, prefix)?;
            let grams = parse_amount(parts.next())?;
            tracker
                .update_entry(id, grams)
                .map_err(|err| err.to_string())?;
        }
        "rm" => {
            let prefix = parts
                .next()
                .ok_or_else(|| "expected an id prefix".to_string())?;
            let id = resolve_entry_id(tracker, prefix)?;
            tracker.remove_entry(id).map_err(|err| err.to_string())?;
        }
        "goal" => {
            let grams = parse_amount(parts.next())?;
            tracker
                .set_daily_goal(grams)
                .map_err(|err| err.to_string())?;
        }
        other => return Err(format!("unknown command `{other}` (try `help`)")),
    }
    Ok(())
}

/// Handles one input line. Returns `false` when the loop should stop.
fn dispatch(tracker: &mut ProteinTracker, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return true;
    };

    match command {
        "today" => render(&tracker.snapshot()),
        "help" => print_help(),
        "quit" | "exit" => return false,
        _ => {
            if let Err(err) = run_mutation(tracker, command, &mut parts) {
                println!("{err}");
            }
        }
    }
    true
}

fn main() {
    // Logging is opt-in for the CLI; without the env var the core stays silent.
    if let Ok(log_dir) = std::env::var("PROTEINLOG_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    let mut tracker = ProteinTracker::new();
    tracker.add_observer(Arc::new(DashboardRenderer));

    println!("proteinlog {} (type `help` for commands)", core_version());
    render(&tracker.snapshot());

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("stdin error: {err}");
                break;
            }
        }
        if !dispatch(&mut tracker, line.trim()) {
            break;
        }
    }
}
