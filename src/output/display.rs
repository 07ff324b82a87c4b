//! Display functions for game results

use super::formatters::{describe_word, letter_badge};
use crate::commands::CheckReport;
use crate::core::{RejectionReason, letter_count};
use crate::game::{RoundState, Submission};
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner for a freshly started round
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_round_header<W: Write>(out: &mut W, round: &RoundState) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {}",
        "Root word:".bright_cyan().bold(),
        round.root_word().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    Ok(())
}

/// Print a word that was just accepted, with the running score
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_accepted<W: Write>(out: &mut W, word: &str, round: &RoundState) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {}   {}",
        "✓".green().bold(),
        letter_badge(letter_count(word)).bright_cyan(),
        word.bright_white().bold(),
        format!("Score: {}", round.score()).bright_yellow()
    )
}

/// Print a rejection as a title line and a message line
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_rejection<W: Write>(out: &mut W, reason: RejectionReason) -> io::Result<()> {
    writeln!(out, "{} {}", "✗".red().bold(), reason.title().red().bold())?;
    writeln!(out, "  {}", reason.message())
}

/// Print every word found this round, most recent first
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_used_words<W: Write>(out: &mut W, round: &RoundState) -> io::Result<()> {
    if round.used_words().is_empty() {
        return writeln!(out, "{}", "No words yet".bright_black());
    }

    for word in round.used_words() {
        writeln!(
            out,
            "  {} {}",
            letter_badge(letter_count(word)).bright_cyan(),
            describe_word(word)
        )?;
    }
    writeln!(
        out,
        "{}",
        format!("Score: {}", round.score()).bright_yellow().bold()
    )
}

/// Print the verdict for each word of a batch check to stdout
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_check_report(report: &CheckReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_check_report(&mut out, report)?;
    out.flush()
}

/// Write the verdict for each word of a batch check
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_check_report<W: Write>(out: &mut W, report: &CheckReport) -> io::Result<()> {
    print_round_header(out, &report.round)?;

    for verdict in &report.verdicts {
        match &verdict.outcome {
            Ok(Submission::Accepted(word)) => {
                writeln!(out, "{} {}", "✓".green().bold(), word.bright_white().bold())?;
            }
            Ok(Submission::Ignored) => {
                writeln!(out, "{} {}", "-".bright_black(), "(blank, ignored)".bright_black())?;
            }
            Err(reason) => {
                writeln!(
                    out,
                    "{} {} {}",
                    "✗".red().bold(),
                    verdict.input.trim().bright_white(),
                    format!("({})", reason.title()).red()
                )?;
            }
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} accepted, {} rejected",
        report.accepted_count().to_string().green().bold(),
        report.rejected_count().to_string().red().bold()
    )?;
    writeln!(
        out,
        "{}",
        format!("Final score: {}", report.round.score())
            .bright_yellow()
            .bold()
    )
}
