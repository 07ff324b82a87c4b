//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Every line is a submission except for
//! the `:new`, `:words`, `:help` and `:quit` commands. `:new <word>` starts
//! a round from a chosen root word.

use crate::game::{GameSession, Submission, SubmitError};
use crate::oracle::SpellingOracle;
use crate::output::display::{print_accepted, print_rejection, print_round_header, print_used_words};
use std::io::{self, BufRead, Write};

/// A line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command<'a> {
    NewRound,
    NewRoundWith(&'a str),
    ShowWords,
    Quit,
    Help,
    Word(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let (head, arg) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(head, arg)| (head, arg.trim()));

        match (head.to_lowercase().as_str(), arg) {
            (":new" | ":n" | ":start", "") => Self::NewRound,
            (":new" | ":n" | ":start", root) => Self::NewRoundWith(root),
            (":words" | ":w" | ":list", "") => Self::ShowWords,
            (":quit" | ":q" | ":exit", "") => Self::Quit,
            (":help" | ":h" | ":?", "") => Self::Help,
            _ => Self::Word(line),
        }
    }
}

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<O: SpellingOracle>(session: &mut GameSession<O>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, stdin.lock(), stdout.lock())
}

/// Run the simple mode against any input and output
///
/// Starts a round if none is in progress. Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<O, R, W>(session: &mut GameSession<O>, input: R, mut out: W) -> io::Result<()>
where
    O: SpellingOracle,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║               Word Scramble - Simple Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════╝\n")?;
    print_help(&mut out)?;

    if session.round().is_none() {
        session.start_round();
    }
    if let Some(round) = session.round() {
        print_round_header(&mut out, round)?;
    }
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line?;

        match Command::parse(&line) {
            Command::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Command::NewRound => {
                let round = session.start_round();
                writeln!(out, "\n🔄 New round started!")?;
                print_round_header(&mut out, round)?;
            }
            Command::NewRoundWith(root) => {
                let round = session.start_round_with(root);
                writeln!(out, "\n🔄 New round started!")?;
                print_round_header(&mut out, round)?;
            }
            Command::ShowWords => {
                if let Some(round) = session.round() {
                    print_used_words(&mut out, round)?;
                }
            }
            Command::Help => print_help(&mut out)?,
            Command::Word(word) => match session.submit(word) {
                Ok(Submission::Accepted(word)) => {
                    if let Some(round) = session.round() {
                        print_accepted(&mut out, &word, round)?;
                    }
                }
                Ok(Submission::Ignored) => {}
                Err(SubmitError::Rejected(reason)) => print_rejection(&mut out, reason)?,
                Err(SubmitError::NotStarted) => {
                    writeln!(out, "No round in progress. Type ':new' to start one.")?;
                }
            },
        }

        prompt(&mut out)?;
    }

    writeln!(out)?;
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Make as many words as you can from the letters of the root word.")?;
    writeln!(out, "Words need at least 3 letters and score one point per letter.\n")?;
    writeln!(
        out,
        "Commands: ':new' new round (':new <word>' to pick the root), ':words' list your words,"
    )?;
    writeln!(out, "          ':help' show this help, ':quit' to exit")?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "Word: ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::oracle::DictionaryOracle;

    fn session() -> GameSession<DictionaryOracle> {
        let oracle = DictionaryOracle::new("en", ["cat", "coat", "oat", "act"]);
        let config = GameConfig {
            seed: Some(1),
            ..GameConfig::default()
        };
        GameSession::new(vec!["taco".to_string()], oracle, config).unwrap()
    }

    fn play(session: &mut GameSession<DictionaryOracle>, input: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_simple_with(session, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn command_parsing() {
        assert_eq!(Command::parse(":new"), Command::NewRound);
        assert_eq!(Command::parse(" :Q "), Command::Quit);
        assert_eq!(Command::parse(":words"), Command::ShowWords);
        assert_eq!(Command::parse(":help"), Command::Help);
        assert_eq!(Command::parse("coat"), Command::Word("coat"));
        assert_eq!(Command::parse(":new  Marathon "), Command::NewRoundWith("Marathon"));
        assert_eq!(Command::parse(":quit now"), Command::Word(":quit now"));
    }

    #[test]
    fn help_lists_every_command() {
        let mut session = session();
        let text = play(&mut session, ":help\n:quit\n");

        for command in [":new", ":words", ":help", ":quit"] {
            assert!(text.contains(command), "help is missing {command}");
        }
        assert!(text.matches("':help'").count() >= 2);
    }

    #[test]
    fn new_round_with_chosen_root() {
        let mut session = session();
        let text = play(&mut session, "cat\n:new Coats\ncoast\n");

        assert!(text.contains("COATS"));
        let round = session.round().unwrap();
        assert_eq!(round.root_word(), "coats");
        assert!(round.used_words().is_empty());
    }

    #[test]
    fn plays_a_round() {
        let mut session = session();
        let text = play(&mut session, "cat\ncoat\ncat\n:quit\n");

        assert!(text.contains("TACO"));
        assert!(text.contains("Word used already"));
        assert!(text.contains("Thanks for playing"));

        let round = session.round().unwrap();
        assert_eq!(round.used_words(), &["coat", "cat"]);
        assert_eq!(round.score(), 7);
    }

    #[test]
    fn blank_lines_print_nothing() {
        let mut session = session();
        let text = play(&mut session, "\n   \n");

        assert!(!text.contains('✗'));
        assert!(session.round().unwrap().used_words().is_empty());
    }

    #[test]
    fn new_round_resets() {
        let mut session = session();
        let text = play(&mut session, "cat\n:new\n");

        assert!(text.contains("New round started"));
        assert!(session.round().unwrap().used_words().is_empty());
        assert_eq!(session.round().unwrap().score(), 0);
    }

    #[test]
    fn ends_at_end_of_input() {
        let mut session = session();
        let text = play(&mut session, "oat");

        assert!(!text.contains("Thanks for playing"));
        assert_eq!(session.round().unwrap().score(), 3);
    }

    #[test]
    fn rejection_messages_are_shown() {
        let mut session = session();
        let text = play(&mut session, "taco\ndog\nat\n");

        assert!(text.contains("Word is the root word"));
        assert!(text.contains("Word not possible"));
        assert!(text.contains("Word doesn't exist"));
    }
}
