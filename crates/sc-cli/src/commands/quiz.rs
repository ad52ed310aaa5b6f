use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use sc_quiz::{Action, Outcome, ViewerSession};
use sc_view::text::quiz_text;

pub fn run(catalog: Option<&Path>, title: &str) -> Result<(), String> {
    let mut session = super::open_session(catalog, title)?;
    let show_title = session
        .current_show()
        .map(|s| s.title.clone())
        .unwrap_or_default();

    println!("  {} {show_title} trivia", "Starting".bold());
    println!("  Answer with a number or the option text. 'restart' starts over, 'quit' exits.\n");
    print_panel(&session);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        let action = if input.eq_ignore_ascii_case("restart") {
            Action::Restart
        } else {
            match choice(&session, input) {
                Ok(answer) => Action::SubmitAnswer(answer),
                Err(message) => {
                    println!("  {}\n", message.yellow());
                    continue;
                }
            }
        };

        match session.dispatch(action) {
            Ok(Outcome::Answered(verdict)) => {
                if verdict.correct {
                    println!("  {}", verdict.to_string().green());
                } else {
                    println!("  {}", verdict.to_string().red());
                }
                println!();
                session.dispatch(Action::Advance).map_err(|e| e.to_string())?;
                print_panel(&session);
            }
            Ok(_) => print_panel(&session),
            Err(e) => println!("  {}\n", e.to_string().yellow()),
        }
    }

    Ok(())
}

/// Map a typed number or case-insensitive option text to the option itself.
///
/// Input that is both an option number and the text of a different option
/// is ambiguous and comes back as an error message.
fn choice(session: &ViewerSession, input: &str) -> Result<String, String> {
    let Some(item) = session.quiz().current_item() else {
        return Ok(input.to_string());
    };
    let by_number = input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|i| *i < item.options.len());
    let by_text = item
        .options
        .iter()
        .position(|o| o.eq_ignore_ascii_case(input));

    match (by_number, by_text) {
        (Some(n), Some(t)) if n != t => Err(format!(
            "\"{input}\" is ambiguous: did you mean option {} ('{}') or option {} ('{}')?",
            t + 1,
            item.options[t],
            n + 1,
            item.options[n]
        )),
        (Some(i), _) | (None, Some(i)) => Ok(item.options[i].clone()),
        (None, None) => Ok(input.to_string()),
    }
}

fn print_panel(session: &ViewerSession) {
    let view = sc_view::render(session.catalog(), session.selection(), session.quiz());
    print!("{}", quiz_text(&view.quiz));
    if session.quiz().state().is_complete() {
        println!("  Type 'restart' to play again or 'quit' to exit.");
    }
    println!();
}
