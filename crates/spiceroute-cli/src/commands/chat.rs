//! Chat with the recipe assistant.

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use spiceroute_application::{ChatSessionController, SendOutcome};

use crate::context::AppContext;
use crate::helper::CliHelper;
use crate::render;

const CHAT_COMMANDS: &[&str] = &["reset", "session", "quit"];

/// Where the REPL stopped printing: session id plus transcript length.
#[derive(Default)]
struct Printed {
    session_id: String,
    count: usize,
}

/// Prints transcript entries not shown yet. A reset starts a new session,
/// so everything is printed again.
async fn print_new_entries(chat: &ChatSessionController, printed: &mut Printed) {
    let session = chat.session().await;
    if session.session_id != printed.session_id {
        printed.session_id = session.session_id.clone();
        printed.count = 0;
    }
    for message in session.transcript.iter().skip(printed.count) {
        println!("{}", render::chat_entry(message));
    }
    printed.count = session.transcript.len();
}

pub async fn run(ctx: &AppContext, message: Option<&str>) -> Result<()> {
    let chat = ChatSessionController::activate(ctx.api.clone(), ctx.session_store()?).await;

    if let Some(message) = message {
        let before = chat.transcript().await.len();
        chat.send(message).await;
        let transcript = chat.transcript().await;
        println!("{}", render::transcript(&transcript[before.min(transcript.len())..]));
        return Ok(());
    }

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::slash(CHAT_COMMANDS)));

    println!("{}", "=== SpiceRoute Assistant ===".bright_magenta().bold());
    println!(
        "{}",
        "Type '/reset' to start over, '/quit' to exit.".bright_black()
    );
    println!();

    let mut printed = Printed::default();
    print_new_entries(&chat, &mut printed).await;

    loop {
        match rl.readline("jij> ") {
            Ok(line) => {
                let trimmed = line.trim();
                match trimmed {
                    "/quit" | "/exit" => break,
                    "/reset" => {
                        chat.reset().await;
                        print_new_entries(&chat, &mut printed).await;
                        continue;
                    }
                    "/session" => {
                        println!("{}", chat.session_id().await.bright_black());
                        continue;
                    }
                    "" => continue,
                    _ => {}
                }
                let _ = rl.add_history_entry(&line);

                let waiting = tokio::spawn(async {
                    tokio::time::sleep(Duration::from_millis(800)).await;
                    eprintln!("{}", "De assistent denkt na...".bright_black());
                });
                let outcome = chat.send(&line).await;
                waiting.abort();

                if outcome == SendOutcome::Ignored {
                    println!("{}", "Even geduld, er loopt nog een vraag.".bright_black());
                }
                print_new_entries(&chat, &mut printed).await;
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
