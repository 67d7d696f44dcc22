use anyhow::{Context, Result};
use log::debug;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::resolver::{Answer, AnswerResolver};
use crate::ui::UIHandler;

const PROMPT: &str = "Vous > ";

/// Drives the resolver from the command line, one-shot or interactively.
pub struct Session<'a> {
    resolver: &'a AnswerResolver,
    ui: &'a UIHandler,
    use_web: bool,
    timeout: Duration,
}

impl<'a> Session<'a> {
    pub fn new(resolver: &'a AnswerResolver, ui: &'a UIHandler, use_web: bool, timeout: Duration) -> Self {
        Self {
            resolver,
            ui,
            use_web,
            timeout,
        }
    }

    pub async fn ask(&self, question: &str) -> Answer {
        self.resolver.answer(question, self.use_web, self.timeout).await
    }

    /// Answer a single question and print it.
    pub async fn one_shot(&self, question: &str) -> Result<()> {
        let answer = self.ask(question).await;
        println!("{}", self.ui.render_answer(&answer));
        Ok(())
    }

    /// Read questions until an empty line, end of input or Ctrl-C.
    pub async fn interactive(&self) -> Result<()> {
        println!("{}", self.ui.banner());
        println!("Tape une question (ou vide pour quitter).");
        println!("{}\n", self.status_line());

        let mut lines = spawn_stdin_reader();
        loop {
            print!("{}", PROMPT);
            io::stdout().flush().context("Failed to flush stdout")?;

            let line = tokio::select! {
                line = lines.recv() => line,
                _ = tokio::signal::ctrl_c() => None,
            };
            let Some(line) = line.transpose().context("Failed to read from stdin")? else {
                println!("\nAu revoir !");
                break;
            };

            let question = line.trim();
            if question.is_empty() {
                println!("Session terminée. À bientôt !");
                break;
            }

            let answer = tokio::select! {
                answer = self.ask(question) => answer,
                _ = tokio::signal::ctrl_c() => {
                    println!("\nAu revoir !");
                    break;
                }
            };
            println!("{}\n", self.ui.render_answer(&answer));
        }
        Ok(())
    }

    fn status_line(&self) -> String {
        format!(
            "Recherche web activée par défaut : {}; délai web : {:.1}s.",
            if self.use_web { "oui" } else { "non" },
            self.timeout.as_secs_f64()
        )
    }
}

/// Read stdin on a plain thread so a pending read never holds up shutdown.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<io::Result<String>> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        loop {
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {
                    if tx.send(Ok(line)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.send(Err(e));
                    break;
                }
            }
        }
        debug!("stdin reader finished");
    });
    rx
}
