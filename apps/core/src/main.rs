// MathBrain V1 Entry Point
// Line-oriented frontend over the word-problem reasoning engine.

mod error;
mod reasoner;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reasoner::MathEngine;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    info!("MathBrain started");
    println!("MathBrain - ask a math word problem.");
    println!("Commands: 'history' (show session log), 'clear' (empty it), 'quit'.");

    let mut engine = MathEngine::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "quit" | "exit" => break,
            "clear" => {
                engine.clear_history();
                println!("History cleared.");
            }
            "history" => {
                println!("{}", serde_json::to_string_pretty(engine.history())?);
            }
            input => {
                let response = engine.process(input);
                if response.success {
                    println!("= {}", response.result);
                }
                println!("{}", response.explanation);
            }
        }
    }

    info!("MathBrain exiting");
    Ok(())
}
