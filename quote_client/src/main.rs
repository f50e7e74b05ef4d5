//! Quote Client — a terminal application that fetches a random quotation from an
//! HTTP endpoint and shows it, with a manual refresh control.
//!
//! The screen is shown once at startup, which triggers the first fetch. After that,
//! each line typed on stdin is a command: Enter or `r` fetches another quote, `q`
//! quits. Internally the pieces are:
//!
//! - `QuoteController` — receives `Input` events on a channel, runs one fetch per
//!   event on its own thread and emits `Output` events.
//! - `QuoteView` — the screen state, updated from `Output`s and rendered to stdout.
//! - This file — wires stdin, Ctrl+C and the controller together in a `select!` loop
//!   on the main thread, which is the only place that touches the view.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --endpoint https://api.quotable.io/random --timeout-secs 10
//! quote_client --once
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` for request details.
#![warn(missing_docs)]
mod args;
mod controller;
mod model;
mod view;

use crate::args::Args;
use crate::controller::QuoteController;
use crate::model::event::{Input, KeyCommand, Output};
use crate::view::QuoteView;
use clap::Parser;
use crossbeam_channel::{Receiver, bounded, never, select, unbounded};
use log::{debug, error, info, warn};
use quote_common::{HttpQuoteFetcher, QuoteError, Result};
use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;

/// Reads stdin line by line on a background thread and forwards recognised commands.
/// The returned channel disconnects when stdin reaches EOF.
fn spawn_stdin_reader() -> Receiver<KeyCommand> {
    let (tx, rx) = unbounded::<KeyCommand>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    error!("Read stdin error: {}", e);
                    break;
                }
            };
            match KeyCommand::from_line(&line) {
                Some(command) => {
                    if tx.send(command).is_err() {
                        break;
                    }
                }
                None => warn!(
                    "Unknown command {:?}. Press Enter or `r` to refresh, `q` to quit.",
                    line.trim()
                ),
            }
        }
        debug!("Stdin reader stopping...");
    });
    rx
}

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let fetcher = HttpQuoteFetcher::new(&args.fetcher_config())?;
    info!("Fetching quotes from {}", fetcher.endpoint());

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down client...");
        let _ = shutdown_tx.try_send(());
    }) {
        warn!("Failed to install Ctrl+C handler: {}", e);
    }

    let controller = QuoteController::new(Arc::new(fetcher));
    let (input_tx, input_rx) = unbounded::<Input>();
    let outputs = controller.transform(input_rx);

    let mut view = QuoteView::new();
    let mut stdout = io::stdout();
    view.render(&mut stdout)?;

    input_tx
        .send(Input::Shown)
        .map_err(|_| QuoteError::ChannelSend("quote controller stopped".to_string()))?;
    let mut input_tx = Some(input_tx);
    let mut keys = if args.once { never() } else { spawn_stdin_reader() };

    loop {
        let mut stdin_closed = false;
        select! {
            recv(outputs) -> msg => {
                let Ok(output) = msg else { break };
                let finished = matches!(output, Output::FetchSucceeded(_) | Output::FetchFailed(_));
                view.apply(&output);
                if finished {
                    view.render(&mut stdout)?;
                    if args.once {
                        if let Output::FetchFailed(e) = output {
                            return Err(e);
                        }
                        break;
                    }
                }
            },

            recv(keys) -> command => match command {
                Ok(KeyCommand::Refresh) => {
                    // Taps during a fetch are queued by the controller, not dropped.
                    if let Some(tx) = &input_tx {
                        tx.send(Input::RefreshRequested).map_err(|_| {
                            QuoteError::ChannelSend("quote controller stopped".to_string())
                        })?;
                    }
                }
                Ok(KeyCommand::Quit) => break,
                Err(_) => stdin_closed = true,
            },

            recv(shutdown_rx) -> _ => break,
        }

        if stdin_closed {
            debug!("Stdin closed; waiting for pending requests");
            input_tx = None;
            keys = never();
        }
    }

    info!("Client stopped.");
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
