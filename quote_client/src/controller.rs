//! Presentation controller: turns screen events into display updates.
//!
//! The controller owns a [`QuoteSource`] and a dispatcher thread. Every `Input`
//! received on the input channel triggers exactly one fetch; the outcome is wrapped
//! in `ToggleRefresh` events so the screen can disable its refresh control while the
//! request is running. Requests are served one at a time in arrival order, so at most
//! one fetch is ever in flight and queued events are never dropped.
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, error, info};
use quote_common::{QuoteError, QuoteSource};

use crate::model::event::{Input, Output};

/// Binds input events to the quote source.
pub struct QuoteController {
    source: Arc<dyn QuoteSource>,
}

impl QuoteController {
    /// Create a controller fetching from `source`.
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self { source }
    }

    /// Start consuming `input` on a background thread and return the output stream.
    ///
    /// The output channel disconnects once `input` is closed and every queued event
    /// has been handled, or as soon as the output receiver is dropped.
    pub fn transform(&self, input: Receiver<Input>) -> Receiver<Output> {
        let (output_tx, output_rx) = unbounded::<Output>();
        let source = Arc::clone(&self.source);

        thread::spawn(move || {
            info!("Quote controller started");
            for event in input.iter() {
                debug!("Input event: {}", event);
                if let Err(e) = handle_get_random_quote(source.as_ref(), &output_tx) {
                    info!("Output closed, stopping quote controller: {}", e);
                    break;
                }
            }
            info!("Quote controller stopping...");
        });

        output_rx
    }
}

/// Run one fetch and publish `disable -> outcome -> enable`.
fn handle_get_random_quote(
    source: &dyn QuoteSource,
    output: &Sender<Output>,
) -> Result<(), QuoteError> {
    publish(output, Output::ToggleRefresh { enabled: false })?;

    let outcome = match source.fetch() {
        Ok(quote) => {
            info!("QUOTE: {}", quote);
            Output::FetchSucceeded(quote)
        }
        Err(e) => {
            let kind = if e.is_transport() {
                "transport"
            } else if e.is_decode() {
                "decoding"
            } else {
                "other"
            };
            error!("Fetch quote failed ({} error): {}", kind, e);
            Output::FetchFailed(e)
        }
    };
    publish(output, outcome)?;

    publish(output, Output::ToggleRefresh { enabled: true })
}

fn publish(output: &Sender<Output>, event: Output) -> Result<(), QuoteError> {
    output
        .send(event)
        .map_err(|_| QuoteError::ChannelSend("output receiver dropped".to_string()))
}
