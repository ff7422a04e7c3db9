//! Runs the screen's fetch requests as background tasks.
//!
//! Results travel back over an unbounded tokio channel which the event loop
//! drains between frames, so the UI never waits on the network.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::application::{FetchEvent, FetchRequest};
use crate::domain::Directory;

pub type EventSender = mpsc::UnboundedSender<FetchEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<FetchEvent>;

pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Spawns one task per request. Must be used from inside a tokio runtime.
pub struct Fetcher {
    directory: Arc<dyn Directory>,
    events: EventSender,
    cities_task: Option<JoinHandle<()>>,
}

impl Fetcher {
    pub fn new(directory: Arc<dyn Directory>, events: EventSender) -> Self {
        Self {
            directory,
            events,
            cities_task: None,
        }
    }

    /// Starts `request`. A new cities request aborts the one still in flight.
    pub fn dispatch(&mut self, request: FetchRequest) {
        let directory = Arc::clone(&self.directory);
        let events = self.events.clone();

        match request {
            FetchRequest::States => {
                debug!("fetching states");
                tokio::spawn(async move {
                    let result = directory.states().await;
                    // The receiver is gone once the screen has been left.
                    let _ = events.send(FetchEvent::States(result));
                });
            }
            FetchRequest::Cities { ticket, uf } => {
                if let Some(previous) = self.cities_task.take() {
                    previous.abort();
                }
                debug!(ticket, %uf, "fetching cities");
                self.cities_task = Some(tokio::spawn(async move {
                    let result = directory.cities(&uf).await;
                    let _ = events.send(FetchEvent::Cities { ticket, uf, result });
                }));
            }
        }
    }
}

impl Drop for Fetcher {
    fn drop(&mut self) {
        if let Some(task) = self.cities_task.take() {
            task.abort();
        }
    }
}
