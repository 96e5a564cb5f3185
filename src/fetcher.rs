use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use crate::event::AppEvent;
use crate::screen::FetchTicket;
use crate::source::RosterSource;

/// Run one listing fetch off the UI thread and post the outcome back as
/// [`AppEvent::RosterFetched`]. If the loop has already shut down the result
/// is discarded.
pub fn spawn_fetch(
    source: Arc<dyn RosterSource>,
    ticket: FetchTicket,
    tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        log::info!("fetching characters from {}", source.label());
        let result = source.fetch_roster();
        if tx.send(AppEvent::RosterFetched { ticket, result }).is_err() {
            log::debug!("event loop gone, dropping fetch result for {ticket:?}");
        }
    })
}
