use std::sync::{mpsc, Arc};
use std::thread;

use crate::fetch::{CatalogueFetcher, FetchSettings, ReqwestCatalogueFetcher};
use crate::types::FetchError;
use linkgen_core::ParametersModel;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogueEvent {
    Fetched(Result<ParametersModel, FetchError>),
}

enum CatalogueCommand {
    Refresh,
}

/// Runs catalogue fetches off the interactive path.
///
/// Owns a background thread with its own tokio runtime; `refresh` enqueues
/// one fetch and `try_recv` delivers the outcome when polled. Dropping the
/// handle closes both channels, so a fetch that completes after the
/// consuming session is gone is simply discarded.
pub struct CatalogueHandle {
    cmd_tx: mpsc::Sender<CatalogueCommand>,
    event_rx: mpsc::Receiver<CatalogueEvent>,
}

impl CatalogueHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestCatalogueFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Requests one catalogue fetch. Returns immediately.
    pub fn refresh(&self) {
        let _ = self.cmd_tx.send(CatalogueCommand::Refresh);
    }

    pub fn try_recv(&self) -> Option<CatalogueEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn CatalogueFetcher,
    command: CatalogueCommand,
    event_tx: mpsc::Sender<CatalogueEvent>,
) {
    match command {
        CatalogueCommand::Refresh => {
            let result = fetcher.fetch_catalogue().await;
            let _ = event_tx.send(CatalogueEvent::Fetched(result));
        }
    }
}
