use tokio::sync::mpsc::UnboundedSender;
use tracing::error;

use crate::app_event::AppEvent;

#[derive(Clone, Debug)]
pub(crate) struct AppEventSender {
    tx: UnboundedSender<AppEvent>,
}

impl AppEventSender {
    pub(crate) fn new(tx: UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }

    /// Send an event to the app event loop. The receiver only goes away
    /// during shutdown, so a failure here is log-worthy but not fatal.
    pub(crate) fn send(&self, event: AppEvent) {
        if let Err(e) = self.tx.send(event) {
            error!("failed to send event: {e}");
        }
    }
}
