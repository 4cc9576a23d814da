//! The presenter state holder: one observable quotation, refreshed on demand.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::api::{ApiError, QuoteApi};
use crate::model::{ParseError, Quotation};

/// Failure at the fetch boundary. Callers choose log-and-ignore explicitly;
/// nothing here reaches the UI.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Owns the current [`Quotation`] and mediates refresh requests.
///
/// The value lives in a `watch` channel: a single-slot cell with atomic
/// replace-and-notify semantics and no history. Refresh tasks run on the
/// feed's own [`JoinSet`], so dropping the feed aborts anything in flight
/// and discards its result.
pub struct QuoteFeed {
    api: Arc<QuoteApi>,
    tx: watch::Sender<Quotation>,
    tasks: Mutex<JoinSet<()>>,
    handle: Handle,
}

impl QuoteFeed {
    /// Create a feed holding the placeholder quotation. Refresh tasks are
    /// spawned onto `handle`.
    pub fn new(api: QuoteApi, handle: Handle) -> Self {
        let (tx, _rx) = watch::channel(Quotation::placeholder());
        Self {
            api: Arc::new(api),
            tx,
            tasks: Mutex::new(JoinSet::new()),
            handle,
        }
    }

    /// Observe the current quotation. The receiver sees the value as of the
    /// subscription and is notified on every subsequent publish.
    pub fn subscribe(&self) -> watch::Receiver<Quotation> {
        self.tx.subscribe()
    }

    /// Snapshot of the current quotation.
    pub fn current(&self) -> Quotation {
        self.tx.borrow().clone()
    }

    /// Fetch a new quotation in the background.
    ///
    /// Concurrent calls are not deduplicated; each runs independently and the
    /// last to complete wins. On any failure the current value stays as it is
    /// and a diagnostic is logged.
    pub fn refresh(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let mut tasks = self.tasks.lock();
        // Reap whatever already finished so the set does not grow unbounded.
        while tasks.try_join_next().is_some() {}
        tasks.spawn_on(
            async move {
                match fetch_quotation(&api).await {
                    Ok(quotation) => {
                        debug!(person = %quotation.person, "publishing new quotation");
                        tx.send_replace(quotation);
                    }
                    Err(err) => {
                        warn!(error = %err, "quote refresh failed; keeping current value");
                    }
                }
            },
            &self.handle,
        );
    }
}

async fn fetch_quotation(api: &QuoteApi) -> Result<Quotation, RefreshError> {
    let body = api.fetch_quote().await?;
    Ok(Quotation::from_json(&body)?)
}
