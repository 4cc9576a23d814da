use std::io;
use std::sync::Arc;
use std::time::Duration;

use quotefeed::api::QuoteApi;
use quotefeed::feed::QuoteFeed;
use quotefeed::logging::init_tracing;
use quotefeed::ui;

fn main() -> io::Result<()> {
    init_tracing();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let feed = Arc::new(QuoteFeed::new(QuoteApi::new(), runtime.handle().clone()));
    let result = ui::runtime::run(feed);

    // Any in-flight refresh was aborted when the feed dropped; give the
    // runtime a moment to wind down its workers.
    runtime.shutdown_timeout(Duration::from_millis(250));
    result
}
