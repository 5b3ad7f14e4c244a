//! Sync bridge over the async AWS SDK

use once_cell::sync::Lazy;
use tokio::runtime::{self, Handle};

static RUNTIME: Lazy<runtime::Runtime> = Lazy::new(|| {
    runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("sm-lookup-aws")
        .build()
        .expect("build sm-lookup runtime")
});

/// Drive a future to completion from the blocking resolution pipeline.
///
/// Reuses the enclosing tokio runtime when there is one (without nesting),
/// otherwise falls back to a crate-owned runtime.
pub(crate) fn sync_await<F>(fut: F) -> F::Output
where
    F: std::future::Future,
{
    if let Ok(handle) = Handle::try_current() {
        tokio::task::block_in_place(|| handle.block_on(fut))
    } else {
        RUNTIME.block_on(fut)
    }
}
