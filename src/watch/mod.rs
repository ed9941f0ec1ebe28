//! Config-file change detection
//!
//! Two interchangeable strategies behind one handle: [`WatchStrategy::Poll`]
//! samples the file's mtime on a timer thread, [`WatchStrategy::Notify`]
//! subscribes to OS change events. Both converge on re-invoking the config
//! loader. Dropping the handle cancels the watch; a reload already in flight
//! is allowed to complete and apply its result.

mod native;
mod poll;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use notify::RecommendedWatcher;

use crate::core::config::WatchStrategy;
use crate::core::error::Result;

/// Callback invoked when the watched file changed.
pub(crate) type ReloadFn = Arc<dyn Fn(&Path) + Send + Sync>;

/// Handle to an active watch.
///
/// Dropping it tears the watch down: the poll thread's stop channel
/// disconnects and the thread exits at its next wake-up; the notify watcher
/// unsubscribes and its reload thread drains out.
pub(crate) enum WatchHandle {
    Poll { _stop: Sender<()> },
    Native { _watcher: RecommendedWatcher },
}

/// Start watching `path` with the selected strategy.
pub(crate) fn spawn(
    strategy: WatchStrategy,
    path: PathBuf,
    interval: Duration,
    reload: ReloadFn,
) -> Result<WatchHandle> {
    match strategy {
        WatchStrategy::Poll => Ok(poll::spawn(path, interval, reload)),
        WatchStrategy::Notify => native::spawn(path, reload),
    }
}
