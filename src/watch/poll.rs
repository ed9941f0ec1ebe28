//! Polling watch strategy

use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, SystemTime};

use crossbeam_channel::{bounded, RecvTimeoutError};

use super::{ReloadFn, WatchHandle};

fn mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

/// Sample the file's mtime every `interval`; a changed value triggers one
/// reload and is recorded, an unchanged or unreadable stat is just recorded.
///
/// The returned handle owns the stop side of the channel. Dropping it
/// disconnects the receiver and the thread exits at its next wake-up.
pub(crate) fn spawn(path: PathBuf, interval: Duration, reload: ReloadFn) -> WatchHandle {
    let (stop_tx, stop_rx) = bounded::<()>(0);

    let spawned = thread::Builder::new()
        .name("hotlog-poll".to_string())
        .spawn(move || {
            let mut last_modified = mtime(&path);
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        let Some(modified) = mtime(&path) else {
                            continue;
                        };
                        match last_modified {
                            Some(previous) if previous != modified => {
                                last_modified = Some(modified);
                                reload(&path);
                            }
                            _ => last_modified = Some(modified),
                        }
                    }
                    _ => break,
                }
            }
        });

    if let Err(e) = spawned {
        eprintln!("[LOGGER ERROR] could not start poll watcher: {e}");
    }

    WatchHandle::Poll { _stop: stop_tx }
}
