//! Native notification watch strategy

use std::path::PathBuf;
use std::thread;

use crossbeam_channel::unbounded;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

use super::{ReloadFn, WatchHandle};
use crate::core::error::Result;

/// Subscribe to OS change events for the config file.
///
/// Events are forwarded to a dedicated reload thread instead of being handled
/// in the notify callback: a reconfigure drops the previous watcher, and a
/// watcher must not be dropped from its own event thread. The reload thread
/// drains queued events after each reload, so a burst of change notifications
/// collapses into one reload at a time and an in-flight reload always
/// completes before the next starts.
pub(crate) fn spawn(path: PathBuf, reload: ReloadFn) -> Result<WatchHandle> {
    let (event_tx, event_rx) = unbounded::<()>();

    let reload_path = path.clone();
    let spawned = thread::Builder::new()
        .name("hotlog-reload".to_string())
        .spawn(move || {
            while event_rx.recv().is_ok() {
                reload(&reload_path);
                // coalesce notifications that piled up during the reload
                while event_rx.try_recv().is_ok() {}
            }
        });
    if let Err(e) = spawned {
        eprintln!("[LOGGER ERROR] could not start reload thread: {e}");
    }

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                let _ = event_tx.send(());
            }
            Ok(_) => {}
            Err(e) => eprintln!("[LOGGER ERROR] watch error: {e}"),
        },
        notify::Config::default(),
    )?;
    watcher.watch(&path, RecursiveMode::NonRecursive)?;

    Ok(WatchHandle::Native { _watcher: watcher })
}
