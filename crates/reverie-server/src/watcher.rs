//! File watching for rebuild-on-change.
//!
//! notify delivers raw events on a sync channel; a forwarding thread
//! coalesces each burst and hands the result to the async side. The
//! coalescing is trailing-edge: after the first event of a burst the
//! thread keeps draining until the channel has been quiet for
//! [`QUIET_PERIOD`], then emits one event per touched path. A save landing
//! right after another is folded into the same burst, never dropped.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// How long the raw event channel must stay quiet before a burst is
/// considered over.
const QUIET_PERIOD: Duration = Duration::from_millis(100);

/// Events emitted by the file watcher.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// A Markdown content file was modified
    ContentModified(PathBuf),

    /// A static asset (CSS/JS/image) was modified
    AssetModified(PathBuf),

    /// File was created
    Created(PathBuf),

    /// File was deleted
    Deleted(PathBuf),

    /// Generic modification
    Modified(PathBuf),
}

impl WatchEvent {
    /// The path the event refers to.
    pub fn path(&self) -> &Path {
        match self {
            WatchEvent::ContentModified(p)
            | WatchEvent::AssetModified(p)
            | WatchEvent::Created(p)
            | WatchEvent::Deleted(p)
            | WatchEvent::Modified(p) => p,
        }
    }
}

/// File watcher for detecting source changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given paths.
    ///
    /// Returns the watcher and a channel to receive coalesced events.
    /// Paths that do not exist are skipped.
    pub fn new(
        paths: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for path in paths {
            if path.exists() {
                watcher
                    .watch(path, RecursiveMode::Recursive)
                    .map_err(std::io::Error::other)?;
            }
        }

        std::thread::spawn(move || forward_bursts(sync_rx, async_tx));

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Drain raw events burst by burst, emitting each coalesced batch once the
/// channel goes quiet. Runs until either channel closes.
fn forward_bursts(rx: mpsc::Receiver<notify::Event>, tx: async_mpsc::Sender<WatchEvent>) {
    while let Ok(first) = rx.recv() {
        let mut batch: Vec<WatchEvent> = Vec::new();
        fold_into_batch(&mut batch, first);

        loop {
            match rx.recv_timeout(QUIET_PERIOD) {
                Ok(event) => fold_into_batch(&mut batch, event),
                Err(mpsc::RecvTimeoutError::Timeout)
                | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }

        for event in batch {
            if tx.blocking_send(event).is_err() {
                return;
            }
        }
    }
}

/// Fold a raw event into the current batch, keeping one entry per path.
/// The latest classification for a path wins.
fn fold_into_batch(batch: &mut Vec<WatchEvent>, event: notify::Event) {
    let kind = event.kind;
    for path in event.paths {
        if let Some(classified) = classify_event(&path, &kind) {
            batch.retain(|existing| existing.path() != classified.path());
            batch.push(classified);
        }
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match kind {
        EventKind::Create(_) => Some(WatchEvent::Created(path.to_path_buf())),
        EventKind::Remove(_) => Some(WatchEvent::Deleted(path.to_path_buf())),
        EventKind::Modify(_) => {
            if ext == "md" {
                Some(WatchEvent::ContentModified(path.to_path_buf()))
            } else if matches!(ext, "css" | "js" | "png" | "jpg" | "jpeg" | "webp" | "svg") {
                Some(WatchEvent::AssetModified(path.to_path_buf()))
            } else {
                Some(WatchEvent::Modified(path.to_path_buf()))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::ModifyKind;
    use notify::EventKind;
    use std::fs;
    use tempfile::tempdir;

    fn modify(path: &str) -> notify::Event {
        notify::Event::new(EventKind::Modify(ModifyKind::Any)).add_path(PathBuf::from(path))
    }

    #[tokio::test]
    async fn bursts_coalesce_to_one_event_per_path() {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, mut async_rx) = async_mpsc::channel(100);

        sync_tx.send(modify("content/posts/a.md")).unwrap();
        sync_tx.send(modify("content/posts/a.md")).unwrap();
        sync_tx.send(modify("content/posts/a.md")).unwrap();
        drop(sync_tx);

        let forwarder = std::thread::spawn(move || forward_bursts(sync_rx, async_tx));

        let event = async_rx.recv().await;
        assert!(matches!(event, Some(WatchEvent::ContentModified(_))));

        // The repeat saves were folded into the first event.
        assert!(async_rx.recv().await.is_none());
        forwarder.join().unwrap();
    }

    #[tokio::test]
    async fn distinct_paths_in_a_burst_each_get_an_event() {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, mut async_rx) = async_mpsc::channel(100);

        sync_tx.send(modify("content/posts/a.md")).unwrap();
        sync_tx.send(modify("assets/css/style.css")).unwrap();
        drop(sync_tx);

        let forwarder = std::thread::spawn(move || forward_bursts(sync_rx, async_tx));

        let mut seen = Vec::new();
        while let Some(event) = async_rx.recv().await {
            seen.push(event);
        }
        forwarder.join().unwrap();

        assert_eq!(seen.len(), 2);
        assert!(matches!(seen[0], WatchEvent::ContentModified(_)));
        assert!(matches!(seen[1], WatchEvent::AssetModified(_)));
    }

    #[tokio::test]
    async fn rapid_saves_still_reach_the_receiver() {
        let temp = tempdir().unwrap();
        let draft = temp.path().join("draft.md");

        let (watcher, mut rx) = FileWatcher::new(&[temp.path().to_path_buf()]).unwrap();

        // Give the backend time to register the watch.
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Two saves inside one quiet period.
        fs::write(&draft, "# first").unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        fs::write(&draft, "# second").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        drop(watcher);

        assert!(event.is_ok(), "timeout waiting for file watch event");
        let event = event.unwrap().expect("channel should stay open");
        assert!(event.path().ends_with("draft.md"));
    }

    #[test]
    fn classifies_markdown_edits_as_content() {
        let kind = EventKind::Modify(ModifyKind::Any);

        let event = classify_event(Path::new("content/posts/a.md"), &kind);
        assert!(matches!(event, Some(WatchEvent::ContentModified(_))));

        let event = classify_event(Path::new("assets/css/style.css"), &kind);
        assert!(matches!(event, Some(WatchEvent::AssetModified(_))));
    }
}
