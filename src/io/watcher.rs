use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Events sent from the file watcher to the TUI event loop.
#[derive(Debug, PartialEq, Eq)]
pub enum DataEvent {
    /// The record file was written, replaced, or removed.
    Changed(PathBuf),
}

/// Watches a record file for external updates.
///
/// The parent directory is watched rather than the file itself, so editors
/// that save by rename-and-replace are still picked up.
pub struct DataWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<DataEvent>,
}

impl DataWatcher {
    /// Start watching `data_file`. `poll()` should be called each tick.
    pub fn start(data_file: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let target = data_file.to_path_buf();
        let file_name = target.file_name().map(|n| n.to_os_string());
        let dir = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };

                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }

                let touched = event
                    .paths
                    .iter()
                    .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
                if touched {
                    let _ = tx.send(DataEvent::Changed(target.clone()));
                }
            },
            Config::default(),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(path = %data_file.display(), "watching record file");
        Ok(DataWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll. Returns true if the file changed since the last poll;
    /// bursts of events collapse into one.
    pub fn poll(&self) -> bool {
        let mut changed = false;
        while let Ok(DataEvent::Changed(_)) = self.rx.try_recv() {
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    /// Poll until a change is reported or the deadline passes
    fn wait_for_change(watcher: &DataWatcher) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if watcher.poll() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        false
    }

    #[test]
    fn fresh_watcher_reports_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("orders.json");
        std::fs::write(&path, "[]").unwrap();
        let watcher = DataWatcher::start(&path).unwrap();
        assert!(!watcher.poll());
    }

    #[test]
    fn rewriting_the_file_is_reported() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("orders.json");
        std::fs::write(&path, "[]").unwrap();
        let watcher = DataWatcher::start(&path).unwrap();

        std::fs::write(&path, r#"[{"product": "Product 3"}]"#).unwrap();
        assert!(wait_for_change(&watcher));

        // Once late events from that write are drained, nothing is pending
        std::thread::sleep(Duration::from_millis(100));
        watcher.poll();
        assert!(!watcher.poll());
    }
}
