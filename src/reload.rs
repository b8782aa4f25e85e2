//! Data hot reload: watches the data file and publishes a fresh snapshot
//! whenever it changes.
//!
//! The parent directory is watched rather than the file itself so that
//! editors and deploy tools that replace the file by rename are still seen.
//! A reload that fails to parse keeps the previous snapshot.

use awards_core::{LoadError, RecordSet, Store};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Load `path` and publish it to `store`. Returns the new record count.
pub fn reload(path: &Path, store: &Store) -> Result<usize, LoadError> {
    let set = RecordSet::load(path)?;
    let len = set.len();
    store.replace(set);
    Ok(len)
}

/// Whether a filesystem event concerns the data file.
pub fn is_relevant(event: &Event, file: &Path) -> bool {
    let touches_content = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_)
    );
    touches_content
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some() && p.file_name() == file.file_name())
}

/// Start watching `path`. The returned watcher must be kept alive for as
/// long as reloads should happen.
pub fn watch(path: &Path, store: Arc<Store>) -> notify::Result<RecommendedWatcher> {
    let file = path.to_path_buf();
    let dir = watch_dir(path);

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) if is_relevant(&event, &file) => match reload(&file, &store) {
            Ok(records) => tracing::info!(path = %file.display(), records, "award data reloaded"),
            Err(e) => tracing::warn!(
                path = %file.display(),
                error = %e,
                "reload failed; keeping previous snapshot"
            ),
        },
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "data file watch error"),
    })?;

    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    tracing::info!(dir = %dir.display(), "watching award data for changes");
    Ok(watcher)
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
