//! Option store
//!
//! Line-oriented persistence for one (app, phase) option list. A file holds one
//! option per line; blank lines carry no meaning and are dropped whenever the
//! file is read or rewritten. A missing file is an empty list.
//!
//! Mutations always rewrite the whole file from the in-memory list. The new
//! content goes to a sibling temporary file named after the writing process
//! and is then renamed over the target, so a failed write leaves the previous
//! list intact and readers never see a partial file. There is no locking: two
//! processes mutating the same file concurrently race and the last rename wins.

use crate::errors::StoreError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

fn io_error(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io {
        action,
        path,
        source,
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Reject entries that could not round-trip through a line-oriented file.
pub fn validate_entry(entry: &str) -> Result<(), StoreError> {
    if is_blank(entry) {
        return Err(StoreError::BlankEntry);
    }
    if entry.contains('\n') || entry.contains('\r') {
        return Err(StoreError::MultilineEntry {
            entry: entry.to_string(),
        });
    }
    Ok(())
}

/// Create an empty file at `path` unless one already exists.
///
/// Existing files are left untouched: same inode, same content, same
/// modification time.
pub fn ensure_exists(path: &Path) -> Result<(), StoreError> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error("create directory for", path))?;
    }
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .or_else(|err| match err.kind() {
            // lost a race with another creator; the file is there now
            io::ErrorKind::AlreadyExists => Ok(fs::File::open(path)?),
            _ => Err(err),
        })
        .map_err(io_error("create", path))?;
    set_mode(path)?;
    debug!(path = %path.display(), "Created option file");
    Ok(())
}

/// Non-blank lines of the file at `path`, in file order.
///
/// A missing file reads as an empty list.
pub fn read_all(path: &Path) -> Result<Vec<String>, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(io_error("read", path)(err)),
    };
    Ok(contents
        .lines()
        .filter(|line| !is_blank(line))
        .map(str::to_string)
        .collect())
}

/// Replace the file's content with `entries`, one per line.
///
/// Blank entries are dropped. An empty list produces an empty file; the file
/// itself is never removed.
pub fn write_all<S: AsRef<str>>(path: &Path, entries: &[S]) -> Result<(), StoreError> {
    let mut contents = String::new();
    for entry in entries.iter().map(AsRef::as_ref).filter(|e| !is_blank(e)) {
        contents.push_str(entry);
        contents.push('\n');
    }

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, contents.as_bytes()).map_err(io_error("write", &temp_path))?;
    set_mode(&temp_path)?;

    #[cfg(windows)]
    if path.exists() {
        fs::remove_file(path).map_err(io_error("replace", path))?;
    }

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("replace", path)(err));
    }
    Ok(())
}

/// Add `entry` as the last line, keeping every existing line in place.
///
/// Duplicates are not filtered: appending an entry that is already present
/// stores it twice.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn append(path: &Path, entry: &str) -> Result<(), StoreError> {
    validate_entry(entry)?;
    ensure_exists(path)?;
    let mut entries = read_all(path)?;
    entries.push(entry.to_string());
    write_all(path, &entries)?;
    debug!(entry = %entry, count = entries.len(), "Appended docker option");
    Ok(())
}

/// Drop every line exactly equal to `entry`. A missing file is left missing.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn remove(path: &Path, entry: &str) -> Result<(), StoreError> {
    if !path.exists() {
        debug!("No option file, nothing to remove");
        return Ok(());
    }
    let entries = read_all(path)?;
    let before = entries.len();
    let kept: Vec<String> = entries.into_iter().filter(|line| line != entry).collect();
    write_all(path, &kept)?;
    debug!(
        entry = %entry,
        removed = before - kept.len(),
        "Removed docker option"
    );
    Ok(())
}

/// All entries concatenated with no separator, for single-line flag display.
pub fn render_flat(path: &Path) -> Result<String, StoreError> {
    Ok(read_all(path)?.concat())
}

/// Per-process temp file next to `path`, e.g. `.DOCKER_OPTIONS_build.4242.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("DOCKER_OPTIONS");
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

#[cfg(unix)]
fn set_mode(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(FILE_MODE))
        .map_err(io_error("set permissions on", path))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}
