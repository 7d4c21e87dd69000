use std::fs;
use std::io;
use std::path::Path;

/// Creates every missing folder on the way to `target`, which names a file.
pub(crate) fn create_parent_folders(target: &Path) -> io::Result<()> {
    match target.parent() {
        Some(parent) if false == parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// File name of `source` with the directory and the extension cut off.
/// Paths without a usable file name give an empty string.
#[must_use]
pub(crate) fn file_stem_of(source: &Path) -> String {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
