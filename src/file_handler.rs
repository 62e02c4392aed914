//! File handling for latex-typograph: loading sources and saving results
//! next to them without overwriting anything.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::config::SUFFIX_WIDTH;
use crate::error::{Error, Result};

/// Read a whole LaTeX source as UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `text` to `path` as UTF-8.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Name of the `index`-th numbered sibling of `path`.
///
/// The number goes between the stem and the extension:
/// - `paper.tex`, 1  => `paper.01.tex`
/// - `paper.tex`, 123 => `paper.123.tex`
/// - `Makefile`, 2   => `Makefile.02`
pub fn numbered_path(path: &Path, index: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = format!("{stem}.{index:0width$}", width = SUFFIX_WIDTH);
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }

    path.with_file_name(name)
}

/// The first numbered sibling of `path` that does not exist yet.
pub fn next_output_path(path: &Path) -> Result<PathBuf> {
    for index in 1..=u32::MAX {
        let candidate = numbered_path(path, index);
        if !candidate.exists() {
            return Ok(candidate);
        }
        trace!("{} already exists", candidate.display());
    }

    Err(Error::OutputPathsExhausted {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_goes_before_the_extension() {
        assert_eq!(
            numbered_path(Path::new("dir/paper.tex"), 1),
            PathBuf::from("dir/paper.01.tex")
        );
        assert_eq!(
            numbered_path(Path::new("paper.tex"), 123),
            PathBuf::from("paper.123.tex")
        );
    }

    #[test]
    fn only_the_last_extension_is_kept_apart() {
        assert_eq!(
            numbered_path(Path::new("paper.draft.tex"), 7),
            PathBuf::from("paper.draft.07.tex")
        );
    }

    #[test]
    fn files_without_extension() {
        assert_eq!(
            numbered_path(Path::new("notes"), 2),
            PathBuf::from("notes.02")
        );
    }

    #[test]
    fn skips_existing_siblings() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("doc.tex");
        fs::write(&source, "x").unwrap();
        fs::write(dir.path().join("doc.01.tex"), "x").unwrap();
        fs::write(dir.path().join("doc.02.tex"), "x").unwrap();

        assert_eq!(
            next_output_path(&source).unwrap(),
            dir.path().join("doc.03.tex")
        );
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("latin1.tex");
        fs::write(&source, b"caf\xe9").unwrap();

        assert!(matches!(
            read_document(&source),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_document(&dir.path().join("absent.tex")),
            Err(Error::Read { .. })
        ));
    }
}
