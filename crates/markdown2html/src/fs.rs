use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::driver::DocumentDriver;
use crate::error::{ConvertError, ConvertResult};
use crate::line::SourceDocument;
use crate::options::RenderOptions;

/// Loads `path` into memory, distinguishing a missing file from other failures.
pub fn read_source(path: &Path) -> ConvertResult<SourceDocument> {
    if !path.exists() {
        return Err(ConvertError::MissingSource(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|err| ConvertError::io(path, err))?;
    let mut reader = BufReader::new(file);
    SourceDocument::from_reader(&mut reader).map_err(|err| ConvertError::io(path, err))
}

/// Replaces `path` with `content`, creating it if needed. The content is
/// staged in a temporary file beside `path` and renamed into place, so the
/// destination is either fully written or left as it was.
pub fn write_atomic(path: &Path, content: &str) -> ConvertResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(|err| ConvertError::io(path, err))?;
    staged
        .write_all(content.as_bytes())
        .and_then(|_| staged.as_file().sync_all())
        .map_err(|err| ConvertError::io(path, err))?;
    staged
        .persist(path)
        .map_err(|err| ConvertError::io(path, err.error))?;

    debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Converts `source` into `destination`, returning the number of blocks
/// written. Nothing is written when the source cannot be read.
pub fn convert_path(
    source: &Path,
    destination: &Path,
    options: RenderOptions,
) -> ConvertResult<usize> {
    let doc = read_source(source)?;

    let mut html = String::new();
    let mut blocks = 0usize;
    for block in DocumentDriver::new(&doc, options) {
        html.push_str(&block.html);
        blocks += 1;
    }

    write_atomic(destination, &html)?;
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn write_atomic_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("out.html");
        fs::write(&file_path, "previous content that is longer").unwrap();

        write_atomic(&file_path, "<h1>x</h1>\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "<h1>x</h1>\n");
    }

    #[test]
    fn write_atomic_leaves_no_staging_file_behind() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("out.html");

        write_atomic(&file_path, "").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("out.html")]);
    }

    #[test]
    fn write_atomic_fails_when_directory_is_missing() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing").join("out.html");

        let err = write_atomic(&file_path, "x").unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }

    #[test]
    fn read_source_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_source(&dir.path().join("absent.md")).unwrap_err();
        assert!(matches!(err, ConvertError::MissingSource(_)));
    }
}
