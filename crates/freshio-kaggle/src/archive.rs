//! Zip archive extraction for downloaded datasets.

use crate::error::{KaggleError, KaggleResult};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Extract all entries of `archive_path` into `dest_dir`.
///
/// Entries whose names would resolve outside `dest_dir` are rejected.
/// Returns the number of files written.
pub fn extract_archive(archive_path: &Path, dest_dir: &Path) -> KaggleResult<usize> {
    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    std::fs::create_dir_all(dest_dir)?;

    let mut extracted = 0usize;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        let Some(relative) = entry.enclosed_name() else {
            return Err(KaggleError::UnsafeArchivePath {
                name: entry.name().to_string(),
            });
        };
        let dest_path = dest_dir.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&dest_path)?;
            continue;
        }

        if let Some(parent) = dest_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut dest_file = File::create(&dest_path)?;
        std::io::copy(&mut entry, &mut dest_file)?;
        extracted += 1;
    }

    debug!(
        "extracted {extracted} files from {} into {}",
        archive_path.display(),
        dest_dir.display()
    );

    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
        for (name, contents) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(contents).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_extract_archive() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("dataset.zip");
        write_zip(
            &zip_path,
            &[
                ("train/fresh/apple_1.jpg", b"jpeg".as_slice()),
                ("train/rotten/apple_2.jpg", b"jpeg".as_slice()),
                ("labels.csv", b"path,label\n".as_slice()),
            ],
        );

        let dest = dir.path().join("dataset_1");
        let extracted = extract_archive(&zip_path, &dest).unwrap();

        assert_eq!(extracted, 3);
        assert!(dest.join("train/fresh/apple_1.jpg").is_file());
        assert!(dest.join("train/rotten/apple_2.jpg").is_file());
        assert_eq!(
            std::fs::read(dest.join("labels.csv")).unwrap(),
            b"path,label\n"
        );
    }

    #[test]
    fn test_extract_archive_rejects_escaping_entries() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("evil.zip");
        write_zip(&zip_path, &[("../outside.txt", b"nope".as_slice())]);

        let dest = dir.path().join("dataset_1");
        let err = extract_archive(&zip_path, &dest).unwrap_err();

        assert!(matches!(err, KaggleError::UnsafeArchivePath { .. }));
        assert!(!dir.path().join("outside.txt").exists());
    }

    #[test]
    fn test_extract_archive_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_archive(&dir.path().join("missing.zip"), dir.path()).unwrap_err();
        assert!(matches!(err, KaggleError::Io(_)));
    }
}
