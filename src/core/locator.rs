use crate::domain::model::{LocatedFile, CSV_SUFFIX};
use crate::utils::error::{ImeiError, Result};
use std::path::{Path, PathBuf};

fn csv_file_name(path: &Path) -> Option<&str> {
    let name = path.file_name()?;
    match name.to_str() {
        Some(name) => Some(name).filter(|name| name.ends_with(CSV_SUFFIX)),
        None => {
            tracing::warn!(
                "Ignoring entry with a file name that is not valid UTF-8: {}",
                path.display()
            );
            None
        }
    }
}

/// Picks the single `.csv` entry out of a directory listing.
pub fn select_single_csv(directory: &Path, entries: Vec<PathBuf>) -> Result<LocatedFile> {
    let mut matches: Vec<(PathBuf, String)> = entries
        .into_iter()
        .filter_map(|path| {
            let name = csv_file_name(&path)?.to_string();
            Some((path, name))
        })
        .collect();

    match matches.len() {
        1 => {
            let (path, name) = matches.remove(0);
            Ok(LocatedFile::new(path, name))
        }
        0 => Err(ImeiError::NoCsvFile {
            directory: directory.to_path_buf(),
        }),
        count => Err(ImeiError::AmbiguousInput {
            directory: directory.to_path_buf(),
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir() -> PathBuf {
        PathBuf::from("/data/in")
    }

    #[test]
    fn test_single_csv_is_selected() {
        let entries = vec![
            dir().join("readme.txt"),
            dir().join("devices.csv"),
            dir().join("devices.csv.bak"),
        ];

        let located = select_single_csv(&dir(), entries).unwrap();

        assert_eq!(located.file_name(), "devices.csv");
        assert_eq!(located.path(), dir().join("devices.csv"));
    }

    #[test]
    fn test_no_csv() {
        let entries = vec![dir().join("devices.txt"), dir().join("DEVICES.CSV")];

        let result = select_single_csv(&dir(), entries);

        assert!(matches!(result, Err(ImeiError::NoCsvFile { .. })));
    }

    #[test]
    fn test_empty_directory() {
        let result = select_single_csv(&dir(), Vec::new());
        assert!(matches!(result, Err(ImeiError::NoCsvFile { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_is_ignored() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let entries = vec![
            dir().join(OsStr::from_bytes(b"bad\xffname.csv")),
            dir().join("devices.csv"),
        ];

        let located = select_single_csv(&dir(), entries).unwrap();

        assert_eq!(located.file_name(), "devices.csv");
    }

    #[test]
    fn test_multiple_csv_is_ambiguous() {
        let entries = vec![
            dir().join("a.csv"),
            dir().join("b.csv"),
            dir().join("c.csv"),
        ];

        let result = select_single_csv(&dir(), entries);

        assert!(matches!(
            result,
            Err(ImeiError::AmbiguousInput { count: 3, .. })
        ));
    }
}
