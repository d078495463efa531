//! CSV Data Loader Module
//! Loads a CSV file into a Polars DataFrame and exposes its columns.

use polars::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::preview::format_preview;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Csv(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
}

/// Owns the currently loaded dataset.
///
/// A load either replaces the DataFrame wholesale or leaves the previous
/// one untouched.
#[derive(Default)]
pub struct DataLoader {
    df: Option<DataFrame>,
}

impl DataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `file_path` as CSV with a header row.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&DataFrame, LoaderError> {
        let metadata = std::fs::metadata(file_path).map_err(|source| LoaderError::Unreadable {
            path: file_path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(LoaderError::Unreadable {
                path: file_path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            });
        }

        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Column names of the loaded DataFrame, in file order.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Fixed-width text of the first `rows` rows.
    pub fn preview(&self, rows: usize) -> Result<String, LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;
        Ok(format_preview(df, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_columns_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "data.csv", "A,B\n1,2\n3,4\n");

        let mut loader = DataLoader::new();
        let df = loader.load_csv(&path).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(loader.get_columns(), vec!["A", "B"]);
        assert_eq!(loader.get_row_count(), 2);
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = DataLoader::new();

        let err = loader.load_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::Unreadable { .. }));
        assert!(loader.get_dataframe().is_none());
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = DataLoader::new();

        let err = loader.load_csv(dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_failed_load_keeps_previous_data() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_csv(&dir, "good.csv", "x,y\n1,10\n2,20\n3,30\n");

        let mut loader = DataLoader::new();
        loader.load_csv(&good).unwrap();
        assert!(loader.load_csv(&dir.path().join("missing.csv")).is_err());

        assert_eq!(loader.get_row_count(), 3);
        assert_eq!(loader.get_columns(), vec!["x", "y"]);
    }

    #[test]
    fn test_reload_replaces_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_csv(&dir, "first.csv", "a,b,c\n1,2,3\n");
        let second = write_csv(&dir, "second.csv", "date,kwh\n2020-01-01,1.5\n2020-01-02,2.5\n");

        let mut loader = DataLoader::new();
        loader.load_csv(&first).unwrap();
        loader.load_csv(&second).unwrap();

        assert_eq!(loader.get_columns(), vec!["date", "kwh"]);
        assert_eq!(loader.get_row_count(), 2);
    }

    #[test]
    fn test_ragged_rows_are_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_csv(&dir, "good.csv", "x,y\n1,10\n2,20\n");
        let ragged = write_csv(&dir, "ragged.csv", "A,B\n1,2\n3,4,5,6\n");

        let mut loader = DataLoader::new();
        loader.load_csv(&good).unwrap();

        let err = loader.load_csv(&ragged).unwrap_err();
        assert!(matches!(err, LoaderError::Csv(_)));
        assert_eq!(loader.get_columns(), vec!["x", "y"]);
        assert_eq!(loader.get_row_count(), 2);
    }

    #[test]
    fn test_escaped_quotes_survive_preview() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "quoted.csv", "A,B\n\"\"\"hi\"\"\",2\n");

        let mut loader = DataLoader::new();
        loader.load_csv(&path).unwrap();

        let text = loader.preview(5).unwrap();
        assert!(text.lines().nth(1).unwrap().contains("\"hi\""));
    }

    #[test]
    fn test_preview_without_data() {
        let loader = DataLoader::new();
        assert!(matches!(loader.preview(5), Err(LoaderError::NoData)));
    }
}
