use std::path::Path;

use crate::errors::{Result, TreeError};
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV or plain text format file
/// to [`Sample`].
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use booltree::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
/// A plain text file needs no target column:
/// ```no_run
/// use booltree::SampleReader;
/// let sample = SampleReader::default()
///     .file("/path/to/text/file.dat")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    target: Option<String>,
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self {
            file: None,
            has_header: true,
            target: None,
        }
    }
}


impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the flag whether the CSV file has the header row or not.
    /// Default is `true.`
    /// The plain text format ignores this flag.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column name that holds the category names.
    /// Required for CSV files only.
    pub fn target_feature<S: AsRef<str>>(mut self, column: S) -> Self {
        self.target = Some(column.as_ref().to_string());
        self
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns [`Sample`].
    /// This method consumes `self.`
    /// If you read a CSV file, the extension should be `.csv`;
    /// any other extension is read as the plain text format.
    pub fn read(self) -> Result<Sample> {
        let file = self.file.ok_or_else(|| TreeError::InvalidInput(
            "The file name is not set. Use `SampleReader::file`.".into()
        ))?;
        let file = file.as_ref();

        if file.extension().is_some_and(|ext| ext == "csv") {
            let target = self.target.ok_or_else(|| TreeError::InvalidInput(
                "Target (class) column is not specified. \
                 Use `SampleReader::target_feature`.".into()
            ))?;
            Sample::from_csv(file, self.has_header, target)
        } else {
            Sample::from_text(file)
        }
    }
}
