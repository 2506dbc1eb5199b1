use std::path::Path;

use super::sample_struct::Sample;
use crate::error::{BoostError, Result};


/// A builder that reads a CSV file into [`Sample`].
///
/// ```no_run
/// use adastump::SampleReader;
/// let sample = SampleReader::default()
///     .file("/path/to/train.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self { file: None, has_header: false, target: None, }
    }
}


impl<P, S> SampleReader<P, S> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for target label.
    /// The each item of the column takes value in `{-1, +1}.`
    /// If no column is set, the returned sample is unlabeled.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .ok_or_else(|| BoostError::invalid("the file name is not set"))?;

        let sample = Sample::from_csv(file.as_ref(), self.has_header)?;
        match self.target {
            Some(target) => sample.set_target(target.as_ref()),
            None => Ok(sample),
        }
    }
}
