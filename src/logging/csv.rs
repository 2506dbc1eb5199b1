use std::cell::RefCell;
use std::fs::File;
use std::io::{self, prelude::*, BufWriter};
use std::path::Path;

use crate::error::Result;
use super::observer::{Event, RoundRecord, TrainingObserver};

const HEADER: &str
    = "Round,Feature,Cut,Direction,WeightedError,Alpha,TrainError,Time\n";


/// Writes one CSV line per round.
///
/// Observers cannot fail,
/// so the first write error is kept and returned by
/// [`CsvLogger::into_inner`].
/// Lines after a failed write are discarded.
#[derive(Debug)]
pub struct CsvLogger<W: Write> {
    writer: RefCell<W>,
    error: RefCell<Option<io::Error>>,
}


impl CsvLogger<BufWriter<File>> {
    /// Creates `path` and writes the header to it.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file))?)
    }
}


impl<W: Write> CsvLogger<W> {
    /// Wraps `writer` and writes the header to it.
    pub fn new(mut writer: W) -> io::Result<Self> {
        writer.write_all(HEADER.as_bytes())?;
        Ok(Self {
            writer: RefCell::new(writer),
            error: RefCell::new(None),
        })
    }


    /// Flushes and returns the underlying writer,
    /// or the first error that occured while logging.
    pub fn into_inner(self) -> io::Result<W> {
        if let Some(error) = self.error.into_inner() {
            return Err(error);
        }
        let mut writer = self.writer.into_inner();
        writer.flush()?;
        Ok(writer)
    }


    fn write_record(&self, record: &RoundRecord) {
        if self.error.borrow().is_some() { return; }

        let line = format!(
            "{},{},{},{},{},{},{},{}\n",
            record.round,
            record.feature_index,
            record.value,
            record.direction.sign(),
            record.weighted_error,
            record.alpha,
            record.training_error,
            record.elapsed_millis,
        );
        if let Err(e) = self.writer.borrow_mut().write_all(line.as_bytes()) {
            *self.error.borrow_mut() = Some(e);
        }
    }
}


impl<W: Write> TrainingObserver for CsvLogger<W> {
    fn notify(&self, event: &Event) {
        match event {
            Event::Round(record) => self.write_record(record),
            Event::Finished { .. } => {
                if self.error.borrow().is_some() { return; }
                if let Err(e) = self.writer.borrow_mut().flush() {
                    *self.error.borrow_mut() = Some(e);
                }
            },
            _ => {},
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::weak_learner::Direction;

    #[test]
    fn writes_header_and_rounds() {
        let logger = CsvLogger::new(Vec::new()).unwrap();
        let record = RoundRecord {
            round: 0,
            feature_index: 1,
            value: 1.5,
            direction: Direction::Down,
            weighted_error: 0.25,
            alpha: 0.5,
            training_error: 0.0,
            elapsed_millis: 3,
        };
        logger.notify(&Event::Round(record));
        logger.notify(&Event::Tested { n_sample: 4, error: 0.0 });

        let bytes = logger.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "0,1,1.5,-1,0.25,0.5,0,3");
    }
}
