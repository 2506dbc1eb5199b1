use std::cell::RefCell;

use super::observer::{Event, RoundRecord, TrainingObserver};


/// An observer that keeps every event in memory.
///
/// ```
/// use adastump::prelude::*;
///
/// let sample = Sample::from_rows(
///     &[[0.0], [1.0], [2.0], [3.0]],
///     vec![-1.0, -1.0, 1.0, 1.0],
/// ).unwrap();
/// let recorder = Recorder::default();
/// let mut booster = AdaBoost::init(&sample)
///     .unwrap()
///     .observer(&recorder);
/// booster.train();
///
/// assert_eq!(recorder.rounds().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    events: RefCell<Vec<Event>>,
}


impl Recorder {
    /// Returns a copy of the recorded events.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }


    /// Returns the recorded rounds.
    pub fn rounds(&self) -> Vec<RoundRecord> {
        self.events.borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Round(record) => Some(record.clone()),
                _ => None,
            })
            .collect()
    }


    /// Removes every recorded event.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}


impl TrainingObserver for Recorder {
    fn notify(&self, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }
}
