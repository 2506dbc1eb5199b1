use std::ops::Index;
use std::slice::Iter;

const BUF_SIZE: usize = 256;


/// A single feature column.
/// Values are stored densely, one per example.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub(crate) name: String,
    pub(crate) vals: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            vals: Vec::with_capacity(BUF_SIZE),
        }
    }


    /// Construct a feature from the given values.
    pub fn with_values<T: ToString>(name: T, vals: Vec<f64>) -> Self {
        Self { name: name.to_string(), vals, }
    }


    /// Returns the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Replace the feature name and returns the old one.
    pub fn replace_name<T: ToString>(&mut self, name: T) -> String {
        std::mem::replace(&mut self.name, name.to_string())
    }


    pub(crate) fn append(&mut self, x: f64) {
        self.vals.push(x);
    }


    /// Returns the number of examples.
    pub fn len(&self) -> usize {
        self.vals.len()
    }


    /// Returns `true` if the feature holds no value.
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }


    /// Returns the values as a slice.
    pub fn values(&self) -> &[f64] {
        &self.vals[..]
    }


    /// Returns an iterator over the values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.vals.iter()
    }


    /// Returns the pair `(min, max)` of the values.
    /// Returns `None` if `self` is empty.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        if self.vals.is_empty() { return None; }

        let (min, max) = self.vals.iter()
            .copied()
            .fold((f64::MAX, f64::MIN), |(min, max), x| {
                (min.min(x), max.max(x))
            });
        Some((min, max))
    }


    pub(crate) fn into_vals(self) -> Vec<f64> {
        self.vals
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.vals[idx]
    }
}
