use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;
use rayon::prelude::*;

use super::feature::Feature;
use crate::checkers;
use crate::error::{BoostError, Result};


/// Struct `Sample` holds a batch of examples in a dense,
/// column-major layout together with the target labels.
///
/// The target is empty for an unlabeled sample
/// (e.g., the one passed to `predict`).
/// Otherwise every label is either `-1.0` or `+1.0`.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a labeled sample from row vectors.
    /// `rows[i][j]` is the `j`-th feature of the `i`-th example.
    pub fn from_rows<R>(rows: &[R], labels: Vec<f64>) -> Result<Self>
        where R: AsRef<[f64]>,
    {
        let features = rows_to_features(rows)?;
        Self::from_features(features, labels)
    }


    /// Construct a labeled sample from column vectors.
    /// `columns[j][i]` is the `j`-th feature of the `i`-th example.
    pub fn from_columns(columns: Vec<Vec<f64>>, labels: Vec<f64>)
        -> Result<Self>
    {
        let features = columns.into_iter()
            .enumerate()
            .map(|(j, vals)| Feature::with_values(default_name(j), vals))
            .collect::<Vec<_>>();
        Self::from_features(features, labels)
    }


    /// Construct a sample without labels.
    pub fn unlabeled<R>(rows: &[R]) -> Result<Self>
        where R: AsRef<[f64]>,
    {
        let features = rows_to_features(rows)?;
        Self::from_features(features, Vec::with_capacity(0))
    }


    /// Construct a sample from named features.
    /// Pass an empty `target` for an unlabeled sample.
    pub fn from_features(features: Vec<Feature>, target: Vec<f64>)
        -> Result<Self>
    {
        checkers::features(&features[..])?;

        let n_feature = features.len();
        let n_sample = features[0].len();

        if !target.is_empty() {
            checkers::target(&target[..], n_sample)?;
        }

        let name_to_index = index_names(&features[..]);

        Ok(Self { name_to_index, features, target, n_sample, n_feature, })
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    /// Every column is cast to `f64`; null values are rejected.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let features = data.get_columns()
            .par_iter()
            .map(|series| {
                let vals = series_values(series)?;
                Ok(Feature::with_values(series.name(), vals))
            })
            .collect::<Result<Vec<_>>>()?;

        let target = series_values(&target)?;
        Self::from_features(features, target)
    }


    /// Read a CSV format file to `Sample` type.
    /// The returned sample is unlabeled;
    /// use [`Sample::set_target`] to pick the label column.
    /// If `has_header` is `false`, the columns are named
    /// `Feat. [1]`, `Feat. [2]`, ...
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines().enumerate();

        let mut features = Vec::new();
        if has_header {
            if let Some((_, line)) = lines.next() {
                features = line?.split(',')
                    .map(|name| Feature::new(name.trim()))
                    .collect::<Vec<_>>();
            }
        }

        for (k, line) in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let xs = parse_line(line.split(','), k + 1)?;

            // If the header does not exist,
            // construct a dummy header from the first row.
            if features.is_empty() {
                features = (0..xs.len()).map(|j| Feature::new(default_name(j)))
                    .collect();
            }

            if xs.len() != features.len() {
                return Err(BoostError::Parse {
                    line: k + 1,
                    message: format!(
                        "expected {} columns, got {}",
                        features.len(), xs.len(),
                    ),
                });
            }

            features.iter_mut()
                .zip(xs)
                .for_each(|(feat, x)| { feat.append(x); });
        }

        Self::from_features(features, Vec::with_capacity(0))
    }


    /// Read a pair of whitespace-separated matrix files.
    /// Each line of `features` is one example;
    /// `labels` holds one label per example
    /// (any whitespace layout is accepted).
    pub fn from_matrix_files<P, Q>(features: P, labels: Q) -> Result<Self>
        where P: AsRef<Path>,
              Q: AsRef<Path>,
    {
        let rows = read_whitespace_rows(features)?;
        let labels = read_whitespace_rows(labels)?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        Self::from_rows(&rows[..], labels)
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old target will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Result<Self> {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .ok_or_else(|| {
                BoostError::invalid(
                    format!("the target column `{target}` does not exist")
                )
            })?;

        if self.n_feature == 1 {
            return Err(BoostError::invalid(
                "cannot use the only feature column as the target"
            ));
        }

        let target = self.features.remove(pos).into_vals();
        checkers::target(&target[..], self.n_sample)?;

        self.target = target;
        self.n_feature -= 1;
        self.name_to_index = index_names(&self.features[..]);

        Ok(self)
    }


    /// Returns a slice of labels.
    /// The slice is empty if `self` is unlabeled.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns `true` if `self` has labels.
    pub fn is_labeled(&self) -> bool {
        !self.target.is_empty()
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the `j`-th feature.
    pub fn feature(&self, j: usize) -> &Feature {
        &self.features[j]
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    /// `y` is `None` for an unlabeled sample.
    pub fn at(&self, idx: usize) -> (Vec<f64>, Option<f64>) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target.get(idx).copied();

        (x, y)
    }


    /// Set the feature (column) names and returns the old ones.
    pub fn replace_names<S, T>(&mut self, names: T) -> Result<Vec<String>>
        where S: ToString,
              T: AsRef<[S]>,
    {
        let names = names.as_ref();

        if self.n_feature != names.len() {
            return Err(BoostError::invalid(format!(
                "got {} names for {} features",
                names.len(), self.n_feature,
            )));
        }

        let old_names = names.iter()
            .zip(&mut self.features[..])
            .map(|(name, feature)| feature.replace_name(name.to_string()))
            .collect();

        self.name_to_index = index_names(&self.features[..]);
        Ok(old_names)
    }


    /// Check whether `self` is
    /// a training set for binary classification or not.
    pub fn is_valid_binary_instance(&self) -> Result<()> {
        checkers::sample(self)?;
        if !self.is_labeled() {
            return Err(BoostError::invalid(
                "the target class is not specified"
            ));
        }
        checkers::target(&self.target[..], self.n_sample)
    }
}


fn default_name(j: usize) -> String {
    format!("Feat. [{}]", j + 1)
}


fn index_names(features: &[Feature]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, f)| (f.name().to_string(), i))
        .collect()
}


fn rows_to_features<R>(rows: &[R]) -> Result<Vec<Feature>>
    where R: AsRef<[f64]>,
{
    let n_feature = rows.first()
        .map(|row| row.as_ref().len())
        .ok_or_else(|| BoostError::invalid("the sample has no example"))?;

    let mut features = (0..n_feature).map(|j| Feature::new(default_name(j)))
        .collect::<Vec<_>>();

    for (i, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != n_feature {
            return Err(BoostError::invalid(format!(
                "row {i} has {} features, expected {n_feature}",
                row.len(),
            )));
        }
        features.iter_mut()
            .zip(row)
            .for_each(|(feat, &x)| { feat.append(x); });
    }
    Ok(features)
}


fn series_values(series: &Series) -> Result<Vec<f64>> {
    let series = series.cast(&DataType::Float64)?;
    let vals = series.f64()?
        .into_iter()
        .collect::<Option<Vec<f64>>>();

    vals.ok_or_else(|| {
        BoostError::invalid(
            format!("the column `{}` contains null values", series.name())
        )
    })
}


fn parse_line<'a, I>(words: I, line: usize) -> Result<Vec<f64>>
    where I: Iterator<Item = &'a str>,
{
    words.map(|word| {
            word.trim()
                .parse::<f64>()
                .map_err(|e| BoostError::Parse {
                    line,
                    message: format!("`{}`: {e}", word.trim()),
                })
        })
        .collect()
}


fn read_whitespace_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<f64>>> {
    let file = File::open(path)?;
    let mut rows = Vec::new();
    for (k, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        rows.push(parse_line(line.split_whitespace(), k + 1)?);
    }
    Ok(rows)
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    /// Panics if no feature is named `name`.
    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = self.name_to_index[name];
        &self.features[k]
    }
}
