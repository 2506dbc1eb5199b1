use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use polars::prelude::{DataFrame, NamedFrom, Series};

use adastump::prelude::*;


/// Writes `contents` to `name` under `dir`.
fn temp_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}


#[test]
fn csv_with_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_file(
        &dir,
        "train.csv",
        "height,class,weight\n\
         1.0,-1,10.0\n\
         2.0,-1,20.0\n\
         \n\
         3.0,1,30.0\n\
         4.0,1,40.0\n",
    );

    let sample = SampleReader::default()
        .file(&path)
        .has_header(true)
        .target_feature("class")
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (4, 2));
    assert_eq!(sample.target(), &[-1.0, -1.0, 1.0, 1.0]);
    assert_eq!(sample["weight"].values(), &[10.0, 20.0, 30.0, 40.0]);
    assert_eq!(sample.feature(0).name(), "height");
    assert_eq!(sample.at(2), (vec![3.0, 30.0], Some(1.0)));

    let mut booster = AdaBoost::init(&sample).unwrap();
    assert_eq!(booster.train(), Termination::Converged { round: 0 });
}


#[test]
fn csv_without_header_is_unlabeled() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_file(&dir, "plain.csv", "0.5,1.5\n2.5,3.5\n");
    let sample = Sample::from_csv(&path, false).unwrap();

    assert_eq!(sample.shape(), (2, 2));
    assert!(!sample.is_labeled());
    assert_eq!(sample.feature(1).name(), "Feat. [2]");
    assert_eq!(sample.at(1), (vec![2.5, 3.5], None));
}


#[test]
fn csv_parse_errors_carry_the_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_file(&dir, "broken.csv", "a,class\n1.0,1\nfoo,-1\n");
    let result = SampleReader::default()
        .file(&path)
        .has_header(true)
        .target_feature("class")
        .read();

    match result {
        Err(BoostError::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected a parse error, got {other:?}"),
    }
}


#[test]
fn csv_rejects_bad_labels_and_missing_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_file(&dir, "labels.csv", "a,class\n1.0,1\n2.0,0\n");

    let bad_label = SampleReader::default()
        .file(&path)
        .has_header(true)
        .target_feature("class")
        .read();
    assert!(matches!(bad_label, Err(BoostError::InvalidInput(_))));

    let missing = SampleReader::default()
        .file(&path)
        .has_header(true)
        .target_feature("label")
        .read();
    assert!(matches!(missing, Err(BoostError::InvalidInput(_))));

    let absent = SampleReader::default()
        .file(dir.path().join("no-such-file.csv"))
        .has_header(true)
        .target_feature("class")
        .read();
    assert!(matches!(absent, Err(BoostError::Io(_))));
}


#[test]
fn matrix_files() {
    let dir = tempfile::tempdir().unwrap();
    let features = temp_file(&dir, "x.txt", "0 10\n1 11\n\n2 12\n");
    let labels = temp_file(&dir, "y.txt", "-1 -1\n1\n");

    let sample = Sample::from_matrix_files(&features, &labels).unwrap();

    assert_eq!(sample.shape(), (3, 2));
    assert_eq!(sample.target(), &[-1.0, -1.0, 1.0]);
    assert_eq!(sample.feature(1).values(), &[10.0, 11.0, 12.0]);
}


#[test]
fn dataframe() {
    let data = DataFrame::new(vec![
        Series::new("x", &[0.0, 1.0, 2.0, 3.0]),
        Series::new("n", &[4i32, 3, 2, 1]),
    ]).unwrap();
    let target = Series::new("class", &[-1i64, -1, 1, 1]);

    let sample = Sample::from_dataframe(data, target).unwrap();
    assert_eq!(sample.shape(), (4, 2));
    assert_eq!(sample["n"].values(), &[4.0, 3.0, 2.0, 1.0]);
    assert_eq!(sample.target(), &[-1.0, -1.0, 1.0, 1.0]);
}


#[test]
fn malformed_input_fails_fast() {
    let ragged = Sample::from_columns(
        vec![vec![0.0, 1.0], vec![0.0]],
        vec![-1.0, 1.0],
    );
    assert!(matches!(ragged, Err(BoostError::InvalidInput(_))));

    let short = Sample::from_rows(&[[0.0], [1.0]], vec![1.0]);
    assert!(matches!(short, Err(BoostError::InvalidInput(_))));

    let nan = Sample::from_rows(&[[0.0], [f64::NAN]], vec![-1.0, 1.0]);
    assert!(matches!(nan, Err(BoostError::InvalidInput(_))));

    let empty = Sample::from_columns(Vec::new(), Vec::new());
    assert!(matches!(empty, Err(BoostError::InvalidInput(_))));
}


#[test]
fn feature_names_can_be_replaced() {
    let mut sample = Sample::from_rows(
        &[[0.0, 1.0], [2.0, 3.0]],
        vec![-1.0, 1.0],
    ).unwrap();

    let old = sample.replace_names(["left", "right"]).unwrap();
    assert_eq!(old, vec!["Feat. [1]".to_string(), "Feat. [2]".to_string()]);
    assert_eq!(sample["right"].values(), &[1.0, 3.0]);

    assert!(sample.replace_names(["only"]).is_err());
}
