use census_scatter::ChartError;
use census_scatter::core::{Dataset, Field, Record};
use census_scatter::data::{load_csv_path, load_csv_str};

fn fixture_path() -> String {
    format!(
        "{}/tests/fixtures/census_sample.csv",
        env!("CARGO_MANIFEST_DIR")
    )
}

#[test]
fn fixture_loads_all_rows_in_order() {
    let dataset = load_csv_path(fixture_path()).expect("fixture loads");
    assert_eq!(dataset.len(), 8);
    assert!(!dataset.is_empty());

    let first = &dataset.records()[0];
    assert_eq!(first.name, "Alabama");
    assert_eq!(first.abbr, "AL");
    assert_eq!(first.value(Field::Poverty), 19.3);
    assert_eq!(first.value(Field::Income), 42830.0);
    assert_eq!(first.value(Field::Smokes), 21.1);

    let last = dataset.records().last().expect("non-empty");
    assert_eq!(last.abbr, "DE");
}

#[test]
fn name_column_is_accepted_instead_of_state() {
    let csv = "name,abbr,poverty,age,income,healthcare,obesity,smokes\n\
               Testland,TL,10,30,40000,5,20,15\n";
    let dataset = load_csv_str(csv).expect("valid csv");
    assert_eq!(dataset.records()[0].name, "Testland");
}

#[test]
fn non_numeric_cell_reports_row_and_field() {
    let csv = "state,abbr,poverty,age,income,healthcare,obesity,smokes\n\
               A,AA,10,30,40000,5,20,15\n\
               B,BB,12,n/a,41000,6,21,16\n";
    let err = load_csv_str(csv).expect_err("age is not numeric");
    match err {
        ChartError::InvalidField { row, field, value } => {
            assert_eq!(row, 2);
            assert_eq!(field, Field::Age);
            assert_eq!(value, "n/a");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_numeric_cell_is_rejected() {
    let csv = "state,abbr,poverty,age,income,healthcare,obesity,smokes\n\
               A,AA,10,30,40000,,20,15\n";
    let err = load_csv_str(csv).expect_err("healthcare is empty");
    assert!(matches!(
        err,
        ChartError::InvalidField {
            field: Field::Healthcare,
            ..
        }
    ));
}

#[test]
fn nan_literal_is_rejected() {
    let csv = "state,abbr,poverty,age,income,healthcare,obesity,smokes\n\
               A,AA,NaN,30,40000,5,20,15\n";
    let err = load_csv_str(csv).expect_err("NaN must not reach the chart");
    assert!(matches!(
        err,
        ChartError::InvalidField {
            field: Field::Poverty,
            ..
        }
    ));
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let csv = "state,abbr,poverty,age,income,healthcare,obesity,smokes\n";
    let err = load_csv_str(csv).expect_err("no rows");
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn missing_column_is_a_csv_error() {
    let csv = "state,abbr,poverty,age,income,healthcare,obesity\n\
               A,AA,10,30,40000,5,20\n";
    let err = load_csv_str(csv).expect_err("smokes column missing");
    assert!(matches!(err, ChartError::Csv(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_csv_path("tests/fixtures/does_not_exist.csv").expect_err("no such file");
    assert!(matches!(err, ChartError::Io(_)));
}

#[test]
fn dataset_constructor_rejects_empty_and_non_finite_records() {
    assert!(matches!(Dataset::new(Vec::new()), Err(ChartError::EmptyDataset)));

    let record = Record {
        name: "X".to_owned(),
        abbr: "XX".to_owned(),
        poverty: 1.0,
        age: f64::INFINITY,
        income: 1.0,
        healthcare: 1.0,
        obesity: 1.0,
        smokes: 1.0,
    };
    let err = Dataset::new(vec![record]).expect_err("infinite age");
    assert!(matches!(
        err,
        ChartError::InvalidField {
            row: 1,
            field: Field::Age,
            ..
        }
    ));
}
