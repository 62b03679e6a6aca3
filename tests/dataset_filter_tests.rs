use chrono::NaiveDate;
use yield_surface::core::{
    Dataset, Observation, drop_leading_non_data_rows, keep_rows_with_any_data, select_range,
};
use yield_surface::error::{DatasetStage, SurfaceError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn observations() -> Vec<Observation> {
    vec![
        Observation::new(date(2020, 1, 1), vec![Some(1.0), Some(1.5)]),
        Observation::new(date(2020, 6, 1), vec![None, Some(1.2)]),
        Observation::new(date(2021, 1, 1), vec![Some(2.0), Some(1.8)]),
    ]
}

#[test]
fn leading_rows_are_dropped_unconditionally() {
    let rows = vec!["unit", "multiplier", "currency", "id", "period", "data"];
    assert_eq!(drop_leading_non_data_rows(rows, 5), vec!["data"]);
}

#[test]
fn dropping_more_rows_than_exist_leaves_nothing() {
    let rows = vec![1, 2, 3];
    assert!(drop_leading_non_data_rows(rows, 10).is_empty());
}

#[test]
fn rows_without_any_rate_are_removed_in_order() {
    let mut rows = observations();
    rows.insert(1, Observation::new(date(2020, 3, 1), vec![None, None]));
    let kept = keep_rows_with_any_data(rows);
    let dates: Vec<NaiveDate> = kept.iter().map(|row| row.date).collect();
    assert_eq!(
        dates,
        vec![date(2020, 1, 1), date(2020, 6, 1), date(2021, 1, 1)]
    );
}

#[test]
fn select_range_is_inclusive_on_both_ends() {
    let rows = observations();
    let selected = select_range(&rows, date(2020, 1, 1), date(2020, 6, 1));
    assert_eq!(selected.len(), 2);
    assert_eq!(selected[0].date, date(2020, 1, 1));
    assert_eq!(selected[1].date, date(2020, 6, 1));
}

#[test]
fn inverted_range_selects_nothing() {
    let rows = observations();
    assert!(select_range(&rows, date(2021, 1, 1), date(2020, 1, 1)).is_empty());
}

#[test]
fn inverted_range_on_a_dataset_is_an_empty_range_selection() {
    let dataset =
        Dataset::new(observations(), DatasetStage::Filtering).expect("valid dataset");
    let err = dataset
        .select_range(date(2021, 1, 1), date(2020, 1, 1))
        .expect_err("inverted range");
    assert!(matches!(
        err,
        SurfaceError::EmptyDataset {
            stage: DatasetStage::RangeSelection
        }
    ));
    assert!(err.is_user_correctable());
}

#[test]
fn empty_dataset_after_filtering_is_not_user_correctable() {
    let err = Dataset::new(Vec::new(), DatasetStage::Filtering).expect_err("empty");
    assert!(matches!(
        err,
        SurfaceError::EmptyDataset {
            stage: DatasetStage::Filtering
        }
    ));
    assert!(!err.is_user_correctable());
}

#[test]
fn out_of_order_dates_are_rejected() {
    let mut rows = observations();
    rows.swap(0, 2);
    let err = Dataset::new(rows, DatasetStage::Filtering).expect_err("unsorted");
    assert!(matches!(err, SurfaceError::InvalidData(_)));
}

#[test]
fn duplicate_dates_are_rejected() {
    let mut rows = observations();
    rows[1].date = rows[0].date;
    assert!(Dataset::new(rows, DatasetStage::Filtering).is_err());
}

#[test]
fn ragged_curves_are_rejected() {
    let mut rows = observations();
    rows[2].curve.push(Some(3.0));
    let err = Dataset::new(rows, DatasetStage::Filtering).expect_err("ragged");
    assert!(matches!(err, SurfaceError::InvalidData(_)));
}

#[test]
fn rows_without_any_rate_are_rejected() {
    let mut rows = observations();
    rows.insert(1, Observation::new(date(2020, 3, 1), vec![None, None]));
    let err = Dataset::new(rows, DatasetStage::Filtering).expect_err("no-data row");
    assert!(matches!(err, SurfaceError::InvalidData(message) if message.contains("2020-03-01")));
}

#[test]
fn dataset_reports_bounds_and_present_rates() {
    let dataset =
        Dataset::new(observations(), DatasetStage::Filtering).expect("valid dataset");
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.tenor_count(), 2);
    assert_eq!(dataset.date_bounds(), (date(2020, 1, 1), date(2021, 1, 1)));
    assert_eq!(dataset.present_rates().count(), 5);
}
