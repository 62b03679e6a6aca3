use chrono::NaiveDate;
use yield_surface::core::{RawRecord, RowParser, Tenor, TenorSet};
use yield_surface::error::SurfaceError;

fn two_tenor_set() -> TenorSet {
    TenorSet::new(vec![Tenor::new("short", "1Y"), Tenor::new("long", "10Y")])
        .expect("valid tenor set")
}

fn record(fields: &[(&str, &str)]) -> RawRecord {
    fields
        .iter()
        .map(|(column, value)| ((*column).to_owned(), (*value).to_owned()))
        .collect()
}

#[test]
fn parses_rates_in_tenor_order() {
    let parser = RowParser::new(two_tenor_set()).with_date_column("date");
    let observation = parser
        .parse(
            &record(&[("long", "3.25"), ("date", "2021-03-04"), ("short", "0.5")]),
            2,
        )
        .expect("valid row");

    assert_eq!(
        observation.date,
        NaiveDate::from_ymd_opt(2021, 3, 4).expect("valid date")
    );
    assert_eq!(observation.curve, vec![Some(0.5), Some(3.25)]);
}

#[test]
fn empty_cells_and_missing_tokens_become_none() {
    let parser = RowParser::new(two_tenor_set())
        .with_date_column("date")
        .with_missing_token("ND");
    let observation = parser
        .parse(
            &record(&[("date", "2021-03-04"), ("short", "  "), ("long", "ND")]),
            2,
        )
        .expect("valid row");

    assert_eq!(observation.curve, vec![None, None]);
    assert!(!observation.has_any_rate());
}

#[test]
fn month_only_dates_resolve_to_the_first() {
    let parser = RowParser::new(two_tenor_set()).with_date_column("date");
    let observation = parser
        .parse(
            &record(&[("date", "1999-07"), ("short", "4.1"), ("long", "5.9")]),
            2,
        )
        .expect("valid row");
    assert_eq!(
        observation.date,
        NaiveDate::from_ymd_opt(1999, 7, 1).expect("valid date")
    );
}

#[test]
fn malformed_rate_reports_row_tenor_and_record() {
    let parser = RowParser::new(two_tenor_set()).with_date_column("date");
    let err = parser
        .parse(
            &record(&[("date", "2021-03-04"), ("short", "1.0"), ("long", "n/a")]),
            9,
        )
        .expect_err("rate is not numeric");

    match err {
        SurfaceError::MalformedRate {
            row,
            tenor,
            value,
            record,
        } => {
            assert_eq!(row, 9);
            assert_eq!(tenor, "10Y");
            assert_eq!(value, "n/a");
            assert!(record.contains("2021-03-04"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_finite_rates_are_malformed() {
    let parser = RowParser::new(two_tenor_set()).with_date_column("date");
    let err = parser
        .parse(
            &record(&[("date", "2021-03-04"), ("short", "NaN"), ("long", "1")]),
            3,
        )
        .expect_err("NaN is not a rate");
    assert!(matches!(err, SurfaceError::MalformedRate { row: 3, .. }));
}

#[test]
fn malformed_date_names_the_column() {
    let parser = RowParser::new(two_tenor_set()).with_date_column("date");
    let err = parser
        .parse(
            &record(&[("date", "Unit:"), ("short", "1"), ("long", "2")]),
            4,
        )
        .expect_err("not a date");

    match err {
        SurfaceError::MalformedDate { row, column, value } => {
            assert_eq!(row, 4);
            assert_eq!(column, "date");
            assert_eq!(value, "Unit:");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn absent_tenor_column_is_reported() {
    let parser = RowParser::new(two_tenor_set()).with_date_column("date");
    let err = parser
        .parse(&record(&[("date", "2021-03-04"), ("short", "1")]), 5)
        .expect_err("long column absent");
    assert!(matches!(
        err,
        SurfaceError::MissingColumn { row: 5, ref column } if column == "long"
    ));
}

#[test]
fn parse_all_numbers_rows_from_the_first_row() {
    let parser = RowParser::new(two_tenor_set()).with_date_column("date");
    let records = vec![
        record(&[("date", "2021-03-04"), ("short", "1"), ("long", "2")]),
        record(&[("date", "2021-03-05"), ("short", "x"), ("long", "2")]),
    ];
    let err = parser.parse_all(&records, 7).expect_err("second row is bad");
    assert!(matches!(err, SurfaceError::MalformedRate { row: 8, .. }));
}

#[test]
fn h15_parser_knows_treasury_headers() {
    let parser = RowParser::h15();
    let tenors = TenorSet::treasury();
    let mut fields = vec![("Series Description".to_owned(), "2020-01-02".to_owned())];
    for (index, tenor) in tenors.iter().enumerate() {
        let value = if index == 0 { "ND".to_owned() } else { format!("{}.00", index) };
        fields.push((tenor.key.clone(), value));
    }
    let record: RawRecord = fields.into_iter().collect();

    let observation = parser.parse(&record, 7).expect("valid H.15 row");
    assert_eq!(observation.curve.len(), 11);
    assert_eq!(observation.curve[0], None);
    assert_eq!(observation.curve[10], Some(10.0));
}
