use chrono::NaiveDate;
use rust_decimal::Decimal;
use scene_chart::data::parse_price_csv;

const SAMPLE: &str = "\
Date,Open,High,Low,Close,Adj Close,Volume
1927-12-30,17.66,17.66,17.66,17.66,17.66,0
1928-01-03,17.76,17.76,17.76,17.76,17.76,0
not-a-date,1.0,2.0,0.5,1.5,1.5,0
1928-01-04,17.72,17.72,17.72,null,null,0
1928-01-05,17.55,17.66,17.50,17.55,17.55,0
";

#[test]
fn parses_well_formed_rows_in_order() {
    let records = parse_price_csv(SAMPLE).expect("parse");
    assert_eq!(records.len(), 3);

    assert_eq!(
        records[0].date,
        NaiveDate::from_ymd_opt(1927, 12, 30).expect("valid date")
    );
    assert_eq!(records[0].close, Decimal::new(1766, 2));
    assert_eq!(
        records[2].date,
        NaiveDate::from_ymd_opt(1928, 1, 5).expect("valid date")
    );
}

#[test]
fn unparseable_rows_are_skipped_not_fatal() {
    let records = parse_price_csv(SAMPLE).expect("parse");
    assert!(
        records
            .iter()
            .all(|r| r.date != NaiveDate::from_ymd_opt(1928, 1, 4).expect("valid date"))
    );
}

#[test]
fn header_columns_may_appear_in_any_order() {
    let input = "\
Close,Date,Low,High,Open
100.5,2000-01-03,99.0,101.0,100.0
";
    let records = parse_price_csv(input).expect("parse");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].close, Decimal::new(1005, 1));
    assert_eq!(records[0].high, Decimal::from(101));
}

#[test]
fn missing_header_column_is_fatal() {
    assert!(parse_price_csv("Date,Open,High,Low\n2000-01-03,1,2,0\n").is_err());
}

#[test]
fn empty_input_is_fatal() {
    assert!(parse_price_csv("").is_err());
}

#[test]
fn blank_lines_are_ignored() {
    let input = "Date,Open,High,Low,Close\n\n2000-01-03,1,2,0.5,1.5\n\n";
    let records = parse_price_csv(input).expect("parse");
    assert_eq!(records.len(), 1);
}
