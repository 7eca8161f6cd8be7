use gridsig_types::{Envelope, Reading, latest, sort_by_time};

#[test]
fn reading_deserializes_pascal_case_and_ignores_unknown_fields() {
    let r: Reading = serde_json::from_str(
        r#"{"NaturalGas":35.41,"Oil":1.91,"Wood":6.44,"Total":52.26,"Coal":0.05,"Refuse":8.1,"LandfillGas":0.35,"BeginDateMs":1737223920000,"BeginDate":"2025-01-18T13:12:00.000-05:00"}"#,
    )
    .expect("deserialize reading");
    assert_eq!(r.natural_gas, 35.41);
    assert_eq!(r.total, 52.26);
    assert_eq!(r.landfill_gas, 0.35);
    assert_eq!(r.begin_date_ms, 1_737_223_920_000);
    let begin = r.begin_date.expect("begin date present");
    assert_eq!(begin.timestamp_millis(), r.begin_date_ms);
}

#[test]
fn missing_numeric_fields_default_to_zero() {
    let r: Reading = serde_json::from_str(r#"{"Total":12.5}"#).expect("deserialize reading");
    assert_eq!(r.total, 12.5);
    assert_eq!(r.oil, 0.0);
    assert_eq!(r.begin_date_ms, 0);
    assert!(r.begin_date.is_none());
}

#[test]
fn empty_envelope_has_no_readings() {
    let e: Envelope = serde_json::from_str("{}").expect("deserialize envelope");
    assert!(e.data.is_empty());
    assert!(e.namespace.is_empty());
}

#[test]
fn sort_is_stable_for_equal_timestamps() {
    let mk = |ms: i64, total: f64| Reading {
        begin_date_ms: ms,
        total,
        ..Reading::default()
    };
    let mut v = vec![mk(3, 1.0), mk(1, 2.0), mk(3, 3.0), mk(2, 4.0)];
    sort_by_time(&mut v);
    let totals: Vec<f64> = v.iter().map(|r| r.total).collect();
    assert_eq!(totals, vec![2.0, 4.0, 1.0, 3.0]);
    assert_eq!(latest(&v).map(|r| r.total), Some(3.0));
    assert!(latest(&[]).is_none());
}
