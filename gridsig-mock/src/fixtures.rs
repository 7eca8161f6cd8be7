//! Canned emissions responses.

/// Five readings delivered out of timestamp order. The latest one has a total of 52.26.
pub const EMISSIONS_OUT_OF_ORDER: &str = r#"[{"data":[
    {"NaturalGas":29.16,"Oil":0.24,"Wood":6.4,"Total":44.62,"Refuse":8.47,"LandfillGas":0.35,"BeginDateMs":1737198711000,"BeginDate":"2025-01-18T06:11:51.000-05:00"},
    {"NaturalGas":26.69,"Oil":0.03,"Wood":6.42,"Total":41.67,"Refuse":8.18,"LandfillGas":0.35,"BeginDateMs":1737186246000,"BeginDate":"2025-01-18T02:44:06.000-05:00"},
    {"NaturalGas":34.01,"Oil":0.95,"Wood":6.46,"Total":50.26,"Refuse":8.49,"LandfillGas":0.35,"BeginDateMs":1737176922000,"BeginDate":"2025-01-18T00:08:42.000-05:00"},
    {"NaturalGas":35.41,"Oil":1.91,"Wood":6.44,"Total":52.26,"Coal":0.05,"Refuse":8.1,"LandfillGas":0.35,"BeginDateMs":1737223920000,"BeginDate":"2025-01-18T13:12:00.000-05:00"},
    {"NaturalGas":33.48,"Oil":0.78,"Wood":6.31,"Total":49.37,"Coal":0.03,"Refuse":8.42,"LandfillGas":0.35,"BeginDateMs":1737207448000,"BeginDate":"2025-01-18T08:37:28.000-05:00"}
], "namespace": "_nstmp_"}]"#;

/// Totals of [`EMISSIONS_OUT_OF_ORDER`] once sorted by timestamp.
pub const EMISSIONS_SORTED_TOTALS: [f64; 5] = [50.26, 41.67, 44.62, 49.37, 52.26];

/// One reading whose total exceeds the relative scale.
pub const EMISSIONS_OVERFLOW: &str = r#"[{"data":[
    {"NaturalGas":29.16,"Oil":100.24,"Wood":6.4,"Total":144.62,"Refuse":8.47,"LandfillGas":0.35,"BeginDateMs":1737198711000,"BeginDate":"2025-01-18T06:11:51.000-05:00"}
]}]"#;

/// A well-formed envelope with no readings.
pub const EMISSIONS_SHORT: &str = r#"[{"data":[]}]"#;

/// An envelope with neither `data` nor `namespace`.
pub const EMPTY_ENVELOPE: &str = "[{}]";

/// Two envelopes where exactly one is expected.
pub const TWO_ENVELOPES: &str =
    r#"[{"data":[], "namespace": "_nstmp_"},{"data":[], "namespace": "foo"}]"#;

/// Valid JSON of the wrong shape.
pub const GARBAGE: &str = r#""Garbage""#;

/// Not JSON at all.
pub const INVALID_JSON: &str = "invalid json";

/// A response carrying a single reading with the given total at the given timestamp.
#[must_use]
pub fn single_reading(total: f64, begin_date_ms: i64) -> Vec<u8> {
    format!(
        r#"[{{"data":[{{"Total":{total},"BeginDateMs":{begin_date_ms}}}],"namespace":"_nstmp_"}}]"#
    )
    .into_bytes()
}
