use tearsheet_charts::format::to_fixed;
use tearsheet_charts::{Formatter, Scalar, SemanticType, format_duration, format_value};

const ALL_TYPES: [SemanticType; 10] = [
    SemanticType::Percent,
    SemanticType::Decimal,
    SemanticType::Integer,
    SemanticType::Date,
    SemanticType::DateTime,
    SemanticType::Monetary,
    SemanticType::Duration,
    SemanticType::String,
    SemanticType::DayDuration,
    SemanticType::Other,
];

fn fmt(v: impl Into<Scalar>, ty: SemanticType) -> String {
    format_value(Some(&v.into()), Some(ty))
}

#[test]
fn percent_is_two_decimals_with_suffix() {
    for v in [0.0, 1.0, -3.14159, 12.5, 1e6, 0.005, -0.125] {
        assert_eq!(fmt(v, SemanticType::Percent), format!("{}%", to_fixed(v, 2)));
    }
    assert_eq!(fmt("n/a", SemanticType::Percent), "n/a");
    assert_eq!(fmt("7.5", SemanticType::Percent), "7.50%");
}

#[test]
fn booleans_are_yes_no_for_every_type() {
    for ty in ALL_TYPES {
        assert_eq!(fmt(true, ty), "Yes");
        assert_eq!(fmt(false, ty), "No");
    }
    assert_eq!(format_value(Some(&Scalar::Bool(true)), None), "Yes");
}

#[test]
fn null_is_empty_for_every_type() {
    for ty in ALL_TYPES {
        assert_eq!(format_value(None, Some(ty)), "");
        assert_eq!(format_value(Some(&Scalar::Null), Some(ty)), "");
    }
    assert_eq!(format_value(None, None), "");
}

#[test]
fn numeric_types() {
    assert_eq!(fmt(1.005, SemanticType::Decimal), "1.00");
    assert_eq!(fmt(-2.5, SemanticType::Decimal), "-2.50");
    assert_eq!(fmt(1234567.6, SemanticType::Integer), "1,234,568");
    assert_eq!(fmt(1234.5, SemanticType::Monetary), "$1,234.50");
    assert_eq!(fmt(-99.999, SemanticType::Monetary), "-$100.00");
    assert_eq!(format_value(Some(&Scalar::Number(9876.543)), None), "9,876.54");
    assert_eq!(format_value(Some(&Scalar::Text("AAPL".into())), None), "AAPL");
}

#[test]
fn day_durations_pluralize() {
    assert_eq!(fmt(1.0, SemanticType::DayDuration), "1 day");
    assert_eq!(fmt(0.0, SemanticType::DayDuration), "0 days");
    assert_eq!(fmt(3.0, SemanticType::DayDuration), "3 days");
    assert_eq!(fmt(2.5, SemanticType::DayDuration), "2.5 days");
}

#[test]
fn durations_are_nanoseconds() {
    assert_eq!(fmt(0.0, SemanticType::Duration), "0 seconds");
    assert_eq!(fmt(250_000.0, SemanticType::Duration), "250 µs");
    assert_eq!(fmt(3_000_000.0, SemanticType::Duration), "3 ms");
    assert_eq!(fmt(90_061e9, SemanticType::Duration), "1d 1:1:1");
}

#[test]
fn format_duration_buckets() {
    assert_eq!(format_duration(0.0), "0 seconds");
    assert_eq!(format_duration(-0.0005), "-500 µs");
    assert_eq!(format_duration(90061.0), "1d 1:1:1");
    assert_eq!(format_duration(0.25), "250 ms");
    assert_eq!(format_duration(-3600.0), "-0d 1:0:0");
}

#[test]
fn dates_render_in_utc() {
    assert_eq!(fmt(0.0, SemanticType::Date), "1/1/1970");
    assert_eq!(fmt("2024-03-05", SemanticType::Date), "3/5/2024");
    assert_eq!(
        fmt("2024-03-05T14:07:09Z", SemanticType::DateTime),
        "3/5/2024, 2:07:09 PM"
    );
    assert_eq!(fmt("someday", SemanticType::Date), "someday");
}

#[test]
fn locales_change_grouping_and_dates() {
    let de = Formatter::new("de_DE");
    let v = Scalar::Number(1234.5);
    assert_eq!(de.format(Some(&v), Some(SemanticType::Monetary)), "$1,234.50");
    assert_eq!(de.format(Some(&v), None), "1.234,50");
    assert_eq!(
        de.format(Some(&Scalar::Text("2024-03-05".into())), Some(SemanticType::Date)),
        "05.03.2024"
    );
    assert_eq!(Formatter::new("klingon"), Formatter::default());
}
