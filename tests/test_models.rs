//! Model tests: trend arithmetic, period parsing and settings helpers.

use folio_dash::models::{SeriesValues, Theme};
use folio_dash::{CoinId, Period, ReadState, Settings, StatBundle, TimeSeriesPoint, Trend};

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

#[test]
fn zero_first_value_yields_zero_trend() {
    let trend = Trend::between(0.0, 125.0);
    assert_eq!(trend.percentage, 0.0);
    assert!(trend.positive);

    let flat = Trend::between(0.0, 0.0);
    assert_eq!(flat.percentage, 0.0);
    assert!(flat.positive);
}

#[test]
fn zero_first_point_in_bundle_is_guarded() {
    let chart = vec![
        TimeSeriesPoint::new("Mon", 0.0),
        TimeSeriesPoint::new("Tue", 40.0),
    ];
    let bundle = StatBundle::new(Period::Weekly, 40.0, chart);
    assert_eq!(bundle.trend_percentage, 0.0);
    assert!(bundle.trend_percentage.is_finite());
    assert!(bundle.trend_positive);
}

#[test]
fn trend_is_absolute_and_rounded() {
    let down = Trend::between(200.0, 150.0);
    assert_eq!(down.percentage, 25.0);
    assert!(!down.positive);

    let up = Trend::between(300.0, 400.0);
    assert_eq!(up.percentage, 33.33);
    assert!(up.positive);
}

#[test]
fn non_finite_inputs_are_flat() {
    assert_eq!(Trend::between(f64::NAN, 1.0).percentage, 0.0);
    assert_eq!(Trend::between(1.0, f64::INFINITY).percentage, 0.0);
}

#[test]
fn empty_series_is_flat() {
    let trend = Trend::of_series(&[]);
    assert_eq!(trend.percentage, 0.0);
    assert!(trend.positive);
}

// ---------------------------------------------------------------------------
// Period
// ---------------------------------------------------------------------------

#[test]
fn period_parses_names_and_range_keys() {
    assert_eq!("daily".parse::<Period>().unwrap(), Period::Daily);
    assert_eq!("24H".parse::<Period>().unwrap(), Period::Daily);
    assert_eq!("7d".parse::<Period>().unwrap(), Period::Weekly);
    assert_eq!(" Monthly ".parse::<Period>().unwrap(), Period::Monthly);
    assert_eq!("1Y".parse::<Period>().unwrap(), Period::Yearly);
    assert!("quarterly".parse::<Period>().is_err());
}

#[test]
fn unknown_period_defaults_to_weekly() {
    assert_eq!(Period::parse_or_default("quarterly"), Period::Weekly);
    assert_eq!(Period::default(), Period::Weekly);
}

#[test]
fn labels_have_point_count_length() {
    for period in Period::ALL {
        assert_eq!(period.labels().len(), period.point_count());
    }
}

#[test]
fn period_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Period::Yearly).unwrap(), "yearly");
    let p: Period = serde_json::from_str("\"daily\"").unwrap();
    assert_eq!(p, Period::Daily);
    assert_eq!(Period::Monthly.to_string(), "monthly");
}

// ---------------------------------------------------------------------------
// SeriesValues
// ---------------------------------------------------------------------------

#[test]
fn series_values_deserialize_untagged() {
    let scalars: SeriesValues = serde_json::from_str("[1, 2.5, 3]").unwrap();
    assert_eq!(scalars, SeriesValues::Scalars(vec![1.0, 2.5, 3.0]));
    assert_eq!(scalars.sum(), 6.5);

    let points: SeriesValues =
        serde_json::from_str(r#"[{"label": "Jan", "value": 4}]"#).unwrap();
    assert_eq!(
        points,
        SeriesValues::Points(vec![TimeSeriesPoint::new("Jan", 4.0)])
    );
}

// ---------------------------------------------------------------------------
// Settings / ReadState
// ---------------------------------------------------------------------------

#[test]
fn settings_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.theme, Theme::System);
    assert_eq!(settings.currency, "USD");
    assert_eq!(settings.default_period, Period::Weekly);
    assert!(settings.notifications_enabled);
    assert!(settings.is_favorite(CoinId::Bitcoin));
}

#[test]
fn settings_fill_missing_fields_from_defaults() {
    let settings: Settings = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
    assert_eq!(settings.theme, Theme::Dark);
    assert_eq!(settings.currency, "USD");
}

#[test]
fn toggle_favorite_adds_and_removes() {
    let mut settings = Settings::default();
    assert!(settings.toggle_favorite(CoinId::Solana));
    assert!(settings.is_favorite(CoinId::Solana));
    assert!(!settings.toggle_favorite(CoinId::Solana));
    assert!(!settings.is_favorite(CoinId::Solana));
}

#[test]
fn read_state_tracks_messages() {
    let inbox = ["msg-1", "msg-2", "msg-3"];
    let mut state = ReadState::default();
    assert_eq!(state.unread_count(inbox), 3);

    assert!(state.mark_read("msg-2"));
    assert!(!state.mark_read("msg-2"));
    assert!(state.is_read("msg-2"));
    assert_eq!(state.unread_count(inbox), 2);

    state.mark_all_read(inbox);
    assert_eq!(state.unread_count(inbox), 0);

    assert!(state.mark_unread("msg-1"));
    assert!(!state.mark_unread("msg-1"));
    assert_eq!(state.unread_count(inbox), 1);
}
