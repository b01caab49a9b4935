//! Mock weather synthesis for Shanghai.
//!
//! A report is a pure function of its seed: one [`Mulberry32`] instance is
//! created per report and its draws are consumed in a fixed order
//! (condition, temperature, humidity, wind).

use crate::advisory::advise;
use crate::rng::Mulberry32;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// City every report is issued for.
pub const CITY: &str = "Shanghai";

/// Calendar date format used on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Weather condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Overcast,
    /// Declared for clients but never selected by [`synthesize_with_seed`].
    Storm,
    Windy,
}

impl WeatherCondition {
    /// Conditions the synthesizer picks from, in draw-index order.
    pub const SELECTABLE: [WeatherCondition; 5] = [
        WeatherCondition::Sunny,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Overcast,
        WeatherCondition::Windy,
    ];

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Overcast => "overcast",
            WeatherCondition::Storm => "storm",
            WeatherCondition::Windy => "windy",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthesized weather report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Always [`CITY`].
    pub city: String,
    /// ISO 8601 calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub condition: WeatherCondition,
    /// Degrees Celsius, 10..=30.
    pub temperature_c: i32,
    /// Relative humidity percent, 40..=90.
    pub humidity_pct: i32,
    /// Wind speed in km/h, 5..=30.
    pub wind_kph: i32,
    pub advisory: String,
}

/// Seed for a calendar date: its UTC midnight in epoch milliseconds, wrapped
/// to 32 bits.
pub fn seed_for_date(date: NaiveDate) -> u32 {
    seed_for_instant(date.and_time(NaiveTime::MIN).and_utc())
}

/// Seed for an instant: its epoch milliseconds wrapped to 32 bits.
pub fn seed_for_instant(instant: DateTime<Utc>) -> u32 {
    instant.timestamp_millis() as u32
}

/// Draw `base + draw * span` and round half up.
fn draw_in_range(rng: &mut Mulberry32, base: f64, span: f64) -> i32 {
    (base + rng.next_f64() * span).round() as i32
}

/// Synthesize a report labelled `date` from `seed`.
pub fn synthesize_with_seed(date: String, seed: u32) -> WeatherReport {
    let mut rng = Mulberry32::new(seed);

    let choices = WeatherCondition::SELECTABLE;
    let index = (rng.next_f64() * choices.len() as f64).floor() as usize;
    let condition = choices[index];
    let temperature_c = draw_in_range(&mut rng, 10.0, 20.0);
    let humidity_pct = draw_in_range(&mut rng, 40.0, 50.0);
    let wind_kph = draw_in_range(&mut rng, 5.0, 25.0);

    WeatherReport {
        city: CITY.into(),
        date,
        condition,
        temperature_c,
        humidity_pct,
        wind_kph,
        advisory: advise(condition, temperature_c, humidity_pct, wind_kph),
    }
}

/// Synthesize the report for `date`, or for the UTC date of `now` when no
/// date is given.
pub fn synthesize_at(date: Option<NaiveDate>, now: DateTime<Utc>) -> WeatherReport {
    let (label, seed) = match date {
        Some(date) => (date.format(DATE_FORMAT).to_string(), seed_for_date(date)),
        None => (now.format(DATE_FORMAT).to_string(), seed_for_instant(now)),
    };
    tracing::debug!(date = %label, seed, "synthesizing weather");
    synthesize_with_seed(label, seed)
}

/// Synthesize the report for `date`, falling back to the current time.
pub fn synthesize(date: Option<NaiveDate>) -> WeatherReport {
    synthesize_at(date, Utc::now())
}

#[cfg(test)]
mod tests {
    use crate::report::{
        WeatherCondition, seed_for_date, seed_for_instant, synthesize, synthesize_at,
        synthesize_with_seed,
    };
    use chrono::{NaiveDate, TimeZone, Utc};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn date_seed_wraps_epoch_millis() {
        assert_eq!(seed_for_date(date("1970-01-01")), 0);
        // 1_717_200_000_000 mod 2^32
        assert_eq!(seed_for_date(date("2024-06-01")), 3_508_048_896);
        assert_eq!(seed_for_date(date("2024-01-01")), 3_260_150_784);
    }

    #[test]
    fn pre_epoch_seed_wraps_like_unsigned() {
        // -86_400_000 mod 2^32
        assert_eq!(seed_for_date(date("1969-12-31")), 4_208_567_296);
    }

    #[test]
    fn instant_seed_uses_millis() {
        let now = Utc.timestamp_millis_opt(1_717_200_000_123).unwrap();
        assert_eq!(seed_for_instant(now), 3_508_049_019);
    }

    #[test]
    fn golden_reports() {
        let report = synthesize(Some(date("2024-06-01")));
        assert_eq!(report.city, "Shanghai");
        assert_eq!(report.date, "2024-06-01");
        assert_eq!(report.condition, WeatherCondition::Sunny);
        assert_eq!(
            (report.temperature_c, report.humidity_pct, report.wind_kph),
            (25, 50, 14)
        );
        assert_eq!(report.advisory, "天气整体舒适");

        let report = synthesize(Some(date("2024-01-01")));
        assert_eq!(report.condition, WeatherCondition::Rainy);
        assert_eq!(
            (report.temperature_c, report.humidity_pct, report.wind_kph),
            (17, 59, 23)
        );
        assert_eq!(report.advisory, "建议携带雨具；风力较大，户外请注意安全");

        let report = synthesize(Some(date("2025-03-15")));
        assert_eq!(report.condition, WeatherCondition::Cloudy);
        assert_eq!(
            (report.temperature_c, report.humidity_pct, report.wind_kph),
            (27, 80, 20)
        );
        assert_eq!(
            report.advisory,
            "闷热感较强，适当降温；风力较大，户外请注意安全"
        );
    }

    #[test]
    fn same_date_same_report() {
        let a = synthesize(Some(date("2023-11-05")));
        let b = synthesize(Some(date("2023-11-05")));
        assert_eq!(a, b);
    }

    #[test]
    fn ranges_hold_for_many_seeds() {
        let seeds = (0..20_000u32)
            .map(|i| i.wrapping_mul(2_654_435_761))
            .chain([u32::MAX, u32::MAX - 1]);
        for seed in seeds {
            let report = synthesize_with_seed(String::new(), seed);
            assert!((10..=30).contains(&report.temperature_c), "{report:?}");
            assert!((40..=90).contains(&report.humidity_pct), "{report:?}");
            assert!((5..=30).contains(&report.wind_kph), "{report:?}");
            assert!(WeatherCondition::SELECTABLE.contains(&report.condition));
            assert_ne!(report.condition, WeatherCondition::Storm);
        }
    }

    #[test]
    fn missing_date_uses_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 15, 30, 0).unwrap();
        let report = synthesize_at(None, now);
        assert_eq!(report.date, "2024-06-01");
        assert_eq!(
            report,
            synthesize_with_seed("2024-06-01".into(), seed_for_instant(now))
        );
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = synthesize(Some(date("2024-06-01")));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["city"], "Shanghai");
        assert_eq!(value["condition"], "sunny");
        assert_eq!(value["temperatureC"], 25);
        assert_eq!(value["humidityPct"], 50);
        assert_eq!(value["windKph"], 14);
        assert_eq!(value["advisory"], "天气整体舒适");
    }

    #[test]
    fn condition_names() {
        assert_eq!(WeatherCondition::Storm.to_string(), "storm");
        assert_eq!(
            serde_json::to_string(&WeatherCondition::Overcast).unwrap(),
            "\"overcast\""
        );
    }
}
