//! Advisory text derived from a synthesized report.
//!
//! Every rule is checked independently and all matching phrases are kept in
//! rule order.

use crate::report::WeatherCondition;

/// Rainy or overcast: bring rain gear.
pub const RAIN_GEAR: &str = "建议携带雨具";
/// Sunny and hot: sun protection and hydration.
pub const SUN_PROTECTION: &str = "注意防晒与补水";
/// Humid: stuffy, cool down.
pub const HUMIDITY: &str = "闷热感较强，适当降温";
/// Windy: take care outdoors.
pub const HIGH_WIND: &str = "风力较大，户外请注意安全";
/// Emitted alone when no rule matches.
pub const COMFORTABLE: &str = "天气整体舒适";
/// Full-width semicolon joining the phrases.
pub const SEPARATOR: &str = "；";

const HOT_TEMPERATURE_C: i32 = 26;
const HUMID_PCT: i32 = 80;
const WINDY_KPH: i32 = 20;

/// Build the advisory for the given weather attributes.
pub fn advise(
    condition: WeatherCondition,
    temperature_c: i32,
    humidity_pct: i32,
    wind_kph: i32,
) -> String {
    let mut tips = Vec::new();
    if matches!(condition, WeatherCondition::Rainy | WeatherCondition::Overcast) {
        tips.push(RAIN_GEAR);
    }
    if condition == WeatherCondition::Sunny && temperature_c >= HOT_TEMPERATURE_C {
        tips.push(SUN_PROTECTION);
    }
    if humidity_pct >= HUMID_PCT {
        tips.push(HUMIDITY);
    }
    if wind_kph >= WINDY_KPH {
        tips.push(HIGH_WIND);
    }
    if tips.is_empty() {
        tips.push(COMFORTABLE);
    }
    tips.join(SEPARATOR)
}
