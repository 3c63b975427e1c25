use crate::advisor::activity::{CYCLING, HIKING, RUNNING, WALKING};
use crate::advisor::verdict::{CurrentConditions, FeasibilityTier};

pub const HEAT_LIMIT_CELSIUS: f64 = 35.0;
pub const COLD_LIMIT_CELSIUS: f64 = 5.0;
pub const FAVORABLE_RANGE_CELSIUS: (f64, f64) = (15.0, 25.0);
pub const WIND_LIMIT_MPS: f64 = 10.0;
pub const MIN_VISIBILITY_METERS: f64 = 1_000.0;
/// Daylight hours, start inclusive and end exclusive
pub const DAYLIGHT_HOURS: (u32, u32) = (6, 18);
pub const HUMIDITY_LIMIT_PERCENT: u8 = 80;
pub const PRECIPITATION_LIMIT: f64 = 0.5;

const WIND_SENSITIVE: &[&str] = &[RUNNING, CYCLING, WALKING];
const DARKNESS_SENSITIVE: &[&str] = &[RUNNING, CYCLING, HIKING];

/// What a rule does to the assessment
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Add a reason, tier unchanged
    Note(String),
    /// Add a reason and raise the tier to at least the given one
    Escalate(FeasibilityTier, String),
    /// Add a reason and set the tier outright
    Force(FeasibilityTier, String),
}

/// Accumulator threaded through the rule list
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub activity: String,
    pub tier: Option<FeasibilityTier>,
    pub reasons: Vec<String>,
}

impl Assessment {
    pub fn new(activity: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            tier: None,
            reasons: Vec::new(),
        }
    }

    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Note(reason) => self.reasons.push(reason),
            Effect::Escalate(tier, reason) => {
                self.tier = Some(self.tier.map_or(tier, |current| current.max(tier)));
                self.reasons.push(reason);
            }
            Effect::Force(tier, reason) => {
                self.tier = Some(tier);
                self.reasons.push(reason);
            }
        }
    }
}

pub type Rule = fn(&CurrentConditions, &str) -> Option<Effect>;

/// Tier rules, evaluated in this order
pub const RULES: &[(&str, Rule)] = &[
    ("temperature", temperature_rule),
    ("condition", condition_rule),
    ("wind", wind_rule),
    ("visibility", visibility_rule),
    ("darkness", darkness_rule),
];

/// Reminders appended after the tier is settled
pub const SUPPLEMENTARY_RULES: &[(&str, fn(&CurrentConditions) -> Option<String>)] = &[
    ("humidity", humidity_reminder),
    ("precipitation", precipitation_reminder),
];

fn temperature_rule(current: &CurrentConditions, _activity: &str) -> Option<Effect> {
    let t = current.temperature;
    let (favorable_low, favorable_high) = FAVORABLE_RANGE_CELSIUS;

    if t > HEAT_LIMIT_CELSIUS {
        Some(Effect::Escalate(
            FeasibilityTier::NotRecommended,
            format!("High temperature ({:.1}°C) risks heat exhaustion", t),
        ))
    } else if t < COLD_LIMIT_CELSIUS {
        Some(Effect::Escalate(
            FeasibilityTier::UseCaution,
            format!("Low temperature ({:.1}°C) risks hypothermia", t),
        ))
    } else if (favorable_low..=favorable_high).contains(&t) {
        Some(Effect::Note(format!("Favorable temperature ({:.1}°C)", t)))
    } else {
        None
    }
}

fn condition_rule(current: &CurrentConditions, activity: &str) -> Option<Effect> {
    let condition = current.condition.as_str().to_lowercase();

    if condition.contains("rain") || condition.contains("storm") {
        Some(Effect::Escalate(
            FeasibilityTier::NotRecommended,
            format!("{} conditions are unsafe for {}", current.condition, activity),
        ))
    } else if condition.contains("clear") || condition.contains("cloud") {
        Some(Effect::Note(format!(
            "Clear/cloudy conditions favorable for {}",
            activity
        )))
    } else {
        None
    }
}

fn wind_rule(current: &CurrentConditions, activity: &str) -> Option<Effect> {
    if !WIND_SENSITIVE.contains(&activity) || current.wind_speed <= WIND_LIMIT_MPS {
        return None;
    }
    Some(Effect::Escalate(
        FeasibilityTier::UseCaution,
        format!(
            "Strong wind ({:.1} m/s) may make {} difficult",
            current.wind_speed, activity
        ),
    ))
}

fn visibility_rule(current: &CurrentConditions, _activity: &str) -> Option<Effect> {
    if current.visibility_meters >= MIN_VISIBILITY_METERS {
        return None;
    }
    Some(Effect::Force(
        FeasibilityTier::NotRecommended,
        format!(
            "Low visibility ({:.1} km) is dangerous",
            current.visibility_meters / 1000.0
        ),
    ))
}

fn darkness_rule(current: &CurrentConditions, activity: &str) -> Option<Effect> {
    use chrono::Timelike;

    if !DARKNESS_SENSITIVE.contains(&activity) {
        return None;
    }
    let hour = current.observed_at?.hour();
    let (dawn, dusk) = DAYLIGHT_HOURS;
    if (dawn..dusk).contains(&hour) {
        return None;
    }
    Some(Effect::Escalate(
        FeasibilityTier::UseCaution,
        format!("Limited visibility at night makes {} riskier", activity),
    ))
}

fn humidity_reminder(current: &CurrentConditions) -> Option<String> {
    (current.humidity > HUMIDITY_LIMIT_PERCENT)
        .then(|| format!("High humidity ({}%), stay hydrated", current.humidity))
}

fn precipitation_reminder(current: &CurrentConditions) -> Option<String> {
    (current.precipitation_probability > PRECIPITATION_LIMIT).then(|| {
        format!(
            "{:.0}% chance of precipitation, bring rain gear",
            current.precipitation_probability * 100.0
        )
    })
}
