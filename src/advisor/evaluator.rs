use chrono::Utc;
use tracing::debug;

use crate::advisor::activity::extract_activity;
use crate::advisor::rules::{Assessment, RULES, SUPPLEMENTARY_RULES};
use crate::advisor::verdict::{CurrentConditions, FeasibilityTier, FeasibilityVerdict};

pub const FAVORABLE_REASON: &str = "Weather conditions are generally favorable";

/// Evaluate whether the activity named in `question` suits the current
/// conditions at `location`.
///
/// Returns `None` for a blank question. Otherwise the tier rules run in
/// order, the tier defaults to `Recommended` when no rule set one, and the
/// humidity/precipitation reminders are appended last.
pub fn evaluate(
    question: &str,
    current: &CurrentConditions,
    location: &str,
) -> Option<FeasibilityVerdict> {
    if question.trim().is_empty() {
        return None;
    }

    let activity = extract_activity(question);
    let mut assessment = Assessment::new(activity);

    for (name, rule) in RULES {
        if let Some(effect) = rule(current, activity) {
            debug!("Rule '{}' produced {:?}", name, effect);
            assessment.apply(effect);
        }
    }

    let tier = match assessment.tier {
        Some(tier) => tier,
        None => {
            assessment.reasons.push(FAVORABLE_REASON.to_string());
            FeasibilityTier::Recommended
        }
    };

    for (name, reminder) in SUPPLEMENTARY_RULES {
        if let Some(reason) = reminder(current) {
            debug!("Reminder '{}' added", name);
            assessment.reasons.push(reason);
        }
    }

    Some(FeasibilityVerdict {
        activity: assessment.activity,
        tier,
        recommendation: recommendation_text(tier, activity, location),
        reasons: assessment.reasons,
        location: location.to_string(),
        evaluated_at: Utc::now(),
        conditions: current.clone(),
    })
}

pub fn recommendation_text(tier: FeasibilityTier, activity: &str, location: &str) -> String {
    match tier {
        FeasibilityTier::Recommended => {
            format!("Great time for {} in {}! Conditions look good.", activity, location)
        }
        FeasibilityTier::UseCaution => format!(
            "You can proceed with {} in {}, but take precautions.",
            activity, location
        ),
        FeasibilityTier::NotRecommended => format!(
            "Conditions are not ideal for {} in {} right now. Consider indoor alternatives.",
            activity, location
        ),
    }
}
