/// Activity label used when the question names no known activity
pub const DEFAULT_ACTIVITY: &str = "outdoor activity";

/// Keyword to activity label, checked in declaration order.
///
/// Inflected forms are listed where the stem is not a substring of them
/// ("cycling" does not contain "cycle").
const ACTIVITY_KEYWORDS: &[(&str, &str)] = &[
    ("run", "running"),
    ("jog", "running"),
    ("walk", "walking"),
    ("hike", "hiking"),
    ("hiking", "hiking"),
    ("cycle", "cycling"),
    ("cycling", "cycling"),
    ("bike", "cycling"),
    ("biking", "cycling"),
    ("swim", "swimming"),
    ("picnic", "picnic"),
    ("tennis", "tennis"),
    ("golf", "golf"),
    ("soccer", "soccer"),
    ("football", "football"),
    ("exercise", "exercise"),
    ("sports", "sports"),
    ("outdoor", "outdoor activities"),
];

pub const RUNNING: &str = "running";
pub const WALKING: &str = "walking";
pub const HIKING: &str = "hiking";
pub const CYCLING: &str = "cycling";

/// First matching keyword (case-insensitive substring) wins
pub fn extract_activity(question: &str) -> &'static str {
    let lowered = question.to_lowercase();
    ACTIVITY_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, activity)| *activity)
        .unwrap_or(DEFAULT_ACTIVITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_running_variants() {
        assert_eq!(extract_activity("Can I go for a run?"), "running");
        assert_eq!(extract_activity("Is it OK to go JOGGING"), "running");
    }

    #[test]
    fn test_extract_inflected_forms() {
        assert_eq!(extract_activity("Is it good for cycling?"), "cycling");
        assert_eq!(extract_activity("Biking to work today?"), "cycling");
        assert_eq!(extract_activity("Planning some hiking"), "hiking");
        assert_eq!(extract_activity("Good time for a walk?"), "walking");
        assert_eq!(extract_activity("swimming at the lake?"), "swimming");
    }

    #[test]
    fn test_extract_sports() {
        assert_eq!(extract_activity("tennis this afternoon?"), "tennis");
        assert_eq!(extract_activity("Can we play football"), "football");
        assert_eq!(extract_activity("any good for sports?"), "sports");
        assert_eq!(extract_activity("should I exercise outside"), "exercise");
    }

    #[test]
    fn test_first_keyword_in_table_order_wins() {
        // "walk" precedes "picnic" in the table regardless of position in the text
        assert_eq!(extract_activity("picnic and then a walk"), "walking");
    }

    #[test]
    fn test_default_activity() {
        assert_eq!(extract_activity("What should I wear?"), DEFAULT_ACTIVITY);
        assert_eq!(extract_activity("outdoor plans?"), "outdoor activities");
    }
}
