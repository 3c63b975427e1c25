use serde::Serialize;
use utoipa::ToSchema;

use crate::forecast::{ForecastSample, WeatherCondition};

/// Summary statistics for one day's samples. Values are not rounded.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyAggregate {
    pub average_temperature: f64,
    /// Minimum over every sample's `temp_min`
    pub min_temperature: f64,
    /// Maximum over every sample's `temp_max`
    pub max_temperature: f64,
    #[schema(value_type = String, example = "Clouds")]
    pub dominant_condition: WeatherCondition,
    pub average_pressure: f64,
    pub average_wind_speed: f64,
    pub sample_count: usize,
}

/// Compute the daily aggregate for a bucket, `None` if the bucket is empty
pub fn aggregate(bucket: &[ForecastSample]) -> Option<DailyAggregate> {
    if bucket.is_empty() {
        return None;
    }

    let count = bucket.len() as f64;
    let mean = |field: fn(&ForecastSample) -> f64| bucket.iter().map(field).sum::<f64>() / count;

    let min_temperature = bucket
        .iter()
        .map(|s| s.temp_min)
        .fold(f64::INFINITY, f64::min);
    let max_temperature = bucket
        .iter()
        .map(|s| s.temp_max)
        .fold(f64::NEG_INFINITY, f64::max);

    Some(DailyAggregate {
        average_temperature: mean(|s| s.temperature),
        min_temperature,
        max_temperature,
        dominant_condition: dominant_condition(bucket)?,
        average_pressure: mean(|s| s.pressure),
        average_wind_speed: mean(|s| s.wind_speed),
        sample_count: bucket.len(),
    })
}

/// Most frequent condition; on a tie the condition seen first wins
fn dominant_condition(bucket: &[ForecastSample]) -> Option<WeatherCondition> {
    // Insertion-ordered counts so ties resolve by first appearance
    let mut counts: Vec<(&WeatherCondition, usize)> = Vec::new();
    for sample in bucket {
        match counts.iter_mut().find(|(c, _)| *c == &sample.condition) {
            Some((_, n)) => *n += 1,
            None => counts.push((&sample.condition, 1)),
        }
    }

    let mut best: Option<(&WeatherCondition, usize)> = None;
    for (condition, n) in counts {
        match best {
            Some((_, best_n)) if n <= best_n => {}
            _ => best = Some((condition, n)),
        }
    }

    best.map(|(condition, _)| condition.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::test_support::{sample_at, sample_with_condition};

    #[test]
    fn test_aggregate_empty_bucket() {
        assert!(aggregate(&[]).is_none());
    }

    #[test]
    fn test_aggregate_statistics() {
        let mut a = sample_at("2024-06-15 00:00:00", 10.0);
        a.temp_min = 8.0;
        a.temp_max = 12.0;
        a.pressure = 1000.0;
        a.wind_speed = 2.0;
        let mut b = sample_at("2024-06-15 03:00:00", 20.0);
        b.temp_min = 19.0;
        b.temp_max = 25.0;
        b.pressure = 1010.0;
        b.wind_speed = 4.0;

        let agg = aggregate(&[a, b]).unwrap();
        assert_eq!(agg.average_temperature, 15.0);
        assert_eq!(agg.min_temperature, 8.0);
        assert_eq!(agg.max_temperature, 25.0);
        assert_eq!(agg.average_pressure, 1005.0);
        assert_eq!(agg.average_wind_speed, 3.0);
        assert_eq!(agg.sample_count, 2);
    }

    #[test]
    fn test_aggregate_uses_temp_min_max_not_temperature() {
        let mut s = sample_at("2024-06-15 00:00:00", 15.0);
        s.temp_min = 11.0;
        s.temp_max = 17.5;

        let agg = aggregate(&[s]).unwrap();
        assert_eq!(agg.min_temperature, 11.0);
        assert_eq!(agg.max_temperature, 17.5);
    }

    #[test]
    fn test_dominant_condition_majority() {
        let bucket = vec![
            sample_with_condition("2024-06-15 00:00:00", WeatherCondition::Clear),
            sample_with_condition("2024-06-15 03:00:00", WeatherCondition::Rain),
            sample_with_condition("2024-06-15 06:00:00", WeatherCondition::Rain),
        ];
        assert_eq!(aggregate(&bucket).unwrap().dominant_condition, WeatherCondition::Rain);
    }

    #[test]
    fn test_dominant_condition_tie_first_seen_wins() {
        let bucket = vec![
            sample_with_condition("2024-06-15 00:00:00", WeatherCondition::Clouds),
            sample_with_condition("2024-06-15 03:00:00", WeatherCondition::Rain),
            sample_with_condition("2024-06-15 06:00:00", WeatherCondition::Rain),
            sample_with_condition("2024-06-15 09:00:00", WeatherCondition::Clouds),
        ];
        assert_eq!(aggregate(&bucket).unwrap().dominant_condition, WeatherCondition::Clouds);

        let rain_first = vec![
            sample_with_condition("2024-06-15 00:00:00", WeatherCondition::Rain),
            sample_with_condition("2024-06-15 03:00:00", WeatherCondition::Clouds),
            sample_with_condition("2024-06-15 06:00:00", WeatherCondition::Clouds),
            sample_with_condition("2024-06-15 09:00:00", WeatherCondition::Rain),
        ];
        assert_eq!(aggregate(&rain_first).unwrap().dominant_condition, WeatherCondition::Rain);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let bucket = vec![
            sample_at("2024-06-15 00:00:00", 10.1),
            sample_at("2024-06-15 03:00:00", 13.7),
            sample_at("2024-06-15 06:00:00", 11.3),
        ];

        let first = aggregate(&bucket).unwrap();
        let second = aggregate(&bucket).unwrap();
        assert_eq!(first.average_temperature.to_bits(), second.average_temperature.to_bits());
        assert_eq!(first, second);
    }
}
