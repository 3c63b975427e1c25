use serde::Serialize;
use std::collections::HashMap;

use crate::forecast::ForecastSample;

/// Samples sharing one calendar date, in their original order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBucket {
    pub date: String,
    pub samples: Vec<ForecastSample>,
}

/// Partition samples into per-date buckets.
///
/// Buckets appear in the order their date was first seen and each bucket
/// keeps the relative input order of its samples. The date key is the
/// literal date portion of the timestamp text, so no timezone shifting
/// happens here.
pub fn group_by_date(samples: &[ForecastSample]) -> Vec<DailyBucket> {
    let mut buckets: Vec<DailyBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for sample in samples {
        let date = sample.date_key();
        match index.get(date) {
            Some(&position) => buckets[position].samples.push(sample.clone()),
            None => {
                index.insert(date.to_string(), buckets.len());
                buckets.push(DailyBucket {
                    date: date.to_string(),
                    samples: vec![sample.clone()],
                });
            }
        }
    }

    buckets
}
