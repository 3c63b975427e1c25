use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::advisor::{evaluate, CurrentConditions, FeasibilityVerdict, VerdictHistory};

#[derive(Clone)]
pub struct AdvisorService {
    history: Arc<Mutex<VerdictHistory>>,
    delay: Duration,
}

impl AdvisorService {
    /// `delay` is waited before each evaluation; it is purely cosmetic
    pub fn new(delay: Duration) -> Self {
        Self {
            history: Arc::new(Mutex::new(VerdictHistory::default())),
            delay,
        }
    }

    /// Evaluate a question and record the verdict, `None` for a blank question
    #[instrument(skip(self, current), fields(location = %location))]
    pub async fn advise(
        &self,
        question: &str,
        current: &CurrentConditions,
        location: &str,
    ) -> Option<FeasibilityVerdict> {
        if question.trim().is_empty() {
            debug!("Ignoring blank question");
            return None;
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let verdict = evaluate(question, current, location)?;
        info!(
            "Activity '{}' in {} assessed as {:?} ({} reasons)",
            verdict.activity,
            location,
            verdict.tier,
            verdict.reasons.len()
        );

        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(verdict.clone());

        Some(verdict)
    }

    pub fn history(&self) -> Vec<FeasibilityVerdict> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries()
    }
}
