//! Caller-side analyzer state.
//!
//! The analyzer client makes no ordering promise between overlapping
//! requests, so the session tags every request with a token and only applies
//! the result of the most recent one.

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::error::{AnalysisError, InputError};
use crate::food::analysis::synergy::{normalize_ingredients, SynergyAnalysis, SynergyAnalyzer};
use crate::food::catalog::SynergyKind;

pub const MIN_INGREDIENTS: usize = 2;
pub const MAX_INGREDIENTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyzerState {
    pub analysis: Option<SynergyAnalysis>,
    pub error: Option<String>,
    pub loading: bool,
}

pub struct AnalyzerSession {
    analyzer: SynergyAnalyzer,
    latest: AtomicU64,
    state: Mutex<AnalyzerState>,
}

/// Checks the ingredient count a submission needs after blanks are dropped.
pub fn validate_ingredients<S: AsRef<str>>(ingredients: &[S]) -> Result<Vec<String>, InputError> {
    let ingredients = normalize_ingredients(ingredients);
    if ingredients.len() < MIN_INGREDIENTS {
        return Err(InputError::TooFewIngredients);
    }
    if ingredients.len() > MAX_INGREDIENTS {
        return Err(InputError::TooManyIngredients);
    }
    Ok(ingredients)
}

impl AnalyzerSession {
    /// A session that opens on the Turmeric + Black Pepper example.
    pub fn new(analyzer: SynergyAnalyzer) -> Self {
        let session = Self::empty(analyzer);
        session.state.lock().analysis = Some(SynergyAnalysis::golden_boost_example());
        session
    }

    pub fn empty(analyzer: SynergyAnalyzer) -> Self {
        Self {
            analyzer,
            latest: AtomicU64::new(0),
            state: Mutex::new(AnalyzerState::default()),
        }
    }

    pub fn snapshot(&self) -> AnalyzerState {
        self.state.lock().clone()
    }

    /// Marks a new request as the one whose result should be shown.
    pub fn begin(&self) -> RequestToken {
        let token = RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1);
        let mut state = self.state.lock();
        state.loading = true;
        state.error = None;
        token
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Applies a finished request. Results of superseded requests are
    /// dropped and `false` is returned.
    pub fn finish(&self, token: RequestToken, result: Result<SynergyAnalysis, AnalysisError>) -> bool {
        let mut state = self.state.lock();
        if !self.is_current(token) {
            debug!(token = token.0, "discarding stale analysis result");
            return false;
        }

        state.loading = false;
        match result {
            Ok(analysis) => {
                state.analysis = Some(analysis);
                state.error = None;
            }
            // The previous analysis stays visible next to the error.
            Err(e) => state.error = Some(e.to_string()),
        }
        true
    }

    /// Validates, sends and applies one analysis request.
    ///
    /// Returns whether the result was applied, i.e. no newer request was
    /// submitted while this one was in flight.
    pub async fn submit<S: AsRef<str>>(&self, ingredients: &[S]) -> Result<bool, InputError> {
        let ingredients = match validate_ingredients(ingredients) {
            Ok(ingredients) => ingredients,
            Err(e) => {
                self.state.lock().error = Some(e.to_string());
                return Err(e);
            }
        };

        let token = self.begin();
        let result = self.analyzer.analyze_synergy(ingredients.as_slice()).await;
        Ok(self.finish(token, result))
    }

    pub fn dismiss_error(&self) {
        self.state.lock().error = None;
    }

    pub fn clear(&self) {
        self.state.lock().analysis = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    Filled(usize),
    /// All slots were taken; the pick restarted the selection in slot A.
    Restarted,
}

/// The analyzer's three ingredient inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSlots {
    slots: [String; 3],
}

impl IngredientSlots {
    pub fn new(a: &str, b: &str, c: &str) -> Self {
        Self {
            slots: [a.to_string(), b.to_string(), c.to_string()],
        }
    }

    pub fn set(&mut self, index: usize, value: &str) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = value.to_string();
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// Puts `food` in the first empty slot. When every slot is taken the
    /// selection starts over with `food` alone.
    pub fn pick(&mut self, food: &str) -> PickOutcome {
        if let Some(index) = self.slots.iter().position(|s| s.trim().is_empty()) {
            self.slots[index] = food.to_string();
            return PickOutcome::Filled(index);
        }

        self.slots = [food.to_string(), String::new(), String::new()];
        PickOutcome::Restarted
    }

    /// The first two slots are required.
    pub fn is_ready(&self) -> bool {
        self.slots[..2].iter().all(|s| !s.trim().is_empty())
    }

    pub fn ingredients(&self) -> Vec<String> {
        normalize_ingredients(&self.slots)
    }

    pub fn kind(&self) -> SynergyKind {
        if self.slots[2].trim().is_empty() {
            SynergyKind::Duo
        } else {
            SynergyKind::Trio
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::providers::mock::{GatedProvider, MockProvider};
    use serde_json::json;
    use std::sync::Arc;

    fn reply_named(name: &str) -> String {
        json!({
            "score": 90, "magnitude": 88, "amplification": "3x", "type": "Kinetic",
            "synergyName": name, "summary": "s", "pros": ["p"], "cons": [],
            "scientificConsensus": "High", "mechanism": "m", "riskLevel": "None",
            "impactDomain": "Physical",
            "chartData": [
                { "name": "A Alone", "value": 3 },
                { "name": "B Alone", "value": 4 },
                { "name": "Synergy (All)", "value": 9 }
            ]
        })
        .to_string()
    }

    fn session_with(provider: Arc<dyn crate::providers::traits::GenerationProvider>) -> AnalyzerSession {
        AnalyzerSession::new(SynergyAnalyzer::new(provider))
    }

    #[tokio::test]
    async fn later_submission_wins_even_when_it_finishes_first() {
        let provider = Arc::new(GatedProvider::default());
        let release_a = provider.gate();
        let release_b = provider.gate();
        let session = session_with(provider);

        let a = vec!["Turmeric".to_string(), "Black Pepper".to_string()];
        let b = vec!["Spinach".to_string(), "Lemon".to_string()];

        let release = async {
            release_b.send(Ok(reply_named("Iron Unlock"))).unwrap();
            tokio::task::yield_now().await;
            release_a.send(Ok(reply_named("Golden Paste"))).unwrap();
        };

        let (applied_a, applied_b, _) = tokio::join!(
            session.submit(a.as_slice()),
            session.submit(b.as_slice()),
            release
        );

        assert_eq!(applied_a, Ok(false));
        assert_eq!(applied_b, Ok(true));
        let state = session.snapshot();
        assert_eq!(state.analysis.unwrap().synergy_name, "Iron Unlock");
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn stale_failure_does_not_surface() {
        let provider = Arc::new(GatedProvider::default());
        let release_a = provider.gate();
        let release_b = provider.gate();
        let session = session_with(provider);

        let release = async {
            release_b.send(Ok(reply_named("Fresh"))).unwrap();
            tokio::task::yield_now().await;
            release_a.send(Err(ProviderError::Network("reset".into()))).unwrap();
        };

        let _ = tokio::join!(
            session.submit(&["Zinc", "Quercetin"]),
            session.submit(&["Kale", "Avocado"]),
            release
        );

        let state = session.snapshot();
        assert!(state.error.is_none());
        assert_eq!(state.analysis.unwrap().synergy_name, "Fresh");
    }

    #[tokio::test]
    async fn failure_keeps_previous_analysis_and_shows_error() {
        let provider = Arc::new(MockProvider::replying(vec![Ok("{}".to_string())]));
        let session = session_with(provider);

        assert_eq!(session.submit(&["Tomato", "Olive Oil"]).await, Ok(true));

        let state = session.snapshot();
        assert_eq!(state.analysis.unwrap().synergy_name, "The Golden Boost");
        assert_eq!(state.error.as_deref(), Some("Analysis failed. Please try again."));

        session.dismiss_error();
        assert!(session.snapshot().error.is_none());
    }

    #[tokio::test]
    async fn too_few_ingredients_never_reach_the_service() {
        let provider = Arc::new(MockProvider::default());
        let session = session_with(provider.clone());

        let result = session.submit(&["Turmeric", "   ", ""]).await;

        assert_eq!(result, Err(InputError::TooFewIngredients));
        assert_eq!(provider.calls(), 0);
        assert_eq!(
            session.snapshot().error.as_deref(),
            Some("Please input at least two ingredients.")
        );
    }

    #[test]
    fn validation_bounds() {
        assert!(validate_ingredients(&["a", "b"]).is_ok());
        assert_eq!(validate_ingredients(&["a", " b "]).unwrap(), vec!["a", "b"]);
        assert_eq!(
            validate_ingredients(&["a", "b", "c", "d"]),
            Err(InputError::TooManyIngredients)
        );
    }

    #[test]
    fn tokens_advance() {
        let session = session_with(Arc::new(MockProvider::default()));
        let first = session.begin();
        assert!(session.is_current(first));
        let second = session.begin();
        assert!(!session.is_current(first));
        assert!(session.is_current(second));
        assert!(session.snapshot().loading);
    }

    #[test]
    fn picking_fills_slots_then_restarts() {
        let mut slots = IngredientSlots::default();
        assert_eq!(slots.pick("Spinach"), PickOutcome::Filled(0));
        assert_eq!(slots.pick("Lemon"), PickOutcome::Filled(1));
        assert!(slots.is_ready());
        assert_eq!(slots.kind(), SynergyKind::Duo);
        assert_eq!(slots.pick("Steak"), PickOutcome::Filled(2));
        assert_eq!(slots.kind(), SynergyKind::Trio);

        assert_eq!(slots.pick("Oats"), PickOutcome::Restarted);
        assert_eq!(slots.ingredients(), vec!["Oats"]);
        assert!(!slots.is_ready());
    }

    #[test]
    fn cleared_middle_slot_is_refilled_first() {
        let mut slots = IngredientSlots::new("Turmeric", "", "Olive Oil");
        assert!(!slots.is_ready());
        assert_eq!(slots.pick("Black Pepper"), PickOutcome::Filled(1));
        assert_eq!(slots.ingredients(), vec!["Turmeric", "Black Pepper", "Olive Oil"]);
    }
}
