//! Shared application state for the web server.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

use adrlit_common::{AnalysisReport, DocumentSource};
use adrlit_config::AppConfig;
use adrlit_ner::InsightExtractor;
use lru::LruCache;
use uuid::Uuid;

use crate::analysis::analyze;
use crate::render::Templates;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: AppConfig,
    pub extractor: InsightExtractor,
    pub templates: Templates,
    /// Recent reports, kept so their export links stay valid
    reports: Mutex<LruCache<Uuid, AnalysisReport>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let extractor = InsightExtractor::new(&config.extraction)?;
        let capacity = NonZeroUsize::new(config.cache.capacity)
            .ok_or_else(|| anyhow::anyhow!("cache.capacity must be at least 1"))?;

        Ok(Self {
            extractor,
            templates: Templates::new()?,
            reports: Mutex::new(LruCache::new(capacity)),
            config,
        })
    }

    /// Analyse `text`, cache the report and return a copy of it.
    pub fn analyze(&self, text: &str, source: DocumentSource, humanize: bool) -> AnalysisReport {
        let report = analyze(&self.extractor, text, source, humanize, &mut rand::thread_rng());
        self.lock().put(report.id, report.clone());
        report
    }

    pub fn report(&self, id: Uuid) -> Option<AnalysisReport> {
        self.lock().get(&id).cloned()
    }

    pub fn cached_reports(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<Uuid, AnalysisReport>> {
        // Poisoning is ignored: entries are plain data
        self.reports.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub type SharedState = Arc<AppState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_capacity(capacity: usize) -> AppState {
        let mut config = AppConfig::default();
        config.cache.capacity = capacity;
        AppState::new(config).unwrap()
    }

    #[test]
    fn test_reports_are_cached() {
        let state = state_with_capacity(4);
        let report = state.analyze("Tramadol tremor", DocumentSource::Pasted, false);
        let cached = state.report(report.id).unwrap();
        assert_eq!(cached.insights, report.insights);
        assert_eq!(state.cached_reports(), 1);
    }

    #[test]
    fn test_oldest_report_evicted() {
        let state = state_with_capacity(2);
        let first = state.analyze("one", DocumentSource::Pasted, false);
        let second = state.analyze("two", DocumentSource::Pasted, false);
        let third = state.analyze("three", DocumentSource::Pasted, false);

        assert!(state.report(first.id).is_none());
        assert!(state.report(second.id).is_some());
        assert!(state.report(third.id).is_some());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut config = AppConfig::default();
        config.cache.capacity = 0;
        assert!(AppState::new(config).is_err());
    }
}
