//! HTML rendering with minijinja; templates are compiled into the binary.

use adrlit_common::{AdrLink, AdrlitError, AnalysisReport, Result};
use minijinja::Environment;
use serde::Serialize;

/// Navigation HTML shared across all pages
pub const NAV_HTML: &str = include_str!("../templates/nav.html");
const LAYOUT_HTML: &str = include_str!("../templates/layout.html");
const DASHBOARD_HTML: &str = include_str!("../templates/dashboard.html");

pub const NOTICE_NO_INPUT: &str = "Please upload a file or paste text to begin analysis.";

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> std::result::Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("nav.html", NAV_HTML)?;
        env.add_template("layout.html", LAYOUT_HTML)?;
        env.add_template("dashboard.html", DASHBOARD_HTML)?;
        Ok(Self { env })
    }

    pub fn dashboard(&self, view: &DashboardView) -> Result<String> {
        self.env
            .get_template("dashboard.html")
            .and_then(|tmpl| tmpl.render(view))
            .map_err(|e| AdrlitError::Other(anyhow::anyhow!("rendering dashboard: {e}")))
    }
}

// ── View models ──────────────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize)]
pub struct DashboardView {
    pub max_upload_mb: usize,
    /// Pasted text echoed back into the textarea
    pub text: String,
    pub humanize: bool,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub result: Option<ResultView>,
}

impl DashboardView {
    pub fn new(max_upload_bytes: usize) -> Self {
        Self {
            max_upload_mb: max_upload_bytes.div_ceil(1024 * 1024),
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub label: &'static str,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ResultView {
    pub id: String,
    pub title: String,
    pub source: String,
    pub fingerprint: String,
    pub study_type: String,
    pub aoi_molecule: String,
    pub total_adrs: usize,
    pub authors: String,
    pub molecules: String,
    pub adrs: Vec<AdrLink>,
    pub sections: Vec<SectionView>,
    pub medical_assessment: String,
    pub humanized: bool,
    pub has_csv: bool,
}

impl From<&AnalysisReport> for ResultView {
    fn from(report: &AnalysisReport) -> Self {
        let insights = &report.insights;
        let authors = if insights.authors.is_empty() {
            "Not detected".to_string()
        } else {
            insights.authors.join(", ")
        };
        let molecules = if insights.molecules.is_empty() {
            "No molecules detected".to_string()
        } else {
            insights.molecules.join(", ")
        };

        Self {
            id: report.id.to_string(),
            title: insights.title.clone(),
            source: report.source.label(),
            fingerprint: report.fingerprint.chars().take(12).collect(),
            study_type: insights.study_type.clone(),
            aoi_molecule: insights.aoi_molecule.clone(),
            total_adrs: insights.total_adrs(),
            authors,
            molecules,
            adrs: insights.adrs_reported.clone(),
            sections: insights
                .structured_summary
                .non_empty()
                .into_iter()
                .map(|(label, text)| SectionView { label, text: text.to_string() })
                .collect(),
            medical_assessment: insights.medical_assessment.clone(),
            humanized: report.humanized,
            has_csv: insights.has_adrs(),
        }
    }
}
