use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::narrative::SummaryConfig;

/// Resolved runtime settings, as reported by `supply-dash doctor`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorReport {
    pub version: String,
    pub seed: String,
    pub regions_source: String,
    pub regions: usize,
    pub output: String,
    pub summary_api_key_present: bool,
    pub summary_model: String,
    pub summary_endpoint: String,
    pub summary_timeout_secs: u64,
}

impl DoctorReport {
    pub fn collect(
        seed: Option<u64>,
        regions_source: Option<&Path>,
        regions: usize,
        output: Option<&Path>,
        summary: &SummaryConfig,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            seed: seed.map_or_else(|| "entropy".to_string(), |seed| seed.to_string()),
            regions_source: display_or(regions_source, "built-in"),
            regions,
            output: display_or(output, "stdout"),
            summary_api_key_present: summary.api_key.is_some(),
            summary_model: summary.model.clone(),
            summary_endpoint: summary.endpoint.clone(),
            summary_timeout_secs: summary.timeout.as_secs(),
        }
    }
}

fn display_or(path: Option<&Path>, fallback: &str) -> String {
    path.map_or_else(|| fallback.to_string(), |path| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::DoctorReport;
    use crate::narrative::SummaryConfig;

    #[test]
    fn defaults_name_their_sources() {
        let report = DoctorReport::collect(None, None, 14, None, &SummaryConfig::default());
        assert_eq!(report.seed, "entropy");
        assert_eq!(report.regions_source, "built-in");
        assert_eq!(report.output, "stdout");
        assert!(!report.summary_api_key_present);
    }

    #[test]
    fn never_reports_the_api_key_itself() {
        let summary = SummaryConfig {
            api_key: Some("secret-key".to_string()),
            ..SummaryConfig::default()
        };
        let output = Path::new("out/doctor.json");
        let report = DoctorReport::collect(Some(42), None, 14, Some(output), &summary);
        let json = serde_json::to_string(&report).expect("serialize report");
        assert!(report.summary_api_key_present);
        assert_eq!(report.seed, "42");
        assert_eq!(report.output, "out/doctor.json");
        assert!(!json.contains("secret-key"), "key leaked: {json}");
    }
}
