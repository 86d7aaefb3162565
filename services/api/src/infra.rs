use lendscore::error::AppError;
use lendscore::scoring::{ApplicationInput, RuleSet};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads an application payload from a JSON file for the `score` subcommand.
pub(crate) fn load_application(path: &Path) -> Result<ApplicationInput, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{}: {err}", path.display()),
        ))
    })
}

/// Clap value parser for `--ruleset`.
pub(crate) fn parse_ruleset(value: &str) -> Result<RuleSet, String> {
    RuleSet::parse(value)
        .ok_or_else(|| format!("'{value}' is not a known rule set (champion-v1 or champion-v2)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_rulesets() {
        assert_eq!(parse_ruleset("champion-v1"), Ok(RuleSet::ChampionV1));
        assert_eq!(parse_ruleset("V2"), Ok(RuleSet::ChampionV2));
        assert!(parse_ruleset("challenger").is_err());
    }
}
