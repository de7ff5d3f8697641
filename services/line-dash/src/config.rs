// services/line-dash/src/config.rs
//
// Layered configuration: optional YAML file, then LINE_DASH__* env vars

use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use linekit::config::{EndpointConfig, ObservabilityConfig, TrackingConfig};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineDashConfig {
    pub endpoint: EndpointConfig,
    pub tracking: TrackingConfig,
    pub dashboard: DashboardConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// 0 disables periodic refresh; filters and `r` still re-fetch.
    pub refresh_secs: u64,
    pub default_shift: String,
    pub total_drives: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_secs: 0,
            default_shift: "Shift A".to_string(),
            total_drives: 32,
        }
    }
}

pub fn load_config(path: &str) -> Result<LineDashConfig> {
    let config = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix("LINE_DASH").separator("__"))
        .build()?;

    let cfg: LineDashConfig = config.try_deserialize()?;
    cfg.tracking.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let cfg = load_config("does/not/exist/line-dash.yaml").unwrap();
        assert_eq!(cfg.dashboard.default_shift, "Shift A");
        assert_eq!(cfg.tracking.lines.len(), 3);
        assert_eq!(cfg.endpoint.request_timeout_ms, 10_000);
    }

    #[test]
    fn test_yaml_overrides() {
        let path = std::env::temp_dir().join(format!("line-dash-test-{}.yaml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "endpoint:\n  base_url: http://localhost:4000/influx/data\ntracking:\n  hour_window:\n    first: 14\n    last: 22\ndashboard:\n  refresh_secs: 30\n"
        )
        .unwrap();

        let cfg = load_config(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(cfg.endpoint.base_url, "http://localhost:4000/influx/data");
        assert_eq!(cfg.tracking.hour_window.first, 14);
        assert_eq!(cfg.tracking.bucket_prefix, "HRP");
        assert_eq!(cfg.dashboard.refresh_secs, 30);
        assert_eq!(cfg.dashboard.total_drives, 32);
    }

    #[test]
    fn test_reversed_hour_window_is_rejected() {
        let path = std::env::temp_dir().join(format!("line-dash-window-{}.yaml", std::process::id()));
        std::fs::write(&path, "tracking:\n  hour_window:\n    first: 14\n    last: 6\n").unwrap();

        let result = load_config(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("hour window"));
    }
}
