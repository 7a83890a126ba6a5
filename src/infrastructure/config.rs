use crate::application::chart_pipeline::PipelineConfig;
use crate::domain::time_range::{DEFAULT_MAX_SPAN_MS, MS_PER_DAY};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub range: RangeSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream PV API the HTTP client is built against.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RangeSettings {
    pub max_span_days: i64,
}

impl Default for RangeSettings {
    fn default() -> Self {
        Self {
            max_span_days: DEFAULT_MAX_SPAN_MS / MS_PER_DAY,
        }
    }
}

impl RangeSettings {
    pub fn max_span_ms(&self) -> i64 {
        self.max_span_days.saturating_mul(MS_PER_DAY)
    }
}

/// Load `config/app` (any format the config crate knows, optional) overlaid
/// with `PV_`-prefixed environment variables, e.g. `PV_UPSTREAM__BASE_URL`.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app").required(false))
        .add_source(
            config::Environment::with_prefix("PV")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.pipeline.validate()?;
    if app_config.range.max_span_days <= 0 {
        anyhow::bail!("range.max_span_days must be positive");
    }

    Ok(app_config)
}
