use anyhow::Context;
use serde_json::Value;
use std::time::Duration;

use crate::error::MonitorError;
use crate::monitor::Monitor;

pub const DEFAULT_BASE_URL: &str = "https://api.uptimerobot.com";

/// Options for a `getMonitors` call.
#[derive(Debug, Clone, Default)]
pub struct GetMonitors {
    /// Restrict the result to these monitor ids; empty means all.
    pub monitors: Vec<String>,
    pub custom_uptime_ratio_periods: Vec<u32>,
    pub logs: bool,
    pub alert_contacts: bool,
}

pub struct UptimeRobot {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl UptimeRobot {
    pub fn new(api_key: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("uptimerobot/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub async fn get_monitors(&self, options: &GetMonitors) -> anyhow::Result<Vec<Monitor>> {
        let mut query: Vec<(&str, String)> = vec![
            ("apiKey", self.api_key.clone()),
            ("format", "json".to_string()),
            ("noJsonCallback", "1".to_string()),
        ];
        if !options.monitors.is_empty() {
            query.push(("monitors", options.monitors.join("-")));
        }
        if !options.custom_uptime_ratio_periods.is_empty() {
            let periods: Vec<String> = options
                .custom_uptime_ratio_periods
                .iter()
                .map(|p| p.to_string())
                .collect();
            query.push(("customUptimeRatio", periods.join("-")));
        }
        if options.logs {
            query.push(("logs", "1".to_string()));
        }
        if options.alert_contacts {
            query.push(("alertContacts", "1".to_string()));
            query.push(("showMonitorAlertContacts", "1".to_string()));
        }

        let url = format!("{}/getMonitors", self.base_url);
        tracing::debug!("Requesting {}", url);
        let res = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .context("Failed to reach the monitoring API")?;

        let status = res.status();
        if !status.is_success() {
            anyhow::bail!("Monitoring API returned HTTP {}", status);
        }

        let body: Value = res
            .json()
            .await
            .context("Failed to decode getMonitors response")?;
        let monitors = parse_monitors(&body, &options.custom_uptime_ratio_periods)?;
        tracing::info!("Fetched {} monitor(s)", monitors.len());
        Ok(monitors)
    }
}

/// Unpacks a `getMonitors` response body.
pub fn parse_monitors(body: &Value, periods: &[u32]) -> anyhow::Result<Vec<Monitor>> {
    match body.get("stat").and_then(Value::as_str) {
        Some("ok") => {}
        Some("fail") => {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("no message");
            anyhow::bail!("Monitoring API refused the request: {}", message);
        }
        _ => anyhow::bail!("Unexpected getMonitors response: {}", body),
    }

    let entries: &[Value] = match body.pointer("/monitors/monitor") {
        Some(Value::Array(entries)) => entries.as_slice(),
        None | Some(Value::Null) => &[],
        Some(other) => anyhow::bail!("Unexpected monitor list: {}", other),
    };

    entries
        .iter()
        .map(|entry| -> anyhow::Result<Monitor> {
            let record = entry
                .as_object()
                .ok_or_else(|| MonitorError::format("monitor", entry.to_string()))?;
            let monitor = Monitor::from_raw(record, periods).with_context(|| {
                format!(
                    "Failed to parse monitor {}",
                    record.get("id").unwrap_or(&Value::Null)
                )
            })?;
            Ok(monitor)
        })
        .collect()
}
