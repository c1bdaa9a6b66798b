use crossterm::style::Color;
use serde::Serialize;
use std::io::{self, Write};

use crate::alert_contact::AlertContact;
use crate::error::{MonitorError, Result};
use crate::log::Log;
use crate::model::{KeywordType, MonitorStatus, MonitorSubtype, MonitorType};
use crate::raw::{self, RawRecord};
use crate::style::{paint, title_case, ColorMode};

/// One watched endpoint as reported by the service.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Monitor {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub monitor_type: MonitorType,
    pub subtype: Option<MonitorSubtype>,
    pub keyword_type: Option<KeywordType>,
    pub keyword: Option<String>,
    pub http_username: Option<String>,
    pub http_password: Option<String>,
    pub port: Option<u16>,
    pub status: MonitorStatus,
    pub all_time_uptime_ratio: f64,
    pub custom_uptime_ratio: Vec<f64>,
    /// Hours each entry of `custom_uptime_ratio` covers, paired by position.
    pub custom_uptime_ratio_periods: Vec<u32>,
    pub alert_contacts: Vec<AlertContact>,
    pub logs: Vec<Log>,
}

impl Monitor {
    pub fn from_raw(data: &RawRecord, custom_uptime_ratio_periods: &[u32]) -> Result<Self> {
        let alert_contacts = raw::records(data, "alertcontact")?
            .into_iter()
            .map(AlertContact::from_raw)
            .collect::<Result<Vec<_>>>()?;
        let logs = raw::records(data, "log")?
            .into_iter()
            .map(Log::from_raw)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id: raw::text(data, "id")?,
            name: raw::text(data, "friendlyname")?,
            url: raw::text(data, "url")?,
            monitor_type: MonitorType::from_code(raw::int(data, "type")?)?,
            subtype: raw::optional_code(data, "subtype")?
                .map(MonitorSubtype::from_code)
                .transpose()?,
            keyword_type: raw::optional_code(data, "keywordtype")?
                .map(KeywordType::from_code)
                .transpose()?,
            keyword: raw::optional_text(data, "keywordvalue")?,
            http_username: raw::optional_text(data, "httpusername")?,
            http_password: raw::optional_text(data, "httppassword")?,
            port: raw::optional_port(data, "port")?,
            status: MonitorStatus::from_code(raw::int(data, "status")?)?,
            all_time_uptime_ratio: raw::float(data, "alltimeuptimeratio")?,
            custom_uptime_ratio: raw::optional_ratios(data, "customuptimeratio")?,
            custom_uptime_ratio_periods: custom_uptime_ratio_periods.to_vec(),
            alert_contacts,
            logs,
        })
    }

    pub fn type_str(&self) -> &'static str {
        self.monitor_type.as_str()
    }

    pub fn subtype_str(&self) -> Option<&'static str> {
        self.subtype.map(MonitorSubtype::as_str)
    }

    /// Fails when the monitor has no keyword type; callers check `keyword_type` first.
    pub fn keyword_type_str(&self) -> Result<&'static str> {
        self.keyword_type
            .map(KeywordType::as_str)
            .ok_or(MonitorError::KeyLookup {
                table: "keyword type",
                code: None,
            })
    }

    pub fn status_str(&self) -> &'static str {
        self.status.as_str()
    }

    fn status_color(&self) -> Color {
        match self.status {
            MonitorStatus::Up => Color::Green,
            MonitorStatus::SeemsDown | MonitorStatus::Down => Color::Red,
            _ => Color::Yellow,
        }
    }

    /// (period, ratio) pairs; the longer side's leftovers are dropped.
    pub fn custom_uptime_ratios(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.custom_uptime_ratio_periods
            .iter()
            .copied()
            .zip(self.custom_uptime_ratio.iter().copied())
    }

    pub fn render<W: Write>(&self, out: &mut W, colors: ColorMode) -> io::Result<()> {
        let status = paint(&title_case(self.status_str()), self.status_color(), colors);
        writeln!(out, "{} [{}] #{}", self.name, status, self.id)?;

        match self.port {
            Some(port) => writeln!(out, "URL: {}:{}", self.url, port)?,
            None => writeln!(out, "URL: {}", self.url)?,
        }

        if let Some(username) = &self.http_username {
            writeln!(
                out,
                "User: {} ({})",
                username,
                self.http_password.as_deref().unwrap_or_default()
            )?;
        }

        writeln!(out, "Type: {}", self.type_str())?;

        if let Some(subtype) = self.subtype_str() {
            writeln!(out, "Subtype: {}", subtype)?;
        }

        writeln!(
            out,
            "All Time Uptime Ratio:         {:.2}%",
            self.all_time_uptime_ratio
        )?;

        for (period, ratio) in self.custom_uptime_ratios() {
            let label = format!(
                "Uptime Ratio over {} hour{}:",
                period,
                if period == 1 { "" } else { "s" }
            );
            writeln!(out, "{:<30} {:.2}%", label, ratio)?;
        }

        if let Some(keyword_type) = self.keyword_type {
            writeln!(
                out,
                "Keyword: {} ({})",
                self.keyword.as_deref().unwrap_or_default(),
                keyword_type.as_str()
            )?;
        }

        if !self.alert_contacts.is_empty() {
            writeln!(out)?;
            writeln!(out, "Alert contacts:")?;
            for contact in &self.alert_contacts {
                contact.render(out)?;
            }
        }

        if !self.logs.is_empty() {
            writeln!(out)?;
            writeln!(out, "Log:")?;
            for log in &self.logs {
                log.render(out, colors)?;
                writeln!(out)?;
            }
        }

        Ok(())
    }

    /// Renders to standard output. `Auto` is resolved against stdout here, once.
    pub fn dump(&self, colors: ColorMode) -> io::Result<()> {
        let colors = colors.resolve();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render(&mut out, colors)
    }
}
