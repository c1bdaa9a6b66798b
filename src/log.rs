use chrono::NaiveDateTime;
use crossterm::style::Color;
use serde::Serialize;
use std::io::{self, Write};

use crate::error::{MonitorError, Result};
use crate::model::LogType;
use crate::raw::{self, RawRecord};
use crate::style::{paint, title_case, ColorMode};

const API_DATETIME: &str = "%m/%d/%Y %H:%M:%S";
const DISPLAY_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// One state-change event from a monitor's history.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Log {
    #[serde(rename = "type")]
    pub log_type: LogType,
    pub datetime: NaiveDateTime,
}

impl Log {
    pub fn from_raw(data: &RawRecord) -> Result<Self> {
        let log_type = LogType::from_code(raw::int(data, "type")?)?;
        let stamp = raw::text(data, "datetime")?;
        let datetime = NaiveDateTime::parse_from_str(&stamp, API_DATETIME)
            .map_err(|_| MonitorError::format("datetime", stamp.as_str()))?;
        Ok(Self { log_type, datetime })
    }

    pub fn type_str(&self) -> &'static str {
        self.log_type.as_str()
    }

    fn color(&self) -> Color {
        match self.log_type {
            LogType::Up => Color::Green,
            LogType::Down => Color::Red,
            LogType::Started | LogType::Paused => Color::Yellow,
        }
    }

    pub fn render<W: Write>(&self, out: &mut W, colors: ColorMode) -> io::Result<()> {
        let kind = paint(&title_case(self.type_str()), self.color(), colors);
        writeln!(out, "Type: {}", kind)?;
        writeln!(out, "Time: {}", self.datetime.format(DISPLAY_DATETIME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn log(raw: serde_json::Value) -> Result<Log> {
        Log::from_raw(raw.as_object().unwrap())
    }

    #[test]
    fn parses_service_timestamp() {
        let entry = log(json!({ "type": "98", "datetime": "10/02/2015 01:22:49" })).unwrap();
        assert_eq!(entry.log_type, LogType::Started);

        let mut out = Vec::new();
        entry.render(&mut out, ColorMode::Never).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Type: Started\nTime: 2015-10-02 01:22:49\n"
        );
    }

    #[test]
    fn down_entries_are_red() {
        let entry = log(json!({ "type": 1, "datetime": "01/31/2016 23:00:00" })).unwrap();
        let mut out = Vec::new();
        entry.render(&mut out, ColorMode::Always).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(&format!("Type: {}\n", paint("Down", Color::Red, ColorMode::Always))));
    }

    #[test]
    fn malformed_timestamp_is_a_format_error() {
        assert_eq!(
            log(json!({ "type": "2", "datetime": "2015-10-02" })),
            Err(MonitorError::format("datetime", "2015-10-02"))
        );
    }

    #[test]
    fn unknown_log_type_is_a_lookup_error() {
        assert_eq!(
            log(json!({ "type": "3", "datetime": "10/02/2015 01:22:49" })),
            Err(MonitorError::KeyLookup {
                table: "log type",
                code: Some(3)
            })
        );
    }
}
