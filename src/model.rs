use serde::Serialize;

use crate::error::{MonitorError, Result};

// `from_code` and `code` convert to and from the service's numeric wire codes; `as_str` is the
// display text.

fn unknown(table: &'static str, code: i64) -> MonitorError {
    MonitorError::KeyLookup {
        table,
        code: Some(code),
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MonitorType {
    Http,
    Keyword,
    Ping,
    Port,
}

impl MonitorType {
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(MonitorType::Http),
            2 => Ok(MonitorType::Keyword),
            3 => Ok(MonitorType::Ping),
            4 => Ok(MonitorType::Port),
            _ => Err(unknown("monitor type", code)),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            MonitorType::Http => 1,
            MonitorType::Keyword => 2,
            MonitorType::Ping => 3,
            MonitorType::Port => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MonitorType::Http => "http(s)",
            MonitorType::Keyword => "keyword",
            MonitorType::Ping => "ping",
            MonitorType::Port => "port",
        }
    }
}

/// Protocol checked by port monitors.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MonitorSubtype {
    Http,
    Https,
    Ftp,
    Smtp,
    Pop3,
    Imap,
    Custom,
}

impl MonitorSubtype {
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(MonitorSubtype::Http),
            2 => Ok(MonitorSubtype::Https),
            3 => Ok(MonitorSubtype::Ftp),
            4 => Ok(MonitorSubtype::Smtp),
            5 => Ok(MonitorSubtype::Pop3),
            6 => Ok(MonitorSubtype::Imap),
            99 => Ok(MonitorSubtype::Custom),
            _ => Err(unknown("monitor subtype", code)),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            MonitorSubtype::Http => 1,
            MonitorSubtype::Https => 2,
            MonitorSubtype::Ftp => 3,
            MonitorSubtype::Smtp => 4,
            MonitorSubtype::Pop3 => 5,
            MonitorSubtype::Imap => 6,
            MonitorSubtype::Custom => 99,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MonitorSubtype::Http => "http",
            MonitorSubtype::Https => "https",
            MonitorSubtype::Ftp => "ftp",
            MonitorSubtype::Smtp => "smtp",
            MonitorSubtype::Pop3 => "pop3",
            MonitorSubtype::Imap => "imap",
            MonitorSubtype::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum KeywordType {
    Exists,
    NotExists,
}

impl KeywordType {
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(KeywordType::Exists),
            2 => Ok(KeywordType::NotExists),
            _ => Err(unknown("keyword type", code)),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            KeywordType::Exists => 1,
            KeywordType::NotExists => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeywordType::Exists => "exists",
            KeywordType::NotExists => "not exists",
        }
    }
}

/// Monitor state. The codes are the service's own and are not contiguous.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MonitorStatus {
    Paused,
    NotCheckedYet,
    Up,
    SeemsDown,
    Down,
}

impl MonitorStatus {
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(MonitorStatus::Paused),
            1 => Ok(MonitorStatus::NotCheckedYet),
            2 => Ok(MonitorStatus::Up),
            8 => Ok(MonitorStatus::SeemsDown),
            9 => Ok(MonitorStatus::Down),
            _ => Err(unknown("monitor status", code)),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            MonitorStatus::Paused => 0,
            MonitorStatus::NotCheckedYet => 1,
            MonitorStatus::Up => 2,
            MonitorStatus::SeemsDown => 8,
            MonitorStatus::Down => 9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MonitorStatus::Paused => "paused",
            MonitorStatus::NotCheckedYet => "not checked yet",
            MonitorStatus::Up => "up",
            MonitorStatus::SeemsDown => "seems down",
            MonitorStatus::Down => "down",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertContactType {
    Sms,
    Email,
    TwitterDm,
    Boxcar,
    WebHook,
    Pushbullet,
    Zapier,
    Pushover,
    HipChat,
    Slack,
}

impl AlertContactType {
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(AlertContactType::Sms),
            2 => Ok(AlertContactType::Email),
            3 => Ok(AlertContactType::TwitterDm),
            4 => Ok(AlertContactType::Boxcar),
            5 => Ok(AlertContactType::WebHook),
            6 => Ok(AlertContactType::Pushbullet),
            7 => Ok(AlertContactType::Zapier),
            9 => Ok(AlertContactType::Pushover),
            10 => Ok(AlertContactType::HipChat),
            11 => Ok(AlertContactType::Slack),
            _ => Err(unknown("alert contact type", code)),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            AlertContactType::Sms => 1,
            AlertContactType::Email => 2,
            AlertContactType::TwitterDm => 3,
            AlertContactType::Boxcar => 4,
            AlertContactType::WebHook => 5,
            AlertContactType::Pushbullet => 6,
            AlertContactType::Zapier => 7,
            AlertContactType::Pushover => 9,
            AlertContactType::HipChat => 10,
            AlertContactType::Slack => 11,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlertContactType::Sms => "sms",
            AlertContactType::Email => "e-mail",
            AlertContactType::TwitterDm => "twitter dm",
            AlertContactType::Boxcar => "boxcar",
            AlertContactType::WebHook => "web-hook",
            AlertContactType::Pushbullet => "pushbullet",
            AlertContactType::Zapier => "zapier",
            AlertContactType::Pushover => "pushover",
            AlertContactType::HipChat => "hipchat",
            AlertContactType::Slack => "slack",
        }
    }
}

/// Kind of state change recorded in a monitor's log.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LogType {
    Down,
    Up,
    Started,
    Paused,
}

impl LogType {
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(LogType::Down),
            2 => Ok(LogType::Up),
            98 => Ok(LogType::Started),
            99 => Ok(LogType::Paused),
            _ => Err(unknown("log type", code)),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            LogType::Down => 1,
            LogType::Up => 2,
            LogType::Started => 98,
            LogType::Paused => 99,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogType::Down => "down",
            LogType::Up => "up",
            LogType::Started => "started",
            LogType::Paused => "paused",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_strings_cover_every_code() {
        let names: Vec<_> = (1..=4)
            .map(|code| MonitorType::from_code(code).map(MonitorType::as_str))
            .collect();
        assert_eq!(
            names,
            vec![Ok("http(s)"), Ok("keyword"), Ok("ping"), Ok("port")]
        );
        for code in 1..=4 {
            assert_eq!(MonitorType::from_code(code).map(MonitorType::code), Ok(code));
        }
    }

    #[test]
    fn unknown_type_is_a_lookup_error() {
        for code in [-1, 0, 5, 99] {
            assert_eq!(
                MonitorType::from_code(code),
                Err(MonitorError::KeyLookup {
                    table: "monitor type",
                    code: Some(code)
                })
            );
        }
    }

    #[test]
    fn status_keeps_external_codes() {
        assert_eq!(MonitorStatus::from_code(0), Ok(MonitorStatus::Paused));
        assert_eq!(MonitorStatus::from_code(8), Ok(MonitorStatus::SeemsDown));
        assert_eq!(MonitorStatus::from_code(9).map(MonitorStatus::as_str), Ok("down"));
        assert_eq!(MonitorStatus::Down.code(), 9);
        assert!(MonitorStatus::from_code(3).is_err());
        assert!(MonitorStatus::from_code(7).is_err());
    }

    #[test]
    fn subtype_custom_is_ninety_nine() {
        assert_eq!(MonitorSubtype::from_code(99), Ok(MonitorSubtype::Custom));
        assert_eq!(MonitorSubtype::Custom.code(), 99);
        assert!(MonitorSubtype::from_code(7).is_err());
    }

    #[test]
    fn contact_and_log_tables() {
        assert_eq!(AlertContactType::from_code(2).map(AlertContactType::as_str), Ok("e-mail"));
        assert!(AlertContactType::from_code(8).is_err());
        assert_eq!(LogType::from_code(98), Ok(LogType::Started));
        assert_eq!(LogType::Paused.code(), 99);
        assert_eq!(KeywordType::from_code(2).map(KeywordType::as_str), Ok("not exists"));
    }
}
