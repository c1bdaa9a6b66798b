use serde::Serialize;
use std::io::{self, Write};

use crate::error::Result;
use crate::model::AlertContactType;
use crate::raw::{self, RawRecord};

/// Notification destination attached to a monitor.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlertContact {
    pub id: String,
    #[serde(rename = "type")]
    pub contact_type: AlertContactType,
    pub value: String,
}

impl AlertContact {
    pub fn from_raw(data: &RawRecord) -> Result<Self> {
        Ok(Self {
            id: raw::text(data, "id")?,
            contact_type: AlertContactType::from_code(raw::int(data, "type")?)?,
            value: raw::text(data, "value")?,
        })
    }

    pub fn type_str(&self) -> &'static str {
        self.contact_type.as_str()
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "  {}: {} #{}", self.type_str(), self.value, self.id)
    }
}
