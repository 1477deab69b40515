// src/prep_time.rs

//! Preparation time in `HH:MM:SS` form
//!
//! Recipes store their duration as wall-clock style text. `PrepTime` keeps
//! the value as whole seconds and converts at the edges: parsing form input,
//! reading and writing the `prep_time` column, and rendering listings.

use crate::error::{Error, Result};
use chrono::{NaiveTime, Timelike};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Serialize, Serializer};
use std::fmt;

/// Format used for every stored and displayed duration
pub const PREP_TIME_FORMAT: &str = "%H:%M:%S";

/// A preparation duration with one-second resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PrepTime(u32);

impl PrepTime {
    pub fn from_seconds(seconds: u32) -> Self {
        Self(seconds)
    }

    pub fn as_seconds(&self) -> u32 {
        self.0
    }

    /// Parse `HH:MM:SS` text
    pub fn parse(s: &str) -> Result<Self> {
        let time = NaiveTime::parse_from_str(s.trim(), PREP_TIME_FORMAT)
            .map_err(|e| Error::ParseError(format!("invalid preparation time '{}': {}", s, e)))?;
        Ok(Self(time.num_seconds_from_midnight()))
    }
}

impl fmt::Display for PrepTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl ToSql for PrepTime {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for PrepTime {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Self::parse(text).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl Serialize for PrepTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
