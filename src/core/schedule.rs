use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use std::{fs, io};

use crate::config::{self, Config};
use crate::core::default_day::{FixedClock, RealClock};
use crate::core::markup::{session_slugs, MarkupBuilder};
use crate::core::model::{AuthorsCollection, Day};
use crate::shared::utils::date::parse_rfc3339_utc;
use crate::shared::utils::path::{contract_tilde, expand_tilde};

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Input file not found; please check if '{0}' exists.")]
    InputNotFound(String),

    #[error("Failed to read '{path}': {source}")]
    ReadInput {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse '{path}': {source}")]
    InvalidInput {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid --now value '{0}'; expected an RFC 3339 timestamp such as 2020-12-09T17:00:00Z.")]
    InvalidNow(String),
}

/// Loads schedule data described by a [`Config`] and renders it.
pub struct EventSchedule {
    config: Config,
    now: Option<DateTime<Utc>>,
}

impl EventSchedule {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::from_config(config::init()?))
    }

    pub fn from_config(config: Config) -> Self {
        Self { config, now: None }
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Pins the instant used to pick the default day.
    pub fn with_now(mut self, now: &str) -> anyhow::Result<Self> {
        let parsed =
            parse_rfc3339_utc(now).ok_or_else(|| ScheduleError::InvalidNow(now.to_string()))?;
        self.now = Some(parsed);
        Ok(self)
    }

    pub fn load_days(&self) -> anyhow::Result<Vec<Day>> {
        Ok(read_json(&self.config.source.schedule)?)
    }

    pub fn load_authors(&self) -> anyhow::Result<AuthorsCollection> {
        match &self.config.source.authors {
            Some(path) => Ok(read_json(path)?),
            None => Ok(AuthorsCollection::new()),
        }
    }

    pub fn render(&self) -> anyhow::Result<String> {
        let days = self.load_days()?;
        let authors = self.load_authors()?;
        let output = &self.config.output;

        match self.now {
            Some(now) => MarkupBuilder::new(FixedClock(now))
                .with_template(output.template.as_str())
                .build(&days, &authors, output.show_carousel),
            None => MarkupBuilder::new(RealClock)
                .with_template(output.template.as_str())
                .build(&days, &authors, output.show_carousel),
        }
    }

    pub fn slugs(&self) -> anyhow::Result<Vec<(String, String)>> {
        let days = self.load_days()?;
        Ok(session_slugs(&days))
    }
}

fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, ScheduleError> {
    let path_buf = expand_tilde(path);
    let shown = contract_tilde(&path_buf);

    let content = fs::read_to_string(&path_buf).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ScheduleError::InputNotFound(shown.clone()),
        _ => ScheduleError::ReadInput {
            path: shown.clone(),
            source,
        },
    })?;

    tracing::debug!(path = %shown, bytes = content.len(), "read schedule input");

    serde_json::from_str(&content).map_err(|source| ScheduleError::InvalidInput {
        path: shown,
        source,
    })
}
