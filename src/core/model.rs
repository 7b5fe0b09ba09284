use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

use crate::shared::utils::date::end_time;

pub type AuthorsCollection = BTreeMap<String, Author>;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub title: String,
    pub date: DateTime<Utc>,
    /// Length of the day's programme in minutes.
    pub duration: i64,
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub video_id: Option<String>,
}

impl Day {
    pub fn end_time(&self) -> DateTime<Utc> {
        end_time(self.date, self.duration)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    #[serde(deserialize_with = "non_empty_speakers")]
    pub speaker: Speakers,
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default, rename = "abstract")]
    pub abstract_: Option<Abstract>,
}

/// A session's `speaker` field: either one author id or a list of them.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Speakers {
    One(String),
    Many(Vec<String>),
}

impl Speakers {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Speakers::One(id) => vec![id.clone()],
            Speakers::Many(ids) => ids.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Speakers::One(id) => id.is_empty(),
            Speakers::Many(ids) => ids.is_empty(),
        }
    }
}

// Every session row needs at least one author to render.
fn non_empty_speakers<'de, D>(deserializer: D) -> Result<Speakers, D::Error>
where
    D: Deserializer<'de>,
{
    let speakers = Speakers::deserialize(deserializer)?;
    if speakers.is_empty() {
        return Err(serde::de::Error::custom("speaker must name at least one author"));
    }
    Ok(speakers)
}

/// A session's `abstract` field: a single paragraph or several.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Abstract {
    Paragraph(String),
    Paragraphs(Vec<String>),
}

impl Abstract {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Abstract::Paragraph(p) if p.is_empty() => vec![],
            Abstract::Paragraph(p) => vec![p.clone()],
            Abstract::Paragraphs(ps) => ps.clone(),
        }
    }
}

impl Session {
    pub fn authors(&self) -> Vec<String> {
        self.speaker.to_vec()
    }

    pub fn paragraphs(&self) -> Vec<String> {
        self.abstract_
            .as_ref()
            .map(Abstract::to_vec)
            .unwrap_or_default()
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}
