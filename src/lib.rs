//! Renders conference schedule data into the HTML fragment used by the
//! `web-event-schedule` widget.

pub mod config;
pub mod core;
pub mod shared;

pub use crate::core::markup::{build, MarkupBuilder};
pub use crate::core::model::{Abstract, Author, AuthorsCollection, Day, Session, Speakers};
