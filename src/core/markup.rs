use minijinja::context;
use serde::Serialize;

use crate::config::templates::schedule::STANDARD;
use crate::core::default_day::{Clock, DefaultDaySelector, RealClock};
use crate::core::model::{AuthorsCollection, Day, Session};
use crate::core::slug::SlugRegistry;
use crate::core::template::generate;
use crate::shared::utils::date::to_iso_millis;

#[derive(Serialize, Debug)]
struct AuthorView {
    id: String,
    name: String,
    image: Option<String>,
}

#[derive(Serialize, Debug)]
struct SessionView {
    id: String,
    title: String,
    blurb: String,
    authors: Vec<AuthorView>,
    #[serde(rename = "abstract")]
    abstract_: Vec<String>,
}

#[derive(Serialize, Debug)]
struct DayView {
    title: String,
    datetime: String,
    duration: i64,
    is_default: bool,
    video_id: Option<String>,
    sessions: Vec<SessionView>,
}

/// Renders the schedule widget with the real clock and the standard template.
pub fn build(
    days: &[Day],
    authors: &AuthorsCollection,
    show_carousel: bool,
) -> anyhow::Result<String> {
    MarkupBuilder::new(RealClock).build(days, authors, show_carousel)
}

/// Slug assigned to every session, in render order, paired with its title.
pub fn session_slugs(days: &[Day]) -> Vec<(String, String)> {
    let mut registry = SlugRegistry::new();
    days.iter()
        .flat_map(|day| day.sessions.iter())
        .map(|session| {
            let id = registry.slug_for_title(&session.title);
            (id, session.title.clone())
        })
        .collect()
}

pub struct MarkupBuilder<C: Clock> {
    selector: DefaultDaySelector<C>,
    template: String,
}

impl<C: Clock> MarkupBuilder<C> {
    pub fn new(clock: C) -> Self {
        Self {
            selector: DefaultDaySelector::new(clock),
            template: STANDARD.to_string(),
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn build(
        &self,
        days: &[Day],
        authors: &AuthorsCollection,
        show_carousel: bool,
    ) -> anyhow::Result<String> {
        let default_day = self.selector.select(days);
        let mut registry = SlugRegistry::new();

        let day_views: Vec<DayView> = days
            .iter()
            .enumerate()
            .map(|(index, day)| DayView {
                title: day.title.clone(),
                datetime: to_iso_millis(day.date),
                duration: day.duration,
                is_default: index == default_day,
                video_id: day.video_id.clone(),
                sessions: day
                    .sessions
                    .iter()
                    .map(|session| session_view(session, authors, &mut registry))
                    .collect(),
            })
            .collect();

        tracing::info!(
            days = days.len(),
            sessions = registry.len(),
            show_carousel,
            default_day,
            "rendering event schedule"
        );

        generate(
            &self.template,
            context! {
                days => day_views,
                show_carousel => show_carousel,
            },
        )
    }
}

fn session_view(
    session: &Session,
    authors: &AuthorsCollection,
    registry: &mut SlugRegistry,
) -> SessionView {
    let id = registry.slug_for_title(&session.title);
    SessionView {
        id,
        title: session.title.clone(),
        blurb: session.blurb.clone(),
        authors: session
            .authors()
            .into_iter()
            .map(|author_id| author_view(author_id, authors))
            .collect(),
        abstract_: session.paragraphs(),
    }
}

fn author_view(id: String, authors: &AuthorsCollection) -> AuthorView {
    match authors.get(&id) {
        Some(author) => AuthorView {
            name: author.name.clone().unwrap_or_else(|| id.clone()),
            image: author.image.clone(),
            id,
        },
        None => {
            tracing::warn!(author = %id, "unknown author id, rendering id as name");
            AuthorView {
                name: id.clone(),
                image: None,
                id,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::default_day::{FixedClock, MockClock};
    use crate::core::model::{Abstract, Author, Speakers};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 12, 9, 12, 0, 0).unwrap()
    }

    fn session(title: &str, speaker: Speakers) -> Session {
        Session {
            speaker,
            title: title.to_string(),
            blurb: String::new(),
            abstract_: None,
        }
    }

    fn day(title: &str, date: DateTime<Utc>, sessions: Vec<Session>) -> Day {
        Day {
            title: title.to_string(),
            date,
            duration: 60,
            sessions,
            video_id: None,
        }
    }

    fn authors() -> AuthorsCollection {
        let mut authors = AuthorsCollection::new();
        authors.insert(
            "alice".to_string(),
            Author {
                name: Some("Alice Example".to_string()),
                image: Some("image/alice.jpg".to_string()),
            },
        );
        authors
    }

    fn render(days: &[Day], show_carousel: bool) -> String {
        MarkupBuilder::new(FixedClock(now()))
            .build(days, &authors(), show_carousel)
            .unwrap()
    }

    fn one(id: &str) -> Speakers {
        Speakers::One(id.to_string())
    }

    #[test]
    fn test_no_carousel_markup_when_disabled() {
        let days = vec![day("Day 1", now(), vec![session("Intro", one("alice"))])];
        let html = render(&days, false);
        assert!(!html.contains("w-event-carousel"));
        assert!(html.contains(r#"<web-tabs class="w-event-tabs unresolved" label="schedule">"#));
    }

    #[test]
    fn test_one_carousel_entry_per_day() {
        let mut days = vec![
            day("Day 1", now(), vec![]),
            day("Day 2", now() + Duration::days(1), vec![]),
            day("Day 3", now() + Duration::days(2), vec![]),
        ];
        days[1].video_id = Some("abc123".to_string());

        let html = render(&days, true);
        assert_eq!(html.matches(r#"class="w-event-carousel__day""#).count(), 3);
        assert!(html.contains(r#"<a data-index="2" class="w-event-carousel__day">"#));
        assert_eq!(
            html.matches(r#"<img src="https://img.youtube.com/vi/abc123/maxresdefault.jpg" />"#)
                .count(),
            1
        );
        assert!(html.contains(r#"<div class="w-event-carousel__description">Day 3</div>"#));
    }

    #[test]
    fn test_default_day_marker() {
        let mut mock_clock = MockClock::new();
        mock_clock.expect_now().returning(now);

        let days = vec![
            day("Day 1", now() - Duration::hours(2), vec![]),
            day("Day 2", now() + Duration::hours(1), vec![]),
        ];
        let html = MarkupBuilder::new(mock_clock)
            .build(&days, &AuthorsCollection::new(), false)
            .unwrap();

        assert_eq!(html.matches("w-tabs-default").count(), 1);
        assert!(html.contains(r#"<div data-label="Day 1" class="">"#));
        assert!(html.contains(r#"<div data-label="Day 2" class="w-tabs-default">"#));
    }

    #[test]
    fn test_day_header_time() {
        let date = Utc.with_ymd_and_hms(2020, 12, 9, 17, 0, 0).unwrap();
        let mut d = day("Day 1", date, vec![]);
        d.duration = 180;
        let html = render(&[d], false);
        assert!(html.contains(
            r#"<web-event-time class="unresolved" datetime="2020-12-09T17:00:00.000Z" duration="180"></web-event-time>"#
        ));
    }

    #[test]
    fn test_duplicate_titles_across_days() {
        let days = vec![
            day("Day 1", now(), vec![session("Intro", one("alice"))]),
            day(
                "Day 2",
                now() + Duration::days(1),
                vec![session("Intro", one("alice")), session("Intro", one("alice"))],
            ),
        ];
        let html = render(&days, false);
        for id in ["intro", "intro1", "intro2"] {
            assert!(html.contains(&format!(r#"data-session-id="{}""#, id)));
            assert!(html.contains(&format!(r##"href="#{}""##, id)));
        }
    }

    #[test]
    fn test_abstract_paragraph_counts() {
        let without = vec![day("Day 1", now(), vec![session("Talk", one("alice"))])];
        assert_eq!(render(&without, false).matches("<p>").count(), 0);

        let mut with_three = session("Talk", one("alice"));
        with_three.abstract_ = Some(Abstract::Paragraphs(vec![
            "First.".to_string(),
            "Second.".to_string(),
            "Third.".to_string(),
        ]));
        let html = render(&[day("Day 1", now(), vec![with_three])], false);
        assert_eq!(html.matches("<p>").count(), 3);
        assert!(html.contains("<p>Second.</p>"));
    }

    #[test]
    fn test_single_speaker_forms_render_identically() {
        let days = vec![day(
            "Day 1",
            now(),
            vec![
                session("A", one("alice")),
                session("B", Speakers::Many(vec!["alice".to_string()])),
            ],
        )];
        let html = render(&days, false);

        let start = r#"<div class="w-event-schedule__cell w-event-schedule__speaker">"#;
        let end = r#"<div class="w-event-schedule__cell w-event-schedule__session">"#;
        let blocks: Vec<&str> = html
            .split(start)
            .skip(1)
            .map(|rest| rest.split(end).next().unwrap_or_default())
            .collect();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], blocks[1]);
        assert!(blocks[0].contains("Alice Example"));
        assert!(blocks[0].contains(r#"class="w-author__image""#));
    }

    #[test]
    fn test_multiple_speakers_in_order() {
        let days = vec![day(
            "Day 1",
            now(),
            vec![session(
                "Panel",
                Speakers::Many(vec!["alice".to_string(), "bob".to_string()]),
            )],
        )];
        let html = render(&days, false);
        let alice = html.find("Alice Example").unwrap();
        let bob = html.find(">bob</a>").unwrap();
        assert!(alice < bob);
        assert_eq!(html.matches(r#"<div class="w-author">"#).count(), 2);
    }

    #[test]
    fn test_text_is_escaped() {
        let mut s = session("<Hack> & Co", one("alice"));
        s.blurb = "Bring \"snacks\"".to_string();
        let html = render(&[day("Day <1>", now(), vec![s])], false);

        assert!(html.contains("<span>&lt;Hack&gt; &amp; Co</span>"));
        assert!(html.contains("Bring &quot;snacks&quot;"));
        assert!(html.contains(r#"data-label="Day &lt;1&gt;""#));
        assert!(html.contains(r#"data-session-id="lesshackgreater-and-co""#));
    }

    #[test]
    fn test_empty_title_still_gets_id() {
        let html = render(&[day("Day 1", now(), vec![session("", one("alice"))])], false);
        assert!(html.contains(r#"data-session-id="1""#));
        assert!(html.contains("<span></span>"));
    }

    #[test]
    fn test_days_keep_input_order() {
        let days = vec![
            day("Zeta", now() + Duration::days(2), vec![]),
            day("Alpha", now() + Duration::days(1), vec![]),
        ];
        let html = render(&days, false);
        assert!(html.find(r#"data-label="Zeta""#) < html.find(r#"data-label="Alpha""#));
    }

    #[test]
    fn test_custom_template() -> anyhow::Result<()> {
        let days = vec![day("Day 1", now(), vec![session("Intro", one("alice"))])];
        let html = MarkupBuilder::new(FixedClock(now()))
            .with_template("{% for d in days %}{{ d.sessions[0].id }}{% endfor %}")
            .build(&days, &authors(), false)?;
        assert_eq!(html, "intro");
        Ok(())
    }

    #[test]
    fn test_session_slugs_match_render_order() {
        let days = vec![
            day("Day 1", now(), vec![session("Intro", one("alice"))]),
            day("Day 2", now(), vec![session("Intro", one("alice"))]),
        ];
        assert_eq!(
            session_slugs(&days),
            vec![
                ("intro".to_string(), "Intro".to_string()),
                ("intro1".to_string(), "Intro".to_string()),
            ]
        );
    }
}
