//! Ordered line-shape rules.
//!
//! Rules are evaluated top to bottom and the first one whose predicate
//! accepts the line decides its fate. Later rules are looser than earlier
//! ones and rely on being shadowed by them, so the order is part of the
//! contract.

use regex::Regex;
use std::sync::LazyLock;

/// `[date] rest`
static BRACKET_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\]]*)\]\s*(.*)$").expect("Invalid bracket prefix regex")
});

/// `XX - rest`
static STATE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{2})\s*[-–]\s*(\S.*)$").expect("Invalid state prefix regex")
});

/// Spaced hyphen separating title from city
static SEGMENT_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[-–]\s+").expect("Invalid separator regex"));

/// Titles shorter than this (in characters) are treated as navigation noise.
pub const MIN_TITLE_CHARS: usize = 5;

/// What a single line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineShape {
    /// Bracket-prefixed event line; carries its own date
    DatedEvent {
        date: String,
        state: String,
        title: String,
        city: Option<String>,
        raw: String,
    },
    /// A line holding only a bracketed date
    DateHeader { date: String },
    /// Event line without a date of its own
    UndatedEvent {
        state: String,
        title: String,
        city: Option<String>,
        raw: String,
    },
    /// Matched an event shape but failed the title guard
    Rejected { rule: &'static str, title: String },
}

/// One entry in the ordered dispatch table.
pub struct LineRule {
    pub name: &'static str,
    apply: fn(&str) -> Option<LineShape>,
}

/// The dispatch table, in priority order.
pub static LINE_RULES: &[LineRule] = &[
    LineRule {
        name: "dated_with_city",
        apply: dated_with_city,
    },
    LineRule {
        name: "dated_without_city",
        apply: dated_without_city,
    },
    LineRule {
        name: "date_header",
        apply: date_header,
    },
    LineRule {
        name: "state_title_city",
        apply: state_title_city,
    },
    LineRule {
        name: "state_title",
        apply: state_title,
    },
];

/// Classify one trimmed, non-empty line. `None` means page furniture.
pub fn classify_line(line: &str) -> Option<(&'static str, LineShape)> {
    LINE_RULES
        .iter()
        .find_map(|rule| (rule.apply)(line).map(|shape| (rule.name, shape)))
}

struct Bracketed<'a> {
    date: &'a str,
    rest: &'a str,
}

fn split_bracket(line: &str) -> Option<Bracketed<'_>> {
    let caps = BRACKET_PREFIX.captures(line)?;
    Some(Bracketed {
        date: caps.get(1).map_or("", |m| m.as_str()).trim(),
        rest: caps.get(2).map_or("", |m| m.as_str()).trim(),
    })
}

/// `(state, remainder)` of an `XX - ...` line
fn split_state(text: &str) -> Option<(String, &str)> {
    let caps = STATE_PREFIX.captures(text)?;
    let state = caps.get(1)?.as_str().to_string();
    let rest = caps.get(2)?.as_str().trim();
    Some((state, rest))
}

/// Split `Title - City` on the last spaced hyphen.
fn split_title_city(rest: &str) -> Option<(String, String)> {
    let sep = SEGMENT_SEPARATOR.find_iter(rest).last()?;
    let title = rest[..sep.start()].trim();
    let city = rest[sep.end()..].trim();
    if title.is_empty() || city.is_empty() {
        return None;
    }
    Some((title.to_string(), city.to_string()))
}

fn title_passes_guard(title: &str) -> bool {
    !title.to_ascii_lowercase().contains("http") && title.chars().count() >= MIN_TITLE_CHARS
}

fn dated_with_city(line: &str) -> Option<LineShape> {
    let b = split_bracket(line)?;
    let (state, rest) = split_state(b.rest)?;
    let (title, city) = split_title_city(rest)?;
    Some(LineShape::DatedEvent {
        date: b.date.to_string(),
        state,
        title,
        city: Some(city),
        raw: b.rest.to_string(),
    })
}

fn dated_without_city(line: &str) -> Option<LineShape> {
    let b = split_bracket(line)?;
    let (state, title) = split_state(b.rest)?;
    if !title_passes_guard(title) {
        return Some(LineShape::Rejected {
            rule: "dated_without_city",
            title: title.to_string(),
        });
    }
    Some(LineShape::DatedEvent {
        date: b.date.to_string(),
        state,
        title: title.to_string(),
        city: None,
        raw: b.rest.to_string(),
    })
}

fn date_header(line: &str) -> Option<LineShape> {
    let b = split_bracket(line)?;
    if !b.rest.is_empty() || b.date.is_empty() {
        return None;
    }
    Some(LineShape::DateHeader {
        date: b.date.to_string(),
    })
}

fn state_title_city(line: &str) -> Option<LineShape> {
    let (state, rest) = split_state(line)?;
    let (title, city) = split_title_city(rest)?;
    Some(LineShape::UndatedEvent {
        state,
        title,
        city: Some(city),
        raw: line.to_string(),
    })
}

fn state_title(line: &str) -> Option<LineShape> {
    let (state, title) = split_state(line)?;
    if !title_passes_guard(title) {
        return Some(LineShape::Rejected {
            rule: "state_title",
            title: title.to_string(),
        });
    }
    Some(LineShape::UndatedEvent {
        state,
        title: title.to_string(),
        city: None,
        raw: line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_of(line: &str) -> Option<&'static str> {
        classify_line(line).map(|(name, _)| name)
    }

    #[test]
    fn test_dated_with_city() {
        let (rule, shape) = classify_line("[Apr 4] NV - Chimera Golf Club - Las Vegas").unwrap();
        assert_eq!(rule, "dated_with_city");
        assert_eq!(
            shape,
            LineShape::DatedEvent {
                date: "Apr 4".into(),
                state: "NV".into(),
                title: "Chimera Golf Club".into(),
                city: Some("Las Vegas".into()),
                raw: "NV - Chimera Golf Club - Las Vegas".into(),
            }
        );
    }

    #[test]
    fn test_title_keeps_inner_hyphens() {
        let (_, shape) = classify_line("NV - Pro - Am Day - Reno").unwrap();
        match shape {
            LineShape::UndatedEvent { title, city, .. } => {
                assert_eq!(title, "Pro - Am Day");
                assert_eq!(city.as_deref(), Some("Reno"));
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn test_dated_without_city_guard() {
        assert_eq!(rule_of("[Apr 4] NV - Spring Scramble"), Some("dated_without_city"));
        match classify_line("[Apr 4] NV - http://example.com").unwrap().1 {
            LineShape::Rejected { rule, .. } => assert_eq!(rule, "dated_without_city"),
            other => panic!("unexpected shape {:?}", other),
        }
        assert!(matches!(
            classify_line("[Apr 4] NV - Home").unwrap().1,
            LineShape::Rejected { .. }
        ));
    }

    #[test]
    fn test_date_header() {
        assert_eq!(
            classify_line("[Saturday, April 4]").unwrap().1,
            LineShape::DateHeader {
                date: "Saturday, April 4".into()
            }
        );
        assert_eq!(rule_of("[]"), None);
    }

    #[test]
    fn test_state_title_city_and_state_title() {
        assert_eq!(rule_of("CA - Desert Classic - Palm Springs"), Some("state_title_city"));
        assert_eq!(rule_of("CA - Desert Classic"), Some("state_title"));
        assert!(matches!(
            classify_line("CA - Menu").unwrap().1,
            LineShape::Rejected { rule: "state_title", .. }
        ));
    }

    #[test]
    fn test_furniture_is_ignored() {
        assert_eq!(rule_of("Upcoming Events"), None);
        assert_eq!(rule_of("Nv - lowercase state"), None);
        assert_eq!(rule_of("[Apr 4] Club news and notes"), None);
        assert_eq!(rule_of("Copyright 2026"), None);
    }

    #[test]
    fn test_unspaced_hyphen_in_city_stays_in_title() {
        // no spaced separator before the city: whole remainder is the title
        let (rule, shape) = classify_line("NC - Spring Open Winston-Salem").unwrap();
        assert_eq!(rule, "state_title");
        match shape {
            LineShape::UndatedEvent { title, city, .. } => {
                assert_eq!(title, "Spring Open Winston-Salem");
                assert_eq!(city, None);
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }
}
