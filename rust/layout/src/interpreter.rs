// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Prompt interpretation via fixed rule tables.
//!
//! The interpreter is a keyword and number-pattern matcher, not a language
//! model. It extracts three things from free text:
//!
//! - the room program, from [`ROOM_RULES`] (evaluated in table order)
//! - the style theme, from [`STYLE_RULES`] (first hit wins)
//! - an optional total floor area (`60 sqm`, `60m2`, `60 square meters`)
//!
//! Interpretation is total: every unmatched input degrades to a default, so
//! there is no error path.

use archprompt_schema::{RoomType, Theme};
use memchr::memmem;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, digit1},
    combinator::{map, opt, recognize},
    sequence::{pair, terminated, tuple},
    IResult,
};

/// Upper bound on generated instances of one counted room family
pub const MAX_ROOMS_PER_FAMILY: u32 = 20;

/// One entry of the room rule table
#[derive(Debug, Clone, Copy)]
pub struct RoomRule {
    pub room_type: RoomType,
    /// Substrings that trigger the rule; also the keywords counts attach to
    pub triggers: &'static [&'static str],
    /// Whether a count such as `3-bedroom` produces several instances
    pub counted: bool,
    /// Prefix of generated room ids (`<stem>_<n>`)
    pub id_stem: &'static str,
}

pub const ROOM_RULES: &[RoomRule] = &[
    RoomRule {
        room_type: RoomType::Bedroom,
        triggers: &["bedroom", "bed"],
        counted: true,
        id_stem: "bedroom",
    },
    RoomRule {
        room_type: RoomType::Bathroom,
        triggers: &["bathroom", "bath"],
        counted: true,
        id_stem: "bathroom",
    },
    RoomRule {
        room_type: RoomType::Kitchen,
        triggers: &["kitchen"],
        counted: false,
        id_stem: "kitchen",
    },
    RoomRule {
        room_type: RoomType::Living,
        triggers: &["living", "lounge"],
        counted: false,
        id_stem: "living_room",
    },
];

/// Room synthesized when no rule triggers
pub const FALLBACK_ROOM: (RoomType, &str) = (RoomType::Living, "living_room_1");

/// Style keywords in priority order
pub const STYLE_RULES: &[(&str, Theme)] = &[
    ("scandinavian", Theme::Scandinavian),
    ("industrial", Theme::Industrial),
    ("minimalist", Theme::Minimalist),
    ("rustic", Theme::Rustic),
];

pub const DEFAULT_THEME: Theme = Theme::Modern;

/// Spelled-out counts, tried in this order
const WORD_NUMBERS: [(&str, u32); 10] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// A room the layout must contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRequest {
    pub room_type: RoomType,
    pub room_id: String,
}

impl RoomRequest {
    pub fn new(room_type: RoomType, room_id: impl Into<String>) -> Self {
        Self {
            room_type,
            room_id: room_id.into(),
        }
    }
}

/// Everything extracted from one prompt
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    /// Rooms in placement order; never empty
    pub rooms: Vec<RoomRequest>,
    pub theme: Theme,
    /// Explicit total floor area in m², if the prompt stated one
    pub area_override: Option<f64>,
}

/// Interprets a free-text prompt.
pub fn interpret(prompt: &str) -> Interpretation {
    let text = prompt.to_lowercase();

    let mut rooms = room_program(&text);
    if rooms.is_empty() {
        let (room_type, room_id) = FALLBACK_ROOM;
        rooms.push(RoomRequest::new(room_type, room_id));
    }

    let theme = detect_theme(&text);
    let area_override = detect_area(&text);

    tracing::debug!(
        rooms = rooms.len(),
        theme = %theme,
        area_override = ?area_override,
        "Interpreted prompt"
    );

    Interpretation {
        rooms,
        theme,
        area_override,
    }
}

/// Applies [`ROOM_RULES`] to lower-cased text
fn room_program(text: &str) -> Vec<RoomRequest> {
    let mut rooms = Vec::new();

    for rule in ROOM_RULES {
        if !rule.triggers.iter().any(|t| mentions(text, t)) {
            continue;
        }

        let count = if rule.counted {
            extract_count(text, rule.triggers).clamp(1, MAX_ROOMS_PER_FAMILY)
        } else {
            1
        };

        for n in 1..=count {
            rooms.push(RoomRequest::new(
                rule.room_type,
                format!("{}_{}", rule.id_stem, n),
            ));
        }
    }

    rooms
}

/// First theme keyword present in the text, else [`DEFAULT_THEME`]
pub fn detect_theme(text: &str) -> Theme {
    STYLE_RULES
        .iter()
        .find(|(keyword, _)| mentions(text, keyword))
        .map(|&(_, theme)| theme)
        .unwrap_or(DEFAULT_THEME)
}

/// Explicit floor area such as `60 sqm`; zero counts as absent
pub fn detect_area(text: &str) -> Option<f64> {
    find_leftmost(text, area_expression).filter(|area| *area > 0.0)
}

/// Count attached to any of `keywords`, defaulting to 1.
///
/// For each keyword in order, a numeric prefix (`3 bedroom`, `3-bedroom`)
/// is tried before a spelled-out one (`three bedroom`).
pub fn extract_count(text: &str, keywords: &[&str]) -> u32 {
    for keyword in keywords {
        if let Some(count) = find_leftmost(text, |input| numeric_count(input, keyword)) {
            return count;
        }

        for (word, value) in WORD_NUMBERS {
            if find_leftmost(text, |input| word_count(input, word, keyword)).is_some() {
                return value;
            }
        }
    }

    1
}

fn mentions(text: &str, needle: &str) -> bool {
    memmem::find(text.as_bytes(), needle.as_bytes()).is_some()
}

/// Runs `parser` at every char boundary and returns the first match
fn find_leftmost<'a, T>(
    text: &'a str,
    mut parser: impl FnMut(&'a str) -> IResult<&'a str, T>,
) -> Option<T> {
    text.char_indices()
        .find_map(|(i, _)| parser(&text[i..]).ok().map(|(_, value)| value))
}

/// Whitespace and hyphens between a count and its keyword
fn separator(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace() || c == '-')(input)
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

/// Decimal count; saturates instead of failing on overflow
fn count_digits(input: &str) -> IResult<&str, u32> {
    map(digit1, |digits: &str| digits.parse::<u32>().unwrap_or(u32::MAX))(input)
}

/// `<digits>[ -]*<keyword>`
fn numeric_count<'a>(input: &'a str, keyword: &str) -> IResult<&'a str, u32> {
    terminated(count_digits, pair(separator, tag(keyword)))(input)
}

/// `<word>[ -]*<keyword>`
fn word_count<'a>(input: &'a str, word: &str, keyword: &str) -> IResult<&'a str, &'a str> {
    recognize(tuple((tag(word), separator, tag(keyword))))(input)
}

/// `<digits> sqm`, `<digits>m2`, `<digits> square meter(s)`
fn area_expression(input: &str) -> IResult<&str, f64> {
    let unit = alt((
        tag("sqm"),
        tag("m2"),
        recognize(tuple((tag("square"), whitespace, tag("meter"), opt(char('s'))))),
    ));

    map(terminated(digit1, pair(whitespace, unit)), |digits: &str| {
        digits.parse::<f64>().unwrap_or(f64::MAX)
    })(input)
}
