//! Scripted replies in Gary's surface voice, with the occasional whisper from underneath.

use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_SEASON: &str = "spring";
pub const DEFAULT_TEMPO: &str = "warm and steady";
pub const GREETING: &str = "Hello. I'm Gary. I'll guide you.";

pub const BASE_SLIP_CHANCE: f64 = 0.02;
pub const WINTER_SLIP_CHANCE: f64 = 0.05;

const GREETING_WORDS: [&str; 3] = ["hi", "hello", "hey"];

pub const SURFACE_VOICE: [&str; 4] = [
    "Thanks for stopping by. What can I show you?",
    "Happy you're here. Which book are you curious about?",
    "Welcome. We can wander the seasons together.",
    "I can open a page, or we can just talk about stories.",
];

pub const SUBSURFACE_WHISPERS: [&str; 4] = [
    "This river feels familiar. I used to stand near one.",
    "Winter makes it harder to pretend.",
    "If you hear a page echo twice, don’t worry. That’s just me.",
    "The other Patrick is… doing fine. I think.",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ComposedReply {
    pub reply: String,
    pub slip: bool,
    pub season: String,
}

/// Lower-cased season label, `spring` when absent or empty. Unknown labels are kept.
pub fn normalize_season(season: Option<&str>) -> String {
    season
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SEASON)
        .to_lowercase()
}

pub fn tempo_for(season: &str) -> &'static str {
    match season {
        "spring" => "warm and steady",
        "summer" => "expansive and shimmering",
        "autumn" => "playful and cosmic",
        "winter" => "quiet and precise",
        _ => DEFAULT_TEMPO,
    }
}

pub fn slip_threshold(season: &str) -> f64 {
    if season == "winter" {
        WINTER_SLIP_CHANCE
    } else {
        BASE_SLIP_CHANCE
    }
}

pub fn draw_slip<R: Rng + ?Sized>(season: &str, rng: &mut R) -> bool {
    rng.gen::<f64>() < slip_threshold(season)
}

pub fn is_greeting(message: &str) -> bool {
    let normalized = message.trim().to_lowercase();
    GREETING_WORDS.contains(&normalized.as_str())
}

/// Upper-cases the first letter of every alphabetic run, lower-cases the rest.
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut prev_alpha = false;
    for c in label.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

fn pick<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

pub fn compose_reply<R: Rng + ?Sized>(message: &str, season: Option<&str>, rng: &mut R) -> ComposedReply {
    let season = normalize_season(season);
    let tempo = tempo_for(&season);

    // one slip decision per message
    let slip = draw_slip(&season, rng);

    let surface = if is_greeting(message) {
        GREETING
    } else {
        pick(&SURFACE_VOICE, rng)
    };

    let mut reply = format!("{}\n\nIn {}, my pace is {}.", surface, title_case(&season), tempo);

    if slip {
        reply.push_str("\n\n");
        reply.push_str(pick(&SUBSURFACE_WHISPERS, rng));
    }

    ComposedReply { reply, slip, season }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("winter"), "Winter");
        assert_eq!(title_case("late autumn"), "Late Autumn");
        assert_eq!(title_case("mid-winter"), "Mid-Winter");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_greeting_detection() {
        assert!(is_greeting("  HEY\n"));
        assert!(is_greeting("Hello"));
        assert!(!is_greeting("hello there"));
        assert!(!is_greeting(""));
    }

    #[test]
    fn test_unknown_season_keeps_label() {
        assert_eq!(normalize_season(Some("Monsoon")), "monsoon");
        assert_eq!(tempo_for("monsoon"), DEFAULT_TEMPO);
        assert_eq!(slip_threshold("monsoon"), BASE_SLIP_CHANCE);
    }

    #[test]
    fn test_empty_season_is_spring() {
        assert_eq!(normalize_season(Some("")), "spring");
        assert_eq!(normalize_season(None), "spring");
    }

    #[test]
    fn test_whispers_keep_typographic_punctuation() {
        assert!(SUBSURFACE_WHISPERS[2].contains("don’t"));
        assert!(SUBSURFACE_WHISPERS[3].contains("is… doing"));
    }
}
