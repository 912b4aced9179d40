use regex::Regex;
use std::sync::OnceLock;

const ZERO_DURATION: &str = "PT0M";

fn minutes_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([0-9]+)\s*(min|minute|minutes)\b").expect("valid minutes pattern")
    })
}

fn hours_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([0-9]+)\s*(h|heure|heures)\b").expect("valid hours pattern")
    })
}

fn compact_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"([0-9]+)\s*h\s*([0-9]+)").expect("valid compact pattern"))
}

fn capture_number(pattern: &Regex, text: &str) -> Option<u64> {
    pattern
        .captures(text)
        .map(|caps| caps[1].parse().unwrap_or(0))
}

/// Convert a loose French duration ("10 min", "1 h 15", "2 heures", "1h15")
/// into an ISO 8601 duration.
///
/// Both components are always written (`PT0H10M`, `PT2H0M`); input without a
/// recognizable amount gives `PT0M`. Never fails.
pub fn to_iso8601_duration(text: Option<&str>) -> String {
    let text = match text {
        Some(text) if !text.trim().is_empty() => text.trim().to_lowercase(),
        _ => return ZERO_DURATION.to_string(),
    };

    let mut hours = capture_number(hours_pattern(), &text);
    let mut minutes = capture_number(minutes_pattern(), &text);

    // "1h15" and "1 h 15" carry the minutes without a unit; tagged hours win
    // over a compact match elsewhere in the text
    if minutes.is_none() {
        if let Some(caps) = compact_pattern().captures(&text) {
            let compact_hours = caps[1].parse().unwrap_or(0);
            if hours.map_or(true, |tagged| tagged == compact_hours) {
                hours = Some(compact_hours);
                minutes = Some(caps[2].parse().unwrap_or(0));
            }
        }
    }

    let hours = hours.unwrap_or(0);
    let minutes = minutes.unwrap_or(0);
    if hours == 0 && minutes == 0 {
        ZERO_DURATION.to_string()
    } else {
        format!("PT{hours}H{minutes}M")
    }
}
