// Best score, persisted as a JSON integer in localStorage
use crate::config::HIGH_SCORE_KEY;

pub fn parse_high_score(raw: &str) -> u32 {
    serde_json::from_str::<u32>(raw).unwrap_or(0)
}

pub fn load_high_score() -> u32 {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(HIGH_SCORE_KEY) {
                return parse_high_score(&raw);
            }
        }
    }
    0
}

pub fn save_high_score(score: u32) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(s) = serde_json::to_string(&score) {
                let _ = store.set_item(HIGH_SCORE_KEY, &s);
            }
        }
    }
}

/// A run sets a record only by beating the best from before it started.
pub fn is_new_record(score: u32, previous_best: u32) -> bool {
    score > previous_best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_integer() {
        assert_eq!(parse_high_score("42"), 42);
    }

    #[test]
    fn malformed_values_read_as_zero() {
        assert_eq!(parse_high_score(""), 0);
        assert_eq!(parse_high_score("-3"), 0);
        assert_eq!(parse_high_score("\"12\""), 0);
    }

    #[test]
    fn tying_the_previous_best_is_not_a_record() {
        assert!(!is_new_record(7, 7));
        assert!(is_new_record(8, 7));
        assert!(!is_new_record(0, 0));
    }
}
