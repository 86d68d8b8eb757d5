//! Typing effect for the hero heading.

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(150);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
/// How long a completed phrase stays on screen before deletion starts.
pub const HOLD_DELAY: Duration = Duration::from_millis(1000);
pub const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// Types and deletes a cyclic list of phrases one character at a time.
///
/// Positions count `char`s, so multi-byte text is never split.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    holding: bool,
    cursor_visible: bool,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            holding: false,
            cursor_visible: true,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn phrase(&self) -> &str {
        self.phrases
            .get(self.phrase_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// The part of the current phrase typed so far.
    pub fn text(&self) -> &str {
        let phrase = self.phrase();
        let end = phrase
            .char_indices()
            .nth(self.char_index)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    /// Delay before the next [`step`](Self::step), or `None` with no phrases.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.phrases.is_empty() {
            None
        } else if self.holding {
            Some(HOLD_DELAY)
        } else if self.deleting {
            Some(DELETE_DELAY)
        } else {
            Some(TYPE_DELAY)
        }
    }

    pub fn step(&mut self) {
        if self.phrases.is_empty() {
            return;
        }
        if self.holding {
            // deletion starts from the full phrase
            self.holding = false;
            self.deleting = true;
            return;
        }
        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            if self.char_index == 0 {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            }
            return;
        }
        let len = self.phrase().chars().count();
        if self.char_index < len {
            self.char_index += 1;
        }
        if self.char_index == len {
            self.holding = true;
        }
    }

    pub fn blink(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frames(tw: &mut Typewriter, n: usize) -> Vec<String> {
        (0..n)
            .map(|_| {
                tw.step();
                tw.text().to_string()
            })
            .collect()
    }

    #[test]
    fn test_types_deletes_and_cycles() {
        let mut tw = Typewriter::new(["Hi", "Yo"]);
        assert_eq!(tw.text(), "");
        assert_eq!(
            frames(&mut tw, 11),
            ["H", "Hi", "Hi", "H", "", "Y", "Yo", "Yo", "Y", "", "H"]
        );
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn test_delays_follow_phase() {
        let mut tw = Typewriter::new(["Hi"]);
        assert_eq!(tw.next_delay(), Some(TYPE_DELAY));
        tw.step();
        assert_eq!(tw.next_delay(), Some(TYPE_DELAY));
        tw.step();
        // full phrase, hold before deleting
        assert_eq!(tw.next_delay(), Some(HOLD_DELAY));
        assert!(!tw.is_deleting());
        tw.step();
        assert!(tw.is_deleting());
        assert_eq!(tw.char_index(), 2);
        assert_eq!(tw.next_delay(), Some(DELETE_DELAY));
        tw.step();
        tw.step();
        assert!(!tw.is_deleting());
        assert_eq!(tw.next_delay(), Some(TYPE_DELAY));
    }

    #[test]
    fn test_char_index_never_exceeds_phrase() {
        let mut tw = Typewriter::new(["abc", "de"]);
        for _ in 0..100 {
            tw.step();
            let len = ["abc", "de"][tw.phrase_index()].len();
            assert!(tw.char_index() <= len);
        }
    }

    #[test]
    fn test_empty_phrase_completes_instantly() {
        let mut tw = Typewriter::new(["", "A"]);
        tw.step();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.next_delay(), Some(HOLD_DELAY));
        tw.step();
        assert!(tw.is_deleting());
        tw.step();
        assert_eq!(tw.phrase_index(), 1);
        assert!(!tw.is_deleting());
        tw.step();
        assert_eq!(tw.text(), "A");
    }

    #[test]
    fn test_no_phrases_is_inert() {
        let mut tw = Typewriter::new(Vec::<String>::new());
        assert_eq!(tw.next_delay(), None);
        tw.step();
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_multibyte_phrase() {
        let mut tw = Typewriter::new(["héllo 👋"]);
        assert_eq!(frames(&mut tw, 2), ["h", "hé"]);
        for _ in 0..5 {
            tw.step();
        }
        assert_eq!(tw.text(), "héllo 👋");
        assert_eq!(tw.char_index(), 7);
    }

    #[test]
    fn test_cursor_blinks_independently() {
        let mut tw = Typewriter::new(["Hi"]);
        assert!(tw.cursor_visible());
        tw.blink();
        assert!(!tw.cursor_visible());
        tw.step();
        assert!(!tw.cursor_visible());
        tw.blink();
        assert!(tw.cursor_visible());
    }
}
