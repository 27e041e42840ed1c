//! Completion meet detection.
//!
//! A "meet" is the span of the current line that a completion would replace,
//! plus whether a completion popup should be offered at all. Detection runs on
//! every keystroke, so detectors compile their patterns once and the free
//! function [`completion_meet`] keeps them cached per pattern set.
//!
//! Columns are char indices into the line.

use std::cell::RefCell;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::kernel::services::adapters::perf;

const DETECTOR_CACHE_LIMIT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionMeet {
    /// First char of the prefix being completed.
    pub position: usize,
    /// Column the backend should be queried at.
    pub position_to_query: usize,
    pub base: String,
    pub should_expand: bool,
}

impl CompletionMeet {
    fn closed(cursor_col: usize) -> Self {
        Self {
            position: cursor_col,
            position_to_query: cursor_col,
            base: String::new(),
            should_expand: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MeetDetector {
    word_char: Regex,
    trailing_word: Regex,
    trailing_trigger: Option<Regex>,
}

impl MeetDetector {
    /// `word_pattern` describes a single word character (e.g. `\w`).
    ///
    /// Only the final char of each trigger string acts as the trigger
    /// boundary; an empty trigger list never matches.
    pub fn new<S: AsRef<str>>(
        word_pattern: &str,
        trigger_characters: &[S],
    ) -> Result<Self, regex::Error> {
        let word_char = Regex::new(&format!("(?:{word_pattern})"))?;
        let trailing_word = Regex::new(&format!("(?:{word_pattern})+$"))?;
        let trailing_trigger = trigger_regex(trigger_characters)?;

        Ok(Self {
            word_char,
            trailing_word,
            trailing_trigger,
        })
    }

    pub fn detect(&self, line: &str, cursor_col: usize) -> CompletionMeet {
        let _scope = perf::scope("completion.meet");

        let cursor_byte = byte_offset_of_char(line, cursor_col);
        let before = &line[..cursor_byte];
        let cursor_col = before.chars().count();

        let word_after_cursor = line[cursor_byte..]
            .chars()
            .next()
            .is_some_and(|ch| self.is_word_char(ch));

        let word = self.trailing_word.find(before).filter(|m| !m.is_empty());
        let trigger = self
            .trailing_trigger
            .as_ref()
            .is_some_and(|re| re.is_match(before));

        let (base, position) = match word {
            Some(m) => (m.as_str().to_string(), before[..m.start()].chars().count()),
            None => (String::new(), cursor_col),
        };

        // A lone first char is rarely enough for a useful backend query.
        let position_to_query = if trigger { cursor_col } else { position + 1 };

        CompletionMeet {
            position,
            position_to_query,
            base,
            should_expand: (trigger || word.is_some()) && !word_after_cursor,
        }
    }

    pub fn is_word_char(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.word_char.is_match(ch.encode_utf8(&mut buf))
    }
}

fn trigger_regex<S: AsRef<str>>(trigger_characters: &[S]) -> Result<Option<Regex>, regex::Error> {
    let mut finals: Vec<char> = Vec::with_capacity(trigger_characters.len());
    for trigger in trigger_characters {
        if let Some(ch) = trigger.as_ref().chars().next_back() {
            if !finals.contains(&ch) {
                finals.push(ch);
            }
        }
    }

    if finals.is_empty() {
        return Ok(None);
    }

    let alternation = finals
        .iter()
        .map(|ch| regex::escape(ch.encode_utf8(&mut [0u8; 4])))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?:{alternation})$")).map(Some)
}

fn byte_offset_of_char(line: &str, char_idx: usize) -> usize {
    line.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

type DetectorKey = (String, Vec<String>);

thread_local! {
    static DETECTORS: RefCell<FxHashMap<DetectorKey, Option<MeetDetector>>> =
        RefCell::new(FxHashMap::default());
}

/// Detects the meet at `cursor_col`, reusing a cached detector for the given
/// pattern set. An invalid `word_pattern` yields a meet that never expands.
pub fn completion_meet<S: AsRef<str>>(
    line: &str,
    cursor_col: usize,
    word_pattern: &str,
    trigger_characters: &[S],
) -> CompletionMeet {
    let key: DetectorKey = (
        word_pattern.to_string(),
        trigger_characters
            .iter()
            .map(|t| t.as_ref().to_string())
            .collect(),
    );

    DETECTORS.with(|detectors| {
        let mut detectors = detectors.borrow_mut();
        if !detectors.contains_key(&key) && detectors.len() >= DETECTOR_CACHE_LIMIT {
            detectors.clear();
        }

        let detector = detectors.entry(key).or_insert_with(|| {
            match MeetDetector::new(word_pattern, trigger_characters) {
                Ok(detector) => Some(detector),
                Err(error) => {
                    tracing::warn!(
                        pattern = word_pattern,
                        error = %error,
                        "invalid word pattern, completion disabled"
                    );
                    None
                }
            }
        });

        match detector {
            Some(detector) => detector.detect(line, cursor_col),
            None => CompletionMeet::closed(cursor_col.min(line.chars().count())),
        }
    })
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/completion/meet.rs"]
mod tests;
