use serde::{Deserialize, Serialize};

use crate::kernel::completion::MeetDetector;
use crate::kernel::menu::{MenuAction, MenuConfiguration};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub completion: CompletionSettings,
    #[serde(default)]
    pub menu: MenuConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSettings {
    /// Regex for a single word character.
    #[serde(default = "default_word_pattern")]
    pub word_pattern: String,
    #[serde(default = "default_trigger_characters")]
    pub trigger_characters: Vec<String>,
}

fn default_word_pattern() -> String {
    r"\w".to_string()
}

fn default_trigger_characters() -> Vec<String> {
    vec![".".to_string()]
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            word_pattern: default_word_pattern(),
            trigger_characters: default_trigger_characters(),
        }
    }
}

impl Settings {
    pub fn meet_detector(&self) -> Result<MeetDetector, regex::Error> {
        MeetDetector::new(
            &self.completion.word_pattern,
            self.completion.trigger_characters.as_slice(),
        )
    }

    pub fn menu_configuration_action<T, F>(&self) -> MenuAction<T, F> {
        MenuAction::SetConfiguration(self.menu)
    }
}
