//! Derives the completion rows to show from the latest meet and backend
//! results.

use super::commit::insert_text;
use super::meet::CompletionMeet;
use super::rank::rank;
use crate::kernel::services::ports::CompletionItem;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MeetInfo {
    pub line: usize,
    pub position: usize,
    pub base: String,
    pub should_expand: bool,
}

impl MeetInfo {
    pub fn from_meet(line: usize, meet: &CompletionMeet) -> Self {
        Self {
            line,
            position: meet.position,
            base: meet.base.clone(),
            should_expand: meet.should_expand,
        }
    }
}

/// Backend results and the meet they were requested for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionResults {
    pub line: usize,
    pub position: usize,
    pub items: Vec<CompletionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastCompletion {
    pub line: usize,
    pub position: usize,
    pub item: CompletionItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionState {
    pub meet: MeetInfo,
    pub results: CompletionResults,
    pub last_completion: Option<LastCompletion>,
}

pub fn filtered_completions(state: &CompletionState) -> Vec<CompletionItem> {
    let meet = &state.meet;
    if state.results.items.is_empty() || !meet.should_expand {
        return Vec::new();
    }

    if meet.line != state.results.line || meet.position != state.results.position {
        return Vec::new();
    }

    if let Some(last) = &state.last_completion {
        if last.line == meet.line
            && last.position == meet.position
            && insert_text(&last.item) == meet.base
        {
            return Vec::new();
        }
    }

    let filtered = rank(&state.results.items, &meet.base);
    match filtered.as_slice() {
        [only] if insert_text(only) == meet.base => Vec::new(),
        _ => filtered,
    }
}
