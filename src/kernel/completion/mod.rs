//! Completion meet detection, candidate ranking and acceptance.

pub mod commit;
pub mod meet;
pub mod rank;
pub mod selectors;

pub use commit::{commit_completion, completion_start, insert_text, replace_prefix_with_completion};
pub use meet::{completion_meet, CompletionMeet, MeetDetector};
pub use rank::{matches_abbreviation, rank, rank_refs, Candidate};
pub use selectors::{
    filtered_completions, CompletionResults, CompletionState, LastCompletion, MeetInfo,
};
