use memchr::memmem::Finder;

use crate::kernel::services::adapters::perf;
use crate::kernel::services::ports::CompletionItem;

/// Something the ranker can filter and order.
pub trait Candidate {
    /// Key used for both matching and ordering.
    fn match_key(&self) -> &str;

    /// Backend supplied tiebreak.
    fn sort_text(&self) -> Option<&str> {
        None
    }

    /// Duplicate detection; backends may repeat an entry with only its sort
    /// hint changed.
    fn is_duplicate_of(&self, other: &Self) -> bool;
}

impl Candidate for CompletionItem {
    fn match_key(&self) -> &str {
        self.filter_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(self.label.as_str())
    }

    fn sort_text(&self) -> Option<&str> {
        self.sort_text.as_deref()
    }

    fn is_duplicate_of(&self, other: &Self) -> bool {
        self.label == other.label
            && self.kind == other.kind
            && self.detail == other.detail
            && self.insert_text == other.insert_text
            && self.insert_text_format == other.insert_text_format
            && self.filter_text == other.filter_text
    }
}

/// Deduplicates, filters and orders `items` against `prefix`, returning
/// references into `items`.
pub fn rank_refs<'a, T: Candidate>(items: &'a [T], prefix: &str) -> Vec<&'a T> {
    let _scope = perf::scope("completion.rank");

    let unique = dedup(items);
    if prefix.is_empty() {
        return unique;
    }

    let finder = Finder::new(prefix.as_bytes());
    let mut ranked: Vec<(&T, bool)> = unique
        .into_iter()
        .filter(|item| matches_abbreviation(item.match_key(), prefix))
        .map(|item| {
            let contiguous = finder.find(item.match_key().as_bytes()).is_some();
            (item, contiguous)
        })
        .collect();

    ranked.sort_by(|(a, a_contiguous), (b, b_contiguous)| {
        b_contiguous
            .cmp(a_contiguous)
            .then_with(|| a.match_key().cmp(b.match_key()))
            // Items without a sort hint come before hinted ones.
            .then_with(|| a.sort_text().cmp(&b.sort_text()))
    });

    tracing::trace!(
        total = items.len(),
        matched = ranked.len(),
        prefix,
        "ranked completion candidates"
    );

    ranked.into_iter().map(|(item, _)| item).collect()
}

pub fn rank<T: Candidate + Clone>(items: &[T], prefix: &str) -> Vec<T> {
    rank_refs(items, prefix).into_iter().cloned().collect()
}

fn dedup<T: Candidate>(items: &[T]) -> Vec<&T> {
    let mut unique: Vec<&T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.iter().any(|kept| kept.is_duplicate_of(item)) {
            unique.push(item);
        }
    }
    unique
}

/// `key` starts with the first char of `prefix` and contains the rest of
/// `prefix` in order.
pub fn matches_abbreviation(key: &str, prefix: &str) -> bool {
    let mut wanted = prefix.chars();
    let Some(first) = wanted.next() else {
        return true;
    };

    let mut key_chars = key.chars();
    if key_chars.next() != Some(first) {
        return false;
    }

    let mut next = wanted.next();
    for ch in key_chars {
        match next {
            Some(want) if want == ch => next = wanted.next(),
            Some(_) => {}
            None => break,
        }
    }
    next.is_none()
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/completion/rank.rs"]
mod tests;
