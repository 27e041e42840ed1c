use std::sync::Arc;

use crate::kernel::completion::rank::{self, Candidate};

/// Strategy used by a menu to derive its visible rows from the full option
/// set. Captured when the menu is shown and kept for its whole lifetime.
pub trait MenuFilter<T, F>: Send + Sync {
    fn filter(&self, items: &[T], query: &str) -> Vec<F>;
}

pub type SharedMenuFilter<T, F> = Arc<dyn MenuFilter<T, F>>;

/// Default strategy: dedup, abbreviation filter and ordering from the
/// completion ranker.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankFilter;

impl<T: Candidate + Clone> MenuFilter<T, T> for RankFilter {
    fn filter(&self, items: &[T], query: &str) -> Vec<T> {
        rank::rank(items, query)
    }
}

/// Leaves items untouched, for sources that already filter upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFilter;

impl<T: Clone> MenuFilter<T, T> for PassthroughFilter {
    fn filter(&self, items: &[T], _query: &str) -> Vec<T> {
        items.to_vec()
    }
}

/// Adapts a plain function or closure into a [`MenuFilter`].
#[derive(Clone, Copy)]
pub struct FnFilter<Func>(pub Func);

impl<T, F, Func> MenuFilter<T, F> for FnFilter<Func>
where
    Func: Fn(&[T], &str) -> Vec<F> + Send + Sync,
{
    fn filter(&self, items: &[T], query: &str) -> Vec<F> {
        (self.0)(items, query)
    }
}
