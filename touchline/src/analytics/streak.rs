//! Contiguous runs of matches satisfying a predicate.
//!
//! [run_lengths] computes, for every start index, the length of the run beginning there in a
//! single backwards pass; [longest_run] picks the earliest start attaining the maximum. A
//! maximal run always starts either at index 0 or right after a failing item, so the earliest
//! maximising start index is also the start of a whole run.

use std::ops::Range;

use crate::analytics::first_max_by_key;
use crate::domain::Match;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}
impl Run {
    /// Exclusive end index.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The run widened by one item on either side, clamped to `0..total`.
    pub fn context(&self, total: usize) -> Range<usize> {
        self.start.saturating_sub(1)..usize::min(self.end() + 1, total)
    }
}

/// Longest unbeaten run, together with the surrounding matches.
#[derive(Debug, Clone, PartialEq)]
pub struct UnbeatenRun<'a> {
    pub run: Run,
    /// Indices of [window](Self::window) within the season.
    pub context: Range<usize>,
    pub window: &'a [Match],
}
impl UnbeatenRun<'_> {
    /// Whether the match at `index` of the window belongs to the run, as opposed to its context.
    pub fn in_run(&self, index: usize) -> bool {
        self.run.range().contains(&(self.context.start + index))
    }
}

pub fn run_lengths<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<usize> {
    let mut lengths = vec![0; items.len()];
    for index in (0..items.len()).rev() {
        if predicate(&items[index]) {
            lengths[index] = 1 + lengths.get(index + 1).copied().unwrap_or(0);
        }
    }
    lengths
}

/// The longest run of items satisfying `predicate`; the earliest one if several are equally long.
/// `None` if no item satisfies the predicate.
pub fn longest_run<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> Option<Run> {
    first_max_by_key(run_lengths(items, predicate).into_iter().enumerate(), |&(_, len)| len)
        .filter(|&(_, len)| len > 0)
        .map(|(start, len)| Run { start, len })
}

pub fn longest_unbeaten(matches: &[Match]) -> Option<UnbeatenRun<'_>> {
    longest_run(matches, Match::unbeaten).map(|run| {
        let context = run.context(matches.len());
        UnbeatenRun {
            run,
            window: &matches[context.clone()],
            context,
        }
    })
}
