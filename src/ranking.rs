//! Standard competition ranking with configurable tie handling.
//!
//! See <https://en.wikipedia.org/wiki/Ranking> for the vocabulary.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Items which can be ranked without an explicit key.
pub trait Scored {
    fn rank_score(&self) -> f64;
}

impl<T: Scored + ?Sized> Scored for &T {
    fn rank_score(&self) -> f64 {
        (**self).rank_score()
    }
}

/// How to place items sharing the same score.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TiePolicy {
    /// Tied items get the current position, the next ones skip the group
    /// (1, 1, 3).
    #[default]
    High,
    /// Tied items get the last position of the group (2, 2, 3).
    Low,
    /// Tied items get the mean of the positions of the group (1.5, 1.5, 3).
    Average,
    /// Tied items get the current position, the next ones do not skip
    /// anything (1, 1, 2).
    Sequential,
}

impl TiePolicy {
    /// Return the position given to every member of a group of `size` tied
    /// items starting at `position`, and the offset to the next available
    /// position.
    pub fn resolve(self, position: usize, size: usize) -> (f64, usize) {
        let first = position as f64;
        match self {
            TiePolicy::High => (first, size),
            TiePolicy::Low => (position.saturating_add(size.saturating_sub(1)) as f64, size),
            TiePolicy::Average => (first + size.saturating_sub(1) as f64 / 2.0, size),
            TiePolicy::Sequential => (first, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingOptions {
    /// Best scores first when set.
    pub reverse: bool,
    pub start: usize,
    pub policy: TiePolicy,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            reverse: true,
            start: 1,
            policy: TiePolicy::High,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rank<T> {
    pub item: T,
    pub score: f64,
    /// Whole number except for averaged ties.
    pub position: f64,
}

/// Items ordered by score, each with its position. A ranking is computed
/// once and never reordered.
#[derive(Clone, Debug)]
pub struct Ranking<T> {
    ranks: Vec<Rank<T>>,
}

impl<T: Scored> Ranking<T> {
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(items, T::rank_score, RankingOptions::default())
    }
}

impl<T> Ranking<T> {
    /// Rank `items` by the score returned by `key`.
    ///
    /// Items are grouped by strict equality of their scores, so any
    /// rescaling or curving must happen before ranking. Items sharing a
    /// score keep their relative input order.
    pub fn new<I, F>(items: I, key: F, options: RankingOptions) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> f64,
    {
        let mut ranks = items
            .into_iter()
            .map(|item| {
                let score = key(&item);
                Rank {
                    item,
                    score,
                    position: 0.0,
                }
            })
            .collect::<Vec<_>>();
        if options.reverse {
            ranks.sort_by(|a, b| b.score.total_cmp(&a.score));
        } else {
            ranks.sort_by(|a, b| a.score.total_cmp(&b.score));
        }
        let mut index = options.start;
        for group in ranks.chunk_by_mut(|a, b| a.score == b.score) {
            let (position, offset) = options.policy.resolve(index, group.len());
            for rank in group {
                rank.position = position;
            }
            index = index.saturating_add(offset);
        }
        trace!(items = ranks.len(), ?options, "ranking established");
        Self { ranks }
    }

    pub fn ranks(&self) -> &[Rank<T>] {
        &self.ranks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rank<T>> {
        self.ranks.iter()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn positions(&self) -> Vec<f64> {
        self.ranks.iter().map(|r| r.position).collect()
    }
}

impl<T> IntoIterator for Ranking<T> {
    type Item = Rank<T>;
    type IntoIter = std::vec::IntoIter<Rank<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranks.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Ranking<T> {
    type Item = &'a Rank<T>;
    type IntoIter = std::slice::Iter<'a, Rank<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORES: [f64; 6] = [90.0, 90.0, 80.0, 70.0, 70.0, 70.0];

    fn positions(policy: TiePolicy) -> Vec<f64> {
        let options = RankingOptions {
            policy,
            ..RankingOptions::default()
        };
        Ranking::new(SCORES, |&s| s, options).positions()
    }

    #[test]
    fn test_high() {
        assert_eq!(positions(TiePolicy::High), vec![1.0, 1.0, 3.0, 4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_low() {
        assert_eq!(positions(TiePolicy::Low), vec![2.0, 2.0, 3.0, 6.0, 6.0, 6.0]);
    }

    #[test]
    fn test_average() {
        assert_eq!(
            positions(TiePolicy::Average),
            vec![1.5, 1.5, 3.0, 5.0, 5.0, 5.0]
        );
    }

    #[test]
    fn test_sequential() {
        assert_eq!(
            positions(TiePolicy::Sequential),
            vec![1.0, 1.0, 2.0, 3.0, 3.0, 3.0]
        );
    }

    #[test]
    fn test_sorts_descending() {
        let ranking = Ranking::new([70.0, 90.0, 80.0], |&s| s, RankingOptions::default());
        let scores = ranking.iter().map(|r| r.score).collect::<Vec<_>>();
        assert_eq!(scores, vec![90.0, 80.0, 70.0]);
        assert_eq!(ranking.positions(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_ascending_and_start() {
        let options = RankingOptions {
            reverse: false,
            start: 0,
            policy: TiePolicy::High,
        };
        let ranking = Ranking::new([3.0, 1.0, 2.0, 1.0], |&s| s, options);
        let scores = ranking.iter().map(|r| r.score).collect::<Vec<_>>();
        assert_eq!(scores, vec![1.0, 1.0, 2.0, 3.0]);
        assert_eq!(ranking.positions(), vec![0.0, 0.0, 2.0, 3.0]);
    }

    #[test]
    fn test_start_near_limit() {
        let options = RankingOptions {
            start: usize::MAX - 1,
            policy: TiePolicy::Low,
            ..RankingOptions::default()
        };
        let ranking = Ranking::new([3.0, 3.0, 2.0, 1.0], |&s| s, options);
        let last = usize::MAX as f64;
        assert_eq!(ranking.positions(), vec![last, last, last, last]);
    }

    #[test]
    fn test_empty() {
        let ranking = Ranking::new(Vec::<f64>::new(), |&s| s, RankingOptions::default());
        assert!(ranking.is_empty());
        assert_eq!(ranking.len(), 0);
    }

    #[test]
    fn test_single() {
        let options = RankingOptions {
            start: 7,
            ..RankingOptions::default()
        };
        let ranking = Ranking::new([12.0], |&s| s, options);
        assert_eq!(ranking.positions(), vec![7.0]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = [("a", 10.0), ("b", 20.0), ("c", 10.0), ("d", 20.0)];
        let ranking = Ranking::new(items, |&(_, s): &(&str, f64)| s, RankingOptions::default());
        let names = ranking.iter().map(|r| r.item.0).collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_exact_equality_only() {
        let ranking = Ranking::new([0.1 + 0.2, 0.3], |&s| s, RankingOptions::default());
        assert_eq!(ranking.positions(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_monotonic_and_deterministic() {
        let scores = [5.0, 3.5, 9.0, 3.5, 3.5, 0.0, 9.0, 7.25, 5.0, 1.0];
        for policy in [
            TiePolicy::High,
            TiePolicy::Low,
            TiePolicy::Average,
            TiePolicy::Sequential,
        ] {
            let options = RankingOptions {
                policy,
                ..RankingOptions::default()
            };
            let first = Ranking::new(scores, |&s| s, options).positions();
            let second = Ranking::new(scores, |&s| s, options).positions();
            assert_eq!(first, second);
            assert!(first.windows(2).all(|w| w[0] <= w[1]), "{policy:?}");
        }
    }

    #[test]
    fn test_scored_items() {
        struct Entry(f64);
        impl Scored for Entry {
            fn rank_score(&self) -> f64 {
                self.0
            }
        }
        let entries = [Entry(1.0), Entry(3.0), Entry(2.0)];
        let ranking = Ranking::of(entries.iter());
        let scores = ranking.iter().map(|r| r.item.0).collect::<Vec<_>>();
        assert_eq!(scores, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_policy_deserialize() {
        let options: RankingOptions = toml::from_str(r#"policy = "average""#).unwrap();
        assert_eq!(options.policy, TiePolicy::Average);
        assert!(options.reverse);
        assert_eq!(options.start, 1);
    }
}
