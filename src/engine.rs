//! メモ化付き数列エンジン。
//!
//! キャッシュはエンジンが所有し、プロセス全体のグローバル状態にはしない。
//! エントリは追加のみで、削除・無効化はしない（`clear` を明示的に呼んだ場合を除く）。

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use crate::config::Config;
use crate::error::EngineResult;
use crate::sequence::{self, Sequence, Term, DEFAULT_MAX_STEPS};

/// キャッシュのヒット/ミス回数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// 区間問い合わせの1行: (k, k から 1 までのステップ数)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationRow<T> {
    pub number: T,
    pub iterations: usize,
}

impl<T: fmt::Display> fmt::Display for IterationRow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number: {}, Iterations: {}", self.number, self.iterations)
    }
}

/// 開始値 → 軌道 のキャッシュを持つエンジン
#[derive(Debug, Clone)]
pub struct SequenceEngine<T: Term = u64> {
    cache: HashMap<T, Sequence<T>>,
    max_steps: usize,
    stats: CacheStats,
}

impl<T: Term> Default for SequenceEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Term> SequenceEngine<T> {
    pub fn new() -> Self {
        Self::with_max_steps(DEFAULT_MAX_STEPS)
    }

    pub fn with_max_steps(max_steps: usize) -> Self {
        Self {
            cache: HashMap::new(),
            max_steps,
            stats: CacheStats::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_max_steps(config.max_steps)
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// n の軌道を返す。
    ///
    /// キャッシュにあればそのまま返し、再計算しない。
    /// なければ計算して元の開始値をキーに格納してから返す。失敗した計算は格納しない。
    pub fn compute(&mut self, n: T) -> EngineResult<&Sequence<T>> {
        match self.cache.entry(n) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                tracing::trace!(n = %entry.key(), "cache hit");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let seq = sequence::trajectory(entry.key(), self.max_steps).inspect_err(|e| {
                    tracing::warn!(n = %entry.key(), error = %e, "sequence computation failed");
                })?;
                self.stats.misses += 1;
                tracing::debug!(n = %entry.key(), iterations = seq.iterations(), "computed sequence");
                Ok(entry.insert(seq))
            }
        }
    }

    /// [start, end] の各 k について (k, ステップ数) を返す。start > end なら空。
    pub fn iteration_counts(&mut self, start: T, end: T) -> EngineResult<Vec<IterationRow<T>>> {
        let mut rows = Vec::new();
        let mut k = start;
        while k <= end {
            let iterations = self.compute(k.clone())?.iterations();
            rows.push(IterationRow { number: k.clone(), iterations });
            k = k + T::one();
        }
        tracing::debug!(rows = rows.len(), cached = self.cache.len(), "range query finished");
        Ok(rows)
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn contains(&self, n: &T) -> bool {
        self.cache.contains_key(n)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
