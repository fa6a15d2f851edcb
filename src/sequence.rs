use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, One, Zero};
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::error::{EngineError, EngineResult};

/// エンジンが扱える整数型。
///
/// `u64` / `u128` / 符号付きプリミティブ / `BigUint` が該当する。
/// `BigUint` は `checked_*` が常に `Some` を返すのでオーバーフローしない。
pub trait Term: Integer + CheckedMul + CheckedAdd + Clone + Hash + Display + Debug {}

impl<T> Term for T where T: Integer + CheckedMul + CheckedAdd + Clone + Hash + Display + Debug {}

/// 既定のステップ上限
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// コラッツ写像の1ステップ: 偶数なら n/2、奇数なら 3n+1。
/// 3n+1 が型の範囲を超える場合は `None`。
#[inline]
pub fn collatz_next<T: Term>(n: &T) -> Option<T> {
    let one = T::one();
    let two = one.clone() + one.clone();
    if n.is_even() {
        Some(n.div_floor(&two))
    } else {
        let three = two + one.clone();
        three.checked_mul(n)?.checked_add(&one)
    }
}

/// 開始値から 1 までの軌道（開始値を含み、最初の 1 で終わる）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T>(Vec<T>);

// 常に非空なので is_empty は持たない
#[allow(clippy::len_without_is_empty)]
impl<T: Term> Sequence<T> {
    pub fn values(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn start(&self) -> &T {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 1 に到達するまでのステップ数（開始値自身は数えない）
    pub fn iterations(&self) -> usize {
        self.0.len() - 1
    }

    /// 軌道の最大値
    pub fn peak(&self) -> &T {
        self.0
            .iter()
            .fold(&self.0[0], |max, v| if v > max { v } else { max })
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// キャッシュを使わずに軌道を計算する。
///
/// n <= 0 は `NotPositive`、max_steps を超えても 1 に届かなければ `StepLimit`、
/// 3n+1 が型に収まらなければ `Overflow`。ちょうど max_steps ステップの軌道は成功する。
pub fn trajectory<T: Term>(start: &T, max_steps: usize) -> EngineResult<Sequence<T>> {
    if *start <= T::zero() {
        return Err(EngineError::NotPositive { value: start.to_string() });
    }

    let mut values = vec![start.clone()];
    let mut n = start.clone();
    while !n.is_one() {
        if values.len() > max_steps {
            return Err(EngineError::StepLimit {
                start: start.to_string(),
                limit: max_steps,
            });
        }
        n = collatz_next(&n).ok_or_else(|| EngineError::Overflow {
            start: start.to_string(),
            step: values.len(),
        })?;
        values.push(n.clone());
    }

    Ok(Sequence(values))
}
