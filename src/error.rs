//! エラー型。
//!
//! エンジン側 (`EngineError`)、入力境界 (`InputError`)、設定 (`ConfigError`) の3系統。

use thiserror::Error;

/// 数列計算の失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// n <= 0 は定義域外
    #[error("{value} is not a positive integer")]
    NotPositive { value: String },
    /// 3n+1 が整数型の範囲を超えた
    #[error("overflow at step {step} of the sequence starting at {start}")]
    Overflow { start: String, step: usize },
    /// max_steps 以内に 1 へ到達しなかった
    #[error("sequence starting at {start} did not reach 1 within {limit} steps")]
    StepLimit { start: String, limit: usize },
}

/// テキスト入力の解析失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{0:?} is not a number")]
    NotANumber(String),
    /// 整数ではあるが負
    #[error("{0} is not a positive integer")]
    NotPositive(String),
    /// 整数ではあるが型に収まらない
    #[error("{0} is too large")]
    TooLarge(String),
}

/// 設定値の読み込み失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("{key} must be at least 1")]
    ZeroLimit { key: &'static str },
}

pub type EngineResult<T> = Result<T, EngineError>;
