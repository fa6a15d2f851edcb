//! コラッツ数列の計算と可視化
//!
//! n → n/2 (偶数) / 3n+1 (奇数) を 1 に到達するまで反復した軌道を、
//! 開始値ごとにメモ化して返すエンジンと、区間一覧・軌道グラフ用の問い合わせ層。

pub mod config;
pub mod engine;
pub mod error;
pub mod query;
pub mod sequence;

pub use num_bigint::BigUint;

pub use config::Config;
pub use engine::{CacheStats, IterationRow, SequenceEngine};
pub use error::{ConfigError, EngineError, EngineResult, InputError};
pub use query::{
    parse_number, run_range_query, run_sequence_query, ListOutput, PathPoint, SequencePlot,
    NUMBER_NOT_A_NUMBER, RANGE_NOT_A_NUMBER,
};
pub use sequence::{collatz_next, trajectory, Sequence, Term, DEFAULT_MAX_STEPS};

/// `RUST_LOG` に従う fmt サブスクライバを入れる。既に入っていれば何もしない。
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
