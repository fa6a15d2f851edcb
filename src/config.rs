use crate::error::ConfigError;
use crate::sequence::DEFAULT_MAX_STEPS;

/// ステップ上限を上書きする環境変数
pub const MAX_STEPS_ENV: &str = "COLLATZ_MAX_STEPS";

/// 実行時設定。入力欄の初期値もここで持つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_steps: usize,
    pub default_start: String,
    pub default_end: String,
    pub default_number: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            default_start: "1".to_string(),
            default_end: "10".to_string(),
            default_number: "1".to_string(),
        }
    }
}

impl Config {
    /// 既定値に環境変数を重ねる
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー検索関数から組み立てる（テストでは環境変数を汚さずに済む）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(MAX_STEPS_ENV) {
            let max_steps = raw.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                key: MAX_STEPS_ENV,
                value: raw.clone(),
            })?;
            if max_steps == 0 {
                return Err(ConfigError::ZeroLimit { key: MAX_STEPS_ENV });
            }
            config.max_steps = max_steps;
        }
        Ok(config)
    }
}
