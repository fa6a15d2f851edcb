//! 表示層との境界。
//!
//! 入力欄のテキストを整数に解析し、エンジンを呼び、一覧の行とグラフの点列を返す。
//! GUI と CLI の両方がここを通る。

use num_traits::ToPrimitive;
use std::str::FromStr;

use crate::engine::{IterationRow, SequenceEngine};
use crate::error::InputError;
use crate::sequence::{Sequence, Term};

pub const RANGE_NOT_A_NUMBER: &str = "Start or End is not a number";
pub const NUMBER_NOT_A_NUMBER: &str = "Number is not a number";

pub const PLOT_TITLE: &str = "Collatz Conjecture Path";
pub const X_AXIS_LABEL: &str = "Step";
pub const Y_AXIS_LABEL: &str = "Value";

/// テキストを整数に解析する。前後の空白と先頭の `+` は許す。
///
/// 整数として読めるが型に収まらない場合は、負なら `NotPositive`、正なら `TooLarge`。
pub fn parse_number<T: FromStr>(text: &str) -> Result<T, InputError> {
    let trimmed = text.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if body.starts_with(['+', '-']) && body.len() != trimmed.len() {
        return Err(InputError::NotANumber(text.to_string()));
    }
    if let Ok(n) = body.parse::<T>() {
        return Ok(n);
    }

    let (negative, digits) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(text.to_string()));
    }
    if negative {
        Err(InputError::NotPositive(body.to_string()))
    } else {
        Err(InputError::TooLarge(body.to_string()))
    }
}

/// 一覧欄に表示する内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutput<T> {
    Rows(Vec<IterationRow<T>>),
    /// 一覧全体を置き換えるメッセージ
    Message(String),
}

impl<T: Term> ListOutput<T> {
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListOutput::Rows(rows) => rows.iter().map(|r| r.to_string()).collect(),
            ListOutput::Message(msg) => vec![msg.clone()],
        }
    }
}

/// 区間 [start, end] の問い合わせ
pub fn run_range_query<T: Term + FromStr>(
    engine: &mut SequenceEngine<T>,
    start_text: &str,
    end_text: &str,
) -> ListOutput<T> {
    let (start, end) = match (parse_number::<T>(start_text), parse_number::<T>(end_text)) {
        (Ok(start), Ok(end)) => (start, end),
        (Err(InputError::NotANumber(_)), _) | (_, Err(InputError::NotANumber(_))) => {
            tracing::debug!(start_text, end_text, "range input rejected");
            return ListOutput::Message(RANGE_NOT_A_NUMBER.to_string());
        }
        (Err(e), _) | (_, Err(e)) => return ListOutput::Message(e.to_string()),
    };

    match engine.iteration_counts(start, end) {
        Ok(rows) => ListOutput::Rows(rows),
        Err(e) => ListOutput::Message(e.to_string()),
    }
}

/// グラフ上の1点: x = ステップ番号 (0始まり)、y = 値
#[derive(Debug, Clone, PartialEq)]
pub struct PathPoint {
    pub step: usize,
    pub value: f64,
    pub label: String,
}

/// 単一の数の軌道グラフ
#[derive(Debug, Clone, PartialEq)]
pub struct SequencePlot {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub start: String,
    pub iterations: usize,
    pub peak: String,
    pub points: Vec<PathPoint>,
}

impl SequencePlot {
    pub fn from_sequence<T: Term + ToPrimitive>(seq: &Sequence<T>) -> Self {
        let points = seq
            .iter()
            .enumerate()
            .map(|(step, v)| PathPoint {
                step,
                value: v.to_f64().unwrap_or(f64::INFINITY),
                label: v.to_string(),
            })
            .collect();
        Self {
            title: PLOT_TITLE,
            x_label: X_AXIS_LABEL,
            y_label: Y_AXIS_LABEL,
            start: seq.start().to_string(),
            iterations: seq.iterations(),
            peak: seq.peak().to_string(),
            points,
        }
    }

    /// 折れ線用の [x, y] 列
    pub fn xy(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.step as f64, p.value]).collect()
    }
}

/// 単一の数の問い合わせ。失敗時は一覧欄に出すメッセージを返す。
pub fn run_sequence_query<T: Term + FromStr + ToPrimitive>(
    engine: &mut SequenceEngine<T>,
    number_text: &str,
) -> Result<SequencePlot, String> {
    let n = match parse_number::<T>(number_text) {
        Ok(n) => n,
        Err(InputError::NotANumber(_)) => {
            tracing::debug!(number_text, "number input rejected");
            return Err(NUMBER_NOT_A_NUMBER.to_string());
        }
        Err(e) => return Err(e.to_string()),
    };
    engine
        .compute(n)
        .map(SequencePlot::from_sequence)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_parse_accepts_whitespace_and_plus() {
        assert_eq!(parse_number::<u64>(" 42 "), Ok(42));
        assert_eq!(parse_number::<u64>("+7"), Ok(7));
        assert_eq!(parse_number::<i64>("-7"), Ok(-7));
    }

    #[test]
    fn test_parse_rejects_text() {
        for bad in ["abc", "", "  ", "1.5", "++1", "+-1", "1e3", "-"] {
            assert_eq!(
                parse_number::<u64>(bad),
                Err(InputError::NotANumber(bad.to_string())),
                "input {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_out_of_range_integers() {
        assert_eq!(parse_number::<u64>("-3"), Err(InputError::NotPositive("-3".to_string())));
        assert_eq!(
            parse_number::<u64>("18446744073709551616"),
            Err(InputError::TooLarge("18446744073709551616".to_string()))
        );
        assert_eq!(
            parse_number::<BigUint>("18446744073709551616"),
            Ok(BigUint::from(u64::MAX) + 1u32)
        );
    }

    #[test]
    fn test_plot_points() {
        let mut engine = SequenceEngine::<u64>::new();
        let plot = run_sequence_query(&mut engine, "6").unwrap();
        assert_eq!(plot.title, "Collatz Conjecture Path");
        assert_eq!(plot.points.len(), 9);
        assert_eq!(plot.points[0], PathPoint { step: 0, value: 6.0, label: "6".into() });
        assert_eq!(plot.points[4].label, "16");
        assert_eq!(plot.xy()[8], [8.0, 1.0]);
        assert_eq!(plot.peak, "16");
    }
}
