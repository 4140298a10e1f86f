//! 文字列類似度スコアリング
//!
//! クエリと色名の類似度を0-100で算出する。
//! 大文字小文字・空白・記号のゆれは正規化してから比較する。

use strsim::{jaro_winkler, normalized_levenshtein};

/// 比較用にテキストを正規化する
///
/// - 小文字化
/// - 英数字以外を空白に置換
/// - 連続する空白を単一化、前後の空白を除去
pub fn normalize_name(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// トークンをソートした比較キーを生成
fn token_sort_key(normalized: &str) -> String {
    let mut tokens: Vec<&str> = normalized.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// 類似度メトリクス
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoreMetric {
    /// トークンをソートしてから編集距離を取る（語順のゆれに強い）
    #[default]
    TokenSort,
    /// 正規化編集距離
    Ratio,
    /// Jaro-Winkler距離
    JaroWinkler,
}

impl ScoreMetric {
    /// 2つの文字列の類似度を算出する（0-100、100=正規化後に一致）
    pub fn score(&self, a: &str, b: &str) -> f64 {
        let a = normalize_name(a);
        let b = normalize_name(b);

        let ratio = match self {
            ScoreMetric::TokenSort => {
                normalized_levenshtein(&token_sort_key(&a), &token_sort_key(&b))
            }
            ScoreMetric::Ratio => normalized_levenshtein(&a, &b),
            ScoreMetric::JaroWinkler => jaro_winkler(&a, &b),
        };

        ratio * 100.0
    }
}

impl std::str::FromStr for ScoreMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "token-sort" | "token_sort" | "tokensort" => Ok(ScoreMetric::TokenSort),
            "ratio" | "levenshtein" => Ok(ScoreMetric::Ratio),
            "jaro-winkler" | "jaro" => Ok(ScoreMetric::JaroWinkler),
            _ => Err(format!(
                "Unknown metric: {}. Use token-sort, ratio, or jaro-winkler",
                s
            )),
        }
    }
}

impl std::fmt::Display for ScoreMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreMetric::TokenSort => write!(f, "token-sort"),
            ScoreMetric::Ratio => write!(f, "ratio"),
            ScoreMetric::JaroWinkler => write!(f, "jaro-winkler"),
        }
    }
}
