//! ファジー照合モジュール
//!
//! クエリ文字列を参照テーブルの全色名と照合し、最高スコアの
//! 色レコードを結合して返す。スコアの下限はない（必ず1件返す）。
//! 足切りが必要な呼び出し側は返されたスコアで判断する。

use crate::error::{Error, Result};
use crate::scoring::ScoreMetric;
use crate::table::ReferenceTable;
use crate::types::MatchResult;
use rayon::prelude::*;

/// クエリ列を参照テーブルと照合する
///
/// 結果はクエリと同じ順序で1件ずつ返る。スコアが同率の場合は
/// テーブルの挿入順で先のレコードを選ぶ。
pub fn match_colors(
    reference: &ReferenceTable,
    queries: &[String],
    metric: ScoreMetric,
) -> Result<Vec<MatchResult>> {
    if reference.is_empty() {
        return Err(Error::EmptyReference);
    }

    // クエリ間に依存はないので並列化できる。
    // インデックス付きcollectが入力順を維持する。
    queries
        .par_iter()
        .map(|query| {
            let (position, score) =
                best_match_with(query, reference.names(), |a, b| metric.score(a, b))
                    .ok_or(Error::EmptyReference)?;

            let record = reference.records()[position].clone();
            Ok(MatchResult {
                query: query.clone(),
                name: record.name.clone(),
                score,
                record,
            })
        })
        .collect()
}

/// 候補列から最高スコアの位置とスコアを返す
///
/// スコア関数は差し替え可能。同率の場合は先に現れた候補を優先する。
/// 候補が空ならNone。
pub fn best_match_with<'a, I, F>(query: &str, candidates: I, score_fn: F) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(&str, &str) -> f64,
{
    let mut best: Option<(usize, f64)> = None;

    for (i, candidate) in candidates.into_iter().enumerate() {
        let score = score_fn(query, candidate);
        match best {
            // 同率では更新しない（先の候補を保持）
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((i, score)),
        }
    }

    best
}

/// JSON配列をクエリ列へ変換する
///
/// 文字列以外の要素（null・数値など）はInvalidQueryエラー。
/// 空文字列は有効なクエリとして通す。
pub fn queries_from_json(values: &[serde_json::Value]) -> Result<Vec<String>> {
    values
        .iter()
        .map(|value| match value.as_str() {
            Some(text) => Ok(text.to_string()),
            None => Err(Error::InvalidQuery(value.to_string())),
        })
        .collect()
}
