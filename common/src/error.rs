//! エラー型定義

use thiserror::Error;

/// コア共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("行{row}: 必須フィールド「{field}」がありません")]
    MalformedRow { row: usize, field: String },

    #[error("参照テーブルが空です（照合先がありません）")]
    EmptyReference,

    #[error("クエリがテキストではありません: {0}")]
    InvalidQuery(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
