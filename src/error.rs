use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorWheelError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("テーブル読み込みエラー: {0}")]
    TableLoad(String),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error(transparent)]
    Common(#[from] color_wheel_common::Error),
}

pub type Result<T> = std::result::Result<T, ColorWheelError>;
