//! Color Wheel Common Library
//!
//! CLIと共有される型・参照テーブル構築・ファジー照合ロジック

pub mod types;
pub mod error;
pub mod table;
pub mod scoring;
pub mod matcher;

pub use types::{ChannelColumns, ChannelValue, ColorRecord, MatchResult, RawRow, NAME_COLUMN};
pub use error::{Error, Result};
pub use table::ReferenceTable;
pub use scoring::ScoreMetric;
pub use matcher::{best_match_with, match_colors, queries_from_json};
