//! 参照テーブルと照合結果の型定義
//!
//! CLIとコアで共有される型:
//! - RawRow: プロバイダから受け取る生の1行（カラム名→値）
//! - ChannelValue: 0-255へ換算済みのチャンネル値、またはパース不能マーカー
//! - ColorRecord: 正規化済みの色レコード
//! - MatchResult: 1クエリ分の照合結果

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 名前カラムの識別子
pub const NAME_COLUMN: &str = "Name";

/// プロバイダ出力の生の1行
///
/// カラム構成はソースに依存するためマップで保持する。
/// ヘッダー相当の情報はキー集合そのもの。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(flatten)]
    pub fields: HashMap<String, String>,
}

impl RawRow {
    /// カラム名と値のペアから行を組み立てる
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// カラムの値を取得
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(|s| s.as_str())
    }
}

/// チャンネル値カラムの識別子（3列）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelColumns {
    pub red: String,
    pub green: String,
    pub blue: String,
}

impl Default for ChannelColumns {
    fn default() -> Self {
        Self {
            red: "Red".to_string(),
            green: "Green".to_string(),
            blue: "Blue".to_string(),
        }
    }
}

impl ChannelColumns {
    /// 指定カラムがチャンネル列かどうか
    pub fn contains(&self, column: &str) -> bool {
        column == self.red || column == self.green || column == self.blue
    }
}

/// チャンネル値
///
/// 百分率ソースから0-255へ換算済みの値、またはパースできなかった
/// 元の文字列。黙って0に潰さない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelValue {
    /// 0-255の有限値
    Value(f64),
    /// パース不能マーカー（元の文字列を保持）
    Unparsable(String),
}

impl ChannelValue {
    /// 数値として取得（パース不能ならNone）
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ChannelValue::Value(v) => Some(*v),
            ChannelValue::Unparsable(_) => None,
        }
    }

    /// パース不能マーカーかどうか
    pub fn is_unparsable(&self) -> bool {
        matches!(self, ChannelValue::Unparsable(_))
    }
}

impl std::fmt::Display for ChannelValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelValue::Value(v) => write!(f, "{:.1}", v),
            ChannelValue::Unparsable(raw) => write!(f, "{}", raw),
        }
    }
}

/// 正規化済みの色レコード
///
/// `name`はサフィックス除去・重複除去後の一意な識別子。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub name: String,
    pub red: ChannelValue,
    pub green: ChannelValue,
    pub blue: ChannelValue,

    /// パススルーの追加カラム（16進表記など）
    #[serde(default)]
    pub extras: HashMap<String, String>,
}

/// 1クエリ分の照合結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// 入力クエリ
    pub query: String,
    /// 照合された正規の色名
    pub name: String,
    /// 類似度スコア（0-100）
    pub score: f64,
    /// 照合先レコードの属性
    pub record: ColorRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_row_get() {
        let row = RawRow::from_pairs(&[("Name", "Red"), ("Red", "100")]);
        assert_eq!(row.get("Name"), Some("Red"));
        assert_eq!(row.get("Hex"), None);
    }

    #[test]
    fn test_channel_columns_default() {
        let columns = ChannelColumns::default();
        assert!(columns.contains("Red"));
        assert!(columns.contains("Green"));
        assert!(columns.contains("Blue"));
        assert!(!columns.contains("Name"));
    }

    #[test]
    fn test_channel_value_as_f64() {
        assert_eq!(ChannelValue::Value(127.5).as_f64(), Some(127.5));
        assert_eq!(ChannelValue::Unparsable("N/A".to_string()).as_f64(), None);
    }

    #[test]
    fn test_channel_value_serialize() {
        let value = serde_json::to_string(&ChannelValue::Value(255.0)).expect("シリアライズ失敗");
        assert_eq!(value, "255.0");

        let marker =
            serde_json::to_string(&ChannelValue::Unparsable("N/A".to_string())).expect("シリアライズ失敗");
        assert_eq!(marker, "\"N/A\"");
    }

    #[test]
    fn test_channel_value_deserialize() {
        let value: ChannelValue = serde_json::from_str("127.5").expect("デシリアライズ失敗");
        assert_eq!(value, ChannelValue::Value(127.5));

        let marker: ChannelValue = serde_json::from_str("\"N/A\"").expect("デシリアライズ失敗");
        assert_eq!(marker, ChannelValue::Unparsable("N/A".to_string()));
    }

    #[test]
    fn test_raw_row_deserialize_flatten() {
        let json = r#"{"Name": "Azure", "Red": "0", "Green": "50", "Blue": "100", "Hex": "#007FFF"}"#;
        let row: RawRow = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(row.get("Name"), Some("Azure"));
        assert_eq!(row.get("Hex"), Some("#007FFF"));
    }
}
