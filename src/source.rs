//! 参照テーブルの取得境界
//!
//! 外部プロバイダの出力（CSV/JSONファイル）を生の行データへ読み込む。
//! ネットワークからの取得はスコープ外で、ここではファイルがその代替。
//!
//! - JSON: フラットな文字列オブジェクトの配列
//! - CSV: 先頭行がカラム名（ダブルクォート対応）

use crate::error::{ColorWheelError, Result};
use color_wheel_common::RawRow;
use std::collections::HashMap;
use std::path::Path;

/// テーブルファイルを読み込んで生の行データを返す
pub fn load_raw_rows(path: &Path) -> Result<Vec<RawRow>> {
    if !path.exists() {
        return Err(ColorWheelError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let rows: Vec<RawRow> = serde_json::from_str(&content)?;
            Ok(rows)
        }
        Some("csv") => parse_csv(&content),
        _ => Err(ColorWheelError::TableLoad(format!(
            "未対応の拡張子です: {} (csv/jsonを指定してください)",
            path.display()
        ))),
    }
}

/// CSV文字列を生の行データへ変換する
///
/// 先頭行をカラム名として扱い、以降の各行をカラム名→値のマップにする。
/// カラム数より短い行は存在するフィールドのみ取り込む（必須フィールドの
/// 検証はテーブル構築側で行う）。
pub fn parse_csv(content: &str) -> Result<Vec<RawRow>> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| ColorWheelError::TableLoad("ヘッダー行がありません".to_string()))?;
    let columns: Vec<String> = parse_csv_line(header)
        .into_iter()
        .map(|field| field.to_string())
        .collect();

    if columns.is_empty() {
        return Err(ColorWheelError::TableLoad("ヘッダー行が空です".to_string()));
    }

    let mut rows = Vec::new();
    for line in lines {
        let fields = parse_csv_line(line);
        let map: HashMap<String, String> = columns
            .iter()
            .cloned()
            .zip(fields.into_iter().map(|field| field.to_string()))
            .collect();
        rows.push(RawRow { fields: map });
    }

    Ok(rows)
}

/// CSV行をパース（ダブルクォート対応）
fn parse_csv_line(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut field_start = 0;
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == ',' && !in_quotes {
            // フィールド終了
            let field = &line[field_start..byte_index(line, i)];
            fields.push(trim_quotes(field));
            field_start = byte_index(line, i + 1);
        }
        i += 1;
    }

    // 最後のフィールド
    if field_start <= line.len() {
        let field = &line[field_start..];
        fields.push(trim_quotes(field));
    }

    fields
}

fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn trim_quotes(s: &str) -> &str {
    let s = s.trim();
    if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CSV: &str = r#"Name,Hex,Red,Green,Blue
"Red","#FF0000",100,0,0
"Azure (web color)","#F0FFFF",94,100,100
"Smoky black","#100C08",6,5,3
"#;

    #[test]
    fn test_parse_csv() {
        let rows = parse_csv(TEST_CSV).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].get("Name"), Some("Red"));
        assert_eq!(rows[0].get("Hex"), Some("#FF0000"));
        assert_eq!(rows[1].get("Name"), Some("Azure (web color)"));
        assert_eq!(rows[2].get("Blue"), Some("3"));
    }

    #[test]
    fn test_parse_csv_quoted_comma() {
        let csv = "Name,Red,Green,Blue\n\"Orange, burnt\",80,33,0\n";
        let rows = parse_csv(csv).unwrap();
        assert_eq!(rows[0].get("Name"), Some("Orange, burnt"));
    }

    #[test]
    fn test_parse_csv_short_row() {
        // カラム数に満たない行は存在するフィールドのみ取り込む
        let csv = "Name,Red,Green,Blue\nRed,100\n";
        let rows = parse_csv(csv).unwrap();
        assert_eq!(rows[0].get("Red"), Some("100"));
        assert_eq!(rows[0].get("Green"), None);
    }

    #[test]
    fn test_parse_csv_empty_content() {
        let result = parse_csv("");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_csv_skips_blank_lines() {
        let csv = "Name,Red,Green,Blue\n\nRed,100,0,0\n\n";
        let rows = parse_csv(csv).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_load_raw_rows_not_found() {
        let result = load_raw_rows(Path::new("/nonexistent/colors.csv"));
        assert!(matches!(result, Err(ColorWheelError::FileNotFound(_))));
    }
}
