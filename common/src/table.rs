//! 参照テーブル構築モジュール
//!
//! プロバイダから受け取った生の行データを正規化して参照テーブルを組み立てる。
//! - チャンネル値を百分率から0-255へ換算
//! - 名前の括弧付きサフィックスを除去
//! - 名前の重複を除去（最初の出現を残す）

use crate::error::{Error, Result};
use crate::types::{ChannelColumns, ChannelValue, ColorRecord, RawRow, NAME_COLUMN};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

/// 重複除去済みの参照テーブル
///
/// レコードは挿入順を保持する。同一性は`name`で判定し、
/// 名前からレコード位置を引くインデックスを持つ。
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReferenceTable {
    /// 全レコード（挿入順）
    records: Vec<ColorRecord>,
    /// 名前→レコード位置
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ReferenceTable {
    /// 生の行データから参照テーブルを構築する
    pub fn from_raw_rows(rows: &[RawRow], columns: &ChannelColumns) -> Result<Self> {
        let mut table = Self::default();
        table.extend_from_raw_rows(rows, columns)?;
        Ok(table)
    }

    /// 追加の行データを取り込む
    ///
    /// 複数ソースを連結する場合に使う。重複除去は既存レコードも
    /// 含めて適用され、行番号はバッチ内の1始まり。
    pub fn extend_from_raw_rows(&mut self, rows: &[RawRow], columns: &ChannelColumns) -> Result<()> {
        for (i, row) in rows.iter().enumerate() {
            let raw_name = required_field(row, i + 1, NAME_COLUMN)?;
            let red = parse_channel(required_field(row, i + 1, &columns.red)?);
            let green = parse_channel(required_field(row, i + 1, &columns.green)?);
            let blue = parse_channel(required_field(row, i + 1, &columns.blue)?);

            let name = clean_name(raw_name);

            // 最初の出現を残す
            if self.index.contains_key(&name) {
                continue;
            }

            let extras: HashMap<String, String> = row
                .fields
                .iter()
                .filter(|(k, _)| k.as_str() != NAME_COLUMN && !columns.contains(k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();

            self.index.insert(name.clone(), self.records.len());
            self.records.push(ColorRecord {
                name,
                red,
                green,
                blue,
                extras,
            });
        }

        Ok(())
    }

    /// 全レコードを取得（挿入順）
    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    /// 名前でレコードを取得
    pub fn get(&self, name: &str) -> Option<&ColorRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// 色名の一覧を取得（挿入順）
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// レコード数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// レコードが1件もないか
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// パース不能チャンネルの件数
    pub fn unparsable_channels(&self) -> usize {
        self.records
            .iter()
            .map(|r| {
                [&r.red, &r.green, &r.blue]
                    .iter()
                    .filter(|v| v.is_unparsable())
                    .count()
            })
            .sum()
    }
}

/// 必須フィールドを取得（欠落・空はエラー）
fn required_field<'a>(row: &'a RawRow, row_number: usize, field: &str) -> Result<&'a str> {
    match row.get(field) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MalformedRow {
            row: row_number,
            field: field.to_string(),
        }),
    }
}

/// 名前から括弧付きサフィックスを除去する
///
/// 例: "Azure (web color)" → "Azure"
fn clean_name(raw: &str) -> String {
    lazy_static! {
        static ref PAREN_SUFFIX_RE: Regex = Regex::new(r" \([^)]*\)").unwrap();
    }
    PAREN_SUFFIX_RE.replace_all(raw.trim(), "").trim().to_string()
}

/// チャンネル値を百分率として解釈し0-255へ換算する
///
/// 末尾の`%`は許容する。パースできない値、および換算すると
/// 0-255を外れる値はマーカーとして元の文字列を保持する。
fn parse_channel(raw: &str) -> ChannelValue {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    match digits.parse::<f64>() {
        Ok(percent) if percent.is_finite() && (0.0..=100.0).contains(&percent) => {
            ChannelValue::Value(percent / 100.0 * 255.0)
        }
        _ => ChannelValue::Unparsable(trimmed.to_string()),
    }
}
