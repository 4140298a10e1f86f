use clap::{Parser, Subcommand};
use color_wheel_common::ScoreMetric;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "color-wheel")]
#[command(about = "あいまいな色名を正規の色レコードへ解決するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 色名クエリを参照テーブルと照合する
    Resolve {
        /// 照合する色名（自由入力、複数指定可）
        queries: Vec<String>,

        /// 参照テーブルファイル（CSV/JSON、複数指定時は順に連結）
        #[arg(short, long)]
        table: Vec<PathBuf>,

        /// クエリをJSONファイルから読み込む（文字列の配列）
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// 結果をJSONで保存するファイル
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 類似度メトリクス (token-sort/ratio/jaro-winkler、省略時は設定値)
        #[arg(short, long)]
        metric: Option<ScoreMetric>,

        /// このスコア未満の結果に警告を付ける（0-100）
        #[arg(long)]
        min_score: Option<f64>,
    },

    /// 参照テーブルを構築して内容を確認する
    Table {
        /// 参照テーブルファイル（CSV/JSON、複数指定時は順に連結）
        #[arg(short, long)]
        table: Vec<PathBuf>,

        /// テーブルをJSONで保存するファイル
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// デフォルトの参照テーブルファイルを設定
        #[arg(long)]
        set_table: Option<PathBuf>,

        /// デフォルトのメトリクスを設定 (token-sort/ratio/jaro-winkler)
        #[arg(long)]
        set_metric: Option<ScoreMetric>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
