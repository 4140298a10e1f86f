use clap::Parser;
use color_wheel_common::{match_colors, queries_from_json, ChannelColumns, MatchResult, ReferenceTable, ScoreMetric};
use color_wheel_rust::{cli, config, error, source};

use cli::{Cli, Commands};
use config::Config;
use error::{ColorWheelError, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let verbose = cli.verbose;

    match cli.command {
        Commands::Resolve { queries, table, file, output, metric, min_score } => {
            println!("🎨 color-wheel-rust - 色名解決\n");

            // 1. 参照テーブル構築
            println!("[1/3] 参照テーブルを構築中...");
            let table_paths = resolve_table_paths(table, &config)?;
            let (reference, raw_count) = build_reference(&table_paths, verbose)?;
            println!(
                "✔ {}色を登録（重複{}件を除外）\n",
                reference.len(),
                raw_count - reference.len()
            );

            // 2. クエリ収集
            let mut queries = queries;
            if let Some(path) = file {
                queries.extend(load_queries(&path)?);
            }
            if queries.is_empty() {
                return Err(ColorWheelError::Config(
                    "クエリが指定されていません（引数または--fileで指定してください）".to_string(),
                ));
            }

            // 3. 照合
            println!("[2/3] {}件のクエリを照合中...", queries.len());
            let metric = resolve_metric(metric, &config)?;
            let results = match_colors(&reference, &queries, metric)?;
            println!("✔ 照合完了（メトリクス: {}）\n", metric);

            // 4. 結果表示・保存
            println!("[3/3] 結果:");
            print_results(&results, min_score.or(config.min_score));

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&results)?;
                std::fs::write(&path, json)?;
                println!("\n✔ 結果を保存: {}", path.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Table { table, output } => {
            println!("📋 color-wheel-rust - 参照テーブル\n");

            println!("[1/2] 参照テーブルを構築中...");
            let table_paths = resolve_table_paths(table, &config)?;
            let (reference, raw_count) = build_reference(&table_paths, verbose)?;
            println!(
                "✔ {}色を登録（重複{}件を除外）",
                reference.len(),
                raw_count - reference.len()
            );

            let unparsable = reference.unparsable_channels();
            if unparsable > 0 {
                println!("⚠ パース不能なチャンネル値: {}件", unparsable);
            }

            println!("\n[2/2] 一覧:");
            print_table(&reference);

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&reference)?;
                std::fs::write(&path, json)?;
                println!("\n✔ テーブルを保存: {}", path.display());
            }

            println!("\n✅ 完了");
        }

        Commands::Config { set_table, set_metric, show } => {
            let mut config = config;

            if let Some(path) = set_table {
                config.set_default_table(path)?;
                println!("✔ デフォルトテーブルを設定しました");
            }

            if let Some(metric) = set_metric {
                config.set_metric(metric.to_string())?;
                println!("✔ メトリクスを設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  テーブル: {}",
                    config
                        .default_table
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".to_string())
                );
                println!("  メトリクス: {}", config.metric);
                println!(
                    "  警告スコア: {}",
                    config
                        .min_score
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "未設定".to_string())
                );
            }
        }
    }

    Ok(())
}

/// テーブルファイルの指定を解決する（引数 > 設定ファイル）
fn resolve_table_paths(paths: Vec<PathBuf>, config: &Config) -> Result<Vec<PathBuf>> {
    if !paths.is_empty() {
        return Ok(paths);
    }

    match &config.default_table {
        Some(path) => Ok(vec![path.clone()]),
        None => Err(ColorWheelError::Config(
            "参照テーブルが指定されていません。--table か `color-wheel config --set-table` で設定してください".to_string(),
        )),
    }
}

/// テーブルファイル群を順に連結して参照テーブルを構築する
fn build_reference(paths: &[PathBuf], verbose: bool) -> Result<(ReferenceTable, usize)> {
    let columns = ChannelColumns::default();
    let mut reference = ReferenceTable::default();
    let mut raw_count = 0;

    for path in paths {
        let rows = source::load_raw_rows(path)?;
        if verbose {
            println!("  - {}: {}行", path.display(), rows.len());
        }
        raw_count += rows.len();
        reference
            .extend_from_raw_rows(&rows, &columns)
            .map_err(|e| ColorWheelError::TableLoad(format!("{}: {}", path.display(), e)))?;
    }

    Ok((reference, raw_count))
}

/// クエリをJSONファイルから読み込む
fn load_queries(path: &PathBuf) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&content)?;
    Ok(queries_from_json(&values)?)
}

/// メトリクスの指定を解決する（引数 > 設定ファイル > デフォルト）
fn resolve_metric(metric: Option<ScoreMetric>, config: &Config) -> Result<ScoreMetric> {
    if let Some(metric) = metric {
        return Ok(metric);
    }
    if config.metric.is_empty() {
        return Ok(ScoreMetric::default());
    }
    config
        .metric
        .parse()
        .map_err(ColorWheelError::Config)
}

/// 照合結果を一覧表示する
fn print_results(results: &[MatchResult], min_score: Option<f64>) {
    println!(
        "  {:<20} {:<22} {:>6}  {:>6} {:>6} {:>6}",
        "クエリ", "色名", "スコア", "R", "G", "B"
    );

    for result in results {
        let warn = match min_score {
            Some(threshold) if result.score < threshold => "⚠",
            _ => " ",
        };
        println!(
            "{} {:<20} {:<22} {:>6.1}  {:>6} {:>6} {:>6}",
            warn,
            result.query,
            result.name,
            result.score,
            result.record.red,
            result.record.green,
            result.record.blue,
        );
    }
}

/// 参照テーブルを一覧表示する
fn print_table(reference: &ReferenceTable) {
    println!("  {:<22} {:>6} {:>6} {:>6}", "色名", "R", "G", "B");

    for record in reference.records() {
        println!(
            "  {:<22} {:>6} {:>6} {:>6}",
            record.name, record.red, record.green, record.blue
        );
    }
}
