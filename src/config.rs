use crate::error::{ColorWheelError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// デフォルトの参照テーブルファイル
    pub default_table: Option<PathBuf>,
    /// デフォルトの類似度メトリクス
    pub metric: String,
    /// この値未満のスコアに警告を付ける
    pub min_score: Option<f64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ColorWheelError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("color-wheel").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            default_table: None,
            metric: "token-sort".into(),
            min_score: None,
        }
    }

    pub fn set_default_table(&mut self, path: PathBuf) -> Result<()> {
        self.default_table = Some(path);
        self.save()
    }

    pub fn set_metric(&mut self, metric: String) -> Result<()> {
        self.metric = metric;
        self.save()
    }
}
