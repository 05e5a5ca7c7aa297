use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// アプリケーション設定
///
/// 全フィールドにデフォルトがあるため、一部だけ書かれた設定ファイルでも読み込める
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// catapult.logを検索するルートディレクトリ
    #[serde(default = "default_hls_dir")]
    pub hls_dir: PathBuf,
    /// CSV出力先（未設定なら出力しない）
    #[serde(default)]
    pub csv: Option<PathBuf>,
    /// ログレベル (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_hls_dir() -> PathBuf {
    PathBuf::from("hls")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hls_dir: default_hls_dir(),
            csv: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// デフォルトの場所から読み込み（ファイルがなければデフォルト設定）
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// 指定されたファイルから読み込み
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
    }

    /// 設定ファイルパスを取得 (~/.config/hls-runtimes/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        directories::BaseDirs::new()
            .map(|d| d.home_dir().join(".config/hls-runtimes/config.toml"))
    }

    /// コマンドライン引数で設定を上書き
    pub fn with_overrides(
        mut self,
        hls_dir: Option<PathBuf>,
        csv: Option<PathBuf>,
        log_level: Option<String>,
    ) -> Self {
        if let Some(hls_dir) = hls_dir {
            self.hls_dir = hls_dir;
        }
        if csv.is_some() {
            self.csv = csv;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }
}
