//! # Config モジュール
//!
//! 参照データの配置と評価パラメータの設定を提供します。
//!
//! 設定はYAMLファイルから読み込むか、既定値をそのまま使用します。
//! YAMLに記載のない項目は既定値で補われます。
//!
//! ```yaml
//! data_dir: data
//! ships_file: ships.csv
//! rcs_file: rcs_signatures.csv
//! acoustic_file: acoustic_signatures.csv
//! threats_file: threats.csv
//! reference_band: "125 Hz"
//! figures_dir: docs/figures
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ThreatSigError};

/// 既定の音響参照バンド
pub const DEFAULT_REFERENCE_BAND: &str = "125 Hz";

/// データ設定
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DataConfig {
    /// 参照表を格納するディレクトリ
    pub data_dir: PathBuf,
    pub ships_file: String,
    pub rcs_file: String,
    pub acoustic_file: String,
    pub threats_file: String,
    /// 音響シグネチャ選択時の優先バンド
    pub reference_band: String,
    /// 図の出力先ディレクトリ
    pub figures_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            ships_file: "ships.csv".to_string(),
            rcs_file: "rcs_signatures.csv".to_string(),
            acoustic_file: "acoustic_signatures.csv".to_string(),
            threats_file: "threats.csv".to_string(),
            reference_band: DEFAULT_REFERENCE_BAND.to_string(),
            figures_dir: PathBuf::from("docs").join("figures"),
        }
    }
}

impl DataConfig {
    /// YAMLファイルから設定を読み込み
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // ファイル存在チェック
        if !path.exists() {
            return Err(ThreatSigError::ConfigNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path).map_err(|source| ThreatSigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: DataConfig =
            serde_yaml::from_str(&contents).map_err(|source| ThreatSigError::Config {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;

        Ok(config)
    }

    /// 設定の基本的な検証
    pub fn validate(&self) -> Result<()> {
        let files = [
            ("ships_file", &self.ships_file),
            ("rcs_file", &self.rcs_file),
            ("acoustic_file", &self.acoustic_file),
            ("threats_file", &self.threats_file),
        ];
        for (key, value) in files {
            if value.trim().is_empty() {
                return Err(ThreatSigError::InvalidConfig(format!("{} must not be empty", key)));
            }
        }

        if self.reference_band.trim().is_empty() {
            return Err(ThreatSigError::InvalidConfig(
                "reference_band must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn ships_path(&self) -> PathBuf {
        self.data_dir.join(&self.ships_file)
    }

    pub fn rcs_path(&self) -> PathBuf {
        self.data_dir.join(&self.rcs_file)
    }

    pub fn acoustic_path(&self) -> PathBuf {
        self.data_dir.join(&self.acoustic_file)
    }

    pub fn threats_path(&self) -> PathBuf {
        self.data_dir.join(&self.threats_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_paths() {
        let config = DataConfig::default();
        assert_eq!(config.ships_path(), Path::new("data").join("ships.csv"));
        assert_eq!(config.rcs_path(), Path::new("data").join("rcs_signatures.csv"));
        assert_eq!(config.reference_band, "125 Hz");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_dir: /srv/threatsig\nreference_band: \"250 Hz\"").unwrap();

        let config = DataConfig::from_file(file.path()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/threatsig"));
        assert_eq!(config.reference_band, "250 Hz");
        assert_eq!(config.threats_file, "threats.csv");
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        let config = DataConfig::from_file("threatsig.yaml").unwrap();
        assert_eq!(config, DataConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        let result = DataConfig::from_file("/nonexistent/threatsig.yaml");
        assert!(matches!(result, Err(ThreatSigError::ConfigNotFound(_))));
    }

    #[test]
    fn test_empty_reference_band_rejected() {
        let config = DataConfig {
            reference_band: "  ".to_string(),
            ..DataConfig::default()
        };
        assert!(matches!(config.validate(), Err(ThreatSigError::InvalidConfig(_))));
    }
}
