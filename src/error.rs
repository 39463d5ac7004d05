//! # Error モジュール
//!
//! threatsig 全体で使用するエラー型を定義します。
//!
//! すべての失敗は即座に呼び出し元のコマンドへ伝播し、`main` で
//! メッセージを表示して終了コード 1 で終了します。リトライや部分結果はありません。

use std::path::PathBuf;
use thiserror::Error;

/// threatsig の統一エラー型
#[derive(Debug, Error)]
pub enum ThreatSigError {
    /// 参照ファイルが存在しない
    #[error("CSV file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// 設定ファイルが存在しない
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown ship name: {0}")]
    UnknownShip(String),

    #[error("Unknown threat code: {0}")]
    UnknownThreat(String),

    /// シグネチャ表が存在しない艦艇IDを参照している
    #[error("{table} references unknown ship_id={ship_id}")]
    UnknownShipId { table: &'static str, ship_id: i64 },

    #[error("No {kind} data for ship_id={ship_id}")]
    NoSignatureData { kind: SignatureKind, ship_id: i64 },

    #[error("Unsupported threat type: {0}")]
    UnsupportedThreatType(String),

    #[error("Threat '{code}' is missing column '{field}'")]
    MissingThreatField { code: String, field: &'static str },

    #[error("Duplicate threat code: {0}")]
    DuplicateThreatCode(String),

    #[error("No radar results for threat '{0}'.")]
    NoRadarResults(String),

    #[error("Failed to write figure {}: {source}", .path.display())]
    Figure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// シグネチャの種類（エラーメッセージ用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureKind {
    Rcs,
    Acoustic,
}

impl std::fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureKind::Rcs => write!(f, "RCS"),
            SignatureKind::Acoustic => write!(f, "acoustic"),
        }
    }
}

pub type Result<T> = std::result::Result<T, ThreatSigError>;
