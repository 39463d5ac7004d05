//! # Commands モジュール
//!
//! CLI の各サブコマンドの処理を提供します。
//!
//! 各コマンドは呼び出しごとに参照表を読み込み直し、表示用の文字列を返します。
//! 標準出力への書き出しは `main` が行います。

use tracing::info;

use crate::analysis::{assess, assess_all};
use crate::config::DataConfig;
use crate::data::DataBundle;
use crate::error::Result;
use crate::figures::{FigurePaths, export_radar_detection_figure};
use crate::models::IThreat;
use crate::reporting::{format_result_text, format_ship_line, format_threat_line, matrix_markdown};

/// 艦艇一覧
pub fn list_ships(config: &DataConfig) -> Result<String> {
    let bundle = DataBundle::load(config)?;
    let mut out = String::from("Available ships:\n\n");
    for ship in &bundle.ships {
        out.push_str(&format_ship_line(ship));
        out.push('\n');
    }
    Ok(out)
}

/// 脅威一覧
pub fn list_threats(config: &DataConfig) -> Result<String> {
    let bundle = DataBundle::load(config)?;
    let mut out = String::from("Available threats:\n\n");
    for record in &bundle.threats {
        out.push_str(&format_threat_line(record));
        out.push('\n');
    }
    Ok(out)
}

/// 1隻の艦艇を1つの脅威に対して評価し、英独の説明文を返す
pub fn evaluate(config: &DataConfig, ship_name: &str, threat_code: &str) -> Result<String> {
    let bundle = DataBundle::load(config)?;
    let ship = bundle.find_ship(ship_name)?;
    let threat = bundle.find_threat(threat_code)?;

    info!(ship = %ship.name, threat = threat.get_code(), kind = %threat.kind(), "単体評価");
    let result = assess(&bundle, ship, &threat, &config.reference_band)?;
    Ok(format_result_text(&result))
}

/// 全艦艇 × 1脅威の Markdown 表
pub fn matrix(config: &DataConfig, threat_code: &str) -> Result<String> {
    let bundle = DataBundle::load(config)?;
    let threat = bundle.find_threat(threat_code)?;

    info!(threat = threat.get_code(), ships = bundle.ships.len(), "マトリクス評価");
    let results = assess_all(&bundle, &threat, &config.reference_band)?;
    Ok(matrix_markdown(&results))
}

/// レーダー探知距離の棒グラフを出力
pub fn figure(config: &DataConfig, threat_code: &str) -> Result<FigurePaths> {
    let bundle = DataBundle::load(config)?;
    let threat = bundle.find_threat(threat_code)?;

    let results = assess_all(&bundle, &threat, &config.reference_band)?;
    export_radar_detection_figure(threat.get_code(), &results, &config.figures_dir)
}
