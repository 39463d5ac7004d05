use tracing::trace;

use crate::error::{Result, SignatureKind, ThreatSigError};
use crate::models::{AcousticSample, RcsSample};

/// 艦艇のRCS値を選択
///
/// 該当艦艇の全サンプルのうち最大値（最も反射の強いアスペクト）を
/// 保守的な被探知性の推定値として返します。
///
/// # 引数
///
/// * `rcs` - RCSサンプル表
/// * `ship_id` - 対象艦艇のID
///
/// # 戻り値
///
/// 最大RCS [dBsm]。該当行がなければ `NoSignatureData`
pub fn select_rcs_for_ship(rcs: &[RcsSample], ship_id: i64) -> Result<f64> {
    let selected = rcs
        .iter()
        .filter(|r| r.ship_id == ship_id)
        .map(|r| r.rcs_dbsm)
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))));

    let value = selected.ok_or(ThreatSigError::NoSignatureData {
        kind: SignatureKind::Rcs,
        ship_id,
    })?;

    trace!(ship_id, rcs_dbsm = value, "RCSを選択しました");
    Ok(value)
}

/// 艦艇の音響レベルを選択
///
/// 1. 艦艇IDとバンドが一致する行があれば、最初の行の値をそのまま使う
/// 2. なければ艦艇の全バンドの算術平均を使う
/// 3. 行が1つもなければ `NoSignatureData`
///
/// # 引数
///
/// * `acoustic` - 音響サンプル表
/// * `ship_id` - 対象艦艇のID
/// * `band_label` - 優先するバンド（完全一致で比較）
///
/// # 戻り値
///
/// 音響レベル [dB]
pub fn select_acoustic_for_ship(
    acoustic: &[AcousticSample],
    ship_id: i64,
    band_label: &str,
) -> Result<f64> {
    if let Some(sample) = acoustic
        .iter()
        .find(|a| a.ship_id == ship_id && a.band_label == band_label)
    {
        trace!(ship_id, band = band_label, level_db = sample.level_db, "バンド一致");
        return Ok(sample.level_db);
    }

    let levels: Vec<f64> = acoustic
        .iter()
        .filter(|a| a.ship_id == ship_id)
        .map(|a| a.level_db)
        .collect();

    if levels.is_empty() {
        return Err(ThreatSigError::NoSignatureData {
            kind: SignatureKind::Acoustic,
            ship_id,
        });
    }

    let mean = levels.iter().sum::<f64>() / levels.len() as f64;
    trace!(ship_id, band = band_label, rows = levels.len(), level_db = mean, "全バンド平均にフォールバック");
    Ok(mean)
}
