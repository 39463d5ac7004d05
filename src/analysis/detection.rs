use crate::models::{IDetector, RadarThreat, SonarCategory, SonarThreat};

/// 1桁（10倍）の距離変化に相当するRCS差 [dB]
///
/// レーダー方程式より探知距離は反射電力の4乗根に比例します。
const DB_PER_RANGE_DECADE: f64 = 40.0;

/// 中カテゴリの幅 [dB]
const SONAR_MEDIUM_SPAN_DB: f64 = 10.0;

/// レーダー探知距離の推定 [km]
///
/// 基準RCSとの差から距離をスケーリングし、`[0, max_range_km]` にクリップします。
///
/// # 引数
///
/// * `rcs_dbsm` - 艦艇のRCS [dBsm]
/// * `threat` - レーダー脅威
///
/// # 戻り値
///
/// 推定探知距離 [km]（丸め前）
///
/// ```
/// use threatsig::analysis::evaluate_radar_detection;
/// use threatsig::models::RadarThreat;
///
/// let threat = RadarThreat {
///     code: "radar_basic".to_string(),
///     name: "Basic".to_string(),
///     band: "X".to_string(),
///     base_rcs_dbsm: -20.0,
///     base_range_km: 50.0,
///     max_range_km: 500.0,
/// };
/// let range = evaluate_radar_detection(-10.0, &threat);
/// assert!((range - 88.91).abs() < 0.01);
/// ```
pub fn evaluate_radar_detection(rcs_dbsm: f64, threat: &RadarThreat) -> f64 {
    let delta_db = rcs_dbsm - threat.base_rcs_dbsm;
    let scale = 10f64.powf(delta_db / DB_PER_RANGE_DECADE);
    let range_km = threat.base_range_km * scale;
    range_km.min(threat.max_range_km).max(0.0)
}

/// ソナー探知確信度の推定
///
/// 雑音レベルに対するマージン `relative` で分類します。
/// * `relative < snr` → Low
/// * `snr <= relative < snr + 10` → Medium
/// * `relative >= snr + 10` → High
///
/// # 引数
///
/// * `level_db` - 艦艇の音響レベル [dB]
/// * `threat` - ソナー脅威
///
/// # 戻り値
///
/// 探知確信度カテゴリ
pub fn evaluate_sonar_detection(level_db: f64, threat: &SonarThreat) -> SonarCategory {
    let relative = level_db - threat.noise_floor_db;
    if relative < threat.detection_snr_db {
        SonarCategory::Low
    } else if relative < threat.detection_snr_db + SONAR_MEDIUM_SPAN_DB {
        SonarCategory::Medium
    } else {
        SonarCategory::High
    }
}

impl IDetector for RadarThreat {
    type Output = f64;

    fn evaluate(&self, signature_db: f64) -> f64 {
        evaluate_radar_detection(signature_db, self)
    }
}

impl IDetector for SonarThreat {
    type Output = SonarCategory;

    fn evaluate(&self, signature_db: f64) -> SonarCategory {
        evaluate_sonar_detection(signature_db, self)
    }
}
