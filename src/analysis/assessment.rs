use tracing::debug;

use crate::data::DataBundle;
use crate::error::Result;
use crate::models::detection::round_range_km;
use crate::models::{
    DetectionMetric, DetectionResult, IDetector, IThreat, RadarThreat, Ship, SonarCategory,
    SonarThreat, Threat,
};

use super::selectors::{select_acoustic_for_ship, select_rcs_for_ship};

/// 1組の (艦艇, 脅威) を評価
///
/// 脅威の種類に応じてシグネチャを選択し、評価器を適用して
/// 英独の説明文付きの結果を構築します。
///
/// # 引数
///
/// * `bundle` - 参照表一式
/// * `ship` - 評価対象の艦艇
/// * `threat` - 型付けされた脅威
/// * `reference_band` - ソナー評価で優先する音響バンド
///
/// # 戻り値
///
/// 評価結果。シグネチャが無い場合は `NoSignatureData`
pub fn assess(
    bundle: &DataBundle,
    ship: &Ship,
    threat: &Threat,
    reference_band: &str,
) -> Result<DetectionResult> {
    let result = match threat {
        Threat::Radar(radar) => {
            let rcs_dbsm = select_rcs_for_ship(&bundle.rcs, ship.id)?;
            radar_result(ship, radar, radar.evaluate(rcs_dbsm))
        }
        Threat::Sonar(sonar) => {
            let level_db = select_acoustic_for_ship(&bundle.acoustic, ship.id, reference_band)?;
            sonar_result(ship, sonar, sonar.evaluate(level_db))
        }
    };

    debug!(
        ship = %ship.name,
        threat = threat.get_code(),
        value = %result.metric.display_value(),
        "評価完了"
    );
    Ok(result)
}

/// 全艦艇を1つの脅威に対して評価（艦艇表の順序）
pub fn assess_all(
    bundle: &DataBundle,
    threat: &Threat,
    reference_band: &str,
) -> Result<Vec<DetectionResult>> {
    bundle
        .ships
        .iter()
        .map(|ship| assess(bundle, ship, threat, reference_band))
        .collect()
}

/// レーダー評価結果の構築
///
/// 説明文は丸め済みの指標値から組み立てます。
pub fn radar_result(ship: &Ship, threat: &RadarThreat, range_km: f64) -> DetectionResult {
    let rounded_km = round_range_km(range_km);
    let (description_en, description_de) = radar_texts(&ship.name, threat, rounded_km);
    DetectionResult {
        ship_name: ship.name.clone(),
        threat_code: threat.code.clone(),
        threat_name: threat.name.clone(),
        metric: DetectionMetric::Radar { range_km: rounded_km },
        description_en,
        description_de,
    }
}

pub fn sonar_result(ship: &Ship, threat: &SonarThreat, category: SonarCategory) -> DetectionResult {
    let (description_en, description_de) = sonar_texts(&ship.name, threat, category);
    DetectionResult {
        ship_name: ship.name.clone(),
        threat_code: threat.code.clone(),
        threat_name: threat.name.clone(),
        metric: DetectionMetric::sonar(category),
        description_en,
        description_de,
    }
}

fn radar_texts(ship_name: &str, threat: &RadarThreat, range_km: f64) -> (String, String) {
    let en = format!(
        "Estimated radar detection range for {} with threat '{}' is about {:.1} km \
         (max {:.1} km, synthetic RCS-based estimate).",
        ship_name, threat.code, range_km, threat.max_range_km
    );
    let de = format!(
        "Geschätzte Radar-Erfassungsreichweite für {} mit Bedrohung '{}' beträgt ca. {:.1} km \
         (Maximalreichweite {:.1} km, basierend auf synthetischen RCS-Daten).",
        ship_name, threat.code, range_km, threat.max_range_km
    );
    (en, de)
}

fn sonar_texts(ship_name: &str, threat: &SonarThreat, category: SonarCategory) -> (String, String) {
    let (level_en, reason_en, level_de, reason_de) = match category {
        SonarCategory::Low => (
            "LOW",
            "signal close to or below noise floor",
            "NIEDRIG",
            "Signal liegt nahe am oder unter dem Geräuschpegel",
        ),
        SonarCategory::Medium => (
            "MEDIUM",
            "moderate margin above noise floor",
            "MITTEL",
            "moderater Abstand über dem Geräuschpegel",
        ),
        SonarCategory::High => (
            "HIGH",
            "signal clearly above noise floor",
            "HOCH",
            "Signal deutlich über dem Geräuschpegel",
        ),
    };

    let en = format!(
        "Estimated detection probability for {} with sonar threat '{}' is {} ({}).",
        ship_name, threat.code, level_en, reason_en
    );
    let de = format!(
        "Die geschätzte Entdeckungswahrscheinlichkeit für {} mit Sonar-Bedrohung '{}' ist {} ({}).",
        ship_name, threat.code, level_de, reason_de
    );
    (en, de)
}
