use serde::{Deserialize, Serialize};

use crate::error::{Result, ThreatSigError};
use crate::models::traits::IThreat;

/// 脅威の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatKind {
    Radar,
    Sonar,
}

impl ThreatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatKind::Radar => "radar",
            ThreatKind::Sonar => "sonar",
        }
    }
}

impl std::fmt::Display for ThreatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// レーダー脅威
///
/// 基準RCS（`base_rcs_dbsm`）と、その基準で得られる探知距離を定義します。
#[derive(Debug, Clone, PartialEq)]
pub struct RadarThreat {
    pub code: String,
    pub name: String,
    pub band: String,
    pub base_rcs_dbsm: f64,
    pub base_range_km: f64,
    pub max_range_km: f64,
}

/// ソナー脅威
///
/// 環境雑音レベルと、探知判定に必要なSNRマージンを定義します。
#[derive(Debug, Clone, PartialEq)]
pub struct SonarThreat {
    pub code: String,
    pub name: String,
    pub band: String,
    pub noise_floor_db: f64,
    pub detection_snr_db: f64,
}

/// 型付けされた脅威
#[derive(Debug, Clone, PartialEq)]
pub enum Threat {
    Radar(RadarThreat),
    Sonar(SonarThreat),
}

impl IThreat for RadarThreat {
    fn get_code(&self) -> &str {
        &self.code
    }

    fn kind(&self) -> ThreatKind {
        ThreatKind::Radar
    }
}

impl IThreat for SonarThreat {
    fn get_code(&self) -> &str {
        &self.code
    }

    fn kind(&self) -> ThreatKind {
        ThreatKind::Sonar
    }
}

impl IThreat for Threat {
    fn get_code(&self) -> &str {
        match self {
            Threat::Radar(t) => t.get_code(),
            Threat::Sonar(t) => t.get_code(),
        }
    }

    fn kind(&self) -> ThreatKind {
        match self {
            Threat::Radar(_) => ThreatKind::Radar,
            Threat::Sonar(_) => ThreatKind::Sonar,
        }
    }
}

/// `threats.csv` の生の1行
///
/// レーダー専用列とソナー専用列が同じ表に並ぶため、種類ごとの列は
/// すべて任意項目として読み込みます。型付けは [`ThreatRecord::to_threat`] で
/// 脅威が選択された時点で行います。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThreatRecord {
    pub code: String,
    #[serde(rename = "type")]
    pub threat_type: String,
    pub name: String,
    pub band: String,
    #[serde(default)]
    pub base_rcs_dbsm: Option<f64>,
    #[serde(default)]
    pub base_range_km: Option<f64>,
    #[serde(default)]
    pub max_range_km: Option<f64>,
    #[serde(default)]
    pub noise_floor_db: Option<f64>,
    #[serde(default)]
    pub detection_snr_db: Option<f64>,
}

impl ThreatRecord {
    /// 脅威コードの比較（大文字小文字を区別しない完全一致）
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.to_lowercase() == code.to_lowercase()
    }

    /// 生の行を型付けされた脅威に変換
    ///
    /// # エラー
    ///
    /// * `UnsupportedThreatType` - `type` 列が radar / sonar 以外
    /// * `MissingThreatField` - 種類に必要な列が空
    pub fn to_threat(&self) -> Result<Threat> {
        match self.threat_type.trim().to_lowercase().as_str() {
            "radar" => Ok(Threat::Radar(RadarThreat {
                code: self.code.clone(),
                name: self.name.clone(),
                band: self.band.clone(),
                base_rcs_dbsm: self.require(self.base_rcs_dbsm, "base_rcs_dbsm")?,
                base_range_km: self.require(self.base_range_km, "base_range_km")?,
                max_range_km: self.require(self.max_range_km, "max_range_km")?,
            })),
            "sonar" => Ok(Threat::Sonar(SonarThreat {
                code: self.code.clone(),
                name: self.name.clone(),
                band: self.band.clone(),
                noise_floor_db: self.require(self.noise_floor_db, "noise_floor_db")?,
                detection_snr_db: self.require(self.detection_snr_db, "detection_snr_db")?,
            })),
            other => Err(ThreatSigError::UnsupportedThreatType(other.to_string())),
        }
    }

    fn require(&self, value: Option<f64>, field: &'static str) -> Result<f64> {
        value.ok_or_else(|| ThreatSigError::MissingThreatField {
            code: self.code.clone(),
            field,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radar_record() -> ThreatRecord {
        ThreatRecord {
            code: "radar_basic".to_string(),
            threat_type: "Radar".to_string(),
            name: "Basic surface search radar".to_string(),
            band: "X".to_string(),
            base_rcs_dbsm: Some(-20.0),
            base_range_km: Some(50.0),
            max_range_km: Some(500.0),
            noise_floor_db: None,
            detection_snr_db: None,
        }
    }

    #[test]
    fn test_radar_record_to_threat() {
        let threat = radar_record().to_threat().unwrap();
        assert_eq!(threat.kind(), ThreatKind::Radar);
        assert_eq!(threat.get_code(), "radar_basic");
        match threat {
            Threat::Radar(r) => {
                assert_eq!(r.base_rcs_dbsm, -20.0);
                assert_eq!(r.max_range_km, 500.0);
            }
            Threat::Sonar(_) => panic!("expected radar"),
        }
    }

    #[test]
    fn test_missing_radar_column() {
        let mut record = radar_record();
        record.max_range_km = None;
        match record.to_threat() {
            Err(ThreatSigError::MissingThreatField { field, .. }) => {
                assert_eq!(field, "max_range_km");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_threat_type() {
        let mut record = radar_record();
        record.threat_type = "lidar".to_string();
        assert!(matches!(
            record.to_threat(),
            Err(ThreatSigError::UnsupportedThreatType(t)) if t == "lidar"
        ));
    }

    #[test]
    fn test_matches_code_case_insensitive() {
        let record = radar_record();
        assert!(record.matches_code("RADAR_BASIC"));
        assert!(!record.matches_code("radar"));
    }
}
