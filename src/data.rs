//! # Data モジュール
//!
//! 4つの参照表（艦艇、RCSサンプル、音響サンプル、脅威定義）をCSVから
//! 読み込み、メモリ上の表として保持します。
//!
//! 参照表は呼び出しごとに読み込み直し、キャッシュや変更は行いません。

use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, trace};

use crate::config::DataConfig;
use crate::error::{Result, ThreatSigError};
use crate::models::{AcousticSample, RcsSample, Ship, Threat, ThreatRecord};

/// 参照表一式
#[derive(Debug, Clone, Default)]
pub struct DataBundle {
    pub ships: Vec<Ship>,
    pub rcs: Vec<RcsSample>,
    pub acoustic: Vec<AcousticSample>,
    pub threats: Vec<ThreatRecord>,
}

impl DataBundle {
    /// 設定に従って全ての参照表を読み込み、整合性を検証します
    pub fn load(config: &DataConfig) -> Result<Self> {
        let bundle = Self {
            ships: load_csv(&config.ships_path())?,
            rcs: load_csv(&config.rcs_path())?,
            acoustic: load_csv(&config.acoustic_path())?,
            threats: load_csv(&config.threats_path())?,
        };

        debug!(
            ships = bundle.ships.len(),
            rcs = bundle.rcs.len(),
            acoustic = bundle.acoustic.len(),
            threats = bundle.threats.len(),
            "参照表を読み込みました"
        );

        bundle.validate()?;
        Ok(bundle)
    }

    /// 参照整合性の検証
    ///
    /// * シグネチャ表の `ship_id` は全て艦艇表に存在すること
    /// * 脅威コードは大文字小文字を区別せず一意であること
    pub fn validate(&self) -> Result<()> {
        let ship_ids: HashSet<i64> = self.ships.iter().map(|s| s.id).collect();

        if let Some(sample) = self.rcs.iter().find(|r| !ship_ids.contains(&r.ship_id)) {
            return Err(ThreatSigError::UnknownShipId {
                table: "rcs_signatures",
                ship_id: sample.ship_id,
            });
        }
        if let Some(sample) = self.acoustic.iter().find(|a| !ship_ids.contains(&a.ship_id)) {
            return Err(ThreatSigError::UnknownShipId {
                table: "acoustic_signatures",
                ship_id: sample.ship_id,
            });
        }

        let mut codes = HashSet::new();
        for record in &self.threats {
            if !codes.insert(record.code.to_lowercase()) {
                return Err(ThreatSigError::DuplicateThreatCode(record.code.clone()));
            }
        }

        Ok(())
    }

    /// 艦艇名で検索（大文字小文字を区別しない完全一致）
    pub fn find_ship(&self, name: &str) -> Result<&Ship> {
        self.ships
            .iter()
            .find(|s| s.matches_name(name))
            .ok_or_else(|| ThreatSigError::UnknownShip(name.to_string()))
    }

    /// 脅威コードで検索し、型付けされた脅威を返す
    pub fn find_threat(&self, code: &str) -> Result<Threat> {
        let record = self
            .threats
            .iter()
            .find(|t| t.matches_code(code))
            .ok_or_else(|| ThreatSigError::UnknownThreat(code.to_string()))?;
        record.to_threat()
    }
}

/// ヘッダー行付きCSVを読み込み
///
/// ファイルが存在しない場合はパスを含むエラーを返します。
pub fn load_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(ThreatSigError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| ThreatSigError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(|source| ThreatSigError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    trace!(path = %path.display(), rows = rows.len(), "CSVを読み込みました");
    Ok(rows)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::Path;

    use super::DataBundle;
    use crate::config::DataConfig;
    use crate::models::{AcousticSample, RcsSample, Ship, ThreatRecord};

    pub const SHIPS_CSV: &str = "id,name,class\n\
        1,Alpha,Frigate\n\
        2,Bravo,Corvette\n\
        3,Charlie,Submarine\n";

    pub const RCS_CSV: &str = "ship_id,aspect_deg,rcs_dbsm\n\
        1,0,-10.0\n\
        1,90,-14.0\n\
        2,0,-25.0\n\
        3,0,-40.0\n";

    pub const ACOUSTIC_CSV: &str = "ship_id,band_label,level_db\n\
        1,125 Hz,120.0\n\
        1,500 Hz,110.0\n\
        2,500 Hz,112.0\n\
        2,1 kHz,106.0\n\
        3,125 Hz,101.0\n";

    pub const THREATS_CSV: &str = "code,type,name,band,base_rcs_dbsm,base_range_km,max_range_km,noise_floor_db,detection_snr_db\n\
        radar_basic,radar,Basic surface search radar,X,-20.0,50.0,500.0,,\n\
        sonar_basic,sonar,Basic hull sonar,LF,,,,100.0,15.0\n";

    /// 一時ディレクトリに参照表一式を書き出し、その設定を返す
    pub fn write_sample_data(dir: &Path) -> DataConfig {
        fs::write(dir.join("ships.csv"), SHIPS_CSV).unwrap();
        fs::write(dir.join("rcs_signatures.csv"), RCS_CSV).unwrap();
        fs::write(dir.join("acoustic_signatures.csv"), ACOUSTIC_CSV).unwrap();
        fs::write(dir.join("threats.csv"), THREATS_CSV).unwrap();
        DataConfig {
            data_dir: dir.to_path_buf(),
            figures_dir: dir.join("figures"),
            ..DataConfig::default()
        }
    }

    /// ファイルを介さないメモリ上の参照表
    pub fn sample_bundle() -> DataBundle {
        DataBundle {
            ships: vec![
                Ship::new(1, "Alpha", "Frigate"),
                Ship::new(2, "Bravo", "Corvette"),
                Ship::new(3, "Charlie", "Submarine"),
            ],
            rcs: vec![
                RcsSample::new(1, -10.0),
                RcsSample::new(1, -14.0),
                RcsSample::new(2, -25.0),
                RcsSample::new(3, -40.0),
            ],
            acoustic: vec![
                AcousticSample::new(1, "125 Hz", 120.0),
                AcousticSample::new(1, "500 Hz", 110.0),
                AcousticSample::new(2, "500 Hz", 112.0),
                AcousticSample::new(2, "1 kHz", 106.0),
                AcousticSample::new(3, "125 Hz", 101.0),
            ],
            threats: vec![
                ThreatRecord {
                    code: "radar_basic".to_string(),
                    threat_type: "radar".to_string(),
                    name: "Basic surface search radar".to_string(),
                    band: "X".to_string(),
                    base_rcs_dbsm: Some(-20.0),
                    base_range_km: Some(50.0),
                    max_range_km: Some(500.0),
                    noise_floor_db: None,
                    detection_snr_db: None,
                },
                ThreatRecord {
                    code: "sonar_basic".to_string(),
                    threat_type: "sonar".to_string(),
                    name: "Basic hull sonar".to_string(),
                    band: "LF".to_string(),
                    base_rcs_dbsm: None,
                    base_range_km: None,
                    max_range_km: None,
                    noise_floor_db: Some(100.0),
                    detection_snr_db: Some(15.0),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::models::{IThreat, ThreatKind};
    use std::fs;

    #[test]
    fn test_load_sample_data() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_sample_data(dir.path());

        let bundle = DataBundle::load(&config).unwrap();
        assert_eq!(bundle.ships.len(), 3);
        assert_eq!(bundle.rcs.len(), 4);
        assert_eq!(bundle.acoustic.len(), 5);
        assert_eq!(bundle.threats.len(), 2);
        assert_eq!(bundle.ships[2].ship_class, "Submarine");
        assert_eq!(bundle.acoustic[0].band_label, "125 Hz");
        assert_eq!(bundle.threats[0].noise_floor_db, None);
        assert_eq!(bundle.threats[1].detection_snr_db, Some(15.0));
    }

    #[test]
    fn test_bundled_reference_data() {
        let bundle = DataBundle::load(&DataConfig::default()).unwrap();
        assert!(!bundle.ships.is_empty());
        for record in &bundle.threats {
            record.to_threat().unwrap();
        }
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_sample_data(dir.path());
        fs::remove_file(config.threats_path()).unwrap();

        let err = DataBundle::load(&config).unwrap_err();
        assert!(matches!(err, ThreatSigError::FileNotFound(_)));
        assert!(err.to_string().contains("threats.csv"));
    }

    #[test]
    fn test_orphan_signature_rejected() {
        let mut bundle = sample_bundle();
        bundle.acoustic.push(AcousticSample::new(99, "125 Hz", 130.0));
        assert!(matches!(
            bundle.validate(),
            Err(ThreatSigError::UnknownShipId { ship_id: 99, .. })
        ));
    }

    #[test]
    fn test_duplicate_threat_code_rejected() {
        let mut bundle = sample_bundle();
        let mut duplicate = bundle.threats[0].clone();
        duplicate.code = "RADAR_BASIC".to_string();
        bundle.threats.push(duplicate);
        assert!(matches!(
            bundle.validate(),
            Err(ThreatSigError::DuplicateThreatCode(_))
        ));
    }

    #[test]
    fn test_find_ship_case_insensitive() {
        let bundle = sample_bundle();
        assert_eq!(bundle.find_ship("bRaVo").unwrap().id, 2);
        assert!(matches!(
            bundle.find_ship("Delta"),
            Err(ThreatSigError::UnknownShip(name)) if name == "Delta"
        ));
    }

    #[test]
    fn test_find_threat_case_insensitive() {
        let bundle = sample_bundle();
        let threat = bundle.find_threat("SONAR_BASIC").unwrap();
        assert_eq!(threat.kind(), ThreatKind::Sonar);
        assert!(matches!(
            bundle.find_threat("lidar_basic"),
            Err(ThreatSigError::UnknownThreat(_))
        ));
    }
}
