use serde::{Deserialize, Serialize};

/// RCSサンプル
///
/// 同一艦艇に対して複数行（アスペクト角・周波数ごと）存在し得ます。
/// `aspect_deg` などの追加列は読み込み時に無視されます。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RcsSample {
    pub ship_id: i64,
    pub rcs_dbsm: f64, // dBsm
}

/// 音響サンプル
///
/// 同一艦艇・同一バンドに対して複数行存在し得ます。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AcousticSample {
    pub ship_id: i64,
    pub band_label: String,
    pub level_db: f64, // dB
}

impl RcsSample {
    pub fn new(ship_id: i64, rcs_dbsm: f64) -> Self {
        Self { ship_id, rcs_dbsm }
    }
}

impl AcousticSample {
    pub fn new(ship_id: i64, band_label: &str, level_db: f64) -> Self {
        Self {
            ship_id,
            band_label: band_label.to_string(),
            level_db,
        }
    }
}
