use crate::models::threat::ThreatKind;

pub const RADAR_METRIC_LABEL: &str = "Detection range [km] / Erfassungsreichweite [km]";
pub const SONAR_METRIC_LABEL: &str = "Detection probability / Entdeckungswahrscheinlichkeit";

/// ソナー探知の確信度カテゴリ
///
/// 探知確率曲線の代わりとなる3段階の順序カテゴリです。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SonarCategory {
    Low,
    Medium,
    High,
}

impl SonarCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SonarCategory::Low => "low",
            SonarCategory::Medium => "medium",
            SonarCategory::High => "high",
        }
    }

    /// 英独併記の表示ラベル
    pub fn display_label(&self) -> &'static str {
        match self {
            SonarCategory::Low => "low / niedrig",
            SonarCategory::Medium => "medium / mittel",
            SonarCategory::High => "high / hoch",
        }
    }
}

impl std::fmt::Display for SonarCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 探知指標
///
/// レーダーは連続値（km）、ソナーはカテゴリ値を持ちます。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectionMetric {
    /// 小数点以下1桁に丸め済みの探知距離
    Radar { range_km: f64 },
    Sonar { category: SonarCategory },
}

impl DetectionMetric {
    /// 丸めは構築時に一度だけ行う
    pub fn radar(range_km: f64) -> Self {
        DetectionMetric::Radar {
            range_km: round_range_km(range_km),
        }
    }

    pub fn sonar(category: SonarCategory) -> Self {
        DetectionMetric::Sonar { category }
    }

    pub fn threat_kind(&self) -> ThreatKind {
        match self {
            DetectionMetric::Radar { .. } => ThreatKind::Radar,
            DetectionMetric::Sonar { .. } => ThreatKind::Sonar,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetectionMetric::Radar { .. } => RADAR_METRIC_LABEL,
            DetectionMetric::Sonar { .. } => SONAR_METRIC_LABEL,
        }
    }

    /// 表示用の値
    pub fn display_value(&self) -> String {
        match self {
            DetectionMetric::Radar { range_km } => format!("{:.1}", range_km),
            DetectionMetric::Sonar { category } => category.display_label().to_string(),
        }
    }
}

/// 探知距離を小数点以下1桁に丸める（偶数丸め）
pub fn round_range_km(range_km: f64) -> f64 {
    (range_km * 10.0).round_ties_even() / 10.0
}

/// 探知評価結果
///
/// (艦艇, 脅威) の組ごとに1回構築され、整形後に破棄されます。
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    pub ship_name: String,
    pub threat_code: String,
    pub threat_name: String,
    pub metric: DetectionMetric,
    pub description_en: String,
    pub description_de: String,
}

impl DetectionResult {
    pub fn threat_type(&self) -> ThreatKind {
        self.metric.threat_kind()
    }

    pub fn metric_label(&self) -> &'static str {
        self.metric.label()
    }

    /// レーダー結果の場合のみ探知距離を返す
    pub fn radar_range_km(&self) -> Option<f64> {
        match self.metric {
            DetectionMetric::Radar { range_km } => Some(range_km),
            DetectionMetric::Sonar { .. } => None,
        }
    }
}
