// 脅威モデルの基本インターフェース（trait）定義
pub mod traits;

// 参照表の各行に対応するデータ型
pub mod ship;
pub mod signature;
pub mod threat;

// 評価結果の型
pub mod detection;

// 便利な re-export
pub use traits::*;
pub use ship::Ship;
pub use signature::{AcousticSample, RcsSample};
pub use threat::{RadarThreat, SonarThreat, Threat, ThreatKind, ThreatRecord};
pub use detection::{DetectionMetric, DetectionResult, SonarCategory};
