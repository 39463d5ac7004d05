// シグネチャ表からの行選択
pub mod selectors;

// レーダー・ソナー探知評価（純粋関数）
pub mod detection;

// 評価結果と英独説明文の構築
pub mod assessment;

pub use selectors::{select_acoustic_for_ship, select_rcs_for_ship};
pub use detection::{evaluate_radar_detection, evaluate_sonar_detection};
pub use assessment::{assess, assess_all};
