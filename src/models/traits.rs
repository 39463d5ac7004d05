use crate::models::threat::ThreatKind;

/// 全ての脅威モデルが実装する基本インターフェース
pub trait IThreat {
    /// 脅威コードの取得
    fn get_code(&self) -> &str;

    /// 脅威の種類
    fn kind(&self) -> ThreatKind;
}

/// 探知評価のインターフェース
///
/// 選択済みのシグネチャ値（dB系）から探知指標を計算します。
pub trait IDetector: IThreat {
    /// 評価結果の型（レーダー: 距離、ソナー: カテゴリ）
    type Output;

    /// 探知評価
    fn evaluate(&self, signature_db: f64) -> Self::Output;
}
