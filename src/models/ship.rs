use serde::{Deserialize, Serialize};

/// 艦艇
///
/// `ships.csv` の1行に対応します。`id` はシグネチャ表への結合キーです。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ship {
    pub id: i64,
    pub name: String,
    #[serde(rename = "class")]
    pub ship_class: String,
}

impl Ship {
    pub fn new(id: i64, name: &str, ship_class: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            ship_class: ship_class.to_string(),
        }
    }

    /// 艦艇名の比較（大文字小文字を区別しない完全一致）
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
