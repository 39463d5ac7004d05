//! # Reporting モジュール
//!
//! 評価結果と参照表を表示用テキストに整形します。

use crate::models::{DetectionResult, Ship, ThreatRecord};

/// 結果が空の場合の Markdown 出力
pub const NO_RESULTS: &str = "No results available.\n";

/// 英独2行の説明文
pub fn format_result_text(result: &DetectionResult) -> String {
    format!("[EN] {}\n[DE] {}", result.description_en, result.description_de)
}

/// 艦艇一覧の1行
pub fn format_ship_line(ship: &Ship) -> String {
    format!("- {} ({}) [id={}]", ship.name, ship.ship_class, ship.id)
}

/// 脅威一覧の1行（型付け前の生の行を表示）
pub fn format_threat_line(record: &ThreatRecord) -> String {
    format!(
        "- {} ({}), {} [{}]",
        record.code, record.threat_type, record.name, record.band
    )
}

/// 艦艇 × 脅威の Markdown 表
///
/// 見出しの脅威コードと種類は先頭の結果から取ります。
pub fn matrix_markdown(results: &[DetectionResult]) -> String {
    let Some(first) = results.first() else {
        return NO_RESULTS.to_string();
    };

    let mut out = format!(
        "### Ship vs. threat matrix for `{}` ({})\n\n",
        first.threat_code,
        first.threat_type()
    );
    out.push_str("| Ship | Metric | Value |\n");
    out.push_str("|------|--------|-------|\n");

    let rows: Vec<String> = results
        .iter()
        .map(|r| {
            format!(
                "| {} | {} | {} |",
                r.ship_name,
                r.metric_label(),
                r.metric.display_value()
            )
        })
        .collect();
    out.push_str(&rows.join("\n"));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::assess_all;
    use crate::data::fixtures::sample_bundle;

    #[test]
    fn test_empty_matrix() {
        assert_eq!(matrix_markdown(&[]), "No results available.\n");
    }

    #[test]
    fn test_radar_matrix() {
        let bundle = sample_bundle();
        let threat = bundle.find_threat("radar_basic").unwrap();
        let results = assess_all(&bundle, &threat, "125 Hz").unwrap();

        let md = matrix_markdown(&results);
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[0], "### Ship vs. threat matrix for `radar_basic` (radar)");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "| Ship | Metric | Value |");
        assert_eq!(lines[3], "|------|--------|-------|");
        assert_eq!(lines[4], "| Alpha | Detection range [km] / Erfassungsreichweite [km] | 88.9 |");
        assert_eq!(lines.len(), 7);
        assert!(md.ends_with("|\n"));
    }

    #[test]
    fn test_sonar_matrix_values() {
        let bundle = sample_bundle();
        let threat = bundle.find_threat("sonar_basic").unwrap();
        let results = assess_all(&bundle, &threat, "125 Hz").unwrap();

        let md = matrix_markdown(&results);
        assert!(md.contains("(sonar)"));
        assert!(md.contains("| Alpha | Detection probability / Entdeckungswahrscheinlichkeit | high / hoch |"));
        assert!(md.contains("| Charlie | Detection probability / Entdeckungswahrscheinlichkeit | low / niedrig |"));
    }

    #[test]
    fn test_list_lines() {
        let bundle = sample_bundle();
        assert_eq!(format_ship_line(&bundle.ships[0]), "- Alpha (Frigate) [id=1]");
        assert_eq!(
            format_threat_line(&bundle.threats[1]),
            "- sonar_basic (sonar), Basic hull sonar [LF]"
        );
    }

    #[test]
    fn test_result_text_two_lines() {
        let bundle = sample_bundle();
        let threat = bundle.find_threat("radar_basic").unwrap();
        let results = assess_all(&bundle, &threat, "125 Hz").unwrap();

        let text = format_result_text(&results[0]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[EN] Estimated radar detection range for Alpha"));
        assert!(lines[1].starts_with("[DE] Geschätzte"));
    }
}
