//! # Figures モジュール
//!
//! 1つのレーダー脅威に対する艦艇ごとの探知距離を棒グラフとして出力します。
//!
//! 同じグラフを2形式で書き出します。
//!
//! - `radar_detection_{code}.png`: 棒・軸・破線グリッドのラスター画像
//! - `radar_detection_{code}.svg`: 英独併記のタイトル・軸ラベル・艦艇名付きのベクター画像

use image::{ImageBuffer, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Result, ThreatSigError};
use crate::models::DetectionResult;

pub const CHART_TITLE: &str = "Radar detection range / Radar-Erfassungsreichweite";
pub const X_LABEL: &str = "Ship / Schiff";
pub const Y_LABEL: &str = "Range [km] / Reichweite [km]";

/// グラフ描画設定
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            margin_left: 110,
            margin_right: 40,
            margin_top: 70,
            margin_bottom: 130,
        }
    }
}

impl ChartConfig {
    fn plot_width(&self) -> u32 {
        self.width.saturating_sub(self.margin_left + self.margin_right).max(1)
    }

    fn plot_height(&self) -> u32 {
        self.height.saturating_sub(self.margin_top + self.margin_bottom).max(1)
    }

    /// x軸（プロット領域の下端）のy座標
    fn baseline(&self) -> u32 {
        self.margin_top + self.plot_height()
    }
}

/// 棒グラフ
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// (艦艇名, 探知距離 km)
    pub bars: Vec<(String, f64)>,
}

/// 出力されたファイル
#[derive(Debug, Clone, PartialEq)]
pub struct FigurePaths {
    pub png: PathBuf,
    pub svg: PathBuf,
}

impl BarChart {
    /// 評価結果からグラフを構築（レーダー結果のみ使用）
    pub fn from_results(threat_code: &str, results: &[DetectionResult]) -> Result<Self> {
        let bars: Vec<(String, f64)> = results
            .iter()
            .filter_map(|r| r.radar_range_km().map(|km| (r.ship_name.clone(), km)))
            .collect();

        if bars.is_empty() {
            return Err(ThreatSigError::NoRadarResults(threat_code.to_string()));
        }

        Ok(Self {
            title: CHART_TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            bars,
        })
    }

    /// y軸の目盛り間隔と上限
    pub fn y_axis(&self) -> (f64, f64) {
        let max_value = self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        if max_value <= 0.0 {
            return (0.2, 1.0);
        }
        let step = nice_step(max_value / 5.0);
        let top = (max_value / step).ceil() * step;
        (step, if top > max_value { top } else { top + step })
    }

    /// PNG形式で保存
    pub fn render_png(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        let mut img: RgbImage = ImageBuffer::from_pixel(config.width, config.height, Rgb([255, 255, 255]));
        let (step, top) = self.y_axis();
        let plot_h = config.plot_height() as f64;
        let baseline = config.baseline();
        let right = config.margin_left + config.plot_width();

        // 破線の水平グリッド
        let mut tick = step;
        while tick <= top + 1e-9 {
            let y = baseline - ((tick / top) * plot_h).round() as u32;
            for x in config.margin_left..right {
                if (x / 6) % 2 == 0 {
                    img.put_pixel(x, y, Rgb([200, 200, 200]));
                }
            }
            tick += step;
        }

        // 棒
        let slot = config.plot_width() as f64 / self.bars.len() as f64;
        for (i, (_, value)) in self.bars.iter().enumerate() {
            let x0 = (config.margin_left as f64 + i as f64 * slot + slot * 0.2).round() as u32;
            let x1 = (config.margin_left as f64 + i as f64 * slot + slot * 0.8).round() as u32;
            let bar_h = ((value / top) * plot_h).round() as u32;
            for x in x0..x1.min(right) {
                for y in baseline.saturating_sub(bar_h)..baseline {
                    img.put_pixel(x, y, Rgb([31, 119, 180]));
                }
            }
        }

        // 軸
        for x in config.margin_left..=right.min(config.width - 1) {
            img.put_pixel(x, baseline, Rgb([0, 0, 0]));
        }
        for y in config.margin_top..=baseline {
            img.put_pixel(config.margin_left, y, Rgb([0, 0, 0]));
        }

        img.save(path).map_err(|source| ThreatSigError::Figure {
            path: path.to_path_buf(),
            source,
        })
    }

    /// SVG形式の文字列を生成
    pub fn to_svg(&self, config: &ChartConfig) -> String {
        let (step, top) = self.y_axis();
        let plot_w = config.plot_width() as f64;
        let plot_h = config.plot_height() as f64;
        let left = config.margin_left as f64;
        let baseline = config.baseline() as f64;
        let slot = plot_w / self.bars.len() as f64;

        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n",
            w = config.width,
            h = config.height
        );

        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"22\" text-anchor=\"middle\">{}</text>\n",
            left + plot_w / 2.0,
            config.margin_top as f64 / 2.0,
            escape_xml(&self.title)
        ));

        let mut tick = 0.0;
        while tick <= top + 1e-9 {
            let y = baseline - tick / top * plot_h;
            if tick > 0.0 {
                svg.push_str(&format!(
                    "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#c8c8c8\" stroke-dasharray=\"6 6\"/>\n",
                    left, y, left + plot_w, y
                ));
            }
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"14\" text-anchor=\"end\">{}</text>\n",
                left - 8.0,
                y + 5.0,
                format_tick(tick, step)
            ));
            tick += step;
        }

        for (i, (name, value)) in self.bars.iter().enumerate() {
            let x = left + i as f64 * slot + slot * 0.2;
            let bar_h = value / top * plot_h;
            svg.push_str(&format!(
                "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"#1f77b4\"><title>{:.1} km</title></rect>\n",
                x,
                baseline - bar_h,
                slot * 0.6,
                bar_h,
                value
            ));
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"14\" text-anchor=\"middle\">{}</text>\n",
                left + (i as f64 + 0.5) * slot,
                baseline + 24.0,
                escape_xml(name)
            ));
        }

        svg.push_str(&format!(
            "<line x1=\"{l:.1}\" y1=\"{b:.1}\" x2=\"{r:.1}\" y2=\"{b:.1}\" stroke=\"black\"/>\n\
             <line x1=\"{l:.1}\" y1=\"{t:.1}\" x2=\"{l:.1}\" y2=\"{b:.1}\" stroke=\"black\"/>\n",
            l = left,
            r = left + plot_w,
            t = config.margin_top as f64,
            b = baseline
        ));

        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"16\" text-anchor=\"middle\">{}</text>\n",
            left + plot_w / 2.0,
            config.height as f64 - config.margin_bottom as f64 / 3.0,
            escape_xml(&self.x_label)
        ));
        let y_mid = config.margin_top as f64 + plot_h / 2.0;
        svg.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"{y:.1}\" font-size=\"16\" text-anchor=\"middle\" transform=\"rotate(-90 {x:.1} {y:.1})\">{}</text>\n",
            escape_xml(&self.y_label),
            x = left / 3.0,
            y = y_mid
        ));

        svg.push_str("</svg>\n");
        svg
    }

    /// SVG形式で保存
    pub fn render_svg(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        fs::write(path, self.to_svg(config)).map_err(|source| ThreatSigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// レーダー探知距離の棒グラフを出力
///
/// 出力先ディレクトリが存在しない場合は作成します。
pub fn export_radar_detection_figure(
    threat_code: &str,
    results: &[DetectionResult],
    figures_dir: &Path,
) -> Result<FigurePaths> {
    let chart = BarChart::from_results(threat_code, results)?;
    let config = ChartConfig::default();

    fs::create_dir_all(figures_dir).map_err(|source| ThreatSigError::Io {
        path: figures_dir.to_path_buf(),
        source,
    })?;

    let stem = figure_file_stem(threat_code);
    let paths = FigurePaths {
        png: figures_dir.join(format!("{}.png", stem)),
        svg: figures_dir.join(format!("{}.svg", stem)),
    };
    chart.render_png(&config, &paths.png)?;
    chart.render_svg(&config, &paths.svg)?;

    info!(png = %paths.png.display(), svg = %paths.svg.display(), bars = chart.bars.len(), "図を出力しました");
    Ok(paths)
}

/// 出力ファイル名（拡張子なし）
///
/// 脅威コードは CSV 由来のため、英数字・`-`・`_` 以外は `_` に置き換え、
/// 出力先ディレクトリの外を指さないようにします。
pub fn figure_file_stem(threat_code: &str) -> String {
    let safe: String = threat_code
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("radar_detection_{}", safe)
}

/// 1, 2, 5 × 10^n の目盛り間隔
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn format_tick(value: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
