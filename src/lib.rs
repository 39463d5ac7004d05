//! # threatsig
//!
//! 合成された艦艇シグネチャデータから、簡易なレーダー・ソナー脅威が
//! 艦艇を探知するかを推定し、英独併記のテキストまたは Markdown 表で出力します。
//!
//! ## 処理の流れ
//!
//! 参照表（CSV）→ 行選択 → 探知評価 → 評価結果 → 整形 → 出力
//!
//! ## モジュール構成
//!
//! - `config`: 参照データの配置と参照バンドの設定
//! - `data`: 参照表の読み込みと整合性検証
//! - `models`: 艦艇・脅威・シグネチャ・評価結果のデータ型
//! - `analysis`: 行選択、探知評価、結果構築
//! - `reporting`: テキスト・Markdown 整形
//! - `figures`: レーダー探知距離の棒グラフ出力
//! - `commands`: CLI サブコマンドの処理
//! - `logging`: ログ出力の初期化

pub mod analysis;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod figures;
pub mod logging;
pub mod models;
pub mod reporting;

pub use error::{Result, ThreatSigError};
