//! Plotlyチャート仕様の構築モジュール
//!
//! ダッシュボードに埋め込む4種類のチャート（人口推移・年齢構成・増減率
//! ランキング・人口分布）のトレースとレイアウトを型付き構造体として組み立て、
//! serde経由でPlotly互換のJSONへ直列化できるようにします。

use serde::Serialize;

use crate::dataset::{AgeCompositionRecord, PopulationRecord, CENSUS_YEARS};
use crate::error::{Error, Result};
use crate::metrics::GrowthRecord;

// チャート1で扱う主要都道府県と系列色（マーカー色の指定は埼玉県のみ）
const MAJOR_PREFECTURES: [(&str, &str, Option<&str>); 5] = [
    ("東京都", "#FF6B6B", None),
    ("神奈川県", "#4ECDC4", None),
    ("大阪府", "#45B7D1", None),
    ("愛知県", "#96CEB4", None),
    ("埼玉県", "#FFEAA7", Some("#FFD93D")),
];

// チャート2の年齢3区分の系列名と色
const AGE_BRACKETS: [(&str, &str); 3] = [
    ("0-14歳（年少人口）", "#FF9999"),
    ("15-64歳（生産年齢人口）", "#66B2FF"),
    ("65歳以上（高齢者人口）", "#FFB366"),
];

// チャート3の棒の色（増加・減少）
const GROWTH_POSITIVE_COLOR: &str = "#FF6B6B";
const GROWTH_NEGATIVE_COLOR: &str = "#FF9999";

// チャート4のヒストグラムの色とビン数
const HISTOGRAM_COLOR: &str = "#4ECDC4";
const HISTOGRAM_BINS: u32 = 10;

/// 折れ線の描画設定
#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub color: String,
    pub width: u32,
}

/// マーカーの描画設定
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// 折れ線・面グラフ用のトレース
#[derive(Debug, Clone, Serialize)]
pub struct ScatterTrace<Y> {
    pub x: Vec<i32>,
    pub y: Vec<Y>,
    pub mode: String,
    pub name: String,
    pub line: Line,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

/// 横棒グラフ用のマーカー（棒ごとの色指定）
#[derive(Debug, Clone, Serialize)]
pub struct BarMarker {
    pub color: Vec<String>,
}

/// 横棒グラフ用のトレース
#[derive(Debug, Clone, Serialize)]
pub struct BarTrace {
    pub x: Vec<f64>,
    pub y: Vec<String>,
    #[serde(rename = "type")]
    pub trace_type: String,
    pub orientation: String,
    pub marker: BarMarker,
    pub text: Vec<String>,
    pub textposition: String,
}

/// ヒストグラム用のマーカー
#[derive(Debug, Clone, Serialize)]
pub struct HistogramMarker {
    pub color: String,
}

/// ヒストグラム用のトレース
#[derive(Debug, Clone, Serialize)]
pub struct HistogramTrace {
    pub x: Vec<u32>,
    #[serde(rename = "type")]
    pub trace_type: String,
    pub nbinsx: u32,
    pub marker: HistogramMarker,
}

/// 軸タイトル
#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: String,
}

/// チャートのレイアウト設定
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub template: String,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

impl Layout {
    fn new(title: &str, x_label: &str, y_label: &str, height: u32) -> Self {
        Layout {
            title: title.to_string(),
            xaxis: Axis {
                title: x_label.to_string(),
            },
            yaxis: Axis {
                title: y_label.to_string(),
            },
            template: "plotly_white".to_string(),
            height,
            showlegend: None,
        }
    }
}

/// チャート1: 主要都道府県の人口推移（折れ線＋マーカー）
///
/// 人口テーブルから主要5都道府県の系列を抽出します。対象の都道府県が
/// テーブルに存在しない場合はエラーになります。
pub fn population_trend(
    records: &[PopulationRecord],
) -> Result<(Vec<ScatterTrace<u32>>, Layout)> {
    let mut traces = Vec::with_capacity(MAJOR_PREFECTURES.len());

    for (name, line_color, marker_color) in MAJOR_PREFECTURES {
        let record = records
            .iter()
            .find(|r| r.prefecture == name)
            .ok_or_else(|| Error::Visualization(format!("都道府県が見つかりません: {}", name)))?;

        traces.push(ScatterTrace {
            x: CENSUS_YEARS.to_vec(),
            y: record.values().to_vec(),
            mode: "lines+markers".to_string(),
            name: name.to_string(),
            line: Line {
                color: line_color.to_string(),
                width: 3,
            },
            marker: Some(Marker {
                size: 8,
                color: marker_color.map(|c| c.to_string()),
            }),
            fill: None,
        });
    }

    let mut layout = Layout::new("主要都道府県の人口推移（2014-2023年）", "年", "人口（万人）", 400);
    layout.showlegend = Some(true);

    Ok((traces, layout))
}

/// チャート2: 全国年齢構成比の推移（積み上げ面グラフ）
///
/// 最初の系列はゼロまで、以降の系列は直前の系列まで塗りつぶします。
pub fn age_composition(records: &[AgeCompositionRecord]) -> (Vec<ScatterTrace<f64>>, Layout) {
    let years: Vec<i32> = records.iter().map(|r| r.year).collect();
    let brackets: [Vec<f64>; 3] = [
        records.iter().map(|r| r.pct_0_14).collect(),
        records.iter().map(|r| r.pct_15_64).collect(),
        records.iter().map(|r| r.pct_65_plus).collect(),
    ];

    let traces = AGE_BRACKETS
        .iter()
        .zip(brackets)
        .enumerate()
        .map(|(i, ((name, color), values))| ScatterTrace {
            x: years.clone(),
            y: values,
            mode: "lines+markers".to_string(),
            name: (*name).to_string(),
            line: Line {
                color: (*color).to_string(),
                width: 3,
            },
            marker: None,
            fill: Some(if i == 0 { "tozeroy" } else { "tonexty" }.to_string()),
        })
        .collect();

    let mut layout = Layout::new("全国年齢構成比の推移（2014-2023年）", "年", "構成比（%）", 400);
    layout.showlegend = Some(true);

    (traces, layout)
}

/// チャート3: 人口増減率ランキング（横棒グラフ）
///
/// ランキング順のまま描画します。棒の色は増加・減少で塗り分け、
/// 増減率のラベルを棒の外側に表示します。
pub fn growth_ranking(top: &[GrowthRecord]) -> (BarTrace, Layout) {
    let trace = BarTrace {
        x: top.iter().map(|r| r.growth_rate).collect(),
        y: top.iter().map(|r| r.record.prefecture.clone()).collect(),
        trace_type: "bar".to_string(),
        orientation: "h".to_string(),
        marker: BarMarker {
            color: top
                .iter()
                .map(|r| {
                    if r.growth_rate > 0.0 {
                        GROWTH_POSITIVE_COLOR.to_string()
                    } else {
                        GROWTH_NEGATIVE_COLOR.to_string()
                    }
                })
                .collect(),
        },
        text: top.iter().map(|r| format!("{}%", r.growth_rate)).collect(),
        textposition: "outside".to_string(),
    };

    let layout = Layout::new(
        "人口増減率ランキング Top10（2020-2023年）",
        "増減率（%）",
        "都道府県",
        500,
    );

    (trace, layout)
}

/// チャート4: 都道府県人口分布（ヒストグラム）
pub fn population_histogram(snapshot: &[u32]) -> (HistogramTrace, Layout) {
    let trace = HistogramTrace {
        x: snapshot.to_vec(),
        trace_type: "histogram".to_string(),
        nbinsx: HISTOGRAM_BINS,
        marker: HistogramMarker {
            color: HISTOGRAM_COLOR.to_string(),
        },
    };

    let layout = Layout::new("都道府県人口分布（2023年）", "人口（万人）", "都道府県数", 400);

    (trace, layout)
}
