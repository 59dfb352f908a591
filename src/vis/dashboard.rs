//! HTMLダッシュボードの組み立てモジュール
//!
//! 導出済みのデータを受け取り、Plotlyチャート4点と分析サマリーを含む
//! 自己完結型のHTML文書を生成します。データの計算には関与せず、
//! 直列化とテンプレート組み立てのみを行います。

use crate::dataset::{AgeCompositionRecord, PopulationRecord};
use crate::error::Result;
use crate::metrics::GrowthRecord;
use crate::vis::charts;

/// ダッシュボードの表示設定
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// ページタイトル
    pub title: String,
    /// サブタイトル
    pub subtitle: String,
    /// 作成日の表示文字列（呼び出し側で整形して渡す）
    pub generated_at: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            title: "日本人口動態分析ダッシュボード".to_string(),
            subtitle: "総務省統計局データに基づく人口動態の詳細分析".to_string(),
            generated_at: String::new(),
        }
    }
}

/// ダッシュボードHTML文書を生成する
///
/// 同じ入力と設定に対して常に同じ文書を返します（時刻の取得などの
/// 副作用はありません）。
pub fn render_dashboard(
    population: &[PopulationRecord],
    age: &[AgeCompositionRecord],
    top: &[GrowthRecord],
    snapshot: &[u32],
    config: &DashboardConfig,
) -> Result<String> {
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="https://cdn.plot.ly/plotly-latest.min.js"></script>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}
        <div class="content">
            {summary}
            {charts}
            {data_source}
        </div>
        {footer}
    </div>
    <script>
{scripts}
    </script>
</body>
</html>
"#,
        title = config.title,
        css = inline_css(),
        header = render_header(config),
        summary = render_summary(),
        charts = render_chart_containers(),
        data_source = render_data_source(),
        footer = render_footer(),
        scripts = render_scripts(population, age, top, snapshot)?,
    ))
}

fn inline_css() -> &'static str {
    r#"
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            margin: 0;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            border-radius: 15px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.1);
            overflow: hidden;
        }
        .header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 40px;
            text-align: center;
        }
        .header h1 {
            margin: 0;
            font-size: 2.5em;
            font-weight: 300;
        }
        .header p {
            margin: 10px 0 0 0;
            opacity: 0.9;
            font-size: 1.1em;
        }
        .content {
            padding: 40px;
        }
        .summary {
            background: #f8f9fa;
            padding: 30px;
            border-radius: 10px;
            margin-bottom: 40px;
            border-left: 5px solid #667eea;
        }
        .summary h2 {
            color: #333;
            margin-top: 0;
            font-size: 1.8em;
        }
        .summary ul {
            color: #666;
            line-height: 1.8;
            font-size: 1.1em;
        }
        .chart-container {
            margin-bottom: 40px;
            background: white;
            border-radius: 10px;
            box-shadow: 0 5px 15px rgba(0,0,0,0.08);
            overflow: hidden;
        }
        .chart {
            padding: 20px;
            min-height: 400px;
        }
        .footer {
            text-align: center;
            padding: 30px;
            background: #f8f9fa;
            color: #666;
            border-top: 1px solid #e9ecef;
        }
        .data-source {
            background: #e3f2fd;
            padding: 20px;
            border-radius: 10px;
            margin-top: 30px;
            border-left: 5px solid #2196f3;
        }
    "#
}

fn render_header(config: &DashboardConfig) -> String {
    format!(
        r#"<div class="header">
            <h1>🇯🇵 {title}</h1>
            <p>{subtitle}</p>
            <p>作成日: {generated_at}</p>
        </div>"#,
        title = config.title,
        subtitle = config.subtitle,
        generated_at = config.generated_at,
    )
}

// 分析サマリーは執筆済みの固定文（データからの自動生成は行わない）
fn render_summary() -> &'static str {
    r#"<div class="summary">
                <h2>📊 分析結果サマリー</h2>
                <ul>
                    <li><strong>人口増加地域:</strong> 東京都、神奈川県、沖縄県が継続的な人口増加を示している</li>
                    <li><strong>少子高齢化の進行:</strong> 65歳以上人口比率が2014年25.8%から2023年30.2%へ上昇</li>
                    <li><strong>生産年齢人口の減少:</strong> 15-64歳人口比率が2014年61.3%から2023年58.2%へ低下</li>
                    <li><strong>地域格差の拡大:</strong> 大都市圏への人口集中が継続、地方の人口減少が加速</li>
                    <li><strong>年少人口の減少:</strong> 0-14歳人口比率が2014年12.9%から2023年11.6%へ低下</li>
                </ul>
            </div>"#
}

fn render_chart_containers() -> &'static str {
    r#"<div class="chart-container">
                <div class="chart" id="chart1"></div>
            </div>

            <div class="chart-container">
                <div class="chart" id="chart2"></div>
            </div>

            <div class="chart-container">
                <div class="chart" id="chart3"></div>
            </div>

            <div class="chart-container">
                <div class="chart" id="chart4"></div>
            </div>"#
}

fn render_data_source() -> &'static str {
    r#"<div class="data-source">
                <h3>📈 データソース・技術仕様</h3>
                <p><strong>データ出典:</strong> 総務省統計局「住民基本台帳に基づく人口、人口動態及び世帯数」</p>
                <p><strong>使用技術:</strong> Rust (csv, serde), HTML/CSS, JavaScript (Plotly.js)</p>
                <p><strong>分析期間:</strong> 2014年-2023年（10年間の実データ）</p>
                <p><strong>対象:</strong> 全47都道府県の人口動態</p>
            </div>"#
}

fn render_footer() -> &'static str {
    r#"<div class="footer">
            <p>© 2025 人口動態分析プロジェクト | Rust Data Analysis Portfolio</p>
        </div>"#
}

// チャート仕様を直列化してスクリプトブロックを組み立てる
fn render_scripts(
    population: &[PopulationRecord],
    age: &[AgeCompositionRecord],
    top: &[GrowthRecord],
    snapshot: &[u32],
) -> Result<String> {
    let (trend_traces, trend_layout) = charts::population_trend(population)?;
    let (age_traces, age_layout) = charts::age_composition(age);
    let (ranking_trace, ranking_layout) = charts::growth_ranking(top);
    let (histogram_trace, histogram_layout) = charts::population_histogram(snapshot);

    Ok(format!(
        r#"        // グラフ1: 主要都道府県の人口推移
        var data1 = {data1};
        var layout1 = {layout1};

        // グラフ2: 年齢構成の推移
        var data2 = {data2};
        var layout2 = {layout2};

        // グラフ3: 人口増減率ランキング
        var data3 = {data3};
        var layout3 = {layout3};

        // グラフ4: 人口分布ヒストグラム
        var data4 = {data4};
        var layout4 = {layout4};

        Plotly.newPlot('chart1', data1, layout1, {{responsive: true}});
        Plotly.newPlot('chart2', data2, layout2, {{responsive: true}});
        Plotly.newPlot('chart3', data3, layout3, {{responsive: true}});
        Plotly.newPlot('chart4', data4, layout4, {{responsive: true}});"#,
        data1 = serde_json::to_string(&trend_traces)?,
        layout1 = serde_json::to_string(&trend_layout)?,
        data2 = serde_json::to_string(&age_traces)?,
        layout2 = serde_json::to_string(&age_layout)?,
        data3 = serde_json::to_string(&[ranking_trace])?,
        layout3 = serde_json::to_string(&ranking_layout)?,
        data4 = serde_json::to_string(&[histogram_trace])?,
        layout4 = serde_json::to_string(&histogram_layout)?,
    ))
}
