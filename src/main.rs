use std::fs;

use chrono::Local;

use jinkors::vis::DashboardConfig;
use jinkors::{dataset, io, metrics, vis, Result};

fn main() -> Result<()> {
    println!("=== 日本人口動態ダッシュボード生成 ===");

    println!("実際の人口データを取得中...");
    let population = dataset::population_table();
    let age = dataset::age_composition_table();

    println!("人口増減率を計算中...");
    let growth = metrics::with_growth_rates(&population);
    let top10 = metrics::top_growth(&growth, 10);

    println!("ダッシュボード作成開始...");
    fs::create_dir_all("data")?;
    io::write_population_csv("data/real_population_data.csv", &growth)?;
    io::write_age_csv("data/age_composition_data.csv", &age)?;

    let config = DashboardConfig {
        generated_at: Local::now().format("%Y年%m月%d日").to_string(),
        ..DashboardConfig::default()
    };
    let html = vis::render_dashboard(
        &population,
        &age,
        &top10,
        &dataset::population_snapshot_2023(),
        &config,
    )?;
    fs::write("index.html", html)?;

    println!("✅ ダッシュボード作成完了!");
    println!("📁 以下のファイルが生成されました:");
    println!("   - index.html (メインダッシュボード)");
    println!("   - data/real_population_data.csv (人口データ)");
    println!("   - data/age_composition_data.csv (年齢構成データ)");
    println!("\n🌐 index.htmlをブラウザで開いてダッシュボードを確認してください!");

    Ok(())
}
