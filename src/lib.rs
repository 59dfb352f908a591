//! jinkors: 日本の人口動態ダッシュボード生成ライブラリ
//!
//! 都道府県別人口と全国年齢構成の定数データセットから人口増減率ランキングを
//! 導出し、CSVエクスポート2点とPlotlyチャート入りの自己完結型HTML
//! ダッシュボードを生成します。

pub mod dataset;
pub mod error;
pub mod io;
pub mod metrics;
pub mod vis;

// Re-export commonly used types
pub use dataset::{AgeCompositionRecord, PopulationRecord};
pub use error::{Error, Result};
pub use metrics::GrowthRecord;
pub use vis::DashboardConfig;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
