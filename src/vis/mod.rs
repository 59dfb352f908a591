//! ダッシュボード可視化モジュール
//!
//! チャート仕様の構築（`charts`）とHTML文書の組み立て（`dashboard`）を提供します。

pub mod charts;
pub mod dashboard;

// Re-export public items
pub use self::charts::{BarTrace, HistogramTrace, Layout, ScatterTrace};
pub use self::dashboard::{render_dashboard, DashboardConfig};
