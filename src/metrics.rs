//! 人口増減率の導出モジュール
//!
//! 都道府県別人口テーブルから増減率を計算し、ランキングを生成します。
//! データ計算はここで完結させ、テキスト整形（CSV・HTML）には関与しません。

use std::cmp::Ordering;

use crate::dataset::PopulationRecord;

/// 増減率付きの都道府県別人口レコード
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthRecord {
    /// 元の人口レコード
    pub record: PopulationRecord,
    /// 人口増減率（%、小数第2位まで）
    pub growth_rate: f64,
}

/// 2時点間の人口増減率を計算する
///
/// `(later - earlier) / earlier * 100` を小数第2位に丸めて返します。
/// 基準値が0の場合は増減率が定義できないため `None` を返します。
///
/// # 例
/// ```
/// // 東京都: 2020年 14048万人 → 2023年 14125万人
/// assert_eq!(jinkors::metrics::growth_rate(14048, 14125), Some(0.55));
/// ```
pub fn growth_rate(earlier: u32, later: u32) -> Option<f64> {
    if earlier == 0 {
        return None;
    }
    let rate = (later as f64 - earlier as f64) / earlier as f64 * 100.0;
    Some((rate * 100.0).round() / 100.0)
}

/// 全レコードに2020年→2023年の増減率を付与する
///
/// 入力順を保持します。増減率が定義できないレコード（基準値0）は
/// ランキング対象外として除外されます。
pub fn with_growth_rates(records: &[PopulationRecord]) -> Vec<GrowthRecord> {
    records
        .iter()
        .filter_map(|record| match growth_rate(record.pop_2020, record.pop_2023) {
            Some(rate) => Some(GrowthRecord {
                record: record.clone(),
                growth_rate: rate,
            }),
            None => {
                log::debug!("増減率が定義できないため除外: {}", record.prefecture);
                None
            }
        })
        .collect()
}

/// 増減率の上位 `n` 件を降順で返す
///
/// 同率の場合は入力順を保持します（安定ソート）。
pub fn top_growth(records: &[GrowthRecord], n: usize) -> Vec<GrowthRecord> {
    let mut ranked = records.to_vec();
    // Vec::sort_by は安定ソートなので同率時の入力順はそのまま残る
    ranked.sort_by(|a, b| {
        b.growth_rate
            .partial_cmp(&a.growth_rate)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}
