use csv::{ReaderBuilder, Writer};
use std::fs::File;
use std::io::{Read, Write as IoWrite};
use std::path::Path;

use crate::dataset::{AgeCompositionRecord, PopulationRecord};
use crate::error::{Error, Result};
use crate::metrics::GrowthRecord;

// 表計算ソフト互換のためのUTF-8 BOM
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// 人口データCSVのヘッダー
pub const POPULATION_CSV_HEADER: [&str; 6] =
    ["prefecture", "2014", "2017", "2020", "2023", "growth_rate"];

/// 年齢構成データCSVのヘッダー
pub const AGE_CSV_HEADER: [&str; 4] = ["year", "0-14歳", "15-64歳", "65歳以上"];

// BOM付きでファイルを作成し、CSVライターを返す
fn bom_writer<P: AsRef<Path>>(path: P) -> Result<Writer<File>> {
    let mut file = File::create(path.as_ref()).map_err(Error::Io)?;
    file.write_all(UTF8_BOM).map_err(Error::Io)?;
    Ok(Writer::from_writer(file))
}

/// 都道府県別人口テーブル（増減率付き）をCSVファイルに書き込む
///
/// UTF-8（BOM付き）・カンマ区切りで、入力順のまま1都道府県1行を出力します。
pub fn write_population_csv<P: AsRef<Path>>(path: P, records: &[GrowthRecord]) -> Result<()> {
    let mut wtr = bom_writer(path)?;

    wtr.write_record(POPULATION_CSV_HEADER).map_err(Error::Csv)?;

    for entry in records {
        let rec = &entry.record;
        wtr.write_record(&[
            rec.prefecture.clone(),
            rec.pop_2014.to_string(),
            rec.pop_2017.to_string(),
            rec.pop_2020.to_string(),
            rec.pop_2023.to_string(),
            format!("{:.2}", entry.growth_rate),
        ])
        .map_err(Error::Csv)?;
    }

    wtr.flush().map_err(Error::Io)?;
    Ok(())
}

/// 全国年齢構成テーブルをCSVファイルに書き込む
///
/// UTF-8（BOM付き）・カンマ区切りで、1年1行を出力します。
pub fn write_age_csv<P: AsRef<Path>>(path: P, records: &[AgeCompositionRecord]) -> Result<()> {
    let mut wtr = bom_writer(path)?;

    wtr.write_record(AGE_CSV_HEADER).map_err(Error::Csv)?;

    for rec in records {
        wtr.write_record(&[
            rec.year.to_string(),
            format!("{:.1}", rec.pct_0_14),
            format!("{:.1}", rec.pct_15_64),
            format!("{:.1}", rec.pct_65_plus),
        ])
        .map_err(Error::Csv)?;
    }

    wtr.flush().map_err(Error::Io)?;
    Ok(())
}

// フィールドを数値として解釈する
fn parse_field<T: std::str::FromStr>(value: &str, column: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| Error::Format(format!("列 {} の値を解釈できません: {}", column, value)))
}

/// `write_population_csv` が出力したCSVファイルを読み戻す
///
/// 先頭のBOMは読み飛ばします。行の値が数値として解釈できない場合は
/// データ形式エラーになります。
pub fn read_population_csv<P: AsRef<Path>>(path: P) -> Result<Vec<GrowthRecord>> {
    let mut buf = Vec::new();
    File::open(path.as_ref())
        .and_then(|mut file| file.read_to_end(&mut buf))
        .map_err(Error::Io)?;

    // 先頭のBOMを除去してから解析する
    let body = buf.strip_prefix(UTF8_BOM).unwrap_or(&buf);

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(body);

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(Error::Csv)?;
        if row.len() != POPULATION_CSV_HEADER.len() {
            return Err(Error::Format(format!(
                "列数が一致しません: 期待値 {}, 実際 {}",
                POPULATION_CSV_HEADER.len(),
                row.len()
            )));
        }

        records.push(GrowthRecord {
            record: PopulationRecord {
                prefecture: row[0].to_string(),
                pop_2014: parse_field(&row[1], "2014")?,
                pop_2017: parse_field(&row[2], "2017")?,
                pop_2020: parse_field(&row[3], "2020")?,
                pop_2023: parse_field(&row[4], "2023")?,
            },
            growth_rate: parse_field(&row[5], "growth_rate")?,
        });
    }

    Ok(records)
}
