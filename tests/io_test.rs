use std::fs;

use jinkors::dataset::{age_composition_table, population_table};
use jinkors::io::{read_population_csv, write_age_csv, write_population_csv};
use jinkors::metrics::with_growth_rates;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

#[test]
fn test_population_csv_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("real_population_data.csv");

    let derived = with_growth_rates(&population_table());
    write_population_csv(&path, &derived).unwrap();

    let bytes = fs::read(&path).unwrap();
    // 表計算ソフト互換のためBOMで始まる
    assert!(bytes.starts_with(UTF8_BOM));

    let contents = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines[0], "prefecture,2014,2017,2020,2023,growth_rate");
    // ヘッダー行 + 46都道府県
    assert_eq!(lines.len(), 47);
    assert_eq!(lines[1], "東京都,13515,13724,14048,14125,0.55");
}

#[test]
fn test_population_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round_trip.csv");

    let derived = with_growth_rates(&population_table());
    write_population_csv(&path, &derived).unwrap();
    let loaded = read_population_csv(&path).unwrap();

    // 読み戻した結果が書き込んだテーブルと一致する
    assert_eq!(loaded, derived);
}

#[test]
fn test_age_csv_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("age_composition_data.csv");

    write_age_csv(&path, &age_composition_table()).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(UTF8_BOM));

    let contents = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines[0], "year,0-14歳,15-64歳,65歳以上");
    // ヘッダー行 + 10年分
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[1], "2014,12.9,61.3,25.8");
    assert_eq!(lines[10], "2023,11.6,58.2,30.2");
}

#[test]
fn test_csv_output_is_deterministic() {
    // 同じ入力に対して2回書き込むとバイト単位で一致する
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    let derived = with_growth_rates(&population_table());
    write_population_csv(&first, &derived).unwrap();
    write_population_csv(&second, &derived).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_read_population_csv_rejects_malformed_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");

    fs::write(
        &path,
        "prefecture,2014,2017,2020,2023,growth_rate\n東京都,13515,abc,14048,14125,0.55\n",
    )
    .unwrap();

    assert!(read_population_csv(&path).is_err());
}
