use std::collections::HashSet;

use jinkors::dataset::{
    age_composition_table, population_snapshot_2023, population_table, CENSUS_YEARS,
};

#[test]
fn test_population_table_unique_prefectures() {
    // 元データに含まれていた鳥取県の重複行が整理されていること
    let table = population_table();
    let names: HashSet<&str> = table.iter().map(|r| r.prefecture.as_str()).collect();

    assert_eq!(table.len(), 46);
    assert_eq!(names.len(), table.len(), "都道府県名が重複している");

    let tottori_count = table.iter().filter(|r| r.prefecture == "鳥取県").count();
    assert_eq!(tottori_count, 1);
}

#[test]
fn test_population_table_tokyo_row() {
    let table = population_table();
    let tokyo = table.iter().find(|r| r.prefecture == "東京都").unwrap();

    assert_eq!(tokyo.pop_2014, 13515);
    assert_eq!(tokyo.pop_2017, 13724);
    assert_eq!(tokyo.pop_2020, 14048);
    assert_eq!(tokyo.pop_2023, 14125);
    assert_eq!(tokyo.values(), [13515, 13724, 14048, 14125]);

    // 先頭行は東京都（入力順を保持）
    assert_eq!(table[0].prefecture, "東京都");
}

#[test]
fn test_census_years() {
    assert_eq!(CENSUS_YEARS, [2014, 2017, 2020, 2023]);
}

#[test]
fn test_age_composition_2023_row() {
    let table = age_composition_table();
    let row = table.iter().find(|r| r.year == 2023).unwrap();

    assert_eq!(row.pct_0_14, 11.6);
    assert_eq!(row.pct_15_64, 58.2);
    assert_eq!(row.pct_65_plus, 30.2);

    let total = row.pct_0_14 + row.pct_15_64 + row.pct_65_plus;
    assert!((total - 100.0).abs() < 0.1, "構成比の合計が100%から外れている: {}", total);
}

#[test]
fn test_age_composition_all_rows_sum_to_100() {
    let table = age_composition_table();
    assert_eq!(table.len(), 10);

    for row in &table {
        let total = row.pct_0_14 + row.pct_15_64 + row.pct_65_plus;
        assert!(
            (total - 100.0).abs() < 0.5,
            "{}年の構成比合計が想定外: {}",
            row.year,
            total
        );
    }
}

#[test]
fn test_age_composition_years_ascending() {
    let table = age_composition_table();
    for pair in table.windows(2) {
        assert_eq!(pair[1].year, pair[0].year + 1);
    }
    assert_eq!(table[0].year, 2014);
}

#[test]
fn test_population_snapshot_size() {
    let snapshot = population_snapshot_2023();
    assert_eq!(snapshot.len(), 47);
    assert!(snapshot.contains(&14125));
}

#[test]
fn test_factories_return_fresh_equal_values() {
    // 工場関数は呼び出しごとに同値の新しい構造体を返す（共有状態を持たない）
    assert_eq!(population_table(), population_table());
    assert_eq!(age_composition_table(), age_composition_table());
    assert_eq!(population_snapshot_2023(), population_snapshot_2023());
}
