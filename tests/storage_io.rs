use pubmap::models::CountryRecord;
use pubmap::storage;
use pubmap::Dataset;
use std::fs;
use tempfile::tempdir;

#[test]
fn csv_round_trip_keeps_pairs_and_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("countries.csv");
    let out = Dataset::builtin().build().unwrap();

    storage::save_csv(&out.table, &path).unwrap();
    let back = storage::load_csv(&path).unwrap();
    assert_eq!(back, out.table);

    let txt = fs::read_to_string(&path).unwrap();
    assert!(txt.starts_with("countries,count\nUnited States of America,579\nChina,273\n"));
    assert!(txt.ends_with("Iceland,1\n"));
    assert_eq!(txt.lines().count(), 1 + out.table.len());
}

#[test]
fn names_with_commas_are_quoted_and_survive() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tricky.csv");
    let rows = vec![
        CountryRecord::new("Korea, Republic of", 65),
        CountryRecord::new("Côte d'Ivoire", 3),
    ];
    storage::save_csv(&rows, &path).unwrap();
    let txt = fs::read_to_string(&path).unwrap();
    assert!(txt.contains("\"Korea, Republic of\",65\n"));
    assert_eq!(storage::load_csv(&path).unwrap(), rows);
}

#[test]
fn dataset_json_substitutes_builtin() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(
        &path,
        r#"{
          "countries": ["Iceland", "Atlantis"],
          "counts": [1, 5],
          "coordinates": {"Iceland": [64.9631, -19.0208]}
        }"#,
    )
    .unwrap();

    let ds = storage::load_dataset_json(&path).unwrap();
    assert_eq!(ds.countries, vec!["Iceland", "Atlantis"]);
    assert_eq!(ds.counts, vec![1, 5]);
    assert_eq!(ds.coordinates.len(), 1);

    let out = ds.build().unwrap();
    assert_eq!(out.table.len(), 2);
    assert_eq!(out.markers.len(), 1);
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("countries.csv");
    let err = storage::save_csv(&[], &path).unwrap_err();
    assert!(err.to_string().contains("countries.csv"));
}
