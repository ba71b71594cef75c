//! Loading hop networks from files and querying them end to end

mod common;

use common::{RecordFiles, RAIL_LINES};
use hopgraph::{
    HopNetwork, IngestConfig, IngestError, NetworkLoader, OutputFormat, QuerySession,
    RecordError, SessionConfig, Strategy,
};
use std::io::{sink, Cursor};

fn s(name: &str) -> String {
    name.to_string()
}

fn load(files: &RecordFiles, sets: &[(&str, &[&str])]) -> Result<HopNetwork, IngestError> {
    let paths: Vec<_> = sets.iter().map(|(name, lines)| files.write(name, lines)).collect();
    NetworkLoader::new().load_files(&paths)
}

fn ask(network: &HopNetwork, config: SessionConfig, input: &str) -> String {
    let session = QuerySession::new(network, config);
    let mut out = Vec::new();
    session
        .run(Cursor::new(input), &mut out, &mut sink())
        .expect("session failed");
    String::from_utf8(out).unwrap()
}

#[test]
fn test_single_file_network() {
    let files = RecordFiles::new();
    let network = load(&files, &[("rail.tsv", RAIL_LINES)]).unwrap();

    assert_eq!(network.vertex_count(), 8);
    assert_eq!(network.edge_count(), 7);
    assert_eq!(network.get_weight(&s("Haifa"), &s("Hadera")), Ok(&25));
    assert_eq!(
        network.direct_sources(&s("Tel-Aviv")).unwrap(),
        vec![s("Netanya"), s("Beersheba")]
    );
}

#[test]
fn test_duplicates_across_files_keep_minimum() {
    let files = RecordFiles::new();
    let network = load(
        &files,
        &[
            ("a.tsv", &["Haifa\tAcre\t12", "Acre\tHaifa\t30"]),
            ("b.tsv", &["Haifa\tAcre\t9", "Acre\tHaifa\t31"]),
            ("c.tsv", &["Haifa\tAcre\t15"]),
        ],
    )
    .unwrap();

    assert_eq!(network.get_weight(&s("Haifa"), &s("Acre")), Ok(&9));
    assert_eq!(network.get_weight(&s("Acre"), &s("Haifa")), Ok(&30));
    assert_eq!(network.edge_count(), 2);
}

#[test]
fn test_malformed_line_in_later_file_stops_load() {
    let files = RecordFiles::new();
    let err = load(
        &files,
        &[
            ("good.tsv", RAIL_LINES),
            ("bad.tsv", &["Haifa\tAcre\t3", "Haifa\tTel Aviv\t40"]),
        ],
    )
    .unwrap_err();

    match err {
        IngestError::Malformed {
            file,
            line_no,
            reason,
            ..
        } => {
            assert!(file.ends_with("bad.tsv"));
            assert_eq!(line_no, 2);
            assert_eq!(reason, RecordError::NameContainsSpace(s("Tel Aviv")));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_reserved_name_rejected() {
    let files = RecordFiles::new();
    let err = load(&files, &[("exit.tsv", &["EXIT\tHaifa\t3"])]).unwrap_err();
    assert!(err.to_string().contains("name 'EXIT' is reserved"));
}

#[test]
fn test_unreadable_file_is_reported() {
    let files = RecordFiles::new();
    let good = files.write("good.tsv", RAIL_LINES);
    let missing = files.missing("nope.tsv");

    let err = NetworkLoader::new()
        .load_files([good, missing.clone()])
        .unwrap_err();
    match err {
        IngestError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_name_limit_is_configurable() {
    let files = RecordFiles::new();
    let path = files.write("long.tsv", &["Kiryat-Shmona-North\tHaifa\t90"]);

    assert!(NetworkLoader::new().load_files([&path]).is_err());

    let network = NetworkLoader::with_config(IngestConfig::new().max_name_len(24))
        .load_files([&path])
        .unwrap();
    assert!(network.contains_vertex(&s("Kiryat-Shmona-North")));
}

#[test]
fn test_query_session_over_loaded_network() {
    let files = RecordFiles::new();
    let network = load(&files, &[("rail.tsv", RAIL_LINES)]).unwrap();

    let out = ask(&network, SessionConfig::new(), "Haifa\nJerusalem Eilat\nexit\nAcre\n");
    assert_eq!(
        out,
        "Haifa -> Acre Hadera Nahariya Netanya Tel-Aviv Jerusalem\n\
         Jerusalem -> (no connections)\n\
         Vertex not found: Eilat\n"
    );

    let out = ask(
        &network,
        SessionConfig::new().strategy(Strategy::DepthFirst),
        "Haifa",
    );
    assert_eq!(
        out,
        "Haifa -> Acre Nahariya Hadera Netanya Tel-Aviv Jerusalem\n"
    );
}

#[test]
fn test_json_session_over_loaded_network() {
    let files = RecordFiles::new();
    let network = load(&files, &[("rail.tsv", RAIL_LINES)]).unwrap();

    let out = ask(
        &network,
        SessionConfig::new().format(OutputFormat::Json),
        "Beersheba",
    );
    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(value["origin"], "Beersheba");
    assert_eq!(
        value["connections"],
        serde_json::json!(["Tel-Aviv", "Jerusalem"])
    );
}

#[test]
fn test_dumps_of_loaded_network() {
    let files = RecordFiles::new();
    let network = load(&files, &[("small.tsv", &["Acre\tHaifa\t12", "Haifa\tHadera\t25"])]).unwrap();

    assert_eq!(
        network.adjacency_view().to_string(),
        "Acre: Haifa\nHaifa: Hadera\nHadera:\n"
    );
    let matrix = network.matrix_view().to_string();
    let rows: Vec<&str> = matrix.lines().skip(4).collect();
    assert_eq!(rows[0], format!("{:<10}|{:>10}{:>10}{:>10}", "Acre", 0, 12, 0));
    assert_eq!(rows[1], format!("{:<10}|{:>10}{:>10}{:>10}", "Haifa", 0, 0, 25));
}
