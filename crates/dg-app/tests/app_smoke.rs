//! Smoke tests for the dg-app service layer.

use dg_app::{AppError, GraphSession, Outcome, run_script};
use dg_solver::{Distance, DistanceMatrix};

const ROADS: &str = r#"
# small road network
add-vertex "Old Town"
add-vertex Harbor
add-vertex Airport
add-vertex Farm

add-edge "Old Town" Harbor 4
add-edge Harbor Airport 3
add-edge "Old Town" Airport 10
add-edge Harbor Airport 7
"#;

#[test]
fn script_to_table() {
    let mut session = GraphSession::new();
    let outcomes = run_script(&mut session, ROADS).unwrap();
    assert_eq!(outcomes.len(), 8);

    let table = session.compute();
    let m = table.matrix();
    assert_eq!(m.labels(), &["Old Town", "Harbor", "Airport", "Farm"]);
    assert_eq!(m.get_by_label("Old Town", "Airport"), Some(Distance::Finite(7)));
    assert_eq!(m.get_by_label("Harbor", "Airport"), Some(Distance::Finite(3)));
    assert_eq!(m.get_by_label("Farm", "Harbor"), Some(Distance::Unreachable));

    assert_eq!(
        table.to_tsv(),
        "0\t4\t7\t\n4\t0\t3\t\n7\t3\t0\t\n\t\t\t0\n"
    );
}

#[test]
fn export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.tsv");

    let mut session = GraphSession::new();
    run_script(&mut session, ROADS).unwrap();
    let script = format!("export \"{}\" --header\n", path.display());
    let outcomes = run_script(&mut session, &script).unwrap();
    assert_eq!(
        outcomes,
        vec![Outcome::Exported {
            path: path.clone(),
            rows: 4
        }]
    );

    let content = std::fs::read_to_string(&path).unwrap();
    let first = content.lines().next().unwrap();
    assert_eq!(first, "\tOld Town\tHarbor\tAirport\tFarm");
    assert_eq!(content.lines().count(), 5);
}

#[test]
fn clean_resets_session() {
    let mut session = GraphSession::new();
    run_script(&mut session, ROADS).unwrap();
    let outcomes = run_script(&mut session, "clear\nvertices\nedges\n").unwrap();
    assert_eq!(outcomes[0], Outcome::Cleared);
    assert_eq!(outcomes[1], Outcome::Vertices(vec![]));
    assert_eq!(outcomes[2], Outcome::Edges(vec![]));
    assert!(session.compute().is_empty());
}

#[test]
fn bad_weight_reports_line() {
    let mut session = GraphSession::new();
    let err = run_script(
        &mut session,
        "add-vertex A\nadd-vertex B\nadd-edge A B -2\n",
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Script { line: 3, .. }));
    assert!(err.to_string().starts_with("Line 3: Invalid weight '-2'"));
    assert!(session.edges().is_empty());
}

#[test]
fn distance_matrix_json_keeps_its_shape() {
    let mut session = GraphSession::new();
    run_script(&mut session, ROADS).unwrap();
    let matrix = session.compute().into_matrix();

    let json = serde_json::to_string(&matrix).unwrap();
    let back: DistanceMatrix = serde_json::from_str(&json).unwrap();
    assert_eq!(back, matrix);
}

#[test]
fn distance_matrix_json_with_wrong_cell_count_is_rejected() {
    let err = serde_json::from_str::<DistanceMatrix>(r#"{"labels":["A","B"],"data":[0]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("expected=4, actual=1"), "{err}");

    let ok: DistanceMatrix =
        serde_json::from_str(r#"{"labels":["A","B"],"data":[0,null,null,0]}"#).unwrap();
    assert_eq!(ok.get(1, 1), Some(Distance::ZERO));
    assert_eq!(ok.get(0, 1), Some(Distance::Unreachable));
}
