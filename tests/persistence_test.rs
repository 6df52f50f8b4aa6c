//! File-backed persistence: rows survive reopening the database and the
//! schema bootstrap can run on every launch.

use bmi_tracker::config::AppPaths;
use bmi_tracker::{BmiSession, Category, ComputeOutcome, MeasurementStore, ValidationError};

fn launch(paths: &AppPaths) -> BmiSession {
    let store = MeasurementStore::open(&paths.db_path).expect("open store");
    BmiSession::start(store).expect("ensure schema")
}

#[test]
fn measurements_survive_relaunch() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let paths = AppPaths::rooted_at(dir.path());

    {
        let mut session = launch(&paths);
        session.set_weight("140");
        session.set_height("68");
        let outcome = session.compute().expect("valid input");
        assert!(matches!(outcome, ComputeOutcome::Saved { .. }));
    }

    let mut session = launch(&paths);
    let history = session.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].bmi, 21.3);
    assert_eq!(history[0].weight, 140.0);
    assert_eq!(history[0].height, 68.0);

    session.set_weight("250");
    session.set_height("66");
    let outcome = session.compute().expect("valid input");
    assert_eq!(outcome.reading().category, Category::Obese);

    let history = session.history().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].weight, 250.0);
    assert!(history[0].id > history[1].id);
}

#[test]
fn store_creates_missing_parent_directory() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let paths = AppPaths::rooted_at(dir.path().join("a").join("b"));

    let store = MeasurementStore::open(&paths.db_path).unwrap();
    store.ensure_schema().unwrap();
    store.ensure_schema().unwrap();

    assert!(paths.db_path.is_file());
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn appended_values_round_trip() {
    let store = MeasurementStore::open_in_memory().unwrap();
    store.ensure_schema().unwrap();
    store.append(22.5, 140.0, 68.0).unwrap();

    let newest = &store.list_all().unwrap()[0];
    assert_eq!((newest.bmi, newest.weight, newest.height), (22.5, 140.0, 68.0));
}

#[test]
fn rejected_input_writes_nothing() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let paths = AppPaths::rooted_at(dir.path());
    let mut session = launch(&paths);

    session.set_weight("-5");
    session.set_height("65");
    assert_eq!(session.compute().unwrap_err(), ValidationError::InvalidWeight);

    session.set_weight("150");
    session.set_height("abc");
    assert_eq!(session.compute().unwrap_err(), ValidationError::InvalidHeight);

    assert!(launch(&paths).history().unwrap().is_empty());
}
