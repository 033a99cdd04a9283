//! Saving from one store handle and reopening from another, the way the
//! front end does across page loads.

use std::sync::Arc;

use showroom_core::{Catalog, Configurator, CoreError, Money, OptionCategory};
use showroom_store::{FileStore, SavedConfiguration, SnapshotStore, StoreError};

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().unwrap())
}

#[test]
fn saved_session_survives_a_new_store_handle() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = Configurator::new(catalog(), "suv").unwrap();
    session.select_option(OptionCategory::Wheels, "all-terrain").unwrap();
    session.select_option(OptionCategory::Finish, "matte").unwrap();
    session.toggle_feature("sunroof").unwrap();
    let expected = session.quote();

    {
        let mut store = FileStore::open(dir.path()).unwrap();
        store
            .save(&SavedConfiguration::capture("family", &session).unwrap())
            .unwrap();
    }

    let store = FileStore::open(dir.path()).unwrap();
    let record = store.load("family").unwrap();
    assert_eq!(record.total, expected.total);
    assert_eq!(record.total, Money::from_units(550_000 + 30_000 + 8_000 + 15_000));

    let reopened = record.open(catalog()).unwrap();
    assert_eq!(reopened.state(), session.state());
    assert_eq!(reopened.quote(), expected);
}

#[test]
fn list_and_delete_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();

    for (name, model) in [("weekend", "sports"), ("commute", "sedan")] {
        let session = Configurator::new(catalog(), model).unwrap();
        store
            .save(&SavedConfiguration::capture(name, &session).unwrap())
            .unwrap();
    }

    let mut other = FileStore::open(dir.path()).unwrap();
    let names: Vec<_> = other.list().unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["commute", "weekend"]);

    other.delete("weekend").unwrap();
    assert!(matches!(
        store.load("weekend"),
        Err(StoreError::NotFound { .. })
    ));
}

#[test]
fn tampered_record_is_refused_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    let session = Configurator::new(catalog(), "sedan").unwrap();
    store
        .save(&SavedConfiguration::capture("edited", &session).unwrap())
        .unwrap();

    let path = dir.path().join("edited.json");
    let body = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, body.replace("\"sedan\"", "\"hovercraft\"")).unwrap();

    let record = store.load("edited").unwrap();
    assert!(matches!(
        record.open(catalog()),
        Err(StoreError::Core(CoreError::InvalidSnapshot { .. }))
    ));
}
