//! Properties of a configuration session over arbitrary command sequences.

use std::sync::Arc;

use proptest::prelude::*;
use showroom_core::{share, Catalog, Configurator, CoreError, OptionCategory};

/// A UI event, possibly carrying stale or bogus ids.
#[derive(Debug, Clone)]
enum Command {
    SelectModel(String),
    SelectOption(String, String),
    ToggleFeature(String),
}

const MODELS: &[&str] = &["sedan", "suv", "sports", "hovercraft"];
const CATEGORIES: &[&str] = &[
    "color", "finish", "interior", "trim", "wheels", "calipers", "tires", "paint",
];
const OPTION_IDS: &[&str] = &[
    "black", "red", "blue", "green", "silver", "matte", "pearl", "walnut", "sport", "carbon",
    "all-terrain", "premium", "yellow", "winter", "brown-leather", "red-leather", "bogus",
];
const FEATURES: &[&str] = &[
    "spoiler", "exhaust", "suspension", "sunroof", "lights", "windows", "jetpack",
];

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        1 => proptest::sample::select(MODELS).prop_map(|m| Command::SelectModel(m.to_string())),
        4 => (proptest::sample::select(CATEGORIES), proptest::sample::select(OPTION_IDS))
            .prop_map(|(c, o)| Command::SelectOption(c.to_string(), o.to_string())),
        2 => proptest::sample::select(FEATURES).prop_map(|f| Command::ToggleFeature(f.to_string())),
    ]
}

fn apply(session: &mut Configurator, command: &Command) -> Result<(), CoreError> {
    match command {
        Command::SelectModel(model) => session.select_model(model),
        Command::SelectOption(category, option) => session.select_option_by_key(category, option),
        Command::ToggleFeature(feature) => session.toggle_feature(feature).map(|_| ()),
    }
}

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("builtin catalog loads"))
}

proptest! {
    #[test]
    fn total_is_base_plus_options_in_every_reachable_state(
        commands in proptest::collection::vec(command(), 0..40)
    ) {
        let mut session = Configurator::new(catalog(), "sedan").unwrap();

        for command in &commands {
            let _ = apply(&mut session, command);

            let quote = session.quote();
            prop_assert_eq!(quote.total, quote.base_price + quote.options_total);
            prop_assert_eq!(quote.base_price, session.selected_model().base_price);
            prop_assert!(!quote.options_total.is_negative());
            prop_assert_eq!(quote, session.quote());
        }
    }

    #[test]
    fn rejected_commands_leave_state_unchanged(
        commands in proptest::collection::vec(command(), 0..40)
    ) {
        let mut session = Configurator::new(catalog(), "sports").unwrap();

        for command in &commands {
            let before = session.state().clone();
            if apply(&mut session, command).is_err() {
                prop_assert_eq!(session.state(), &before);
            }
        }
    }

    #[test]
    fn accepted_selection_is_read_back(
        commands in proptest::collection::vec(command(), 0..40)
    ) {
        let mut session = Configurator::new(catalog(), "suv").unwrap();

        for command in &commands {
            if let Command::SelectOption(key, option) = command {
                if session.select_option_by_key(key, option).is_ok() {
                    let category: OptionCategory = key.parse().unwrap();
                    prop_assert_eq!(session.state().selection(category), Some(option.as_str()));
                }
            } else {
                let _ = apply(&mut session, command);
            }
        }
    }

    #[test]
    fn snapshot_restore_preserves_total(
        commands in proptest::collection::vec(command(), 0..40)
    ) {
        let catalog = catalog();
        let mut session = Configurator::new(catalog.clone(), "sedan").unwrap();
        for command in &commands {
            let _ = apply(&mut session, command);
        }

        let mut restored = Configurator::new(catalog.clone(), "sports").unwrap();
        restored.restore(&session.snapshot()).unwrap();
        prop_assert_eq!(restored.quote(), session.quote());
        prop_assert_eq!(restored.state(), session.state());

        let code = share::encode(&session.snapshot()).unwrap();
        let shared = Configurator::from_snapshot(catalog, &share::decode(&code).unwrap()).unwrap();
        prop_assert_eq!(shared.quote().total, session.quote().total);
    }
}

#[test]
fn sedan_example_from_the_brochure() {
    let mut session = Configurator::new(catalog(), "sedan").unwrap();
    let quote = session.quote();
    assert_eq!(
        (quote.base_price.units(), quote.options_total.units(), quote.total.units()),
        (420_000, 0, 420_000)
    );

    session.select_option_by_key("color", "red").unwrap();
    let quote = session.quote();
    assert_eq!(
        (quote.base_price.units(), quote.options_total.units(), quote.total.units()),
        (420_000, 15_000, 435_000)
    );

    session.toggle_feature("spoiler").unwrap();
    assert_eq!(session.quote().total.units(), 439_500);

    session.toggle_feature("spoiler").unwrap();
    assert_eq!(session.quote().total.units(), 435_000);

    let before = session.state().clone();
    assert_eq!(
        session.select_model("nonexistent"),
        Err(CoreError::InvalidModel("nonexistent".to_string()))
    );
    assert_eq!(session.state(), &before);
}

#[test]
fn custom_catalog_document_drives_a_session() {
    let json = r##"{
        "models": [
            { "id": "roadster", "displayName": "Roadster", "basePrice": 300000 }
        ],
        "sharedOptions": {
            "color":    [{ "id": "white", "displayName": "White", "default": true, "material": { "color": "#ffffff" } }],
            "finish":   [{ "id": "gloss", "displayName": "Gloss", "default": true }],
            "interior": [{ "id": "cloth", "displayName": "Cloth", "default": true },
                         { "id": "leather", "displayName": "Leather", "priceDelta": 9000 }],
            "trim":     [{ "id": "plain", "displayName": "Plain", "default": true }],
            "wheels":   [{ "id": "steel", "displayName": "Steel", "default": true }],
            "calipers": [{ "id": "grey", "displayName": "Grey", "default": true }],
            "tires":    [{ "id": "road", "displayName": "Road", "default": true }]
        },
        "features": [{ "id": "hardtop", "displayName": "Hardtop", "priceDelta": 22000 }]
    }"##;

    let catalog = Arc::new(Catalog::from_json(json).unwrap());
    let mut session = Configurator::with_first_model(catalog);
    session.select_option(OptionCategory::Interior, "leather").unwrap();
    session.toggle_feature("hardtop").unwrap();

    assert_eq!(session.quote().total.units(), 331_000);
}
