mod common;

use edloadout_lib::{parse_slef, Error};

use common::{catalog_entry, fixture_catalog, fixture_text};

fn slef(ship: &str, modules: &str) -> String {
    format!(r#"[{{"header": {{}}, "data": {{"Ship": "{ship}", "ShipName": "Test", "Modules": [{modules}]}}}}]"#)
}

#[test]
fn parses_fixture_in_module_order() {
    let catalog = fixture_catalog();
    let loadout = parse_slef(&fixture_text("slef_krait.json"), &catalog).expect("fixture parses");

    assert_eq!(loadout.name, "Kestrel");
    assert_eq!(loadout.ship, "Krait Mk II");

    let got: Vec<(&str, &str, u8)> = loadout
        .components
        .iter()
        .map(|c| (c.module.as_str(), c.blueprint.as_str(), c.grade))
        .collect();
    assert_eq!(
        got,
        vec![
            ("Armour", "Heavy Duty", 5),
            ("Power Plant", "Overcharged", 3),
            ("Thrusters", "Dirty Drives", 5),
            ("Frame Shift Drive", "Increased Range", 5),
            ("Power Distributor", "Charge Enhanced", 4),
            ("Burst Laser", "Efficient", 3),
            ("Shield Generator", "Reinforced", 5),
            ("Shield Booster", "Heavy Duty", 2),
        ]
    );

    let booster = catalog_entry(&catalog, "Shield Booster", "Heavy Duty", 2);
    assert_eq!(loadout.components[7].uuid, booster.uuid);
}

#[test]
fn ship_type_is_case_insensitive() {
    let catalog = fixture_catalog();
    for ship in ["viper", "VIPER", "Viper"] {
        let loadout = parse_slef(&slef(ship, ""), &catalog).expect("parse");
        assert_eq!(loadout.ship, "Viper");
    }
}

#[test]
fn unknown_ship_aborts_parse() {
    let err = parse_slef(&slef("unknownship", ""), &fixture_catalog()).expect_err("unknown ship");
    assert!(err.to_string().contains("Unknown ship type: unknownship"));
    assert!(matches!(err, Error::UnknownShipType { .. }));
}

#[test]
fn unengineered_modules_produce_nothing() {
    let modules = r#"
        {"Item": "int_engine_size3_class5"},
        {"Item": "int_engine_size3_class5",
         "Engineering": {"BlueprintName": "Engine_Dirty", "Level": 2}},
        {"Item": "int_hyperdrive_size3_class5",
         "Engineering": {"BlueprintName": "FSD_LongRange", "Level": 1}}
    "#;
    let loadout = parse_slef(&slef("cobramkiii", modules), &fixture_catalog()).expect("parse");

    let got: Vec<(&str, u8)> = loadout
        .components
        .iter()
        .map(|c| (c.module.as_str(), c.grade))
        .collect();
    assert_eq!(got, vec![("Thrusters", 2), ("Frame Shift Drive", 1)]);
}

#[test]
fn armour_items_resolve_armour_blueprints() {
    let modules = r#"{"Item": "type9_armour_grade1",
        "Engineering": {"BlueprintName": "Armour_HeavyDuty", "Level": 3}}"#;
    let loadout = parse_slef(&slef("type9", modules), &fixture_catalog()).expect("parse");
    assert_eq!(loadout.ship, "Type-9 Heavy");
    assert_eq!(loadout.components.len(), 1);
    assert_eq!(loadout.components[0].module, "Armour");
}

#[test]
fn blueprint_for_other_module_type_is_skipped() {
    let modules = r#"{"Item": "int_powerplant_size4_class5",
        "Engineering": {"BlueprintName": "Engine_Dirty", "Level": 3}}"#;
    let loadout = parse_slef(&slef("adder", modules), &fixture_catalog()).expect("parse");
    assert!(loadout.components.is_empty());
}

#[test]
fn malformed_json_is_a_parse_failure() {
    let err = parse_slef("[{", &fixture_catalog()).expect_err("malformed");
    assert!(matches!(err, Error::Json(_)));

    let err = parse_slef(r#"{"data": {}}"#, &fixture_catalog()).expect_err("not an array");
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn out_of_range_level_does_not_drop_neighbours() {
    let modules = r#"
        {"Item": "int_engine_size3_class5",
         "Engineering": {"BlueprintName": "Engine_Dirty", "Level": 3}},
        {"Item": "int_hyperdrive_size3_class5",
         "Engineering": {"BlueprintName": "FSD_LongRange", "Level": 300}},
        {"Item": "int_hyperdrive_size3_class5", "Engineering": {"Level": 2}}
    "#;
    let loadout = parse_slef(&slef("cobramkiii", modules), &fixture_catalog()).expect("parse");
    assert_eq!(loadout.components.len(), 1);
    assert_eq!(loadout.components[0].module, "Thrusters");
    assert_eq!(loadout.components[0].grade, 3);
}
