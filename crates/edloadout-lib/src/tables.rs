//! Translation tables from in-game identifiers to display names.
//!
//! SLEF exports carry journal identifiers (`anaconda`,
//! `int_hullreinforcement_size5_class2`); blueprint catalogs and loadouts use
//! the names shown in game.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};

/// Journal ship identifier to display name.
const SHIP_TYPES: &[(&str, &str)] = &[
    ("adder", "Adder"),
    ("anaconda", "Anaconda"),
    ("asp", "Asp Explorer"),
    ("asp_scout", "Asp Scout"),
    ("belugaliner", "Beluga Liner"),
    ("cobramkiii", "Cobra Mk III"),
    ("cobramkiv", "Cobra Mk IV"),
    ("cutter", "Imperial Cutter"),
    ("diamondback", "Diamondback Scout"),
    ("diamondbackxl", "Diamondback Explorer"),
    ("dolphin", "Dolphin"),
    ("eagle", "Eagle"),
    ("empire_courier", "Imperial Courier"),
    ("empire_eagle", "Imperial Eagle"),
    ("empire_trader", "Imperial Clipper"),
    ("federation_corvette", "Federal Corvette"),
    ("federation_dropship", "Federal Dropship"),
    ("federation_dropship_mkii", "Federal Assault Ship"),
    ("federation_gunship", "Federal Gunship"),
    ("ferdelance", "Fer-de-Lance"),
    ("hauler", "Hauler"),
    ("independant_trader", "Keelback"),
    ("krait_light", "Krait Phantom"),
    ("krait_mkii", "Krait Mk II"),
    ("mamba", "Mamba"),
    ("orca", "Orca"),
    ("python", "Python"),
    ("python_nx", "Python Mk II"),
    ("sidewinder", "Sidewinder"),
    ("type6", "Type-6 Transporter"),
    ("type7", "Type-7 Transporter"),
    ("type9", "Type-9 Heavy"),
    ("type9_military", "Type-10 Defender"),
    ("typex", "Alliance Chieftain"),
    ("typex_2", "Alliance Crusader"),
    ("typex_3", "Alliance Challenger"),
    ("viper", "Viper"),
    ("viper_mkiv", "Viper Mk IV"),
    ("vulture", "Vulture"),
];

/// Module identifier prefix to display name. The first matching prefix wins,
/// so longer identifiers sharing a stem must be listed before the stem.
const MODULE_TYPES: &[(&str, &str)] = &[
    ("int_powerplant", "Power Plant"),
    ("int_engine", "Thrusters"),
    ("int_hyperdrive", "Frame Shift Drive"),
    ("int_lifesupport", "Life Support"),
    ("int_powerdistributor", "Power Distributor"),
    ("int_sensors", "Sensors"),
    ("int_fueltank", "Fuel Tank"),
    ("int_shieldgenerator", "Shield Generator"),
    ("int_shieldcellbank", "Shield Cell Bank"),
    ("int_hullreinforcement", "Hull Reinforcement Package"),
    ("int_modulereinforcement", "Module Reinforcement Package"),
    ("int_fsdinterdictor", "Frame Shift Drive Interdictor"),
    ("int_fuelscoop", "Fuel Scoop"),
    ("int_refinery", "Refinery"),
    ("int_detailedsurfacescanner", "Detailed Surface Scanner"),
    ("int_dronecontrol_collection", "Collector Limpet Controller"),
    ("int_dronecontrol_fueltransfer", "Fuel Transfer Limpet Controller"),
    ("int_dronecontrol_prospector", "Prospector Limpet Controller"),
    ("int_dronecontrol_resourcesiphon", "Hatch Breaker Limpet Controller"),
    ("hpt_shieldbooster", "Shield Booster"),
    ("hpt_chafflauncher", "Chaff Launcher"),
    ("hpt_heatsinklauncher", "Heat Sink Launcher"),
    ("hpt_electroniccountermeasure", "Electronic Countermeasure"),
    ("hpt_plasmapointdefence", "Point Defence"),
    ("hpt_cloudscanner", "Frame Shift Wake Scanner"),
    ("hpt_cargoscanner", "Manifest Scanner"),
    ("hpt_crimescanner", "Kill Warrant Scanner"),
    ("hpt_pulselaserburst", "Burst Laser"),
    ("hpt_pulselaser", "Pulse Laser"),
    ("hpt_beamlaser", "Beam Laser"),
    ("hpt_multicannon", "Multi-cannon"),
    ("hpt_cannon", "Cannon"),
    ("hpt_slugshot", "Fragment Cannon"),
    ("hpt_railgun", "Rail Gun"),
    ("hpt_plasmaaccelerator", "Plasma Accelerator"),
    ("hpt_minelauncher", "Mine Launcher"),
    ("hpt_dumbfiremissilerack", "Missile Rack"),
    ("hpt_basicmissilerack", "Seeker Missile Rack"),
    ("hpt_advancedtorppylon", "Torpedo Pylon"),
    ("hpt_mininglaser", "Mining Laser"),
];

/// Marker identifying bulkhead modules regardless of hull.
const ARMOUR_MARKER: &str = "_armour_";
const ARMOUR: &str = "Armour";

static SHIP_LOOKUP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SHIP_TYPES.iter().copied().collect());

/// Translate a journal ship identifier (any case) to its display name.
pub fn ship_type(value: &str) -> Result<&'static str> {
    SHIP_LOOKUP
        .get(value.to_lowercase().as_str())
        .copied()
        .ok_or_else(|| Error::UnknownShipType {
            value: value.to_string(),
        })
}

/// Translate a journal module identifier (any case) to its display name.
pub fn module_type(value: &str) -> Result<&'static str> {
    let item = value.to_lowercase();
    if item.contains(ARMOUR_MARKER) {
        return Ok(ARMOUR);
    }

    MODULE_TYPES
        .iter()
        .find(|(prefix, _)| item.starts_with(prefix))
        .map(|(_, name)| *name)
        .ok_or_else(|| Error::UnknownModuleType {
            value: value.to_string(),
        })
}

/// Display names of every known hull, in table order.
pub fn ship_names() -> impl Iterator<Item = &'static str> {
    SHIP_TYPES.iter().map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_lookup_ignores_case() {
        assert_eq!(ship_type("viper").unwrap(), "Viper");
        assert_eq!(ship_type("VIPER").unwrap(), "Viper");
        assert_eq!(ship_type("Federation_Corvette").unwrap(), "Federal Corvette");
    }

    #[test]
    fn unknown_ship_reports_value() {
        let err = ship_type("unknownship").unwrap_err();
        assert_eq!(err.to_string(), "Unknown ship type: unknownship");
    }

    #[test]
    fn ship_table_has_unique_keys() {
        assert_eq!(SHIP_LOOKUP.len(), SHIP_TYPES.len());
        assert!(SHIP_TYPES.iter().all(|(k, _)| *k == k.to_lowercase()));
    }

    #[test]
    fn module_prefix_matching() {
        assert_eq!(
            module_type("int_hullreinforcement_size3").unwrap(),
            "Hull Reinforcement Package"
        );
        assert_eq!(module_type("Int_Engine_Size5_Class5").unwrap(), "Thrusters");
    }

    #[test]
    fn armour_marker_takes_precedence() {
        assert_eq!(module_type("type9_armour_grade1").unwrap(), "Armour");
        assert_eq!(module_type("int_powerplant_armour_grade3").unwrap(), "Armour");
    }

    #[test]
    fn earlier_prefix_wins() {
        assert_eq!(
            module_type("hpt_pulselaserburst_gimbal_medium").unwrap(),
            "Burst Laser"
        );
        assert_eq!(module_type("hpt_pulselaser_fixed_small").unwrap(), "Pulse Laser");
    }

    #[test]
    fn unknown_module_reports_value() {
        let err = module_type("int_cargorack_size4_class1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown module type: int_cargorack_size4_class1"
        );
    }
}
