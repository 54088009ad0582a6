//! Ships command handler for listing the hulls SLEF imports recognize.

use edloadout_lib::tables::ship_names;

/// Handle the ships subcommand.
pub fn handle_list_ships() {
    let mut names: Vec<&str> = ship_names().collect();
    names.sort_unstable();

    println!("Known ships ({}):", names.len());
    for name in names {
        println!("- {name}");
    }
}
