use std::fmt::Write;

use serde::Serialize;

use crate::engineer::EngineerRoster;
use crate::error::Result;
use crate::loadout::{Component, Loadout};

/// Presentation style for turning a [`Loadout`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadoutRenderMode {
    PlainText,
    Json,
}

/// Engineers able to apply one component of a loadout.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComponentAvailability {
    pub component: Component,
    pub engineers: Vec<String>,
}

/// Per-component engineer availability for a whole loadout.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AvailabilityReport {
    pub name: String,
    pub ship: String,
    pub components: Vec<ComponentAvailability>,
}

impl AvailabilityReport {
    /// Check every component of `loadout` against every engineer of `roster`.
    pub fn build(loadout: &Loadout, roster: &EngineerRoster) -> Self {
        let components = loadout
            .components
            .iter()
            .map(|component| ComponentAvailability {
                component: component.clone(),
                engineers: roster
                    .available_for(component)
                    .into_iter()
                    .map(|e| e.name.clone())
                    .collect(),
            })
            .collect();

        Self {
            name: loadout.name.clone(),
            ship: loadout.ship.clone(),
            components,
        }
    }

    pub fn render(&self, mode: LoadoutRenderMode) -> Result<String> {
        match mode {
            LoadoutRenderMode::Json => Ok(serde_json::to_string_pretty(self)?),
            LoadoutRenderMode::PlainText => {
                let mut buffer = heading(&self.name, &self.ship);
                for entry in &self.components {
                    let engineers = if entry.engineers.is_empty() {
                        "none".to_string()
                    } else {
                        entry.engineers.join(", ")
                    };
                    let _ = writeln!(
                        buffer,
                        "- {}: {}",
                        component_label(&entry.component),
                        engineers
                    );
                }
                Ok(buffer)
            }
        }
    }
}

/// Render a loadout in the requested mode.
pub fn render_loadout(loadout: &Loadout, mode: LoadoutRenderMode) -> Result<String> {
    match mode {
        LoadoutRenderMode::Json => Ok(serde_json::to_string_pretty(loadout)?),
        LoadoutRenderMode::PlainText => {
            let mut buffer = heading(&loadout.name, &loadout.ship);
            if loadout.is_empty() {
                buffer.push_str("No engineered components.\n");
            }
            for component in &loadout.components {
                let _ = writeln!(buffer, "- {}", component_label(component));
            }
            Ok(buffer)
        }
    }
}

fn heading(name: &str, ship: &str) -> String {
    if name.is_empty() {
        format!("{ship}\n")
    } else {
        format!("{name} ({ship})\n")
    }
}

fn component_label(component: &Component) -> String {
    format!("{}: {} G{}", component.module, component.blueprint, component.grade)
}
