//! Output formatting for command results.

use anyhow::Result;
use clap::ValueEnum;

use edloadout_lib::{render_loadout, AvailabilityReport, Loadout, LoadoutRenderMode};

/// Output formats accepted by `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    fn render_mode(self) -> LoadoutRenderMode {
        match self {
            OutputFormat::Text => LoadoutRenderMode::PlainText,
            OutputFormat::Json => LoadoutRenderMode::Json,
        }
    }

    /// Print a parsed loadout to stdout.
    pub fn render_loadout(self, loadout: &Loadout) -> Result<()> {
        let rendered = render_loadout(loadout, self.render_mode())?;
        print_block(&rendered);
        Ok(())
    }

    /// Print per-component engineer availability to stdout.
    pub fn render_availability(self, report: &AvailabilityReport) -> Result<()> {
        let rendered = report.render(self.render_mode())?;
        print_block(&rendered);
        Ok(())
    }
}

fn print_block(rendered: &str) {
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
}
