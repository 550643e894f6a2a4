//! Dump the static obstacle table
//!
//! The table is baked into `zone-core`; this command prints it in a form
//! other toolchains can consume.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::Parser;
use zone_core::{Coord, OBSTACLES, ZoneConfig};

/// Dump the baked obstacle table
#[derive(Parser, Debug)]
pub struct Obstacles {
    /// Output format
    #[arg(short, long, value_enum, default_value = "c")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// C array initializer
    C,
    /// RON list of coordinates
    Ron,
    /// JSON list of coordinates
    Json,
}

impl Obstacles {
    pub fn execute(self) -> Result<()> {
        let text = match self.format {
            OutputFormat::C => render_c(&OBSTACLES),
            OutputFormat::Ron => {
                ron::ser::to_string_pretty(&OBSTACLES.as_slice(), ron::ser::PrettyConfig::default())
                    .context("Failed to encode obstacles as RON")?
            }
            OutputFormat::Json => serde_json::to_string_pretty(&OBSTACLES.as_slice())
                .context("Failed to encode obstacles as JSON")?,
        };
        println!("{text}");
        Ok(())
    }
}

fn render_c(obstacles: &[Coord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "static const Coord OBSTACLES[{}] = {{",
        ZoneConfig::NUM_OBSTACLES
    );
    for coord in obstacles {
        let _ = writeln!(out, "    {{{}, {}}},", coord.x(), coord.y());
    }
    out.push_str("};");
    out
}
