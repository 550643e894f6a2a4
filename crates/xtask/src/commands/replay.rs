//! Drive a scripted sequence of moves through the runtime
//!
//! Seeds a zone, feeds the moves to one player through [`zone_runtime::ZoneHandle`],
//! and prints what each step did.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use zone_core::{Direction, MoveEffects, ViewConfig, ZoneConfig, ZoneState};
use zone_runtime::{PlayerId, Runtime, RuntimeConfig};

use super::load_roster;

/// Drive a scripted sequence of moves through the runtime
#[derive(Parser, Debug)]
pub struct Replay {
    /// Player slot that makes the moves (0-3)
    #[arg(short, long, default_value_t = 0)]
    player: u8,

    /// Comma-separated directions, e.g. `up,left,left`
    #[arg(short, long, value_delimiter = ',', required = true)]
    moves: Vec<Direction>,

    /// Fly instead of walking
    #[arg(long)]
    fly: bool,

    /// Roster file to seed the zone (defaults to the embedded roster)
    #[arg(short, long, value_name = "FILE")]
    roster: Option<PathBuf>,

    /// Perception radius for the closing cross query
    #[arg(long, default_value_t = ViewConfig::DEFAULT_RADIUS)]
    view: u8,
}

impl Replay {
    pub async fn run(self) -> Result<()> {
        let roster = load_roster(self.roster.as_deref())?;
        let view = ViewConfig::new(self.view).context("Invalid --view")?;
        let config = RuntimeConfig {
            zone: ZoneConfig::with_view(view),
            ..RuntimeConfig::default()
        };

        let runtime = Runtime::builder()
            .config(config)
            .initial_state(ZoneState::from_roster(&roster))
            .build()?;
        let handle = runtime.handle();
        let player = PlayerId(self.player);

        let start = handle.player(player).await?;
        println!(
            "{} {} at {} (hp {}, atk {}, points {})",
            style("Start:").bold().cyan(),
            player,
            start.loc,
            start.hp,
            start.atk,
            start.points
        );

        for (step, direction) in self.moves.iter().copied().enumerate() {
            if self.fly {
                let to = handle.fly_player(player, direction).await?;
                println!("{:>3}. {:<5} -> {}", step + 1, direction, to);
                continue;
            }

            let report = handle.move_player(player, direction).await?;
            println!(
                "{:>3}. {:<5} {} -> {} {}",
                step + 1,
                direction,
                report.from,
                report.to,
                describe(report.effects)
            );
        }

        let end = handle.player(player).await?;
        println!(
            "{} {} (hp {}, atk {}, points {})",
            style("End:").bold().cyan(),
            end.loc,
            end.hp,
            end.atk,
            end.points
        );

        let cross = handle.get_cross_cells(player).await?;
        let seen: Vec<String> = cross.iter().map(|cell| cell.entity_type.to_string()).collect();
        println!("{} {}", style("Cross:").bold().cyan(), seen.join(" "));

        let root = handle.state_root().await?;
        println!("{} {}", style("State root:").bold().cyan(), hex::encode(root));

        drop(handle);
        runtime.shutdown().await?;
        Ok(())
    }
}

fn describe(effects: MoveEffects) -> String {
    let labels: Vec<String> = effects
        .iter_names()
        .map(|(name, _)| name.to_ascii_lowercase())
        .collect();
    if effects.contains(MoveEffects::PLAYER_DIED) {
        style(labels.join(",")).red().bold().to_string()
    } else {
        labels.join(",")
    }
}
