//! Render the zone as an ASCII board
//!
//! Legend: `#` obstacle, `P` player, `I` item, `M` monster, `.` floor.
//! Entities are resolved with the same precedence the cell queries use.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use zone_core::{
    Coord, EntityType, Occupants, TerrainKind, ZoneConfig, ZoneState, get_cell_no_check,
    terrain_at,
};

use super::load_roster;

/// Render the zone as an ASCII board
#[derive(Parser, Debug)]
pub struct Board {
    /// Roster file to place on the board (defaults to the embedded roster)
    #[arg(short, long, value_name = "FILE")]
    roster: Option<PathBuf>,
}

impl Board {
    pub fn execute(self) -> Result<()> {
        let roster = load_roster(self.roster.as_deref())?;
        let state = ZoneState::from_roster(&roster);

        for row in render(&state) {
            let line: String = row.into_iter().map(|glyph| paint(glyph).to_string()).collect();
            println!("{line}");
        }

        println!();
        println!(
            "{} {} players, {} items, {} monsters",
            style("Placed:").bold().cyan(),
            state.players.len(),
            state.items.iter().filter(|item| !item.is_consumed).count(),
            state.monsters.iter().filter(|monster| monster.is_alive()).count(),
        );
        Ok(())
    }
}

fn glyph(coord: Coord, occupants: &Occupants) -> char {
    match get_cell_no_check(coord, occupants).entity_type {
        EntityType::Player => 'P',
        EntityType::Item => 'I',
        EntityType::Monster => 'M',
        EntityType::None | EntityType::Invalid => match terrain_at(coord) {
            TerrainKind::Obstacle => '#',
            TerrainKind::Floor => '.',
        },
    }
}

/// One row of glyphs per `y`, top row first.
fn render(state: &ZoneState) -> Vec<Vec<char>> {
    let occupants = Occupants::from(state);
    (0..ZoneConfig::HEIGHT)
        .map(|y| {
            (0..ZoneConfig::WIDTH)
                .map(|x| glyph(Coord::at(x, y), &occupants))
                .collect()
        })
        .collect()
}

fn paint(glyph: char) -> console::StyledObject<char> {
    match glyph {
        'P' => style(glyph).green().bold(),
        'I' => style(glyph).yellow(),
        'M' => style(glyph).red(),
        '#' => style(glyph).dim(),
        _ => style(glyph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zone_content::ContentFactory;

    #[test]
    fn default_board_shows_every_entity() {
        let state = ContentFactory::default_state().unwrap();
        let rows = render(&state);

        assert_eq!(rows.len(), ZoneConfig::HEIGHT as usize);
        assert!(rows.iter().all(|row| row.len() == ZoneConfig::WIDTH as usize));

        let count = |glyph| rows.iter().flatten().filter(|&&c| c == glyph).count();
        assert_eq!(count('P'), ZoneConfig::NUM_PLAYERS);
        assert_eq!(count('I'), ZoneConfig::NUM_ITEMS);
        assert_eq!(count('M'), ZoneConfig::NUM_MONSTERS);
        assert_eq!(count('#'), ZoneConfig::NUM_OBSTACLES);

        assert_eq!(rows[27][3], 'P');
        assert_eq!(rows[3][13], 'M');
        assert_eq!(rows[5][5], '#');
    }
}
