pub mod common;
pub mod entities;

pub use common::Coord;
pub use entities::{
    ItemData, ItemWithId, MonsterData, MonsterWithId, PlayerData, PlayerWithId,
};
