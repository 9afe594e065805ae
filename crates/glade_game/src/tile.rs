//! Static map tiles

use crate::config::GameConfig;
use crate::error::Result;
use glade_math::{Rect, Vec2};
use glade_physics::SpatialBody;
use serde::{Deserialize, Serialize};

/// Kinds of static tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    /// Invisible wall at the map edge
    Boundary,
    /// Tall prop, two tiles high, standing on its grid cell
    Object,
    /// Blocks movement until cut by any attack
    Grass,
}

impl TileKind {
    /// Whether attacks can destroy it
    pub fn is_destructible(self) -> bool {
        matches!(self, TileKind::Grass)
    }
}

/// A tile placed on the map grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub kind: TileKind,
    pub body: SpatialBody,
}

impl Tile {
    /// Place a tile whose grid cell has its top-left corner at `cell`
    pub fn new(kind: TileKind, cell: Vec2, config: &GameConfig) -> Result<Self> {
        let size = config.tile_size;
        let (bounds, inset) = match kind {
            TileKind::Boundary => (Rect::new(cell.x, cell.y, size, size), 0.0),
            TileKind::Object => (
                Rect::new(cell.x, cell.y - size, size, size * 2.0),
                config.object_hitbox_inset,
            ),
            TileKind::Grass => (Rect::new(cell.x, cell.y, size, size), config.grass_hitbox_inset),
        };
        let body = SpatialBody::new(bounds, Vec2::new(0.0, inset))?;
        Ok(Self { kind, body })
    }

    pub fn hitbox(&self) -> &Rect {
        self.body.hitbox()
    }

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }
}
