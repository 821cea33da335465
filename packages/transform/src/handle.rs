//! Resize handles.
//!
//! Eight hit zones around a selected block: four corners and four edge
//! midpoints. Each handle contributes a sign per axis; an edge handle
//! leaves the other axis untouched.

use serde::{Deserialize, Serialize};

/// Which handle started a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Handle {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Handle {
    pub const ALL: [Handle; 8] = [
        Handle::North,
        Handle::NorthEast,
        Handle::East,
        Handle::SouthEast,
        Handle::South,
        Handle::SouthWest,
        Handle::West,
        Handle::NorthWest,
    ];

    /// Sign of the width delta per pointer dx: east edges grow with
    /// +dx, west edges grow with -dx, north/south leave width alone.
    pub fn dx_sign(self) -> f64 {
        match self {
            Handle::East | Handle::NorthEast | Handle::SouthEast => 1.0,
            Handle::West | Handle::NorthWest | Handle::SouthWest => -1.0,
            Handle::North | Handle::South => 0.0,
        }
    }

    /// Sign of the height delta per pointer dy.
    pub fn dy_sign(self) -> f64 {
        match self {
            Handle::South | Handle::SouthEast | Handle::SouthWest => 1.0,
            Handle::North | Handle::NorthEast | Handle::NorthWest => -1.0,
            Handle::East | Handle::West => 0.0,
        }
    }

    /// West-side handles pin the east edge, so x shifts as width
    /// changes.
    pub fn moves_left_edge(self) -> bool {
        matches!(self, Handle::West | Handle::NorthWest | Handle::SouthWest)
    }

    /// North-side handles pin the south edge.
    pub fn moves_top_edge(self) -> bool {
        matches!(self, Handle::North | Handle::NorthWest | Handle::NorthEast)
    }
}
