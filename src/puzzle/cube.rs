use enum_map::{enum_map, Enum, EnumMap};
use itertools::Itertools;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::puzzle::common::*;

pub type Layer = [Cell; 8];

/// The eight cells ringing one face, indexed by clock position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Side(pub [Cell; 8]);

impl Index<ClockPosition> for Side {
    type Output = Cell;

    fn index(&self, position: ClockPosition) -> &Cell {
        &self.0[position.index()]
    }
}

impl IndexMut<ClockPosition> for Side {
    fn index_mut(&mut self, position: ClockPosition) -> &mut Cell {
        &mut self.0[position.index()]
    }
}

/// Faces a clockwise turn of Red carries White through, in order.
const RED_MERIDIAN: [Color; 4] = [Color::White, Color::Blue, Color::Yellow, Color::Green];

/// The 4-cycle a twist about one axis applies to the side bindings of the
/// stickers it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisCycle {
    axis: Color,
    /// Clockwise order, looking at `axis`.
    ring: [Color; 4],
}

impl AxisCycle {
    /// White's cycle is the equator and Red's is the meridian. Green is
    /// Red's turned one step about White, and each remaining face runs its
    /// opposite face's cycle backwards.
    pub fn of(axis: Color) -> Self {
        let ring = match axis {
            Color::White => Color::EQUATOR,
            Color::Red => RED_MERIDIAN,
            Color::Green => RED_MERIDIAN.map(|color| color.equator_step(1)),
            Color::Yellow | Color::Orange | Color::Blue => {
                return Self::of(axis.opposite()).reversed(axis);
            }
        };
        Self { axis, ring }
    }

    fn reversed(mut self, axis: Color) -> Self {
        self.ring.reverse();
        self.axis = axis;
        self
    }

    pub fn axis(&self) -> Color {
        self.axis
    }

    pub fn ring(&self) -> [Color; 4] {
        self.ring
    }

    /// The side a sticker bound to `color` is bound to after the twist.
    pub fn next(&self, color: Color, direction: Direction) -> Result<Color, CubeError> {
        let i = self
            .ring
            .iter()
            .position(|&c| c == color)
            .ok_or(CubeError::NotOnCycle {
                axis: self.axis,
                color,
            })?;
        Ok(self.ring[(i as i8 + direction.sign()).rem_euclid(4) as usize])
    }
}

pub fn next_color(axis: Color, color: Color, direction: Direction) -> Result<Color, CubeError> {
    AxisCycle::of(axis).next(color, direction)
}

/// Cell offsets of a lateral face's ring from the layer index of its own
/// 12:00 edge.
const LATERAL_OFFSETS: [usize; 8] = [0, 7, 7, 7, 0, 1, 1, 1];

/// Where the cell at `position` on `face` is stored.
pub fn address(face: Color, position: ClockPosition) -> (LayerId, usize) {
    let p = position.index();
    let base = match face {
        Color::White => return (LayerId::Top, p),
        // seen from below, so the ring runs the other way
        Color::Yellow => return (LayerId::Bottom, (8 - p) % 8),
        Color::Red => 0,
        Color::Green => 2,
        Color::Orange => 4,
        Color::Blue => 6,
    };
    let row = match position {
        ClockPosition::TenThirty | ClockPosition::Twelve | ClockPosition::OneThirty => {
            LayerId::Top
        }
        ClockPosition::Three | ClockPosition::Nine => LayerId::Middle,
        ClockPosition::FourThirty | ClockPosition::Six | ClockPosition::SevenThirty => {
            LayerId::Bottom
        }
    };
    (row, (base + LATERAL_OFFSETS[p]) % 8)
}

fn solved_layers() -> EnumMap<LayerId, Layer> {
    use Color::*;

    let eq = |i: usize| Color::EQUATOR[i % 4];
    enum_map! {
        LayerId::Top => std::array::from_fn(|i| {
            if i % 2 == 0 {
                Cell::edge(White, eq(i / 2))
            } else {
                Cell::corner(White, eq(i / 2), eq(i / 2 + 1))
            }
        }),
        LayerId::Middle => std::array::from_fn(|i| {
            if i % 2 == 0 {
                Cell::Center(eq(i / 2))
            } else {
                Cell::edge(eq(i / 2), eq(i / 2 + 1))
            }
        }),
        LayerId::Bottom => std::array::from_fn(|i| {
            if i % 2 == 0 {
                Cell::edge(Yellow, eq(i / 2))
            } else {
                Cell::corner(Yellow, eq(i / 2 + 1), eq(i / 2))
            }
        }),
    }
}

/// A 3x3x3 cube stored as three stacked rings of eight cells.
///
/// White and Yellow centers are not stored: they are the Top and Bottom
/// layers themselves and never move.
#[derive(Debug, Clone)]
pub struct Cube {
    layers: EnumMap<LayerId, Layer>,
    solved: EnumMap<LayerId, Layer>,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Cube {
    fn eq(&self, other: &Self) -> bool {
        self.layers == other.layers
    }
}

impl Eq for Cube {}

impl Cube {
    pub fn new() -> Self {
        let layers = solved_layers();
        Self {
            solved: layers.clone(),
            layers,
        }
    }

    pub fn layer(&self, id: LayerId) -> &Layer {
        &self.layers[id]
    }

    pub fn is_solved(&self) -> bool {
        self.layers == self.solved
    }

    /// Reads the ring around `face`.
    pub fn get_side(&self, face: Color) -> Side {
        Side(std::array::from_fn(|i| {
            let (layer, index) = address(face, ClockPosition::from_usize(i));
            self.layers[layer][index]
        }))
    }

    /// Writes a ring back where `get_side` read it from.
    pub fn put_side(&mut self, face: Color, side: &Side) {
        for position in ClockPosition::all() {
            let (layer, index) = address(face, position);
            self.layers[layer][index] = side[position];
        }
    }

    /// Color shown at `position` on `face`.
    pub fn visible_color(&self, face: Color, position: ClockPosition) -> Result<Color, CubeError> {
        let (layer, index) = address(face, position);
        let cell = &self.layers[layer][index];
        cell.color_facing(face).ok_or(CubeError::UnboundSticker {
            face,
            position,
            kind: cell.kind(),
        })
    }

    pub fn face_grid(&self, face: Color) -> Result<FaceGrid, CubeError> {
        use ClockPosition::*;

        let at = |position| self.visible_color(face, position);
        Ok(FaceGrid {
            face,
            rows: [
                [at(TenThirty)?, at(Twelve)?, at(OneThirty)?],
                [at(Nine)?, face, at(Three)?],
                [at(SevenThirty)?, at(Six)?, at(FourThirty)?],
            ],
        })
    }

    /// How many stickers of each color the cube carries, fixed White and
    /// Yellow centers included.
    pub fn color_counts(&self) -> EnumMap<Color, usize> {
        let mut counts = EnumMap::default();
        counts[Color::White] += 1;
        counts[Color::Yellow] += 1;
        for color in self.layers.values().flatten().flat_map(|cell| cell.colors()) {
            counts[color] += 1;
        }
        counts
    }

    /// Checks that every face resolves and the sticker census holds.
    pub fn validate(&self) -> Result<(), CubeError> {
        for face in Color::ALL {
            for position in ClockPosition::all() {
                self.visible_color(face, position)?;
            }
        }
        if let Some((color, &count)) = self.color_counts().iter().find(|(_, count)| **count != 9) {
            return Err(CubeError::Census { color, count });
        }
        Ok(())
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for face in Color::ALL {
            match self.face_grid(face) {
                Ok(grid) => write!(f, "\n{} SIDE\n{}", face.name(), grid)?,
                Err(e) => writeln!(f, "\n{} SIDE\n  <{}>", face.name(), e)?,
            }
        }
        Ok(())
    }
}

/// One face as it looks head-on: corners, edges and the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGrid {
    pub face: Color,
    pub rows: [[Color; 3]; 3],
}

impl fmt::Display for FaceGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  -------------")?;
        for row in &self.rows {
            writeln!(f, "  | {} |", row.iter().join(" | "))?;
            writeln!(f, "  -------------")?;
        }
        Ok(())
    }
}
