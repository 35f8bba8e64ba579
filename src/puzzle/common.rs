use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::util::enum_iter;

/// The six sticker colors. A face is named by the color of its center,
/// so a color doubles as a face and as the rotation axis through it.
///
/// Looking down on White, Red sits at 12 o'clock, Green at 3, Orange at 6
/// and Blue at 9. Yellow is underneath.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Red,
    Green,
    Orange,
    Blue,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Green,
        Color::Orange,
        Color::Blue,
    ];

    /// The lateral colors in clockwise order as seen from above White.
    pub const EQUATOR: [Color; 4] = [Color::Red, Color::Green, Color::Orange, Color::Blue];

    pub fn opposite(self) -> Color {
        use Color::*;

        match self {
            White => Yellow,
            Yellow => White,
            Red => Orange,
            Orange => Red,
            Green => Blue,
            Blue => Green,
        }
    }

    /// White and Yellow, the faces stored as whole layers.
    pub fn is_pole(self) -> bool {
        matches!(self, Color::White | Color::Yellow)
    }

    /// Turns the whole cube `steps` quarter turns clockwise about White and
    /// returns the color that ends up where `self` was. Poles are fixed.
    pub fn equator_step(self, steps: i8) -> Color {
        match Color::EQUATOR.iter().position(|&c| c == self) {
            Some(i) => Color::EQUATOR[(i as i8 + steps).rem_euclid(4) as usize],
            None => self,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Orange => 'O',
            Color::Blue => 'B',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "WHITE",
            Color::Yellow => "YELLOW",
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Orange => "ORANGE",
            Color::Blue => "BLUE",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<usize> for Color {
    type Error = CubeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Color::ALL
            .get(value)
            .copied()
            .ok_or_else(|| CubeError::InvalidFace(value.to_string()))
    }
}

impl FromStr for Color {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| s.eq_ignore_ascii_case(c.name()) || s == c.letter().to_string())
            .ok_or_else(|| CubeError::InvalidFace(s.to_string()))
    }
}

/// Direction of a twist, as seen looking straight at the face.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// +1 for clockwise, -1 for counter-clockwise.
    pub fn sign(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "CW"),
            Direction::CounterClockwise => write!(f, "CCW"),
        }
    }
}

impl FromStr for Direction {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cw" | "clockwise" => Ok(Direction::Clockwise),
            "ccw" | "counterclockwise" | "counter" => Ok(Direction::CounterClockwise),
            _ => Err(CubeError::InvalidDirection(s.to_string())),
        }
    }
}

/// One of the eight slots ringing a face, in clockwise order from 12:00.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockPosition {
    Twelve,
    OneThirty,
    Three,
    FourThirty,
    Six,
    SevenThirty,
    Nine,
    TenThirty,
}

impl ClockPosition {
    /// The on-the-hour slots, which hold edges.
    pub const HOURS: [ClockPosition; 4] = [
        ClockPosition::Twelve,
        ClockPosition::Three,
        ClockPosition::Six,
        ClockPosition::Nine,
    ];

    pub fn index(self) -> usize {
        self.into_usize()
    }

    pub fn from_index(index: usize) -> Result<Self, CubeError> {
        if index < Self::LENGTH {
            Ok(Self::from_usize(index))
        } else {
            Err(CubeError::InvalidPosition(index))
        }
    }

    pub fn all() -> impl Iterator<Item = ClockPosition> {
        enum_iter::<ClockPosition>()
    }

    pub fn is_corner(self) -> bool {
        self.index() % 2 == 1
    }

    /// Moves `steps` eighth-turns clockwise around the ring.
    pub fn turned(self, steps: i8) -> ClockPosition {
        Self::from_usize((self.index() as i8 + steps).rem_euclid(Self::LENGTH as i8) as usize)
    }

    /// The corner slots on either side of an on-the-hour slot.
    pub fn flanking(self) -> [ClockPosition; 2] {
        [self.turned(-1), self.turned(1)]
    }

    pub fn label(self) -> &'static str {
        match self {
            ClockPosition::Twelve => "12:00",
            ClockPosition::OneThirty => "1:30",
            ClockPosition::Three => "3:00",
            ClockPosition::FourThirty => "4:30",
            ClockPosition::Six => "6:00",
            ClockPosition::SevenThirty => "7:30",
            ClockPosition::Nine => "9:00",
            ClockPosition::TenThirty => "10:30",
        }
    }
}

impl fmt::Display for ClockPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The three horizontal slices used as storage.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerId {
    Top,
    Middle,
    Bottom,
}

/// One colored face of a piece, bound to the side it currently shows on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sticker {
    pub face: Color,
    pub color: Color,
}

impl Sticker {
    /// A sticker sitting on its own face, as in the solved cube.
    pub fn home(color: Color) -> Self {
        Self { face: color, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Center,
    Edge,
    Corner,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CellKind::Center => write!(f, "center"),
            CellKind::Edge => write!(f, "edge"),
            CellKind::Corner => write!(f, "corner"),
        }
    }
}

/// A single piece of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Fixed center. Never moves and never changes color.
    Center(Color),
    Edge([Sticker; 2]),
    Corner([Sticker; 3]),
}

impl Cell {
    pub fn edge(a: Color, b: Color) -> Self {
        Cell::Edge([Sticker::home(a), Sticker::home(b)])
    }

    pub fn corner(a: Color, b: Color, c: Color) -> Self {
        Cell::Corner([Sticker::home(a), Sticker::home(b), Sticker::home(c)])
    }

    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Center(_) => CellKind::Center,
            Cell::Edge(_) => CellKind::Edge,
            Cell::Corner(_) => CellKind::Corner,
        }
    }

    /// Stickers of an edge or corner. Centers carry no movable stickers.
    pub fn stickers(&self) -> &[Sticker] {
        match self {
            Cell::Center(_) => &[],
            Cell::Edge(stickers) => stickers,
            Cell::Corner(stickers) => stickers,
        }
    }

    pub fn stickers_mut(&mut self) -> &mut [Sticker] {
        match self {
            Cell::Center(_) => &mut [],
            Cell::Edge(stickers) => stickers,
            Cell::Corner(stickers) => stickers,
        }
    }

    /// Every color the piece carries, center included.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        let center = match self {
            Cell::Center(color) => Some(*color),
            _ => None,
        };
        center
            .into_iter()
            .chain(self.stickers().iter().map(|sticker| sticker.color))
    }

    /// Index of the sticker bound to `face`, if any.
    pub fn sticker_facing(&self, face: Color) -> Option<usize> {
        self.stickers().iter().position(|sticker| sticker.face == face)
    }

    /// Color this cell shows on `face`.
    pub fn color_facing(&self, face: Color) -> Option<Color> {
        match self {
            Cell::Center(color) => Some(*color),
            _ => self
                .sticker_facing(face)
                .map(|i| self.stickers()[i].color),
        }
    }

    /// Distinct bindings per piece, and no edge bound to a pair of
    /// opposite faces.
    pub fn bindings_consistent(&self) -> bool {
        let faces: Vec<Color> = self.stickers().iter().map(|s| s.face).collect();
        faces
            .iter()
            .enumerate()
            .all(|(i, a)| faces[i + 1..].iter().all(|b| a != b && a.opposite() != *b))
    }
}

/// A twist of one face, `turns` quarter turns in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Twist {
    pub face: Color,
    pub direction: Direction,
    pub turns: u8,
}

impl Twist {
    pub fn new(face: Color, direction: Direction, turns: u8) -> Self {
        Self {
            face,
            direction,
            turns,
        }
    }

    pub fn quarter(face: Color, direction: Direction) -> Self {
        Self::new(face, direction, 1)
    }

    /// The twist that undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            direction: self.direction.inverse(),
            ..self
        }
    }
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} x{}", self.face.name(), self.direction, self.turns)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid face {0:?}, expected one of the six center colors")]
    InvalidFace(String),
    #[error("Invalid direction {0:?}, expected clockwise or counter-clockwise")]
    InvalidDirection(String),
    #[error("Invalid clock position {0}, expected a value between 0 and 7")]
    InvalidPosition(usize),
    #[error("The {kind} at {position} of the {face:?} side has no sticker facing {face:?}")]
    UnboundSticker {
        face: Color,
        position: ClockPosition,
        kind: CellKind,
    },
    #[error("Expected an edge at {position} of the {face:?} side but found a {found}")]
    ExpectedEdge {
        face: Color,
        position: ClockPosition,
        found: CellKind,
    },
    #[error("The corner at {position} of the {face:?} side has no sticker facing {expected:?}")]
    CornerMismatch {
        face: Color,
        position: ClockPosition,
        expected: Color,
    },
    #[error("Color {color:?} is not on the cycle of the {axis:?} axis")]
    NotOnCycle { axis: Color, color: Color },
    #[error("Sticker census is off: {color:?} appears {count} times, expected 9")]
    Census { color: Color, count: usize },
}
