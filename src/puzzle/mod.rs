pub mod common;
pub mod cube;
pub mod permutator;
pub mod rotate;
pub mod shared;

pub use common::{Cell, CellKind, ClockPosition, Color, CubeError, Direction, LayerId, Sticker, Twist};
pub use cube::{AxisCycle, Cube, FaceGrid, Side};
