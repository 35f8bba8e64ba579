//! The Y-permutator: four quarter turns of two adjacent faces,
//! `first·b second·m first·m second·b`, bracketed clockwise or
//! counter-clockwise.

use log::debug;
use thiserror::Error;

use crate::puzzle::common::*;
use crate::puzzle::cube::Cube;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutatorError {
    #[error("The Y-permutator only supports White as its first side, got {0:?}")]
    UnsupportedFirstSide(Color),
    #[error("{0:?} is opposite the first side and cannot be the second side")]
    OppositeSecondSide(Color),
    #[error("Orientation must be a lateral face, got {0:?}")]
    InvalidOrientation(Color),
    #[error("Second side {second:?} is not beside orientation {orientation:?}")]
    NotBeside { second: Color, orientation: Color },
    #[error(transparent)]
    Cube(#[from] CubeError),
}

fn core(first: Color, second: Color, bracket: Direction) -> [Twist; 4] {
    let middle = bracket.inverse();
    [
        Twist::quarter(first, bracket),
        Twist::quarter(second, middle),
        Twist::quarter(first, middle),
        Twist::quarter(second, bracket),
    ]
}

/// The four twists for holding `orientation` in front. A second side
/// clockwise of the orientation face (looking down on White) brackets
/// clockwise, one counter-clockwise of it brackets counter-clockwise.
pub fn y_permutator_twists(
    first: Color,
    second: Color,
    orientation: Color,
) -> Result<[Twist; 4], PermutatorError> {
    if first != Color::White {
        return Err(PermutatorError::UnsupportedFirstSide(first));
    }
    if second == first.opposite() {
        return Err(PermutatorError::OppositeSecondSide(second));
    }
    if orientation.is_pole() {
        return Err(PermutatorError::InvalidOrientation(orientation));
    }

    let bracket = if second == orientation.equator_step(1) {
        Direction::Clockwise
    } else if second == orientation.equator_step(-1) {
        Direction::CounterClockwise
    } else {
        return Err(PermutatorError::NotBeside {
            second,
            orientation,
        });
    };
    Ok(core(first, second, bracket))
}

pub fn y_permutator(
    cube: &mut Cube,
    first: Color,
    second: Color,
    orientation: Color,
) -> Result<(), PermutatorError> {
    let twists = y_permutator_twists(first, second, orientation)?;
    debug!(
        "Y-permutator {:?}/{:?} facing {:?}",
        first, second, orientation
    );
    cube.apply_all(&twists)?;
    Ok(())
}
