use log::trace;

use crate::puzzle::common::*;
use crate::puzzle::cube::{AxisCycle, Cube, Side};

impl Side {
    /// Spins the ring a quarter turn as a rigid body: every cell moves two
    /// slots. Stickers are left alone.
    pub fn spun(mut self, direction: Direction) -> Side {
        match direction {
            Direction::Clockwise => self.0.rotate_right(2),
            Direction::CounterClockwise => self.0.rotate_left(2),
        }
        self
    }

    /// Rebinds every sticker of the ring that is not bound to `face` to the
    /// side it will show on after the twist. Cells stay where they are.
    ///
    /// Lookups only ever read `self`; writes go to a staged copy. A corner is
    /// flanked by two edges, so rebinding in place would let the second edge
    /// match a sticker the first one already moved.
    pub fn remapped(&self, face: Color, direction: Direction) -> Result<Side, CubeError> {
        let cycle = AxisCycle::of(face);
        let mut staged = *self;

        for position in ClockPosition::HOURS {
            let edge = &self[position];
            if edge.kind() != CellKind::Edge {
                return Err(CubeError::ExpectedEdge {
                    face,
                    position,
                    found: edge.kind(),
                });
            }
            let axis_sticker = edge.sticker_facing(face).ok_or(CubeError::UnboundSticker {
                face,
                position,
                kind: CellKind::Edge,
            })?;
            let lateral_sticker = 1 - axis_sticker;
            let old = edge.stickers()[lateral_sticker].face;
            let new = cycle.next(old, direction)?;
            staged[position].stickers_mut()[lateral_sticker].face = new;

            for corner_position in position.flanking() {
                let corner = &self[corner_position];
                let i = match corner {
                    Cell::Corner(_) => corner.sticker_facing(old),
                    _ => None,
                }
                .ok_or(CubeError::CornerMismatch {
                    face,
                    position: corner_position,
                    expected: old,
                })?;
                staged[corner_position].stickers_mut()[i].face = new;
            }
            trace!("{} {}: {:?} -> {:?}", face.name(), position, old, new);
        }

        Ok(staged)
    }
}

impl Cube {
    /// Twists `face` a quarter turn. On error the cube is left untouched.
    pub fn rotate_side(&mut self, face: Color, direction: Direction) -> Result<(), CubeError> {
        let side = self.get_side(face);
        let turned = side.remapped(face, direction)?.spun(direction);
        self.put_side(face, &turned);
        trace!("rotated {} {}", face.name(), direction);
        Ok(())
    }

    pub fn apply(&mut self, twist: Twist) -> Result<(), CubeError> {
        for _ in 0..twist.turns {
            self.rotate_side(twist.face, twist.direction)?;
        }
        Ok(())
    }

    pub fn apply_all<'a>(
        &mut self,
        twists: impl IntoIterator<Item = &'a Twist>,
    ) -> Result<(), CubeError> {
        for &twist in twists {
            self.apply(twist)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use Color::*;
    use Direction::*;

    const DIRECTIONS: [Direction; 2] = [Clockwise, CounterClockwise];

    /// Number of times `sequence` must be applied to return to solved.
    fn order_of(sequence: &[Twist]) -> usize {
        let mut cube = Cube::new();
        for n in 1..=1260 {
            cube.apply_all(sequence).unwrap();
            cube.validate().unwrap();
            if cube.is_solved() {
                return n;
            }
        }
        panic!("no return to solved within 1260 repetitions");
    }

    /// Applies one turn and asserts that it is unsolved.
    #[test]
    fn one_turn() {
        let mut cube = Cube::new();
        cube.rotate_side(Red, Clockwise).unwrap();
        assert!(!cube.is_solved());
    }

    #[test]
    fn four_turns_are_identity() {
        for (face, direction) in iproduct!(Color::ALL, DIRECTIONS) {
            let mut cube = Cube::new();
            cube.rotate_side(Green, Clockwise).unwrap();
            let start = cube.clone();
            for turn in 1..=4 {
                cube.rotate_side(face, direction).unwrap();
                assert_eq!(cube == start, turn == 4, "{:?} {:?} x{}", face, direction, turn);
            }
        }
    }

    #[test]
    fn inverse_undoes() {
        for face in Color::ALL {
            let mut cube = Cube::new();
            cube.rotate_side(face.equator_step(1), Clockwise).unwrap();
            let start = cube.clone();
            cube.rotate_side(face, Clockwise).unwrap();
            cube.rotate_side(face, CounterClockwise).unwrap();
            assert_eq!(cube, start, "{:?}", face);
        }
    }

    #[test]
    fn census_survives_random_twists() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut cube = Cube::new();
        for _ in 0..500 {
            let face = *Color::ALL.choose(&mut rng).unwrap();
            let direction = *DIRECTIONS.choose(&mut rng).unwrap();
            cube.apply(Twist::new(face, direction, rng.gen_range(1..=3)))
                .unwrap();
            for (color, &count) in cube.color_counts().iter() {
                assert_eq!(count, 9, "{:?}", color);
            }
        }
        cube.validate().unwrap();
    }

    #[test]
    fn opposite_faces_commute() {
        for (face, d1, d2) in iproduct!([White, Red, Green], DIRECTIONS, DIRECTIONS) {
            let mut a = Cube::new();
            a.rotate_side(face, d1).unwrap();
            a.rotate_side(face.opposite(), d2).unwrap();

            let mut b = Cube::new();
            b.rotate_side(face.opposite(), d2).unwrap();
            b.rotate_side(face, d1).unwrap();

            assert_eq!(a, b, "{:?} {:?} / {:?} {:?}", face, d1, face.opposite(), d2);
        }
    }

    #[test]
    fn scramble_unscramble() {
        let scramble = [
            Twist::new(Red, Clockwise, 1),
            Twist::new(Green, CounterClockwise, 2),
            Twist::new(Blue, Clockwise, 3),
        ];
        let mut cube = Cube::new();
        cube.apply_all(&scramble).unwrap();
        assert!(!cube.is_solved());
        let unscramble: Vec<Twist> = scramble.iter().rev().map(|t| t.inverse()).collect();
        cube.apply_all(&unscramble).unwrap();
        assert!(cube.is_solved());
    }

    #[test]
    fn white_turn_moves_lateral_rows() {
        let mut cube = Cube::new();
        cube.rotate_side(White, Clockwise).unwrap();
        let red = cube.face_grid(Red).unwrap();
        assert_eq!(red.rows[0], [Blue; 3]);
        assert_eq!(red.rows[1], [Red; 3]);
        assert_eq!(red.rows[2], [Red; 3]);
        assert_eq!(cube.face_grid(Green).unwrap().rows[0], [Red; 3]);
        assert_eq!(cube.face_grid(White).unwrap().rows, [[White; 3]; 3]);
        assert_eq!(cube.face_grid(Yellow).unwrap().rows, [[Yellow; 3]; 3]);
    }

    #[test]
    fn red_turn_moves_white_row() {
        let mut cube = Cube::new();
        cube.rotate_side(Red, Clockwise).unwrap();
        let white = cube.face_grid(White).unwrap();
        assert_eq!(white.rows[0], [Green; 3]);
        assert_eq!(white.rows[2], [White; 3]);
        assert_eq!(cube.face_grid(Red).unwrap().rows, [[Red; 3]; 3]);
        assert_eq!(cube.face_grid(Orange).unwrap().rows, [[Orange; 3]; 3]);
    }

    /// Adjacent quarter turns have order 105, commutators order 6.
    #[test]
    fn known_orders() {
        let q = Twist::quarter;
        assert_eq!(order_of(&[q(Red, Clockwise), q(White, Clockwise)]), 105);
        assert_eq!(order_of(&[q(Yellow, Clockwise), q(Orange, Clockwise)]), 105);
        assert_eq!(order_of(&[q(Green, Clockwise), q(Blue, Clockwise)]), 4);
        assert_eq!(
            order_of(&[
                q(White, Clockwise),
                q(Green, CounterClockwise),
                q(White, CounterClockwise),
                q(Green, Clockwise),
            ]),
            6
        );
    }

    #[test]
    fn corrupted_ring_is_rejected_without_mutation() {
        let mut cube = Cube::new();
        let mut side = cube.get_side(White);
        side[ClockPosition::Twelve] = Cell::edge(Red, Green);
        cube.put_side(White, &side);
        let before = cube.clone();

        assert_eq!(
            cube.rotate_side(White, Clockwise),
            Err(CubeError::UnboundSticker {
                face: White,
                position: ClockPosition::Twelve,
                kind: CellKind::Edge,
            })
        );
        assert_eq!(cube, before);
    }

    #[test]
    fn mismatched_corner_is_rejected() {
        let mut cube = Cube::new();
        let mut side = cube.get_side(Red);
        side[ClockPosition::OneThirty] = Cell::corner(White, Green, Orange);
        cube.put_side(Red, &side);
        let before = cube.clone();

        assert_eq!(
            cube.rotate_side(Red, Clockwise),
            Err(CubeError::CornerMismatch {
                face: Red,
                position: ClockPosition::OneThirty,
                expected: Blue,
            })
        );
        assert_eq!(cube, before);
    }

    #[test]
    fn spin_moves_two_slots() {
        let side = Cube::new().get_side(White);
        let spun = side.spun(Clockwise);
        for position in ClockPosition::all() {
            assert_eq!(spun[position.turned(2)], side[position]);
        }
        assert_eq!(spun.spun(CounterClockwise), side);
    }
}
