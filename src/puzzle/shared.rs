use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::puzzle::common::*;
use crate::puzzle::cube::Cube;

/// A cube shared between threads. The lock is held for a whole twist, so
/// no caller ever sees a half-written ring.
#[derive(Debug, Clone, Default)]
pub struct SharedCube(Arc<Mutex<Cube>>);

impl SharedCube {
    pub fn new(cube: Cube) -> Self {
        Self(Arc::new(Mutex::new(cube)))
    }

    fn lock(&self) -> MutexGuard<'_, Cube> {
        // put_side is the only write, so a poisoned lock still guards a whole cube
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn rotate_side(&self, face: Color, direction: Direction) -> Result<(), CubeError> {
        self.lock().rotate_side(face, direction)
    }

    pub fn apply(&self, twist: Twist) -> Result<(), CubeError> {
        self.lock().apply(twist)
    }

    pub fn visible_color(&self, face: Color, position: ClockPosition) -> Result<Color, CubeError> {
        self.lock().visible_color(face, position)
    }

    pub fn is_solved(&self) -> bool {
        self.lock().is_solved()
    }

    pub fn snapshot(&self) -> Cube {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_twists_stay_consistent() {
        let shared = SharedCube::default();
        let handles: Vec<_> = Color::ALL
            .into_iter()
            .map(|face| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..40 {
                        shared.rotate_side(face, Direction::Clockwise).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let cube = shared.snapshot();
        assert_eq!(cube.validate(), Ok(()));
    }

    #[test]
    fn single_thread_round_trip() {
        let shared = SharedCube::new(Cube::new());
        shared.rotate_side(Color::Blue, Direction::Clockwise).unwrap();
        assert!(!shared.is_solved());
        shared
            .apply(Twist::new(Color::Blue, Direction::Clockwise, 3))
            .unwrap();
        assert!(shared.is_solved());
        assert_eq!(
            shared.visible_color(Color::Blue, ClockPosition::Six),
            Ok(Color::Blue)
        );
    }
}
