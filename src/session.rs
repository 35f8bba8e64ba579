use eyre::WrapErr;
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::puzzle::common::*;
use crate::puzzle::cube::Cube;

/// A cube together with how it got to its current state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub cube: Cube,
    pub scramble: Vec<Twist>,
    pub twists: Vec<Twist>,
    pub undid_twists: Vec<Twist>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn twist(&mut self, twist: Twist) -> Result<(), CubeError> {
        self.cube.apply(twist)?;
        self.twists.push(twist);
        self.undid_twists = vec![];
        Ok(())
    }

    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, CubeError> {
        if let Some(twist) = self.twists.pop() {
            self.cube.apply(twist.inverse())?;
            self.undid_twists.push(twist);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn redo(&mut self) -> Result<bool, CubeError> {
        if let Some(twist) = self.undid_twists.pop() {
            self.cube.apply(twist)?;
            self.twists.push(twist);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Replaces the last twist with its inverse.
    pub fn do_inverse(&mut self) -> Result<bool, CubeError> {
        if let Some(twist) = self.twists.pop() {
            let inverse = twist.inverse();
            self.cube.apply(inverse)?;
            self.cube.apply(inverse)?; // do it again
            self.twists.push(inverse);
            self.undid_twists = vec![];
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Resets, then applies `length` random twists of one to three turns
    /// each and records them as the scramble.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R, length: usize) -> Result<(), CubeError> {
        self.reset();
        let directions = [Direction::Clockwise, Direction::CounterClockwise];
        for _ in 0..length {
            let twist = Twist::new(
                *Color::ALL.choose(rng).unwrap_or(&Color::White),
                *directions.choose(rng).unwrap_or(&Direction::Clockwise),
                rng.gen_range(1..=3),
            );
            self.cube.apply(twist)?;
            self.scramble.push(twist);
        }
        debug!("scrambled with {} twists", self.scramble.len());
        Ok(())
    }

    /// Undoes every twist and then the scramble, newest first, and reports
    /// whether that got back to solved.
    pub fn unwind(&mut self) -> Result<bool, CubeError> {
        let history: Vec<Twist> = self.scramble.iter().chain(&self.twists).copied().collect();
        for twist in history.iter().rev() {
            self.cube.apply(twist.inverse())?;
        }
        debug!("unwound {} twists", history.len());
        self.scramble = vec![];
        self.twists = vec![];
        self.undid_twists = vec![];
        Ok(self.cube.is_solved())
    }

    /// Twists `face` `turns` times, finishes the full turn, and checks the
    /// cube came back to where it started. The session is not changed.
    pub fn rotate_back_check(
        &self,
        face: Color,
        direction: Direction,
        turns: u8,
    ) -> Result<bool, CubeError> {
        let mut cube = self.cube.clone();
        cube.apply(Twist::new(face, direction, turns))?;
        cube.apply(Twist::new(face, direction, (4 - turns % 4) % 4))?;
        Ok(cube == self.cube)
    }

    pub fn to_log(&self) -> SessionLog {
        SessionLog {
            version: env!("CARGO_PKG_VERSION").to_string(),
            scramble: self.scramble.clone(),
            twists: self.twists.clone(),
        }
    }

    /// Rebuilds a session by replaying a log onto a solved cube.
    pub fn from_log(log: &SessionLog) -> eyre::Result<Self> {
        if log.version != env!("CARGO_PKG_VERSION") {
            warn!(
                "session log was written by version {}, replaying with {}",
                log.version,
                env!("CARGO_PKG_VERSION")
            );
        }
        let mut session = Self::new();
        for &twist in &log.scramble {
            session
                .cube
                .apply(twist)
                .wrap_err_with(|| format!("replaying scramble twist {}", twist))?;
            session.scramble.push(twist);
        }
        for &twist in &log.twists {
            session
                .twist(twist)
                .wrap_err_with(|| format!("replaying twist {}", twist))?;
        }
        Ok(session)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> eyre::Result<()> {
        std::fs::write(path, serde_json::to_string(&self.to_log())?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let log: SessionLog = serde_json::from_reader(reader)?;
        Self::from_log(&log)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    pub version: String,
    pub scramble: Vec<Twist>,
    pub twists: Vec<Twist>,
}
