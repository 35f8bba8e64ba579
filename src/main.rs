use eyre::eyre;
use itertools::Itertools;
use layered_cube::preferences::Preferences;
use layered_cube::puzzle::{Color, Direction, Twist};
use layered_cube::session::Session;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logging(prefs: &Preferences) {
    if std::env::var_os("RUST_LOG").is_some() {
        pretty_env_logger::init();
    } else {
        pretty_env_logger::formatted_builder()
            .parse_filters(&prefs.log_filter)
            .init();
    }
}

/// Turns each face one to four times and checks that finishing the full
/// turn gets back to the start.
fn rotate_back_checks(session: &Session, faces: &[Color]) -> eyre::Result<()> {
    for &face in faces {
        for direction in [Direction::Clockwise, Direction::CounterClockwise] {
            for turns in 1..=4 {
                if !session.rotate_back_check(face, direction, turns)? {
                    return Err(eyre!(
                        "{} {} did not rotate back after {} turns",
                        face.name(),
                        direction,
                        turns
                    ));
                }
            }
        }
        info!("{} rotates back to solved", face.name());
    }
    Ok(())
}

/// Winds a random number of random twists onto the cube and unwinds them
/// again. Returns how many twists were wound.
fn wind_unwind(session: &mut Session, rng: &mut StdRng, max_wind: usize) -> eyre::Result<usize> {
    let count = rng.gen_range(1..max_wind.max(2));
    for _ in 0..count {
        let face = Color::ALL[rng.gen_range(0..Color::ALL.len())];
        let direction = if rng.gen() {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        session.twist(Twist::new(face, direction, rng.gen_range(0..=4)))?;
    }
    debug!("wound {} twists", count);
    if !session.unwind()? {
        return Err(eyre!("cube was not solved after unwinding {} twists", count));
    }
    Ok(count)
}

fn main() -> eyre::Result<()> {
    let prefs = Preferences::load()?;
    init_logging(&prefs);

    let mut session = Session::new();
    println!("{}", session.cube);

    rotate_back_checks(&session, &prefs.harness.faces)?;

    let mut rng = match prefs.scramble.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut total = 0;
    for round in 0..prefs.harness.rounds {
        for _ in &prefs.harness.faces {
            total += wind_unwind(&mut session, &mut rng, prefs.harness.max_wind)?;
        }
        debug!("round {} done, {} twists so far", round, total);
    }
    info!("cube solved after {} random twists", total);

    session.scramble(&mut rng, prefs.scramble.length)?;
    println!("scramble: {}", session.scramble.iter().join(", "));
    println!("{}", session.cube);
    if session.unwind()? {
        info!("scramble unwound to solved");
        Ok(())
    } else {
        Err(eyre!("scramble did not unwind to solved"))
    }
}
