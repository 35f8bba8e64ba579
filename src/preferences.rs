use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

use crate::puzzle::common::Color;

const PREFS_PATH: &str = "./preferences.json";

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_faces() -> Vec<Color> {
    Color::ALL.to_vec()
}

fn default_rounds() -> usize {
    100
}

fn default_max_wind() -> usize {
    100
}

fn default_scramble_length() -> usize {
    25
}

/// Settings for the rotate-back and wind/unwind checks of the harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessPreferences {
    /// Faces put through the rotate-back checks.
    #[serde(default = "default_faces")]
    pub faces: Vec<Color>,
    /// Random wind/unwind rounds per face.
    #[serde(default = "default_rounds")]
    pub rounds: usize,
    /// Upper bound on the twists wound in one round.
    #[serde(default = "default_max_wind")]
    pub max_wind: usize,
}

impl Default for HarnessPreferences {
    fn default() -> Self {
        Self {
            faces: default_faces(),
            rounds: default_rounds(),
            max_wind: default_max_wind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScramblePreferences {
    #[serde(default = "default_scramble_length")]
    pub length: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ScramblePreferences {
    fn default() -> Self {
        Self {
            length: default_scramble_length(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub harness: HarnessPreferences,
    #[serde(default)]
    pub scramble: ScramblePreferences,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            harness: HarnessPreferences::default(),
            scramble: ScramblePreferences::default(),
        }
    }
}

impl Preferences {
    pub fn save(&self) -> eyre::Result<()> {
        self.save_to(PREFS_PATH)
    }

    pub fn load() -> eyre::Result<Self> {
        Self::load_from(PREFS_PATH)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> eyre::Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Missing file means defaults.
    pub fn load_from(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Default::default());
        }
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.harness.faces.len(), 6);
        assert_eq!(prefs.log_filter, "info");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"harness":{"faces":["Red","Blue"]},"scramble":{"seed":3}}"#)
                .unwrap();
        assert_eq!(prefs.harness.faces, vec![Color::Red, Color::Blue]);
        assert_eq!(prefs.harness.rounds, 100);
        assert_eq!(prefs.scramble.seed, Some(3));
        assert_eq!(prefs.scramble.length, 25);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = std::env::temp_dir().join("layered-cube-no-such-preferences.json");
        assert_eq!(Preferences::load_from(&path).unwrap(), Preferences::default());
    }

    #[test]
    fn save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "layered-cube-preferences-{}.json",
            std::process::id()
        ));
        let mut prefs = Preferences::default();
        prefs.log_filter = "layered_cube=trace".to_string();
        prefs.harness.rounds = 3;
        prefs.save_to(&path).unwrap();
        let loaded = Preferences::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, prefs);
    }
}
