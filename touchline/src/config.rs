use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_CLUB;

/// Report settings. Every field may be omitted from the JSON form, falling back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the club the matches are recorded for.
    pub club: String,
    /// Championship singled out for points, opponents, unbeaten run and evolution.
    pub championship: String,
    pub top_strikers: usize,
    /// Last minute counted towards the first half.
    pub half_time: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            club: DEFAULT_CLUB.into(),
            championship: "Ligue 1".into(),
            top_strikers: 5,
            half_time: 45,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_json() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(Config::default(), config);
    }

    #[test]
    fn overrides_from_json() {
        let config: Config =
            serde_json::from_str(r#"{"championship": "Ligue 2", "half_time": 40}"#).unwrap();
        assert_eq!("Ligue 2", config.championship);
        assert_eq!(40, config.half_time);
        assert_eq!("Metz", config.club);
    }
}
