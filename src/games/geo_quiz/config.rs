//! Geo-quiz configuration and the built-in location catalogue.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// A picture to identify, with four candidate answers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Canonical answer; must be one of `options`.
    pub name: String,
    /// Image reference resolved by the UI.
    pub image: String,
    pub options: [String; 4],
}

impl Location {
    pub fn new(name: &str, image: &str, options: [&str; 4]) -> Self {
        Self {
            name: name.to_string(),
            image: image.to_string(),
            options: options.map(str::to_string),
        }
    }

    /// Whether `choice` is one of the offered answers.
    #[must_use]
    pub fn offers(&self, choice: &str) -> bool {
        self.options.iter().any(|o| o == choice)
    }
}

fn catalogue() -> Vec<Location> {
    vec![
        Location::new("Paris", "geo/paris.jpg", ["Paris", "Londra", "Roma", "Madrid"]),
        Location::new("İstanbul", "geo/istanbul.jpg", ["Atina", "İstanbul", "Kahire", "Bakü"]),
        Location::new("Tokyo", "geo/tokyo.jpg", ["Seul", "Pekin", "Tokyo", "Bangkok"]),
        Location::new("New York", "geo/new_york.jpg", ["Chicago", "Toronto", "Boston", "New York"]),
        Location::new("Kahire", "geo/cairo.jpg", ["Kahire", "Dubai", "Tunus", "Riyad"]),
        Location::new("Roma", "geo/rome.jpg", ["Venedik", "Roma", "Floransa", "Milano"]),
        Location::new("Rio de Janeiro", "geo/rio.jpg", ["Lima", "Santiago", "Rio de Janeiro", "Bogota"]),
        Location::new("Sidney", "geo/sydney.jpg", ["Auckland", "Melbourne", "Perth", "Sidney"]),
        Location::new("Kapadokya", "geo/cappadocia.jpg", ["Kapadokya", "Pamukkale", "Efes", "Nemrut"]),
        Location::new("Londra", "geo/london.jpg", ["Dublin", "Londra", "Edinburgh", "Amsterdam"]),
    ]
}

/// Geo-quiz configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoQuizConfig {
    /// Rounds per quiz (default: 5), capped at the catalogue size.
    pub total_rounds: u32,
    pub locations: Vec<Location>,
}

impl Default for GeoQuizConfig {
    fn default() -> Self {
        Self {
            total_rounds: 5,
            locations: catalogue(),
        }
    }
}

impl GeoQuizConfig {
    /// Create a new config with a custom round count.
    pub fn with_total_rounds(mut self, rounds: u32) -> Self {
        self.total_rounds = rounds;
        self
    }

    /// Create a new config with a custom catalogue.
    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_rounds == 0 {
            return Err(ConfigError::TooSmall {
                what: "total rounds",
                min: 1,
            });
        }
        if self.locations.is_empty() {
            return Err(ConfigError::Empty { what: "locations" });
        }
        if let Some(location) = self.locations.iter().find(|l| !l.offers(&l.name)) {
            return Err(ConfigError::AnswerNotOffered {
                name: location.name.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeoQuizConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert!(config.locations.len() >= config.total_rounds as usize);
    }

    #[test]
    fn test_catalogue_options_are_distinct() {
        for location in catalogue() {
            let mut options = location.options.to_vec();
            options.sort();
            options.dedup();
            assert_eq!(options.len(), 4, "{}", location.name);
        }
    }

    #[test]
    fn test_answer_must_be_offered() {
        let bad = Location::new("Ankara", "geo/ankara.jpg", ["İzmir", "Bursa", "Konya", "Adana"]);
        let config = GeoQuizConfig::default().with_locations(vec![bad]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::AnswerNotOffered { name: "Ankara".into() })
        );
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = GeoQuizConfig::default().with_total_rounds(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serde() {
        let config = GeoQuizConfig::default().with_total_rounds(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: GeoQuizConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
