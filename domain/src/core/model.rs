//! Model value object naming the remote Gemini model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available Gemini models (Value Object)
///
/// The flash tier is the default: it is the cheapest model that handles
/// conversational turns well, which is all this program asks of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini15Flash,
    Gemini15Flash8B,
    Gemini15Pro,
    Gemini20Flash,
    Gemini20FlashLite,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model, as the API expects it
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Gemini15Flash8B => "gemini-1.5-flash-8b",
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini20FlashLite => "gemini-2.0-flash-lite",
            Model::Custom(s) => s,
        }
    }

    /// Short human-readable label for the sidebar
    pub fn display_label(&self) -> &str {
        match self {
            Model::Gemini15Flash | Model::Gemini20Flash => "Gemini Flash",
            Model::Gemini15Flash8B => "Gemini Flash 8B",
            Model::Gemini20FlashLite => "Gemini Flash Lite",
            Model::Gemini15Pro => "Gemini Pro",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a flash-tier model
    pub fn is_flash(&self) -> bool {
        matches!(
            self,
            Model::Gemini15Flash
                | Model::Gemini15Flash8B
                | Model::Gemini20Flash
                | Model::Gemini20FlashLite
        )
    }
}

impl Default for Model {
    /// Returns the default model (gemini-1.5-flash)
    fn default() -> Self {
        Model::Gemini15Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-1.5-flash" => Model::Gemini15Flash,
            "gemini-1.5-flash-8b" => Model::Gemini15Flash8B,
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-2.0-flash-lite" => Model::Gemini20FlashLite,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        let models = [
            Model::Gemini15Flash,
            Model::Gemini15Pro,
            Model::Gemini20Flash,
        ];
        for model in models {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "gemini-exp-1206".parse().unwrap();
        assert_eq!(model, Model::Custom("gemini-exp-1206".to_string()));
        assert_eq!(model.to_string(), "gemini-exp-1206");
    }

    #[test]
    fn test_model_default_is_flash() {
        let model = Model::default();
        assert_eq!(model, Model::Gemini15Flash);
        assert!(model.is_flash());
        assert!(!Model::Gemini15Pro.is_flash());
    }

    #[test]
    fn test_display_label() {
        assert_eq!(Model::Gemini15Flash.display_label(), "Gemini Flash");
        assert_eq!(Model::Gemini15Pro.display_label(), "Gemini Pro");
    }
}
