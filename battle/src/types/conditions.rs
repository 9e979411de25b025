//! Field conditions

/// Weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Sun,
}

impl Weather {
    /// Parse from protocol string
    pub fn from_protocol(s: &str) -> Option<Self> {
        // Normalize: lowercase and remove spaces
        let normalized = s.to_lowercase().replace([' ', '-'], "");

        match normalized.as_str() {
            "clear" | "none" | "" => Some(Weather::Clear),
            "rain" | "raindance" => Some(Weather::Rain),
            "sun" | "sunnyday" => Some(Weather::Sun),
            _ => None,
        }
    }

    /// Convert to protocol format
    pub fn to_protocol(&self) -> &'static str {
        match self {
            Weather::Clear => "clear",
            Weather::Rain => "rain",
            Weather::Sun => "sun",
        }
    }

    /// Message shown at the start of each selection phase while active
    pub fn continues_message(&self) -> Option<&'static str> {
        match self {
            Weather::Clear => None,
            Weather::Rain => Some("The rain continues to fall."),
            Weather::Sun => Some("The sun continues to shine brightly!"),
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::Rain => "Rain",
            Weather::Sun => "Sun",
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
