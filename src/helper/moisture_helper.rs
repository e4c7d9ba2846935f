use std::fmt;

use serde::Serialize;

use crate::config::config::{
    MOISTURE_DRY, MOISTURE_DRY_MAX, MOISTURE_HUMID_MAX, MOISTURE_HUMID_MIN, MOISTURE_WET_MAX,
    MOISTURE_WET_MIN,
};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoistureState {
    Dry,
    Humid,
    Wet,
}

impl MoistureState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoistureState::Dry => "dry",
            MoistureState::Humid => "humid",
            MoistureState::Wet => "wet",
        }
    }
}

impl fmt::Display for MoistureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shared boundary belongs to the upper range: 300 is humid, 700 is wet.
/// Readings above `MOISTURE_WET_MAX` are left unclassified.
pub fn classify(raw: u16) -> Option<MoistureState> {
    if (MOISTURE_DRY..MOISTURE_DRY_MAX).contains(&raw) {
        Some(MoistureState::Dry)
    } else if (MOISTURE_HUMID_MIN..MOISTURE_HUMID_MAX).contains(&raw) {
        Some(MoistureState::Humid)
    } else if (MOISTURE_WET_MIN..=MOISTURE_WET_MAX).contains(&raw) {
        Some(MoistureState::Wet)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_typical_readings() {
        assert_eq!(classify(200), Some(MoistureState::Dry));
        assert_eq!(classify(500), Some(MoistureState::Humid));
        assert_eq!(classify(800), Some(MoistureState::Wet));
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0), Some(MoistureState::Dry));
        assert_eq!(classify(299), Some(MoistureState::Dry));
        assert_eq!(classify(300), Some(MoistureState::Humid));
        assert_eq!(classify(699), Some(MoistureState::Humid));
        assert_eq!(classify(700), Some(MoistureState::Wet));
        assert_eq!(classify(950), Some(MoistureState::Wet));
    }

    #[test]
    fn test_classify_above_wet_max() {
        assert_eq!(classify(951), None);
        assert_eq!(classify(4095), None);
    }

    #[test]
    fn test_state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MoistureState::Humid).unwrap(),
            "\"humid\""
        );
        assert_eq!(MoistureState::Wet.to_string(), "wet");
    }
}
