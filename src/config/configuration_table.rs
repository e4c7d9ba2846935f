use std::fmt;

use super::config::{
    ADC_RESOLUTION, MOISTURE_DRY, MOISTURE_DRY_MAX, MOISTURE_HUMID_MAX, MOISTURE_HUMID_MIN,
    MOISTURE_WET_MAX, MOISTURE_WET_MIN, READING_INTERVAL, SENSOR_NAME, SENSOR_PIN, STATUS_LED,
    VOLTAGE_REFERENCE, WEBSOCKET_HOST, WEBSOCKET_PATH, WEBSOCKET_PORT, WIFI_PASSWORD, WIFI_SSID,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SemanticGroup {
    NetworkCredentials,
    EndpointAddress,
    SensorIdentity,
    PinAssignment,
    AdcScaling,
    MoistureThreshold,
}

impl SemanticGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticGroup::NetworkCredentials => "network credentials",
            SemanticGroup::EndpointAddress => "endpoint address",
            SemanticGroup::SensorIdentity => "sensor identity/timing",
            SemanticGroup::PinAssignment => "pin assignment",
            SemanticGroup::AdcScaling => "ADC scaling",
            SemanticGroup::MoistureThreshold => "moisture threshold",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigurationValue {
    Text(&'static str),
    Integer(i64),
    Float(f32),
}

impl fmt::Display for ConfigurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationValue::Text(value) => write!(f, "\"{}\"", value),
            ConfigurationValue::Integer(value) => write!(f, "{}", value),
            ConfigurationValue::Float(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfigurationConstant {
    pub name: &'static str,
    pub value: ConfigurationValue,
    pub group: SemanticGroup,
}

impl ConfigurationConstant {
    const fn new(name: &'static str, value: ConfigurationValue, group: SemanticGroup) -> Self {
        ConfigurationConstant { name, value, group }
    }

    /// Hides credentials so the table can be logged.
    pub fn display_value(&self) -> String {
        match (self.group, self.value) {
            (SemanticGroup::NetworkCredentials, ConfigurationValue::Text(value))
                if self.name.ends_with("PASSWORD") =>
            {
                "*".repeat(value.len())
            }
            _ => self.value.to_string(),
        }
    }
}

/// Every constant of `config::config`, built from the constants themselves.
pub const CONFIGURATION_TABLE: &[ConfigurationConstant] = &[
    ConfigurationConstant::new(
        "WIFI_SSID",
        ConfigurationValue::Text(WIFI_SSID),
        SemanticGroup::NetworkCredentials,
    ),
    ConfigurationConstant::new(
        "WIFI_PASSWORD",
        ConfigurationValue::Text(WIFI_PASSWORD),
        SemanticGroup::NetworkCredentials,
    ),
    ConfigurationConstant::new(
        "WEBSOCKET_HOST",
        ConfigurationValue::Text(WEBSOCKET_HOST),
        SemanticGroup::EndpointAddress,
    ),
    ConfigurationConstant::new(
        "WEBSOCKET_PORT",
        ConfigurationValue::Integer(WEBSOCKET_PORT as i64),
        SemanticGroup::EndpointAddress,
    ),
    ConfigurationConstant::new(
        "WEBSOCKET_PATH",
        ConfigurationValue::Text(WEBSOCKET_PATH),
        SemanticGroup::EndpointAddress,
    ),
    ConfigurationConstant::new(
        "SENSOR_NAME",
        ConfigurationValue::Text(SENSOR_NAME),
        SemanticGroup::SensorIdentity,
    ),
    ConfigurationConstant::new(
        "READING_INTERVAL",
        ConfigurationValue::Integer(READING_INTERVAL as i64),
        SemanticGroup::SensorIdentity,
    ),
    ConfigurationConstant::new(
        "SENSOR_PIN",
        ConfigurationValue::Integer(SENSOR_PIN as i64),
        SemanticGroup::PinAssignment,
    ),
    ConfigurationConstant::new(
        "STATUS_LED",
        ConfigurationValue::Integer(STATUS_LED as i64),
        SemanticGroup::PinAssignment,
    ),
    ConfigurationConstant::new(
        "ADC_RESOLUTION",
        ConfigurationValue::Float(ADC_RESOLUTION),
        SemanticGroup::AdcScaling,
    ),
    ConfigurationConstant::new(
        "VOLTAGE_REFERENCE",
        ConfigurationValue::Float(VOLTAGE_REFERENCE),
        SemanticGroup::AdcScaling,
    ),
    ConfigurationConstant::new(
        "MOISTURE_DRY",
        ConfigurationValue::Integer(MOISTURE_DRY as i64),
        SemanticGroup::MoistureThreshold,
    ),
    ConfigurationConstant::new(
        "MOISTURE_DRY_MAX",
        ConfigurationValue::Integer(MOISTURE_DRY_MAX as i64),
        SemanticGroup::MoistureThreshold,
    ),
    ConfigurationConstant::new(
        "MOISTURE_HUMID_MIN",
        ConfigurationValue::Integer(MOISTURE_HUMID_MIN as i64),
        SemanticGroup::MoistureThreshold,
    ),
    ConfigurationConstant::new(
        "MOISTURE_HUMID_MAX",
        ConfigurationValue::Integer(MOISTURE_HUMID_MAX as i64),
        SemanticGroup::MoistureThreshold,
    ),
    ConfigurationConstant::new(
        "MOISTURE_WET_MIN",
        ConfigurationValue::Integer(MOISTURE_WET_MIN as i64),
        SemanticGroup::MoistureThreshold,
    ),
    ConfigurationConstant::new(
        "MOISTURE_WET_MAX",
        ConfigurationValue::Integer(MOISTURE_WET_MAX as i64),
        SemanticGroup::MoistureThreshold,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn find_constant(name: &str) -> Option<&'static ConfigurationConstant> {
        CONFIGURATION_TABLE
            .iter()
            .find(|constant| constant.name == name)
    }

    #[test]
    fn test_table_lists_every_constant() {
        assert_eq!(CONFIGURATION_TABLE.len(), 17);
    }

    #[test]
    fn test_find_constant() {
        let port = find_constant("WEBSOCKET_PORT").unwrap();
        assert_eq!(port.value, ConfigurationValue::Integer(8080));
        assert_eq!(port.group, SemanticGroup::EndpointAddress);
        assert!(find_constant("MOISTURE_SOGGY").is_none());
    }

    #[test]
    fn test_moisture_group_has_six_thresholds() {
        let thresholds = CONFIGURATION_TABLE
            .iter()
            .filter(|constant| constant.group == SemanticGroup::MoistureThreshold)
            .count();
        assert_eq!(thresholds, 6);
    }

    #[test]
    fn test_password_is_masked() {
        let password = find_constant("WIFI_PASSWORD").unwrap();
        assert_eq!(password.display_value(), "*".repeat(WIFI_PASSWORD.len()));
        let ssid = find_constant("WIFI_SSID").unwrap();
        assert_eq!(ssid.display_value(), "\"CreaTone\"");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(ConfigurationValue::Float(3.3).to_string(), "3.3");
        assert_eq!(ConfigurationValue::Float(4095.0).to_string(), "4095.0");
        assert_eq!(ConfigurationValue::Integer(5000).to_string(), "5000");
    }
}
