use serde::Serialize;

use crate::helper::{
    adc_helper::{raw_to_app_value, raw_to_voltage},
    moisture_helper::{classify, MoistureState},
};

pub const SENSOR_DATA_TYPE: &str = "sensor_data";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SensorDataRequest {
    #[serde(rename = "type")]
    pub message_type: &'static str,

    #[serde(rename = "sensor")]
    pub sensor: String,

    #[serde(rename = "device")]
    pub device: String,

    #[serde(rename = "raw")]
    pub raw: u16,

    #[serde(rename = "voltage")]
    pub voltage: f32,

    #[serde(rename = "moisture_app_value")]
    pub moisture_app_value: f32,

    #[serde(rename = "state")]
    pub state: Option<MoistureState>,

    #[serde(rename = "timestamp")]
    pub timestamp: Option<i64>,
}

impl SensorDataRequest {
    pub fn new(sensor: String, device: String, raw: u16, timestamp: Option<i64>) -> Self {
        SensorDataRequest {
            message_type: SENSOR_DATA_TYPE,
            sensor,
            device,
            raw,
            voltage: raw_to_voltage(raw),
            moisture_app_value: raw_to_app_value(raw),
            state: classify(raw),
            timestamp,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_sensor_data_fields() {
        let request = SensorDataRequest::new(
            "MoistureSensor".to_owned(),
            "24:0a:c4:12:ab:ff".to_owned(),
            500,
            Some(1_714_564_800_000),
        );
        let value: Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();

        assert_eq!(value["type"], json!("sensor_data"));
        assert_eq!(value["sensor"], json!("MoistureSensor"));
        assert_eq!(value["device"], json!("24:0a:c4:12:ab:ff"));
        assert_eq!(value["raw"], json!(500));
        assert_eq!(value["state"], json!("humid"));
        assert_eq!(value["timestamp"], json!(1_714_564_800_000i64));
        assert!((value["voltage"].as_f64().unwrap() - 0.40293).abs() < 1e-4);
        assert!((value["moisture_app_value"].as_f64().unwrap() - 0.52632).abs() < 1e-4);
    }

    #[test]
    fn test_unclassified_reading_without_clock() {
        let request = SensorDataRequest::new("s".to_owned(), "d".to_owned(), 3000, None);
        let value: Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();

        assert_eq!(value["state"], Value::Null);
        assert_eq!(value["timestamp"], Value::Null);
        assert_eq!(value["moisture_app_value"], json!(1.0));
    }
}
