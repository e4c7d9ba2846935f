use std::collections::HashSet;
use std::time::Duration;

use anyhow::{bail, ensure};
use log::info;

use crate::config::{
    config::{
        ADC_RESOLUTION, MOISTURE_DRY, MOISTURE_DRY_MAX, MOISTURE_HUMID_MAX, MOISTURE_HUMID_MIN,
        MOISTURE_WET_MAX, MOISTURE_WET_MIN, READING_INTERVAL, SENSOR_NAME, SENSOR_PIN, STATUS_LED,
        VOLTAGE_REFERENCE, WEBSOCKET_HOST, WEBSOCKET_PATH, WEBSOCKET_PORT, WIFI_PASSWORD,
        WIFI_SSID,
    },
    configuration_table::{ConfigurationConstant, CONFIGURATION_TABLE},
};

const MAX_SSID_LENGTH: usize = 32;
const MAX_PASSWORD_LENGTH: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoistureThresholds {
    pub dry: u16,
    pub dry_max: u16,
    pub humid_min: u16,
    pub humid_max: u16,
    pub wet_min: u16,
    pub wet_max: u16,
}

pub const MOISTURE_THRESHOLDS: MoistureThresholds = MoistureThresholds {
    dry: MOISTURE_DRY,
    dry_max: MOISTURE_DRY_MAX,
    humid_min: MOISTURE_HUMID_MIN,
    humid_max: MOISTURE_HUMID_MAX,
    wet_min: MOISTURE_WET_MIN,
    wet_max: MOISTURE_WET_MAX,
};

pub fn websocket_uri() -> String {
    format!("ws://{}:{}{}", WEBSOCKET_HOST, WEBSOCKET_PORT, WEBSOCKET_PATH)
}

pub fn reading_interval() -> Duration {
    Duration::from_millis(u64::from(READING_INTERVAL))
}

pub fn find_duplicate_name(table: &[ConfigurationConstant]) -> Option<&'static str> {
    let mut seen = HashSet::new();
    table
        .iter()
        .find(|constant| !seen.insert(constant.name))
        .map(|constant| constant.name)
}

/// Ranges must be adjacent: each maximum is the next range's minimum.
pub fn validate_moisture_thresholds(thresholds: &MoistureThresholds) -> anyhow::Result<()> {
    ensure!(
        thresholds.dry < thresholds.dry_max,
        "MOISTURE_DRY ({}) must be lower than MOISTURE_DRY_MAX ({})",
        thresholds.dry,
        thresholds.dry_max
    );
    ensure!(
        thresholds.dry_max == thresholds.humid_min,
        "MOISTURE_DRY_MAX ({}) must equal MOISTURE_HUMID_MIN ({})",
        thresholds.dry_max,
        thresholds.humid_min
    );
    ensure!(
        thresholds.humid_min < thresholds.humid_max,
        "MOISTURE_HUMID_MIN ({}) must be lower than MOISTURE_HUMID_MAX ({})",
        thresholds.humid_min,
        thresholds.humid_max
    );
    ensure!(
        thresholds.humid_max == thresholds.wet_min,
        "MOISTURE_HUMID_MAX ({}) must equal MOISTURE_WET_MIN ({})",
        thresholds.humid_max,
        thresholds.wet_min
    );
    ensure!(
        thresholds.wet_min < thresholds.wet_max,
        "MOISTURE_WET_MIN ({}) must be lower than MOISTURE_WET_MAX ({})",
        thresholds.wet_min,
        thresholds.wet_max
    );
    ensure!(
        f32::from(thresholds.wet_max) <= ADC_RESOLUTION,
        "MOISTURE_WET_MAX ({}) is out of the ADC range (0..={})",
        thresholds.wet_max,
        ADC_RESOLUTION
    );
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FirmwareSettings {
    pub wifi_ssid: &'static str,
    pub wifi_password: &'static str,
    pub websocket_host: &'static str,
    pub websocket_port: u16,
    pub websocket_path: &'static str,
    pub sensor_name: &'static str,
    pub reading_interval: u32,
    pub sensor_pin: u8,
    pub status_led: u8,
    pub adc_resolution: f32,
    pub voltage_reference: f32,
}

pub const FIRMWARE_SETTINGS: FirmwareSettings = FirmwareSettings {
    wifi_ssid: WIFI_SSID,
    wifi_password: WIFI_PASSWORD,
    websocket_host: WEBSOCKET_HOST,
    websocket_port: WEBSOCKET_PORT,
    websocket_path: WEBSOCKET_PATH,
    sensor_name: SENSOR_NAME,
    reading_interval: READING_INTERVAL,
    sensor_pin: SENSOR_PIN,
    status_led: STATUS_LED,
    adc_resolution: ADC_RESOLUTION,
    voltage_reference: VOLTAGE_REFERENCE,
};

pub fn validate_firmware_settings(settings: &FirmwareSettings) -> anyhow::Result<()> {
    ensure!(
        !settings.wifi_ssid.is_empty() && settings.wifi_ssid.len() <= MAX_SSID_LENGTH,
        "WIFI_SSID must be 1 to {} bytes long",
        MAX_SSID_LENGTH
    );
    ensure!(
        settings.wifi_password.len() <= MAX_PASSWORD_LENGTH,
        "WIFI_PASSWORD must be at most {} bytes long",
        MAX_PASSWORD_LENGTH
    );

    ensure!(
        !settings.websocket_host.trim().is_empty(),
        "WEBSOCKET_HOST is empty"
    );
    ensure!(settings.websocket_port != 0, "WEBSOCKET_PORT must not be 0");
    ensure!(
        settings.websocket_path.starts_with('/'),
        "WEBSOCKET_PATH ({}) must start with '/'",
        settings.websocket_path
    );

    ensure!(
        !settings.sensor_name.trim().is_empty(),
        "SENSOR_NAME is blank"
    );
    ensure!(
        settings.reading_interval > 0,
        "READING_INTERVAL must be positive"
    );
    ensure!(
        settings.sensor_pin != settings.status_led,
        "SENSOR_PIN and STATUS_LED share GPIO{}",
        settings.sensor_pin
    );

    ensure!(
        settings.adc_resolution == 4095.0,
        "ADC_RESOLUTION ({}) does not match a 12-bit ADC",
        settings.adc_resolution
    );
    ensure!(
        settings.voltage_reference > 0.0,
        "VOLTAGE_REFERENCE ({}) must be positive",
        settings.voltage_reference
    );
    Ok(())
}

pub fn validate_configuration() -> anyhow::Result<()> {
    if let Some(name) = find_duplicate_name(CONFIGURATION_TABLE) {
        bail!("configuration constant {} is declared twice", name);
    }
    validate_firmware_settings(&FIRMWARE_SETTINGS)?;
    validate_moisture_thresholds(&MOISTURE_THRESHOLDS)?;

    info!(
        "configuration ok: {} constants, reporting to {} every {}ms",
        CONFIGURATION_TABLE.len(),
        websocket_uri(),
        READING_INTERVAL
    );
    Ok(())
}
