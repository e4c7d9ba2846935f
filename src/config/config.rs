// WiFi
pub const WIFI_SSID: &str = "CreaTone";
pub const WIFI_PASSWORD: &str = "CreaToToToTone";

// WebSocket server receiving the readings
pub const WEBSOCKET_HOST: &str = "192.168.79.9";
pub const WEBSOCKET_PORT: u16 = 8080;
pub const WEBSOCKET_PATH: &str = "/";

// Sensor
pub const SENSOR_NAME: &str = "MoistureSensor";
// board label A1, ADC1 channel 1
pub const SENSOR_PIN: u8 = 2;
// milliseconds between two readings
pub const READING_INTERVAL: u32 = 5000;

// status LED GPIO
pub const STATUS_LED: u8 = 15;

// ADC: 12-bit (2^12 - 1) against the 3.3V reference
pub const ADC_RESOLUTION: f32 = 4095.0;
pub const VOLTAGE_REFERENCE: f32 = 3.3;

// Moisture ranges on the raw ADC scale
pub const MOISTURE_DRY: u16 = 0;
pub const MOISTURE_DRY_MAX: u16 = 300;
pub const MOISTURE_HUMID_MIN: u16 = 300;
pub const MOISTURE_HUMID_MAX: u16 = 700;
// sensor in water
pub const MOISTURE_WET_MIN: u16 = 700;
pub const MOISTURE_WET_MAX: u16 = 950;
