use crate::service::{
    clock_service::{is_clock_synchronized, start_clock_synchronization},
    peripheral_service::{MoistureSensor, StatusLed},
    websocket_service::SensorWebSocket,
    wifi_service::{get_mac_address, is_wifi_connected, reconnect_to_wifi_insistently_if_needed},
};
use chrono::Utc;
use creasense::{
    config::config::{READING_INTERVAL, SENSOR_NAME},
    dto::sensor_data_request::SensorDataRequest,
    helper::{configuration_helper::websocket_uri, date_helper::reading_timestamp},
};
use esp_idf_svc::{
    eventloop::EspSystemEventLoop,
    hal::{delay::FreeRtos, peripherals::Peripherals},
    nvs::EspDefaultNvsPartition,
    wifi::EspWifi,
};
use log::{error, info};

pub fn orchestrate() -> anyhow::Result<()> {
    let peripherals = Peripherals::take()?;

    let sys_loop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;

    let mut status_led = StatusLed::new(peripherals.pins.gpio15)?;
    status_led.on();

    let mut wifi_driver = EspWifi::new(peripherals.modem, sys_loop, Some(nvs))?;
    reconnect_to_wifi_insistently_if_needed(&mut wifi_driver, false);

    let mac_address = get_mac_address(&wifi_driver)?;
    info!("WiFi MAC Address: {}", mac_address);

    let sntp = start_clock_synchronization();
    let mut clock_synchronized = false;

    let mut sensor = MoistureSensor::new(peripherals.adc1, peripherals.pins.gpio2)?;
    let mut websocket = SensorWebSocket::connect(&websocket_uri())?;

    loop {
        if !is_wifi_connected(&wifi_driver) {
            status_led.on();
            reconnect_to_wifi_insistently_if_needed(&mut wifi_driver, true);
        }

        if !clock_synchronized && is_clock_synchronized(sntp.as_ref()) {
            info!("clock synchronized, readings are now timestamped");
            clock_synchronized = true;
        }

        match send_reading(&mut sensor, &mut websocket, &mac_address) {
            Ok(()) => status_led.blink(),
            Err(e) => {
                error!("reading not delivered: {:?}", e);
                status_led.on();
            }
        }

        FreeRtos::delay_ms(READING_INTERVAL);
    }
}

fn send_reading(
    sensor: &mut MoistureSensor,
    websocket: &mut SensorWebSocket,
    mac_address: &str,
) -> anyhow::Result<()> {
    let raw = sensor.read_average()?;
    let reading = SensorDataRequest::new(
        SENSOR_NAME.to_owned(),
        mac_address.to_owned(),
        raw,
        reading_timestamp(Utc::now()),
    );
    info!(
        "raw: {}, voltage: {:.2}V, state: {:?}",
        reading.raw, reading.voltage, reading.state
    );
    websocket.send_reading(&reading)
}
