use anyhow::{bail, Context};
use creasense::config::config::{WIFI_PASSWORD, WIFI_SSID};
use creasense::helper::device_helper::format_mac_address;
use embedded_svc::wifi::ClientConfiguration;
use embedded_svc::wifi::Configuration;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::wifi::EspWifi;
use esp_idf_svc::wifi::WifiDeviceId;
use log::{error, info, warn};

const ONE_SHOT_MAX_ATTEMPTS: u32 = 5000;
const MAX_ATTEMPTS: u32 = 300000;

pub fn is_wifi_connected(wifi_driver: &EspWifi<'_>) -> bool {
    wifi_driver.is_connected().unwrap_or(false)
}

pub fn reconnect_to_wifi_insistently_if_needed(wifi_driver: &mut EspWifi<'_>, one_shot: bool) {
    while !is_wifi_connected(wifi_driver) {
        warn!("reconnecting to WiFi {}...", WIFI_SSID);
        if let Err(e) = connect_to_wifi(wifi_driver, one_shot) {
            error!("failed to connect to the WiFi network: {:?}", e);
        }
        if one_shot {
            break;
        }
        FreeRtos::delay_ms(100);
    }
}

pub fn connect_to_wifi(wifi_driver: &mut EspWifi<'_>, one_shot: bool) -> anyhow::Result<()> {
    wifi_driver.set_configuration(&Configuration::Client(ClientConfiguration {
        ssid: WIFI_SSID.into(),
        password: WIFI_PASSWORD.into(),
        ..Default::default()
    }))?;

    wifi_driver.start()?;
    wifi_driver.connect()?;
    let mut attempts = 0;
    while !wifi_driver.is_connected()? {
        FreeRtos::delay_ms(100);
        attempts += 1;
        if attempts % 50 == 0 {
            warn!("waiting for WiFi association ({} attempts)", attempts);
        }
        if one_shot && attempts > ONE_SHOT_MAX_ATTEMPTS {
            break;
        }
        if attempts > MAX_ATTEMPTS {
            bail!("WiFi association timed out after {} attempts", attempts);
        }
    }
    if wifi_driver.is_connected()? {
        info!("connected to WiFi {}", WIFI_SSID);
    }
    Ok(())
}

pub fn get_mac_address(wifi: &EspWifi<'static>) -> anyhow::Result<String> {
    let mac = wifi
        .driver()
        .get_mac(WifiDeviceId::Sta)
        .context("unable to read the station MAC address")?;
    Ok(format_mac_address(mac))
}
