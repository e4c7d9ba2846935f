use anyhow::{anyhow, ensure};
use creasense::config::config::{SENSOR_PIN, STATUS_LED};
use creasense::helper::adc_helper::average;
use esp_idf_svc::hal::{
    adc::{attenuation, config::Config as AdcConfig, AdcChannelDriver, AdcDriver, ADC1},
    delay::FreeRtos,
    gpio::{Gpio15, Gpio2, Output, Pin, PinDriver},
};
use esp_idf_sys::EspError;
use log::warn;

const SAMPLES_PER_READING: usize = 8;
const SAMPLE_DELAY_MS: u32 = 10;
const BLINK_MS: u32 = 100;

pub struct StatusLed {
    pin: PinDriver<'static, Gpio15, Output>,
}

impl StatusLed {
    pub fn new(gpio: Gpio15) -> anyhow::Result<StatusLed> {
        ensure!(
            gpio.pin() == STATUS_LED as i32,
            "STATUS_LED is GPIO{} but GPIO{} is wired",
            STATUS_LED,
            gpio.pin()
        );
        let mut pin = PinDriver::output(gpio)?;
        pin.set_low()?;
        Ok(StatusLed { pin })
    }

    pub fn on(&mut self) {
        self.pin.set_high().ok();
    }

    pub fn off(&mut self) {
        self.pin.set_low().ok();
    }

    pub fn blink(&mut self) {
        self.on();
        FreeRtos::delay_ms(BLINK_MS);
        self.off();
    }
}

pub struct MoistureSensor {
    adc: AdcDriver<'static, ADC1>,
    channel: AdcChannelDriver<'static, { attenuation::DB_11 }, Gpio2>,
}

impl MoistureSensor {
    /// Raw codes, no calibration: the thresholds are expressed on the 0..=4095 scale.
    pub fn new(adc1: ADC1, gpio: Gpio2) -> anyhow::Result<MoistureSensor> {
        ensure!(
            gpio.pin() == SENSOR_PIN as i32,
            "SENSOR_PIN is GPIO{} but GPIO{} is wired",
            SENSOR_PIN,
            gpio.pin()
        );
        let adc = AdcDriver::new(adc1, &AdcConfig::new())?;
        let channel = AdcChannelDriver::new(gpio)?;
        Ok(MoistureSensor { adc, channel })
    }

    pub fn read_raw(&mut self) -> Result<u16, EspError> {
        self.adc.read(&mut self.channel)
    }

    pub fn read_average(&mut self) -> anyhow::Result<u16> {
        let mut samples = Vec::with_capacity(SAMPLES_PER_READING);
        for _ in 0..SAMPLES_PER_READING {
            match self.read_raw() {
                Ok(sample) => samples.push(sample),
                Err(e) => warn!("dropping ADC sample: {:?}", e),
            }
            FreeRtos::delay_ms(SAMPLE_DELAY_MS);
        }
        average(&samples).ok_or_else(|| anyhow!("no valid ADC sample on GPIO{}", SENSOR_PIN))
    }
}
