pub mod adc_helper;
pub mod configuration_helper;
pub mod date_helper;
pub mod device_helper;
pub mod moisture_helper;
