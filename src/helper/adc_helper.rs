use crate::config::config::{ADC_RESOLUTION, MOISTURE_DRY, MOISTURE_WET_MAX, VOLTAGE_REFERENCE};

/// Highest code the 12-bit converter can return.
pub const ADC_MAX_CODE: u16 = ADC_RESOLUTION as u16;

pub fn raw_to_voltage(raw: u16) -> f32 {
    raw.min(ADC_MAX_CODE) as f32 / ADC_RESOLUTION * VOLTAGE_REFERENCE
}

/// Position of the reading on the moisture scale, 0.0 (dry) to 1.0 (in water).
pub fn raw_to_app_value(raw: u16) -> f32 {
    let span = (MOISTURE_WET_MAX - MOISTURE_DRY) as f32;
    let offset = raw.saturating_sub(MOISTURE_DRY) as f32;
    (offset / span).clamp(0.0, 1.0)
}

pub fn average(samples: &[u16]) -> Option<u16> {
    if samples.is_empty() {
        return None;
    }
    let sum: u32 = samples.iter().map(|sample| *sample as u32).sum();
    Some((sum / samples.len() as u32) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_raw_to_voltage() {
        assert_close(raw_to_voltage(0), 0.0);
        assert_close(raw_to_voltage(4095), 3.3);
        assert_close(raw_to_voltage(2048), 1.6504);
    }

    #[test]
    fn test_raw_to_voltage_clamps_to_full_scale() {
        assert_close(raw_to_voltage(u16::MAX), 3.3);
    }

    #[test]
    fn test_raw_to_app_value() {
        assert_close(raw_to_app_value(0), 0.0);
        assert_close(raw_to_app_value(475), 0.5);
        assert_close(raw_to_app_value(950), 1.0);
        assert_close(raw_to_app_value(4095), 1.0);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[]), None);
        assert_eq!(average(&[300]), Some(300));
        assert_eq!(average(&[100, 200, 301]), Some(200));
    }
}
