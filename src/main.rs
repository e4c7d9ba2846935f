#[cfg(target_os = "espidf")]
mod service;

#[cfg(target_os = "espidf")]
fn main() {
    use creasense::helper::configuration_helper::validate_configuration;
    use log::error;

    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    if let Err(e) = validate_configuration() {
        error!("invalid configuration, not starting: {:?}", e);
        return;
    }

    if let Err(e) = service::orchestrator_service::orchestrate() {
        error!("sensor firmware stopped: {:?}", e);
    }
}

/// Off-device build: print the configuration the firmware would be flashed with.
#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    use creasense::config::configuration_table::CONFIGURATION_TABLE;
    use creasense::helper::configuration_helper::{validate_configuration, websocket_uri};

    for constant in CONFIGURATION_TABLE {
        println!(
            "{:<20} {:<24} {}",
            constant.name,
            constant.group.as_str(),
            constant.display_value()
        );
    }
    println!("endpoint: {}", websocket_uri());

    validate_configuration()?;
    println!("configuration ok");
    Ok(())
}
