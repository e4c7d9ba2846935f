use esp_idf_svc::sntp::{EspSntp, SyncStatus};
use log::{info, warn};

/// Starts SNTP in the background. The service resyncs for as long as it is kept alive;
/// readings carry a timestamp once the clock has been set.
pub fn start_clock_synchronization() -> Option<EspSntp<'static>> {
    match EspSntp::new_default() {
        Ok(sntp) => {
            info!("SNTP started");
            Some(sntp)
        }
        Err(e) => {
            warn!("SNTP unavailable, readings will carry no timestamp: {:?}", e);
            None
        }
    }
}

pub fn is_clock_synchronized(sntp: Option<&EspSntp<'static>>) -> bool {
    sntp.map_or(false, |sntp| sntp.get_sync_status() == SyncStatus::Completed)
}
