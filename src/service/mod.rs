pub mod clock_service;
pub mod orchestrator_service;
pub mod peripheral_service;
pub mod websocket_service;
pub mod wifi_service;
