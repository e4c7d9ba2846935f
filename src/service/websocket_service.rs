use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use creasense::dto::{
    sensor_data_request::SensorDataRequest, server_message_response::ServerMessageResponse,
};
use embedded_svc::ws::FrameType;
use esp_idf_svc::io::EspIOError;
use esp_idf_svc::ws::client::{
    EspWebSocketClient, EspWebSocketClientConfig, WebSocketEvent, WebSocketEventType,
};
use log::{error, info, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const RECONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct SensorWebSocket {
    client: EspWebSocketClient,
    connected: Arc<AtomicBool>,
}

impl SensorWebSocket {
    pub fn connect(uri: &str) -> anyhow::Result<SensorWebSocket> {
        let connected = Arc::new(AtomicBool::new(false));
        let config = EspWebSocketClientConfig {
            reconnect_timeout_ms: RECONNECT_TIMEOUT,
            ..Default::default()
        };

        info!("-> WS {}", uri);
        let flag = connected.clone();
        let client = EspWebSocketClient::new(uri, &config, CONNECT_TIMEOUT, move |event| {
            handle_event(event, &flag)
        })?;

        Ok(SensorWebSocket { client, connected })
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    pub fn send_reading(&mut self, reading: &SensorDataRequest) -> anyhow::Result<()> {
        if !self.is_connected() {
            bail!("websocket not connected, reading dropped");
        }
        let payload = reading.to_json()?;
        self.client.send(FrameType::Text(false), payload.as_bytes())?;
        info!("sent: {}", payload);
        Ok(())
    }
}

fn handle_event(event: &Result<WebSocketEvent, EspIOError>, connected: &AtomicBool) {
    let event = match event {
        Ok(event) => event,
        Err(e) => {
            error!("websocket error: {:?}", e);
            return;
        }
    };
    match event.event_type {
        WebSocketEventType::Connected => {
            info!("<- WS connected");
            connected.store(true, Ordering::Relaxed);
        }
        WebSocketEventType::Disconnected
        | WebSocketEventType::Close(_)
        | WebSocketEventType::Closed => {
            warn!("<- WS disconnected");
            connected.store(false, Ordering::Relaxed);
        }
        WebSocketEventType::Text(text) => handle_server_message(text),
        _ => {}
    }
}

fn handle_server_message(text: &str) {
    match ServerMessageResponse::parse(text) {
        Ok(ServerMessageResponse::Welcome { message, client_id }) => {
            info!("<- welcome as client {}: {}", client_id, message)
        }
        Ok(ServerMessageResponse::Text { message, from }) => {
            info!("<- text from {:?}: {}", from, message)
        }
        Ok(ServerMessageResponse::Other) => {}
        Err(e) => warn!("<- message ignored ({:#}): {}", e, text),
    }
}
