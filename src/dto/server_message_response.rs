use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

/// Messages pushed by the server; only the ones the sensor cares about are decoded.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ServerMessageResponse {
    #[serde(rename = "welcome")]
    Welcome {
        #[serde(rename = "message")]
        message: String,
        #[serde(rename = "clientId")]
        client_id: u64,
    },

    #[serde(rename = "text")]
    Text {
        #[serde(rename = "message")]
        message: String,
        #[serde(rename = "from")]
        from: Option<u64>,
    },

    #[serde(other)]
    Other,
}

impl ServerMessageResponse {
    /// Frames that are not JSON and JSON of an unknown shape fail with different contexts.
    pub fn parse(text: &str) -> anyhow::Result<ServerMessageResponse> {
        let value: Value = serde_json::from_str(text).context("not a JSON message")?;
        serde_json::from_value(value).context("unexpected JSON message")
    }
}
