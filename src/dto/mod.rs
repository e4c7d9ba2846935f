pub mod sensor_data_request;
pub mod server_message_response;
