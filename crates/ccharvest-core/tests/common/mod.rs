pub mod download_server;
pub mod log_capture;
