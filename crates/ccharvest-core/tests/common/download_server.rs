//! Minimal HTTP/1.1 server for download tests.
//!
//! Serves a single static body to every GET. Status code and an optional
//! Content-Disposition header are configurable per server instance.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Default)]
pub struct DownloadServerOptions {
    /// Status line code; 0 means 200.
    pub status: u32,
    /// Raw Content-Disposition value to send, if any.
    pub content_disposition: Option<String>,
}

/// Starts a server in a background thread serving `body`. Returns the base
/// URL (e.g. "http://127.0.0.1:12345/"). Runs until the process exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, DownloadServerOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: DownloadServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &body, &opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: &DownloadServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    // Read and discard the request; only GET is ever issued by the crate.
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    let status = match opts.status {
        0 | 200 => "200 OK".to_string(),
        404 => "404 Not Found".to_string(),
        code => format!("{} Status", code),
    };
    let disposition = opts
        .content_disposition
        .as_deref()
        .map(|v| format!("Content-Disposition: {}\r\n", v))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}\r\n",
        status,
        body.len(),
        disposition
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
