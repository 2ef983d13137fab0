#![allow(dead_code)]

use assert_cmd::Command;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

const SCRUBBED_ENV: [&str; 9] = [
    "QUOTEGEN_ROOT",
    "QUOTEGEN_SYNC_INTERVAL",
    "RUST_LOG",
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

pub fn quotegen_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quotegen").unwrap();
    for key in SCRUBBED_ENV {
        cmd.env_remove(key);
    }
    cmd.env("NO_PROXY", "127.0.0.1,localhost");
    cmd
}

/// Run `quotegen init` in `path`
pub fn init_book(path: &Path) {
    quotegen_cmd().arg("init").arg(path).assert().success();
}

/// Serve a fixed response to every request on a loopback port.
/// Returns the URL to request.
pub fn serve_fixed(status: u16, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else {
                continue;
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}/data", addr)
}
