// Shared helpers for integration tests.
//
// Provides an isolated working directory with its own configuration
// directory, a command builder pointing the binary at it, and a one-shot
// HTTP stub standing in for the paste endpoint.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead as _, BufReader, Read as _, Write as _};
use std::net::{SocketAddr, TcpListener};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use assert_cmd::Command;

const PROXY_VARS: &[&str] = &[
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// A temporary project directory plus a private configuration directory.
pub struct TestEnv {
    dir: tempfile::TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Working directory the binary runs in.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Configuration directory passed with `--config-dir`.
    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn secret_path(&self) -> PathBuf {
        self.config_dir().join("secret")
    }

    /// Write `contents` to `rel` under the working directory.
    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(path, contents).expect("write file");
    }

    pub fn store_token(&self, token: &str) {
        std::fs::create_dir_all(self.config_dir()).expect("create config dir");
        std::fs::write(self.secret_path(), token).expect("write secret");
    }

    /// The `axype` binary, isolated from the user's configuration and proxies.
    pub fn axype(&self) -> Command {
        let mut cmd = Command::cargo_bin("axype").expect("binary built");
        cmd.current_dir(self.root())
            .arg("--config-dir")
            .arg(self.config_dir())
            .env_remove("AXYPE_CONFIG_DIR")
            .env_remove("AXYPE_API_URL")
            .env_remove("RUST_LOG");
        for var in PROXY_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

/// What the stub server received.
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    /// Header names are lowercased.
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// One-shot HTTP server answering a single request with a fixed response.
pub struct StubServer {
    addr: SocketAddr,
    captured: mpsc::Receiver<CapturedRequest>,
}

impl StubServer {
    pub fn respond(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("local addr");
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("read request line");
            let mut parts = request_line.split_whitespace();
            let method = parts.next().unwrap_or_default().to_string();
            let path = parts.next().unwrap_or_default().to_string();

            let mut headers = HashMap::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).expect("read header");
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
                }
            }

            let length = headers
                .get("content-length")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(0);
            let mut raw = vec![0; length];
            reader.read_exact(&mut raw).expect("read body");

            let response = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let mut stream = stream;
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().expect("flush response");

            let _ = tx.send(CapturedRequest {
                method,
                path,
                headers,
                body: String::from_utf8_lossy(&raw).into_owned(),
            });
        });

        Self { addr, captured: rx }
    }

    pub fn url(&self) -> String {
        format!("http://{}/api/setSource", self.addr)
    }

    /// The request the server handled.
    pub fn request(&self) -> CapturedRequest {
        self.captured
            .recv_timeout(Duration::from_secs(10))
            .expect("stub server received a request")
    }

    /// Whether any request reached the server.
    pub fn was_contacted(&self) -> bool {
        self.captured.recv_timeout(Duration::from_millis(200)).is_ok()
    }
}
