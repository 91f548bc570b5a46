//! Common test utilities for pipdeck integration tests

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::JoinHandle;

use tempfile::TempDir;

/// A scratch directory for one integration test
#[allow(dead_code)]
pub struct TestWorkspace {
    pub temp: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the workspace and return its path
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Empty config file, so tests never read the user's config
    pub fn config_path(&self) -> PathBuf {
        let path = self.path.join("pipdeck-test.yaml");
        if !path.exists() {
            std::fs::write(&path, "").expect("Failed to write config file");
        }
        path
    }

    /// `pipdeck` command isolated from the user's environment
    pub fn pipdeck_cmd(&self) -> assert_cmd::Command {
        #[allow(deprecated)]
        let mut cmd = assert_cmd::Command::cargo_bin("pipdeck").expect("pipdeck binary");
        cmd.env("PIPDECK_CONFIG", self.config_path())
            .env_remove("PIPDECK_PYTHON")
            .env_remove("PIPDECK_REGISTRY")
            .env_remove("PIPDECK_TIMEOUT")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .current_dir(&self.path);
        cmd
    }
}

/// Canned HTTP response served by [`FakeRegistry`]
#[allow(dead_code)]
pub struct CannedResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

#[allow(dead_code)]
impl CannedResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn html(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: String::new(),
        }
    }
}

/// One-shot HTTP server on a loopback port answering each connection with
/// the next canned response
#[allow(dead_code)]
pub struct FakeRegistry {
    pub url: String,
    handle: JoinHandle<Vec<String>>,
}

#[allow(dead_code)]
impl FakeRegistry {
    pub fn serve(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let url = format!("http://{}", listener.local_addr().expect("local addr"));

        let handle = std::thread::spawn(move || {
            let mut request_lines = Vec::new();
            for response in responses {
                let (mut stream, _) = listener.accept().expect("accept");
                let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

                let mut request_line = String::new();
                reader.read_line(&mut request_line).expect("read request");
                request_lines.push(request_line.trim_end().to_string());
                loop {
                    let mut header = String::new();
                    let read = reader.read_line(&mut header).expect("read header");
                    if read == 0 || header == "\r\n" {
                        break;
                    }
                }

                let reason = if response.status == 200 { "OK" } else { "Error" };
                let reply = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    response.status,
                    reason,
                    response.content_type,
                    response.body.len(),
                    response.body
                );
                stream.write_all(reply.as_bytes()).expect("write response");
            }
            request_lines
        });

        Self { url, handle }
    }

    /// Wait for every canned response to be served and return the request
    /// lines received, e.g. `GET /search/?q=flask HTTP/1.1`
    pub fn requests(self) -> Vec<String> {
        self.handle.join().expect("server thread")
    }
}

/// HTML search results page in the registry's markup
#[allow(dead_code)]
pub fn search_page(hits: &[(&str, &str, &str)]) -> String {
    let snippets: String = hits
        .iter()
        .map(|(name, version, summary)| {
            format!(
                r#"<li><a class="package-snippet" href="/project/{name}/">
                  <h3 class="package-snippet__title">
                    <span class="package-snippet__name">{name}</span>
                    <span class="package-snippet__version">{version}</span>
                  </h3>
                  <p class="package-snippet__description">{summary}</p>
                </a></li>"#
            )
        })
        .collect();
    format!(
        "<!DOCTYPE html><html><body><ul aria-label=\"Search results\">{snippets}</ul></body></html>"
    )
}
