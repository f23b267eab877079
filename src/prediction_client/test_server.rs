use crate::device_image_source::interface::CapturedImage;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Duration;

/// One-shot HTTP server: accepts a single request, answers with a canned
/// response and hands the raw request back to the test.
pub struct TestServer {
    port: u16,
    request: Receiver<String>,
}

impl TestServer {
    pub fn respond(status: u16, body: &str) -> Self {
        Self::respond_after(Duration::ZERO, status, body)
    }

    /// Like `respond`, but holds the response back for `delay` after the
    /// request has been read.
    pub fn respond_after(delay: Duration, status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let body = body.to_string();
        let (tx, rx) = channel();

        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                let request = handle(stream, delay, status, &body);
                let _ = tx.send(request);
            }
        });

        Self { port, request: rx }
    }

    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}/predict", self.port)
    }

    pub fn request(&self) -> String {
        self.request.recv_timeout(Duration::from_secs(5)).unwrap()
    }
}

fn handle(stream: TcpStream, delay: Duration, status: u16, body: &str) -> String {
    let mut reader = BufReader::new(stream);
    let mut head = String::new();
    let mut content_length = 0;
    let mut chunked = false;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let lower = line.to_lowercase();
        if let Some(value) = lower.strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
        if lower.starts_with("transfer-encoding:") && lower.contains("chunked") {
            chunked = true;
        }
        head.push_str(&line);
        if line == "\r\n" {
            break;
        }
    }

    let mut request_body = Vec::new();
    if chunked {
        while !request_body.ends_with(b"0\r\n\r\n") {
            let mut byte = [0u8; 1];
            if reader.read_exact(&mut byte).is_err() {
                break;
            }
            request_body.push(byte[0]);
        }
    } else {
        request_body.resize(content_length, 0);
        let _ = reader.read_exact(&mut request_body);
    }

    thread::sleep(delay);

    let response = format!(
        "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();

    head + &String::from_utf8_lossy(&request_body)
}

/// A port nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/predict", port)
}

/// An image file in the temp dir, removed when dropped.
pub struct TempImage {
    pub image: CapturedImage,
    path: PathBuf,
}

impl Drop for TempImage {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

pub fn temp_image(bytes: &[u8]) -> TempImage {
    let path: PathBuf = std::env::temp_dir().join(format!(
        "campus-navigator-test-{}.jpg",
        uuid::Uuid::new_v4().simple()
    ));
    std::fs::write(&path, bytes).unwrap();
    TempImage {
        image: CapturedImage::from_path(&path),
        path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_image_is_removed_on_drop() {
        let temp = temp_image(b"jpeg");
        let path = temp.image.local_path().unwrap();
        assert!(path.is_file());

        drop(temp);

        assert!(!path.exists());
    }
}
