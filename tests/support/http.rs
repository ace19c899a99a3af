use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Build a raw 200 response carrying a JSON body.
///
/// `Connection: close` keeps the client from pooling the socket across the
/// script's sequential connections.
pub fn json_response(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nConnection: close\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    )
}

/// Build a raw error response with an empty body.
pub fn error_response(code: u16, reason: &str) -> String {
    format!("HTTP/1.1 {code} {reason}\r\nConnection: close\r\nContent-Length: 0\r\n\r\n")
}

/// Serve the given raw responses to sequential connections on a loopback
/// port, then stop. Returns the base URL.
pub fn serve_script(responses: Vec<String>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut buf = [0u8; 8192];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}")
}
