//! Live-server tests: the full pipeline served over a real socket, from raw
//! request bytes to the written response.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};

use japi::middleware::MiddlewareProvider;
use japi::server::{AppService, HttpServer, ServerHandle};
use japi::{ControllerRegistry, Error, Handler, Japi, Request, Response, Router};

struct Hello;

impl Handler for Hello {
    fn dispatch(&self, req: &mut Request) -> Result<Option<Response>, Error> {
        let name = req.param("name").unwrap_or("world");
        Ok(Some(Response::json(200, &json!({ "hello": name }))))
    }
}

impl MiddlewareProvider for Hello {}

struct Silent;

impl Handler for Silent {
    fn dispatch(&self, _req: &mut Request) -> Result<Option<Response>, Error> {
        Ok(None)
    }
}

impl MiddlewareProvider for Silent {}

/// Server bound to a random local port, stopped on drop even when the test
/// panics.
struct TestServer {
    handle: Option<ServerHandle>,
    addr: SocketAddr,
}

impl TestServer {
    fn start() -> Self {
        let router = Router::new("");

        let mut registry = ControllerRegistry::new();
        registry.register("Hello", || Arc::new(Hello));
        registry.register("Silent", || Arc::new(Silent));

        let service = AppService::new(
            Arc::new(router),
            Arc::new(registry),
            Arc::new(Japi::new()),
        );

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let handle = HttpServer(service).start(addr).unwrap();
        handle.wait_ready().unwrap();
        Self {
            handle: Some(handle),
            addr,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.stop();
        }
    }
}

fn send_request(addr: &SocketAddr, req: &str) -> String {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(req.as_bytes()).unwrap();
    stream
        .set_read_timeout(Some(Duration::from_millis(500)))
        .unwrap();
    let mut buf = Vec::new();
    loop {
        let mut tmp = [0u8; 1024];
        match stream.read(&mut tmp) {
            Ok(0) => break,
            Ok(n) => buf.extend_from_slice(&tmp[..n]),
            Err(ref e)
                if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut =>
            {
                break
            }
            Err(e) => panic!("read error: {e:?}"),
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn get(addr: &SocketAddr, target: &str) -> String {
    send_request(
        addr,
        &format!("GET {target} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"),
    )
}

fn parse_status(resp: &str) -> u16 {
    resp.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|code| code.parse().ok())
        .unwrap_or(0)
}

fn parse_body(resp: &str) -> Value {
    let body = resp.split("\r\n\r\n").nth(1).unwrap_or("");
    serde_json::from_str(body).expect("response body is valid JSON")
}

#[test]
fn test_dispatch_over_socket() {
    let server = TestServer::start();

    let resp = get(&server.addr, "/hello?name=socket");
    assert_eq!(parse_status(&resp), 200, "raw response: {resp}");
    assert_eq!(parse_body(&resp), json!({ "hello": "socket" }));
}

#[test]
fn test_unknown_path_gets_error_response() {
    let server = TestServer::start();

    let resp = get(&server.addr, "/missing");
    assert_eq!(parse_status(&resp), 404, "raw response: {resp}");
    let body = parse_body(&resp);
    assert_eq!(body["code"], 404);
    assert_eq!(body["msg"], "Exception");
    assert!(resp.contains("Content-Type: application/json"));
}

#[test]
fn test_no_content_over_socket() {
    let server = TestServer::start();

    let resp = get(&server.addr, "/silent");
    assert_eq!(parse_status(&resp), 204, "raw response: {resp}");
}

#[test]
fn test_form_post_over_socket() {
    let server = TestServer::start();

    let body = "name=form";
    let resp = send_request(
        &server.addr,
        &format!(
            "POST /hello HTTP/1.1\r\nHost: localhost\r\n\
             Content-Type: application/x-www-form-urlencoded\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ),
    );
    assert_eq!(parse_status(&resp), 200, "raw response: {resp}");
    assert_eq!(parse_body(&resp), json!({ "hello": "form" }));
}

#[test]
fn test_every_request_gets_exactly_one_response() {
    let server = TestServer::start();

    // a mix of routable, unroutable and bodiless targets; each must come
    // back with a status line
    for target in ["/hello", "/missing", "/silent", "/hello?name=again"] {
        let resp = get(&server.addr, target);
        assert!(
            resp.starts_with("HTTP/1.1 "),
            "no response for {target}: {resp:?}"
        );
    }
}
