//! End-to-end calls against an in-process HTTP server.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use soapwire_client::{CallError, Client, Definitions};
use soapwire_core::{Params, SoapError, Value};

const OK_REPLY: &str = concat!(
    "<soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">",
    "<soap:Body><HelloResponse><greeting>hi</greeting></HelloResponse></soap:Body>",
    "</soap:Envelope>",
);

const FAULT_REPLY: &str = concat!(
    "<soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">",
    "<soap:Body><soap:Fault><faultcode>Server.Error</faultcode>",
    "<faultstring>boom</faultstring></soap:Fault></soap:Body>",
    "</soap:Envelope>",
);

/// Serve one request and return the raw request text (head + body).
fn serve_once(listener: TcpListener, status: &'static str, reply: &'static str) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut head = Vec::new();
        let mut byte = [0u8; 1];
        while !head.ends_with(b"\r\n\r\n") {
            stream.read_exact(&mut byte).unwrap();
            head.push(byte[0]);
        }
        let head = String::from_utf8_lossy(&head).to_string();

        let len: usize = head
            .lines()
            .find_map(|line| {
                let (key, value) = line.split_once(':')?;
                if key.eq_ignore_ascii_case("content-length") {
                    value.trim().parse().ok()
                } else {
                    None
                }
            })
            .unwrap();
        let mut body = vec![0u8; len];
        stream.read_exact(&mut body).unwrap();

        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: text/xml;charset=UTF-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{reply}",
            reply.len(),
        )
        .unwrap();
        stream.flush().unwrap();

        head + &String::from_utf8_lossy(&body)
    })
}

fn hello_params() -> Params {
    let mut params = Params::new();
    params.insert("who".to_string(), Value::from("world"));
    params
}

#[test]
fn call_round_trip() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = serve_once(listener, "200 OK", OK_REPLY);

    let client = Client::new(format!("http://{addr}/ws"), Definitions::new("urn:demo")).unwrap();
    let response = client.call("Hello", &hello_params()).unwrap();
    let body: String = response.decode().unwrap();
    assert!(body.contains("<greeting>hi</greeting>"));

    let request = server.join().unwrap().to_ascii_lowercase();
    assert!(request.contains("soapaction: urn:demo/hello"));
    assert!(request.contains("content-type: text/xml;charset=utf-8"));
    assert!(request.contains("accept: text/xml"));
    assert!(request.contains("<who>world</who>"));
}

#[test]
fn fault_reply_on_http_500_surfaces_as_remote_fault() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = serve_once(listener, "500 Internal Server Error", FAULT_REPLY);

    let client = Client::new(format!("http://{addr}/ws"), Definitions::new("urn:demo")).unwrap();
    let response = client.call("Hello", &hello_params()).unwrap();
    let err = response.decode::<String>().unwrap_err();
    assert!(matches!(err, SoapError::RemoteFault { .. }));

    server.join().unwrap();
}

#[test]
fn unreachable_endpoint_passes_the_transport_error_through() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = Client::new(
        format!("http://127.0.0.1:{port}/ws"),
        Definitions::new("urn:demo"),
    )
    .unwrap();
    let err = client.call("Hello", &hello_params()).unwrap_err();
    assert!(matches!(err, CallError::Transport(_)));
}
