#![cfg(feature = "api")]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use serde_json::Value;

struct ChildGuard {
    child: Child,
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[test]
fn event_lifecycle_over_http() {
    let port = allocate_port();
    let addr = format!("127.0.0.1:{port}");
    let _child = spawn_api_process(port);

    wait_for_server(&addr, Duration::from_secs(8));

    // Register an event
    let (status, body) = http_request(
        &addr,
        "POST",
        "/events",
        Some(r#"{"event_name": "Expo", "total_visitors": 200, "start_date": "2026-05-01", "end_date": "2026-05-02"}"#),
    )
    .expect("event creation should succeed");
    assert_eq!(status, 201);
    let created: Value = serde_json::from_str(&body).expect("creation body should be JSON");
    let event_id = created["event_id"]
        .as_str()
        .expect("event_id should be a string")
        .to_string();

    // Submit one category record
    let (status, _) = http_request(
        &addr,
        "POST",
        &format!("/events/{event_id}/energy"),
        Some(r#"{"approach": "real", "gas_kwh": 1000.0}"#),
    )
    .expect("energy submission should succeed");
    assert_eq!(status, 201);

    // Duplicate submission is rejected
    let (status, _) = http_request(
        &addr,
        "POST",
        &format!("/events/{event_id}/energy"),
        Some(r#"{"approach": "real", "gas_kwh": 2000.0}"#),
    )
    .expect("duplicate submission request should complete");
    assert_eq!(status, 409);

    // Assessment reflects the stored record
    let (status, body) = http_request(&addr, "GET", &format!("/calculate/{event_id}"), None)
        .expect("/calculate request should succeed");
    assert_eq!(status, 200);
    let report: Value = serde_json::from_str(&body).expect("report body should be JSON");
    assert_eq!(report["event_id"].as_str(), Some(event_id.as_str()));
    assert!(report["total_emissions_kg"].as_f64().unwrap_or(0.0) > 0.0);
    assert_eq!(report["duration_days"].as_i64(), Some(2));
    assert!(report["emission_class"].as_str().is_some());
    assert!(report["emissions_by_category"].is_object());
    assert_eq!(
        report["top_3_emitters"].as_array().map(Vec::len),
        Some(3),
        "report: {report}"
    );
    assert!(report["top_3_emitters"][0]["emissions"].as_f64().is_some());

    // Unknown event yields 404
    let (status, _) = http_request(&addr, "GET", "/calculate/no-such-event", None)
        .expect("missing-event request should complete");
    assert_eq!(status, 404);
}

fn allocate_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("ephemeral port bind should succeed");
    let port = listener
        .local_addr()
        .expect("local_addr should be available")
        .port();
    drop(listener);
    port
}

fn spawn_api_process(port: u16) -> ChildGuard {
    let child = Command::new(env!("CARGO_BIN_EXE_eco-calc"))
        .args(["--serve", "--port", &port.to_string()])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("eco-calc process should spawn");

    ChildGuard { child }
}

fn wait_for_server(addr: &str, timeout: Duration) {
    let start = Instant::now();
    loop {
        if let Ok((status, _)) = http_request(addr, "GET", "/events", None) {
            if status == 200 {
                return;
            }
        }

        if start.elapsed() >= timeout {
            panic!("timed out waiting for API server on {addr}");
        }

        thread::sleep(Duration::from_millis(50));
    }
}

fn http_request(
    addr: &str,
    method: &str,
    path: &str,
    json_body: Option<&str>,
) -> Result<(u16, String), String> {
    let mut stream = TcpStream::connect(addr).map_err(|err| format!("connect: {err}"))?;
    let body = json_body.unwrap_or("");
    let request = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\
         Content-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
        body.len()
    );
    stream
        .write_all(request.as_bytes())
        .map_err(|err| format!("write: {err}"))?;

    let mut raw = String::new();
    stream
        .read_to_string(&mut raw)
        .map_err(|err| format!("read: {err}"))?;

    let (head, body) = raw
        .split_once("\r\n\r\n")
        .ok_or_else(|| "invalid HTTP response".to_string())?;
    let status_line = head
        .lines()
        .next()
        .ok_or_else(|| "missing status line".to_string())?;
    let status_code = status_line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| "missing status code".to_string())?
        .parse::<u16>()
        .map_err(|err| format!("invalid status code: {err}"))?;

    Ok((status_code, body.to_string()))
}
