//! Runs the compiled `envprobe-server` binary against the real process environment.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const BIN: &str = env!("CARGO_BIN_EXE_envprobe-server");

fn write_config(name: &str, listen: SocketAddr) -> PathBuf {
    let file = format!("envprobe-{name}-{}.yaml", std::process::id());
    let path = std::env::temp_dir().join(file);
    fs::write(&path, format!("version: 1\nserver:\n  listen: \"{listen}\"\n")).unwrap();
    path
}

fn command(config: &Path) -> Command {
    let mut cmd = Command::new(BIN);
    cmd.env("ENVPROBE_CONFIG", config)
        .env("RUST_LOG", "error")
        .env_remove("BUILD_VALUE")
        .env_remove("TEMPLATE_VALUE")
        .env_remove("TEST_SECRET")
        .env_remove("HELM_VALUE")
        .stdout(Stdio::null())
        .stderr(Stdio::piped());
    cmd
}

struct Killed(Child);

impl Drop for Killed {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn get(addr: SocketAddr, target: &str) -> String {
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut stream = loop {
        match TcpStream::connect(addr) {
            Ok(s) => break s,
            Err(_) if Instant::now() < deadline => thread::sleep(Duration::from_millis(50)),
            Err(e) => panic!("server never came up on {addr}: {e}"),
        }
    };
    write!(
        stream,
        "GET {target} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n"
    )
    .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).unwrap();
    raw
}

#[test]
fn occupied_port_exits_non_zero() {
    let taken = TcpListener::bind("127.0.0.1:0").unwrap();
    let config = write_config("occupied", taken.local_addr().unwrap());

    let out = command(&config).stdout(Stdio::piped()).output().unwrap();
    let _ = fs::remove_file(&config);

    assert!(!out.status.success(), "status: {:?}", out.status);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("failed to bind").count(), 1, "{stderr}");
    assert!(out.stdout.is_empty(), "{}", String::from_utf8_lossy(&out.stdout));
}

#[test]
fn invalid_config_exits_non_zero() {
    let file = format!("envprobe-invalid-{}.yaml", std::process::id());
    let path = std::env::temp_dir().join(file);
    fs::write(&path, "version: 7\n").unwrap();

    let out = command(&path).output().unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn serves_process_environment() {
    let addr = {
        let free = TcpListener::bind("127.0.0.1:0").unwrap();
        free.local_addr().unwrap()
    };
    let config = write_config("serve", addr);

    let child = command(&config)
        .env("BUILD_VALUE", "1")
        .env("TEMPLATE_VALUE", "2")
        .env("TEST_SECRET", "3")
        .env("HELM_VALUE", "4")
        .spawn()
        .unwrap();
    let _guard = Killed(child);

    let root = get(addr, "/");
    let other = get(addr, "/anything/else");
    let _ = fs::remove_file(&config);

    assert!(root.starts_with("HTTP/1.1 200"), "{root}");
    let (_, body) = root.split_once("\r\n\r\n").unwrap();
    assert_eq!(body, "BUILD_VALUE=1, TEMPLATE_VALUE=2, SECRET_VALUE=3, HELM_VALUE=4");

    let (_, other_body) = other.split_once("\r\n\r\n").unwrap();
    assert_eq!(other_body, body);
}
