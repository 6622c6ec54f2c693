#![allow(dead_code)]
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use parking_lot::Mutex;
use rand::RngExt;
use tempfile::TempDir;
use mogile_client::file_system::structs::file_system_settings::FileSystemSettings;
use mogile_client::file_system::structs::mogile_file_system::MogileFileSystem;
use mogile_client::tracker::structs::tracker_registry::TrackerRegistry;

pub type Responder = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Line protocol tracker on an ephemeral port. Every received command is
/// recorded without its line ending; the responder returns the full reply
/// line or `None` to close the connection unanswered.
pub struct TestTrackerServer {
    pub port: u16,
    commands: Arc<Mutex<Vec<String>>>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TestTrackerServer {
    /// Keeps connections open across requests.
    pub fn start<F>(responder: F) -> TestTrackerServer
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self::spawn(Arc::new(responder), false)
    }

    /// Closes every connection after its first reply.
    pub fn start_single_shot<F>(responder: F) -> TestTrackerServer
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self::spawn(Arc::new(responder), true)
    }

    fn spawn(responder: Responder, single_shot: bool) -> TestTrackerServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind tracker listener");
        let port = listener.local_addr().unwrap().port();
        let commands = Arc::new(Mutex::new(Vec::new()));
        let running = Arc::new(AtomicBool::new(true));

        let thread_commands = commands.clone();
        let thread_running = running.clone();
        let handle = thread::spawn(move || {
            for stream in listener.incoming() {
                if !thread_running.load(Ordering::SeqCst) {
                    break;
                }
                let stream = match stream {
                    Ok(stream) => stream,
                    Err(_) => continue,
                };
                let responder = responder.clone();
                let commands = thread_commands.clone();
                let running = thread_running.clone();
                thread::spawn(move || serve_tracker_connection(stream, responder, commands, running, single_shot));
            }
        });

        TestTrackerServer {
            port,
            commands,
            running,
            handle: Some(handle),
        }
    }

    pub fn address(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().clone()
    }

    /// Number of received commands for `action`.
    pub fn count(&self, action: &str) -> usize {
        self.commands.lock().iter().filter(|command| command.split(' ').next() == Some(action)).count()
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        let _ = TcpStream::connect(("127.0.0.1", self.port));
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TestTrackerServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn serve_tracker_connection(stream: TcpStream, responder: Responder, commands: Arc<Mutex<Vec<String>>>, running: Arc<AtomicBool>, single_shot: bool) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut writer = match stream.try_clone() {
        Ok(writer) => writer,
        Err(_) => return,
    };
    let mut reader = BufReader::new(stream);
    while running.load(Ordering::SeqCst) {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        let command = line.trim_end_matches(['\r', '\n']).to_string();
        commands.lock().push(command.clone());
        match responder(&command) {
            Some(reply) => {
                if writer.write_all(reply.as_bytes()).is_err() {
                    return;
                }
            }
            None => return,
        }
        if single_shot {
            return;
        }
    }
}

/// Reads `key=value` out of a recorded command line, still encoded.
pub fn command_value<'a>(command: &'a str, key: &str) -> Option<&'a str> {
    let (_, pairs) = command.split_once(' ')?;
    pairs.split('&').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        if name == key { Some(value) } else { None }
    })
}

#[derive(Debug, Clone)]
pub enum HttpMode {
    /// 200 with the body.
    Content(Vec<u8>),
    /// Announces the full length, sends the first half and closes.
    HalfSend(Vec<u8>),
    /// Sends the headers and then nothing.
    Stall,
    /// Replies with the status and an empty body.
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

/// Minimal HTTP/1.1 file server. GETs are answered from the configured
/// routes, then from earlier PUTs; PUTs are stored and answered with 201
/// unless a route says otherwise.
pub struct TestHttpServer {
    pub port: u16,
    routes: Arc<Mutex<HashMap<String, HttpMode>>>,
    stored: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

struct HttpState {
    routes: Arc<Mutex<HashMap<String, HttpMode>>>,
    stored: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    running: Arc<AtomicBool>,
}

impl TestHttpServer {
    pub fn start() -> TestHttpServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind http listener");
        let port = listener.local_addr().unwrap().port();
        let routes = Arc::new(Mutex::new(HashMap::new()));
        let stored = Arc::new(Mutex::new(HashMap::new()));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let running = Arc::new(AtomicBool::new(true));

        let state = Arc::new(HttpState {
            routes: routes.clone(),
            stored: stored.clone(),
            requests: requests.clone(),
            running: running.clone(),
        });
        let handle = thread::spawn(move || {
            for stream in listener.incoming() {
                if !state.running.load(Ordering::SeqCst) {
                    break;
                }
                if let Ok(stream) = stream {
                    let state = state.clone();
                    thread::spawn(move || serve_http_connection(stream, state));
                }
            }
        });

        TestHttpServer {
            port,
            routes,
            stored,
            requests,
            running,
            handle: Some(handle),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }

    pub fn route(&self, path: &str, mode: HttpMode) {
        self.routes.lock().insert(path.to_string(), mode);
    }

    pub fn stored(&self, path: &str) -> Option<Vec<u8>> {
        self.stored.lock().get(path).cloned()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self, method: &str, path: &str) -> usize {
        self.requests.lock().iter().filter(|request| request.method == method && request.path == path).count()
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        let _ = TcpStream::connect(("127.0.0.1", self.port));
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TestHttpServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn serve_http_connection(stream: TcpStream, state: Arc<HttpState>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut writer = match stream.try_clone() {
        Ok(writer) => writer,
        Err(_) => return,
    };
    let mut reader = BufReader::new(stream);
    while state.running.load(Ordering::SeqCst) {
        let request = match read_http_request(&mut reader) {
            Some(request) => request,
            None => return,
        };
        state.requests.lock().push(request.clone());
        let route = state.routes.lock().get(&request.path).cloned();
        let keep_open = match (request.method.as_str(), route) {
            (_, Some(HttpMode::Status(code))) => write_response(&mut writer, code, b""),
            ("PUT", _) => {
                state.stored.lock().insert(request.path.clone(), request.body.clone());
                write_response(&mut writer, 201, b"")
            }
            (_, Some(HttpMode::Content(body))) => write_response(&mut writer, 200, &body),
            (_, Some(HttpMode::HalfSend(body))) => {
                let head = format!("HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n", body.len());
                let _ = writer.write_all(head.as_bytes());
                let _ = writer.write_all(&body[..body.len() / 2]);
                let _ = writer.flush();
                false
            }
            (_, Some(HttpMode::Stall)) => {
                let _ = writer.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1024\r\n\r\n");
                let _ = writer.flush();
                let started = Instant::now();
                while state.running.load(Ordering::SeqCst) && started.elapsed() < Duration::from_secs(10) {
                    thread::sleep(Duration::from_millis(20));
                }
                false
            }
            (_, None) => match state.stored.lock().get(&request.path).cloned() {
                Some(body) => write_response(&mut writer, 200, &body),
                None => write_response(&mut writer, 404, b""),
            },
        };
        if !keep_open {
            return;
        }
    }
}

fn write_response(writer: &mut TcpStream, code: u16, body: &[u8]) -> bool {
    let reason = match code {
        200 => "OK",
        201 => "Created",
        404 => "Not Found",
        _ => "Status",
    };
    let head = format!("HTTP/1.1 {} {}\r\nContent-Length: {}\r\n\r\n", code, reason, body.len());
    writer.write_all(head.as_bytes()).is_ok() && writer.write_all(body).is_ok() && writer.flush().is_ok()
}

fn read_http_request(reader: &mut BufReader<TcpStream>) -> Option<RecordedRequest> {
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).ok()? == 0 {
        return None;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).ok()? == 0 {
            return None;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }

    let mut body = Vec::new();
    if let Some(length) = headers.get("content-length") {
        let length: usize = length.parse().ok()?;
        body.resize(length, 0);
        reader.read_exact(&mut body).ok()?;
    } else if headers.get("transfer-encoding").map(|value| value.contains("chunked")).unwrap_or(false) {
        loop {
            let mut size_line = String::new();
            reader.read_line(&mut size_line).ok()?;
            let size = usize::from_str_radix(size_line.trim(), 16).ok()?;
            let mut chunk = vec![0u8; size + 2];
            reader.read_exact(&mut chunk).ok()?;
            if size == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..size]);
        }
    }

    Some(RecordedRequest {
        method,
        path,
        headers,
        body,
    })
}

/// Serves one `!watch` connection per payload, then closes it.
pub fn serve_watch(payloads: Vec<Vec<u8>>) -> (u16, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind watch listener");
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let mut commands = Vec::new();
        for payload in payloads {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut command = String::new();
            reader.read_line(&mut command).unwrap();
            commands.push(command);
            let mut stream = stream;
            stream.write_all(&payload).unwrap();
        }
        commands
    });
    (port, handle)
}

pub fn create_registry(address: &str) -> Arc<TrackerRegistry> {
    TrackerRegistry::init_quick(address, false).expect("Failed to create tracker registry")
}

pub fn create_settings() -> FileSystemSettings {
    FileSystemSettings {
        retry_wait: Duration::from_millis(10),
        tracker_timeout: Duration::from_secs(1),
        file_server_timeout: Duration::from_millis(500),
        ..FileSystemSettings::default()
    }
}

pub fn create_file_system(address: &str) -> MogileFileSystem {
    MogileFileSystem::new(create_settings(), Some(create_registry(address))).expect("Failed to create file system")
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_payload(length: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..length).map(|_| rng.random::<u8>()).collect()
}

/// A port nothing listens on.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// `OK paths=N&path1=...` for the given urls, encoded the way a tracker would.
pub fn paths_reply(urls: &[String]) -> String {
    let mut reply = format!("OK paths={}", urls.len());
    for (index, url) in urls.iter().enumerate() {
        reply.push_str(&format!("&path{}={}", index + 1, mogile_client::protocol::protocol::url_encode(url)));
    }
    reply.push_str("\r\n");
    reply
}
