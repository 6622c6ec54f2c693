use std::io::{self, Write};
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;
use log::debug;
use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use crate::protocol::enums::tracker_response::TrackerResponse;
use crate::protocol::protocol::{parse_response, read_response};
use crate::protocol::structs::request_parameters::RequestParameters;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::tracker_connection::TrackerConnection;
use crate::tracker::structs::tracker_info::TrackerInfo;

impl TrackerConnection {
    /// Opens a TCP connection with a bounded connect time. The same timeout
    /// becomes the initial read and write timeout.
    pub fn connect(tracker_index: usize, tracker: &TrackerInfo, timeout: Duration) -> io::Result<TrackerConnection> {
        let address = tracker.socket_address;
        let domain = if address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
        socket.set_tcp_nodelay(true)?;
        socket.connect_timeout(&SockAddr::from(address), non_zero(timeout))?;

        let stream: TcpStream = socket.into();
        let connection = TrackerConnection {
            stream,
            tracker_index,
            peer_address: address,
        };
        connection.set_timeout(timeout)?;
        debug!("[TRACKER] Connected to tracker {} ({})", tracker, address);
        Ok(connection)
    }

    pub fn tracker_index(&self) -> usize {
        self.tracker_index
    }

    pub fn peer_address(&self) -> SocketAddr {
        self.peer_address
    }

    pub fn stream(&mut self) -> &mut TcpStream {
        &mut self.stream
    }

    pub fn set_timeout(&self, timeout: Duration) -> io::Result<()> {
        self.stream.set_read_timeout(Some(non_zero(timeout)))?;
        self.stream.set_write_timeout(Some(non_zero(timeout)))
    }

    /// Sends one request line and waits for the reply.
    pub fn request(&mut self, command: &str, params: &RequestParameters, timeout: Duration) -> Result<TrackerResponse, TrackerError> {
        self.set_timeout(timeout)?;
        let request = params.build_request(command);
        self.stream.write_all(&request)?;
        let response = read_response(&mut self.stream)?;
        parse_response(&response)
    }
}

fn non_zero(timeout: Duration) -> Duration {
    timeout.max(Duration::from_millis(1))
}
