use std::net::{SocketAddr, TcpStream};

/// An established connection to one tracker. Dropping it closes the socket.
#[derive(Debug)]
pub struct TrackerConnection {
    pub(crate) stream: TcpStream,
    pub(crate) tracker_index: usize,
    pub(crate) peer_address: SocketAddr,
}
