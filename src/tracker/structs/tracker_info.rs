use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerInfo {
    pub address: String,
    pub port: u16,
    pub socket_address: SocketAddr,
}
