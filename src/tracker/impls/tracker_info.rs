use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::tracker_info::TrackerInfo;

impl TrackerInfo {
    /// Resolves `address:port` once. IPv4 results are preferred when the name
    /// has both families.
    pub fn resolve(address: &str, port: u16) -> Result<TrackerInfo, TrackerError> {
        let candidates: Vec<SocketAddr> = match (address, port).to_socket_addrs() {
            Ok(addresses) => addresses.collect(),
            Err(error) => {
                return Err(TrackerError::AddressResolution(format!("{address}:{port} ({error})")));
            }
        };
        let socket_address = match candidates.iter().find(|candidate| candidate.is_ipv4()).or(candidates.first()) {
            Some(socket_address) => *socket_address,
            None => return Err(TrackerError::AddressResolution(format!("{address}:{port} (no addresses)"))),
        };
        Ok(TrackerInfo {
            address: address.to_string(),
            port,
            socket_address,
        })
    }
}

impl fmt::Display for TrackerInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}
