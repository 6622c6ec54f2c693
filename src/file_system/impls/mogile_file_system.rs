use std::collections::HashMap;
use std::sync::Arc;
use log::{debug, error};
use parking_lot::RwLock;
use reqwest::Url;
use tokio::runtime::Builder;
use crate::file_system::errors::FileSystemError;
use crate::file_system::file_system::origin_key;
use crate::file_system::structs::file_server::FileServer;
use crate::file_system::structs::file_system_settings::FileSystemSettings;
use crate::file_system::structs::mogile_file_system::MogileFileSystem;
use crate::protocol::enums::tracker_response::TrackerResponse;
use crate::protocol::structs::request_parameters::RequestParameters;
use crate::request::request::request_do;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::tracker_registry::TrackerRegistry;

impl MogileFileSystem {
    /// Creates the file system. Without a registry every tracker command
    /// fails with `NoTrackersAvailable`.
    pub fn new(settings: FileSystemSettings, trackers: Option<Arc<TrackerRegistry>>) -> Result<MogileFileSystem, FileSystemError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("mogile-transfer")
            .enable_all()
            .build()?;
        Ok(MogileFileSystem {
            settings,
            trackers,
            file_servers: RwLock::new(HashMap::new()),
            runtime,
        })
    }

    pub fn settings(&self) -> &FileSystemSettings {
        &self.settings
    }

    pub fn trackers(&self) -> Option<&Arc<TrackerRegistry>> {
        self.trackers.as_ref()
    }

    /// Stops the registry maintenance thread. Also done on drop.
    pub fn close(&self) {
        if let Some(trackers) = &self.trackers {
            trackers.stop_maintenance();
        }
    }

    pub fn file_server_count(&self) -> usize {
        self.file_servers.read().len()
    }

    /// Returns the shared client for the origin of `url`, creating it on first use.
    pub fn get_file_server(&self, url: &Url) -> Result<Arc<FileServer>, FileSystemError> {
        let key = origin_key(url)?;
        if let Some(file_server) = self.file_servers.read().get(&key) {
            return Ok(file_server.clone());
        }

        let mut file_servers = self.file_servers.write();
        if let Some(file_server) = file_servers.get(&key) {
            return Ok(file_server.clone());
        }
        let file_server = Arc::new(FileServer::new(&key, self.settings.file_server_timeout)?);
        file_servers.insert(key, file_server.clone());
        Ok(file_server)
    }

    pub(crate) fn add_client_id(&self, params: &mut RequestParameters) {
        if let Some(client_id) = &self.settings.client_id {
            params.add("client_id", client_id);
        }
    }

    pub(crate) fn tracker_request(&self, action: &str, params: &RequestParameters) -> Result<TrackerResponse, FileSystemError> {
        let trackers = match &self.trackers {
            Some(trackers) => trackers,
            None => {
                error!("[FILESYSTEM] No tracker registry configured for '{}'", action);
                return Err(FileSystemError::Tracker(TrackerError::NoTrackersAvailable));
            }
        };
        Ok(request_do(trackers, action, params, self.settings.tracker_timeout)?)
    }

    /// Runs `action` and returns the values of an `OK` reply. An `ERR` whose
    /// code is in `not_found_codes` becomes `NotFound(subject)`, any other
    /// `ERR` becomes `General`.
    pub(crate) fn tracker_ok(&self, action: &str, params: &RequestParameters, subject: &str, not_found_codes: &[&str]) -> Result<HashMap<String, String>, FileSystemError> {
        match self.tracker_request(action, params)? {
            TrackerResponse::Ok(values) => Ok(values),
            TrackerResponse::Err { code, message } => {
                if not_found_codes.contains(&code.as_str()) {
                    debug!("[FILESYSTEM] Tracker returned error {} when calling {} for {}", code, action, subject);
                    return Err(FileSystemError::NotFound(subject.to_string()));
                }
                error!("[FILESYSTEM] Tracker returned error {} ({}) when calling {} for {}", code, message, action, subject);
                Err(FileSystemError::General(format!("{action} failed for {subject}: {code} ({message})")))
            }
        }
    }
}

impl Drop for MogileFileSystem {
    fn drop(&mut self) {
        self.close();
    }
}
