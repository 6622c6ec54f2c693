use log::error;
use crate::file_system::errors::FileSystemError;
use crate::file_system::file_system::{MAX_ALLOWED_PATHS, UNKNOWN_KEY};
use crate::file_system::structs::mogile_file_system::MogileFileSystem;
use crate::protocol::structs::request_parameters::RequestParameters;

impl MogileFileSystem {
    /// Storage urls of `key`, in the order the tracker prefers them.
    pub fn get_paths(&self, domain: &str, key: &str, noverify: bool) -> Result<Vec<String>, FileSystemError> {
        let mut params = RequestParameters::new();
        params
            .add("domain", domain)
            .add("noverify", if noverify { "1" } else { "0" })
            .add("key", key);

        let values = self.tracker_ok("get_paths", &params, key, &[UNKNOWN_KEY])?;
        let count = match values.get("paths") {
            Some(count) => count,
            None => {
                error!("[FILESYSTEM] Successful get_paths did not return a paths count");
                return Err(FileSystemError::General(String::from("get_paths did not return a paths count")));
            }
        };
        let count = match count.parse::<usize>() {
            Ok(count) if count > 0 && count < MAX_ALLOWED_PATHS => count,
            _ => {
                error!("[FILESYSTEM] Successful get_paths returned invalid paths count ({})", count);
                return Err(FileSystemError::General(format!("get_paths returned invalid paths count ({count})")));
            }
        };

        let mut paths = Vec::with_capacity(count);
        for position in 1..=count {
            match values.get(&format!("path{position}")) {
                Some(path) => paths.push(path.clone()),
                None => {
                    error!("[FILESYSTEM] Successful get_paths did not return a path for entry {}", position);
                    return Err(FileSystemError::General(format!("get_paths did not return path{position}")));
                }
            }
        }
        Ok(paths)
    }

    pub fn delete(&self, domain: &str, key: &str) -> Result<(), FileSystemError> {
        let mut params = RequestParameters::new();
        params.add("domain", domain).add("key", key);
        self.add_client_id(&mut params);
        self.tracker_ok("delete", &params, key, &[])?;
        Ok(())
    }

    /// Asks a tracker to sleep for `duration` seconds.
    pub fn sleep(&self, duration: u32) -> Result<(), FileSystemError> {
        let mut params = RequestParameters::new();
        params.add("duration", &duration.to_string());
        self.tracker_ok("sleep", &params, "sleep", &[])?;
        Ok(())
    }

    pub fn rename(&self, domain: &str, from_key: &str, to_key: &str) -> Result<(), FileSystemError> {
        let mut params = RequestParameters::new();
        params
            .add("domain", domain)
            .add("from_key", from_key)
            .add("to_key", to_key);
        self.add_client_id(&mut params);
        self.tracker_ok("rename", &params, &format!("{from_key} -> {to_key}"), &[])?;
        Ok(())
    }
}
