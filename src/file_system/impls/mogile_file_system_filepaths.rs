use std::collections::HashMap;
use chrono::{DateTime, Utc};
use log::error;
use crate::file_system::enums::filepath_type::FilepathType;
use crate::file_system::errors::FileSystemError;
use crate::file_system::file_system::{parse_number, MAX_ALLOWED_DIRECTORY_ENTRIES, PATH_NOT_FOUND, UNKNOWN_KEY};
use crate::file_system::structs::check_fs_result::CheckFsResult;
use crate::file_system::structs::filepath_entry::FilepathEntry;
use crate::file_system::structs::filepath_stats::FilepathStats;
use crate::file_system::structs::mogile_file_system::MogileFileSystem;
use crate::protocol::structs::request_parameters::RequestParameters;

impl MogileFileSystem {
    pub fn rename_filepath(&self, domain: &str, from_key: &str, to_key: &str) -> Result<(), FileSystemError> {
        let mut params = RequestParameters::new();
        params
            .add("domain", domain)
            .add("arg1", from_key)
            .add("arg2", to_key)
            .add("argcount", "2");
        self.add_client_id(&mut params);
        self.tracker_ok("plugin_filepaths_rename", &params, &format!("{from_key} -> {to_key}"), &[])?;
        Ok(())
    }

    pub fn delete_filepath_node(&self, domain: &str, key: &str) -> Result<(), FileSystemError> {
        let mut params = RequestParameters::new();
        params
            .add("domain", domain)
            .add("arg1", key)
            .add("argcount", "1");
        self.add_client_id(&mut params);
        self.tracker_ok("plugin_filepaths_delete_node", &params, key, &[])?;
        Ok(())
    }

    /// Returns the server id of the new node, if the tracker sent one.
    pub fn create_directory(&self, domain: &str, key: &str) -> Result<Option<i64>, FileSystemError> {
        let mut params = RequestParameters::new();
        params
            .add("domain", domain)
            .add("arg1", key)
            .add("arg2", "D")
            .add("argcount", "2");
        self.create_node(params, key)
    }

    pub fn create_link(&self, domain: &str, key: &str, link: &str) -> Result<Option<i64>, FileSystemError> {
        let mut params = RequestParameters::new();
        params
            .add("domain", domain)
            .add("arg1", key)
            .add("arg2", "L")
            .add("arg3", link)
            .add("argcount", "3");
        self.create_node(params, key)
    }

    pub fn set_mtime(&self, domain: &str, key: &str, mtime: DateTime<Utc>) -> Result<(), FileSystemError> {
        let mut params = RequestParameters::new();
        params
            .add("domain", domain)
            .add("arg1", key)
            .add("arg2", &mtime.timestamp().to_string())
            .add("argcount", "2");
        self.add_client_id(&mut params);
        self.tracker_ok("plugin_filepaths_set_mtime", &params, key, &[])?;
        Ok(())
    }

    pub fn list_directory(&self, domain: &str, directory: &str) -> Result<Vec<FilepathEntry>, FileSystemError> {
        let mut params = RequestParameters::new();
        params
            .add("domain", domain)
            .add("arg1", directory)
            .add("argcount", "1");

        let values = self.tracker_ok("plugin_filepaths_list_directory", &params, directory, &[UNKNOWN_KEY])?;
        let count = match values.get("files") {
            Some(count) => count,
            None => {
                error!("[FILESYSTEM] Successful plugin_filepaths_list_directory did not return a files count");
                return Err(FileSystemError::General(String::from("list_directory did not return a files count")));
            }
        };
        let count = match count.parse::<usize>() {
            Ok(0) => return Ok(Vec::new()),
            Ok(count) if count < MAX_ALLOWED_DIRECTORY_ENTRIES => count,
            _ => {
                error!("[FILESYSTEM] Successful plugin_filepaths_list_directory returned invalid files count ({})", count);
                return Err(FileSystemError::General(format!("list_directory returned invalid files count ({count})")));
            }
        };

        let mut entries = Vec::with_capacity(count);
        for index in 0..count {
            let prefix = format!("file{index}");
            let name = match values.get(&prefix) {
                Some(name) => name.clone(),
                None => {
                    error!("[FILESYSTEM] Successful plugin_filepaths_list_directory did not return a name for entry {}", index);
                    return Err(FileSystemError::General(format!("list_directory did not return {prefix}")));
                }
            };
            let mut entry = parse_entry(&values, &format!("{prefix}."), "plugin_filepaths_list_directory")?;
            entry.name = Some(name);
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Info on a single path. The entry carries no name.
    pub fn path_info(&self, domain: &str, path: &str) -> Result<FilepathEntry, FileSystemError> {
        let mut params = RequestParameters::new();
        params
            .add("domain", domain)
            .add("arg1", path)
            .add("argcount", "1");

        let values = self.tracker_ok("plugin_filepaths_path_info", &params, path, &[PATH_NOT_FOUND, UNKNOWN_KEY])?;
        parse_entry(&values, "", "plugin_filepaths_path_info")
    }

    pub fn stats_filepath(&self, domain: &str) -> Result<FilepathStats, FileSystemError> {
        let mut params = RequestParameters::new();
        params.add("domain", domain).add("argcount", "0");
        self.add_client_id(&mut params);

        let values = self.tracker_ok("plugin_filepaths_stats", &params, domain, &[])?;
        let mut stats = FilepathStats::default();
        match values.get("mb_total") {
            Some(total) => stats.total_mb = parse_number(total).max(0) as u64,
            None => error!("[FILESYSTEM] Successful plugin_filepaths_stats did not return a mb_total"),
        }
        match values.get("mb_used") {
            Some(used) => stats.used_mb = parse_number(used).max(0) as u64,
            None => error!("[FILESYSTEM] Successful plugin_filepaths_stats did not return a mb_used"),
        }
        Ok(stats)
    }

    /// Runs the filepath consistency check. `get_total` also counts the
    /// checked nodes.
    pub fn check_fs_filepath(&self, domain: &str, get_total: bool) -> Result<CheckFsResult, FileSystemError> {
        let mut params = RequestParameters::new();
        params
            .add("domain", domain)
            .add("argcount", "1")
            .add("arg1", if get_total { "1" } else { "0" });
        self.add_client_id(&mut params);

        let values = self.tracker_ok("plugin_filepaths_check_fs", &params, domain, &[])?;
        let fixed = match values.get("fixed") {
            Some(fixed) => parse_number(fixed),
            None => {
                error!("[FILESYSTEM] Successful plugin_filepaths_check_fs did not return a fixed count");
                -1
            }
        };
        let total = values.get("total").map(|total| parse_number(total)).unwrap_or(-1);
        Ok(CheckFsResult { fixed, total })
    }

    fn create_node(&self, mut params: RequestParameters, key: &str) -> Result<Option<i64>, FileSystemError> {
        self.add_client_id(&mut params);
        let values = self.tracker_ok("plugin_filepaths_create_node", &params, key, &[])?;
        match values.get("nid") {
            Some(nid) => Ok(Some(parse_number(nid))),
            None => {
                error!("[FILESYSTEM] Successful plugin_filepaths_create_node did not return a server id for {}", key);
                Ok(None)
            }
        }
    }
}

/// Reads `{prefix}mtime`, `{prefix}nid`, `{prefix}type`, `{prefix}link` and
/// `{prefix}size` into an entry without a name.
fn parse_entry(values: &HashMap<String, String>, prefix: &str, action: &str) -> Result<FilepathEntry, FileSystemError> {
    let field = |name: &str| values.get(&format!("{prefix}{name}"));

    let mtime = field("mtime").and_then(|mtime| DateTime::<Utc>::from_timestamp(parse_number(mtime), 0));
    let nid = match field("nid") {
        Some(nid) => parse_number(nid),
        None => {
            error!("[FILESYSTEM] Successful {} did not return a server id for entry", action);
            -1
        }
    };
    let file_type = match field("type") {
        Some(code) => FilepathType::from_code(code),
        None => {
            error!("[FILESYSTEM] Successful {} did not return a type for entry", action);
            return Err(FileSystemError::General(format!("{action} did not return {prefix}type")));
        }
    };

    let mut entry = FilepathEntry {
        name: None,
        mtime,
        nid,
        file_type,
        size: 0,
        link: None,
    };
    match file_type {
        FilepathType::Directory => {}
        FilepathType::Symlink => match field("link") {
            Some(link) => entry.link = Some(link.clone()),
            None => {
                error!("[FILESYSTEM] Successful {} did not return a link for entry", action);
                return Err(FileSystemError::General(format!("{action} did not return {prefix}link")));
            }
        },
        FilepathType::File => {
            entry.size = field("size").map(|size| parse_number(size).max(0) as u64).unwrap_or(0);
        }
    }
    Ok(entry)
}
