use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::process::exit;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use clap::Parser;
use log::{error, info};
use mogile_client::common::common::setup_logging;
use mogile_client::config::structs::configuration::Configuration;
use mogile_client::enums::Commands;
use mogile_client::file_system::enums::download_content::DownloadContent;
use mogile_client::file_system::structs::file_system_settings::FileSystemSettings;
use mogile_client::file_system::structs::mogile_file_system::MogileFileSystem;
use mogile_client::structs::Cli;
use mogile_client::tracker::structs::tracker_registry::TrackerRegistry;
use mogile_client::watch::structs::watch_stream::WatchStream;
use mogile_client::watch::structs::watch_switch::WatchSwitch;

fn main()
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{}", e);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let registry = match config.build_registry() {
        Ok(registry) => registry,
        Err(e) => {
            error!("Unable to set up trackers: {}", e);
            exit(1);
        }
    };
    let file_system = match MogileFileSystem::new(FileSystemSettings::from(config.as_ref()), Some(registry.clone())) {
        Ok(file_system) => file_system,
        Err(e) => {
            error!("Unable to set up the file system: {}", e);
            exit(1);
        }
    };

    let result = run(args.command, &config, &file_system, registry);
    file_system.close();
    if let Err(e) = result {
        error!("{}", e);
        exit(1);
    }
}

fn run(command: Commands, config: &Configuration, file_system: &MogileFileSystem, registry: Arc<TrackerRegistry>) -> Result<(), Box<dyn Error>>
{
    match command {
        Commands::Paths { domain, key, verify } => {
            for path in file_system.get_paths(&domain, &key, !verify)? {
                println!("{}", path);
            }
        }
        Commands::Get { domain, key, output, length } => {
            match output {
                Some(output) => {
                    let mut file = OpenOptions::new().read(true).write(true).create(true).truncate(true).open(&output)?;
                    let total_bytes = file_system.get_file(&domain, &key, &mut file, length)?;
                    info!("Wrote {} bytes to {}", total_bytes, output.display());
                }
                None => {
                    let download = file_system.get_file_or_bytes(&domain, &key, None, length)?;
                    let mut stdout = io::stdout().lock();
                    match download.content {
                        DownloadContent::Bytes(bytes) => stdout.write_all(&bytes)?,
                        DownloadContent::File(mut file) => {
                            io::copy(&mut file, &mut stdout)?;
                        }
                    }
                    stdout.flush()?;
                }
            }
        }
        Commands::Put { domain, key, file, class, mtime } => {
            let source = File::open(&file)?;
            if mtime {
                let modified: DateTime<Utc> = source.metadata()?.modified()?.into();
                file_system.store_file_filepath(&domain, &key, &class, &source, modified)?;
            } else {
                file_system.store_file(&domain, &key, &class, &source)?;
            }
            info!("Stored {} as {}/{}", file.display(), domain, key);
        }
        Commands::Delete { domain, key } => {
            file_system.delete(&domain, &key)?;
        }
        Commands::Rename { domain, from, to, filepath } => {
            if filepath {
                file_system.rename_filepath(&domain, &from, &to)?;
            } else {
                file_system.rename(&domain, &from, &to)?;
            }
        }
        Commands::Ls { domain, directory } => {
            let entries = file_system.list_directory(&domain, &directory)?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::Info { domain, path } => {
            let entry = file_system.path_info(&domain, &path)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Commands::Mkdir { domain, directory } => {
            match file_system.create_directory(&domain, &directory)? {
                Some(nid) => println!("{}", nid),
                None => println!("created"),
            }
        }
        Commands::Watch { tracker, cache } => {
            let mut stream = WatchStream::new(registry, tracker, config.client_id.clone(), WatchSwitch::new());
            loop {
                let line = if cache { stream.next_cache_line()? } else { stream.next_line()? };
                println!("{}", line);
            }
        }
    }
    Ok(())
}
