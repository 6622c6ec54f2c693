//! Tracker event feed.
//!
//! A [`WatchStream`](structs::watch_stream::WatchStream) sends `!watch` to one
//! tracker and yields the event lines it pushes, reconnecting after failures.
//! `next_cache_line` keeps only `[cache][<id>] ...` events and drops the ones
//! this client caused itself.
//!
//! A [`WatchSwitch`](structs::watch_switch::WatchSwitch) shared between the
//! reading thread and a controller stops the stream.
//!
//! ```rust,ignore
//! use mogile_client::watch::structs::watch_stream::WatchStream;
//! use mogile_client::watch::structs::watch_switch::WatchSwitch;
//!
//! let switch = WatchSwitch::new();
//! let mut stream = WatchStream::new(registry, 0, Some(String::from("1234")), switch.clone());
//! while let Ok(line) = stream.next_cache_line() {
//!     println!("{line}");
//! }
//! ```

/// Constants and the cache line filter.
#[allow(clippy::module_inception)]
pub mod watch;

/// Error type for the watch stream.
pub mod errors;

/// The stream and its stop switch.
pub mod structs;

/// Implementation blocks for the watch structs.
pub mod impls;
