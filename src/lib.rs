//! JioSaavn search and download library
//!
//! This library backs the `saavnfetch` binary. It provides a small HTTP
//! gateway for searching the catalog and keeping favorites and history, and
//! the pieces the command-line tool needs to turn a song id into a file on
//! disk: a catalog client, a resolution chain that finds a playable media URL,
//! a streaming downloader and a platform media launcher.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the search gateway
//! - `cli` - Interactive menu and one-shot command implementations
//! - `config` - Configuration management and environment variables
//! - `download` - Filename sanitation and streamed downloads
//! - `error` - Error types shared across the crate
//! - `management` - In-memory favorites and history store
//! - `playback` - Platform media player dispatch
//! - `resolver` - Media URL resolution chain
//! - `saavn` - JioSaavn catalog API client
//! - `server` - Local HTTP server hosting the gateway
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use saavnfetch::{config, resolver::Resolver, saavn::SaavnClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     config::load_env().await?;
//!     let resolver = Resolver::with_default_strategies(SaavnClient::from_env()?);
//!     let found = resolver.resolve("OBDnBzdq").await?;
//!     println!("{}", found.url);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod management;
pub mod playback;
pub mod resolver;
pub mod saavn;
pub mod server;
pub mod types;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching for {}...", query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Downloaded {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for problems the program cannot continue from, such as an unusable
/// server address at startup. Everything reachable from the interactive menu
/// reports through [`warning!`] instead.
///
/// # Example
///
/// ```
/// error!("Failed to bind {}", addr);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable failures: a song that could not be resolved, a
/// download that broke off, a missing media player.
///
/// # Example
///
/// ```
/// warning!("Not available");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
