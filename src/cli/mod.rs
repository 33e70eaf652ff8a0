//! # CLI Module
//!
//! User-facing commands of saavnfetch. Every command works on a [`Session`],
//! which bundles the catalog client, the resolution chain, the platform media
//! launcher and the download directory.
//!
//! ## Commands
//!
//! - [`menu`] - interactive numeric menu (search and download, direct URL
//!   download, quit); the default when no subcommand is given
//! - [`search`] - print catalog search results as a table
//! - [`resolve`] - print the playable URL for a song id
//! - [`download`] - resolve a song id and download it
//! - [`fetch`] - download a direct media URL
//! - [`serve`] - run the search gateway
//!
//! ## Error Handling
//!
//! Commands never abort the program. Search errors, unresolvable songs,
//! broken downloads and missing players are reported through the `warning!`
//! macro and the command (or the menu loop) simply carries on.
//!
//! ## Usage Patterns
//!
//! ```bash
//! saavnfetch                                  # interactive menu
//! saavnfetch search "kesariya"                # list matches
//! saavnfetch download OBDnBzdq --play         # resolve, download, play
//! saavnfetch fetch https://.../abc_320.mp4    # direct download
//! saavnfetch serve --addr 0.0.0.0:5000        # web gateway
//! ```

mod commands;
mod menu;
mod session;

pub use commands::download;
pub use commands::fetch;
pub use commands::resolve;
pub use commands::search;
pub use commands::serve;
pub use menu::menu;
pub use session::Session;
