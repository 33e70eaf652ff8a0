//! Hands downloaded files to a local media player.
//!
//! [`platform_launcher`] picks a [`MediaLauncher`] for the host once at
//! startup. Linux probes a list of known players, macOS and Windows defer to
//! the system's own "open" mechanism.

use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
};

use crate::error::PlaybackError;

/// Players tried on Linux, in order.
pub const LINUX_PLAYERS: [&str; 5] = ["xdg-open", "audacious", "vlc", "mplayer", "mpv"];

/// Launches a media player for a file.
pub trait MediaLauncher: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Starts playback of `path` without waiting for the player to exit.
    /// Returns the program that was launched.
    fn launch(&self, path: &Path) -> Result<String, PlaybackError>;
}

/// Uses the first player from a candidate list that is on `PATH`.
pub struct PlayerProbe {
    players: Vec<String>,
}

impl PlayerProbe {
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
        }
    }

    /// First candidate that resolves on `PATH`.
    pub fn find_player(&self) -> Option<&str> {
        self.players
            .iter()
            .find(|player| which::which(player.as_str()).is_ok())
            .map(String::as_str)
    }
}

impl Default for PlayerProbe {
    fn default() -> Self {
        Self::new(LINUX_PLAYERS)
    }
}

impl MediaLauncher for PlayerProbe {
    fn name(&self) -> &str {
        "player-probe"
    }

    fn launch(&self, path: &Path) -> Result<String, PlaybackError> {
        let Some(player) = self.find_player() else {
            let installable: Vec<&str> = self
                .players
                .iter()
                .map(String::as_str)
                .filter(|p| *p != "xdg-open")
                .collect();
            return Err(PlaybackError::NoPlayer(installable.join(", ")));
        };

        spawn_detached(player, [path.as_os_str().to_os_string()])?;
        Ok(player.to_string())
    }
}

/// Delegates to the operating system's file association.
pub struct SystemOpen {
    program: &'static str,
    args: &'static [&'static str],
}

impl SystemOpen {
    /// `open <file>` on macOS.
    pub fn macos() -> Self {
        Self {
            program: "open",
            args: &[],
        }
    }

    /// `cmd /C start "" <file>` on Windows; the empty string is the window title.
    pub fn windows() -> Self {
        Self {
            program: "cmd",
            args: &["/C", "start", ""],
        }
    }
}

impl MediaLauncher for SystemOpen {
    fn name(&self) -> &str {
        self.program
    }

    fn launch(&self, path: &Path) -> Result<String, PlaybackError> {
        let args = self
            .args
            .iter()
            .map(OsString::from)
            .chain(std::iter::once(path.as_os_str().to_os_string()));
        spawn_detached(self.program, args)?;
        Ok(self.program.to_string())
    }
}

/// Stand-in for platforms without a known player.
pub struct Unsupported {
    platform: String,
}

impl Unsupported {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
        }
    }
}

impl MediaLauncher for Unsupported {
    fn name(&self) -> &str {
        "unsupported"
    }

    fn launch(&self, _path: &Path) -> Result<String, PlaybackError> {
        Err(PlaybackError::Unsupported(self.platform.clone()))
    }
}

/// Launcher for the platform this binary was built for.
pub fn platform_launcher() -> Box<dyn MediaLauncher> {
    if cfg!(target_os = "macos") {
        Box::new(SystemOpen::macos())
    } else if cfg!(target_os = "windows") {
        Box::new(SystemOpen::windows())
    } else if cfg!(unix) {
        Box::new(PlayerProbe::default())
    } else {
        Box::new(Unsupported::new(std::env::consts::OS))
    }
}

fn spawn_detached<I>(program: &str, args: I) -> Result<(), PlaybackError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| PlaybackError::Launch {
            program: program.to_string(),
            source,
        })?;

    // reap in the background so the player never lingers as a zombie
    std::thread::spawn(move || {
        let _ = child.wait();
    });

    Ok(())
}
