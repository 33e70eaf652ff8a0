use std::path::{Path, PathBuf};

use crate::{
    download,
    error::ResolveError,
    info,
    playback::{MediaLauncher, platform_launcher},
    resolver::{Resolution, Resolver},
    saavn::{Catalog, SaavnClient},
    success,
    types::SongRecord,
    warning,
};

/// Everything a CLI command needs: the catalog client, the resolution chain,
/// the platform launcher and the download directory.
pub struct Session {
    client: SaavnClient,
    resolver: Resolver<SaavnClient>,
    launcher: Box<dyn MediaLauncher>,
    output_dir: PathBuf,
}

impl Session {
    pub fn new(client: SaavnClient, output_dir: PathBuf) -> Self {
        let launcher = platform_launcher();
        log::debug!("Playback through {}", launcher.name());
        Self {
            resolver: Resolver::with_default_strategies(client.clone()),
            client,
            launcher,
            output_dir,
        }
    }

    /// Catalog search; failures are reported and turn into an empty list.
    pub async fn search(&self, query: &str) -> Vec<SongRecord> {
        match self.client.autocomplete(query).await {
            Ok(songs) => songs,
            Err(e) => {
                warning!("Search error: {}", e);
                Vec::new()
            }
        }
    }

    /// Detail record for a song id, used to name downloads started by id.
    pub async fn lookup(&self, song_id: &str) -> Option<SongRecord> {
        match self.resolver.catalog().song_details(song_id).await {
            Ok(song) => Some(song),
            Err(e) => {
                log::debug!("Detail lookup for {} failed: {}", song_id, e);
                None
            }
        }
    }

    pub async fn resolve(&self, song_id: &str) -> Option<Resolution> {
        info!("Fetching download URL...");
        reported(self.resolver.resolve(song_id).await)
    }

    /// Downloads `url` as `name` into the output directory.
    pub async fn download(&self, url: &str, name: &str) -> Option<PathBuf> {
        info!("Downloading {}...", download::sanitize_filename(name));
        match download::download(self.client.http(), url, name, &self.output_dir).await {
            Ok(path) => {
                success!("Downloaded: {}", path.display());
                Some(path)
            }
            Err(e) => {
                warning!("Download failed: {}", e);
                None
            }
        }
    }

    /// Resolves and downloads a song; `name` defaults to `Title - Artists`.
    pub async fn download_song(&self, song: &SongRecord, name: Option<&str>) -> Option<PathBuf> {
        let resolution = self.resolve(&song.id).await?;
        self.download_as(&resolution, song, name).await
    }

    /// Like [`Session::download_song`] for a record returned by
    /// [`Session::lookup`], which the resolver reuses instead of fetching the
    /// details a second time.
    pub async fn download_detail(&self, detail: &SongRecord, name: Option<&str>) -> Option<PathBuf> {
        info!("Fetching download URL...");
        let resolution = reported(self.resolver.resolve_detail(detail).await)?;
        self.download_as(&resolution, detail, name).await
    }

    async fn download_as(
        &self,
        resolution: &Resolution,
        song: &SongRecord,
        name: Option<&str>,
    ) -> Option<PathBuf> {
        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| song.display_name());
        self.download(&resolution.url, &name).await
    }

    pub fn play(&self, path: &Path) -> bool {
        info!("Attempting to play {}...", path.display());
        match self.launcher.launch(path) {
            Ok(program) => {
                success!("Playing with {}", program);
                true
            }
            Err(e) => {
                warning!("{}", e);
                false
            }
        }
    }
}

fn reported(result: Result<Resolution, ResolveError>) -> Option<Resolution> {
    match result {
        Ok(resolution) => Some(resolution),
        Err(e) => {
            warning!("Not available: {}", e);
            None
        }
    }
}
