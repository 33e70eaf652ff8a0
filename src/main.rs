use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use saavnfetch::{cli, config, error, saavn::SaavnClient, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Directory downloads are written to
    #[clap(long, global = true)]
    output_dir: Option<PathBuf>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Interactive menu (default)
    Menu,

    /// Search the catalog
    Search(SearchOptions),

    /// Print the playable media URL for a song id
    Resolve(ResolveOptions),

    /// Resolve a song id and download it
    Download(DownloadOptions),

    /// Download a direct media URL
    Fetch(FetchOptions),

    /// Run the search gateway
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Song name to search for
    #[clap(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveOptions {
    /// Catalog song id
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DownloadOptions {
    /// Catalog song id
    pub id: String,

    /// File name to save as (defaults to "Title - Artists")
    #[clap(long)]
    pub name: Option<String>,

    /// Play the file once downloaded
    #[clap(long)]
    pub play: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct FetchOptions {
    /// Direct media URL
    pub url: String,

    /// File name to save as (defaults to the URL's file name)
    #[clap(long)]
    pub name: Option<String>,

    /// Play the file once downloaded
    #[clap(long)]
    pub play: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, e.g. 127.0.0.1:5000
    #[clap(long)]
    pub addr: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let output_dir = cli.output_dir.unwrap_or_else(config::download_dir);

    let client = match SaavnClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("Failed to create HTTP client: {}", e),
    };

    let session = cli::Session::new(client.clone(), output_dir);

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => cli::menu(&session).await,
        Command::Search(opt) => cli::search(&session, &opt.query.join(" ")).await,
        Command::Resolve(opt) => cli::resolve(&session, &opt.id).await,
        Command::Download(opt) => cli::download(&session, &opt.id, opt.name, opt.play).await,
        Command::Fetch(opt) => cli::fetch(&session, &opt.url, opt.name, opt.play).await,
        Command::Serve(opt) => cli::serve(client, opt.addr).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
