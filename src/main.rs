use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tunesource::{
    config, error, info, management::CatalogManager, providers, server, types::SourceId,
};

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
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the music source server
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address and port to bind, e.g. 0.0.0.0:6000 (overrides SERVER_ADDRESS)
    #[clap(long)]
    pub address: Option<String>,

    /// Catalog provider to serve: mock, mg or wy (overrides SOURCE_PROVIDER)
    #[clap(long)]
    pub provider: Option<String>,

    /// Track cache capacity (overrides TRACK_CACHE_CAPACITY)
    #[clap(long)]
    pub cache_capacity: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(opt) => serve(opt).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

async fn serve(opt: ServeOptions) {
    let provider_tag = opt.provider.unwrap_or_else(config::source_provider);
    let source: SourceId = match provider_tag.parse() {
        Ok(source) => source,
        Err(e) => error!("Cannot select provider. Err: {}", e),
    };

    let catalog = Arc::new(CatalogManager::new(
        providers::provider_for(source),
        opt.cache_capacity.unwrap_or_else(config::cache_capacity),
    ));
    let address = opt.address.unwrap_or_else(config::server_addr);

    info!(
        "tunesource v{} - music source server",
        env!("CARGO_PKG_VERSION")
    );
    info!("Active provider: {}", catalog.source());
    info!("Endpoints: /search /song /url /lyric /pic /check");
    info!("LX Music: Settings -> Custom Source -> http://<your-ip>:<port>");

    server::start_source_server(catalog, &address).await;
}
