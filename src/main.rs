use anyhow::Result;
use clap::Parser;
use link_shortener::config::Config;
use link_shortener::server;
use tracing_subscriber::EnvFilter;

/// In-memory URL shortener with expiring links and click analytics.
#[derive(Parser)]
#[command(name = "link-shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(long)]
    listen: Option<String>,

    /// Public prefix of short links, overrides `BASE_URL`
    #[arg(long)]
    base_url: Option<String>,

    /// Log format (`text` or `json`), overrides `LOG_FORMAT`
    #[arg(long)]
    log_format: Option<String>,
}

impl Cli {
    fn apply(self, mut config: Config) -> Config {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(Config::from_env()?);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
