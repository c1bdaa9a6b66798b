use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uptimerobot::config::{self, API_KEY_ENV, CONFIG_FILE};
use uptimerobot::{ColorMode, GetMonitors, UptimeRobot};

#[derive(Parser)]
#[command(name = "uptimerobot", version, about = "Show monitors from an UptimeRobot account")]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch monitors and print them
    Monitors(MonitorsArgs),
    /// Write a config file
    Init(InitArgs),
}

#[derive(Args)]
struct MonitorsArgs {
    /// Only these monitor ids
    ids: Vec<String>,

    #[arg(long)]
    api_key: Option<String>,

    /// Custom uptime ratio periods in hours, e.g. 24,168
    #[arg(long, value_delimiter = ',')]
    uptime: Vec<u32>,

    #[arg(long)]
    no_logs: bool,

    #[arg(long)]
    no_alerts: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

#[derive(Args)]
struct InitArgs {
    #[arg(long)]
    api_key: String,

    #[arg(long, value_delimiter = ',')]
    uptime: Vec<u32>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 日志输出到 stderr，stdout 只留给监控信息
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "uptimerobot=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Command::Monitors(args) => show_monitors(&cli.config, args).await,
        Command::Init(args) => init(&cli.config, args),
    };

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn show_monitors(config_path: &Path, args: MonitorsArgs) -> anyhow::Result<()> {
    let config = config::load_config(config_path)?;
    let api_key = args
        .api_key
        .or_else(|| config.resolved_api_key())
        .with_context(|| {
            format!(
                "No API key: pass --api-key, set {} or run `uptimerobot init`",
                API_KEY_ENV
            )
        })?;

    let periods = if args.uptime.is_empty() {
        config.custom_uptime_ratio_periods.clone()
    } else {
        args.uptime
    };

    let client = UptimeRobot::with_base_url(api_key, config.base_url.as_str())?;
    let monitors = client
        .get_monitors(&GetMonitors {
            monitors: args.ids,
            custom_uptime_ratio_periods: periods,
            logs: !args.no_logs,
            alert_contacts: !args.no_alerts,
        })
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&monitors)?);
        return Ok(());
    }

    let colors = args.color.resolve();
    for (i, monitor) in monitors.iter().enumerate() {
        if i > 0 {
            println!();
        }
        monitor.dump(colors)?;
    }
    Ok(())
}

fn init(config_path: &Path, args: InitArgs) -> anyhow::Result<()> {
    let mut config = config::load_config(config_path)?;
    config.api_key = Some(args.api_key);
    if !args.uptime.is_empty() {
        config.custom_uptime_ratio_periods = args.uptime;
    }
    config::save_config(config_path, &config)?;
    println!("Wrote {}", config_path.display());
    Ok(())
}
