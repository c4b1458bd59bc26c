//! k8s-platform CLI - HTTP API server for Kubernetes pods

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use k8s_platform::api::{self, AppState};
use k8s_platform::config::Settings;
use k8s_platform::k8s::{KubePodStore, build_client};
use k8s_platform::service::PodService;
use k8s_platform::utils::{display_error_and_exit, enhance_error, logger};
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "k8s-platform")]
#[command(author, version, about = "HTTP API for browsing and managing Kubernetes pods", long_about = None)]
struct Cli {
    /// Verbose output (can be used multiple times: -v, -vv, -vvv)
    /// -v: INFO, -vv: DEBUG, -vvv: TRACE
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file (default: .k8s-platform.toml or ~/.config/k8s-platform/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "K8S_PLATFORM_LISTEN")]
        listen: Option<String>,

        /// Path to kubeconfig file
        #[arg(short, long, env = "K8S_PLATFORM_KUBECONFIG")]
        kubeconfig: Option<String>,

        /// Kubeconfig context (requires --kubeconfig)
        #[arg(long, requires = "kubeconfig")]
        context: Option<String>,

        /// Number of log lines returned by the pod log endpoint
        #[arg(long)]
        log_tail_lines: Option<i64>,
    },

    /// Print an example configuration file
    Config,

    /// Generate shell completion scripts
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init(cli.verbose);

    match cli.command {
        Commands::Serve {
            listen,
            kubeconfig,
            context,
            log_tail_lines,
        } => {
            let mut settings = load_settings(cli.config.as_deref())?;

            if let Some(listen) = listen {
                settings.server.listen_addr = listen;
            }
            if kubeconfig.is_some() {
                settings.kube.kubeconfig = kubeconfig;
                settings.kube.context = context;
            }
            if let Some(lines) = log_tail_lines {
                settings.pods.log_tail_lines = lines;
            }

            if let Err(e) = handle_serve_command(settings).await {
                display_error_and_exit(enhance_error(e));
            }
            Ok(())
        }
        Commands::Config => {
            print!("{}", Settings::example_config());
            Ok(())
        }
        Commands::Completion { shell } => handle_completion_command(shell),
        Commands::Version => handle_version_command(),
    }
}

fn load_settings(path: Option<&std::path::Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load_from_file(path),
        None => Ok(Settings::load()),
    }
}

async fn handle_serve_command(settings: Settings) -> Result<()> {
    settings.validate()?;

    let addr: SocketAddr = settings
        .server
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", settings.server.listen_addr))?;

    let client = build_client(&settings.kube).await?;
    let store = KubePodStore::new(client);
    let pods = PodService::new(Arc::new(store), settings.pods.log_tail_lines);

    api::serve(addr, api::router(AppState::new(pods))).await
}

fn handle_completion_command(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "k8s-platform", &mut io::stdout());
    Ok(())
}

fn handle_version_command() -> Result<()> {
    println!("k8s-platform {}", env!("CARGO_PKG_VERSION"));
    println!("HTTP API for browsing and managing Kubernetes pods");
    Ok(())
}
