use clap::Parser;
use log::info;
use medflow_ai::{SuggestClient, DEFAULT_API_BASE};
use medflow_server::{app, AppState};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Parser)]
#[command(
    name = "medflow_server",
    version,
    author = "MedFlow Connect Team",
    about = "HTTP gateway for MedFlow Connect AI consultation suggestions",
    long_about = "medflow_server exposes the MedFlow Connect suggestion endpoint.\n\n\
        POST /api/ai-suggest takes {\"transcript\": \"...\"} and returns a structured\n\
        summary, differential diagnoses, and recommendations. Without an API key the\n\
        server stays fully offline and answers with a fixed simulated suggestion.\n\n\
        EXAMPLES:\n\
        \n  medflow_server                              Serve simulated suggestions on 127.0.0.1:4010\n\
        \n  MEDFLOW_AI_API_KEY=sk-... medflow_server    Proxy to the configured model upstream\n\
        \n  medflow_server --port 8080 -vv              Bind another port with debug logging",
    after_help = "For more information, visit: https://github.com/medflow-connect/medflow"
)]
struct Cli {
    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind
    #[arg(long, default_value_t = 4010)]
    port: u16,

    /// Upstream API key; omit to serve simulated suggestions
    #[arg(long, env = "MEDFLOW_AI_API_KEY")]
    api_key: Option<String>,

    /// OpenAI-compatible API base URL
    #[arg(long, env = "MEDFLOW_AI_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Model requested from the upstream
    #[arg(long, default_value = "gpt-4o-mini")]
    model: String,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let state = match cli.api_key {
        Some(key) => match SuggestClient::new(&cli.api_base, key, &cli.model) {
            Ok(client) => {
                info!("upstream suggestions enabled via {}", cli.api_base);
                AppState {
                    client: Some(client),
                }
            }
            Err(err) => {
                eprintln!("error: failed to build suggestion client: {err}");
                std::process::exit(1);
            }
        },
        None => {
            info!("no API key configured; serving simulated suggestions");
            AppState::default()
        }
    };

    let ip: IpAddr = match cli.host.parse() {
        Ok(ip) => ip,
        Err(_) => {
            eprintln!("error: invalid bind host '{}'", cli.host);
            std::process::exit(2);
        }
    };

    let addr = SocketAddr::from((ip, cli.port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    println!("medflow_server listening on http://{addr}");
    axum::serve(listener, app(state)).await.unwrap();
}
