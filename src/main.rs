use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use jobctl::commands::CommandRegistry;
use jobctl::connection::Connection;
use jobctl::listener;
use jobctl::session::Session;

/// Default master host; overridable by the positional argument
const DEFAULT_MASTER_HOST: &str = "localhost";
/// The master's fixed administrative port
const MASTER_PORT: u16 = 5557;

#[derive(Parser, Debug)]
#[command(
    name = "jobctl",
    version,
    about = "Interactive admin console for a job-scheduling master"
)]
struct Args {
    /// Master host to connect to
    #[arg(default_value = DEFAULT_MASTER_HOST)]
    host: String,
}

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout belongs to the operator console.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // help and version are not failures; bad arguments are
            let code = if e.use_stderr() { 1 } else { 0 };
            std::process::exit(code);
        }
    };

    println!("master admin v{}", env!("CARGO_PKG_VERSION"));
    println!("print `help` for more information");
    println!("connecting to master {}:{}", args.host, MASTER_PORT);

    let (connection, reader) = match Connection::connect(&args.host, MASTER_PORT).await {
        Ok(pair) => pair,
        Err(e) => {
            println!("couldn't connect to master: {e}");
            println!("exiting...");
            std::process::exit(1);
        }
    };
    println!("connected");

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let listener = listener::spawn(reader, shutdown_rx);

    let mut session = Session::new(connection, CommandRegistry::new());
    let result = session.run(BufReader::new(tokio::io::stdin())).await;

    // Shutdown ordering: close the write direction, signal the listener out
    // of its pending read, then wait for it to drain before terminating.
    session.into_connection().close().await;
    let _ = shutdown_tx.send(true);
    let _ = listener.await;

    if let Err(e) = result {
        println!("couldn't send command to master: {e}");
        println!("exiting...");
        std::process::exit(1);
    }
}
