use crate::demo::{run_demo_report, DemoReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use workshop_orders::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "workshop-orders-api",
    about = "Vehicle work-order service: HTTP API plus report tooling",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

/// `serve` is the default when no subcommand is given.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service
    Serve(ServeArgs),
    /// Order tooling for demos and smoke checks
    Order {
        #[command(subcommand)]
        command: OrderCommand,
    },
}

#[derive(Subcommand, Debug)]
enum OrderCommand {
    /// Compile the three report documents for a sample order and print them
    DemoReport(DemoReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Bind host, overriding WORKSHOP_HOST
    #[arg(long, value_name = "HOST")]
    pub(crate) host: Option<String>,
    /// Bind port, overriding WORKSHOP_PORT
    #[arg(long, value_name = "PORT")]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    match Cli::parse().command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => server::run(args).await,
        Command::Order {
            command: OrderCommand::DemoReport(args),
        } => run_demo_report(args).await,
    }
}
