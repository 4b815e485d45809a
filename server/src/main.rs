use clap::Parser;
use tokio::net::TcpListener;
use todo_server::{telemetry, Config};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    telemetry::init();
    let config = Config::parse();
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    todo_server::run(listener).await
}
