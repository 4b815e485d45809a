//! Launch configuration for the server binary.

use clap::Parser;

/// Serve the todo API over HTTP.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about)]
pub struct Config {
    /// Address to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
