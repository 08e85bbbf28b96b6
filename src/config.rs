use clap::Parser;
use std::net::SocketAddr;

/// Web form that forwards team statistics to the points-prediction service
#[derive(Parser, Debug, Clone)]
#[command(name = "nba-projections-web", version, about)]
pub struct Config {
    /// Address the web server listens on
    #[arg(long, env = "LISTEN_ADDR", default_value = "127.0.0.1:8000")]
    pub listen_addr: String,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.listen_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid listen address '{}': {}", self.listen_addr, e))
    }
}
