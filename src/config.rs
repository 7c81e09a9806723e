use std::net::SocketAddr;
use std::str::FromStr;

use clap::Args;
use url::Url;

use crate::fetch::USER_AGENT;

pub const DEFAULT_BASE_URL: &str = "https://ostrbovlje.si";
pub const DEFAULT_LISTING_URL: &str = "https://ostrbovlje.si/prehrana/";

/// Where weekly menus are published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Relative menu links are resolved against this origin.
    pub base: Url,
    /// Page listing every weekly menu.
    pub listing: Url,
}

#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Origin that relative menu links hang off
    #[arg(long, env = "MENU_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,
    /// Page listing the weekly menus
    #[arg(long, env = "MENU_LISTING_URL", default_value = DEFAULT_LISTING_URL)]
    pub listing_url: Url,
    /// User-Agent sent with both requests
    #[arg(long, env = "MENU_USER_AGENT", default_value = USER_AGENT)]
    pub user_agent: String,
}

impl SourceArgs {
    pub fn source(&self) -> Source {
        Source {
            base: self.base_url.clone(),
            listing: self.listing_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
}

impl ServerArgs {
    pub fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        SocketAddr::from_str(format!("{}:{}", self.host, self.port).as_str())
    }
}
