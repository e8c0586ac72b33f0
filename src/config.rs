use std::time::Duration;

use bitcoin::NetworkKind;
use clap::Parser;
use ordkit_index::{
    GORILLAPOOL_MAINNET_URL, GorillaPoolClient, OwnershipSource, WHATSONCHAIN_MAINNET_URL,
    WhatsOnChainClient,
};
use url::Url;

use crate::discovery::UtxoDiscovery;
use crate::ownership::OwnershipResolver;

/// The configuration parameters for the application.
///
/// These can either be passed on the command line, or pulled from environment variables.
/// For development convenience, these can also be read from a `.env` file in the working
/// directory where the application is started.
#[derive(Parser, Debug, Clone)]
pub struct Config {
    /// Base URL of the GorillaPool ordinals API
    #[arg(long, env, default_value = GORILLAPOOL_MAINNET_URL)]
    pub gorillapool_url: Url,

    /// Base URL of the WhatsOnChain API, network included
    #[arg(long, env, default_value = WHATSONCHAIN_MAINNET_URL)]
    pub whatsonchain_url: Url,

    /// Timeout applied to every request, in seconds
    #[arg(long, env, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Network used when deriving addresses. Either `mainnet` or `testnet`.
    #[arg(long, env, default_value = "mainnet", value_parser = parse_network)]
    pub network: NetworkKind,
}

fn parse_network(s: &str) -> Result<NetworkKind, String> {
    match s.to_lowercase().as_ref() {
        "mainnet" | "main" => Ok(NetworkKind::Main),
        "testnet" | "test" => Ok(NetworkKind::Test),
        s => Err(format!(
            "Invalid network: {s}, valid networks are: `mainnet`, `testnet`"
        )),
    }
}

impl Config {
    /// One HTTP client shared by every index client
    pub fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .build()
    }

    pub fn gorillapool(&self, client: reqwest::Client) -> GorillaPoolClient {
        GorillaPoolClient::with_client(self.gorillapool_url.clone(), client)
    }

    pub fn discovery(&self, client: reqwest::Client) -> UtxoDiscovery<GorillaPoolClient> {
        UtxoDiscovery::new(self.gorillapool(client))
    }

    /// GorillaPool first, WhatsOnChain as the fallback
    pub fn ownership_resolver(&self, client: reqwest::Client) -> OwnershipResolver {
        let sources: Vec<Box<dyn OwnershipSource>> = vec![
            Box::new(self.gorillapool(client.clone())),
            Box::new(WhatsOnChainClient::with_client(
                self.whatsonchain_url.clone(),
                client,
            )),
        ];
        OwnershipResolver::new(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_mainnet() {
        let config = Config::try_parse_from(["ordkit"]).unwrap();
        assert_eq!(config.gorillapool_url.as_str(), "https://ordinals.gorillapool.io/api");
        assert_eq!(
            config.whatsonchain_url.as_str(),
            "https://api.whatsonchain.com/v1/bsv/main"
        );
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.network, NetworkKind::Main);
    }

    #[test]
    fn network_names() {
        assert_eq!(parse_network("Testnet"), Ok(NetworkKind::Test));
        assert_eq!(parse_network("main"), Ok(NetworkKind::Main));
        assert!(parse_network("regtest").is_err());
    }

    #[test]
    fn resolver_consults_gorillapool_first() {
        let config = Config::try_parse_from(["ordkit"]).unwrap();
        let resolver = config.ownership_resolver(reqwest::Client::new());
        assert_eq!(
            resolver.sources().collect::<Vec<_>>(),
            ["gorillapool", "whatsonchain"]
        );
    }
}
