use {
    eyre::{ensure, eyre, Context},
    serde::{Deserialize, Serialize},
    std::{collections::HashMap, path::Path},
};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(default)]
    pub default_network: Option<String>,
    pub networks: HashMap<String, Network>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Network {
    /// RPC endpoint, http(s), ws(s) or an IPC path
    pub url: String,

    /// Expected chain id, checked against the node when set
    #[serde(default)]
    pub chain_id: Option<u64>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).with_context(|| format!("Failed to open config file {}", path.display()))?;
        let reader = std::io::BufReader::new(file);

        Self::from_reader(reader)
    }

    pub fn from_reader(reader: impl std::io::Read) -> eyre::Result<Self> {
        let config: Config = serde_yaml::from_reader(reader).context("Failed to parse config")?;

        config.validate().context("Invalid config")?;

        Ok(config)
    }

    /// Validate
    ///   1. At least one network is configured
    ///   2. Every network has an url
    ///   3. The default network exists
    pub fn validate(&self) -> eyre::Result<()> {
        ensure!(!self.networks.is_empty(), "No network is configured");

        for (name, network) in &self.networks {
            ensure!(!network.url.trim().is_empty(), "Network {name} has an empty url");
        }

        if let Some(default) = &self.default_network {
            ensure!(
                self.networks.contains_key(default),
                "Default network {default} not found"
            );
        }

        Ok(())
    }

    /// Pick `name` if given, otherwise the default network.
    pub fn network(&self, name: Option<&str>) -> eyre::Result<(&str, &Network)> {
        let name = name
            .or(self.default_network.as_deref())
            .ok_or_else(|| eyre!("No network selected and no default_network in config"))?;

        self.networks
            .get_key_value(name)
            .map(|(name, network)| (name.as_str(), network))
            .ok_or_else(|| eyre!("Network {name} not found in config"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
default_network: sepolia
networks:
  sepolia:
    url: https://rpc.sepolia.org
    chain_id: 11155111
  local:
    url: http://127.0.0.1:8545
"#;

    #[test]
    fn parses_networks() {
        let config = Config::from_reader(CONFIG.as_bytes()).unwrap();

        assert_eq!(config.networks.len(), 2);
        assert_eq!(config.networks["sepolia"].chain_id, Some(11155111));
        assert_eq!(config.networks["local"].chain_id, None);
    }

    #[test]
    fn selects_named_or_default_network() {
        let config = Config::from_reader(CONFIG.as_bytes()).unwrap();

        let (name, network) = config.network(Some("local")).unwrap();
        assert_eq!(name, "local");
        assert_eq!(network.url, "http://127.0.0.1:8545");

        let (name, network) = config.network(None).unwrap();
        assert_eq!(name, "sepolia");
        assert_eq!(network.chain_id, Some(11155111));

        assert!(config.network(Some("mainnet")).is_err());
    }

    #[test]
    fn no_default_and_no_selection_is_an_error() {
        let config = Config::from_reader("networks:\n  local:\n    url: http://127.0.0.1:8545\n".as_bytes()).unwrap();

        assert!(config.network(None).is_err());
        assert!(config.network(Some("local")).is_ok());
    }

    #[test]
    fn rejects_invalid_configs() {
        assert!(Config::from_reader("networks: {}\n".as_bytes()).is_err());
        assert!(Config::from_reader("default_network: main\nnetworks:\n  local:\n    url: x\n".as_bytes()).is_err());
        assert!(Config::from_reader("networks:\n  local:\n    url: ''\n".as_bytes()).is_err());
        assert!(Config::from_reader("not yaml: [".as_bytes()).is_err());
    }
}
