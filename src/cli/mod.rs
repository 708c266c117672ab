use {
    crate::{
        config::Config,
        contract::{WalletTokensAdmin, ZappaClubTickets},
        utils::{new_signer_provider, parse_signer, tx_link},
        wait,
    },
    alloy::{
        primitives::{Address, TxHash},
        providers::Provider,
        signers::local::PrivateKeySigner,
    },
    alloy_chains::Chain,
    clap::{Parser, Subcommand},
    eyre::{ensure, Context, ContextCompat},
    std::{io::Write, time::Duration},
    tracing::info,
};

mod set_default;
mod set_specific;

const POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Parser)]
#[command(version, about = "Administrative tasks for the wallet token limits of a deployed ticket contract")]
pub struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[arg(long, global = true, help = "Wait for the transaction to be mined")]
    wait: bool,

    #[arg(long, global = true, default_value_t = 120, help = "Seconds to wait for the receipt with --wait")]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ConnectionArgs {
    #[arg(long, global = true, env = "ETH_RPC_URL", help = "RPC url, overrides --network")]
    rpc_url: Option<String>,

    #[arg(long, global = true, env = "NETWORK", help = "Network name from the config file")]
    network: Option<String>,

    #[arg(
        long,
        global = true,
        env = "WALLET_TOKENS_CONFIG",
        default_value = "config.yaml",
        help = "The path to the config file"
    )]
    config: String,

    #[arg(
        long,
        global = true,
        env = "PRIVATE_KEY",
        hide_env_values = true,
        value_parser = parse_signer,
        help = "Private key of the contract admin"
    )]
    private_key: Option<PrivateKeySigner>,
}

impl ConnectionArgs {
    /// Resolve the rpc url and, when configured, the expected chain id.
    fn endpoint(&self) -> eyre::Result<(String, Option<u64>)> {
        if let Some(rpc_url) = &self.rpc_url {
            return Ok((rpc_url.clone(), None));
        }

        let config = Config::from_file(&self.config).context("--rpc-url not given, falling back to config")?;
        let (name, network) = config.network(self.network.as_deref())?;
        info!(network = name, "Using network from config");

        Ok((network.url.clone(), network.chain_id))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    WalletTokensSetSpecific(set_specific::Args),
    WalletTokensSetDefault(set_default::Args),
}

impl Command {
    pub fn contract(&self) -> Address {
        match self {
            Command::WalletTokensSetSpecific(args) => args.contract,
            Command::WalletTokensSetDefault(args) => args.contract,
        }
    }

    pub async fn submit<A: WalletTokensAdmin>(&self, admin: &A) -> eyre::Result<TxHash> {
        match self {
            Command::WalletTokensSetSpecific(args) => args.submit(admin).await,
            Command::WalletTokensSetDefault(args) => args.submit(admin).await,
        }
    }
}

impl Cli {
    pub async fn run(self) -> eyre::Result<()> {
        let (rpc, expected_chain_id) = self.connection.endpoint()?;
        let signer = self
            .connection
            .private_key
            .clone()
            .context("No signer, pass --private-key or set PRIVATE_KEY")?;
        let sender = signer.address();

        let provider = new_signer_provider(&rpc, signer).await?;
        let chain_id = provider.get_chain_id().await.context("Failed to get chain id")?;
        check_chain(expected_chain_id, chain_id)?;

        let chain = Chain::from_id(chain_id);
        info!(%chain, %sender, "Connected");

        let contract = ZappaClubTickets::new(self.command.contract(), &provider);

        let timeout = self.wait.then(|| Duration::from_secs(self.timeout));
        execute(&self.command, &contract, chain, timeout, &mut std::io::stdout()).await?;

        Ok(())
    }
}

fn check_chain(expected: Option<u64>, actual: u64) -> eyre::Result<()> {
    if let Some(expected) = expected {
        ensure!(
            actual == expected,
            "Connected to chain {actual}, but the network expects {expected}"
        );
    }

    Ok(())
}

/// Submit `command`, print its hash to `out` and optionally wait for the receipt.
async fn execute<A: WalletTokensAdmin>(
    command: &Command,
    admin: &A,
    chain: Chain,
    wait_timeout: Option<Duration>,
    out: &mut impl Write,
) -> eyre::Result<TxHash> {
    let hash = command.submit(admin).await?;

    writeln!(out, "Transaction hash: {hash}")?;

    if let Some(link) = tx_link(chain, &hash) {
        info!(%link, "Submitted");
    }

    if let Some(timeout) = wait_timeout {
        let status = wait::until_mined(admin, hash, POLL_INTERVAL, timeout).await?;
        info!(%hash, block = ?status.block_number, "Transaction mined");
    }

    Ok(hash)
}
