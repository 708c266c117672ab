use {
    crate::{
        contract::WalletTokensAdmin,
        utils::{parse_address, parse_uint},
    },
    alloy::primitives::{Address, TxHash, U256},
    clap::Parser,
    tracing::info,
};

/// Set the default wallet maximum number of tokens
#[derive(Debug, Clone, Parser)]
pub struct Args {
    #[arg(long, value_parser = parse_address, help = "Contract address")]
    pub contract: Address,

    #[arg(long, value_parser = parse_uint, help = "Token ID")]
    pub id: U256,

    #[arg(long, value_parser = parse_uint, help = "New value")]
    pub value: U256,
}

impl Args {
    pub fn intent(&self) -> String {
        format!(
            "Set the default wallet maximum number of token ID {} to {}...",
            self.id, self.value
        )
    }

    pub async fn submit<A: WalletTokensAdmin>(&self, admin: &A) -> eyre::Result<TxHash> {
        info!(contract = %self.contract, "{}", self.intent());

        admin.set_default_wallet_max_tokens(self.id, self.value).await
    }
}
