use {
    crate::{
        contract::WalletTokensAdmin,
        utils::{parse_address, parse_uint},
    },
    alloy::primitives::{Address, TxHash, U256},
    clap::Parser,
    tracing::info,
};

/// Set the maximum number of tokens for a wallet
#[derive(Debug, Clone, Parser)]
pub struct Args {
    #[arg(long, value_parser = parse_address, help = "Contract address")]
    pub contract: Address,

    #[arg(long, value_parser = parse_address, help = "Target address")]
    pub account: Address,

    #[arg(long, value_parser = parse_uint, help = "Token ID")]
    pub id: U256,

    #[arg(long, value_parser = parse_uint, help = "New value")]
    pub value: U256,
}

impl Args {
    pub fn intent(&self) -> String {
        format!(
            "Set the maximum number of token ID {} for account {} to {}",
            self.id, self.account, self.value
        )
    }

    pub async fn submit<A: WalletTokensAdmin>(&self, admin: &A) -> eyre::Result<TxHash> {
        info!(contract = %self.contract, "{}", self.intent());

        admin.set_wallet_max_tokens(self.account, self.id, self.value).await
    }
}
