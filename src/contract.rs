use {
    alloy::{
        network::ReceiptResponse,
        primitives::{Address, TxHash, U256},
        providers::Provider,
        sol,
        transports::Transport,
    },
    eyre::Context,
};

sol!(
    #[sol(rpc)]
    contract ZappaClubTickets {
        function setWalletMaxTokens(address account, uint256 id, uint256 value) external;
        function setDefaultWalletMaxTokens(uint256 id, uint256 value) external;
    }
);

/// Outcome of a mined transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxStatus {
    pub success: bool,
    pub block_number: Option<u64>,
}

/// Admin surface of the ticket contract used by the CLI commands.
pub trait WalletTokensAdmin {
    async fn set_wallet_max_tokens(&self, account: Address, id: U256, value: U256) -> eyre::Result<TxHash>;

    async fn set_default_wallet_max_tokens(&self, id: U256, value: U256) -> eyre::Result<TxHash>;

    /// `None` while the transaction is still pending.
    async fn transaction_status(&self, hash: TxHash) -> eyre::Result<Option<TxStatus>>;
}

impl<T, P> WalletTokensAdmin for ZappaClubTickets::ZappaClubTicketsInstance<T, P>
where
    T: Transport + Clone,
    P: Provider<T>,
{
    async fn set_wallet_max_tokens(&self, account: Address, id: U256, value: U256) -> eyre::Result<TxHash> {
        let call = self.setWalletMaxTokens(account, id, value);
        let pending = call
            .send()
            .await
            .context("Failed to send setWalletMaxTokens")?;

        Ok(*pending.tx_hash())
    }

    async fn set_default_wallet_max_tokens(&self, id: U256, value: U256) -> eyre::Result<TxHash> {
        let call = self.setDefaultWalletMaxTokens(id, value);
        let pending = call
            .send()
            .await
            .context("Failed to send setDefaultWalletMaxTokens")?;

        Ok(*pending.tx_hash())
    }

    async fn transaction_status(&self, hash: TxHash) -> eyre::Result<Option<TxStatus>> {
        let receipt = self
            .provider()
            .get_transaction_receipt(hash)
            .await
            .with_context(|| format!("Failed to get receipt for {hash}"))?;

        Ok(receipt.map(|r| TxStatus {
            success: r.status(),
            block_number: r.block_number(),
        }))
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use {
        super::{TxStatus, WalletTokensAdmin},
        alloy::primitives::{Address, TxHash, U256},
        eyre::eyre,
        std::{collections::VecDeque, sync::Mutex},
    };

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        SetWalletMaxTokens(Address, U256, U256),
        SetDefaultWalletMaxTokens(U256, U256),
    }

    /// Records every setter call and replays queued receipt lookups.
    pub struct RecordingAdmin {
        pub hash: TxHash,
        pub calls: Mutex<Vec<Call>>,
        pub statuses: Mutex<VecDeque<Option<TxStatus>>>,
        pub revert: bool,
    }

    impl RecordingAdmin {
        pub fn new(hash: TxHash) -> Self {
            Self {
                hash,
                calls: Mutex::default(),
                statuses: Mutex::default(),
                revert: false,
            }
        }

        pub fn with_statuses(self, statuses: impl IntoIterator<Item = Option<TxStatus>>) -> Self {
            *self.statuses.lock().unwrap() = statuses.into_iter().collect();
            self
        }

        pub fn reverting(mut self) -> Self {
            self.revert = true;
            self
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) -> eyre::Result<TxHash> {
            self.calls.lock().unwrap().push(call);
            if self.revert {
                return Err(eyre!("execution reverted: caller is not the owner"));
            }
            Ok(self.hash)
        }
    }

    impl WalletTokensAdmin for RecordingAdmin {
        async fn set_wallet_max_tokens(&self, account: Address, id: U256, value: U256) -> eyre::Result<TxHash> {
            self.record(Call::SetWalletMaxTokens(account, id, value))
        }

        async fn set_default_wallet_max_tokens(&self, id: U256, value: U256) -> eyre::Result<TxHash> {
            self.record(Call::SetDefaultWalletMaxTokens(id, value))
        }

        async fn transaction_status(&self, _hash: TxHash) -> eyre::Result<Option<TxStatus>> {
            Ok(self.statuses.lock().unwrap().pop_front().flatten())
        }
    }
}
