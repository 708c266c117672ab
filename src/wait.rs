use {
    crate::contract::{TxStatus, WalletTokensAdmin},
    alloy::primitives::TxHash,
    eyre::{bail, ensure},
    std::time::Duration,
    tokio::time::{sleep, Instant},
    tracing::debug,
};

/// Poll for the receipt of `hash` until it is mined or `timeout` elapses.
///
/// A reverted receipt is an error.
pub async fn until_mined<A: WalletTokensAdmin>(
    admin: &A,
    hash: TxHash,
    poll_interval: Duration,
    timeout: Duration,
) -> eyre::Result<TxStatus> {
    // no deadline when the timeout is past what Instant can represent
    let deadline = Instant::now().checked_add(timeout);

    loop {
        if let Some(status) = admin.transaction_status(hash).await? {
            ensure!(status.success, "Transaction {hash} reverted");
            return Ok(status);
        }

        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            bail!("Transaction {hash} not mined after {timeout:?}");
        }

        debug!(%hash, "Waiting for receipt");
        sleep(poll_interval).await;
    }
}
