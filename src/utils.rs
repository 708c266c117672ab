use {
    alloy::{
        network::EthereumWallet,
        primitives::{Address, B256, U256},
        providers::{Provider, ProviderBuilder},
        signers::local::PrivateKeySigner,
        transports::BoxTransport,
    },
    alloy_chains::Chain,
    eyre::Context,
    std::str::FromStr,
};

/// Build a provider that fills nonce, gas and chain id and signs with `signer`.
///
/// `rpc` may be an http(s) url, a ws(s) url or an IPC path.
pub async fn new_signer_provider(rpc: &str, signer: PrivateKeySigner) -> eyre::Result<impl Provider<BoxTransport>> {
    ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_builtin(rpc)
        .await
        .with_context(|| format!("Failed to connect to {rpc}"))
}

pub fn parse_signer(s: &str) -> Result<PrivateKeySigner, String> {
    PrivateKeySigner::from_str(s.trim()).map_err(|_| "invalid private key".to_string())
}

/// Parse an unsigned 256-bit integer from a decimal or `0x`-prefixed hex string.
pub fn parse_uint(s: &str) -> Result<U256, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("empty numeric value".to_string());
    }
    if s.starts_with('-') {
        return Err(format!("{s} is negative, expected an unsigned integer"));
    }

    // from_str_radix skips `_`, so digits are checked up front
    let parsed = match s.strip_prefix("0x") {
        Some("") => return Err(format!("{s} has no hex digits")),
        Some(hex) if hex.bytes().all(|b| b.is_ascii_hexdigit()) => U256::from_str_radix(hex, 16),
        None if s.bytes().all(|b| b.is_ascii_digit()) => U256::from_str_radix(s, 10),
        _ => return Err(format!("{s} is not a decimal or 0x-prefixed hex integer")),
    };

    parsed.map_err(|err| format!("invalid uint256 {s}: {err}"))
}

/// Parse an address, enforcing the EIP-55 checksum when the input is mixed-case.
pub fn parse_address(s: &str) -> Result<Address, String> {
    let s = s.trim();
    let digits = s.strip_prefix("0x").unwrap_or(s);

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());

    if has_lower && has_upper {
        Address::parse_checksummed(s, None).map_err(|err| format!("invalid address {s}: {err}"))
    } else {
        Address::from_str(s).map_err(|err| format!("invalid address {s}: {err}"))
    }
}

fn prefix(chain: Chain) -> Option<&'static str> {
    chain.etherscan_urls().map(|(_, url)| url)
}

pub fn tx_link(chain: Chain, hash: &B256) -> Option<String> {
    prefix(chain).map(|prefix| format!("{prefix}/tx/{hash}"))
}
