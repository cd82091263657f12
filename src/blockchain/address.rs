use std::fmt;

const EVM_ADDRESS_PREFIX: &str = "0x";
const EVM_ADDRESS_LEN: usize = 42;

// Exclusive bounds
const SOLANA_ADDRESS_MIN_LEN: usize = 30;
const SOLANA_ADDRESS_MAX_LEN: usize = 45;

/// Address family, guessed from the shape of the address alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ChainKind {
    #[strum(serialize = "EVM")]
    Evm,
    #[strum(serialize = "Solana")]
    Solana,
    #[strum(serialize = "Unknown")]
    Unknown,
}

impl ChainKind {
    /// Tag shown in the `Type` column of the report.
    pub fn type_tag(&self) -> &'static str {
        match self {
            ChainKind::Evm => "ETH",
            ChainKind::Solana => "SOL",
            ChainKind::Unknown => "???",
        }
    }
}

/// Classifies an address by its shape.
///
/// No checksum or charset validation is done: any 42 character string starting with `0x` is
/// considered EVM, and anything between 31 and 44 characters without `0x` is considered Solana.
pub fn classify(address: &str) -> ChainKind {
    let address = address.trim();
    let len = address.chars().count();

    if address.starts_with(EVM_ADDRESS_PREFIX) && len == EVM_ADDRESS_LEN {
        ChainKind::Evm
    } else if len > SOLANA_ADDRESS_MIN_LEN
        && len < SOLANA_ADDRESS_MAX_LEN
        && !address.contains(EVM_ADDRESS_PREFIX)
    {
        ChainKind::Solana
    } else {
        ChainKind::Unknown
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletAddress(Box<str>);

impl WalletAddress {
    /// Returns `None` for blank lines.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.into()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> ChainKind {
        classify(&self.0)
    }

    /// First 6 characters, used for terminal output.
    pub fn short(&self) -> String {
        self.0.chars().take(6).collect()
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
