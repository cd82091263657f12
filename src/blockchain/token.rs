use thiserror::Error;

pub const WEI_CONVERSION: f64 = 1e18;

/// How many symbols are listed in the `Tokens` column. The count is not truncated.
pub const MAX_LISTED_SYMBOLS: usize = 3;

#[derive(Error, Debug)]
#[error("Amount is not a finite number: {0:?}")]
pub struct InvalidAmount(pub String);

pub fn parse_amount(raw: &str) -> Result<f64, InvalidAmount> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(InvalidAmount(raw.to_owned())),
    }
}

/// Symbols of the tokens held by a wallet, in API order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenHoldings {
    /// Up to [`MAX_LISTED_SYMBOLS`] symbols joined with ", "
    pub listed: String,
    pub count: usize,
}

impl TokenHoldings {
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut listed: Vec<String> = Vec::with_capacity(MAX_LISTED_SYMBOLS);
        let mut count = 0;
        for symbol in symbols {
            if listed.len() < MAX_LISTED_SYMBOLS {
                listed.push(symbol.as_ref().to_owned());
            }
            count += 1;
        }

        Self {
            listed: listed.join(", "),
            count,
        }
    }
}
