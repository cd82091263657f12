use serde::Deserialize;

use crate::blockchain::token::{parse_amount, InvalidAmount};

// Only the fields the scanner reads are modelled; serde skips the rest of each payload.

/// Amounts come back as strings most of the time, but some endpoints send plain numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Text(String),
    Number(f64),
}

impl RawAmount {
    pub fn to_f64(&self) -> Result<f64, InvalidAmount> {
        match self {
            RawAmount::Text(text) => parse_amount(text),
            RawAmount::Number(number) if number.is_finite() => Ok(*number),
            RawAmount::Number(number) => Err(InvalidAmount(number.to_string())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NativeBalance {
    pub balance: RawAmount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Erc20Balance {
    pub symbol: Option<String>,
    pub balance: Option<RawAmount>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolanaPortfolio {
    pub native_balance: Option<SolanaNativeBalance>,
    #[serde(default)]
    pub tokens: Option<Vec<SplToken>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolanaNativeBalance {
    /// Already in SOL, not lamports
    pub solana: Option<RawAmount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SplToken {
    pub symbol: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_native_balance_from_string() {
        let native: NativeBalance =
            serde_json::from_value(json!({ "balance": "1000000000000000000" })).unwrap();
        assert_eq!(native.balance.to_f64().unwrap(), 1e18);
    }

    #[test]
    fn test_erc20_balance_with_nulls() {
        let tokens: Vec<Erc20Balance> = serde_json::from_value(json!([
            {
                "token_address": "0xdac17f958d2ee523a2206206994597c13d831ec7",
                "name": "Tether USD",
                "symbol": "USDT",
                "logo": null,
                "decimals": 6,
                "balance": "2500000",
                "possible_spam": false
            },
            { "symbol": null, "balance": "1" }
        ]))
        .unwrap();

        assert_eq!(tokens[0].symbol.as_deref(), Some("USDT"));
        assert_eq!(tokens[0].balance.as_ref().unwrap().to_f64().unwrap(), 2_500_000.0);
        assert_eq!(tokens[1].symbol, None);
    }

    #[test]
    fn test_solana_portfolio() {
        let portfolio: SolanaPortfolio = serde_json::from_value(json!({
            "nativeBalance": { "lamports": "2500000000", "solana": "2.5" },
            "tokens": [
                {
                    "associatedTokenAddress": "Dp2zQ...",
                    "mint": "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263",
                    "amountRaw": "100000",
                    "amount": "1",
                    "decimals": 5,
                    "name": "Bonk",
                    "symbol": "Bonk"
                }
            ],
            "nfts": []
        }))
        .unwrap();

        let native = portfolio.native_balance.unwrap();
        assert_eq!(native.solana.unwrap().to_f64().unwrap(), 2.5);
        assert_eq!(portfolio.tokens.unwrap()[0].symbol.as_deref(), Some("Bonk"));
    }

    #[test]
    fn test_solana_portfolio_empty_object() {
        let portfolio: SolanaPortfolio = serde_json::from_value(json!({})).unwrap();
        assert!(portfolio.native_balance.is_none());
        assert!(portfolio.tokens.is_none());
    }

    #[test]
    fn test_raw_amount_number() {
        assert_eq!(RawAmount::Number(3.0).to_f64().unwrap(), 3.0);
        assert!(RawAmount::Text("abc".to_string()).to_f64().is_err());
    }
}
