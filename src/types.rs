use serde::{Deserialize, Serialize};

/// One entry of the compiled-in token registry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
}
