use crate::{error::Error, types::Token};
use std::{collections::HashMap, sync::LazyLock};

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;

pub static TOKEN_MAP: LazyLock<HashMap<String, Token>> = LazyLock::new(|| {
    parse_registry(include_str!("../assets/tokens.json"))
        .expect("Failed to deserialize token registry")
});

pub(crate) fn parse_registry(json: &str) -> Result<HashMap<String, Token>, Error> {
    serde_json::from_str(json).map_err(Error::from)
}
