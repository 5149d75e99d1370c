use crate::types::Token;
use std::{collections::HashMap, ops::Deref, sync::Arc};

/// The compiled-in token registry, shared through context so every page reads
/// the same map.
#[derive(Clone, Debug)]
pub struct TokenMap(pub Arc<HashMap<String, Token>>);

impl TokenMap {
    pub fn new(token_map: HashMap<String, Token>) -> Self {
        Self(Arc::new(token_map))
    }
}

impl Deref for TokenMap {
    type Target = HashMap<String, Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<HashMap<String, Token>> for TokenMap {
    fn as_ref(&self) -> &HashMap<String, Token> {
        &self.0
    }
}
