//! Word types.
//!
//! Primitives have fixed reference types. Library words are defined by
//! programs over earlier words and get the inferred type of their body.

use rustc_hash::FxHashMap;
use tracing::debug;

use hrank_syntax::parse_type;
use hrank_types::{CompositionOrder, Type};

use crate::{infer_program, CatError};

/// Reference types of the primitive instructions.
pub const PRIMITIVES: &[(&str, &str)] = &[
    ("apply", "((('a -> 'b) 'a) -> 'b)"),
    ("compose", "((('b -> 'c) (('a -> 'b) 'd)) -> (('a -> 'c) 'd))"),
    ("quote", "(('a 'b) -> (('c -> ('a 'c)) 'b))"),
    ("dup", "(('a 'b) -> ('a ('a 'b)))"),
    ("swap", "(('a ('b 'c)) -> ('b ('a 'c)))"),
    ("pop", "(('a 'b) -> 'b)"),
    ("id", "('a -> 'a)"),
];

/// Derived words in definition order. Each body only uses words above it.
pub const LIBRARY: &[(&str, &str)] = &[
    ("papply", "swap quote swap compose"),
    ("dip", "swap quote compose apply"),
    ("dipd", "swap [dip] dip"),
    ("popd", "[pop] dip"),
    ("pop2", "pop pop"),
    ("pop3", "pop pop pop"),
    ("dupd", "[dup] dip"),
    ("dupdd", "[dup] dipd"),
    ("swapd", "[swap] dip"),
    ("swapdd", "[swap] dipd"),
    ("rollup", "swap swapd"),
    ("rolldown", "swapd swap"),
    ("dup3", "dup dup"),
    ("dup4", "dup3 dup"),
    ("dup5", "dup4 dup"),
    ("dup6", "dup5 dup"),
    ("dup7", "dup6 dup"),
    ("dup8", "dup7 dup"),
];

/// Word name to stack-effect type, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct CatTypeEnv {
    words: Vec<(String, Type)>,
    index: FxHashMap<String, usize>,
}

impl CatTypeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the primitive instructions.
    pub fn primitives() -> Result<Self, CatError> {
        let mut env = Self::new();
        for &(word, ty) in PRIMITIVES {
            let ty = parse_type(ty).map_err(|err| CatError::Definition {
                word,
                source: Box::new(err.into()),
            })?;
            env.insert(word, ty);
        }
        Ok(env)
    }

    /// Primitives plus the library words.
    #[tracing::instrument(level = "debug")]
    pub fn standard() -> Result<Self, CatError> {
        let mut env = Self::primitives()?;
        for &(word, body) in LIBRARY {
            env.define(word, body, CompositionOrder::default())
                .map_err(|err| CatError::Definition {
                    word,
                    source: Box::new(err),
                })?;
        }
        Ok(env)
    }

    /// Infer `body` in this environment and bind the result to `word`.
    pub fn define(
        &mut self,
        word: &str,
        body: &str,
        order: CompositionOrder,
    ) -> Result<&Type, CatError> {
        let ty = infer_program(body, self, order)?;
        debug!(word, %ty, "defined");
        Ok(self.insert(word, ty))
    }

    /// Bind `word`, replacing an earlier binding in place.
    pub fn insert(&mut self, word: &str, ty: Type) -> &Type {
        let slot = match self.index.get(word) {
            Some(&slot) => {
                self.words[slot].1 = ty;
                slot
            }
            None => {
                let slot = self.words.len();
                self.words.push((word.to_owned(), ty));
                self.index.insert(word.to_owned(), slot);
                slot
            }
        };
        &self.words[slot].1
    }

    pub fn get(&self, word: &str) -> Option<&Type> {
        self.index.get(word).map(|&slot| &self.words[slot].1)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words and their types, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.words.iter().map(|(word, ty)| (word.as_str(), ty))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
