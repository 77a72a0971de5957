//! Salted reversible alphanumeric encoding
//!
//! A hashids-style transform: the same salt maps a number to the same short
//! opaque string and back; a different salt fails to decode or yields an
//! unrelated number. This is obfuscation, not encryption.

use harsh::Harsh;

use crate::error::{IdError, IdResult};

/// Encoder/decoder pair keyed by a salt.
pub struct AlphaCodec {
    harsh: Harsh,
}

impl AlphaCodec {
    pub fn new(salt: &str) -> IdResult<Self> {
        let harsh = Harsh::builder().salt(salt).build().map_err(|e| {
            IdError::Config(format!("invalid alphanumeric encoding settings: {e}"))
        })?;
        Ok(Self { harsh })
    }

    pub fn encode(&self, id: u64) -> String {
        self.harsh.encode(&[id])
    }

    pub fn decode(&self, input: &str) -> IdResult<u64> {
        let values = self.harsh.decode(input).map_err(|e| IdError::Decode {
            input: input.to_owned(),
            reason: e.to_string(),
        })?;
        match values.as_slice() {
            [id] => Ok(*id),
            _ => Err(IdError::Decode {
                input: input.to_owned(),
                reason: format!("expected one value, found {}", values.len()),
            }),
        }
    }
}
