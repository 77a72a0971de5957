//! The generator: a Snowflake-style core with numeric and alphanumeric faces
//!
//! Both variants share one allocator built once from [`Settings`]; which face
//! a caller gets is decided by configuration, not by inspecting the values it
//! returns. Rebuilding the allocator per call would discard the sequence
//! counter and break monotonicity inside a tick.

use std::fmt;

use chrono::{DateTime, Utc};
use sonyflake::Sonyflake;

use crate::codec::AlphaCodec;
use crate::config::Settings;
use crate::error::{IdError, IdResult};

/// A generated identifier: a raw 64-bit value, or its salted alphanumeric
/// encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Id {
    Numeric(u64),
    Alpha(String),
}

impl Id {
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            Id::Numeric(id) => Some(*id),
            Id::Alpha(_) => None,
        }
    }

    pub fn as_alpha(&self) -> Option<&str> {
        match self {
            Id::Numeric(_) => None,
            Id::Alpha(encoded) => Some(encoded),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Numeric(id) => write!(f, "{id}"),
            Id::Alpha(encoded) => f.write_str(encoded),
        }
    }
}

/// The shared time-based core: elapsed time, per-tick sequence, machine-ID
/// bit field, serialized internally by the allocator.
struct FlakeCore {
    allocator: Sonyflake,
}

impl FlakeCore {
    fn from_settings(settings: &Settings) -> IdResult<Self> {
        let allocator = build_allocator(settings.epoch(), settings.machine_id.resolve()?)?;
        Ok(Self { allocator })
    }

    fn next_raw(&mut self) -> IdResult<u64> {
        self.allocator.next_id().map_err(|e| match e {
            sonyflake::Error::OverTimeLimit => IdError::ClockOverflow,
            other => IdError::Generate(other.to_string()),
        })
    }
}

fn build_allocator(epoch: DateTime<Utc>, machine_id: Option<u16>) -> IdResult<Sonyflake> {
    let result = match machine_id {
        Some(id) => Sonyflake::builder()
            .start_time(epoch)
            .machine_id(&move || Ok(id))
            .finalize(),
        None => Sonyflake::builder().start_time(epoch).finalize(),
    };
    result.map_err(|e| IdError::Config(format!("id allocator rejected settings: {e}")))
}

/// Produces raw 64-bit IDs.
pub struct NumericGenerator {
    core: FlakeCore,
}

impl NumericGenerator {
    pub fn next(&mut self) -> IdResult<u64> {
        self.core.next_raw()
    }
}

/// Produces alphanumeric-encoded IDs.
pub struct AlphaGenerator {
    core: FlakeCore,
    codec: AlphaCodec,
}

impl AlphaGenerator {
    pub fn next(&mut self) -> IdResult<String> {
        Ok(self.codec.encode(self.core.next_raw()?))
    }

    /// Recover the raw ID behind an encoded value minted with the same salt.
    pub fn decode(&self, input: &str) -> IdResult<u64> {
        self.codec.decode(input)
    }
}

/// A configured ID generator, numeric or alphanumeric.
pub enum Generator {
    Numeric(NumericGenerator),
    Alpha(AlphaGenerator),
}

impl Generator {
    /// Build a generator from settings. Fails with [`IdError::Config`] on an
    /// unresolvable machine ID, an epoch in the future, or bad encoding
    /// settings.
    pub fn new(settings: Settings) -> IdResult<Self> {
        let core = FlakeCore::from_settings(&settings)?;
        tracing::debug!(
            alphanumeric = settings.alphanumeric,
            machine_id = ?settings.machine_id,
            "id generator initialized"
        );
        if settings.alphanumeric {
            let codec = AlphaCodec::new(settings.salt())?;
            Ok(Generator::Alpha(AlphaGenerator { core, codec }))
        } else {
            Ok(Generator::Numeric(NumericGenerator { core }))
        }
    }

    /// The next identifier. Monotonically increasing per generator instance;
    /// blocks briefly when the per-tick sequence wraps.
    pub fn next(&mut self) -> IdResult<Id> {
        match self {
            Generator::Numeric(generator) => generator.next().map(Id::Numeric),
            Generator::Alpha(generator) => generator.next().map(Id::Alpha),
        }
    }

    /// Decode an alphanumeric ID minted by this generator.
    pub fn decode_alpha(&self, input: &str) -> IdResult<u64> {
        match self {
            Generator::Alpha(generator) => generator.decode(input),
            Generator::Numeric(_) => Err(IdError::Decode {
                input: input.to_owned(),
                reason: "generator is in numeric mode".into(),
            }),
        }
    }
}
