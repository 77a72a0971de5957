//! saltkit-id: unique-ID generation
//!
//! Pipeline: Snowflake-style allocator → 64-bit ID → optional salted
//! alphanumeric encoding
//!
//! A generator is built once from [`Settings`] and then called repeatedly;
//! the allocator packs elapsed time since the configured epoch, a per-tick
//! sequence counter, and a machine identifier into every value, so sequential
//! calls on one generator yield strictly increasing IDs. In alphanumeric mode
//! the raw number is additionally run through a reversible hashids-style
//! transform keyed by a salt.

pub mod codec;
pub mod config;
pub mod error;
pub mod generator;
pub mod machine;

pub use codec::AlphaCodec;
pub use config::{default_epoch, Settings, DEFAULT_SALT};
pub use error::{IdError, IdResult};
pub use generator::{AlphaGenerator, Generator, Id, NumericGenerator};
pub use machine::MachineId;
