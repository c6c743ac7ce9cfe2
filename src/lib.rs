//! seqkit - Small total functions over ordered sequences
//!
//! This crate re-exports all layers of seqkit for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: seqkit_runtime    - Command language, session, REPL, CLI
//! Layer 2: seqkit_debug      - Invocation tracing, observability config
//! Layer 1: seqkit_stdlib     - The collection utilities and their registry
//! Layer 0: seqkit_foundation - Core types (Number, Value, Error)
//! ```

pub use seqkit_debug as debug;
pub use seqkit_foundation as foundation;
pub use seqkit_runtime as runtime;
pub use seqkit_stdlib as stdlib;
