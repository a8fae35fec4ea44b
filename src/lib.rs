//! tagxfer - Table-driven Transfer for Tagged Streams
//!
//! Rule-based structural and lexical transfer between two morphologically
//! tagged languages. Input is apertium-style analyzer output; chunks of tags
//! are mapped through a pattern table, stems are realigned to the target tags
//! and translated through a bilingual dictionary.

pub mod cli;
pub mod config;
pub mod direction;
pub mod error;
pub mod tables;
pub mod transfer;
pub mod workflow;

pub use direction::Direction;
pub use error::{Result, TransferError};
pub use transfer::{TransferEngine, UNKNOWN_TAGS, UNKNOWN_WORD};
