//! invest-core: the investment-records ETL library.
//!
//! Two components make up the ETL path: the store's schema manager
//! (idempotent creation of the Investors/Assets/Investments tables) and
//! the row importer (lazy, validated reading of contact rows from a CSV
//! source). The runner binary in `tools/` wires them together.

pub mod config;
pub mod error;
pub mod importer;
pub mod model;
pub mod store;
pub mod textgen;
