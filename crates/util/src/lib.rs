//! weight-avl-util - Test helpers for weight-avl
//!
//! Seeded generation of insert/delete operation scripts, so a failing
//! randomized run can be replayed from its seed or from the recorded JSON.

pub mod fuzzer;
pub mod ops;

pub use fuzzer::Fuzzer;
pub use ops::{from_json, to_json, Op, ScriptConfig};
