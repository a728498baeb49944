//! Directory-wide CSV search: load each file, apply column-scoped substring
//! filters, aggregate the matches, and export them collision-safely.
//!
//! The library is front-end agnostic: [`session::SearchSession`] is the
//! request-scoped contract any interactive form or batch driver talks to,
//! and the `data`, `search`, and `export` modules behind it are plain
//! function calls with no presentation concern.

pub mod cli;
pub mod data;
pub mod error;
pub mod export;
pub mod search;
pub mod session;
