//! # Passloom Architecture
//!
//! Passloom generates master passphrases for password managers by sampling
//! the obscure end of a ranked word list, mixing in user-supplied words,
//! and optionally sprinkling capitals and symbols over the result.
//!
//! The crate is a library with a thin CLI client on top:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                             │
//! │  - Parses arguments, prints progress and the password      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes│
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Generator Layer (generator/)                              │
//! │  - Assembles, shuffles, capitalizes, inserts symbols       │
//! │  - Returns a structured GenReport, never prints            │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Word List Layer (wordlist.rs)                             │
//! │  - Loads the ranked corpus, applies the obscurity cut      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Randomness
//!
//! Every random operation takes `&mut R where R: Rng`. The binary seeds a
//! `StdRng` from entropy (or from `--seed`); tests pass
//! `StdRng::seed_from_u64(..)` so the whole pipeline is reproducible.
//!
//! ## Module Overview
//!
//! - [`wordlist`]: ranked word list loading and obscurity filtering
//! - [`generator`]: password assembly and post-processing
//! - [`model`]: core data types (`WordEntry`, `GenOptions`)
//! - [`error`]: error types

pub mod error;
pub mod generator;
pub mod model;
pub mod wordlist;
