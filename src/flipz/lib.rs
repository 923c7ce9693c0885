//! # Flipz Architecture
//!
//! Flipz is a **UI-agnostic flashcard library**. The terminal client is one
//! possible front-end; the deck model, navigation semantics, and persistence
//! contract all live in the library and would serve a GUI or web front-end
//! unchanged.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, runs the study loop, prints messages   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - FlipzApi: the deck controller facade                     │
//! │  - Contains persistence errors into the message channel     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns Result<CmdResult>      │
//! │  - No I/O assumptions beyond the DeckStore trait            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DeckStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Nothing in the Core Crashes the Session
//!
//! A missing deck file is the first-run state. A malformed file or a failed
//! save is reported on the message channel and the in-memory deck carries
//! on; there is no exit path from `api.rs` inward. Every operation on an
//! empty deck is a safe no-op.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`deck`]: The study session state machine (cursor + flip state)
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Card`, `Deck`, `Side`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod deck;
pub mod error;
pub mod model;
pub mod store;
