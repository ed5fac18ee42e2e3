//! # Alpha-Beta Connect Four
//!
//! Connect Four against a machine player that searches a fixed six plies
//! ahead with minimax and alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`] — Bitboard, win patterns, terminal classification, game state
//! - [`ai`] — Agent trait, alpha-beta search, terminal cache, heuristic
//! - [`arena`] — Agent-versus-agent matches
//! - [`ui`] — Terminal UI and line-based console
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
