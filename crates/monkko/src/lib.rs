//! The `monkko` command line tool.
//!
//! Loads `monkko.config.json`, finds `*.monkko.ts` schema files, extracts
//! their `defineSchema` declarations and writes TypeScript types and Zod
//! validators for them.

pub mod commands;
pub mod config;
pub mod filter;
pub mod finder;
