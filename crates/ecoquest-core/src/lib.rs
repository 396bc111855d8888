//! # EcoQuest Core Library
//!
//! This library provides the core logic for EcoQuest, a gamified
//! habit tracker for daily eco-friendly tasks. It implements a
//! CLI-first philosophy where all operations are available via a
//! standalone CLI binary, with any GUI being a thin layer over the
//! same core library.
//!
//! ## Architecture
//!
//! - **State store**: an explicit, owned container for the player and
//!   the daily task list, reached through a provisioning `Session`
//! - **Level engine**: a pure four-tier derivation from impact points
//! - **Screens**: view-models for the home, community, and profile
//!   screens, rebuilt after each mutation
//! - **Events**: every effective mutation produces a `StateEvent` that
//!   consumers poll to know when to re-render
//!
//! ## Key Components
//!
//! - [`StateStore`]: single source of truth for player and tasks
//! - [`Session`]: provisioning scope with a typed not-provisioned error
//! - [`Level`]: point-to-tier step function
//! - [`Config`]: TOML-based profile configuration

pub mod badge;
pub mod community;
pub mod config;
pub mod error;
pub mod events;
pub mod level;
pub mod screens;
pub mod store;
pub mod task;
pub mod user;

pub use badge::{seed_badges, Badge};
pub use community::{
    ranked_leaderboard, seed_challenges, seed_leaderboard, Challenge, LeaderboardEntry,
    LeaderboardScope, RankedEntry,
};
pub use config::Config;
pub use error::{ConfigError, CoreError, Result};
pub use events::StateEvent;
pub use level::Level;
pub use screens::{CommunityView, HomeView, ProfileView};
pub use store::{Session, StateSnapshot, StateStore};
pub use task::{seed_tasks, Task, TaskCategory};
pub use user::{User, UserPatch};
