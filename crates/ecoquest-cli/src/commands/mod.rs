//! CLI command modules.
//!
//! State lives in memory only, so every invocation provisions a fresh
//! session from the seed data plus config overrides. The `session`
//! command keeps one provisioning scope alive across multiple inputs.

pub mod badge;
pub mod screen;
pub mod session;
pub mod task;
pub mod user;

use ecoquest_core::{Config, Session, StateStore};

/// Provision a session from config overrides over the seed data.
pub(crate) fn open_session() -> Result<Session, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut session = Session::new();
    session.provision_with(StateStore::with_user(config.seed_user()));
    Ok(session)
}
