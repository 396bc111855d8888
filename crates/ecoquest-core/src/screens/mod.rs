//! Screen view-models.
//!
//! Each screen is a plain data structure built from a provisioned
//! `Session` snapshot plus a text renderer. Screens never mutate state;
//! mutations go through the store and screens are rebuilt afterwards.

mod community;
mod home;
mod profile;

pub use community::{ChallengeCard, CommunityView};
pub use home::{HomeView, TaskRow};
pub use profile::{BadgeCard, ProfileView};
