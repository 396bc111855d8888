//! Screen rendering commands: home, community, profile.

use ecoquest_core::{CommunityView, HomeView, LeaderboardScope, ProfileView};

use super::open_session;

pub fn run_home(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session()?;
    let view = HomeView::build(&session)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.render());
    }
    Ok(())
}

pub fn run_community(scope: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let scope: LeaderboardScope = scope.parse()?;
    let session = open_session()?;
    let view = CommunityView::build(&session, scope)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.render());
    }
    Ok(())
}

pub fn run_profile(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session()?;
    let view = ProfileView::build(&session)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.render());
    }
    Ok(())
}
