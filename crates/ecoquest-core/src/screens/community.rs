//! Community screen: weekly challenges and the leaderboard.

use serde::Serialize;
use std::fmt::Write as _;

use crate::community::{ranked_leaderboard, seed_challenges, LeaderboardScope, RankedEntry};
use crate::error::Result;
use crate::store::Session;

/// One challenge card.
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeCard {
    pub title: String,
    pub description: String,
    pub participants: u32,
    pub progress: f64,
}

/// The community screen view-model.
#[derive(Debug, Clone, Serialize)]
pub struct CommunityView {
    /// Selected scope tab. Ephemeral UI state; does not filter the
    /// leaderboard dataset.
    pub scope: LeaderboardScope,
    pub challenges: Vec<ChallengeCard>,
    pub leaderboard: Vec<RankedEntry>,
}

impl CommunityView {
    /// Build from a provisioned session with the given scope tab.
    pub fn build(session: &Session, scope: LeaderboardScope) -> Result<Self> {
        let user_points = session.store()?.user().points;
        Ok(Self {
            scope,
            challenges: seed_challenges()
                .into_iter()
                .map(|c| ChallengeCard {
                    title: c.title,
                    description: c.description,
                    participants: c.participants,
                    progress: c.progress,
                })
                .collect(),
            leaderboard: ranked_leaderboard(scope, user_points),
        })
    }

    /// Render as terminal text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Community \u{1F30D}");
        let _ = writeln!(out, "Connect and compete for a better planet");
        let _ = writeln!(out);
        let _ = writeln!(out, "Weekly Challenges \u{2694}\u{FE0F}");
        for challenge in &self.challenges {
            let _ = writeln!(out, "  {} - {}", challenge.title, challenge.description);
            let _ = writeln!(
                out,
                "    {} participants, {:.0}% complete",
                challenge.participants,
                challenge.progress * 100.0
            );
        }
        let _ = writeln!(out);
        let tabs: Vec<String> = LeaderboardScope::ALL
            .iter()
            .map(|s| {
                if *s == self.scope {
                    format!("[{s}]")
                } else {
                    s.to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "Leaderboard \u{1F3C6}  {}", tabs.join(" "));
        for entry in &self.leaderboard {
            let marker = if entry.you { " <- you" } else { "" };
            let _ = writeln!(
                out,
                "  #{:<2} {:<12} {:>5} pts{marker}",
                entry.rank, entry.name, entry.points
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn build_requires_a_provisioned_session() {
        let session = Session::new();
        assert!(matches!(
            CommunityView::build(&session, LeaderboardScope::School),
            Err(CoreError::NotProvisioned)
        ));
    }

    #[test]
    fn you_row_shows_live_points() {
        let mut session = Session::new();
        session.provision();
        let store = session.store_mut().unwrap();
        store.complete_task("6"); // 25
        store.complete_task("7"); // 40

        let view = CommunityView::build(&session, LeaderboardScope::Friends).unwrap();
        let you = view.leaderboard.iter().find(|e| e.you).unwrap();
        assert_eq!(you.points, 40);
    }

    #[test]
    fn render_highlights_active_tab_and_you() {
        let mut session = Session::new();
        session.provision();

        let text = CommunityView::build(&session, LeaderboardScope::City)
            .unwrap()
            .render();
        assert!(text.contains("Friends School [City]"));
        assert!(text.contains("<- you"));
        assert!(text.contains("Zero-Waste Week"));
        assert!(text.contains("120 participants, 40% complete"));
    }
}
