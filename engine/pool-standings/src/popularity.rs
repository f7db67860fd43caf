//! Pick popularity: which golfers the pool drafted most, counted by
//! unique participant.

use crate::types::Participant;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How many distinct participants picked one golfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickCount {
    pub name: String,
    pub count: usize,
}

/// A most-picked golfer with their share of the pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularPick {
    pub name: String,
    pub count: usize,
    /// Percent of participants who picked this golfer
    pub percentage: f64,
}

/// Count distinct participants per picked golfer, most-picked first.
/// A participant picking the same golfer in two slots counts once.
/// Equal counts order by name so the result is deterministic.
pub fn pick_popularity(participants: &[Participant]) -> Vec<PickCount> {
    let mut pickers: HashMap<&str, HashSet<&str>> = HashMap::new();

    for participant in participants {
        for pick in participant.filled_picks() {
            pickers.entry(pick).or_default().insert(participant.username.as_str());
        }
    }

    let mut counts: Vec<PickCount> = pickers
        .into_iter()
        .map(|(name, users)| PickCount { name: name.to_string(), count: users.len() })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    counts
}

/// The `limit` most-picked golfers with their pick percentage relative
/// to the pool size.
pub fn top_picked(participants: &[Participant], limit: usize) -> Vec<PopularPick> {
    let pool_size = participants.len();
    pick_popularity(participants)
        .into_iter()
        .take(limit)
        .map(|pc| PopularPick {
            percentage: if pool_size == 0 {
                0.0
            } else {
                pc.count as f64 / pool_size as f64 * 100.0
            },
            name: pc.name,
            count: pc.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(username: &str, picks: &[&str]) -> Participant {
        Participant::new(username, picks.iter().map(|p| Some(p.to_string())).collect())
    }

    #[test]
    fn test_counts_unique_participants() {
        let participants = vec![
            participant("u1", &["Scheffler", "McIlroy"]),
            participant("u2", &["Scheffler", "Scheffler"]),
            participant("u3", &["McIlroy"]),
        ];

        let counts = pick_popularity(&participants);
        assert_eq!(counts[0], PickCount { name: "McIlroy".to_string(), count: 2 });
        assert_eq!(counts[1], PickCount { name: "Scheffler".to_string(), count: 2 });
    }

    #[test]
    fn test_top_picked_percentage_uses_pool_size() {
        let participants = vec![
            participant("u1", &["Scheffler"]),
            participant("u2", &["Scheffler"]),
            participant("u3", &["McIlroy"]),
            participant("u4", &["Aberg"]),
        ];

        let top = top_picked(&participants, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "Scheffler");
        assert_eq!(top[0].percentage, 50.0);
    }

    #[test]
    fn test_empty_pool() {
        assert!(pick_popularity(&[]).is_empty());
        assert!(top_picked(&[], 3).is_empty());
    }
}
