//! Leaderboard ranking — sorted by total return, dense 1-based ranks.
//!
//! Ties keep header order (the sort is stable) and still receive distinct
//! ranks: rank is simply the position in the sorted list.

use std::cmp::Ordering;

use crate::domain::Participant;

/// Drop blank-named participants, sort best return first, assign ranks `1..=n`.
pub fn rank_participants(participants: Vec<Participant>) -> Vec<Participant> {
    let mut ranked: Vec<Participant> = participants
        .into_iter()
        .filter(|p| !p.has_blank_name())
        .collect();

    // Sort descending by total return (best first).
    ranked.sort_by(|a, b| {
        b.total_return_pct
            .partial_cmp(&a.total_return_pct)
            .unwrap_or(Ordering::Equal)
    });

    for (i, p) in ranked.iter_mut().enumerate() {
        p.rank = Some(i + 1);
    }
    ranked
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HoldingsSource, ParticipantId, STARTING_CAPITAL};

    fn make_participant(name: &str, total_return_pct: f64) -> Participant {
        Participant {
            id: ParticipantId::from_name(name),
            name: name.into(),
            column: 1,
            total_return_pct,
            day_change_pct: 0.0,
            portfolio_value: STARTING_CAPITAL,
            total_pnl: 0.0,
            holdings: vec![],
            source: HoldingsSource::SummaryBlock,
            rank: None,
        }
    }

    #[test]
    fn sorted_best_first_with_dense_ranks() {
        let ranked = rank_participants(vec![
            make_participant("a", 1.0),
            make_participant("b", 5.0),
            make_participant("c", -2.0),
        ]);
        let names: Vec<_> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        let ranks: Vec<_> = ranked.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn ties_keep_input_order_and_distinct_ranks() {
        let ranked = rank_participants(vec![
            make_participant("first", 3.0),
            make_participant("second", 3.0),
            make_participant("third", 3.0),
        ]);
        let names: Vec<_> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(ranked[2].rank, Some(3));
    }

    #[test]
    fn blank_names_are_dropped() {
        let ranked = rank_participants(vec![
            make_participant("  ", 50.0),
            make_participant("real", 1.0),
        ]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "real");
        assert_eq!(ranked[0].rank, Some(1));
    }

    #[test]
    fn empty_input() {
        assert!(rank_participants(vec![]).is_empty());
    }
}
