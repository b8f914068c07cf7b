use std::collections::HashSet;
use log::debug;

use super::types::{PlayerStanding, Standings};
use crate::config::RankingSettings;
use crate::domain::{Match, Player, TournamentId};
use crate::errors::RankingError;

/// Folds the match history into per-category standings.
///
/// Precondition: every match's winner is one of its two players. This function does
/// not check it; a violating record skews the tallies. Run [`validate_matches`] first
/// when the records come from an untrusted source.
///
/// Players without matches are left out, as are matches whose players are unknown.
/// Within a category, players with equal points keep their order in `players`.
pub fn aggregate(players: &[Player], matches: &[Match], settings: &RankingSettings) -> Standings {
    let mut standings = Standings::new();

    for player in players {
        if let Some(standing) = tally_player(player, matches, settings) {
            standings
                .entry(player.category.clone())
                .or_default()
                .push(standing);
        }
    }

    for (category, rows) in standings.iter_mut() {
        // Stable, so ties stay in input order.
        rows.sort_by(|a, b| b.points.cmp(&a.points));
        debug!("Category {}: {} ranked players", category, rows.len());
    }

    standings
}

/// Rejects the first match whose winner is not one of its two players.
pub fn validate_matches(matches: &[Match]) -> Result<(), RankingError> {
    match matches.iter().find(|m| !m.has_consistent_winner()) {
        Some(m) => Err(RankingError::InvalidMatchRecord {
            match_id: m.id,
            winner_id: m.winner_id,
            first_player_id: m.first_player_id,
            second_player_id: m.second_player_id,
        }),
        None => Ok(()),
    }
}

fn tally_player(
    player: &Player,
    matches: &[Match],
    settings: &RankingSettings,
) -> Option<PlayerStanding> {
    let played: Vec<&Match> = matches.iter().filter(|m| m.involves(player.id)).collect();
    if played.is_empty() {
        return None;
    }

    let won = played.iter().filter(|m| m.is_won_by(player.id)).count() as u32;
    let finals_won = played
        .iter()
        .filter(|m| m.is_won_by(player.id) && m.round_is(&settings.final_round_label))
        .count() as u32;
    let tournaments: HashSet<TournamentId> = played.iter().map(|m| m.tournament_id).collect();
    let matches_played = played.len() as u32;

    Some(PlayerStanding {
        player_id: player.id,
        name: player.full_name.clone(),
        category: player.category.clone(),
        points: calculate_points(matches_played, won, finals_won, settings),
        matches_played,
        matches_won: won,
        tournaments_played: tournaments.len() as u32,
        tournaments_won: finals_won,
    })
}

fn calculate_points(played: u32, won: u32, finals_won: u32, settings: &RankingSettings) -> u32 {
    settings.participation_points * played
        + settings.win_points * won
        + settings.final_win_points * finals_won
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn game(id: i64, tournament_id: i64, first: i64, second: i64, winner: i64, round: &str) -> Match {
        Match {
            id,
            tournament_id,
            first_player_id: first,
            second_player_id: second,
            winner_id: winner,
            date: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            round: Some(round.to_string()),
        }
    }

    fn standing_of(standings: &Standings, player_id: i64) -> &PlayerStanding {
        standings
            .values()
            .flatten()
            .find(|s| s.player_id == player_id)
            .unwrap()
    }

    #[test]
    fn test_points_for_three_matches_with_final_win() {
        let players = vec![Player::new(1, "Ana", "A"), Player::new(2, "Bea", "A")];
        let matches = vec![
            game(1, 1, 1, 2, 1, "Cuartos"),
            game(2, 1, 1, 2, 1, "Final"),
            game(3, 2, 2, 1, 2, "Semifinal"),
        ];

        let standings = aggregate(&players, &matches, &RankingSettings::default());
        let ana = standing_of(&standings, 1);

        assert_eq!(ana.points, 430);
        assert_eq!(ana.matches_played, 3);
        assert_eq!(ana.matches_won, 2);
        assert_eq!(ana.tournaments_won, 1);
        assert_eq!(ana.tournaments_played, 2);
    }

    #[test]
    fn test_loser_of_final_gets_participation_only() {
        let players = vec![Player::new(1, "Ana", "A"), Player::new(2, "Bea", "A")];
        let matches = vec![game(1, 1, 1, 2, 1, "Final")];

        let standings = aggregate(&players, &matches, &RankingSettings::default());
        let bea = standing_of(&standings, 2);

        assert_eq!(bea.points, 10);
        assert_eq!(bea.tournaments_won, 0);
        assert_eq!(bea.tournaments_played, 1);
    }

    #[test]
    fn test_players_without_matches_are_not_ranked() {
        let players = vec![
            Player::new(1, "Ana", "A"),
            Player::new(2, "Bea", "A"),
            Player::new(3, "Cloe", "B"),
        ];
        let matches = vec![game(1, 1, 1, 2, 2, "Cuartos")];

        let standings = aggregate(&players, &matches, &RankingSettings::default());

        assert_eq!(standings.len(), 1);
        assert_eq!(standings["A"].len(), 2);
        assert!(!standings.contains_key("B"));
    }

    #[test]
    fn test_no_matches_yields_no_categories() {
        let players = vec![Player::new(1, "Ana", "A")];
        let standings = aggregate(&players, &[], &RankingSettings::default());
        assert!(standings.is_empty());
    }

    #[test]
    fn test_grouped_by_player_category_and_sorted() {
        let players = vec![
            Player::new(1, "Ana", "B"),
            Player::new(2, "Bea", "A"),
            Player::new(3, "Cloe", "A"),
        ];
        let matches = vec![
            game(1, 1, 1, 2, 1, "Cuartos"),
            game(2, 1, 2, 3, 3, "Final"),
        ];

        let standings = aggregate(&players, &matches, &RankingSettings::default());
        let categories: Vec<&str> = standings.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["A", "B"]);

        let a_ids: Vec<i64> = standings["A"].iter().map(|s| s.player_id).collect();
        assert_eq!(a_ids, vec![3, 2]);
        assert_eq!(standings["B"][0].player_id, 1);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let players = vec![
            Player::new(9, "Zoe", "A"),
            Player::new(1, "Ana", "A"),
            Player::new(5, "Eva", "A"),
        ];
        let matches = vec![
            game(1, 1, 9, 1, 9, "Cuartos"),
            game(2, 1, 1, 5, 1, "Cuartos"),
            game(3, 1, 5, 9, 5, "Cuartos"),
        ];

        let standings = aggregate(&players, &matches, &RankingSettings::default());
        let ids: Vec<i64> = standings["A"].iter().map(|s| s.player_id).collect();

        assert_eq!(ids, vec![9, 1, 5]);
    }

    #[test]
    fn test_empty_category_is_its_own_bucket() {
        let players = vec![Player::new(1, "Ana", ""), Player::new(2, "Bea", "A")];
        let matches = vec![game(1, 1, 1, 2, 1, "Cuartos")];

        let standings = aggregate(&players, &matches, &RankingSettings::default());

        assert_eq!(standings[""][0].player_id, 1);
        assert_eq!(standings["A"][0].player_id, 2);
    }

    #[test]
    fn test_inconsistent_winner_miscounts_without_validation() {
        let players = vec![Player::new(1, "Ana", "A"), Player::new(2, "Bea", "A")];
        let matches = vec![game(1, 1, 1, 2, 3, "Final")];

        let standings = aggregate(&players, &matches, &RankingSettings::default());

        // Nobody is credited with the win.
        assert_eq!(standing_of(&standings, 1).points, 10);
        assert_eq!(standing_of(&standings, 2).points, 10);
        assert!(validate_matches(&matches).is_err());
    }

    #[test]
    fn test_validate_reports_offending_match() {
        let matches = vec![
            game(1, 1, 1, 2, 1, "Cuartos"),
            game(2, 1, 3, 4, 5, "Final"),
        ];

        let err = validate_matches(&matches).unwrap_err();

        assert_eq!(
            err,
            RankingError::InvalidMatchRecord {
                match_id: 2,
                winner_id: 5,
                first_player_id: 3,
                second_player_id: 4,
            }
        );
    }

    #[test]
    fn test_custom_final_label() {
        let settings = RankingSettings {
            final_round_label: "Grand Final".to_string(),
            ..RankingSettings::default()
        };
        let players = vec![Player::new(1, "Ana", "A"), Player::new(2, "Bea", "A")];
        let matches = vec![
            game(1, 1, 1, 2, 1, "Final"),
            game(2, 2, 1, 2, 1, "Grand Final"),
        ];

        let standings = aggregate(&players, &matches, &settings);

        assert_eq!(standing_of(&standings, 1).points, 10 * 2 + 100 * 2 + 200);
        assert_eq!(standing_of(&standings, 1).tournaments_won, 1);
    }
}
