//! Integration tests for the tournament lifecycle against an in-memory store:
//! registration, reporting, standings and pairing.

mod common;

use common::{fresh_service, register_all};
use swiss_tournament::{Score, TournamentError};

#[test]
fn test_count_after_register_and_delete() {
    let service = fresh_service();
    assert_eq!(service.count_players().unwrap(), 0);

    register_all(&service, &["Chandra Nalaar", "Jace Beleren"]);
    assert_eq!(service.count_players().unwrap(), 2);

    service.delete_players().unwrap();
    assert_eq!(service.count_players().unwrap(), 0);
}

#[test]
fn test_blank_name_rejected() {
    let service = fresh_service();

    let err = service.register_player("   ").unwrap_err();

    assert!(matches!(err, TournamentError::InvalidState(_)));
    assert_eq!(service.count_players().unwrap(), 0);
}

#[test]
fn test_duplicate_names_allowed() {
    let service = fresh_service();
    let ids = register_all(&service, &["Sam", "Sam"]);

    assert_ne!(ids[0], ids[1]);
    assert_eq!(service.count_players().unwrap(), 2);
}

#[test]
fn test_standings_before_any_match() {
    let service = fresh_service();
    register_all(&service, &["Melpomene Murray", "Randy Schwartz"]);

    let standings = service.player_standings().unwrap();

    assert_eq!(standings.len(), 2);
    assert!(standings.iter().all(|r| r.score == Score::ZERO && r.played == 0));
    assert_eq!(standings[0].name, "Melpomene Murray");
}

#[test]
fn test_decisive_result_updates_statistics() {
    let service = fresh_service();
    let ids = register_all(&service, &["Winner", "Loser"]);

    service.report_match(ids[0], Some(ids[1]), false).unwrap();

    let winner = service.player(ids[0]).unwrap();
    let loser = service.player(ids[1]).unwrap();
    assert_eq!((winner.score, winner.played), (Score::from_points(1), 1));
    assert_eq!((loser.score, loser.played), (Score::ZERO, 1));

    let history = service.match_history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].first_player_id, ids[0]);
    assert_eq!(history[0].second_player_id, ids[1]);
    assert_eq!(history[0].winner_id, Some(ids[0]));
    assert!(history[0].played_at.is_some());
}

#[test]
fn test_draw_splits_the_point() {
    let service = fresh_service();
    let ids = register_all(&service, &["Left", "Right"]);

    service.report_match(ids[0], Some(ids[1]), true).unwrap();

    for id in &ids {
        let record = service.player(*id).unwrap();
        assert_eq!(record.score, Score::DRAW);
        assert_eq!(record.score.as_f64(), 0.5);
        assert_eq!(record.played, 1);
    }

    let history = service.match_history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].winner_id, None);
}

#[test]
fn test_bye_counts_as_played_but_not_as_match() {
    let service = fresh_service();
    let ids = register_all(&service, &["Resting"]);

    service.report_match(ids[0], None, false).unwrap();

    let record = service.player(ids[0]).unwrap();
    assert_eq!(record.score, Score::WIN);
    assert_eq!(record.played, 1);
    assert!(service.match_history().unwrap().is_empty());
}

#[test]
fn test_invalid_reports() {
    let service = fresh_service();
    let ids = register_all(&service, &["Only"]);

    assert!(matches!(
        service.report_match(ids[0], Some(ids[0]), false),
        Err(TournamentError::InvalidState(_))
    ));
    assert!(matches!(
        service.report_match(ids[0], None, true),
        Err(TournamentError::InvalidState(_))
    ));
    assert!(matches!(
        service.report_match(ids[0], Some(9_999), false),
        Err(TournamentError::NotFound(9_999))
    ));
    assert!(matches!(service.player(9_999), Err(TournamentError::NotFound(9_999))));

    let record = service.player(ids[0]).unwrap();
    assert_eq!(record.played, 0);
}

#[test]
fn test_delete_matches_resets_statistics() {
    let service = fresh_service();
    let ids = register_all(&service, &["A", "B", "C"]);
    service.report_match(ids[0], Some(ids[1]), false).unwrap();
    service.report_match(ids[2], None, false).unwrap();

    service.delete_matches().unwrap();

    assert!(service.match_history().unwrap().is_empty());
    assert_eq!(service.count_players().unwrap(), 3);
    let standings = service.player_standings().unwrap();
    assert!(standings.iter().all(|r| r.score == Score::ZERO && r.played == 0));
}

#[test]
fn test_pairings_follow_standings() {
    let service = fresh_service();
    let ids = register_all(&service, &["Twilight Sparkle", "Fluttershy", "Applejack", "Pinkie Pie"]);

    service.report_match(ids[0], Some(ids[1]), false).unwrap();
    service.report_match(ids[2], Some(ids[3]), false).unwrap();

    let pairings = service.swiss_pairings().unwrap();

    assert_eq!(pairings.len(), 2);
    let pairs: Vec<(i64, Option<i64>)> = pairings
        .iter()
        .map(|p| (p.first.id, p.second.as_ref().map(|s| s.id)))
        .collect();
    assert_eq!(pairs, vec![(ids[0], Some(ids[2])), (ids[1], Some(ids[3]))]);
}

#[test]
fn test_three_rounds_with_byes() {
    let service = fresh_service();
    let ids = register_all(&service, &["A", "B", "C", "D", "E"]);

    for _ in 0..3 {
        for pairing in service.swiss_pairings().unwrap() {
            let loser = pairing.second.as_ref().map(|p| p.id);
            service.report_match(pairing.first.id, loser, false).unwrap();
        }
    }

    let standings = service.player_standings().unwrap();
    assert_eq!(standings.len(), ids.len());
    assert!(standings.iter().all(|r| r.played == 3));
    assert!(standings.iter().all(|r| r.score.half_points() <= 2 * r.played));
    assert!(standings.windows(2).all(|w| w[0].score >= w[1].score));

    let total = standings
        .iter()
        .fold(Score::ZERO, |acc, r| acc + r.score);
    // Two decisive games and one bye per round
    assert_eq!(total, Score::from_points(9));
    assert_eq!(service.match_history().unwrap().len(), 6);
}

#[test]
fn test_reset_clears_the_store() {
    let service = fresh_service();
    register_all(&service, &["A", "B"]);

    service.reset().unwrap();

    assert_eq!(service.count_players().unwrap(), 0);
    assert!(service.swiss_pairings().unwrap().is_empty());
}
