use log::debug;

use crate::domain::{PairedPlayer, Pairing, PlayerRecord};

/// Pairs the next round from standings already sorted best first.
///
/// Neighbours in the standings meet each other: (0, 1), (2, 3), ... with the
/// higher-ranked player listed first. With an odd count the lowest-ranked
/// player sits out with a bye, which is always the last pairing.
pub fn swiss_pairings(standings: &[PlayerRecord]) -> Vec<Pairing> {
    let (contenders, bye) = split_bye(standings);

    let mut pairings: Vec<Pairing> = contenders
        .chunks_exact(2)
        .map(|pair| Pairing::game(PairedPlayer::from(&pair[0]), PairedPlayer::from(&pair[1])))
        .collect();

    if let Some(player) = bye {
        debug!("Player {} ({}) receives a bye", player.id, player.name);
        pairings.push(Pairing::bye(PairedPlayer::from(player)));
    }

    pairings
}

fn split_bye(standings: &[PlayerRecord]) -> (&[PlayerRecord], Option<&PlayerRecord>) {
    if standings.len() % 2 == 0 {
        return (standings, None);
    }

    match standings.split_last() {
        Some((last, rest)) => (rest, Some(last)),
        None => (standings, None),
    }
}
