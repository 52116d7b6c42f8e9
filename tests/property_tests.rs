//! Property tests over whole games played by random providers.

use proptest::prelude::*;
use xeno_engine::decision::{numbered, RandomProvider};
use xeno_engine::{Composition, DecisionKind, EndReason, Game, GameBuilder, PlayerId};

fn random_game(seed: u64, players: usize) -> Game {
    let builder = (0..players).fold(GameBuilder::new(players), |b, seat| {
        b.seat(RandomProvider::new(seed ^ ((seat as u64 + 1) << 8)), numbered("cpu"))
    });
    builder.build(seed).unwrap()
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    /// Every game ends, and every player is either a winner or a loser.
    #[test]
    fn prop_games_terminate(seed in any::<u64>(), players in 2usize..=8) {
        let mut game = random_game(seed, players);
        let result = game.run().unwrap();

        prop_assert_eq!(result.winners.len() + result.losers.len(), players);
        for p in PlayerId::all(players) {
            prop_assert!(result.winners.contains(&p) != result.losers.contains(&p));
        }
        prop_assert!(game.state().alive_count() >= 1 || result.winners.is_empty());
    }

    /// Same seed, same providers: same record.
    #[test]
    fn prop_games_are_deterministic(seed in any::<u64>(), players in 2usize..=8) {
        let mut a = random_game(seed, players);
        let mut b = random_game(seed, players);
        a.run().unwrap();
        b.run().unwrap();
        prop_assert_eq!(a.into_record(), b.into_record());
    }

    /// Cards are never created or destroyed.
    #[test]
    fn prop_cards_are_conserved(seed in any::<u64>(), players in 2usize..=8) {
        let mut game = random_game(seed, players);
        game.run().unwrap();

        let state = game.state();
        prop_assert!(state.check_conservation().is_ok());
        prop_assert_eq!(state.census(), Composition::reference().counts());
    }

    /// Once a player is seen eliminated, no later view shows it alive.
    #[test]
    fn prop_elimination_is_permanent(seed in any::<u64>(), players in 3usize..=8) {
        let mut game = random_game(seed, players);
        game.run().unwrap();
        let record = game.into_record().unwrap();

        let mut dead = vec![false; players];
        for (_, decision) in record.log.chronological() {
            for opponent in &decision.view.opponents {
                let i = opponent.player.index();
                prop_assert!(!(dead[i] && opponent.alive), "{} came back", opponent.player);
                dead[i] |= !opponent.alive;
            }
        }
        if record.result.reason == EndReason::LastStanding {
            for &winner in record.winners() {
                prop_assert!(!dead[winner.index()]);
            }
        }
    }

    /// Turns pass in fixed cyclic order, skipping only eliminated players.
    #[test]
    fn prop_turn_order_is_stable(seed in any::<u64>(), players in 2usize..=8) {
        let mut game = random_game(seed, players);
        game.run().unwrap();
        let record = game.into_record().unwrap();

        let plays: Vec<_> = record
            .log
            .chronological()
            .into_iter()
            .filter(|(_, d)| d.kind == DecisionKind::PlayCard)
            .collect();

        for pair in plays.windows(2) {
            let (a, _) = pair[0];
            let (b, next) = pair[1];
            prop_assert_ne!(a, b);

            let mut i = (a.index() + 1) % players;
            while i != b.index() {
                let skipped = PlayerId::from_index(i);
                let seen = next.view.opponent(skipped).unwrap();
                prop_assert!(!seen.alive, "{} was skipped while alive", skipped);
                i = (i + 1) % players;
            }
        }
    }

    /// A view only carries what its owner may know.
    #[test]
    fn prop_views_are_filtered(seed in any::<u64>(), players in 2usize..=8) {
        let mut game = random_game(seed, players);
        game.run().unwrap();
        let record = game.into_record().unwrap();

        for (player, decision) in record.log.chronological() {
            let view = &decision.view;
            prop_assert_eq!(view.me, player);
            prop_assert_eq!(view.opponents.len(), players - 1);
            prop_assert!(view.opponents.iter().all(|o| o.player != player));
            prop_assert!(view.predictions.iter().all(|p| p.involves(player)));
            prop_assert!(view.hand.len() <= 2);
        }
    }
}
