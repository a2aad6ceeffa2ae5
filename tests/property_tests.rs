//! Property tests for undo/redo and the win condition.

use proptest::prelude::*;

use score_counter::core::{GameSettings, Player, PlayerColor, PlayerId, StoreConfig};
use score_counter::rules::determine_winner;
use score_counter::store::Store;
use uuid::Uuid;

/// A mutation drawn by proptest. Player references are indices into the
/// current player list (wrapped), or an unknown id when the list is empty.
#[derive(Clone, Debug)]
enum Op {
    Add,
    Remove(usize),
    Score(usize, i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        any::<usize>().prop_map(Op::Remove),
        (any::<usize>(), -50i64..50).prop_map(|(i, d)| Op::Score(i, d)),
    ]
}

fn target(store: &Store, index: usize) -> PlayerId {
    let players = &store.current_game().players;
    if players.is_empty() {
        PlayerId(Uuid::nil())
    } else {
        players[index % players.len()].id
    }
}

fn run(store: &mut Store, op: &Op) {
    match op {
        Op::Add => {
            store.add_player("P");
        }
        Op::Remove(i) => {
            let id = target(store, *i);
            store.remove_player(id);
        }
        Op::Score(i, d) => {
            let id = target(store, *i);
            store.update_score(id, *d);
        }
    }
}

fn players_strategy() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec(-100i64..100, 0..8).prop_map(|scores| {
        scores
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                Player::new(PlayerId(Uuid::from_u128(i as u128 + 1)), "P", PlayerColor::for_index(i))
                    .with_score(s)
            })
            .collect()
    })
}

fn settings_strategy() -> impl Strategy<Value = GameSettings> {
    (prop::option::of(-100i64..100), any::<bool>()).prop_map(|(max_score, is_reversed)| {
        GameSettings {
            increment_value: 1,
            max_score,
            is_reversed,
        }
    })
}

proptest! {
    /// Undo right after any mutation restores the prior game exactly, and
    /// redo brings back the mutated one.
    #[test]
    fn prop_undo_then_redo_is_exact(history in prop::collection::vec(op(), 0..20), last in op()) {
        let mut store = Store::new(StoreConfig::new().with_id_seed(1).with_undo_limit(None));
        for op in &history {
            run(&mut store, op);
        }

        let before = store.current_game().clone();
        run(&mut store, &last);
        let after = store.current_game().clone();

        prop_assert!(store.undo());
        prop_assert_eq!(store.current_game(), &before);

        prop_assert!(store.redo());
        prop_assert_eq!(store.current_game(), &after);
    }

    /// Undoing everything walks back to the empty starting game.
    #[test]
    fn prop_full_undo_reaches_start(history in prop::collection::vec(op(), 0..20)) {
        let mut store = Store::new(StoreConfig::new().with_id_seed(2).with_undo_limit(None));
        let start = store.current_game().clone();
        for op in &history {
            run(&mut store, op);
        }

        while store.undo() {}

        prop_assert_eq!(store.current_game(), &start);
        prop_assert_eq!(store.redo_depth(), history.len());
    }

    /// +d followed by -d keeps the score and adds two log entries.
    #[test]
    fn prop_opposite_deltas_cancel(start in -1000i64..1000, delta in -1000i64..1000) {
        let mut store = Store::new(StoreConfig::new().with_id_seed(3));
        let id = store.add_player("P");
        store.update_score(id, start);
        let logged = store.find_player(id).map(|p| p.history.len());

        store.update_score(id, delta);
        store.update_score(id, -delta);

        let player = store.find_player(id).unwrap();
        prop_assert_eq!(player.score, start);
        prop_assert_eq!(Some(player.history.len()), logged.map(|n| n + 2));
    }

    /// The win rule is a pure function.
    #[test]
    fn prop_winner_is_idempotent(players in players_strategy(), settings in settings_strategy()) {
        let first = determine_winner(&players, &settings);
        let second = determine_winner(&players, &settings);
        prop_assert_eq!(first, second);
    }

    /// A declared winner always satisfies the threshold and is extremal.
    #[test]
    fn prop_winner_satisfies_threshold(players in players_strategy(), settings in settings_strategy()) {
        match determine_winner(&players, &settings) {
            None => {
                if let (Some(max), false) = (settings.max_score, players.is_empty()) {
                    let best = if settings.is_reversed {
                        players.iter().map(|p| p.score).min()
                    } else {
                        players.iter().map(|p| p.score).max()
                    };
                    let best = best.unwrap();
                    let below_threshold = if settings.is_reversed { best > max } else { best < max };
                    prop_assert!(below_threshold);
                }
            }
            Some(winner) => {
                let max = settings.max_score.unwrap();
                if settings.is_reversed {
                    prop_assert!(winner.score <= max);
                    prop_assert!(players.iter().all(|p| p.score >= winner.score));
                } else {
                    prop_assert!(winner.score >= max);
                    prop_assert!(players.iter().all(|p| p.score <= winner.score));
                }
                let first = players.iter().find(|p| p.score == winner.score).unwrap();
                prop_assert_eq!(first.id, winner.id);
            }
        }
    }
}
