use duel_battle::{Battle, BattleConfig, BattleView, EventRecorder, Phase, Selection, Weather};
use duel_protocol::{BattleEvent, Player, parse_transcript};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Play a seeded battle to the end with random human moves
async fn play_out(seed: u64) -> Battle<EventRecorder> {
    let config = BattleConfig {
        seed: Some(seed),
        ..BattleConfig::default()
    };
    let mut battle = Battle::from_config(&config, EventRecorder::new()).unwrap();
    let mut picker = SmallRng::seed_from_u64(seed.wrapping_add(1));

    battle.start().await;
    while !battle.is_finished() && battle.turn() < config.max_rounds {
        let moves = battle.combatant(Player::P1).moves.clone();
        let choice = moves.choose(&mut picker).unwrap();
        let outcome = battle.select_move(Player::P1, choice).await;
        assert_eq!(outcome, Selection::Resolved);
    }

    battle
}

#[tokio::test]
async fn test_seeded_battle_finishes() {
    let battle = play_out(11).await;

    assert!(battle.is_finished());
    let winner = battle.winner().unwrap();
    assert!(battle.combatant(winner).is_alive());
    assert_eq!(battle.combatant(winner.opponent()).hp, 0);

    let recorder = battle.presenter();
    assert_eq!(recorder.count(|e| matches!(e, BattleEvent::Win { .. })), 1);
    assert_eq!(recorder.count(|e| matches!(e, BattleEvent::Faint(_))), 1);
}

#[tokio::test]
async fn test_same_seed_same_transcript() {
    let first = play_out(5).await;
    let second = play_out(5).await;

    assert_eq!(
        first.presenter().to_transcript(),
        second.presenter().to_transcript()
    );
}

#[tokio::test]
async fn test_hp_stays_in_bounds() {
    for seed in 0..20 {
        let battle = play_out(seed).await;

        for event in battle.presenter().events() {
            if let BattleEvent::Health { player, hp, .. } = event {
                assert!(*hp <= battle.combatant(*player).hp_max);
            }
        }
    }
}

#[tokio::test]
async fn test_replay_matches_final_state() {
    let battle = play_out(23).await;
    let transcript = battle.presenter().to_transcript();

    let events = parse_transcript(&transcript).unwrap();
    assert_eq!(events, battle.presenter().events());

    let view = BattleView::from_events(&events);
    for player in Player::BOTH {
        assert_eq!(view.side(player).hp, Some(battle.combatant(player).hp));
    }
    assert_eq!(view.weather, battle.weather());
    assert_eq!(view.round, battle.turn());
    assert!(view.unknown.is_empty());

    let Phase::Finished { winner } = battle.phase() else {
        panic!("battle did not finish");
    };
    let name = battle.combatant(winner).name().to_string();
    assert_eq!(view.winner, Some((winner, name)));
}

#[tokio::test]
async fn test_weather_never_outlasts_timer() {
    let battle = play_out(42).await;
    let field = &battle.state().field;

    if field.weather == Weather::Clear {
        assert_eq!(field.weather_turns, 0);
    } else {
        assert!(field.weather_turns >= 1 && field.weather_turns <= 5);
    }
}
