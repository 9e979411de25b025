#[cfg(test)]
mod tests {
    use crate::{AnimationCue, BattleEvent, ParseError, Player, parse_event, parse_transcript};

    #[test]
    fn test_parse_health() {
        let message = parse_event("|health|p2|35|15").unwrap();

        assert_eq!(
            message,
            BattleEvent::Health {
                player: Player::P2,
                hp: 35,
                damage: 15
            }
        );
    }

    #[test]
    fn test_parse_health_invalid_number() {
        let result = parse_event("|health|p2|lots|15");
        let err = result.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_unknown_player() {
        let err = parse_event("|faint|p3").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::UnknownPlayer(p)) if p == "p3"
        ));
    }

    #[test]
    fn test_parse_attack_cues() {
        assert_eq!(
            parse_event("|attack|p1|move|Electroball").unwrap(),
            BattleEvent::Attack {
                player: Player::P1,
                cue: AnimationCue::Move("Electroball".into())
            }
        );
        assert_eq!(
            parse_event("|attack|p2|slp").unwrap(),
            BattleEvent::Attack {
                player: Player::P2,
                cue: AnimationCue::Asleep
            }
        );
        assert_eq!(
            parse_event("|attack|p2|confused").unwrap(),
            BattleEvent::Attack {
                player: Player::P2,
                cue: AnimationCue::Confused
            }
        );
        assert!(parse_event("|attack|p2|dance").is_err());
        assert!(parse_event("|attack|p2|move|").is_err());
    }

    #[test]
    fn test_parse_announce_keeps_separators() {
        let message = parse_event("|announce|a|b").unwrap();

        assert_eq!(message, BattleEvent::Announce("a|b".into()));
    }

    #[test]
    fn test_parse_announce_missing() {
        assert!(parse_event("|announce").is_err());
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(
            parse_event("|input|p1|off").unwrap(),
            BattleEvent::Input {
                player: Player::P1,
                enabled: false
            }
        );
        assert!(parse_event("|input|p1|maybe").is_err());
    }

    #[test]
    fn test_parse_weather() {
        assert_eq!(
            parse_event("|weather|rain|clear").unwrap(),
            BattleEvent::Weather {
                condition: "rain".into(),
                previous: "clear".into()
            }
        );
        assert_eq!(
            parse_event("|weathercontinues|sun").unwrap(),
            BattleEvent::WeatherContinues("sun".into())
        );
        assert!(parse_event("|weather|rain").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let message = parse_event("|someunknown|data").unwrap();

        assert_eq!(message, BattleEvent::Raw("|someunknown|data".to_string()));
    }

    #[test]
    fn test_parse_empty() {
        let message = parse_event("").unwrap();

        assert_eq!(message, BattleEvent::Raw("".to_string()));
    }

    #[test]
    fn test_wire_format_is_parseable() {
        let events = vec![
            BattleEvent::Win {
                player: Player::P1,
                name: "Magnemite".into(),
            },
            BattleEvent::Attack {
                player: Player::P2,
                cue: AnimationCue::Asleep,
            },
            BattleEvent::Input {
                player: Player::P1,
                enabled: true,
            },
        ];

        let text = crate::to_transcript(&events);
        assert_eq!(text.lines().count(), 3);
        assert_eq!(parse_transcript(&text).unwrap(), events);
    }

    #[test]
    fn test_parse_transcript_skips_blank_lines() {
        let text = "|damage|p1\n\n|faint|p1\n";
        let events = parse_transcript(text).unwrap();

        assert_eq!(
            events,
            vec![BattleEvent::Damage(Player::P1), BattleEvent::Faint(Player::P1)]
        );
    }
}
