//! Loading battle configuration from JSON

use std::path::Path;

use anyhow::{Context, Result};
use duel_battle::{BattleConfig, MoveCatalog};
use tracing::debug;

/// Parse and validate a JSON config; missing fields take their defaults
pub fn parse_config(json: &str) -> Result<BattleConfig> {
    let config: BattleConfig = serde_json::from_str(json).context("Invalid battle config")?;
    config
        .validate(&MoveCatalog::builtin())
        .context("Battle config failed validation")?;
    Ok(config)
}

/// Read a config file, or the defaults when no path is given
pub async fn load_config(path: Option<&Path>) -> Result<BattleConfig> {
    let Some(path) = path else {
        return Ok(BattleConfig::default());
    };

    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config {}", path.display()))?;

    let config =
        parse_config(&json).with_context(|| format!("Failed to load {}", path.display()))?;
    debug!(path = %path.display(), p1 = %config.p1, p2 = %config.p2, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_battle::ConfigError;
    use duel_protocol::Player;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(r#"{"human": "p2", "seed": 9}"#).unwrap();

        assert_eq!(config.human, Player::P2);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.p1, "magnemite");
        assert_eq!(config.weather_turns, 5);
    }

    #[test]
    fn test_parse_empty_object() {
        assert_eq!(parse_config("{}").unwrap(), BattleConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_creature() {
        let err = parse_config(r#"{"p2": "pikachu"}"#).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::UnknownCreature("pikachu".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_zero_weather_turns() {
        let err = parse_config(r#"{"weather_turns": 0}"#).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidWeatherTurns(0))
        );
    }

    #[test]
    fn test_parse_rejects_bad_json() {
        let err = parse_config("{ not json").unwrap_err();
        assert!(err.to_string().contains("Invalid battle config"));
    }

    #[tokio::test]
    async fn test_load_defaults_without_path() {
        let config = load_config(None).await.unwrap();
        assert_eq!(config, BattleConfig::default());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_config(Some(Path::new("/nonexistent/duel.json")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/duel.json"));
    }
}
