use crate::error::{AppError, Result};

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Record kind assumed when NORMALIZE_KIND is unset.
pub const DEFAULT_KIND: RecordKind = RecordKind::Bet;

/// How the input document should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Bet,
    Bets,
    Round,
    TotalWon,
    FutureRound,
}

impl std::str::FromStr for RecordKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(RecordKind::User),
            "bet" => Ok(RecordKind::Bet),
            "bets" => Ok(RecordKind::Bets),
            "round" => Ok(RecordKind::Round),
            "total-won" | "total_won" => Ok(RecordKind::TotalWon),
            "future-round" | "future_round" => Ok(RecordKind::FutureRound),
            other => Err(AppError::Config(format!(
                "NORMALIZE_KIND must be one of user, bet, bets, round, total-won, future-round (got {other:?})"
            ))),
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RecordKind::User => "user",
            RecordKind::Bet => "bet",
            RecordKind::Bets => "bets",
            RecordKind::Round => "round",
            RecordKind::TotalWon => "total-won",
            RecordKind::FutureRound => "future-round",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub kind: RecordKind,
    /// Read from this file instead of stdin (NORMALIZE_INPUT)
    pub input_path: Option<String>,
    /// Pretty-print the output JSON (NORMALIZE_PRETTY)
    pub pretty: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            log_level: get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            kind: match get("NORMALIZE_KIND") {
                Some(k) => k.parse()?,
                None => DEFAULT_KIND,
            },
            input_path: get("NORMALIZE_INPUT")
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            pretty: get("NORMALIZE_PRETTY")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.kind, RecordKind::Bet);
        assert!(cfg.input_path.is_none());
        assert!(!cfg.pretty);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            ("LOG_LEVEL", "debug"),
            ("NORMALIZE_KIND", "Total-Won"),
            ("NORMALIZE_INPUT", " rounds.json "),
            ("NORMALIZE_PRETTY", "true"),
        ])
        .unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.kind, RecordKind::TotalWon);
        assert_eq!(cfg.input_path.as_deref(), Some("rounds.json"));
        assert!(cfg.pretty);
    }

    #[test]
    fn empty_input_path_means_stdin() {
        let cfg = config(&[("NORMALIZE_INPUT", "  ")]).unwrap();
        assert!(cfg.input_path.is_none());
    }

    #[test]
    fn unknown_kind_is_a_config_error() {
        assert!(matches!(
            config(&[("NORMALIZE_KIND", "market")]),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn kind_display_parses_back() {
        for kind in [
            RecordKind::User,
            RecordKind::Bet,
            RecordKind::Bets,
            RecordKind::Round,
            RecordKind::TotalWon,
            RecordKind::FutureRound,
        ] {
            assert_eq!(kind.to_string().parse::<RecordKind>().unwrap(), kind);
        }
    }
}
