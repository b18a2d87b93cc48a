//! crates/logging/src/config.rs
//! Verbosity configuration for debug levels.

use super::levels::{DebugFlag, DebugLevels};

/// Verbosity configuration applied to the traversal diagnostics.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerbosityConfig {
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level (0-4).
    ///
    /// Each additional level unlocks finer-grained traversal output; levels
    /// above 4 behave like 4.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 => {}
            1 => {
                config.debug.walk = 1;
                config.debug.io = 1;
            }
            2 => {
                config.debug.walk = 1;
                config.debug.io = 1;
                config.debug.enter = 2;
                config.debug.depth = 2;
            }
            3 => {
                config.debug.walk = 2;
                config.debug.io = 1;
                config.debug.enter = 2;
                config.debug.depth = 2;
                config.debug.queue = 2;
                config.debug.own = 2;
            }
            _ => {
                config.debug.walk = 3;
                config.debug.io = 1;
                config.debug.enter = 2;
                config.debug.depth = 2;
                config.debug.queue = 3;
                config.debug.own = 2;
            }
        }

        config
    }

    /// Apply a single debug flag token (e.g., "walk3", "enter").
    ///
    /// The special name `all` sets every flag to the given level.
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        if name == "all" {
            self.debug.set_all(level);
            return Ok(());
        }

        let flag =
            DebugFlag::from_name(name).ok_or_else(|| format!("unknown debug flag: {name}"))?;
        self.debug.set(flag, level);
        Ok(())
    }

    /// Apply a comma separated list of debug flag tokens (e.g., "walk2,own").
    ///
    /// Tokens are applied left to right; the first invalid token aborts and
    /// leaves earlier tokens applied.
    pub fn apply_debug_flags(&mut self, tokens: &str) -> Result<(), String> {
        tokens
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .try_for_each(|token| self.apply_debug_flag(token))
    }
}

/// Parse a flag token like "walk2" into ("walk", 2) or "own" into ("own", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    let digit_start = token.find(|c: char| c.is_ascii_digit());

    match digit_start {
        Some(0) => Err(format!("missing flag name in: {token}")),
        Some(pos) => {
            let name = &token[..pos];
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((name, level))
        }
        None => Ok((token, 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_token() {
        assert_eq!(parse_flag_token("walk").unwrap(), ("walk", 1));
        assert_eq!(parse_flag_token("walk2").unwrap(), ("walk", 2));
        assert_eq!(parse_flag_token("queue10").unwrap(), ("queue", 10));
        assert!(parse_flag_token("").is_err());
        assert!(parse_flag_token("3").is_err());
        assert!(parse_flag_token("walk2x").is_err());
        assert!(parse_flag_token("walk999").is_err());
    }

    #[test]
    fn test_apply_debug_flag() {
        let mut config = VerbosityConfig::default();

        config.apply_debug_flag("enter").unwrap();
        assert_eq!(config.debug.enter, 1);

        config.apply_debug_flag("enter2").unwrap();
        assert_eq!(config.debug.enter, 2);

        config.apply_debug_flag("own3").unwrap();
        assert_eq!(config.debug.own, 3);

        assert!(config.apply_debug_flag("flist").is_err());
    }

    #[test]
    fn test_apply_all_sets_every_flag() {
        let mut config = VerbosityConfig::default();
        config.apply_debug_flag("all2").unwrap();
        for flag in DebugFlag::ALL {
            assert_eq!(config.debug.get(flag), 2);
        }
    }

    #[test]
    fn test_apply_debug_flags_list() {
        let mut config = VerbosityConfig::default();
        config.apply_debug_flags("walk2, depth ,,queue3").unwrap();
        assert_eq!(config.debug.walk, 2);
        assert_eq!(config.debug.depth, 1);
        assert_eq!(config.debug.queue, 3);

        let err = config.apply_debug_flags("io,bogus,own").unwrap_err();
        assert_eq!(err, "unknown debug flag: bogus");
        assert_eq!(config.debug.io, 1);
        assert_eq!(config.debug.own, 0);
    }

    #[test]
    fn test_from_verbose_level_0_is_silent() {
        assert_eq!(
            VerbosityConfig::from_verbose_level(0),
            VerbosityConfig::default()
        );
    }

    #[test]
    fn test_from_verbose_level_is_monotonic() {
        for level in 0..5u8 {
            let lower = VerbosityConfig::from_verbose_level(level);
            let higher = VerbosityConfig::from_verbose_level(level + 1);
            for flag in DebugFlag::ALL {
                assert!(
                    higher.debug.get(flag) >= lower.debug.get(flag),
                    "{flag:?} regressed between {level} and {}",
                    level + 1
                );
            }
        }
    }

    #[test]
    fn test_from_verbose_level_saturates() {
        assert_eq!(
            VerbosityConfig::from_verbose_level(4),
            VerbosityConfig::from_verbose_level(9)
        );
    }
}
