//! Runtime configuration from environment variables.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::pacer::Pacing;

/// Runtime knobs; compile-time constants live in the types crate.
///
/// | Variable | Meaning | Default |
/// |----------|---------|---------|
/// | `ARCADE_SEED` | RNG seed | derived from the wall clock |
/// | `ARCADE_LOG_PATH` | JSON-lines event log | off |
/// | `ARCADE_PACING` | `spin` or `sleep` | `sleep` |
/// | `ARCADE_MAX_FRAMES` | stop after this many rendered frames | unlimited |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcadeConfig {
    pub seed: u32,
    pub log_path: Option<String>,
    pub pacing: Pacing,
    pub max_frames: Option<u64>,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            log_path: None,
            pacing: Pacing::Sleep,
            max_frames: None,
        }
    }
}

impl ArcadeConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let seed = get("ARCADE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = get("ARCADE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let pacing = get("ARCADE_PACING")
            .and_then(|s| Pacing::from_str(&s))
            .unwrap_or_default();

        let max_frames = get("ARCADE_MAX_FRAMES")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &u64| n > 0);

        Self {
            seed,
            log_path,
            pacing,
            max_frames,
        }
    }
}

fn clock_seed() -> u32 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (d.as_secs() as u32) ^ d.subsec_nanos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> ArcadeConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ArcadeConfig::from_vars(|k| vars.get(k).cloned())
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("ARCADE_SEED", "42"),
            ("ARCADE_LOG_PATH", " /tmp/arcade.jsonl "),
            ("ARCADE_PACING", "spin"),
            ("ARCADE_MAX_FRAMES", "300"),
        ]);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/arcade.jsonl"));
        assert_eq!(cfg.pacing, Pacing::Spin);
        assert_eq!(cfg.max_frames, Some(300));
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config(&[
            ("ARCADE_LOG_PATH", "   "),
            ("ARCADE_PACING", "turbo"),
            ("ARCADE_MAX_FRAMES", "0"),
        ]);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.pacing, Pacing::Sleep);
        assert_eq!(cfg.max_frames, None);
    }
}
