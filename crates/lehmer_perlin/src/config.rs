//! # Noise Configuration
//!
//! Generator settings loaded once at startup from TOML:
//!
//! ```toml
//! seed = 123456789
//! ```
//!
//! TOML integers are signed 64-bit, so seeds above `i64::MAX` are written
//! as strings. Both decimal and `0x` hex strings are accepted on read:
//!
//! ```toml
//! seed = "0xdeadbeefcafebabe"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};
use crate::noise::PerlinNoise;
use crate::seed::NoiseSeed;

/// Construction settings for a [`PerlinNoise`] generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseConfig {
    /// Seed for the permutation table.
    #[serde(default = "default_seed", with = "seed_format")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    NoiseSeed::default().value()
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

impl NoiseConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] if the text is not valid TOML,
    /// the seed is neither a non-negative integer nor a decimal/hex string
    /// that fits in a `u64`, or unknown keys are present.
    pub fn from_toml_str(text: &str) -> NoiseResult<Self> {
        toml::from_str(text).map_err(|e| NoiseError::InvalidConfig(e.message().to_owned()))
    }

    /// Serializes the config to TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] if TOML serialization fails.
    pub fn to_toml_string(&self) -> NoiseResult<String> {
        toml::to_string(self).map_err(|e| NoiseError::InvalidConfig(e.to_string()))
    }

    /// Returns the configured seed.
    #[must_use]
    pub const fn seed(&self) -> NoiseSeed {
        NoiseSeed::new(self.seed)
    }

    /// Builds the generator described by this config.
    #[must_use]
    pub fn build(&self) -> PerlinNoise {
        tracing::debug!(seed = self.seed, "building noise generator from config");
        PerlinNoise::new(self.seed())
    }

    /// Builds an independent generator for a secondary noise layer.
    ///
    /// Each `layer` gets its own seed derived from the configured one, so a
    /// single config can drive several uncorrelated fields.
    #[must_use]
    pub fn build_layer(&self, layer: u64) -> PerlinNoise {
        let seed = self.seed().derive(layer);
        tracing::debug!(seed = self.seed, layer, derived = seed.value(), "building noise layer");
        PerlinNoise::new(seed)
    }
}

/// TOML encoding of `u64` seeds: integers while they fit in `i64`,
/// `0x` hex strings above that.
mod seed_format {
    use std::fmt;

    use serde::de::{self, Unexpected, Visitor};
    use serde::{Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(seed: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        if i64::try_from(*seed).is_ok() {
            serializer.serialize_u64(*seed)
        } else {
            serializer.serialize_str(&format!("{seed:#x}"))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        deserializer.deserialize_any(SeedVisitor)
    }

    struct SeedVisitor;

    impl Visitor<'_> for SeedVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative integer, or a decimal or 0x-hex string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            parse_seed(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
        }
    }

    /// Parses `"123"`, `"1_000"` or `"0xDEAD_BEEF"`.
    pub(super) fn parse_seed(text: &str) -> Option<u64> {
        let digits: String = text.trim().chars().filter(|&c| c != '_').collect();
        match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => digits.parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        let config = NoiseConfig::from_toml_str("seed = 123456789").unwrap();
        assert_eq!(config.seed, 123_456_789);
        assert_eq!(config.seed(), NoiseSeed::new(123_456_789));
    }

    #[test]
    fn test_missing_seed_uses_default() {
        let config = NoiseConfig::from_toml_str("").unwrap();
        assert_eq!(config, NoiseConfig::default());
        assert_eq!(config.seed(), NoiseSeed::default());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = NoiseConfig::from_toml_str("seed = 1\noctaves = 4").unwrap_err();
        assert!(matches!(err, NoiseError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_negative_seed() {
        let err = NoiseConfig::from_toml_str("seed = -5").unwrap_err();
        assert!(matches!(err, NoiseError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_bad_syntax() {
        assert!(NoiseConfig::from_toml_str("seed = ").is_err());
    }

    #[test]
    fn test_write_then_read() {
        let config = NoiseConfig { seed: 42 };
        let text = config.to_toml_string().unwrap();
        assert_eq!(NoiseConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_default_config_roundtrips() {
        let config = NoiseConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(text.trim(), "seed = \"0xdeadbeefcafebabe\"");
        assert_eq!(NoiseConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_max_seed_roundtrips() {
        let config = NoiseConfig { seed: u64::MAX };
        let text = config.to_toml_string().unwrap();
        assert_eq!(NoiseConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_seed_written_as_integer_while_it_fits() {
        let config = NoiseConfig {
            seed: i64::MAX as u64,
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(text.trim(), "seed = 9223372036854775807");
        assert_eq!(NoiseConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_string_seeds() {
        let parse = |text: &str| NoiseConfig::from_toml_str(text).unwrap().seed;
        assert_eq!(parse(r#"seed = "18446744073709551615""#), u64::MAX);
        assert_eq!(parse(r#"seed = "0xDEAD_BEEF_CAFE_BABE""#), 0xDEAD_BEEF_CAFE_BABE);
        assert_eq!(parse(r#"seed = "123_456_789""#), 123_456_789);
        assert_eq!(parse("seed = 0xff"), 255);
    }

    #[test]
    fn test_rejects_bad_string_seeds() {
        for text in [
            r#"seed = "18446744073709551616""#,
            r#"seed = "0x""#,
            r#"seed = "twelve""#,
            r#"seed = "-1""#,
        ] {
            let err = NoiseConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, NoiseError::InvalidConfig(_)), "{text}");
        }
    }

    #[test]
    fn test_parse_seed_forms() {
        assert_eq!(seed_format::parse_seed(" 42 "), Some(42));
        assert_eq!(seed_format::parse_seed("0Xff"), Some(255));
        assert_eq!(seed_format::parse_seed(""), None);
    }

    #[test]
    fn test_layers_are_independent_fields() {
        let config = NoiseConfig { seed: 123_456_789 };
        let base = config.build();
        let layer1 = config.build_layer(1);
        let layer2 = config.build_layer(2);

        assert_eq!(layer1.table(), config.build_layer(1).table());
        assert_ne!(layer1.table(), layer2.table());
        assert_ne!(layer1.table(), base.table());
        assert_eq!(
            layer1.table(),
            PerlinNoise::new(NoiseSeed::new(123_456_789).derive(1)).table()
        );
    }

    #[test]
    fn test_build_matches_direct_construction() {
        let config = NoiseConfig { seed: 7 };
        let from_config = config.build();
        let direct = PerlinNoise::new(NoiseSeed::new(7));
        assert_eq!(from_config.table(), direct.table());
    }
}
