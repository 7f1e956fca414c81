use std::fmt;

use crate::DnaSequence;

/// Make "string-like" implementations of `serde::Deserialize` and
/// `serde::Serialize` for the given type, using that type's `Display` and
/// `FromStr` impls.
///
/// (This is used for example to serialize sequences as `"ACG"` rather than
/// `["A","C","G"]`.)
macro_rules! impl_stringlike {
    ($type:ty) => {
        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Helper;
                impl<'de> serde::de::Visitor<'de> for Helper {
                    type Value = $type;

                    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(formatter, "a string")
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        value
                            .parse::<Self::Value>()
                            .map_err(serde::de::Error::custom)
                    }
                }

                deserializer.deserialize_str(Helper)
            }
        }

        impl serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }
    };
}

impl_stringlike!(DnaSequence);

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::primer::{self, PrimerPair};
    use crate::{AnalysisConfig, DnaSequence};

    #[test]
    fn test_dna_serializes_as_string() {
        let dna = DnaSequence::from_str("ACGT").unwrap();
        assert_eq!(serde_json::to_string(&dna).unwrap(), "\"ACGT\"");
        let back: DnaSequence = serde_json::from_str("\"acgt\"").unwrap();
        assert_eq!(back, dna);
        assert!(serde_json::from_str::<DnaSequence>("\"ACGN\"").is_err());
    }

    #[test]
    fn test_primer_pair_json() {
        let seq = DnaSequence::from_str("GGGGGAAAAA").unwrap();
        let pair = primer::design(&seq, &AnalysisConfig::default()).unwrap();
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["forward"], "GGGGGAAAAA");
        assert_eq!(json["reverse"], "TTTTTCCCCC");
        let back: PrimerPair = serde_json::from_value(json).unwrap();
        assert_eq!(back, pair);
    }

    #[test]
    fn test_config_defaults_fill_in() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"primer_length": 20}"#).unwrap();
        assert_eq!(config.primer_length, 20);
        assert_eq!(config.gc_high_threshold, 60.0);
    }
}
