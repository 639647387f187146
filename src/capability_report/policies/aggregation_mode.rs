use serde::Deserialize;

/// How application sets flow up the capability hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AggregationMode {
    /// Every node contributes its direct applications to all of its ancestors
    #[default]
    Transitive,
    /// Every node contributes its direct applications to its parent only
    ImmediateParent,
}

impl std::str::FromStr for AggregationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transitive" => Ok(AggregationMode::Transitive),
            "immediate-parent" | "immediate" => Ok(AggregationMode::ImmediateParent),
            _ => Err(format!(
                "Invalid aggregation mode: {}. Please specify 'transitive' or 'immediate-parent'",
                s
            )),
        }
    }
}

impl std::fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationMode::Transitive => write!(f, "transitive"),
            AggregationMode::ImmediateParent => write!(f, "immediate-parent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_is_transitive() {
        assert_eq!(AggregationMode::default(), AggregationMode::Transitive);
    }

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!(
            AggregationMode::from_str("Transitive").unwrap(),
            AggregationMode::Transitive
        );
        assert_eq!(
            AggregationMode::from_str("immediate-parent").unwrap(),
            AggregationMode::ImmediateParent
        );
        assert_eq!(
            AggregationMode::from_str("IMMEDIATE").unwrap(),
            AggregationMode::ImmediateParent
        );
    }

    #[test]
    fn test_from_str_invalid() {
        let error = AggregationMode::from_str("grandparent").unwrap_err();
        assert!(error.contains("grandparent"));
        assert!(error.contains("transitive"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in [AggregationMode::Transitive, AggregationMode::ImmediateParent] {
            assert_eq!(AggregationMode::from_str(&mode.to_string()).unwrap(), mode);
        }
    }

    #[test]
    fn test_deserialize_kebab_case() {
        let mode: AggregationMode = serde_yaml_ng::from_str("immediate-parent").unwrap();
        assert_eq!(mode, AggregationMode::ImmediateParent);
    }
}
