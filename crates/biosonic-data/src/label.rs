//! Ground-truth labels derived from recording identifiers.
//!
//! Recordings are named `<genus>_<species>_<number>...`, so the true class can
//! be read off the identifier without looking at the prediction. Two naming
//! conventions exist in the wild and they disagree on casing and on how many
//! parts belong to the class name, hence [`LabelStrategy`].

use serde::{Deserialize, Serialize};

/// How a true class is read from an identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelStrategy {
    /// Every `_`-separated part before the first one containing a digit,
    /// joined with spaces and cased as found.
    ///
    /// `myotis_lucifugus_001` becomes `myotis lucifugus`.
    #[default]
    FirstDigit,
    /// The first two `_`-separated parts; the genus is capitalized and the
    /// species left as is.
    ///
    /// `myotis_lucifugus_001` becomes `Myotis lucifugus`.
    GenusSpecies,
}

impl LabelStrategy {
    /// Derives the true class for `id` using this strategy.
    pub fn extract(self, id: &str) -> String {
        extract_true_label(id, self)
    }
}

/// Derives the true class for an identifier.
///
/// The identifier is reduced to its file name without extension before it is
/// split, so `recordings/myotis_lucifugus_001.wav` and `myotis_lucifugus_001`
/// yield the same label.
pub fn extract_true_label(id: &str, strategy: LabelStrategy) -> String {
    let stem = identifier_stem(id);
    let parts: Vec<&str> = stem.split('_').collect();

    match strategy {
        LabelStrategy::FirstDigit => {
            let end = parts
                .iter()
                .position(|part| part.chars().any(|c| c.is_ascii_digit()))
                .unwrap_or(parts.len());
            parts[..end].join(" ")
        }
        LabelStrategy::GenusSpecies => {
            let genus = parts.first().map_or_else(String::new, |g| capitalize(g));
            match parts.get(1) {
                Some(species) => format!("{genus} {species}"),
                None => genus,
            }
        }
    }
}

/// Final path component of `id` with a trailing file extension removed.
fn identifier_stem(id: &str) -> &str {
    let name = id.rsplit(['/', '\\']).next().unwrap_or(id);
    match name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty() && !ext.is_empty() && ext.chars().all(char::is_alphanumeric) =>
        {
            stem
        }
        _ => name,
    }
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_digit_joins_parts_before_number() {
        assert_eq!(
            extract_true_label("myotis_lucifugus_001", LabelStrategy::FirstDigit),
            "myotis lucifugus"
        );
        assert_eq!(
            extract_true_label("myotis_lucifugus_001_segment3", LabelStrategy::FirstDigit),
            "myotis lucifugus"
        );
    }

    #[test]
    fn first_digit_keeps_case_and_longer_names() {
        assert_eq!(
            extract_true_label("Pipistrellus_pipistrellus_soprano_12", LabelStrategy::FirstDigit),
            "Pipistrellus pipistrellus soprano"
        );
    }

    #[test]
    fn first_digit_is_stable_across_numeric_suffixes() {
        let a = extract_true_label("bat_001", LabelStrategy::FirstDigit);
        let b = extract_true_label("bat_002", LabelStrategy::FirstDigit);
        assert_eq!(a, b);
        assert_eq!(a, "bat");
    }

    #[test]
    fn first_digit_edge_cases() {
        assert_eq!(extract_true_label("noise", LabelStrategy::FirstDigit), "noise");
        assert_eq!(
            extract_true_label("eptesicus_fuscus", LabelStrategy::FirstDigit),
            "eptesicus fuscus"
        );
        assert_eq!(extract_true_label("20230101_myotis", LabelStrategy::FirstDigit), "");
    }

    #[test]
    fn genus_species_capitalizes_genus_only() {
        assert_eq!(
            extract_true_label("myotis_lucifugus_001", LabelStrategy::GenusSpecies),
            "Myotis lucifugus"
        );
        assert_eq!(
            extract_true_label("MYOTIS_Lucifugus_001", LabelStrategy::GenusSpecies),
            "Myotis Lucifugus"
        );
        assert_eq!(
            extract_true_label("Pipistrellus_pipistrellus_soprano_12", LabelStrategy::GenusSpecies),
            "Pipistrellus pipistrellus"
        );
    }

    #[test]
    fn genus_species_with_single_part() {
        assert_eq!(extract_true_label("noise", LabelStrategy::GenusSpecies), "Noise");
        assert_eq!(extract_true_label("", LabelStrategy::GenusSpecies), "");
    }

    #[test]
    fn strategies_disagree_on_the_same_identifier() {
        let id = "myotis_lucifugus_001";
        assert_ne!(
            LabelStrategy::FirstDigit.extract(id),
            LabelStrategy::GenusSpecies.extract(id)
        );
    }

    #[test]
    fn path_and_extension_are_ignored() {
        for id in [
            "myotis_lucifugus_001.wav",
            "recordings/site_a/myotis_lucifugus_001.wav",
            r"C:\recordings\myotis_lucifugus_001.WAV",
        ] {
            assert_eq!(
                extract_true_label(id, LabelStrategy::FirstDigit),
                "myotis lucifugus",
                "id: {id}"
            );
        }
    }

    #[test]
    fn dotted_parts_are_not_treated_as_extensions() {
        assert_eq!(
            extract_true_label("myotis.sp_001", LabelStrategy::FirstDigit),
            "myotis.sp"
        );
    }

    #[test]
    fn strategy_serializes_in_kebab_case() {
        let json = serde_json::to_string(&LabelStrategy::GenusSpecies).unwrap();
        assert_eq!(json, "\"genus-species\"");
        let parsed: LabelStrategy = serde_json::from_str("\"first-digit\"").unwrap();
        assert_eq!(parsed, LabelStrategy::FirstDigit);
    }
}
