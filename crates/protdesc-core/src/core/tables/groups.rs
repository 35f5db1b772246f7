use super::TableError;
use crate::core::models::alphabet::{ALPHABET_SIZE, AminoAcid};
use std::sync::LazyLock;

/// Built-in three-group partitions used by the CTD descriptors, in output order.
const CTD_PARTITIONS: [(&str, [&str; 3]); 7] = [
    ("Hydrophobicity", ["RKEDQN", "GASTPHY", "CLVIMFW"]),
    ("NormalizedVDWV", ["GASTPDC", "NVEQIL", "MHKFRYW"]),
    ("Polarity", ["LIFWCMVY", "PATGS", "HQRKNED"]),
    ("Charge", ["KR", "ANCQGHILMFPSTWYV", "DE"]),
    ("SecondaryStr", ["EALMQKRH", "VIYCWFT", "GNPSD"]),
    ("SolventAccessibility", ["ALFCGIVW", "RKQEND", "MPSTHY"]),
    ("Polarizability", ["GASDT", "CPNVEQIL", "KMHFRYW"]),
];

static CTD_DEFAULTS: LazyLock<Vec<GroupTable>> = LazyLock::new(|| {
    CTD_PARTITIONS
        .iter()
        .map(|(name, groups)| {
            GroupTable::from_groups(*name, *groups)
                .unwrap_or_else(|e| panic!("built-in CTD partition is malformed: {e}"))
        })
        .collect()
});

/// Assignment of every residue to exactly one of three groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTable {
    name: String,
    // Group label (1, 2 or 3) per residue index.
    labels: [u8; ALPHABET_SIZE],
}

impl GroupTable {
    pub fn from_groups(name: impl Into<String>, groups: [&str; 3]) -> Result<Self, TableError> {
        let name = name.into();
        let invalid = |reason: String| TableError::InvalidGroupTable {
            name: name.clone(),
            reason,
        };

        let mut labels = [0u8; ALPHABET_SIZE];
        for (group, letters) in (1u8..).zip(groups) {
            for letter in letters.chars() {
                let aa = AminoAcid::from_letter(letter)
                    .ok_or_else(|| invalid(format!("unknown residue '{letter}'")))?;
                if labels[aa.index()] != 0 {
                    return Err(invalid(format!(
                        "residue '{letter}' appears in more than one group"
                    )));
                }
                labels[aa.index()] = group;
            }
        }
        if let Some(aa) = AminoAcid::ALL.into_iter().find(|aa| labels[aa.index()] == 0) {
            return Err(invalid(format!(
                "residue '{}' is not assigned to any group",
                aa.letter()
            )));
        }
        Ok(Self { name, labels })
    }

    pub fn standard(name: &str) -> Result<Self, TableError> {
        CTD_PARTITIONS
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| TableError::UnknownTable(name.to_string()))
            .and_then(|(n, groups)| Self::from_groups(*n, *groups))
    }

    /// The seven CTD partitions in descriptor output order.
    pub fn ctd_defaults() -> &'static [Self] {
        &CTD_DEFAULTS
    }

    pub fn standard_names() -> impl Iterator<Item = &'static str> {
        CTD_PARTITIONS.iter().map(|(name, _)| *name)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn group_of(&self, residue: AminoAcid) -> u8 {
        self.labels[residue.index()]
    }

    pub fn members(&self, group: u8) -> String {
        AminoAcid::ALL
            .into_iter()
            .filter(|aa| self.group_of(*aa) == group)
            .map(AminoAcid::letter)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_built_in_partitions_are_valid() {
        let tables = GroupTable::ctd_defaults();
        assert_eq!(tables.len(), 7);
        for table in tables {
            let total: usize = (1..=3).map(|g| table.members(g).len()).sum();
            assert_eq!(total, 20, "{}", table.name());
        }
    }

    #[test]
    fn built_in_order_is_stable() {
        let names: Vec<_> = GroupTable::standard_names().collect();
        assert_eq!(
            names,
            [
                "Hydrophobicity",
                "NormalizedVDWV",
                "Polarity",
                "Charge",
                "SecondaryStr",
                "SolventAccessibility",
                "Polarizability"
            ]
        );
    }

    #[test]
    fn group_of_returns_label_for_residue() {
        let charge = GroupTable::standard("Charge").unwrap();
        assert_eq!(charge.group_of(AminoAcid::Lysine), 1);
        assert_eq!(charge.group_of(AminoAcid::Alanine), 2);
        assert_eq!(charge.group_of(AminoAcid::GlutamicAcid), 3);
        assert_eq!(charge.members(3), "DE");
    }

    #[test]
    fn from_groups_rejects_overlapping_groups() {
        let result = GroupTable::from_groups("dup", ["ARNDCEQGHI", "ILKMFPSTWY", "V"]);
        assert!(matches!(result, Err(TableError::InvalidGroupTable { reason, .. }) if reason.contains("'I'")));
    }

    #[test]
    fn from_groups_rejects_incomplete_partition() {
        let result = GroupTable::from_groups("short", ["ARNDCEQ", "GHILKMF", "PSTWY"]);
        assert!(matches!(result, Err(TableError::InvalidGroupTable { reason, .. }) if reason.contains("'V'")));
    }

    #[test]
    fn from_groups_rejects_unknown_letters() {
        let result = GroupTable::from_groups("bad", ["ARNDCEQX", "GHILKMF", "PSTWYV"]);
        assert!(matches!(result, Err(TableError::InvalidGroupTable { .. })));
    }

    #[test]
    fn standard_rejects_unknown_name() {
        assert!(matches!(
            GroupTable::standard("Aromaticity"),
            Err(TableError::UnknownTable(_))
        ));
    }
}
