use super::ensure_length;
use crate::core::models::descriptors::DescriptorVector;
use crate::core::models::sequence::ProteinSequence;
use crate::core::tables::groups::GroupTable;
use crate::core::utils::math::round_to;
use crate::engine::error::DescriptorError;

const GROUPS: [u8; 3] = [1, 2, 3];
const TRANSITIONS: [(u8, u8); 3] = [(1, 2), (1, 3), (2, 3)];
/// Occurrence percentiles reported by the distribution descriptors and their name suffixes.
const DISTRIBUTION_QUANTILES: [(f64, &str); 3] = [(0.25, "025"), (0.5, "050"), (0.75, "075")];

/// Maps every residue to its group label in a single pass.
pub fn recode(sequence: &ProteinSequence, table: &GroupTable) -> Vec<u8> {
    sequence
        .residues()
        .iter()
        .map(|&aa| table.group_of(aa))
        .collect()
}

/// Group frequencies `_<Name>C1..C3`.
pub fn composition(sequence: &ProteinSequence, table: &GroupTable) -> DescriptorVector {
    let recoded = recode(sequence, table);
    let length = recoded.len() as f64;
    GROUPS
        .into_iter()
        .map(|group| {
            let count = recoded.iter().filter(|&&g| g == group).count();
            (
                format!("_{}C{}", table.name(), group),
                round_to(count as f64 / length, 3),
            )
        })
        .collect()
}

/// Frequencies of adjacent pairs switching between two groups, `_<Name>T12/T13/T23`.
pub fn transition(
    sequence: &ProteinSequence,
    table: &GroupTable,
) -> Result<DescriptorVector, DescriptorError> {
    ensure_length(sequence, "transition window", 2, 2)?;
    let recoded = recode(sequence, table);
    let pairs = (recoded.len() - 1) as f64;

    Ok(TRANSITIONS
        .into_iter()
        .map(|(a, b)| {
            let count = recoded
                .windows(2)
                .filter(|w| (w[0], w[1]) == (a, b) || (w[0], w[1]) == (b, a))
                .count();
            (
                format!("_{}T{}{}", table.name(), a, b),
                round_to(count as f64 / pairs, 3),
            )
        })
        .collect())
}

/// Positions of the first, 25 %, 50 %, 75 % and last occurrence of each group as a
/// percentage of the sequence length, `_<Name>D<g>001/025/050/075/100`.
///
/// The quantile picks occurrence `⌊n·p⌋` (1-based); a pick of zero wraps to the last
/// occurrence. Absent groups report zero for all five slots.
pub fn distribution(sequence: &ProteinSequence, table: &GroupTable) -> DescriptorVector {
    let recoded = recode(sequence, table);
    let length = recoded.len() as f64;
    let percent = |position: usize| round_to(position as f64 / length * 100.0, 3);

    let mut result = DescriptorVector::with_capacity(GROUPS.len() * 5);
    for group in GROUPS {
        let positions: Vec<usize> = recoded
            .iter()
            .enumerate()
            .filter(|(_, g)| **g == group)
            .map(|(i, _)| i + 1)
            .collect();
        let name = |suffix: &str| format!("_{}D{}{}", table.name(), group, suffix);

        let (Some(&first), Some(&last)) = (positions.first(), positions.last()) else {
            result.insert(name("001"), 0.0);
            for (_, suffix) in DISTRIBUTION_QUANTILES {
                result.insert(name(suffix), 0.0);
            }
            result.insert(name("100"), 0.0);
            continue;
        };

        result.insert(name("001"), percent(first));
        for (quantile, suffix) in DISTRIBUTION_QUANTILES {
            let pick = (positions.len() as f64 * quantile).floor() as usize;
            let position = pick.checked_sub(1).map_or(last, |i| positions[i]);
            result.insert(name(suffix), percent(position));
        }
        result.insert(name("100"), percent(last));
    }
    result
}

/// Composition, transition and distribution for one grouping (21 descriptors).
pub fn ctd(
    sequence: &ProteinSequence,
    table: &GroupTable,
) -> Result<DescriptorVector, DescriptorError> {
    let mut result = composition(sequence, table);
    result.extend(transition(sequence, table)?);
    result.extend(distribution(sequence, table));
    Ok(result)
}

/// Composition over the seven built-in groupings.
pub fn calculate_c(sequence: &ProteinSequence) -> DescriptorVector {
    let mut result = DescriptorVector::new();
    for table in GroupTable::ctd_defaults() {
        result.extend(composition(sequence, table));
    }
    result
}

pub fn calculate_t(sequence: &ProteinSequence) -> Result<DescriptorVector, DescriptorError> {
    let mut result = DescriptorVector::new();
    for table in GroupTable::ctd_defaults() {
        result.extend(transition(sequence, table)?);
    }
    Ok(result)
}

pub fn calculate_d(sequence: &ProteinSequence) -> DescriptorVector {
    let mut result = DescriptorVector::new();
    for table in GroupTable::ctd_defaults() {
        result.extend(distribution(sequence, table));
    }
    result
}

/// All 147 CTD descriptors: the composition block, then transition, then distribution.
pub fn calculate_ctd(sequence: &ProteinSequence) -> Result<DescriptorVector, DescriptorError> {
    let mut result = calculate_c(sequence);
    result.extend(calculate_t(sequence)?);
    result.extend(calculate_d(sequence));
    Ok(result)
}
