use crate::core::models::descriptors::DescriptorVector;
use crate::core::models::sequence::ProteinSequence;
use crate::engine::config::{DescriptorFamily, ProfileConfig};
use crate::engine::error::DescriptorError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::autocorrelation::{self, Autocorrelation};
use crate::engine::tasks::quasi_sequence_order::{self as qso, CUSTOM_PREFIXES};
use crate::engine::tasks::{composition, ctd, ensure_length, is_conventional_weight, pseudo_aac};
use tracing::{debug, info, instrument};

/// Computes every family selected in `config` for one sequence and merges the results in
/// family order.
#[instrument(skip_all, name = "profile_workflow")]
pub fn run(
    sequence: &ProteinSequence,
    config: &ProfileConfig,
    reporter: &ProgressReporter,
) -> Result<DescriptorVector, DescriptorError> {
    validate_lengths(sequence, config)?;
    info!(
        "Computing {} descriptor families for a sequence of length {}.",
        config.families.len(),
        sequence.len()
    );

    let mut result = DescriptorVector::new();
    for &family in &config.families {
        reporter.report(Progress::FamilyStart { name: family.key() });
        if let Some(weight) =
            family_weight(family, config).filter(|&w| !is_conventional_weight(w))
        {
            reporter.report(Progress::Message(format!(
                "{family}: weight {weight} lies outside the conventional range [0.05, 0.7]"
            )));
        }
        let descriptors = compute_family(sequence, family, config)?;
        debug!("Family '{}' produced {} descriptors.", family, descriptors.len());
        reporter.report(Progress::FamilyFinish {
            descriptors: descriptors.len(),
        });
        result.extend(descriptors);
    }

    info!("Profile complete with {} descriptors.", result.len());
    Ok(result)
}

/// Checks every length requirement of the selected families before any work is done.
fn validate_lengths(
    sequence: &ProteinSequence,
    config: &ProfileConfig,
) -> Result<(), DescriptorError> {
    for &family in &config.families {
        let (parameter, lag) = match family {
            DescriptorFamily::AminoAcidComposition | DescriptorFamily::TripeptideSpectrum => {
                continue;
            }
            DescriptorFamily::DipeptideComposition => {
                ensure_length(sequence, "dipeptide window", 2, 2)?;
                continue;
            }
            DescriptorFamily::Ctd => {
                ensure_length(sequence, "transition window", 2, 2)?;
                continue;
            }
            DescriptorFamily::MoreauBroto | DescriptorFamily::Moran | DescriptorFamily::Geary => {
                ("max_lag", config.autocorrelation_max_lag)
            }
            DescriptorFamily::PseudoAac => ("lamda", config.pseudo_aac.lamda),
            DescriptorFamily::AmphiphilicPseudoAac => {
                ("lamda", config.amphiphilic_pseudo_aac.lamda)
            }
            DescriptorFamily::SequenceOrderCoupling => ("max_lag", config.coupling_max_lag),
            DescriptorFamily::QuasiSequenceOrder => {
                ("max_lag", config.quasi_sequence_order.max_lag)
            }
        };
        ensure_length(sequence, parameter, lag, lag + 1)?;
    }
    Ok(())
}

fn family_weight(family: DescriptorFamily, config: &ProfileConfig) -> Option<f64> {
    match family {
        DescriptorFamily::PseudoAac => Some(config.pseudo_aac.weight),
        DescriptorFamily::AmphiphilicPseudoAac => Some(config.amphiphilic_pseudo_aac.weight),
        DescriptorFamily::QuasiSequenceOrder => Some(config.quasi_sequence_order.weight),
        _ => None,
    }
}

/// Standard totals for one statistic followed by any configured extra tables.
fn autocorrelation_family(
    sequence: &ProteinSequence,
    kind: Autocorrelation,
    config: &ProfileConfig,
) -> Result<DescriptorVector, DescriptorError> {
    let max_lag = config.autocorrelation_max_lag;
    let mut result = autocorrelation::autocorrelation_total(sequence, kind, max_lag)?;
    for table in &config.autocorrelation_properties {
        result.extend(autocorrelation::autocorrelation(
            sequence, kind, table, max_lag,
        )?);
    }
    Ok(result)
}

fn compute_family(
    sequence: &ProteinSequence,
    family: DescriptorFamily,
    config: &ProfileConfig,
) -> Result<DescriptorVector, DescriptorError> {
    match family {
        DescriptorFamily::AminoAcidComposition => Ok(composition::aa_composition(sequence)),
        DescriptorFamily::DipeptideComposition => composition::dipeptide_composition(sequence),
        DescriptorFamily::TripeptideSpectrum => {
            Ok(composition::tripeptide_spectrum(sequence).map(f64::from))
        }
        DescriptorFamily::MoreauBroto => {
            autocorrelation_family(sequence, Autocorrelation::MoreauBroto, config)
        }
        DescriptorFamily::Moran => {
            autocorrelation_family(sequence, Autocorrelation::Moran, config)
        }
        DescriptorFamily::Geary => {
            autocorrelation_family(sequence, Autocorrelation::Geary, config)
        }
        DescriptorFamily::Ctd => ctd::calculate_ctd(sequence),
        DescriptorFamily::PseudoAac => pseudo_aac::pseudo_aac_with_properties(
            sequence,
            config.pseudo_aac,
            &config.pseudo_aac_properties,
        ),
        DescriptorFamily::AmphiphilicPseudoAac => {
            pseudo_aac::amphiphilic_pseudo_aac_with_properties(
                sequence,
                config.amphiphilic_pseudo_aac,
                &config.amphiphilic_properties,
            )
        }
        DescriptorFamily::SequenceOrderCoupling => {
            let mut result = qso::coupling_numbers_total(sequence, config.coupling_max_lag)?;
            if let Some(matrix) = &config.custom_distance_matrix {
                result.extend(qso::coupling_numbers(
                    sequence,
                    config.coupling_max_lag,
                    matrix,
                    CUSTOM_PREFIXES.coupling,
                )?);
            }
            Ok(result)
        }
        DescriptorFamily::QuasiSequenceOrder => {
            let mut result =
                qso::quasi_sequence_order_total(sequence, config.quasi_sequence_order)?;
            if let Some(matrix) = &config.custom_distance_matrix {
                result.extend(qso::quasi_sequence_order(
                    sequence,
                    config.quasi_sequence_order,
                    matrix,
                    CUSTOM_PREFIXES.quasi,
                )?);
            }
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::alphabet::ALPHABET_SIZE;
    use crate::core::tables::distance::DistanceMatrix;
    use crate::core::tables::property::PropertyTable;
    use crate::engine::config::ProfileConfigBuilder;
    use std::sync::Mutex;

    const REFERENCE: &str =
        "ADGCGVGEGTGQGPMCNCMCMKWVYADEDAADLESDSFADEDASLESDSFPWSNQRVFCSFADEDAS";

    fn seq(s: &str) -> ProteinSequence {
        ProteinSequence::new(s).unwrap()
    }

    #[test]
    fn default_profile_unions_all_default_families() {
        let result = run(&seq(REFERENCE), &ProfileConfig::default(), &ProgressReporter::new())
            .unwrap();
        // 20 + 400 + 3·240 + 147 + 30 + 40 + 2·45 + 2·50
        assert_eq!(result.len(), 1547);
        assert_eq!(result.names()[0], "A");
        assert_eq!(result.names()[20], "AA");
        assert!(result.contains("taugrant45"));
        assert!(!result.contains("AAA"));
        assert_eq!(result["A"], 11.94);
        assert_eq!(result["APAAC1"], 11.622);
    }

    #[test]
    fn families_are_emitted_in_canonical_order_regardless_of_selection_order() {
        let config = ProfileConfigBuilder::new()
            .families(vec![DescriptorFamily::Ctd, DescriptorFamily::AminoAcidComposition])
            .build()
            .unwrap();
        let result = run(&seq(REFERENCE), &config, &ProgressReporter::new()).unwrap();
        assert_eq!(result.len(), 167);
        assert_eq!(result.names()[0], "A");
        assert_eq!(result.names()[20], "_HydrophobicityC1");
    }

    #[test]
    fn tripeptide_spectrum_is_converted_to_floating_point() {
        let config = ProfileConfigBuilder::new()
            .families(vec![DescriptorFamily::TripeptideSpectrum])
            .build()
            .unwrap();
        let result = run(&seq(REFERENCE), &config, &ProgressReporter::new()).unwrap();
        assert_eq!(result.len(), 8000);
        assert_eq!(result["ADE"], 3.0);
    }

    #[test]
    fn short_sequence_fails_before_any_family_is_computed() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(format!("{event:?}"));
        }));
        let err = run(&seq("ACDEFGHIKLMNPQRSTVWY"), &ProfileConfig::default(), &reporter)
            .unwrap_err();
        assert_eq!(
            err,
            DescriptorError::InsufficientSequenceLength {
                parameter: "max_lag",
                value: 30,
                required: 31,
                actual: 20
            }
        );
        drop(reporter);
        assert!(events.into_inner().unwrap().is_empty());
    }

    #[test]
    fn progress_reports_one_start_and_finish_per_family() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let config = ProfileConfigBuilder::new()
            .families(vec![
                DescriptorFamily::AminoAcidComposition,
                DescriptorFamily::PseudoAac,
            ])
            .build()
            .unwrap();
        run(&seq(REFERENCE), &config, &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], Progress::FamilyStart { name: "aac" }));
        assert!(matches!(events[1], Progress::FamilyFinish { descriptors: 20 }));
        assert!(matches!(events[2], Progress::FamilyStart { name: "paac" }));
        assert!(matches!(events[3], Progress::FamilyFinish { descriptors: 30 }));
    }

    #[test]
    fn unconventional_weight_is_reported_as_a_message() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let config = ProfileConfigBuilder::new()
            .families(vec![DescriptorFamily::PseudoAac])
            .pseudo_aac_weight(0.9)
            .build()
            .unwrap();
        run(&seq(REFERENCE), &config, &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], Progress::FamilyStart { name: "paac" }));
        match &events[1] {
            Progress::Message(message) => {
                assert!(message.starts_with("paac: weight 0.9"), "{message}");
            }
            other => panic!("expected a message, got {other:?}"),
        }
        assert!(matches!(events[2], Progress::FamilyFinish { descriptors: 30 }));
    }

    #[test]
    fn extra_autocorrelation_properties_follow_the_standard_totals() {
        let config = ProfileConfigBuilder::new()
            .families(vec![DescriptorFamily::Moran])
            .autocorrelation_max_lag(5)
            .autocorrelation_properties(vec![
                PropertyTable::standard("HoppWoodsHydrophilicity").unwrap(),
            ])
            .build()
            .unwrap();
        let result = run(&seq(REFERENCE), &config, &ProgressReporter::new()).unwrap();
        assert_eq!(result.len(), 8 * 5 + 5);
        let expected = autocorrelation::moran(
            &seq(REFERENCE),
            &PropertyTable::standard("HoppWoodsHydrophilicity").unwrap(),
            5,
        )
        .unwrap();
        assert_eq!(&result.names()[40..], expected.names());
        assert_eq!(&result.values()[40..], expected.values());
    }

    #[test]
    fn custom_distance_matrix_adds_tau_and_qso_families() {
        let mut values = [[2.0; ALPHABET_SIZE]; ALPHABET_SIZE];
        for (i, row) in values.iter_mut().enumerate() {
            row[i] = 0.0;
        }
        let config = ProfileConfigBuilder::new()
            .families(vec![
                DescriptorFamily::SequenceOrderCoupling,
                DescriptorFamily::QuasiSequenceOrder,
            ])
            .coupling_max_lag(5)
            .quasi_sequence_order_max_lag(5)
            .custom_distance_matrix(DistanceMatrix::new("Flat", values).unwrap())
            .build()
            .unwrap();
        let result = run(&seq(REFERENCE), &config, &ProgressReporter::new()).unwrap();
        assert_eq!(result.len(), 3 * 5 + 3 * 25);
        assert!(result.contains("tau5"));
        assert!(result.contains("QSO25"));
        assert!(result.contains("QSOSW1"));
    }

    #[test]
    fn custom_pseudo_aac_properties_are_used() {
        let config = ProfileConfigBuilder::new()
            .families(vec![DescriptorFamily::PseudoAac])
            .pseudo_aac_lamda(3)
            .pseudo_aac_properties(vec![
                PropertyTable::standard("HoppWoodsHydrophilicity").unwrap(),
            ])
            .build()
            .unwrap();
        let result = run(&seq(REFERENCE), &config, &ProgressReporter::new()).unwrap();
        assert_eq!(result.len(), 23);
        assert_eq!(result["PAAC21"], 6.874);
    }
}
