use phf::{Map, phf_map};

// Values are listed in alphabet order: A R N D C E Q G H I / L K M F P S T W Y V.
pub(super) static STANDARD_PROPERTIES: Map<&'static str, [f64; 20]> = phf_map! {
    "Hydrophobicity" => [
        0.02, -0.42, -0.77, -1.04, 0.77, -1.14, -1.1, -0.8, 0.26, 1.81,
        1.14, -0.41, 1.0, 1.35, -0.09, -0.97, -0.77, 1.71, 1.11, 1.13,
    ],
    "AvFlexibility" => [
        0.357, 0.529, 0.463, 0.511, 0.346, 0.497, 0.493, 0.544, 0.323, 0.462,
        0.365, 0.466, 0.295, 0.314, 0.509, 0.507, 0.444, 0.305, 0.42, 0.386,
    ],
    "Polarizability" => [
        0.046, 0.291, 0.134, 0.105, 0.128, 0.151, 0.18, 0.0, 0.23, 0.186,
        0.186, 0.219, 0.221, 0.29, 0.131, 0.062, 0.108, 0.409, 0.298, 0.14,
    ],
    "FreeEnergy" => [
        -0.368, -1.03, 0.0, 2.06, 4.53, 1.77, 0.731, -0.525, 0.0, 0.791,
        1.07, 0.0, 0.656, 1.06, -2.24, -0.524, 0.0, 1.6, 4.91, 0.401,
    ],
    "ResidueASA" => [
        115.0, 225.0, 160.0, 150.0, 135.0, 190.0, 180.0, 75.0, 195.0, 175.0,
        170.0, 200.0, 185.0, 210.0, 145.0, 115.0, 140.0, 255.0, 230.0, 155.0,
    ],
    "ResidueVol" => [
        52.6, 109.1, 75.7, 68.4, 68.3, 84.7, 89.7, 36.3, 91.9, 102.0,
        102.0, 105.1, 97.7, 113.9, 73.6, 54.9, 71.2, 135.4, 116.2, 85.1,
    ],
    "Steric" => [
        0.52, 0.68, 0.76, 0.76, 0.62, 0.68, 0.68, 0.0, 0.7, 1.02,
        0.98, 0.68, 0.78, 0.7, 0.36, 0.53, 0.5, 0.7, 0.7, 0.76,
    ],
    "Mutability" => [
        100.0, 65.0, 134.0, 106.0, 20.0, 102.0, 93.0, 49.0, 66.0, 96.0,
        40.0, -56.0, 94.0, 41.0, 56.0, 120.0, 97.0, 18.0, 41.0, 74.0,
    ],
    "TanfordHydrophobicity" => [
        0.62, -2.53, -0.78, -0.9, 0.29, -0.74, -0.85, 0.48, -0.4, 1.38,
        1.06, -1.5, 0.64, 1.19, 0.12, -0.18, -0.05, 0.81, 0.26, 1.08,
    ],
    "HoppWoodsHydrophilicity" => [
        -0.5, 3.0, 0.2, 3.0, -1.0, 3.0, 0.2, 0.0, -0.5, -1.8,
        -1.8, 3.0, -1.3, -2.5, 0.0, 0.3, -0.4, -3.4, -2.3, -1.5,
    ],
    "ResidueMass" => [
        15.0, 101.0, 58.0, 59.0, 47.0, 73.0, 72.0, 1.0, 82.0, 57.0,
        57.0, 73.0, 75.0, 91.0, 42.0, 31.0, 45.0, 130.0, 107.0, 43.0,
    ],
    "pK1" => [
        2.35, 2.18, 2.18, 1.88, 1.71, 2.19, 2.17, 2.34, 1.78, 2.32,
        2.36, 2.2, 2.28, 2.58, 1.99, 2.21, 2.15, 2.38, 2.2, 2.29,
    ],
    "pK2" => [
        9.87, 9.09, 9.09, 9.6, 10.78, 9.67, 9.13, 9.6, 8.97, 9.76,
        9.6, 8.9, 9.21, 9.24, 10.6, 9.15, 9.12, 9.39, 9.11, 9.74,
    ],
    "pI" => [
        6.11, 10.76, 5.41, 2.98, 5.02, 3.08, 5.65, 6.06, 7.64, 6.04,
        6.04, 9.47, 5.74, 5.91, 6.3, 5.68, 5.6, 5.88, 5.63, 6.02,
    ],
};

/// Properties averaged by the "Total" autocorrelation descriptors, in output order.
pub(super) const AUTOCORRELATION_PROPERTY_NAMES: [&str; 8] = [
    "Hydrophobicity",
    "AvFlexibility",
    "Polarizability",
    "FreeEnergy",
    "ResidueASA",
    "ResidueVol",
    "Steric",
    "Mutability",
];

/// Hydrophobicity, hydrophilicity and side-chain mass used by type I pseudo amino acid composition.
pub(super) const PSEUDO_AAC_PROPERTY_NAMES: [&str; 3] = [
    "TanfordHydrophobicity",
    "HoppWoodsHydrophilicity",
    "ResidueMass",
];

pub(super) const AMPHIPHILIC_PROPERTY_NAMES: [&str; 2] =
    ["TanfordHydrophobicity", "HoppWoodsHydrophilicity"];
