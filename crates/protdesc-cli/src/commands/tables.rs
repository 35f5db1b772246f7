use crate::cli::TablesArgs;
use crate::error::{CliError, Result};
use protdesc::core::models::alphabet::AminoAcid;
use protdesc::core::tables::distance::DistanceMatrix;
use protdesc::core::tables::groups::GroupTable;
use protdesc::core::tables::property::PropertyTable;
use std::fmt::Write;

pub fn run(args: TablesArgs) -> Result<()> {
    let text = match &args.name {
        Some(name) => render_table(name)?,
        None => render_listing(),
    };
    print!("{}", text);
    Ok(())
}

fn render_listing() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Property tables:");
    for name in PropertyTable::standard_names() {
        let _ = writeln!(out, "  {}", name);
    }
    let _ = writeln!(out, "Group tables:");
    for name in GroupTable::standard_names() {
        let _ = writeln!(out, "  {}", name);
    }
    let _ = writeln!(out, "Distance matrices:");
    for name in DistanceMatrix::standard_names() {
        let _ = writeln!(out, "  {}", name);
    }
    out
}

fn render_table(name: &str) -> Result<String> {
    let mut out = String::new();
    if let Ok(table) = PropertyTable::standard(name) {
        for aa in AminoAcid::ALL {
            let _ = writeln!(out, "{}\t{}", aa, table.value(aa));
        }
    } else if let Ok(table) = GroupTable::standard(name) {
        for group in 1..=3 {
            let _ = writeln!(out, "{}\t{}", group, table.members(group));
        }
    } else if let Ok(matrix) = DistanceMatrix::standard(name) {
        let header: Vec<String> = AminoAcid::ALL.iter().map(|aa| aa.to_string()).collect();
        let _ = writeln!(out, ",{}", header.join(","));
        for row in AminoAcid::ALL {
            let cells: Vec<String> = AminoAcid::ALL
                .iter()
                .map(|&column| matrix.distance(row, column).to_string())
                .collect();
            let _ = writeln!(out, "{},{}", row, cells.join(","));
        }
    } else {
        return Err(CliError::Argument(format!(
            "Unknown table '{}'. Run `protdesc tables` to list the built-in tables.",
            name
        )));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_names_every_kind_of_table() {
        let listing = render_listing();
        assert!(listing.contains("  Hydrophobicity\n"));
        assert!(listing.contains("  SolventAccessibility\n"));
        assert!(listing.contains("  Grantham\n"));
    }

    #[test]
    fn property_table_prints_one_line_per_residue() {
        let text = render_table("Hydrophobicity").unwrap();
        assert_eq!(text.lines().count(), 20);
        assert_eq!(text.lines().next(), Some("A\t0.02"));
    }

    #[test]
    fn group_table_prints_three_groups() {
        let text = render_table("Charge").unwrap();
        assert_eq!(text, "1\tRK\n2\tANCQGHILMFPSTWYV\n3\tDE\n");
    }

    #[test]
    fn distance_matrix_prints_as_square_csv() {
        let text = render_table("Grantham").unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 21);
        assert!(lines[0].starts_with(",A,R,N"));
        assert!(lines[1].starts_with("A,0,112,"));
    }

    #[test]
    fn unknown_table_is_an_argument_error() {
        assert!(matches!(
            render_table("Sweetness"),
            Err(CliError::Argument(_))
        ));
    }
}
