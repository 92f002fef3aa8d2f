//! Tests for the pipe materials parser

use super::pipe_materials_csv;
use crate::Error;
use crate::app::services::catalog_parser::parse_pipe_materials;

const HEADER: &str =
    "Name,Size (DN),Internal Diameter (mm),Colebrook White Coefficient,Safe Working Pressure (kPa)";

#[test]
fn test_rows_group_under_current_material() {
    let csv = format!("{HEADER}\nCopper,15,13.84,0.0015,2000\n,20,19.94,0.0015,2000\n");
    let result = parse_pipe_materials(&csv).unwrap();

    assert_eq!(result.records.len(), 1);
    let copper = &result.records["copper"];
    assert_eq!(copper.name, "Copper");
    assert_eq!(copper.uid, "copper");

    let sizes: Vec<&String> = copper.pipes_by_size.keys().collect();
    assert_eq!(sizes, vec!["15", "20"]);
    for size in copper.pipes_by_size.values() {
        assert_eq!(size.pipe_uid, "copper");
    }
}

#[test]
fn test_size_variant_fields() {
    let result = parse_pipe_materials(pipe_materials_csv()).unwrap();
    let copper = &result.records["copperTypeB"];
    let dn15 = &copper.pipes_by_size["15"];

    assert_eq!(dn15.field("diameterNominalMM"), Some("15"));
    assert_eq!(dn15.field("diameterInternalMM"), Some("13.84"));
    assert_eq!(dn15.field("colebrookWhiteCoefficient"), Some("0.0015"));
    assert_eq!(dn15.field("safeWorkingPressureKPA"), Some("2000"));
    assert_eq!(dn15.fields.len(), 4);
}

#[test]
fn test_multiple_materials_and_sentinels() {
    let result = parse_pipe_materials(pipe_materials_csv()).unwrap();

    let uids: Vec<&String> = result.records.keys().collect();
    assert_eq!(uids, vec!["copperTypeB", "pexSdr74"]);
    assert_eq!(result.records["copperTypeB"].pipes_by_size.len(), 3);

    let pex = &result.records["pexSdr74"];
    assert_eq!(pex.name, "PEX (SDR 7.4)");
    assert!(pex.pipes_by_size["16"].fields["safeWorkingPressureKPA"].is_null());
    assert!(pex.pipes_by_size["20"].fields["diameterInternalMM"].is_null());
    assert!(pex.pipes_by_size["20"].fields["safeWorkingPressureKPA"].is_null());
    assert_eq!(pex.pipes_by_size["20"].pipe_uid, "pexSdr74");

    assert_eq!(result.stats.rows_read, 5);
    assert_eq!(result.stats.records_created, 2);
    assert_eq!(result.stats.size_variants, 5);
    assert!(!result.stats.has_duplicates());
}

#[test]
fn test_first_row_without_name_is_missing_group() {
    let csv = format!("{HEADER}\n,15,13.84,0.0015,2000\n");

    match parse_pipe_materials(&csv).unwrap_err() {
        Error::MissingGroup { category, row } => {
            assert_eq!(category, "pipe materials");
            assert_eq!(row, 1);
        }
        other => panic!("expected MissingGroup, got {:?}", other),
    }
}

#[test]
fn test_duplicate_identifier_last_wins() {
    let csv = format!(
        "{HEADER}\nCopper,15,13.84,0.0015,2000\n,20,19.94,0.0015,2000\nCOPPER,25,25.82,0.0015,1800\n"
    );
    let result = parse_pipe_materials(&csv).unwrap();

    assert_eq!(result.records.len(), 1);
    let copper = &result.records["copper"];
    assert_eq!(copper.name, "COPPER");
    let sizes: Vec<&String> = copper.pipes_by_size.keys().collect();
    assert_eq!(sizes, vec!["25"]);

    assert_eq!(result.stats.duplicate_identifiers, vec!["copper".to_string()]);
    assert_eq!(result.stats.records_created, 2);
}

#[test]
fn test_repeated_size_replaces_variant() {
    let csv = format!("{HEADER}\nCopper,15,13.84,0.0015,2000\n,15,14.00,0.0015,2100\n");
    let result = parse_pipe_materials(&csv).unwrap();

    let copper = &result.records["copper"];
    assert_eq!(copper.pipes_by_size.len(), 1);
    assert_eq!(
        copper.pipes_by_size["15"].field("diameterInternalMM"),
        Some("14.00")
    );
}

#[test]
fn test_padded_headers_and_reordered_columns() {
    let csv = " Safe Working Pressure (kPa) ,Size (DN), Name,Colebrook White Coefficient ,Internal Diameter (mm)\n\
               2000,15,Copper,0.0015,13.84\n";
    let result = parse_pipe_materials(csv).unwrap();

    let dn15 = &result.records["copper"].pipes_by_size["15"];
    assert_eq!(dn15.field("safeWorkingPressureKPA"), Some("2000"));
    assert_eq!(dn15.field("diameterInternalMM"), Some("13.84"));
}

#[test]
fn test_missing_column_is_fatal() {
    let csv = "Name,Size (DN),Internal Diameter (mm),Safe Working Pressure (kPa)\nCopper,15,13.84,2000\n";

    match parse_pipe_materials(csv).unwrap_err() {
        Error::MissingColumn { column, .. } => {
            assert_eq!(column, "Colebrook White Coefficient")
        }
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_header_only_table_is_empty() {
    let result = parse_pipe_materials(&format!("{HEADER}\n")).unwrap();
    assert!(result.records.is_empty());
    assert_eq!(result.stats.rows_read, 0);
}
