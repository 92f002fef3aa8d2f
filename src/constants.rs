//! Application constants for the plumbing catalog converter
//!
//! This module contains the conventional input file names, sentinel tokens,
//! and the column-to-field mapping tables for every catalog category.

// =============================================================================
// Input Files
// =============================================================================

/// Conventional file name for the pipe materials table
pub const PIPE_MATERIALS_FILE: &str = "PipeMaterials.csv";

/// Conventional file name for the valves table
pub const VALVES_FILE: &str = "Valves.csv";

/// Conventional file name for the fixtures table
pub const FIXTURES_FILE: &str = "Fixtures.csv";

/// Conventional file name for the mixing valves table
pub const MIXING_VALVES_FILE: &str = "MixingValves.csv";

/// Name used for input read from standard input
pub const STDIN_SOURCE_NAME: &str = "<stdin>";

// =============================================================================
// Parsing
// =============================================================================

/// Separator between nested path segments in field names
pub const PATH_DELIMITER: char = '\\';

/// Cell contents that mean "not applicable" and are normalized to null
pub const NULL_SENTINELS: &[&str] = &["", "NA", "na", "N/A", "n/a", "?", " "];

/// Column that starts a new record (and names it)
pub const NAME_COLUMN: &str = "Name";

/// Column holding the nominal diameter that keys size variants
pub const SIZE_COLUMN: &str = "Size (DN)";

/// Column holding the valve abbreviation
pub const ABBREVIATION_COLUMN: &str = "Abbreviation";

// =============================================================================
// Field Mapping Tables
// =============================================================================

/// Pipe material size-variant columns
pub const PIPE_SIZE_FIELDS: &[(&str, &str)] = &[
    ("Size (DN)", "diameterNominalMM"),
    ("Internal Diameter (mm)", "diameterInternalMM"),
    ("Colebrook White Coefficient", "colebrookWhiteCoefficient"),
    ("Safe Working Pressure (kPa)", "safeWorkingPressureKPA"),
];

/// Valve size-variant columns
pub const VALVE_SIZE_FIELDS: &[(&str, &str)] = &[
    ("Symbol", "symbol"),
    ("Size (DN)", "diameterNominalMM"),
    ("K Value", "kValue"),
];

/// Fixture columns; backslashes mark nested groupings
pub const FIXTURE_FIELDS: &[(&str, &str)] = &[
    ("Name", "name"),
    ("Loading Units\\AS3500\\Cold", "loadingUnits\\as3500\\cold"),
    ("Loading Units\\AS3500\\Hot", "loadingUnits\\as3500\\hot"),
    ("Loading Units\\(Barrie's Book)\\Cold", "loadingUnits\\barriesBook\\cold"),
    ("Loading Units\\(Barrie's Book)\\Hot", "loadingUnits\\barriesBook\\hot"),
    ("Q (l/s)\\Cold", "qLS\\cold"),
    ("Q (l/s)\\Hot", "qLS\\hot"),
    ("Fixture Units", "fixtureUnits"),
    ("Probability of Usage (%)", "probabilityOfUsagePCT"),
    ("Warm Temp. (degC)", "warmTempC"),
    ("Outlet Above Floor (m)", "outletAboveFloorM"),
    ("Min. Inlet Pressure (kPa)", "minInletPressureKPA"),
    ("Max. Inlet Pressure (kPa)", "maxInletPressureKPA"),
];

/// Mixing valve columns
pub const MIXING_VALVE_FIELDS: &[(&str, &str)] = &[
    ("Min. Inlet Pressure (kPa)", "minInletPressureKPA"),
    ("Max. Inlet Pressure (kPa)", "maxInletPressureKPA"),
    (
        "Max. Hot and Cold Pressure Differential",
        "maxHotColdPressureDifferentialPCT",
    ),
    ("Minimum Flow Rate (L/s)", "minFlowRateLS"),
    ("Maximum Flow Rate (L/s)", "maxFlowRateLS"),
];

// =============================================================================
// Output
// =============================================================================

/// Default JSON indentation width
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Largest indentation width accepted from configuration
pub const MAX_INDENT_WIDTH: usize = 16;

/// Directory name under the user config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "plumbing-catalog";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";
