//! Test fixtures for catalog parser testing
//!
//! This module provides sample tables for every category shared across the
//! component test modules.

mod pipe_materials_tests;

/// Pipe materials table with two materials and sentinel cells
pub fn pipe_materials_csv() -> &'static str {
    "Name,Size (DN),Internal Diameter (mm),Colebrook White Coefficient,Safe Working Pressure (kPa)
Copper (Type B),15,13.84,0.0015,2000
,20,19.94,0.0015,2000
,25,25.82,0.0015,1800
PEX (SDR 7.4),16,11.6,0.007,NA
,20,?,0.007,
"
}

/// Valves table with two valve types
pub fn valves_csv() -> &'static str {
    "Name,Abbreviation,Symbol,Size (DN),K Value
Gate Valve,GV,gate-valve,15,0.2
,,gate-valve,20,0.16
Check Valve,CV,N/A,15,2.5
"
}

/// Fixtures table with nested loading unit and flow rate columns
pub fn fixtures_csv() -> &'static str {
    r#"Name,Loading Units\AS3500\Cold,Loading Units\AS3500\Hot,Loading Units\(Barrie's Book)\Cold,Loading Units\(Barrie's Book)\Hot,Q (l/s)\Cold,Q (l/s)\Hot,Fixture Units,Probability of Usage (%),Warm Temp. (degC),Outlet Above Floor (m),Min. Inlet Pressure (kPa),Max. Inlet Pressure (kPa)
Basin,1,1,0.5,0.5,0.1,0.1,1,2,40,1,50,500
Kitchen Sink (Hot),NA,3,?,n/a,0.12,0.12,2,,45,1,50,500
"#
}

/// Mixing valves table
pub fn mixing_valves_csv() -> &'static str {
    "Name,Min. Inlet Pressure (kPa),Max. Inlet Pressure (kPa),Max. Hot and Cold Pressure Differential,Minimum Flow Rate (L/s),Maximum Flow Rate (L/s)
TMV,200,1500,10,0.03,0.6
Tempering Valve,NA,1500,,0.1,1
"
}
