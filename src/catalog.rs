//! Static lookup tables for the IDU device fleet.
//!
//! These are compiled-in constants: chunking limit, the firmware versions
//! permitted in generated output, the known device models, and the
//! model-to-manufacturer mapping.

/// Maximum rows per generated XML file.
pub const CHUNK_SIZE: usize = 25_000;

/// Firmware versions permitted to appear in filtered output.
pub const ALLOWED_VERSIONS: [&str; 6] = [
    "R2.0.18.2",
    "R2.0.18",
    "R2.0.19",
    "R2.0.19.5",
    "R2.0.16",
    "R2.0.19.6",
];

/// Known device models. Declaration order drives output enumeration order.
pub const DEVICE_MODELS: [&str; 11] = [
    "JIDU6601", "JIDU6611", "JIDU6401", "JIDU6701", "JIDU6801", "JIDU6101", "JIDU6111",
    "JIDU6311", "JIDU6411", "JIDU6811", "JIDU6911",
];

/// Returns the manufacturer for a device model, `"Unknown"` for anything
/// not in the fleet.
pub fn manufacturer_for(model: &str) -> &'static str {
    match model {
        "JIDU6101" | "JIDU6111" => "Arcadyan",
        "JIDU6311" => "Bluebank",
        "JIDU6401" | "JIDU6411" => "Sercomm",
        "JIDU6601" | "JIDU6611" => "Speedtech",
        "JIDU6701" => "Skyworth",
        "JIDU6801" | "JIDU6811" => "Telpa",
        "JIDU6911" => "Askey",
        _ => "Unknown",
    }
}

/// Returns true if `version` is one of the allowed firmware versions.
pub fn is_allowed_version(version: &str) -> bool {
    ALLOWED_VERSIONS.contains(&version)
}
