/// Tag key constants for the two namespaces an AtoN record carries.
/// The `seamark` namespace holds the descriptive OpenStreetMap attributes,
/// the standards namespace holds attributes that only exist in S-125/S-201.

// Seamark namespace
pub const SEAMARK_PREFIX: &str = "seamark";
pub const SEAMARK_TYPE: &str = "seamark:type";
pub const SEAMARK_NAME: &str = "seamark:name";
pub const SEAMARK_INFORMATION: &str = "seamark:information";
pub const SEAMARK_STATUS: &str = "seamark:status";
pub const RADIO_STATION_CATEGORY: &str = "seamark:radio_station:category";

// Standards namespace, suffixed with the schema version prefix (`s125` or `s100`)
pub const AIDS_TO_NAVIGATION: &str = "aidsToNavigation";
pub const DATE_START: &str = "date_start";
pub const DATE_END: &str = "date_end";
pub const PERIOD_START: &str = "period_start";
pub const PERIOD_END: &str = "period_end";
pub const SCALE_MINIMUM: &str = "scale_minimum";

// Shared standards-namespace categories for beacon and buoy subtypes
pub const GENERIC_BEACON: &str = "generic_beacon";
pub const GENERIC_BUOY: &str = "generic_buoy";

/// The radio station category value that marks a physical AIS AtoN
pub const AIS_CATEGORY: &str = "ais";

// Output defaults
pub const DEFAULT_LANGUAGE: &str = "eng";
pub const DEFAULT_SRS_NAME: &str = "EPSG:4326";
pub const ID_PREFIX: &str = "ID";

// Reference roles
pub const ROLE_CHILD: &str = "child";
pub const ROLE_PARENT: &str = "parent";
pub const ROLE_AGGREGATION: &str = "aggregation";
pub const ROLE_ASSOCIATION: &str = "association";

/// Default light multiplicity when the tag is absent
pub const DEFAULT_LIGHT_MULTIPLICITY: u32 = 1;

/// Separator for multi-valued seamark tags
pub const LIST_SEPARATOR: char = ';';
