//! Source column names agreed with the upstream data producer.

/// Lane identifier; its first four characters name the origin site.
pub const LANE: &str = "Lane";
/// Trailer identifier; blank means no trailer is attached to the load.
pub const TRAILER_ID: &str = "Trailer Id";
/// Equipment type code (e.g. `FIFTY_THREE_FOOT_TRUCK`).
pub const EQUIPMENT_TYPE: &str = "Equipment Type";
/// Scheduled arrival date of the truck.
pub const SCHEDULED_ARRIVAL: &str = "Scheduled Truck Arrival - 2 date";
/// Runner / haul type (only `OTR` loads are reported).
pub const RUNNER_TYPE: &str = "runner_type";

/// Site code column of the region mapping.
pub const ORIGIN: &str = "origin";
/// Region column of the region mapping.
pub const ORIGIN_REGION: &str = "origin_region";

/// Columns the load-records table must contain.
pub const LOAD_RECORD_COLUMNS: [&str; 5] =
    [LANE, TRAILER_ID, EQUIPMENT_TYPE, SCHEDULED_ARRIVAL, RUNNER_TYPE];

/// Columns the region-mapping table must contain.
pub const REGION_MAPPING_COLUMNS: [&str; 2] = [ORIGIN, ORIGIN_REGION];
