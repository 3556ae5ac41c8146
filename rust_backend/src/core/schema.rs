//! Canonical column names for the incident table.
//!
//! Every stage of the pipeline refers to columns through these constants.
//! Raw headers are rewritten to this canonical form once, at load time, by
//! [`normalize_column_name`]; nothing downstream ever touches a raw header.

/// Date the incident occurred. Year/month derivation reads this column only.
pub const DATE_OCC: &str = "DATE_OCC";
/// Date the incident was reported.
pub const DATE_RPTD: &str = "DATE_RPTD";
/// Clock time of occurrence, zero-padded to 4 characters after cleaning.
pub const TIME_OCC: &str = "TIME_OCC";
/// Latitude. Required in the cleaned table.
pub const LAT: &str = "LAT";
/// Longitude. Required in the cleaned table.
pub const LON: &str = "LON";
/// Patrol area name.
pub const AREA_NAME: &str = "AREA_NAME";
/// Crime code description.
pub const CRM_CD_DESC: &str = "CRM_CD_DESC";
/// Weapon description.
pub const WEAPON_DESC: &str = "WEAPON_DESC";
/// Victim age in years.
pub const VICT_AGE: &str = "VICT_AGE";
/// Victim sex code.
pub const VICT_SEX: &str = "VICT_SEX";
/// Victim descent code.
pub const VICT_DESCENT: &str = "VICT_DESCENT";
/// Investigation status description.
pub const STATUS_DESC: &str = "STATUS_DESC";

/// Hour of day (0-23), derived from [`TIME_OCC`].
pub const HOUR: &str = "HOUR";
/// Calendar year, derived from [`DATE_OCC`].
pub const YEAR: &str = "YEAR";
/// Calendar month (1-12), derived from [`DATE_OCC`].
pub const MONTH: &str = "MONTH";

/// Columns the pipeline dereferences. Validation fails fast when any of
/// these is absent after normalization.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    DATE_OCC,
    DATE_RPTD,
    TIME_OCC,
    LAT,
    LON,
    AREA_NAME,
    CRM_CD_DESC,
    WEAPON_DESC,
    VICT_AGE,
    VICT_SEX,
    VICT_DESCENT,
    STATUS_DESC,
];

/// Columns added by the pipeline.
pub const DERIVED_COLUMNS: [&str; 3] = [HOUR, YEAR, MONTH];

/// Numeric columns of the cleaned table, in correlation-matrix order.
pub const NUMERIC_COLUMNS: [&str; 6] = [LAT, LON, VICT_AGE, HOUR, YEAR, MONTH];

/// Rewrite a raw header into canonical form.
///
/// Surrounding whitespace is dropped, internal whitespace runs collapse to a
/// single underscore, and the result is upper-cased. Already-canonical names
/// pass through unchanged, so normalization is idempotent.
///
/// # Example
/// ```
/// use cii_rust::core::schema::normalize_column_name;
///
/// assert_eq!(normalize_column_name("  Date Occ "), "DATE_OCC");
/// assert_eq!(normalize_column_name("Vict  Age"), "VICT_AGE");
/// assert_eq!(normalize_column_name("LAT"), "LAT");
/// ```
pub fn normalize_column_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join("_")
}
