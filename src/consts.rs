/// Earliest year accepted by the calculator (inclusive)
pub const MIN_YEAR: u16 = 1600;

/// Latest year accepted by the calculator (inclusive)
pub const MAX_YEAR: u16 = 3000;

/// Human-readable form of the accepted year range
pub const VALID_RANGE: &str = "1600-3000";

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for July
pub const JULY: u8 = 7;

/// Canada Day is always the first of July
pub const CANADA_DAY_MONTH: u8 = JULY;
pub const CANADA_DAY_DAY: u8 = 1;

/// Year Canada was formed through Confederation
pub const CONFEDERATION_YEAR: u16 = 1867;
/// Year of the 150th anniversary of Confederation
pub const SESQUICENTENNIAL_YEAR: u16 = 2017;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in a common (non-leap) year
pub(crate) const DAYS_IN_COMMON_YEAR: u32 = 365;
/// Days in a week
pub(crate) const DAYS_IN_WEEK: u32 = 7;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
/// Quarter-century milestones
pub(crate) const QUARTER_CENTURY: u16 = 25;
