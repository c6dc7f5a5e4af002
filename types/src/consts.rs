/// Number of arc minutes in a single degree
pub const MINUTES_IN_DEGREE: u8 = 60;
/// Number of arc seconds in a single arc minute
pub const SECONDS_IN_MINUTE: u8 = 60;

/// Sign printed after the degrees part
pub const DEGREE_SIGN: char = '°';
/// Sign printed after the arc minutes part
pub const ARC_MINUTE_SIGN: char = '′';
/// Sign printed after the arc seconds part
pub const ARC_SECOND_SIGN: char = '″';
