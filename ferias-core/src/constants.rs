/// Vacation service used when neither the config file nor the environment names one.
pub const DEFAULT_API_URL: &str = "https://cemear-b549eb196d7c.herokuapp.com";

/// Path of the vacation collection on the service.
pub const VACATIONS_PATH: &str = "ferias";

/// Per-request timeout for the vacation service.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Display format for dates shown to users (day/month/year).
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Dot color used for every vacation day on the calendar.
pub const VACATION_DOT_COLOR: &str = "green";
