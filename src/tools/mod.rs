pub use self::get_time::{LocalTime, TOKYO_TZ, UTC_TZ, get_time, zone_for_city};

mod get_time;
