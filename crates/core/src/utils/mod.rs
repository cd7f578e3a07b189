pub mod currency;
pub mod decimal_utils;
pub mod time_utils;
