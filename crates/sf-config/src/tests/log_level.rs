use crate::LogLevel;

use log::LevelFilter;

#[test]
fn test_known_levels_parse() {
    assert_eq!(*LogLevel::parse_lenient("debug"), LevelFilter::Debug);
    assert_eq!(*LogLevel::parse_lenient("TRACE"), LevelFilter::Trace);
    assert_eq!(*LogLevel::parse_lenient("off"), LevelFilter::Off);
}

#[test]
fn test_unknown_level_falls_back_to_default() {
    assert_eq!(*LogLevel::parse_lenient("verbose"), crate::DEFAULT_LOG_LEVEL);
}
