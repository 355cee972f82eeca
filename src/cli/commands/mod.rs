use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ArgMatches, ColorChoice, Command,
};
use std::net::IpAddr;
use tracing::Level;

pub const ARG_PORT: &str = "port";
pub const ARG_BIND: &str = "bind";
pub const ARG_VERBOSITY: &str = "verbosity";

/// `-v` count, or `SHOWCASE_LOG_LEVEL` by name or index, selects a row.
const LOG_LEVELS: [(&str, Level); 5] = [
    ("error", Level::ERROR),
    ("warn", Level::WARN),
    ("info", Level::INFO),
    ("debug", Level::DEBUG),
    ("trace", Level::TRACE),
];

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("showcase")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("SHOWCASE_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_BIND)
                .short('b')
                .long("bind")
                .help("IP address to bind")
                .default_value("::")
                .env("SHOWCASE_BIND")
                .value_parser(clap::value_parser!(IpAddr)),
        )
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("SHOWCASE_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(parse_log_level),
        )
}

fn parse_log_level(level: &str) -> Result<u8, String> {
    let index = match level.parse::<usize>() {
        Ok(index) => Some(index),
        Err(_) => LOG_LEVELS
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case(level)),
    };

    index
        .filter(|index| *index < LOG_LEVELS.len())
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| format!("invalid log level `{level}`"))
}

/// Tracing level picked on the command line; `None` leaves the ERROR default.
/// Counts past the last row clamp to TRACE.
#[must_use]
pub fn log_level(matches: &ArgMatches) -> Option<Level> {
    let verbosity = matches.get_one::<u8>(ARG_VERBOSITY).copied().unwrap_or(0);
    if verbosity == 0 {
        return None;
    }

    LOG_LEVELS
        .get(usize::from(verbosity))
        .or(LOG_LEVELS.last())
        .map(|(_, level)| *level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "showcase");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("SHOWCASE_PORT", None::<&str>),
                ("SHOWCASE_BIND", None),
                ("SHOWCASE_LOG_LEVEL", None),
            ],
            || {
                let matches = new().get_matches_from(vec!["showcase"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
                assert_eq!(
                    matches.get_one::<IpAddr>(ARG_BIND).copied(),
                    Some(IpAddr::V6(Ipv6Addr::UNSPECIFIED))
                );
                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                    Some(0)
                );
            },
        );
    }

    #[test]
    fn test_check_port_and_bind() {
        let matches = new().get_matches_from(vec![
            "showcase",
            "--port",
            "9090",
            "--bind",
            "127.0.0.1",
        ]);

        assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(9090));
        assert_eq!(
            matches.get_one::<IpAddr>(ARG_BIND).copied(),
            Some(IpAddr::V4(Ipv4Addr::LOCALHOST))
        );
    }

    #[test]
    fn test_invalid_bind() {
        let result = new().try_get_matches_from(vec!["showcase", "--bind", "localhost"]);
        assert_eq!(
            result.map(|_| ()).map_err(|e| e.kind()),
            Err(clap::error::ErrorKind::ValueValidation)
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("SHOWCASE_PORT", Some("443")),
                ("SHOWCASE_BIND", Some("0.0.0.0")),
                ("SHOWCASE_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["showcase"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<IpAddr>(ARG_BIND).copied(),
                    Some(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
                );
                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("SHOWCASE_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["showcase"]);
                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), Ok(3));
        assert_eq!(parse_log_level("4"), Ok(4));
        assert!(parse_log_level("5").is_err());
        assert!(parse_log_level("loud").is_err());
    }

    #[test]
    fn test_log_level_from_flags() {
        temp_env::with_vars([("SHOWCASE_LOG_LEVEL", None::<&str>)], || {
            let level = |args: &[&str]| log_level(&new().get_matches_from(args));

            assert_eq!(level(&["showcase"]), None);
            assert_eq!(level(&["showcase", "-v"]), Some(Level::WARN));
            assert_eq!(level(&["showcase", "-vv"]), Some(Level::INFO));
            assert_eq!(level(&["showcase", "-vvv"]), Some(Level::DEBUG));
            assert_eq!(level(&["showcase", "-vvvv"]), Some(Level::TRACE));
            assert_eq!(level(&["showcase", "-vvvvvvv"]), Some(Level::TRACE));
        });
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5 {
            temp_env::with_vars([("SHOWCASE_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["showcase".to_string()];

                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }
}
