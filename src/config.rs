/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Usage text printed when the binary is invoked without a valid command.
pub const USAGE: &str = "\
usage:
  example-domains calc <add|subtract|multiply|divide|+|-|*|/> <a> <b>
  example-domains profile <json> [name=<value>] [age=<value>] [email=<value>]";
