//! CLI domain: parse, route, output, and presentation only.
//! Single route table dispatches to the library operations.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::format_timestamp;
pub use route::RunContext;
