pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod flags;
pub mod output;
pub mod pattern;

pub use cli::{Cli, Command, CompileArgs, EscapeArgs, OutputFormat, TestArgs};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use flags::Flags;
pub use pattern::{
    LineMatch, MatchFlags, Matcher, Pattern, PatternMatch, RegexTag, Template, compile,
    compile_source, escape, escape_value, expand_dot_all, strip_verbose,
};
