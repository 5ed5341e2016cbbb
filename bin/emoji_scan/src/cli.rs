use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One line per emoji found
    Candidates,
    /// Replace emojis with `:alias:`
    Aliases,
    /// Replace `:alias:` with emojis
    Unicode,
    /// Remove all emojis
    Strip,
    /// Emojis found as a JSON array
    Json,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "candidates" => Mode::Candidates,
            "aliases" => Mode::Aliases,
            "unicode" => Mode::Unicode,
            "strip" => Mode::Strip,
            "json" => Mode::Json,
            _ => return Err(format!("Unknown mode: {s}")),
        })
    }
}

/// Finds emojis in text
#[derive(Debug, argh::FromArgs)]
pub struct CliOptions {
    /// print version information and exit
    #[argh(switch, short = 'V')]
    pub version: bool,

    /// logging level (0 = Info, 1 = Debug, 2 = Trace) [env EMOJI_VERBOSE]
    #[argh(option, short = 'v')]
    pub verbose: Option<u8>,

    /// specify configuration file location
    #[argh(option, default = "PathBuf::from(\"./emoji.toml\")", short = 'c')]
    pub config: PathBuf,

    /// output mode: candidates, aliases, unicode, strip or json
    #[argh(option, default = "Mode::Candidates", short = 'm')]
    pub mode: Mode,

    /// text to scan, read from stdin if not given
    #[argh(positional)]
    pub text: Vec<String>,
}

impl CliOptions {
    pub fn parse() -> Result<Self, anyhow::Error> {
        let mut args: CliOptions = argh::from_env();

        if args.version {
            println!("emoji_scan {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }

        if args.verbose.is_none() {
            if let Ok(verbose) = std::env::var("EMOJI_VERBOSE") {
                if let Ok(verbose) = verbose.parse() {
                    args.verbose = Some(verbose);
                }
            }
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    #[test]
    fn test_parse_args() {
        let args = CliOptions::from_args(&["emoji_scan"], &["-m", "json", "-v", "1", "hello", "world"]).unwrap();

        assert_eq!(args.mode, Mode::Json);
        assert_eq!(args.verbose, Some(1));
        assert_eq!(args.text, ["hello", "world"]);
        assert_eq!(args.config, PathBuf::from("./emoji.toml"));

        assert!(CliOptions::from_args(&["emoji_scan"], &["-m", "yaml"]).is_err());
    }
}
