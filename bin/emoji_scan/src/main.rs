extern crate tracing as log;

use std::io::{Read, Write};

use config::{Config, Configuration};
use emoji::{EmojiDb, UnicodeCandidate};

pub mod cli;
pub mod logging;

use cli::{CliOptions, Mode};

#[derive(serde::Serialize)]
struct Found<'a> {
    emoji: &'a str,
    alias: &'a str,
    start: usize,
    end: usize,
    fitzpatrick: Option<&'static str>,
    fitzpatrick_end: usize,
}

impl<'a> From<UnicodeCandidate<'a>> for Found<'a> {
    fn from(c: UnicodeCandidate<'a>) -> Self {
        Found {
            emoji: c.emoji.unicode(),
            alias: c.emoji.alias(),
            start: c.start,
            end: c.end,
            fitzpatrick: c.fitzpatrick.map(|f| f.type_name()),
            fitzpatrick_end: c.fitzpatrick_end,
        }
    }
}

fn load_config(args: &CliOptions) -> anyhow::Result<Config> {
    log::info!("Loading config from: {}", args.config.display());
    let mut config = Config::load(&args.config)?;

    log::info!("Applying environment overrides to configuration");
    config.configure();

    Ok(config)
}

fn read_input(args: &CliOptions) -> anyhow::Result<String> {
    if !args.text.is_empty() {
        return Ok(args.text.join(" "));
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn run(db: &EmojiDb, config: &Config, mode: Mode, input: &str, out: &mut impl Write) -> anyhow::Result<()> {
    match mode {
        Mode::Candidates => {
            let text: Vec<char> = input.chars().collect();

            for c in db.scanner().candidates(&text) {
                let found: String = text[c.start..c.fitzpatrick_end].iter().collect();
                writeln!(out, "{}..{}\t:{}:\t{}", c.start, c.fitzpatrick_end, c.emoji.alias(), found)?;
            }
        }
        Mode::Aliases => write!(out, "{}", db.parse_to_aliases(input, config.scan.fitzpatrick))?,
        Mode::Unicode => write!(out, "{}", db.parse_to_unicode(input))?,
        Mode::Strip => write!(out, "{}", db.remove_all_emojis(input))?,
        Mode::Json => {
            let text: Vec<char> = input.chars().collect();
            let found: Vec<Found> = db.scanner().candidates(&text).map(Found::from).collect();

            serde_json::to_writer_pretty(&mut *out, &found)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = CliOptions::parse()?;

    logging::init(args.verbose)?;

    log::debug!("Arguments: {:?}", args);

    let config = load_config(&args)?;
    let db = emoji::init_with(config.load_catalog()?)?;

    let input = read_input(&args)?;

    let stdout = std::io::stdout();
    run(db, &config, args.mode, &input, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_mode(mode: Mode, input: &str) -> String {
        let config = Config::default();
        let db = EmojiDb::new(config.load_catalog().unwrap());

        let mut out = Vec::new();
        run(&db, &config, mode, input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_modes() {
        assert_eq!(run_mode(Mode::Candidates, "hi 👋🏽"), "3..5\t:wave:\t👋🏽\n");
        assert_eq!(run_mode(Mode::Aliases, "hi 👋🏽"), "hi :wave|type_4:");
        assert_eq!(run_mode(Mode::Unicode, "hi :wave:"), "hi 👋");
        assert_eq!(run_mode(Mode::Strip, "hi 👋🏽!"), "hi !");

        let json: serde_json::Value = serde_json::from_str(&run_mode(Mode::Json, "🔥")).unwrap();
        assert_eq!(json[0]["alias"], "fire");
        assert_eq!(json[0]["end"], 1);
        assert!(json[0]["fitzpatrick"].is_null());
    }
}
