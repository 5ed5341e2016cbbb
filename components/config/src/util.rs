use std::path::PathBuf;
use std::str::FromStr;

pub fn parse<T: FromStr>(s: &str, default: T) -> T {
    s.parse().unwrap_or(default)
}

/// Empty values unset the path
pub fn opt_path(s: &str) -> Option<PathBuf> {
    match s.trim() {
        "" => None,
        s => Some(PathBuf::from(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert!(!parse("false", true));
        assert!(parse("nonsense", true));
        assert_eq!(parse("12", 0u8), 12);
    }

    #[test]
    fn test_opt_path() {
        assert_eq!(opt_path("  "), None);
        assert_eq!(opt_path("./emoji.json"), Some(PathBuf::from("./emoji.json")));
    }
}
