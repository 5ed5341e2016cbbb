//! Text transformations built on top of the scanner

use crate::db::EmojiDb;
use crate::emoji::Emoji;
use crate::fitzpatrick::{Fitzpatrick, FitzpatrickAction};
use crate::scanner::UnicodeCandidate;

#[inline]
fn is_alias_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '|')
}

/// Length of the alias body at the start of `s`, where `+` may only lead (`+1`)
fn alias_len(s: &str) -> usize {
    let lead = s.starts_with('+') as usize;
    let rest = &s[lead..];

    lead + rest.find(|c: char| !is_alias_char(c)).unwrap_or(rest.len())
}

impl EmojiDb {
    /// Rebuilds `input`, letting `f` write a replacement for every emoji found
    pub fn transform<F>(&self, input: &str, mut f: F) -> String
    where
        F: FnMut(&UnicodeCandidate<'_>, &mut String),
    {
        let text: Vec<char> = input.chars().collect();
        let mut out = String::with_capacity(input.len());
        let mut last = 0;

        for candidate in self.scanner().candidates(&text) {
            out.extend(&text[last..candidate.start]);
            f(&candidate, &mut out);
            last = candidate.fitzpatrick_end;
        }

        out.extend(&text[last..]);
        out
    }

    /// Replaces emojis with their canonical alias, `:smile:`
    pub fn parse_to_aliases(&self, input: &str, action: FitzpatrickAction) -> String {
        self.transform(input, |c, out| {
            out.push(':');
            out.push_str(c.emoji.alias());

            match (action, c.fitzpatrick) {
                (FitzpatrickAction::Parse, Some(f)) => {
                    out.push('|');
                    out.push_str(f.type_name());
                    out.push(':');
                }
                (FitzpatrickAction::Ignore, Some(f)) => {
                    out.push(':');
                    out.push(f.as_char());
                }
                _ => out.push(':'),
            }
        })
    }

    /// Replaces emojis with `&#128077;` style entities.
    ///
    /// Skin tones have no entity form, so [`FitzpatrickAction::Parse`] drops them like
    /// [`FitzpatrickAction::Remove`].
    pub fn parse_to_html_decimal(&self, input: &str, action: FitzpatrickAction) -> String {
        self.transform(input, |c, out| {
            out.push_str(&c.emoji.html_decimal());
            keep_raw_modifier(c, action, out);
        })
    }

    /// Replaces emojis with `&#x1f44d;` style entities, skin tones as in [`Self::parse_to_html_decimal`]
    pub fn parse_to_html_hexadecimal(&self, input: &str, action: FitzpatrickAction) -> String {
        self.transform(input, |c, out| {
            out.push_str(&c.emoji.html_hexadecimal());
            keep_raw_modifier(c, action, out);
        })
    }

    /// Replaces `:alias:` and `:alias|type_N:` with the emoji itself.
    ///
    /// Unknown aliases and skin tone names are left untouched.
    pub fn parse_to_unicode(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(open) = rest.find(':') {
            out.push_str(&rest[..open]);

            let after = &rest[open + 1..];
            let len = alias_len(after);

            if len > 0 && after[len..].starts_with(':') {
                if let Some(emoji) = self.render_alias(&after[..len]) {
                    out.push_str(&emoji);
                    rest = &after[len + 1..];
                    continue;
                }
            }

            // the closing colon may still open the next alias
            out.push(':');
            rest = after;
        }

        out.push_str(rest);
        out
    }

    fn render_alias(&self, body: &str) -> Option<String> {
        let (alias, fitzpatrick) = match body.split_once('|') {
            Some((alias, tone)) => (alias, Some(Fitzpatrick::from_type_name(tone)?)),
            None => (body, None),
        };

        let emoji = self.get_for_alias(alias)?;

        Some(match fitzpatrick {
            Some(f) => emoji.unicode_with(f),
            None => emoji.unicode().to_owned(),
        })
    }

    /// Replaces every emoji, along with its skin tone, with `replacement`
    pub fn replace_all_emojis(&self, input: &str, replacement: &str) -> String {
        self.transform(input, |_, out| out.push_str(replacement))
    }

    pub fn remove_all_emojis(&self, input: &str) -> String {
        self.transform(input, |_, _| {})
    }

    /// Removes only the given emojis, keeping all others
    pub fn remove_emojis(&self, input: &str, emojis: &[&Emoji]) -> String {
        self.transform(input, |c, out| {
            if !emojis.iter().any(|e| e.sequence() == c.emoji.sequence()) {
                push_candidate(c, out);
            }
        })
    }

    /// Removes all emojis except the given ones
    pub fn remove_all_emojis_except(&self, input: &str, emojis: &[&Emoji]) -> String {
        self.transform(input, |c, out| {
            if emojis.iter().any(|e| e.sequence() == c.emoji.sequence()) {
                push_candidate(c, out);
            }
        })
    }

    /// Every emoji found in `input`, including skin tones, in order of appearance
    pub fn extract_emojis(&self, input: &str) -> Vec<String> {
        let text: Vec<char> = input.chars().collect();

        self.scanner().candidates(&text).map(|c| text[c.start..c.fitzpatrick_end].iter().collect()).collect()
    }
}

fn push_candidate(c: &UnicodeCandidate<'_>, out: &mut String) {
    out.push_str(c.emoji.unicode());
    if let Some(f) = c.fitzpatrick {
        out.push(f.as_char());
    }
}

fn keep_raw_modifier(c: &UnicodeCandidate<'_>, action: FitzpatrickAction, out: &mut String) {
    if let (FitzpatrickAction::Ignore, Some(f)) = (action, c.fitzpatrick) {
        out.push(f.as_char());
    }
}
