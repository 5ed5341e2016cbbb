use emoji::{Category, CatalogError, Fitzpatrick, FitzpatrickAction, Matches};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_global_init_once() {
    let db = emoji::db();

    assert!(std::ptr::eq(db, emoji::try_db().unwrap()));
    assert!(matches!(emoji::init(), Err(CatalogError::AlreadyInitialized)));
}

#[test]
fn test_grinning() {
    let grinning = emoji::get_for_alias("grinning").unwrap();

    assert_eq!(grinning.sequence(), &['\u{1F600}']);
    assert_eq!(grinning.category(), Category::Smileys);

    assert!(emoji::is_emoji("😀"));
    assert!(emoji::contains_emoji("hello 😀 world"));
    assert!(!emoji::contains_emoji("hello world"));

    let text = chars("hello 😀 world");
    let c = emoji::find_emojis(&text).next().unwrap();
    assert_eq!(c.emoji, grinning);
    assert_eq!((c.start, c.end, c.fitzpatrick_end), (6, 7, 7));
}

#[test]
fn test_unique_sequences() {
    let all: Vec<_> = emoji::db().catalog_order().iter().map(|e| e.sequence()).collect();

    for (i, a) in all.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_classification_consistency() {
    let db = emoji::db();

    for e in db.catalog_order() {
        let seq = e.sequence();

        assert_eq!(db.classify(seq), Matches::Exact);
        assert_eq!(db.get_by_sequence(seq), Some(e));

        for end in 1..seq.len() {
            match db.classify(&seq[..end]) {
                Matches::Exact => assert_eq!(db.get_by_sequence(&seq[..end]).unwrap().sequence(), &seq[..end]),
                Matches::Partial => assert!(db.get_by_sequence(&seq[..end]).is_none()),
                Matches::Impossible => panic!("prefix of {} is impossible", e.alias()),
            }
        }
    }

    // a bare heart without its variation selector is only a prefix
    assert_eq!(emoji::classify(&['\u{2764}']), Matches::Partial);
    assert_eq!(emoji::classify(&['\u{2764}', '\u{FE0F}']), Matches::Exact);
    assert_eq!(emoji::classify(&chars("abc")), Matches::Impossible);
}

#[test]
fn test_longest_match_wins() {
    let db = emoji::db();

    let text = chars("👨‍👩‍👧‍👦");
    let c = db.next_candidate(&text, 0).unwrap();
    assert_eq!(c.emoji.alias(), "family_man_woman_girl_boy");
    assert_eq!(c.fitzpatrick_end, text.len());

    let text = chars("👨‍👩‍👧 and 👨‍👩");
    let found: Vec<_> = emoji::find_emojis(&text).map(|c| c.emoji.alias()).collect();
    assert_eq!(found, ["family_man_woman_girl", "man", "woman"]);
}

#[test]
fn test_modifiers() {
    let db = emoji::db();
    let wave = emoji::get_for_alias(":wave:").unwrap();
    assert!(wave.supports_fitzpatrick());

    for f in Fitzpatrick::ALL {
        let text = chars(&wave.unicode_with(f));
        let c = db.next_candidate(&text, 0).unwrap();

        assert_eq!(c.emoji, wave);
        assert_eq!(c.fitzpatrick, Some(f));
        assert_eq!((c.end, c.fitzpatrick_end), (1, 2));
        assert!(db.is_emoji(&wave.unicode_with(f)));
    }

    let text = chars("👋!");
    let c = db.next_candidate(&text, 0).unwrap();
    assert_eq!(c.fitzpatrick, None);
    assert_eq!(c.fitzpatrick_end, c.end);

    // a lone modifier is a component emoji of its own
    let text = chars("🏽");
    assert_eq!(db.next_candidate(&text, 0).unwrap().emoji.alias(), "skin-tone-4");
}

#[test]
fn test_only_emojis() {
    let db = emoji::db();

    let mut everything = String::new();
    for e in db.all() {
        everything.push_str(e.unicode());
        if e.supports_fitzpatrick() {
            everything.push(Fitzpatrick::Type3.as_char());
        }
    }

    assert!(emoji::is_only_emojis(&everything));
    assert_eq!(db.remove_all_emojis(&everything), "");

    assert!(emoji::is_only_emojis("🇫🇷🇩🇪#\u{FE0F}\u{20E3}"));
    assert!(!emoji::is_only_emojis("🇫🇷 🇩🇪"));
    assert!(!emoji::is_only_emojis("#"));
    // removing emojis from an empty string leaves nothing behind
    assert!(emoji::is_only_emojis(""));
    assert!(emoji::db().remove_all_emojis("").is_empty());
}

#[test]
fn test_lookups() {
    let flags: Vec<_> = emoji::get_for_tag("flag").unwrap().map(|e| e.alias()).collect();
    assert_eq!(flags, ["us", "fr", "de", "jp", "gb"]);

    assert!(emoji::get_for_category(Category::Flags).unwrap().all(|e| e.category() == Category::Flags));

    assert_eq!(emoji::get_by_unicode("🇯🇵").unwrap().alias(), "jp");
    assert_eq!(emoji::get_for_alias("uk").unwrap().alias(), "gb");

    let all: Vec<_> = emoji::get_all().collect();
    assert!(all.windows(2).all(|w| w[0].sequence().len() >= w[1].sequence().len()));

    assert!(emoji::get_all_tags().any(|t| t == "pet"));
}

#[test]
fn test_empty_inputs() {
    assert!(emoji::get_for_alias("").is_none());
    assert!(emoji::get_for_tag("").is_none());
    assert!(emoji::get_by_unicode("").is_none());
    assert!(!emoji::is_emoji(""));
    assert!(!emoji::contains_emoji(""));
    assert_eq!(emoji::find_emojis(&[]).count(), 0);
}

#[test]
fn test_parser() {
    let db = emoji::db();

    let text = "Ship it 🚀🔥, great work 👍🏾!";
    let aliased = db.parse_to_aliases(text, FitzpatrickAction::Parse);

    assert_eq!(aliased, "Ship it :rocket::fire:, great work :+1|type_5:!");
    assert_eq!(db.parse_to_unicode(&aliased), text);
    assert_eq!(db.extract_emojis(text), ["🚀", "🔥", "👍🏾"]);
}
