fn main() {
    let db = emoji::init().expect("bundled catalog");

    let text: Vec<char> = "Hi \u{1F44B}\u{1F3FD} from the \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} family \u{1F1EB}\u{1F1F7}"
        .chars()
        .collect();

    for c in db.scanner().candidates(&text) {
        print!("{}..{} :{}: ", c.start, c.fitzpatrick_end, c.emoji.alias());
        print_chars(text[c.start..c.fitzpatrick_end].iter());
    }

    if let Some(emoji) = emoji::get_for_alias(":heart:") {
        assert!(emoji::is_emoji(emoji.unicode()));

        print_chars(emoji.sequence().iter());
    }
}

fn print_chars<'a>(c: impl Iterator<Item = &'a char>) {
    for c in c {
        print!("{:X} ", *c as u32);
    }
    println!();
}
