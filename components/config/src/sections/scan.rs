use emoji::FitzpatrickAction;

use crate::util;

crate::section! {
    #[serde(default)]
    pub struct Scan {
        /// What to do with skin tones when rendering emojis as aliases or HTML
        pub fitzpatrick: FitzpatrickAction = FitzpatrickAction::Parse => "EMOJI_FITZPATRICK" | util::parse[FitzpatrickAction::Parse],
    }
}
