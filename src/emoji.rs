//! Emoji vocabulary shared with the face-analysis SDK.
//!
//! The SDK reports its dominant emoji as a glyph string; the game compares
//! code points so both sides agree on a single integer identity.

use std::fmt;

/// Unicode code point identifying one recognizable expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EmojiCode(pub u32);

impl EmojiCode {
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Code point of the first scalar value in `glyph`. Trailing variation
    /// selectors (e.g. U+FE0F after ☺) are ignored.
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        glyph.chars().next().map(|c| EmojiCode(c as u32))
    }

    /// The glyph as a `char`, if the code is a valid scalar value.
    pub fn glyph(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// HTML numeric character reference, e.g. `&#128528;`.
    pub fn html_entity(self) -> String {
        format!("&#{};", self.0)
    }

    pub fn is_known(self) -> bool {
        EMOJIS.contains(&self)
    }
}

impl fmt::Display for EmojiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.glyph() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "U+{:X}", self.0),
        }
    }
}

// Every emoji the detector can classify.
pub const EMOJIS: [EmojiCode; 13] = [
    EmojiCode(128528), // 😐 neutral
    EmojiCode(9786),   // ☺ relaxed
    EmojiCode(128515), // 😃 smiley
    EmojiCode(128524), // 😌 relieved
    EmojiCode(128527), // 😏 smirk
    EmojiCode(128521), // 😉 wink
    EmojiCode(128535), // 😗 kissing
    EmojiCode(128539), // 😛 tongue out
    EmojiCode(128540), // 😜 winking tongue
    EmojiCode(128542), // 😞 disappointed
    EmojiCode(128545), // 😡 rage
    EmojiCode(128563), // 😳 flushed
    EmojiCode(128561), // 😱 scream
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn emoji_set_is_unique_and_valid() {
        let unique: HashSet<_> = EMOJIS.iter().collect();
        assert_eq!(unique.len(), EMOJIS.len());
        for e in EMOJIS {
            assert!(e.glyph().is_some(), "{} is not a scalar value", e.code());
        }
    }

    #[test]
    fn from_glyph_handles_astral_and_bmp() {
        assert_eq!(EmojiCode::from_glyph("😐"), Some(EmojiCode(128528)));
        assert_eq!(EmojiCode::from_glyph("☺"), Some(EmojiCode(9786)));
        assert_eq!(EmojiCode::from_glyph("☺\u{FE0F}"), Some(EmojiCode(9786)));
        assert_eq!(EmojiCode::from_glyph(""), None);
    }

    #[test]
    fn glyph_round_trips_for_known_set() {
        for e in EMOJIS {
            let s = e.to_string();
            assert_eq!(EmojiCode::from_glyph(&s), Some(e));
        }
    }

    #[test]
    fn html_entity_and_display() {
        assert_eq!(EmojiCode(128528).html_entity(), "&#128528;");
        assert_eq!(EmojiCode(0xD800).to_string(), "U+D800");
        assert!(!EmojiCode(65).is_known());
        assert!(EMOJIS[4].is_known());
    }
}
