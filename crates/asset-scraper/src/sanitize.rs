//! Display name sanitization.
//!
//! Reduces an arbitrary wiki display name to a filesystem-safe ASCII token:
//! transliterate to ASCII, map ampersands to "and", drop everything outside
//! alphanumerics and spaces, then replace spaces with underscores. A literal
//! `_amp` is mapped to `_and` to recover ampersands already lost to the
//! wiki's own name encoding.

use deunicode::deunicode;

/// Sanitize a display name into a filesystem-safe token
pub fn sanitize_name(name: &str) -> String {
    deunicode(name)
        .replace("&amp;", "&")
        .replace('&', "and")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect::<String>()
        .replace(' ', "_")
        .replace("_amp", "_and")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        assert_eq!(sanitize_name("Gala Mym"), "Gala_Mym");
    }

    #[test]
    fn test_ampersand_becomes_and() {
        assert_eq!(sanitize_name("Lv & Order"), "Lv_and_Order");
    }

    #[test]
    fn test_diacritics_are_folded() {
        assert_eq!(sanitize_name("Álex"), "Alex");
        assert_eq!(sanitize_name("Naveed"), "Naveed");
    }

    #[test]
    fn test_encoded_ampersand_recovered() {
        // Upstream encoding may have already reduced "&" to "amp"
        assert_eq!(sanitize_name("Dragon amp Knight"), "Dragon_and_Knight");
        assert_eq!(sanitize_name("Lv &amp; Order"), "Lv_and_Order");
    }

    #[test]
    fn test_punctuation_is_dropped() {
        assert_eq!(sanitize_name("The Shining Overlord!"), "The_Shining_Overlord");
        assert_eq!(sanitize_name("Hanetsuki: Rally"), "Hanetsuki_Rally");
    }

    #[test]
    fn test_amp_inside_word_is_untouched() {
        assert_eq!(sanitize_name("Campfire Tale"), "Campfire_Tale");
    }
}
