use twilight_model::{channel::message::EmojiReactionType, id::Id};

/// Parse an emoji argument for a button override.
///
/// Accepts custom emoji mentions (`<:name:id>`, `<a:name:id>`) and treats any
/// other non-blank text as a unicode emoji.
pub fn parse_emoji(raw: &str) -> Option<EmojiReactionType> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with('<') && trimmed.ends_with('>') {
        let inner = trimmed.strip_prefix('<')?.strip_suffix('>')?;
        let (animated, rest) = match inner.strip_prefix("a:") {
            Some(rest) => (true, rest),
            None => (false, inner.strip_prefix(':')?),
        };
        let (name, id) = rest.rsplit_once(':')?;
        let id = Id::new_checked(id.parse::<u64>().ok()?)?;

        return Some(EmojiReactionType::Custom {
            animated,
            id,
            name: (!name.is_empty()).then(|| name.to_owned()),
        });
    }

    Some(EmojiReactionType::Unicode {
        name: trimmed.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unicode_emoji_is_trimmed() {
        assert_eq!(
            parse_emoji(" ➡️ "),
            Some(EmojiReactionType::Unicode {
                name: "➡️".to_owned()
            })
        );
    }

    #[test]
    fn custom_and_animated_mentions() {
        assert_eq!(
            parse_emoji("<:next:123>"),
            Some(EmojiReactionType::Custom {
                animated: false,
                id: Id::new(123),
                name: Some("next".to_owned()),
            })
        );
        assert_eq!(
            parse_emoji("<a:spin:42>"),
            Some(EmojiReactionType::Custom {
                animated: true,
                id: Id::new(42),
                name: Some("spin".to_owned()),
            })
        );
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(parse_emoji("   "), None);
        assert_eq!(parse_emoji("<:next:0>"), None);
        assert_eq!(parse_emoji("<:next:abc>"), None);
        assert_eq!(parse_emoji("<next>"), None);
    }
}
