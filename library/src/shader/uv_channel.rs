use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount, EnumIter};

pub(crate) mod conventions {
    pub(crate) const UV_SEMANTIC_PREFIX: &str = "TEXCOORD";
}

/// Texture-coordinate set of a mesh that a sampling operation reads from.
#[repr(u32)]
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash, Default, TryFromPrimitive, EnumCount, EnumIter, Serialize, Deserialize,
)]
pub enum UvChannel {
    #[default]
    Texcoord0 = 0,
    Texcoord1 = 1,
    Texcoord2 = 2,
    Texcoord3 = 3,
    Texcoord4 = 4,
    Texcoord5 = 5,
    Texcoord6 = 6,
    Texcoord7 = 7,
    Texcoord8 = 8,
    Texcoord9 = 9,
}

impl UvChannel {
    /// Indices past the last supported set are clamped to it.
    #[must_use]
    pub fn from_index(index: u32) -> Self {
        UvChannel::try_from(index).unwrap_or(UvChannel::Texcoord9)
    }

    #[must_use]
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Semantic under which shaders address this set: the bare prefix for
    /// set 0, the prefix followed by the decimal index for every other set.
    #[must_use]
    pub fn semantic_name(self) -> String {
        if self.index() == 0 {
            conventions::UV_SEMANTIC_PREFIX.to_string()
        } else {
            format!("{}{}", conventions::UV_SEMANTIC_PREFIX, self.index())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::EnumCount;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case(UvChannel::Texcoord0, "TEXCOORD")]
    #[case(UvChannel::Texcoord1, "TEXCOORD1")]
    #[case(UvChannel::Texcoord2, "TEXCOORD2")]
    #[case(UvChannel::Texcoord9, "TEXCOORD9")]
    fn test_semantic_name(#[case] channel: UvChannel, #[case] expected: &str) {
        assert_eq!(channel.semantic_name(), expected);
    }

    #[rstest]
    #[case(0, UvChannel::Texcoord0)]
    #[case(4, UvChannel::Texcoord4)]
    #[case(9, UvChannel::Texcoord9)]
    #[case(12, UvChannel::Texcoord9)]
    #[case(u32::MAX, UvChannel::Texcoord9)]
    fn test_from_index(#[case] index: u32, #[case] expected: UvChannel) {
        assert_eq!(UvChannel::from_index(index), expected);
    }

    #[test]
    fn test_ten_sets_are_supported() {
        assert_eq!(UvChannel::COUNT, 10);
    }

    #[test]
    fn test_index_round_trip() {
        for channel in UvChannel::iter() {
            assert_eq!(UvChannel::from_index(channel.index()), channel);
        }
    }
}
