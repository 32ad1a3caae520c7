//! CLI-facing naming convention values.
//!
//! Keeps clap out of the core crates: the CLI parses a [`Convention`] and
//! converts it into [`Case`].

use clap::ValueEnum;
use sprig_core::Case;

/// Naming convention argument, mirroring [`Case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Convention {
    Kebab,
    Camel,
    Pascal,
    Sentence,
    Snake,
    Title,
}

impl From<Convention> for Case {
    fn from(value: Convention) -> Self {
        match value {
            Convention::Kebab => Case::Kebab,
            Convention::Camel => Case::Camel,
            Convention::Pascal => Case::Pascal,
            Convention::Sentence => Case::Sentence,
            Convention::Snake => Case::Snake,
            Convention::Title => Case::Title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_core_case() {
        assert_eq!(Case::from(Convention::Kebab), Case::Kebab);
        assert_eq!(Case::from(Convention::Title), Case::Title);
    }

    #[test]
    fn test_value_enum_names() {
        assert_eq!(
            Convention::from_str("kebab", false).unwrap(),
            Convention::Kebab
        );
        assert_eq!(
            Convention::from_str("pascal", false).unwrap(),
            Convention::Pascal
        );
    }
}
