use crate::ast::Modifier;
use std::fmt;

/// Access level copied from the renamed declaration onto its shim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Internal,
    FilePrivate,
    Private,
}

impl Visibility {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Visibility::Public),
            "internal" => Some(Visibility::Internal),
            "fileprivate" => Some(Visibility::FilePrivate),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::FilePrivate => "fileprivate",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// First access-level modifier in source order, if any
pub fn extract_visibility(modifiers: &[Modifier]) -> Option<Visibility> {
    modifiers.iter().find_map(|modifier| Visibility::from_keyword(&modifier.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::modifiers;

    #[test]
    fn test_no_modifiers() {
        assert_eq!(extract_visibility(&[]), None);
    }

    #[test]
    fn test_ignores_unrelated_modifiers() {
        assert_eq!(extract_visibility(&modifiers(["static", "final", "mutating"])), None);
    }

    #[test]
    fn test_first_access_level_wins() {
        let mods = modifiers(["static", "fileprivate", "public"]);
        assert_eq!(extract_visibility(&mods), Some(Visibility::FilePrivate));
    }

    #[test]
    fn test_each_keyword() {
        for keyword in ["public", "internal", "fileprivate", "private"] {
            let visibility = extract_visibility(&modifiers([keyword])).unwrap();
            assert_eq!(visibility.keyword(), keyword);
        }
    }

    #[test]
    fn test_open_is_not_recognised() {
        assert_eq!(extract_visibility(&modifiers(["open"])), None);
    }
}
