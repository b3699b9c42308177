use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::model::PrimitiveType;

/// Coarse classification of a built-in C type, enough for collaborators that
/// pick a marshaling strategy. Name synthesis only needs the spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Char,
    Signed,
    Unsigned,
    Float,
    Bool,
}

use PrimitiveKind as K;
lazy_static! {
    static ref PRIMITIVES: FxHashMap<&'static str, PrimitiveKind> = {
        let mut m = FxHashMap::default();
        for (name, kind) in [
            ("char", K::Char),
            ("signed char", K::Signed),
            ("unsigned char", K::Unsigned),
            ("wchar_t", K::Char),
            ("short", K::Signed),
            ("int", K::Signed),
            ("long", K::Signed),
            ("long long", K::Signed),
            ("signed short", K::Signed),
            ("signed int", K::Signed),
            ("signed long", K::Signed),
            ("signed long long", K::Signed),
            ("unsigned short", K::Unsigned),
            ("unsigned int", K::Unsigned),
            ("unsigned long", K::Unsigned),
            ("unsigned long long", K::Unsigned),
            ("float", K::Float),
            ("double", K::Float),
            ("long double", K::Float),
            ("_Bool", K::Bool),
            ("int8_t", K::Signed),
            ("int16_t", K::Signed),
            ("int32_t", K::Signed),
            ("int64_t", K::Signed),
            ("uint8_t", K::Unsigned),
            ("uint16_t", K::Unsigned),
            ("uint32_t", K::Unsigned),
            ("uint64_t", K::Unsigned),
            ("intptr_t", K::Signed),
            ("uintptr_t", K::Unsigned),
            ("ptrdiff_t", K::Signed),
            ("size_t", K::Unsigned),
            ("ssize_t", K::Signed),
        ] {
            m.insert(name, kind);
        }
        m
    };
}

pub fn lookup(name: &str) -> Option<PrimitiveKind> {
    PRIMITIVES.get(name).copied()
}

pub fn is_primitive(name: &str) -> bool {
    PRIMITIVES.contains_key(name)
}

/// Longest run of `words` that, joined with single spaces, names a known
/// primitive ("unsigned long long" wins over "unsigned long"). Returns the
/// length of the run in words.
pub fn longest_match<S: AsRef<str>>(words: &[S]) -> Option<usize> {
    (1..=words.len()).rev().find(|&n| {
        let candidate = words[..n]
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        is_primitive(&candidate)
    })
}

impl PrimitiveType {
    pub fn kind(&self) -> Option<PrimitiveKind> {
        lookup(&self.name)
    }

    pub fn is_char_type(&self) -> bool {
        matches!(self.kind(), Some(PrimitiveKind::Char))
    }

    pub fn is_integer_type(&self) -> bool {
        matches!(
            self.kind(),
            Some(PrimitiveKind::Signed | PrimitiveKind::Unsigned | PrimitiveKind::Bool)
        )
    }

    pub fn is_float_type(&self) -> bool {
        matches!(self.kind(), Some(PrimitiveKind::Float))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("int"), Some(PrimitiveKind::Signed));
        assert_eq!(lookup("long long"), Some(PrimitiveKind::Signed));
        assert_eq!(lookup("size_t"), Some(PrimitiveKind::Unsigned));
        assert_eq!(lookup("foo_t"), None);
    }

    #[test]
    fn test_longest_match() {
        assert_eq!(longest_match(&["unsigned", "long", "long"]), Some(3));
        assert_eq!(longest_match(&["long", "double"]), Some(2));
        assert_eq!(longest_match(&["long", "foo"]), Some(1));
        assert_eq!(longest_match(&["foo"]), None);
    }

    #[test]
    fn test_classification() {
        let p = |name: &str| PrimitiveType { name: name.into() };
        assert!(p("char").is_char_type());
        assert!(p("unsigned int").is_integer_type());
        assert!(p("_Bool").is_integer_type());
        assert!(p("long double").is_float_type());
        assert!(!p("float").is_integer_type());
    }
}
