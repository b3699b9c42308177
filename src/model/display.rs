use std::fmt::{self, Display, Formatter};

use crate::{decl, model::Type};

impl Display for Type {
    /// Best-effort bare C spelling, for error messages and debug output.
    /// Falls back to a non-C placeholder where no spelling exists, since
    /// `Display` cannot surface the render error itself.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match decl::render(self, "") {
            Ok(text) => write!(f, "{text}"),
            Err(_) => match self {
                Type::Struct(_) => write!(f, "struct <anonymous>"),
                Type::Union(_) => write!(f, "union <anonymous>"),
                Type::Enum(_) => write!(f, "enum <anonymous>"),
                _ => write!(f, "<unrepresentable type>"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StructType;

    #[test]
    fn test_display_spelling() {
        let ty = Type::const_pointer(Type::primitive("int"));
        assert_eq!(ty.to_string(), "int const *");
    }

    #[test]
    fn test_display_anonymous_fallback() {
        let ty = Type::Struct(StructType {
            tag: None,
            fields: Vec::new(),
        });
        assert_eq!(ty.to_string(), "struct <anonymous>");
    }
}
