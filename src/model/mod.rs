pub mod display;
pub mod types;

use bitflags::bitflags;

pub use crate::model::types::*;

bitflags! {
    /// Pointer qualifiers. The set is unordered; rendering always spells the
    /// keywords in the fixed order `const`, `volatile`, `__restrict`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Qualifiers: u8 {
        const CONST = 1;
        const VOLATILE = 1 << 1;
        const RESTRICT = 1 << 2;
    }
}

impl Qualifiers {
    /// Qualifier keywords in canonical spelling order. `restrict` is spelled
    /// `__restrict`, which both gcc and msvc accept.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        [
            (Qualifiers::CONST, "const"),
            (Qualifiers::VOLATILE, "volatile"),
            (Qualifiers::RESTRICT, "__restrict"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, kw)| kw)
    }
}

/// A C type. Immutable once built; the declarator synthesizer only ever
/// borrows it. Recursion is by exclusive ownership, so a tree is always
/// acyclic — self-referential structs are expressed upstream through an
/// unresolved name, never through the tree itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Void,
    Primitive(PrimitiveType),
    Pointer(PointerType),
    Array(ArrayType),
    RawFunction(RawFunctionType),
    FunctionPtr(FunctionPtrType),
    Struct(StructType),
    Union(UnionType),
    Enum(EnumType),
    Unknown(UnknownType),
    UnknownPtr(UnknownPtrType),
}

impl Type {
    pub fn void_type() -> Type {
        Type::Void
    }

    pub fn primitive(name: &str) -> Type {
        Type::Primitive(PrimitiveType { name: name.into() })
    }

    pub fn pointer(underlying: Type) -> Type {
        Type::pointer_with(underlying, Qualifiers::empty())
    }

    pub fn const_pointer(underlying: Type) -> Type {
        Type::pointer_with(underlying, Qualifiers::CONST)
    }

    pub fn pointer_with(underlying: Type, quals: Qualifiers) -> Type {
        Type::Pointer(PointerType {
            underlying: Box::new(underlying),
            quals,
        })
    }

    pub fn array(underlying: Type, length: Option<usize>) -> Type {
        Type::Array(ArrayType {
            underlying: Box::new(underlying),
            length,
        })
    }

    pub fn raw_function(parameters: Vec<Type>, return_type: Type, variadic: bool) -> Type {
        Type::RawFunction(RawFunctionType {
            parameters,
            return_type: Box::new(return_type),
            variadic,
        })
    }

    pub fn function_ptr(parameters: Vec<Type>, return_type: Type, variadic: bool) -> Type {
        Type::FunctionPtr(FunctionPtrType {
            parameters,
            return_type: Box::new(return_type),
            variadic,
        })
    }

    pub fn unknown(name: &str) -> Type {
        Type::Unknown(UnknownType { name: name.into() })
    }

    pub fn unknown_ptr(name: &str) -> Type {
        Type::UnknownPtr(UnknownPtrType { name: name.into() })
    }

    pub fn is_array_type(&self) -> bool {
        matches!(self, Type::Array(_))
    }

    pub fn is_raw_function(&self) -> bool {
        matches!(self, Type::RawFunction(_))
    }
}
