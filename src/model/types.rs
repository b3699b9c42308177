use crate::model::{Qualifiers, Type};

#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveType {
    pub name: Box<str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerType {
    pub underlying: Box<Type>,
    pub quals: Qualifiers,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub underlying: Box<Type>,
    /// `None` renders as the incomplete suffix `[]`.
    pub length: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawFunctionType {
    pub parameters: Vec<Type>,
    pub return_type: Box<Type>,
    pub variadic: bool,
}

impl RawFunctionType {
    /// The pointer-to-function counterpart of this signature. Builders call
    /// this when a pointer wraps a function type, since C declares the two
    /// with different declarator shapes.
    pub fn as_function_pointer(&self) -> FunctionPtrType {
        FunctionPtrType {
            parameters: self.parameters.clone(),
            return_type: self.return_type.clone(),
            variadic: self.variadic,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionPtrType {
    pub parameters: Vec<Type>,
    pub return_type: Box<Type>,
    pub variadic: bool,
}

/// A struct or union member. Layout data (bit widths, offsets) is carried for
/// collaborators that compute layout; name synthesis never reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: Box<str>,
    pub ty: Type,
    pub bit_width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    pub tag: Option<Box<str>>,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub tag: Option<Box<str>>,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enumerator {
    pub name: Box<str>,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub tag: Option<Box<str>>,
    pub enumerators: Vec<Enumerator>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownType {
    pub name: Box<str>,
}

/// An unresolved name that is known to already denote a pointer, e.g. a
/// typedef like `typedef struct foo *foo_p`. Renders as the bare name.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownPtrType {
    pub name: Box<str>,
}
