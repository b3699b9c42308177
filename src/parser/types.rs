use anyhow::{Result, bail};
use colored::Colorize;

use crate::{
    lexer::token::TokenKind,
    model::{EnumType, Qualifiers, StructType, Type, UnionType},
    parser::Parser,
    primitives,
};

use TokenKind as T;

/// Recursive descent over the prefix type notation. The grammar is
/// deliberately tiny and is not C:
///
/// ```text
/// type  := '*' qual* type | '[' number? ']' type
///        | 'fn' '(' params ')' type
///        | 'struct' ident | 'union' ident | 'enum' ident
///        | 'void' | ident+
/// ```
pub fn parse_type(parser: &mut Parser) -> Result<Type> {
    match parser.current_token_kind() {
        T::Star => parse_pointer_type(parser),
        T::OpenBracket => parse_array_type(parser),
        T::Fn => parse_function_type(parser),
        T::Struct | T::Union | T::Enum => parse_tagged_type(parser),
        T::Void => {
            parser.advance();
            Ok(Type::void_type())
        }
        T::Identifier => parse_name_type(parser),
        other => bail!(
            format!("Expected a type but received {} instead.", other)
                .red()
                .bold()
        ),
    }
}

fn parse_pointer_type(parser: &mut Parser) -> Result<Type> {
    parser.expect(T::Star)?;

    let mut quals = Qualifiers::empty();
    loop {
        match parser.current_token_kind() {
            T::Const => quals |= Qualifiers::CONST,
            T::Volatile => quals |= Qualifiers::VOLATILE,
            T::Restrict => quals |= Qualifiers::RESTRICT,
            _ => break,
        }
        parser.advance();
    }

    let underlying = parse_type(parser)?;

    // A pointer to a function type is its own declarator shape in C, so the
    // builder converts instead of nesting.
    if let Type::RawFunction(raw) = &underlying {
        if !quals.is_empty() {
            bail!(
                "Qualifiers cannot be spelled on a pointer to a function type."
                    .red()
                    .bold()
            );
        }
        return Ok(Type::FunctionPtr(raw.as_function_pointer()));
    }

    Ok(Type::pointer_with(underlying, quals))
}

fn parse_array_type(parser: &mut Parser) -> Result<Type> {
    parser.expect(T::OpenBracket)?;

    let length = match parser.current_token_kind() {
        T::Number => {
            let token = parser.advance();
            Some(token.value.parse::<usize>()?)
        }
        _ => None,
    };

    parser.expect(T::CloseBracket)?;
    let underlying = parse_type(parser)?;

    Ok(Type::array(underlying, length))
}

fn parse_function_type(parser: &mut Parser) -> Result<Type> {
    parser.expect(T::Fn)?;
    parser.expect(T::OpenParen)?;

    let mut parameters = Vec::new();
    let mut variadic = false;

    while parser.current_token_kind() != T::CloseParen {
        if parser.current_token_kind() == T::Ellipsis {
            parser.advance();
            variadic = true;
            break;
        }

        parameters.push(parse_type(parser)?);

        if parser.current_token_kind() == T::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(T::CloseParen)?;
    let return_type = parse_type(parser)?;

    Ok(Type::raw_function(parameters, return_type, variadic))
}

fn parse_tagged_type(parser: &mut Parser) -> Result<Type> {
    let keyword = parser.advance();
    let tag = parser.expect_error(
        TokenKind::Identifier,
        Some(format!("Expected a tag after '{}'.", keyword.kind)),
    )?;

    Ok(match keyword.kind {
        T::Struct => Type::Struct(StructType {
            tag: Some(tag.value),
            fields: Vec::new(),
        }),
        T::Union => Type::Union(UnionType {
            tag: Some(tag.value),
            fields: Vec::new(),
        }),
        T::Enum => Type::Enum(EnumType {
            tag: Some(tag.value),
            enumerators: Vec::new(),
        }),
        _ => unreachable!("tagged type keyword"),
    })
}

fn parse_name_type(parser: &mut Parser) -> Result<Type> {
    // Identifiers only ever run together in multi-word primitive names, so
    // consume the whole run and take the longest catalog match.
    let mut words: Vec<Box<str>> = Vec::new();
    while parser.current_token_kind() == T::Identifier {
        words.push(parser.advance().value);
    }

    if let Some(n) = primitives::longest_match(&words) {
        if n != words.len() {
            bail!(
                format!(
                    "Unexpected '{}' after the type name '{}'.",
                    words[n],
                    words[..n].join(" ")
                )
                .red()
                .bold()
            );
        }
        return Ok(Type::primitive(&words.join(" ")));
    }

    if let [name] = words.as_slice() {
        return Ok(Type::unknown(name));
    }

    bail!(
        format!("Unknown type name '{}'.", words.join(" "))
            .red()
            .bold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_expr(input: &str) -> Result<Type> {
        crate::parser::parse(tokenize(input.to_string())?)
    }

    #[test]
    fn test_parse_primitive_longest_match() {
        assert_eq!(
            parse_expr("unsigned long long").unwrap(),
            Type::primitive("unsigned long long")
        );
        assert_eq!(parse_expr("int").unwrap(), Type::primitive("int"));
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(parse_expr("foo_t").unwrap(), Type::unknown("foo_t"));
        assert!(parse_expr("foo_t bar_t").is_err());
    }

    #[test]
    fn test_parse_pointer_with_qualifiers() {
        let ty = parse_expr("*const volatile int").unwrap();
        assert_eq!(
            ty,
            Type::pointer_with(
                Type::primitive("int"),
                Qualifiers::CONST | Qualifiers::VOLATILE
            )
        );
    }

    #[test]
    fn test_parse_array_chain() {
        let ty = parse_expr("[5][]int").unwrap();
        assert_eq!(
            ty,
            Type::array(Type::array(Type::primitive("int"), None), Some(5))
        );
    }

    #[test]
    fn test_parse_function_types() {
        let ty = parse_expr("fn(int, ...) int").unwrap();
        assert_eq!(
            ty,
            Type::raw_function(vec![Type::primitive("int")], Type::primitive("int"), true)
        );

        let ty = parse_expr("*fn() void").unwrap();
        assert_eq!(ty, Type::function_ptr(Vec::new(), Type::void_type(), false));
    }

    #[test]
    fn test_parse_rejects_qualified_function_pointer() {
        assert!(parse_expr("*const fn() void").is_err());
    }

    #[test]
    fn test_parse_tagged_types() {
        assert!(matches!(
            parse_expr("struct foo_s").unwrap(),
            Type::Struct(StructType { tag: Some(tag), .. }) if &*tag == "foo_s"
        ));
        assert!(parse_expr("enum").is_err());
    }
}
