use std::fmt::Display;

#[derive(Debug, Clone, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Box<str>,
}

impl Token {
    pub fn new(kind: TokenKind, value: &str) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

macro_rules! define_tokens {
    (
        reserved: [$( $reserved:ident ),* $(,)?],
        symbols: [$( $symbol:ident => $symbol_str:literal ),* $(,)?],
        literals: [$( $literal:ident => $literal_str:literal ),* $(,)?],
        special: [$( $special:ident => $special_str:literal ),* $(,)?]
    ) => {
        #[derive(Debug, Clone, PartialOrd, Ord, Hash, Eq, PartialEq, Copy)]
        pub enum TokenKind {
            $( $reserved ),*,
            $( $symbol ),*,
            $( $literal ),*,
            $( $special ),*
        }

        pub fn lookup_reserved(ident: &str) -> Option<TokenKind> {
            use TokenKind as T;
            static RESERVED_KEYWORDS: std::sync::OnceLock<rustc_hash::FxHashMap<Box<str>, TokenKind>> = std::sync::OnceLock::new();
            let lu = RESERVED_KEYWORDS.get_or_init(|| {
                let mut m = rustc_hash::FxHashMap::default();
                $(
                    m.insert(stringify!($reserved).to_lowercase().into_boxed_str(), T::$reserved);
                )*
                m
            });
            lu.get(ident).cloned()
        }

        impl std::fmt::Display for TokenKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use TokenKind as T;
                match self {
                    $( T::$reserved => write!(f, "{}", stringify!($reserved).to_lowercase()), )*
                    $( T::$symbol => write!(f, "{}", $symbol_str), )*
                    $( T::$literal => write!(f, "{}", $literal_str), )*
                    $( T::$special => write!(f, "{}", $special_str), )*
                }
            }
        }
    };
}

define_tokens! {
    reserved: [Fn, Struct, Union, Enum, Void, Const, Volatile, Restrict],
    symbols: [
        Star => "*",
        OpenBracket => "[",
        CloseBracket => "]",
        OpenParen => "(",
        CloseParen => ")",
        Comma => ",",
        Ellipsis => "...",
    ],
    literals: [Identifier => "identifier", Number => "number"],
    special: [Eof => "<eof>", Illegal => "<illegal>"]
}
