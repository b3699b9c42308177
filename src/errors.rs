use thiserror::Error;

/// Failures the declarator synthesizer can report. Type trees arrive
/// well-formed from a trusted builder, so the set is deliberately small;
/// anything else is a caller programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The recursion guard tripped before the tree bottomed out.
    #[error("type nesting deeper than {0} levels")]
    TooDeep(usize),

    /// The type has no C spelling in declaration text, e.g. an anonymous
    /// aggregate outside a typedef.
    #[error("anonymous {0} has no C spelling in a declaration")]
    Unrepresentable(&'static str),
}
