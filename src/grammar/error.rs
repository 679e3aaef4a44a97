#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateParseError {
    #[error("unclosed angle bracket at position {0}")]
    UnclosedAngleBracket(usize),
    #[error("unclosed square bracket at position {0}")]
    UnclosedSquareBracket(usize),
    #[error("unexpected closing bracket at position {0}")]
    UnexpectedCloseBracket(usize),
    #[error("empty variable name at position {0}")]
    EmptyVariable(usize),
    #[error("empty alternation")]
    EmptyAlternation,
    #[error("empty optional group")]
    EmptyOptional,
    #[error("empty template")]
    EmptyTemplate,
    #[error("template must start with a mandatory word")]
    LeadingOptional,
}

#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("invalid template '{template}': {source}")]
    Template {
        template: String,
        #[source]
        source: TemplateParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("argument '{0}' was not supplied")]
    Missing(String),
    #[error("argument '{name}' has value '{value}', expected {expected}")]
    Invalid {
        name: String,
        value: String,
        expected: &'static str,
    },
}
