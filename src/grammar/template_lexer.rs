use super::TemplateParseError;

/// Raw token produced by the template lexer.
/// The parser turns these into a structured [`Template`](super::template_parser::Template).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexToken {
    /// A plain word (e.g. "get", "layers")
    Literal(String),
    /// A pipe-separated alternation (e.g. "on|off" -> ["on", "off"])
    Alternation(Vec<String>),
    /// Angle-bracket capture (e.g. "<layerid>", "<width=1920>")
    Variable {
        name: String,
        default: Option<String>,
    },
    /// Opening square bracket `[`
    OpenBracket,
    /// Closing square bracket `]`
    CloseBracket,
}

/// Tokenize a command template into a sequence of `LexToken`s.
///
/// Square brackets may nest; every `[` must be closed by a later `]`.
pub fn tokenize(template: &str) -> Result<Vec<LexToken>, TemplateParseError> {
    let mut tokens = Vec::new();
    let mut chars = template.char_indices().peekable();
    let mut open_brackets: Vec<usize> = Vec::new();

    while let Some(&(pos, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }

            // Variable capture: <name> or <name=default>
            '<' => {
                chars.next(); // consume '<'
                let mut content = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '>' {
                        closed = true;
                        break;
                    }
                    content.push(c);
                }
                if !closed {
                    return Err(TemplateParseError::UnclosedAngleBracket(pos));
                }
                tokens.push(classify_variable(&content, pos)?);
            }

            '[' => {
                open_brackets.push(pos);
                tokens.push(LexToken::OpenBracket);
                chars.next();
            }

            ']' => {
                if open_brackets.pop().is_none() {
                    return Err(TemplateParseError::UnexpectedCloseBracket(pos));
                }
                tokens.push(LexToken::CloseBracket);
                chars.next();
            }

            _ => {
                let word = consume_word(&mut chars);
                tokens.push(classify_word(&word)?);
            }
        }
    }

    if let Some(start) = open_brackets.pop() {
        return Err(TemplateParseError::UnclosedSquareBracket(start));
    }

    Ok(tokens)
}

/// Consume characters forming a word (up to whitespace or bracket syntax).
fn consume_word(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) -> String {
    let mut word = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if is_word_boundary(c) {
            break;
        }
        word.push(c);
        chars.next();
    }
    word
}

fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, '[' | ']' | '<')
}

fn classify_word(word: &str) -> Result<LexToken, TemplateParseError> {
    if word.contains('|') {
        let parts: Vec<String> = word.split('|').map(str::to_string).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(TemplateParseError::EmptyAlternation);
        }
        Ok(LexToken::Alternation(parts))
    } else {
        Ok(LexToken::Literal(word.to_string()))
    }
}

/// Split `name=default` and validate that the name is present.
fn classify_variable(content: &str, pos: usize) -> Result<LexToken, TemplateParseError> {
    let (name, default) = match content.split_once('=') {
        Some((name, default)) => (name, Some(default.to_string())),
        None => (content, None),
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(TemplateParseError::EmptyVariable(pos));
    }
    Ok(LexToken::Variable {
        name: name.to_string(),
        default,
    })
}
