//! Token-sequence formatting
//!
//! `IF` opens the first line, each branch body is indented by a tab on its own
//! line and `END IF` closes the statement on a line of its own.

use crate::frontend::lexer::tokens::{Reserved, Token};

/// Render tokens back to source text
///
/// No line ends in whitespace.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut output = String::new();

    for token in tokens {
        match token.as_reserved() {
            Some(Reserved::If) => {
                output.push_str(token.lexeme());
                output.push(' ');
            }
            Some(Reserved::Then) => {
                output.push_str(token.lexeme());
                output.push_str("\n\t");
            }
            Some(Reserved::Else) => {
                output.push('\n');
                output.push_str(token.lexeme());
                output.push_str("\n\t");
            }
            Some(Reserved::ElseIf) => {
                output.push('\n');
                output.push_str(token.lexeme());
                output.push(' ');
            }
            Some(Reserved::EndIf) => {
                output.push('\n');
                output.push_str(token.lexeme());
            }
            None => {
                output.push_str(token.lexeme());
                output.push(' ');
            }
        }
    }

    output
        .trim()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::lexer::tokenize;

    #[test]
    fn test_if_then_else_layout() {
        let tokens = tokenize("IF 1 > 0 THEN 5 + 3 ELSE 2 END IF").tokens;
        assert_eq!(
            format_tokens(&tokens),
            "IF 1 > 0 THEN\n\t5 + 3\nELSE\n\t2\nEND IF"
        );
    }

    #[test]
    fn test_elseif_layout() {
        let tokens = tokenize("if a then 1 elseif b then 2 end if").tokens;
        assert_eq!(
            format_tokens(&tokens),
            "IF a THEN\n\t1\nELSEIF b THEN\n\t2\nEND IF"
        );
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let tokens = tokenize("IF true THEN 5 + 3 ELSE 1 END IF").tokens;
        let formatted = format_tokens(&tokens);
        assert!(formatted.lines().all(|line| line == line.trim_end()));
        assert!(formatted.contains("\t5 + 3\nELSE"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_tokens(&[]), "");
    }

    #[test]
    fn test_formatted_text_lexes_cleanly() {
        let tokens = tokenize("if 1==1 then 2*3 else 4 end if").tokens;
        let formatted = format_tokens(&tokens);
        let again = tokenize(&formatted);
        assert!(again.diagnostics.is_empty());
        assert_eq!(again.tokens, tokens);
    }
}
