//! logos-based class attribute tokenizer.
//!
//! Splits a rendered class string into individual class names. Any run of
//! ASCII whitespace separates tokens.

use logos::Logos;

/// Token produced by the class attribute lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum ClassToken {
    /// A single class name.
    #[regex(r"[^ \t\n\r\f]+")]
    Class,
}

/// Split a class attribute value into its class names, in order.
pub fn class_tokens(input: &str) -> Vec<&str> {
    let mut lexer = ClassToken::lexer(input);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        if token == Ok(ClassToken::Class) {
            tokens.push(lexer.slice());
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(class_tokens("card card--active"), vec!["card", "card--active"]);
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(class_tokens("  a \t b\n\nc "), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_and_blank() {
        assert!(class_tokens("").is_empty());
        assert!(class_tokens("   ").is_empty());
    }

    #[test]
    fn keeps_tailwind_style_tokens() {
        assert_eq!(
            class_tokens("md:px-4 w-1/2 hover:bg-[#fff]"),
            vec!["md:px-4", "w-1/2", "hover:bg-[#fff]"]
        );
    }
}
