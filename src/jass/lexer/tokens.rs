//! Token definitions for JASS
//!
//! `Token` is the classified stream handed to the parser. The logos lexer itself works on
//! the private `RawToken` in `lexer_impl`, whose compound lexemes are split into several
//! `Token`s.

use std::fmt;

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// Reserved words. None of them can be used as an identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }

            /// Name used in parse errors
            pub fn label(&self) -> &'static str {
                match self {
                    $(Keyword::$variant => concat!("'", $text, "' keyword"),)*
                }
            }

            pub fn from_word(word: &str) -> Option<Keyword> {
                match word {
                    $($text => Some(Keyword::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

keywords! {
    And => "and",
    Array => "array",
    Boolean => "boolean",
    Call => "call",
    Code => "code",
    Constant => "constant",
    Else => "else",
    ElseIf => "elseif",
    EndFunction => "endfunction",
    EndGlobals => "endglobals",
    EndIf => "endif",
    EndLoop => "endloop",
    ExitWhen => "exitwhen",
    Extends => "extends",
    False => "false",
    Function => "function",
    Globals => "globals",
    Handle => "handle",
    If => "if",
    Integer => "integer",
    Local => "local",
    Loop => "loop",
    Native => "native",
    Not => "not",
    Nothing => "nothing",
    Null => "null",
    Or => "or",
    Real => "real",
    Return => "return",
    Returns => "returns",
    Set => "set",
    String => "string",
    Takes => "takes",
    Then => "then",
    True => "true",
    Type => "type",
}

/// Punctuation and operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    LeftParenthesis,
    RightParenthesis,
    LeftBracket,
    RightBracket,
    Comma,
    Assign,
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
    Plus,
    Minus,
    Asterisk,
    Slash,
}

impl Symbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::LeftParenthesis => "(",
            Symbol::RightParenthesis => ")",
            Symbol::LeftBracket => "[",
            Symbol::RightBracket => "]",
            Symbol::Comma => ",",
            Symbol::Assign => "=",
            Symbol::Equals => "==",
            Symbol::NotEquals => "!=",
            Symbol::LessThan => "<",
            Symbol::GreaterThan => ">",
            Symbol::LessOrEqual => "<=",
            Symbol::GreaterOrEqual => ">=",
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Asterisk => "*",
            Symbol::Slash => "/",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Symbol::LeftParenthesis => "'('",
            Symbol::RightParenthesis => "')'",
            Symbol::LeftBracket => "'['",
            Symbol::RightBracket => "']'",
            Symbol::Comma => "','",
            Symbol::Assign => "'='",
            Symbol::Equals => "'=='",
            Symbol::NotEquals => "'!='",
            Symbol::LessThan => "'<'",
            Symbol::GreaterThan => "'>'",
            Symbol::LessOrEqual => "'<='",
            Symbol::GreaterOrEqual => "'>='",
            Symbol::Plus => "'+'",
            Symbol::Minus => "'-'",
            Symbol::Asterisk => "'*'",
            Symbol::Slash => "'/'",
        }
    }
}

/// A classified token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Identifier(String),
    Keyword(Keyword),
    Symbol(Symbol),
    DecimalNumber(String),
    OctalNumber(String),
    /// Includes the `$` or `0x` prefix
    HexadecimalNumber(String),
    RealNumber(String),
    /// Text between the single quotes
    FourCCNumber(String),
    /// Text between the double quotes, escapes as written
    StringLiteral(String),
    DoubleQuote,
    SingleQuote,
    Newline,
    CommentStart,
    /// Comment text after `//`
    Comment(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(text)
            | Token::DecimalNumber(text)
            | Token::OctalNumber(text)
            | Token::HexadecimalNumber(text)
            | Token::RealNumber(text)
            | Token::FourCCNumber(text)
            | Token::StringLiteral(text)
            | Token::Comment(text) => f.write_str(text),
            Token::Keyword(keyword) => f.write_str(keyword.as_str()),
            Token::Symbol(symbol) => f.write_str(symbol.as_str()),
            Token::DoubleQuote => f.write_str("\""),
            Token::SingleQuote => f.write_str("'"),
            Token::Newline => f.write_str("\\n"),
            Token::CommentStart => f.write_str("//"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Keyword::from_word("endloop"), Some(Keyword::EndLoop));
        assert_eq!(Keyword::from_word("Endloop"), None);
        assert_eq!(Keyword::from_word("unit"), None);
        for keyword in Keyword::ALL {
            assert_eq!(Keyword::from_word(keyword.as_str()), Some(*keyword));
        }
    }

    #[test]
    fn test_keyword_label() {
        assert_eq!(Keyword::ExitWhen.label(), "'exitwhen' keyword");
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Symbol(Symbol::NotEquals).to_string(), "!=");
        assert_eq!(Token::Keyword(Keyword::Takes).to_string(), "takes");
        assert_eq!(Token::Identifier("x".into()).to_string(), "x");
        assert_eq!(Token::Newline.to_string(), "\\n");
    }
}
