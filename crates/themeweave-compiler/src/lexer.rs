//! Tokenizer for the object-literal dialect accepted in theme code.
//!
//! Built on `logos`. Whitespace and comments are skipped; every other
//! character sequence either becomes a [`Token`] or a lexer error carrying
//! its byte span.

use logos::Logos;
use std::fmt;
use std::ops::Range;

/// A lexical element of theme code.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum Token {
    // === Keywords ===
    #[token("const")]
    Const,
    #[token("let")]
    Let,
    #[token("var")]
    Var,
    #[token("function")]
    Function,
    #[token("new")]
    New,
    #[token("typeof")]
    Typeof,
    #[token("void")]
    Void,
    #[token("delete")]
    Delete,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    // === Delimiters ===
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("?.")]
    QuestionDot,
    #[token("?")]
    Question,
    #[token("=>")]
    Arrow,

    // === Operators ===
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("=")]
    Assign,
    #[token("==")]
    EqEq,
    #[token("===")]
    EqEqEq,
    #[token("!=")]
    NotEq,
    #[token("!==")]
    NotEqEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("??")]
    Nullish,

    // === Literals ===
    /// Numeric literal, decimal or hexadecimal.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| u64::from_str_radix(&lex.slice()[2..], 16).ok().map(|v| v as f64))]
    Number(f64),

    /// Single- or double-quoted string, escapes already decoded.
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| unescape_quoted(lex.slice()))]
    #[regex(r"'([^'\\\n]|\\.)*'", |lex| unescape_quoted(lex.slice()))]
    String(String),

    /// Template literal; holds the raw text between the backticks.
    #[regex(r"`([^`\\]|\\.)*`", |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    Template(String),

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*", |lex| lex.slice().to_string())]
    Ident(String),
}

impl Token {
    /// Identifier-like spelling, used for property names after `.` and in
    /// object keys where JS allows reserved words.
    pub fn as_property_name(&self) -> Option<&str> {
        match self {
            Token::Ident(name) => Some(name),
            Token::Const => Some("const"),
            Token::Let => Some("let"),
            Token::Var => Some("var"),
            Token::Function => Some("function"),
            Token::New => Some("new"),
            Token::Typeof => Some("typeof"),
            Token::Void => Some("void"),
            Token::Delete => Some("delete"),
            Token::True => Some("true"),
            Token::False => Some("false"),
            Token::Null => Some("null"),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Token::Number(n) => return write!(f, "number {n}"),
            Token::String(s) => return write!(f, "string '{s}'"),
            Token::Template(_) => "template literal",
            Token::Ident(name) => return write!(f, "identifier '{name}'"),
            Token::LBrace => "'{'",
            Token::RBrace => "'}'",
            Token::LBracket => "'['",
            Token::RBracket => "']'",
            Token::LParen => "'('",
            Token::RParen => "')'",
            Token::Comma => "','",
            Token::Colon => "':'",
            Token::Semicolon => "';'",
            Token::Dot => "'.'",
            Token::Ellipsis => "'...'",
            Token::QuestionDot => "'?.'",
            Token::Question => "'?'",
            Token::Arrow => "'=>'",
            Token::Plus => "'+'",
            Token::Minus => "'-'",
            Token::Star => "'*'",
            Token::Slash => "'/'",
            Token::Percent => "'%'",
            Token::Bang => "'!'",
            Token::Tilde => "'~'",
            Token::Assign => "'='",
            Token::EqEq => "'=='",
            Token::EqEqEq => "'==='",
            Token::NotEq => "'!='",
            Token::NotEqEq => "'!=='",
            Token::Lt => "'<'",
            Token::LtEq => "'<='",
            Token::Gt => "'>'",
            Token::GtEq => "'>='",
            Token::AndAnd => "'&&'",
            Token::OrOr => "'||'",
            Token::Nullish => "'??'",
            keyword => return write!(f, "keyword '{}'", keyword.as_property_name().unwrap_or("?")),
        };
        f.write_str(text)
    }
}

/// Tokenize `source`, returning tokens paired with byte spans.
///
/// On the first unrecognized input the span of the offending slice is
/// returned instead.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Range<usize>)>, Range<usize>> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => return Err(span),
        }
    }
    Ok(tokens)
}

/// Strip the surrounding quotes and decode escape sequences.
fn unescape_quoted(slice: &str) -> Option<String> {
    unescape(&slice[1..slice.len() - 1])
}

/// Decode JS string escapes. Returns `None` for malformed sequences.
pub(crate) fn unescape(s: &str) -> Option<String> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next()? {
            'n' => result.push('\n'),
            'r' => result.push('\r'),
            't' => result.push('\t'),
            'b' => result.push('\u{8}'),
            'f' => result.push('\u{c}'),
            'v' => result.push('\u{b}'),
            '0' => result.push('\0'),
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                let code = u32::from_str_radix(&hex, 16).ok()?;
                result.push(char::from_u32(code)?);
            }
            'u' => {
                let hex: String = if chars.peek() == Some(&'{') {
                    chars.next();
                    let body: String = chars.by_ref().take_while(|c| *c != '}').collect();
                    body
                } else {
                    chars.by_ref().take(4).collect()
                };
                let code = u32::from_str_radix(&hex, 16).ok()?;
                result.push(char::from_u32(code)?);
            }
            // Line continuation
            '\n' => {}
            other => result.push(other),
        }
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("lexing failed")
            .into_iter()
            .map(|(tok, _)| tok)
            .collect()
    }

    fn ident(s: &str) -> Token {
        Token::Ident(s.to_string())
    }

    #[test]
    fn test_object_literal() {
        assert_eq!(
            lex("{ main: '#fff' }"),
            vec![
                Token::LBrace,
                ident("main"),
                Token::Colon,
                Token::String("#fff".into()),
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn test_member_call() {
        assert_eq!(
            lex("theme.spacing(2)"),
            vec![
                ident("theme"),
                Token::Dot,
                ident("spacing"),
                Token::LParen,
                Token::Number(2.0),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            lex("1 2.5 .5 1e3 0x1F"),
            vec![
                Token::Number(1.0),
                Token::Number(2.5),
                Token::Number(0.5),
                Token::Number(1000.0),
                Token::Number(31.0),
            ]
        );
    }

    #[test]
    fn test_strings_and_escapes() {
        assert_eq!(
            lex(r#""a\"b" 'it\'s' 'A\x42'"#),
            vec![
                Token::String("a\"b".into()),
                Token::String("it's".into()),
                Token::String("AB".into()),
            ]
        );
    }

    #[test]
    fn test_template_literal_raw() {
        assert_eq!(
            lex("`1px solid ${theme.palette.divider}`"),
            vec![Token::Template("1px solid ${theme.palette.divider}".into())]
        );
    }

    #[test]
    fn test_arrow_and_spread() {
        assert_eq!(
            lex("({ theme }) => ({ ...x })"),
            vec![
                Token::LParen,
                Token::LBrace,
                ident("theme"),
                Token::RBrace,
                Token::RParen,
                Token::Arrow,
                Token::LParen,
                Token::LBrace,
                Token::Ellipsis,
                ident("x"),
                Token::RBrace,
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_comments_skipped() {
        assert_eq!(
            lex("// line\n{ /* block */ a: 1 }"),
            vec![
                Token::LBrace,
                ident("a"),
                Token::Colon,
                Token::Number(1.0),
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn test_keywords_vs_identifiers() {
        assert_eq!(
            lex("const constant null nullable"),
            vec![Token::Const, ident("constant"), Token::Null, ident("nullable")]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            lex("=== !== == != <= >= && || ?? ?. ?"),
            vec![
                Token::EqEqEq,
                Token::NotEqEq,
                Token::EqEq,
                Token::NotEq,
                Token::LtEq,
                Token::GtEq,
                Token::AndAnd,
                Token::OrOr,
                Token::Nullish,
                Token::QuestionDot,
                Token::Question,
            ]
        );
    }

    #[test]
    fn test_invalid_character_reports_span() {
        let err = tokenize("{ a: 1 # }").unwrap_err();
        assert_eq!(err, 7..8);
    }

    #[test]
    fn test_unterminated_string_is_error() {
        assert!(tokenize("{ a: 'oops }").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::LBrace.to_string(), "'{'");
        assert_eq!(ident("x").to_string(), "identifier 'x'");
        assert_eq!(Token::Const.to_string(), "keyword 'const'");
    }
}
