use logos::Logos;

/// Tokens of a key script, e.g. `<LANG> selam <SHIFT> A "www" <ENTER>`
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Comments and whitespace (skipped)
    #[regex(r"#[^\n]*", logos::skip)]
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Comment,

    // Named function key: <LANG>, <shift>, <Enter>
    #[regex(r"<[A-Za-z_]+>", |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_uppercase()
    })]
    Key(String),

    // Raw host key code: <-101>, <109>
    #[regex(r"<-?[0-9]+>", |lex| {
        let s = lex.slice();
        s[1..s.len()-1].parse::<i32>().ok()
    })]
    Code(Option<i32>),

    // Unicode literal: U+1218
    #[regex(r"[Uu]\+[0-9a-fA-F]{4,6}", |lex| {
        u32::from_str_radix(&lex.slice()[2..], 16).ok()
    })]
    Unicode(Option<u32>),

    // Multi-character key text
    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    Text(String),

    // Escaped literal: \< \" \# \\ \ (space)
    #[regex(r"\\.", |lex| lex.slice().chars().nth(1))]
    Escaped(Option<char>),

    // Any other single character key
    #[regex(r##"[^ \t\r\n<"#\\]"##, |lex| lex.slice().chars().next())]
    Char(Option<char>),
}
