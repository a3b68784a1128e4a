//! End-to-end lexing of small Kithare programs.
//!
//! Each program is lexed and its tokens rendered one per line, then compared
//! against the expected dump.

use kh_ir::TokenKind;
use kh_lexer::{lex, lex_chars, lex_units, lex_with_config, LexConfig, LexErrorKind};
use pretty_assertions::assert_eq;

fn dump(source: &str) -> String {
    match lex("program.kh", source) {
        Ok(tokens) => tokens
            .iter()
            .filter(|token| token.kind != TokenKind::Newline)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        Err(error) => panic!("lexing failed: {error}"),
    }
}

const GREETER: &str = r#"import std.io as io  # console output

/* Prints a greeting
   a few times. */
def greet(name: str, times: uint) -> int {
    for i in 0..times {
        io.print("Hello, " + name + "!\n");
    }
    return 0;
}
"#;

#[test]
fn greeter_program() {
    let expected = "\
keyword : import
identifier : std
delimiter : .
identifier : io
keyword : as
identifier : io
keyword : def
identifier : greet
delimiter : (
identifier : name
delimiter : :
identifier : str
delimiter : ,
identifier : times
delimiter : :
identifier : uint
delimiter : )
delimiter : ->
identifier : int
delimiter : {
keyword : for
identifier : i
keyword : in
integer : 0
delimiter : .
delimiter : .
identifier : times
delimiter : {
identifier : io
delimiter : .
identifier : print
delimiter : (
string : \"Hello, \"
operator : +
identifier : name
operator : +
string : \"!\\n\"
delimiter : )
delimiter : ;
delimiter : }
keyword : return
integer : 0
delimiter : ;
delimiter : }";
    assert_eq!(dump(GREETER), expected);
}

const SHAPES: &str = r"class Circle inherits Shape {
    static def area(r: double) -> double {
        if r < 0.0 { return -1.0; } elif r == 0 { return 0.0; } else {
            return 3.5 * r ^ 2;
        }
    }
}

flags = 0xFF & ~0b1010;
big = 18446744073709551615;
mask >>= 2u;
z = 1.5j + 2i;
";

#[test]
fn shapes_program() {
    let expected = "\
keyword : class
identifier : Circle
keyword : inherits
identifier : Shape
delimiter : {
keyword : static
keyword : def
identifier : area
delimiter : (
identifier : r
delimiter : :
identifier : double
delimiter : )
delimiter : ->
identifier : double
delimiter : {
keyword : if
identifier : r
operator : <
double : 0.0000
delimiter : {
keyword : return
operator : -
double : 1.0000
delimiter : ;
delimiter : }
keyword : elif
identifier : r
operator : ==
integer : 0
delimiter : {
keyword : return
double : 0.0000
delimiter : ;
delimiter : }
keyword : else
delimiter : {
keyword : return
double : 3.5000
operator : *
identifier : r
operator : ^
integer : 2
delimiter : ;
delimiter : }
delimiter : }
delimiter : }
identifier : flags
operator : =
integer : 255
operator : &
operator : ~
integer : 10
delimiter : ;
identifier : big
operator : =
uinteger : 18446744073709551615
delimiter : ;
identifier : mask
operator : >>=
uinteger : 2
delimiter : ;
identifier : z
operator : =
ifloat : 1.5000i
operator : +
idouble : 2.0000i
delimiter : ;";
    assert_eq!(dump(SHAPES), expected);
}

#[test]
fn literals_render_escaped() {
    let source = r#"c = '\t'; b = b'\xFF'; buf = b"a\x00"; s = """two
lines""";"#;
    let rendered = dump(source);
    assert!(rendered.contains(r"char : '\t'"), "{rendered}");
    assert!(rendered.contains(r"byte : b'\xFF'"), "{rendered}");
    assert!(rendered.contains(r#"buffer : b"a\0""#), "{rendered}");
    assert!(rendered.contains(r#"string : "two\nlines""#), "{rendered}");
}

#[test]
fn newlines_survive_between_statements() {
    let Ok(tokens) = lex("program.kh", "a\nb\n") else {
        panic!("should lex");
    };
    let newlines = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Newline)
        .count();
    assert_eq!(newlines, 2);
}

#[test]
fn decoded_and_encoded_sources_agree() {
    let chars: Vec<char> = SHAPES.chars().collect();
    let from_chars = lex_chars("program.kh", &chars, LexConfig::default());
    assert_eq!(from_chars, lex("program.kh", SHAPES));
}

#[test]
fn kept_comments_appear_in_order() {
    let config = LexConfig::new().keep_comments(true);
    let Ok(tokens) = lex_with_config("program.kh", GREETER, config) else {
        panic!("should lex");
    };
    let comments = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Comment)
        .count();
    assert_eq!(comments, 2);
    assert_eq!(tokens[6].kind, TokenKind::Comment);
}

#[test]
fn error_message_names_the_location() {
    let source = "def f() {\n    return 0x;\n}";
    let Err(error) = lex_with_config("broken.kh", source, LexConfig::new().silent(true)) else {
        panic!("should fail");
    };
    assert_eq!(error.kind(), LexErrorKind::InvalidNumericLiteral);
    assert_eq!(
        error.to_string(),
        "invalid numeric literal at 2, 12 in \"broken.kh\""
    );
    assert_eq!(error.slice(), "0x");
}

#[test]
fn batch_matches_single_runs() {
    let units = [("greeter.kh", GREETER), ("shapes.kh", SHAPES)];
    let results = lex_units(&units, LexConfig::default());
    for ((file, source), result) in units.iter().zip(results) {
        assert_eq!(result, lex(file, source));
    }
}
