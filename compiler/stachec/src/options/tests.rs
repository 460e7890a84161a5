use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn delimiters(open: &str, close: &str) -> DelimiterPair {
    DelimiterPair::new(open, close).unwrap_or_else(|| panic!("valid pair {open} {close}"))
}

#[test]
fn path_only_uses_defaults() {
    let options = parse_options(&args(&["page.mustache"])).unwrap();
    assert_eq!(
        options,
        CliOptions {
            path: "page.mustache".to_owned(),
            config: TokenizerConfig::default(),
            name: None,
        }
    );
    assert_eq!(options.template_id(), TemplateId::new("page.mustache"));
}

#[test]
fn flags_before_and_after_path() {
    let options =
        parse_options(&args(&["--delimiters=<%,%>", "page.mustache", "--name=page"])).unwrap();
    assert_eq!(options.path, "page.mustache");
    assert_eq!(options.config.delimiters, delimiters("<%", "%>"));
    assert_eq!(options.template_id(), TemplateId::new("page"));
}

#[test]
fn later_delimiters_win() {
    let options =
        parse_options(&args(&["a", "--delimiters=<%,%>", "--delimiters=[[,]]"])).unwrap();
    assert_eq!(options.config.delimiters, delimiters("[[", "]]"));
}

#[test]
fn dash_is_a_path() {
    let options = parse_options(&args(&["-"])).unwrap();
    assert_eq!(options.path, "-");
}

#[test]
fn errors() {
    assert_eq!(parse_options(&[]), Err(OptionError::MissingPath));
    assert_eq!(
        parse_options(&args(&["--name=x"])),
        Err(OptionError::MissingPath)
    );
    assert_eq!(
        parse_options(&args(&["a", "b"])),
        Err(OptionError::UnexpectedArgument("b".to_owned()))
    );
    assert_eq!(
        parse_options(&args(&["a", "--verbose"])),
        Err(OptionError::UnknownOption("--verbose".to_owned()))
    );
    assert_eq!(
        parse_options(&args(&["a", "--name="])),
        Err(OptionError::EmptyName)
    );
}

#[test]
fn invalid_delimiters() {
    for value in ["<%", ",%>", "<%,", "<% ,%>", ""] {
        assert_eq!(
            parse_options(&args(&["a", &format!("--delimiters={value}")])),
            Err(OptionError::InvalidDelimiters(value.to_owned())),
            "value {value:?}"
        );
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        OptionError::UnknownOption("--x".to_owned()).to_string(),
        "unknown option '--x'"
    );
    assert_eq!(OptionError::MissingPath.to_string(), "missing template path");
}
