use std::path::Path;

use bem_suggest::{analyze, AnalyzeRequest, BemError, BlockSource, Config, InsertionMode, Lang};

use crate::common::{analyze_at, expect_ready, stderr_of, stdout_of, Fixture};

#[test]
fn test_parse_error_is_fatal() {
    let request = AnalyzeRequest {
        source: "import styles from './A.module.css';\nconst x = <div><span></div>;\n",
        lang: Lang::Tsx,
        offset: 50,
        file_path: Path::new("A.tsx"),
    };
    let err = analyze(&request, &Config::default()).unwrap_err();
    assert!(matches!(err, BemError::ParseFailure { .. }), "got {:?}", err);
}

#[test]
fn test_types_rejected_in_javascript() {
    let request = AnalyzeRequest {
        source: "const n: number = 1;\n",
        lang: Lang::JavaScript,
        offset: 0,
        file_path: Path::new("a.js"),
    };
    assert!(matches!(
        analyze(&request, &Config::default()),
        Err(BemError::ParseFailure { .. })
    ));
}

#[test]
fn test_offset_at_end_of_file() {
    let source = "import styles from './Footer.module.css';\nexport const F = () => <footer />;\n";
    let request = AnalyzeRequest {
        source,
        lang: Lang::Tsx,
        offset: source.len(),
        file_path: Path::new("Footer.tsx"),
    };
    match analyze(&request, &Config::default()).unwrap() {
        bem_suggest::Analysis::Ready(s) => {
            assert_eq!(s.naming.insertion_mode, InsertionMode::FullElement);
            assert_eq!(s.naming.block_name, "footer");
            assert!(s.element.is_none());
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_cursor_in_plain_statement() {
    let source = r#"import styles from "./Nav.module.css";
const items = [1, 2, 3];|
export const Nav = () => <nav className={styles.nav} />;
"#;
    let s = expect_ready(analyze_at(source, Lang::Tsx, "Nav.tsx"));
    assert_eq!(s.naming.insertion_mode, InsertionMode::FullElement);
    assert_eq!(s.block_source, BlockSource::ModuleStem);
    assert_eq!(s.naming.block_name, "nav");
}

#[test]
fn test_cursor_at_opening_tag_end_is_inclusive() {
    let source = r#"import styles from "./Box.module.css";
export const Box = () => <div className={styles.box}>|content</div>;
"#;
    let s = expect_ready(analyze_at(source, Lang::Tsx, "Box.tsx"));
    assert_eq!(s.naming.insertion_mode, InsertionMode::AttributeOnly);
}

#[test]
fn test_multibyte_text_before_cursor() {
    let source = r#"import styles from "./Greeting.module.css";
export const G = () => <p className={styles.greeting__text}>héllo 👋 |</p>;
"#;
    let s = expect_ready(analyze_at(source, Lang::Tsx, "G.tsx"));
    assert_eq!(s.naming.block_name, "greeting");
}

#[test]
fn test_deeply_nested_markup() {
    let depth = 400;
    let mut body = String::new();
    for _ in 0..depth {
        body.push_str("<div>");
    }
    body.push('|');
    for _ in 0..depth {
        body.push_str("</div>");
    }
    let source = format!(
        "import styles from './Deep.module.css';\nexport const D = () => <main className={{styles.deep__root}}>{}</main>;\n",
        body
    );
    let s = expect_ready(analyze_at(&source, Lang::Tsx, "D.tsx"));
    assert_eq!(s.naming.block_name, "deep");
}

#[test]
fn test_cli_parse_error_exit_code() {
    let fixture = Fixture::new("Broken.tsx", "const x = <div>|;\n");
    let output = fixture.run(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Parse failure"));
    assert!(stdout_of(&output).is_empty());
    assert_eq!(fixture.read(), "const x = <div>;\n");
}

#[test]
fn test_cli_missing_file() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_bem-suggest"))
        .args(["/definitely/not/here.tsx", "--offset", "0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_unsupported_language() {
    let fixture = Fixture::new("Card.vue", "<template>|</template>\n");
    let output = fixture.run(&[]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_identifier_required_when_unattended() {
    let fixture = Fixture::new("Card.tsx", "export const Card = () => <div>|</div>;\n");
    let output = fixture.run(&["--write"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("--identifier"));
    assert_eq!(fixture.read(), "export const Card = () => <div></div>;\n");
}

#[test]
fn test_cli_invalid_identifier() {
    let fixture = Fixture::new("Card.tsx", "export const Card = () => <div>|</div>;\n");
    let output = fixture.run(&["--identifier", "my styles", "--write"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Invalid identifier"));
    assert_eq!(fixture.read(), "export const Card = () => <div></div>;\n");
}
