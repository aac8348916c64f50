use std::fs;

use serde_json::Value;

use crate::common::{stderr_of, stdout_of, Fixture};

const CARD: &str = r#"import styles from "./Card.module.css";

export const Card = () => (
  <div className={styles.card}>
    |
  </div>
);
"#;

#[test]
fn test_snippet_format() {
    let fixture = Fixture::new("Card.tsx", CARD);
    let output = fixture.run(&["--format", "snippet"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output).trim_end(),
        "<${1:div} className={${2:styles}.${3:card}__${4:element}}>\n\t$0\n</${1:div}>"
    );
}

#[test]
fn test_json_format() {
    let fixture = Fixture::new("Card.tsx", CARD);
    let output = fixture.run(&["--format", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let value: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["object_identifier"], "styles");
    assert_eq!(value["block_name"], "card");
    assert_eq!(value["insertion_mode"], "full_element");
    assert_eq!(value["block_source"], "ancestor");
    assert_eq!(value["element"], "div");
    assert_eq!(value["language"], "tsx");
    assert!(value.get("import").is_none());
}

#[test]
fn test_toon_is_default_format() {
    let fixture = Fixture::new("Card.tsx", CARD);
    let output = fixture.run(&[]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("object: styles"), "got: {}", stdout);
    assert!(stdout.contains("block: card"));
    assert!(stdout.contains("mode: full_element"));
    assert!(!stdout.contains("import"));
}

#[test]
fn test_formats_agree() {
    let fixture = Fixture::new("Card.tsx", CARD);
    let json: Value = serde_json::from_str(&stdout_of(&fixture.run(&["-f", "json"]))).unwrap();
    let snippet = stdout_of(&fixture.run(&["-f", "snippet"]));
    assert_eq!(json["snippet"].as_str().unwrap(), snippet.trim_end());
}

#[test]
fn test_write_inserts_full_element() {
    let fixture = Fixture::new("Card.tsx", CARD);
    let output = fixture.run(&["--write", "-f", "snippet"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let written = fixture.read();
    assert!(written.contains(
        "    <div className={styles.card__element}>\n\t\n</div>\n  </div>"
    ));
    assert_eq!(written.matches("import").count(), 1);
}

#[test]
fn test_write_attribute_only() {
    let fixture = Fixture::new(
        "Card.tsx",
        "import styles from './Card.module.css';\nexport const C = () => <div className={styles.card}><h2 |>Hi</h2></div>;\n",
    );
    let output = fixture.run(&["--write"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(fixture
        .read()
        .contains("<h2 className={styles.card__element}>Hi</h2>"));
}

#[test]
fn test_identifier_completion_writes_import() {
    let fixture = Fixture::new(
        "user-profile.tsx",
        "export const UserProfile = () => <section> |</section>;\n",
    );
    let output = fixture.run(&["--identifier", "css", "--write", "-f", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let value: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["object_identifier"], "css");
    assert_eq!(value["block_name"], "userProfile");
    assert_eq!(value["block_source"], "file_stem");
    assert_eq!(
        value["import"]["import_statement_text"],
        "import css from './user-profile.module.scss';\n"
    );
    assert_eq!(value["import"]["insert_offset"], 0);

    let written = fixture.read();
    assert!(written.starts_with("import css from './user-profile.module.scss';\nexport const"));
    assert!(written.contains("<section> <div className={css.userProfile__element}>"));
}

#[test]
fn test_import_placed_after_existing_imports() {
    let fixture = Fixture::new(
        "Panel.jsx",
        "import React from 'react';\nimport './global.css';\n\nexport const Panel = () => <aside> |</aside>;\n",
    );
    let output = fixture.run(&["-i", "styles", "--write"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(fixture.read().starts_with(
        "import React from 'react';\nimport './global.css';\nimport styles from './Panel.module.scss';\n"
    ));
}

#[test]
fn test_config_file() {
    let fixture = Fixture::new("Tile.tsx", "export const Tile = () => <li> |</li>;\n");
    let config_path = fixture.path.with_file_name("bem-suggest.toml");
    fs::write(
        &config_path,
        "default_tag = \"span\"\nelement_placeholder = \"part\"\nstylesheet_extension = \"module.css\"\nquote_style = \"double\"\n",
    )
    .unwrap();

    let output = fixture.run(&[
        "--config",
        config_path.to_str().unwrap(),
        "-i",
        "styles",
        "-f",
        "json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let value: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(
        value["import"]["import_statement_text"],
        "import styles from \"./Tile.module.css\";\n"
    );
    assert_eq!(
        value["snippet"],
        "<${1:span} className={${2:styles}.${3:tile}__${4:part}}>\n\t$0\n</${1:span}>"
    );
}

#[test]
fn test_invalid_config_rejected() {
    let fixture = Fixture::new("Tile.tsx", "export const Tile = () => <li> |</li>;\n");
    let config_path = fixture.path.with_file_name("bad.toml");
    fs::write(&config_path, "colour = \"blue\"\n").unwrap();

    let output = fixture.run(&["--config", config_path.to_str().unwrap(), "-i", "styles"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Config error"));
}

#[test]
fn test_utf16_offset_unit() {
    let marked = "import styles from './Emoji.module.css';\nconst s = '😀';\nexport const E = () => <p className={styles.emoji}>|</p>;\n";
    let fixture = Fixture::new("Emoji.tsx", marked);
    let source = fixture.read();
    let utf16 = source[..fixture.offset].encode_utf16().count().to_string();
    let chars = source[..fixture.offset].chars().count().to_string();

    let by_bytes = stdout_of(&fixture.run(&["-f", "json"]));
    let by_utf16 = stdout_of(&fixture.run_at(&utf16, &["--offset-unit", "utf16", "-f", "json"]));
    let by_chars = stdout_of(&fixture.run_at(&chars, &["--offset-unit", "char", "-f", "json"]));

    let parse = |s: &str| -> Value { serde_json::from_str(s).unwrap() };
    assert_eq!(parse(&by_bytes)["offset"], parse(&by_utf16)["offset"]);
    assert_eq!(parse(&by_bytes)["offset"], parse(&by_chars)["offset"]);
    assert_eq!(parse(&by_utf16)["block_name"], "emoji");
}

#[test]
fn test_identifier_matches_markup_without_import() {
    let fixture = Fixture::new(
        "UserProfileCard.tsx",
        "export const UserProfileCard = () => (\n  <div className={styles.card__body}>\n    <p>x|</p>\n  </div>\n);\n",
    );
    let output = fixture.run(&["-i", "styles", "-f", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let value: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["block_name"], "card");
    assert_eq!(value["block_source"], "ancestor");
    assert_eq!(
        value["import"]["import_statement_text"],
        "import styles from './UserProfileCard.module.scss';\n"
    );
}
