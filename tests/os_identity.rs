use std::io::Cursor;

use osrelease::{parse, parse_from_reader};

#[test]
fn read_os_id_and_codename() {
    let mock_data = r#"
ID=debian
VERSION_CODENAME='trixie'
# Build metadata follows
        BUILD_ID=20260807
    "#;

    let result = parse_from_reader(Cursor::new(mock_data)).unwrap();

    assert_eq!(result.get("ID").unwrap(), "debian");
    assert_eq!(result.get("VERSION_CODENAME").unwrap(), "trixie");
    assert_eq!(result.get("BUILD_ID").unwrap(), "20260807");
}

#[test]
fn basic_file_parses_to_expected_mapping() {
    let contents = "# A basic os-release file\nID=linux\nNAME=\"Linux Distro\"\n";

    let result = parse(contents).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result.get("ID").unwrap(), "linux");
    assert_eq!(result.get("NAME").unwrap(), "Linux Distro");
    assert!(result.get("PRETTY_NAME").is_none());
}

#[test]
fn duplicate_keys_keep_the_last_occurrence() {
    let result = parse("ID=first\nID=second\nID='third'\n").unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.get("ID").unwrap(), "third");
}

#[test]
fn parsing_is_idempotent() {
    let contents = "ID=debian\nHOME_URL='https://www.debian.org/'\n";

    assert_eq!(parse(contents).unwrap(), parse(contents).unwrap());
}

#[test]
fn malformed_line_names_its_line_number() {
    let err = parse("ID=linux\nfoobar\nNAME=after\n").unwrap_err();

    assert!(err.to_string().starts_with("line 2:"), "got: {}", err);
}

#[test]
fn nothing_usable_comes_back_from_a_failed_parse() {
    assert!(parse("foobar").is_err());
}

#[test]
fn reader_failures_carry_a_read_prefix() {
    // Invalid UTF-8 makes read_to_string fail mid-stream.
    let err = parse_from_reader(Cursor::new(&[0x49u8, 0x44, 0xff][..])).unwrap_err();

    assert!(err.to_string().starts_with("read: "), "got: {}", err);
}
