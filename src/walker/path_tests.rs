use super::*;

#[test]
fn escape_doubles_backslashes() {
    assert_eq!(escape_wql_path("\\test\\"), "\\\\test\\\\");
    assert_eq!(escape_wql_path("plain"), "plain");
}

#[test]
fn child_path_from_directory_name() {
    assert_eq!(child_path("d:\\test\\test1").unwrap(), "\\\\test\\\\test1\\\\");
}

#[test]
fn child_path_of_top_level_directory() {
    assert_eq!(child_path("C:\\logs").unwrap(), "\\\\logs\\\\");
}

#[test]
fn child_path_keeps_text_up_to_next_colon() {
    assert_eq!(child_path("c:\\a:b").unwrap(), "\\\\a\\\\");
}

#[test]
fn child_path_without_drive_is_decode_error() {
    let err = child_path("\\test\\test1").unwrap_err();
    assert!(matches!(err, CheckWmiError::Decode(_)));
}

#[test]
fn visit_key_ignores_case() {
    assert_eq!(visit_key("\\\\Test\\\\"), visit_key("\\\\test\\\\"));
}
