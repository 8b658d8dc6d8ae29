use crate::validator::{
    validate_number,
    validate_birthdate,
    validate_gender,
};

#[test]
fn test_single_group_numbers() {
    assert_eq!(validate_number("12345"), true);
    assert_eq!(validate_number("+79991234567"), true);
    assert_eq!(validate_number("(123)"), true);
    assert_eq!(validate_number("(+123)"), true);
    assert_eq!(validate_number("+(123)"), true);
    assert_eq!(validate_number("(++123)"), false);
    assert_eq!(validate_number("+(+123)"), false);
    assert_eq!(validate_number("abc123"), true);
    assert_eq!(validate_number("+"), false);
    assert_eq!(validate_number("++7"), false);
    assert_eq!(validate_number("12_34"), false);
    assert_eq!(validate_number("123!"), false);
}

#[test]
fn test_grouped_numbers() {
    assert_eq!(validate_number("+7 (911) 123-45-67"), true);
    assert_eq!(validate_number("123 456 789"), true);
    assert_eq!(validate_number("(123) 234 345-456"), true);
    assert_eq!(validate_number("+7-1"), false);
    assert_eq!(validate_number("+0 (123) 456-789-(ABcd)"), false);
    assert_eq!(validate_number("+07 123"), false);
    assert_eq!(validate_number("123 45 78 a"), false);
    assert_eq!(validate_number("123--456"), false);
}

#[test]
fn test_parenthesized_groups() {
    assert_eq!(validate_number("(1)(2)"), false);
    assert_eq!(validate_number("(12) (34)"), false);
    assert_eq!(validate_number("12 (34)"), true);
}

#[test]
fn test_empty_input_fails() {
    assert_eq!(validate_number(""), false);
    assert_eq!(validate_birthdate(""), false);
    assert_eq!(validate_gender(""), false);
}

#[test]
fn test_birthdate() {
    assert_eq!(validate_birthdate("15/06/1990"), true);
    assert_eq!(validate_birthdate("99/99/9999"), true);
    assert_eq!(validate_birthdate("1990-06-15"), false);
    assert_eq!(validate_birthdate("1/6/1990"), false);
    assert_eq!(validate_birthdate("15/06/1990 "), false);
}

#[test]
fn test_gender() {
    for v in ["M", "m", "F", "f"] {
        assert_eq!(validate_gender(v), true);
    }
    assert_eq!(validate_gender("X"), false);
    assert_eq!(validate_gender("MF"), false);
    assert_eq!(validate_gender("male"), false);
}
