use contacts::{
    validate_number,
    validate_birthdate,
    validate_gender,
};

/**
# validator
 - validate_number
 - validate_birthdate
 - validate_gender
 */
#[test]
fn test_validators() {
    assert_eq!(validate_number("+7 (911) 123-45-67"), true);
    assert_eq!(validate_number("+7-1"), false);
    assert_eq!(validate_number("12345"), true);
    assert_eq!(validate_number("(1)(2)"), false);

    assert_eq!(validate_birthdate("15/06/1990"), true);
    assert_eq!(validate_birthdate("1990-06-15"), false);

    assert_eq!(validate_gender("M"), true);
    assert_eq!(validate_gender("X"), false);
}
