pub const MENU_PROMPT               : &str = "[menu] Enter action (add, list, search, count, exit):";
pub const RECORD_PROMPT             : &str = "[record] Enter action (edit, delete, menu):";
pub const SEARCH_PROMPT             : &str = "[search] Enter action ([number], back, again):";

pub const ENTER_TYPE                : &str = "Enter the type (person, organization):";
pub const ENTER_NAME                : &str = "Enter the name:";
pub const ENTER_SURNAME             : &str = "Enter the surname:";
pub const ENTER_BIRTH_DATE          : &str = "Enter the birth date:";
pub const ENTER_GENDER              : &str = "Enter the gender (M, F):";
pub const ENTER_ORGANIZATION_NAME   : &str = "Enter the organization name:";
pub const ENTER_ADDRESS             : &str = "Enter the address:";
pub const ENTER_NUMBER              : &str = "Enter the number:";
pub const ENTER_QUERY               : &str = "Enter search query:";
pub const ENTER_INDEX_FOR_INFO      : &str = "Enter index to show info:";
pub const SELECT_RECORD             : &str = "Select a record:";

pub const EDIT_BIRTH_DATE           : &str = "Enter birthdate:";
pub const EDIT_GENDER               : &str = "Enter gender:";
pub const EDIT_ADDRESS              : &str = "Enter address:";

pub const BAD_BIRTH_DATE            : &str = "Bad birth date!";
pub const BAD_GENDER                : &str = "Bad gender!";
pub const WRONG_NUMBER_FORMAT       : &str = "Wrong number format!";
pub const INVALID_CONTACT_TYPE      : &str = "Invalid contact type!";
pub const INVALID_RECORD            : &str = "Invalid record.";
pub const INVALID_RECORD_FIELD      : &str = "Invalid record field!";
pub const MUST_ENTER_NUMBER         : &str = "You must enter a number!";
pub const NO_RECORDS_TO_EDIT        : &str = "No records to edit!";
pub const NO_RECORDS_TO_LIST        : &str = "No records to list!";

pub const RECORD_ADDED              : &str = "The record added.";
pub const RECORD_REMOVED            : &str = "The record removed!";
pub const SAVED                     : &str = "Saved";

pub fn record_count(count: usize) -> String {
    format!("The Phone Book has {} records.", count)
}

pub fn found_results(count: usize) -> String {
    format!("Found {} results:", count)
}

pub fn select_field(fields: &[crate::Field]) -> String {
    let names = fields.iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Select a field ({}):", names)
}
