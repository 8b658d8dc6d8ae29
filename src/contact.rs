use std::fmt;
use std::str::FromStr;
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Serialize, Deserialize};

use crate::{
    Error,
    error::Result,
    validator,
};

pub(crate) const NO_NUMBER_TEXT : &str = "[no number]";
pub(crate) const NO_DATA_TEXT   : &str = "[no data]";
const TIME_FORMAT               : &str = "%Y-%m-%dT%H:%M:%S";

const PERSON_FIELDS: &[Field] = &[
    Field::Name,
    Field::Surname,
    Field::Birthdate,
    Field::Gender,
    Field::Number,
];

const ORGANIZATION_FIELDS: &[Field] = &[
    Field::Name,
    Field::Address,
    Field::Number,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactType {
    Person,
    Organization,
}

impl FromStr for ContactType {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "person" => Ok(ContactType::Person),
            "organization" => Ok(ContactType::Organization),
            _ => Err(Error::Argument("Invalid contact type!".into())),
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactType::Person => write!(f, "person"),
            ContactType::Organization => write!(f, "organization"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Surname,
    Birthdate,
    Gender,
    Number,
    Address,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name         => "name",
            Field::Surname      => "surname",
            Field::Birthdate    => "birthdate",
            Field::Gender       => "gender",
            Field::Number       => "number",
            Field::Address      => "address",
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "name"      => Ok(Field::Name),
            "surname"   => Ok(Field::Surname),
            "birthdate" => Ok(Field::Birthdate),
            "gender"    => Ok(Field::Gender),
            "number"    => Ok(Field::Number),
            "address"   => Ok(Field::Address),
            _ => Err(Error::Field("Invalid record field!".into())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single-field edit. Bad number, birthdate or gender input
/// does not fail the edit; the field is cleared instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Details {
    Person {
        #[serde(rename = "surname")]
        surname: String,
        #[serde(rename = "birthdate")]
        birthdate: String,
        #[serde(rename = "gender")]
        gender: String,
    },
    Organization {
        #[serde(rename = "address")]
        address: String,
    },
}

pub(crate) fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|v| v.with_nanosecond(0))
        .unwrap_or(now)
}

fn checked(value: &str, valid: fn(&str) -> bool) -> (String, EditOutcome) {
    match valid(value) {
        true => (value.to_string(), EditOutcome::Updated),
        false => (String::new(), EditOutcome::Cleared),
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    match value.trim().is_empty() {
        true => placeholder,
        false => value,
    }
}

pub struct ContactBuilder {
    _type       : ContactType,

    name        : String,
    number      : String,

    surname     : Option<String>,
    birthdate   : Option<String>,
    gender      : Option<String>,
    address     : Option<String>,

    created     : Option<NaiveDateTime>,
}

impl ContactBuilder {
    pub fn new(_type: ContactType) -> Self {
        Self {
            _type,
            name        : String::new(),
            number      : String::new(),
            surname     : None,
            birthdate   : None,
            gender      : None,
            address     : None,
            created     : None,
        }
    }

    pub fn with_name(&mut self, name: &str) -> &mut Self {
        self.name = name.to_string();
        self
    }

    pub fn with_number(&mut self, number: &str) -> &mut Self {
        self.number = number.to_string();
        self
    }

    pub fn with_surname(&mut self, surname: &str) -> &mut Self {
        self.surname = Some(surname.to_string());
        self
    }

    pub fn with_birthdate(&mut self, birthdate: &str) -> &mut Self {
        self.birthdate = Some(birthdate.to_string());
        self
    }

    pub fn with_gender(&mut self, gender: &str) -> &mut Self {
        self.gender = Some(gender.to_string());
        self
    }

    pub fn with_address(&mut self, address: &str) -> &mut Self {
        self.address = Some(address.to_string());
        self
    }

    pub fn with_created(&mut self, created: NaiveDateTime) -> &mut Self {
        self.created = Some(created);
        self
    }

    pub fn build(&mut self) -> Result<Contact> {
        let details = match self._type {
            ContactType::Person => {
                if self.address.is_some() {
                    return Err(Error::Argument("A person has no address".into()));
                }
                Details::Person {
                    surname: self.surname.take().unwrap_or_default(),
                    birthdate: checked(
                        self.birthdate.as_deref().unwrap_or_default(),
                        validator::validate_birthdate
                    ).0,
                    gender: checked(
                        self.gender.as_deref().unwrap_or_default(),
                        validator::validate_gender
                    ).0,
                }
            },
            ContactType::Organization => {
                if self.surname.is_some() || self.birthdate.is_some() || self.gender.is_some() {
                    return Err(Error::Argument("An organization has no surname, birthdate or gender".into()));
                }
                Details::Organization {
                    address: self.address.take().unwrap_or_default(),
                }
            }
        };

        let created = self.created.unwrap_or_else(now);
        Ok(Contact {
            name        : std::mem::take(&mut self.name),
            number      : checked(&self.number, validator::validate_number).0,
            created,
            last_edit   : created,
            details,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "name")]
    name        : String,

    #[serde(rename = "number")]
    number      : String,

    #[serde(rename = "timeCreated")]
    created     : NaiveDateTime,

    #[serde(rename = "timeLastEdit")]
    last_edit   : NaiveDateTime,

    #[serde(flatten)]
    details     : Details,
}

impl Contact {
    pub fn contact_type(&self) -> ContactType {
        match self.details {
            Details::Person { .. } => ContactType::Person,
            Details::Organization { .. } => ContactType::Organization,
        }
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn has_number(&self) -> bool {
        !self.number.trim().is_empty()
    }

    pub fn surname(&self) -> Option<&str> {
        match &self.details {
            Details::Person { surname, .. } => Some(surname),
            Details::Organization { .. } => None,
        }
    }

    pub fn birthdate(&self) -> Option<&str> {
        match &self.details {
            Details::Person { birthdate, .. } => Some(birthdate),
            Details::Organization { .. } => None,
        }
    }

    pub fn gender(&self) -> Option<&str> {
        match &self.details {
            Details::Person { gender, .. } => Some(gender),
            Details::Organization { .. } => None,
        }
    }

    pub fn address(&self) -> Option<&str> {
        match &self.details {
            Details::Person { .. } => None,
            Details::Organization { address } => Some(address),
        }
    }

    pub fn created(&self) -> NaiveDateTime {
        self.created
    }

    pub fn last_edit(&self) -> NaiveDateTime {
        self.last_edit
    }

    /// Editable fields in display order.
    pub fn fields(&self) -> &'static [Field] {
        match self.details {
            Details::Person { .. } => PERSON_FIELDS,
            Details::Organization { .. } => ORGANIZATION_FIELDS,
        }
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    /// Concatenation of every property value, without separators, that
    /// search patterns are matched against.
    pub fn property_values(&self) -> String {
        match &self.details {
            Details::Person { surname, birthdate, gender } => {
                format!("{}{}{}{}{}", self.name, surname, birthdate, gender, self.number)
            },
            Details::Organization { address } => {
                format!("{}{}{}", self.name, address, self.number)
            }
        }
    }

    pub fn label(&self) -> String {
        match &self.details {
            Details::Person { surname, .. } => format!("{} {}", self.name, surname),
            Details::Organization { .. } => self.name.clone(),
        }
    }

    pub fn info(&self) -> String {
        let number = or_placeholder(&self.number, NO_NUMBER_TEXT);
        let created = self.created.format(TIME_FORMAT);
        let last_edit = self.last_edit.format(TIME_FORMAT);

        match &self.details {
            Details::Person { surname, birthdate, gender } => format!(
                "Name: {}\nSurname: {}\nBirth date: {}\nGender: {}\nNumber: {}\nTime created: {}\nTime last edit: {}",
                self.name,
                surname,
                or_placeholder(birthdate, NO_DATA_TEXT),
                or_placeholder(gender, NO_DATA_TEXT),
                number,
                created,
                last_edit
            ),
            Details::Organization { address } => format!(
                "Organization name: {}\nAddress: {}\nNumber: {}\nTime created: {}\nTime last edit: {}",
                self.name,
                address,
                number,
                created,
                last_edit
            ),
        }
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<EditOutcome> {
        let outcome = match (field, &mut self.details) {
            (Field::Name, _) => {
                self.name = value.to_string();
                EditOutcome::Updated
            },
            (Field::Number, _) => {
                let (number, outcome) = checked(value, validator::validate_number);
                self.number = number;
                outcome
            },
            (Field::Surname, Details::Person { surname, .. }) => {
                *surname = value.to_string();
                EditOutcome::Updated
            },
            (Field::Birthdate, Details::Person { birthdate, .. }) => {
                let (value, outcome) = checked(value, validator::validate_birthdate);
                *birthdate = value;
                outcome
            },
            (Field::Gender, Details::Person { gender, .. }) => {
                let (value, outcome) = checked(value, validator::validate_gender);
                *gender = value;
                outcome
            },
            (Field::Address, Details::Organization { address }) => {
                *address = value.to_string();
                EditOutcome::Updated
            },
            _ => return Err(Error::Field("Invalid record field!".into())),
        };

        self.touch();
        Ok(outcome)
    }

    fn touch(&mut self) {
        self.last_edit = now();
    }
}

// Timestamps are bookkeeping, not identity.
impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name &&
        self.number == other.number &&
        self.details == other.details
    }
}

impl Eq for Contact {}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}
