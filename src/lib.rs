pub mod core;
pub mod validator;
pub mod contact;
pub mod phonebook;
pub mod console;

pub use crate::core::{
    error::{self, Error},
    config::{self, Config},
    logger,

    default_configuration as configuration,
};

pub use crate::validator::{
    validate_number,
    validate_birthdate,
    validate_gender,
};

pub use crate::contact::{
    Contact,
    ContactBuilder,
    ContactType,
    Details,
    EditOutcome,
    Field,
};

pub use crate::phonebook::{
    PhoneBook,
    PhoneBookBuilder,
    SearchHit,
};

pub use crate::console::{
    Console,
    State,
    LineReader,
    StdinReader,
    ScriptReader,
};
