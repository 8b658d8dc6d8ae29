use std::fmt;
use std::io::Write;
use std::num::IntErrorKind;
use log::{debug, error, info};

mod reader;
pub mod messages;

pub use reader::{LineReader, StdinReader, ScriptReader};

use crate::{
    Error,
    error::Result,
    contact::{ContactBuilder, ContactType, EditOutcome, Field},
    phonebook::PhoneBook,
    validator,
};

use messages as msg;

/// Where the console currently is. Line readers use it to pick a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MainMenu,
    RecordView,
    SearchResults,
    EditField,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::MainMenu      => write!(f, "menu"),
            State::RecordView    => write!(f, "record"),
            State::SearchResults => write!(f, "search"),
            State::EditField     => write!(f, "edit"),
        }
    }
}

enum Step {
    Menu,
    // None once the viewed record has been deleted.
    Record(Option<usize>),
    Search {
        query: String,
        hits: Vec<usize>,
    },
    Exit,
}

/// A record number as typed at a prompt.
#[derive(Debug, PartialEq, Eq)]
enum Selection {
    Index(usize),
    // Negative or too large to be any record.
    OutOfRange,
    NotANumber,
}

fn selection(input: &str) -> Selection {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(v) => Selection::Index(v),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Selection::OutOfRange,
        Err(_) => match input.strip_prefix('-') {
            Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                Selection::OutOfRange
            },
            _ => Selection::NotANumber,
        }
    }
}

pub struct Console<R: LineReader, W: Write> {
    book    : PhoneBook,
    reader  : R,
    out     : W,
}

impl<R: LineReader, W: Write> Console<R, W> {
    pub fn new(book: PhoneBook, reader: R, out: W) -> Self {
        Self { book, reader, out }
    }

    pub fn phonebook(&self) -> &PhoneBook {
        &self.book
    }

    pub fn into_parts(self) -> (PhoneBook, R, W) {
        (self.book, self.reader, self.out)
    }

    /// Runs until `exit` is entered or input runs out.
    pub fn run(&mut self) -> Result<()> {
        let mut step = Step::Menu;
        loop {
            step = match step {
                Step::Menu => self.main_menu()?,
                Step::Record(index) => self.record_view(index)?,
                Step::Search { query, hits } => self.search_results(query, hits)?,
                Step::Exit => break,
            };
        }

        debug!("Console loop finished");
        self.out.flush()?;
        Ok(())
    }

    fn say<T: fmt::Display>(&mut self, text: T) -> Result<()> {
        writeln!(self.out, "{}", text).map_err(|e| {
            Error::Io(format!("Writing console output error: {e}"))
        })
    }

    fn blank(&mut self) -> Result<()> {
        self.say("")
    }

    fn ask(&mut self, prompt: &str, state: State) -> Result<Option<String>> {
        self.say(prompt)?;
        self.out.flush()?;
        self.reader.read_line(state)
    }

    fn save(&mut self) -> Result<()> {
        match self.book.persist() {
            Ok(true) => self.say(msg::SAVED),
            Ok(false) => Ok(()),
            Err(e) => {
                error!("Saving phone book failed: {e}");
                self.say(format!("Failed to save the phone book: {e}"))
            }
        }
    }

    fn main_menu(&mut self) -> Result<Step> {
        let Some(input) = self.ask(msg::MENU_PROMPT, State::MainMenu)? else {
            return Ok(Step::Exit);
        };

        let command = input.trim().to_lowercase();
        debug!("Main menu command: '{}'", command);

        let next = match command.as_str() {
            "add"       => self.add()?,
            "edit"      => self.edit()?,
            "list"      => self.list()?,
            "search"    => self.search()?,
            "count"     => {
                self.say(msg::record_count(self.book.count()))?;
                Step::Menu
            },
            "exit"      => Step::Exit,
            _           => Step::Menu,
        };

        if let Step::Menu = next {
            self.blank()?;
        }
        Ok(next)
    }

    fn add(&mut self) -> Result<Step> {
        let Some(input) = self.ask(msg::ENTER_TYPE, State::MainMenu)? else {
            return Ok(Step::Exit);
        };

        let Ok(_type) = input.parse::<ContactType>() else {
            self.say(msg::INVALID_CONTACT_TYPE)?;
            return Ok(Step::Menu);
        };

        let mut builder = ContactBuilder::new(_type);
        match _type {
            ContactType::Person => {
                let Some(name) = self.ask(msg::ENTER_NAME, State::MainMenu)? else {
                    return Ok(Step::Exit);
                };
                let Some(surname) = self.ask(msg::ENTER_SURNAME, State::MainMenu)? else {
                    return Ok(Step::Exit);
                };
                let Some(birthdate) = self.ask(msg::ENTER_BIRTH_DATE, State::MainMenu)? else {
                    return Ok(Step::Exit);
                };
                if !validator::validate_birthdate(&birthdate) {
                    self.say(msg::BAD_BIRTH_DATE)?;
                }
                let Some(gender) = self.ask(msg::ENTER_GENDER, State::MainMenu)? else {
                    return Ok(Step::Exit);
                };
                if !validator::validate_gender(&gender) {
                    self.say(msg::BAD_GENDER)?;
                }

                builder.with_name(&name)
                    .with_surname(&surname)
                    .with_birthdate(&birthdate)
                    .with_gender(&gender);
            },
            ContactType::Organization => {
                let Some(name) = self.ask(msg::ENTER_ORGANIZATION_NAME, State::MainMenu)? else {
                    return Ok(Step::Exit);
                };
                let Some(address) = self.ask(msg::ENTER_ADDRESS, State::MainMenu)? else {
                    return Ok(Step::Exit);
                };

                builder.with_name(&name)
                    .with_address(&address);
            }
        }

        let Some(number) = self.ask(msg::ENTER_NUMBER, State::MainMenu)? else {
            return Ok(Step::Exit);
        };
        if !validator::validate_number(&number) {
            self.say(msg::WRONG_NUMBER_FORMAT)?;
        }

        let contact = builder.with_number(&number).build()?;
        info!("New {} contact {}", _type, contact.label());
        self.book.add(contact);
        self.say(msg::RECORD_ADDED)?;
        self.save()?;
        Ok(Step::Menu)
    }

    fn print_list(&mut self) -> Result<()> {
        for (index, label) in self.book.list() {
            self.say(format!("{}. {}", index, label))?;
        }
        Ok(())
    }

    fn edit(&mut self) -> Result<Step> {
        if self.book.is_empty() {
            self.say(msg::NO_RECORDS_TO_EDIT)?;
            return Ok(Step::Menu);
        }

        self.print_list()?;

        let mut prompt = msg::SELECT_RECORD;
        let index = loop {
            let Some(input) = self.ask(prompt, State::MainMenu)? else {
                return Ok(Step::Exit);
            };
            match selection(&input) {
                Selection::Index(v) => break v,
                Selection::OutOfRange => {
                    self.say(msg::INVALID_RECORD)?;
                    return Ok(Step::Menu);
                },
                Selection::NotANumber => prompt = msg::MUST_ENTER_NUMBER,
            }
        };

        if self.book.get(index).is_err() {
            self.say(msg::INVALID_RECORD)?;
            return Ok(Step::Menu);
        }

        match self.edit_field(index)? {
            Some(_) => Ok(Step::Menu),
            None => Ok(Step::Exit),
        }
    }

    fn list(&mut self) -> Result<Step> {
        if self.book.is_empty() {
            self.say(msg::NO_RECORDS_TO_LIST)?;
            return Ok(Step::Menu);
        }

        self.print_list()?;

        let Some(input) = self.ask(msg::ENTER_INDEX_FOR_INFO, State::MainMenu)? else {
            return Ok(Step::Exit);
        };
        let index = match selection(&input) {
            Selection::Index(v) => v,
            Selection::OutOfRange => {
                self.say(msg::INVALID_RECORD)?;
                return Ok(Step::Menu);
            },
            Selection::NotANumber => {
                self.say(msg::MUST_ENTER_NUMBER)?;
                return Ok(Step::Menu);
            }
        };

        let info = match self.book.get(index) {
            Ok(contact) => contact.info(),
            Err(_) => {
                self.say(msg::INVALID_RECORD)?;
                return Ok(Step::Menu);
            }
        };

        self.say(info)?;
        self.blank()?;
        Ok(Step::Record(Some(index)))
    }

    fn record_view(&mut self, index: Option<usize>) -> Result<Step> {
        let Some(input) = self.ask(msg::RECORD_PROMPT, State::RecordView)? else {
            return Ok(Step::Exit);
        };

        let mut index = index;
        match input.trim().to_lowercase().as_str() {
            "menu" => {
                self.blank()?;
                return Ok(Step::Menu);
            },
            "delete" => match index {
                Some(i) => {
                    self.delete(i)?;
                    index = None;
                },
                None => self.say(msg::INVALID_RECORD)?,
            },
            "edit" => match index {
                Some(i) => {
                    if self.edit_field(i)?.is_none() {
                        return Ok(Step::Exit);
                    }
                },
                None => self.say(msg::INVALID_RECORD)?,
            },
            _ => {}
        }

        self.blank()?;
        Ok(Step::Record(index))
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        let contact = self.book.remove(index)?;
        info!("Contact {} removed", contact.label());
        self.say(msg::RECORD_REMOVED)?;
        self.save()
    }

    fn run_query(&mut self) -> Result<Option<(String, Vec<usize>)>> {
        let Some(query) = self.ask(msg::ENTER_QUERY, State::SearchResults)? else {
            return Ok(None);
        };

        let hits = self.book.search(&query)?;
        let mut lines = Vec::with_capacity(hits.len());
        let mut indices = Vec::with_capacity(hits.len());
        for (pos, hit) in hits.iter().enumerate() {
            lines.push(format!("{}. {}", pos + 1, hit.contact.label()));
            indices.push(hit.index);
        }

        self.say(msg::found_results(indices.len()))?;
        for line in lines {
            self.say(line)?;
        }
        Ok(Some((query, indices)))
    }

    fn refresh(&self, query: &str) -> Result<Vec<usize>> {
        Ok(self.book.search(query)?
            .iter()
            .map(|hit| hit.index)
            .collect())
    }

    fn search(&mut self) -> Result<Step> {
        let Some((query, hits)) = self.run_query()? else {
            return Ok(Step::Exit);
        };
        self.blank()?;
        Ok(Step::Search { query, hits })
    }

    fn search_results(&mut self, query: String, hits: Vec<usize>) -> Result<Step> {
        let Some(input) = self.ask(msg::SEARCH_PROMPT, State::SearchResults)? else {
            return Ok(Step::Exit);
        };

        let action = input.trim().to_lowercase();
        let (mut query, mut hits) = (query, hits);

        match selection(&action) {
            Selection::Index(pos) => match pos.checked_sub(1).and_then(|p| hits.get(p)).copied() {
                Some(index) => {
                    let info = self.book.get(index)?.info();
                    self.say(info)?;
                    self.blank()?;

                    let Some(input) = self.ask(msg::RECORD_PROMPT, State::RecordView)? else {
                        return Ok(Step::Exit);
                    };
                    match input.trim().to_lowercase().as_str() {
                        "menu" => {
                            self.blank()?;
                            return Ok(Step::Menu);
                        },
                        "delete" => {
                            self.delete(index)?;
                            hits = self.refresh(&query)?;
                        },
                        "edit" => {
                            if self.edit_field(index)?.is_none() {
                                return Ok(Step::Exit);
                            }
                            hits = self.refresh(&query)?;
                        },
                        _ => {}
                    }
                },
                None => self.say(msg::INVALID_RECORD)?,
            },
            Selection::OutOfRange => self.say(msg::INVALID_RECORD)?,
            Selection::NotANumber => match action.as_str() {
                "back" => {
                    self.blank()?;
                    return Ok(Step::Menu);
                },
                "again" => {
                    let Some((q, h)) = self.run_query()? else {
                        return Ok(Step::Exit);
                    };
                    query = q;
                    hits = h;
                },
                _ => {}
            },
        }

        self.blank()?;
        Ok(Step::Search { query, hits })
    }

    /// Single-field edit of the record at `index`. Returns `None` when
    /// input ran out mid-flow.
    fn edit_field(&mut self, index: usize) -> Result<Option<()>> {
        let prompt = msg::select_field(self.book.get(index)?.fields());

        let Some(input) = self.ask(&prompt, State::EditField)? else {
            return Ok(None);
        };

        match input.parse::<Field>() {
            Ok(field) if self.book.get(index).is_ok_and(|c| c.has_field(field)) => {
                let prompt = match field {
                    Field::Name         => msg::ENTER_NAME,
                    Field::Surname      => msg::ENTER_SURNAME,
                    Field::Birthdate    => msg::EDIT_BIRTH_DATE,
                    Field::Gender       => msg::EDIT_GENDER,
                    Field::Number       => msg::ENTER_NUMBER,
                    Field::Address      => msg::EDIT_ADDRESS,
                };
                let Some(value) = self.ask(prompt, State::EditField)? else {
                    return Ok(None);
                };

                if let EditOutcome::Cleared = self.book.replace_field(index, field, &value)? {
                    let text = match field {
                        Field::Birthdate    => msg::BAD_BIRTH_DATE,
                        Field::Gender       => msg::BAD_GENDER,
                        _                   => msg::WRONG_NUMBER_FORMAT,
                    };
                    self.say(text)?;
                }
            },
            _ => self.say(msg::INVALID_RECORD_FIELD)?,
        }

        self.save()?;
        let info = self.book.get(index)?.info();
        self.say(info)?;
        Ok(Some(()))
    }
}
