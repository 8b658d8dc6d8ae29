use std::fs::{self, File};
use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use regex::{Regex, RegexBuilder};

use crate::{
    Error,
    error::Result,
    contact::{Contact, Field, EditOutcome},
};

pub struct PhoneBookBuilder<'a> {
    path: Option<&'a str>,
}

impl<'a> PhoneBookBuilder<'a> {
    pub fn new() -> Self {
        Self {
            path: None,
        }
    }

    pub fn with_path(&mut self, path: &'a str) -> &mut Self {
        self.path = Some(path);
        self
    }

    pub fn with_optional_path(&mut self, path: Option<&'a str>) -> &mut Self {
        self.path = path;
        self
    }

    pub fn build(&self) -> Result<PhoneBook> {
        if let Some(path) = self.path {
            if path.trim().is_empty() {
                return Err(Error::Argument("Empty phone book path".into()));
            }
        }
        Ok(PhoneBook::new(self.path.map(PathBuf::from)))
    }
}

impl<'a> Default for PhoneBookBuilder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// A search match together with its 1-based position in the phone book.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub index   : usize,
    pub contact : &'a Contact,
}

pub struct PhoneBook {
    path    : Option<PathBuf>,
    contacts: Vec<Contact>,
}

impl PhoneBook {
    fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            contacts: Vec::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn position(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.contacts.len() {
            return Err(Error::Index("Invalid record.".into()));
        }
        Ok(index - 1)
    }

    pub fn add(&mut self, contact: Contact) {
        debug!("Adding contact {}", contact.label());
        self.contacts.push(contact);
    }

    pub fn list(&self) -> Vec<(usize, String)> {
        self.contacts.iter()
            .enumerate()
            .map(|(i, c)| (i + 1, c.label()))
            .collect()
    }

    pub fn get(&self, index: usize) -> Result<&Contact> {
        let pos = self.position(index)?;
        Ok(&self.contacts[pos])
    }

    pub fn remove(&mut self, index: usize) -> Result<Contact> {
        let pos = self.position(index)?;
        let contact = self.contacts.remove(pos);
        debug!("Removed contact {} at {}", contact.label(), index);
        Ok(contact)
    }

    pub fn replace_field(&mut self, index: usize, field: Field, value: &str) -> Result<EditOutcome> {
        let pos = self.position(index)?;
        let outcome = self.contacts[pos].set_field(field, value)?;
        debug!("Field {} of record {} edited: {:?}", field, index, outcome);
        Ok(outcome)
    }

    /// Case-insensitive regular expression search over every property value
    /// of a contact. Patterns that do not compile are matched literally.
    pub fn search(&self, pattern: &str) -> Result<Vec<SearchHit<'_>>> {
        let regex = compile(pattern)?;
        Ok(self.contacts.iter()
            .enumerate()
            .filter(|(_, c)| regex.is_match(&c.property_values()))
            .map(|(i, c)| SearchHit { index: i + 1, contact: c })
            .collect())
    }

    pub fn load(&mut self) -> Result<()> {
        let Some(path) = self.path.as_ref() else {
            debug!("No phone book file given, persistence is disabled");
            return Ok(());
        };

        if !path.exists() {
            File::create(path).map_err(|e| {
                Error::Io(format!("Creating phone book file {} error: {e}", path.display()))
            })?;
            warn!("Phone book file {} did not exist and was created", path.display());
            self.contacts.clear();
            return Ok(());
        }

        let data = fs::read_to_string(path).map_err(|e| {
            Error::Io(format!("Reading phone book file {} error: {e}", path.display()))
        })?;

        if data.trim().is_empty() {
            self.contacts.clear();
            return Ok(());
        }

        self.contacts = serde_json::from_str(&data).map_err(|e| {
            Error::Format(format!("Phone book file {} is broken: {e}", path.display()))
        })?;

        info!("Loaded {} contacts from {}", self.contacts.len(), path.display());
        Ok(())
    }

    /// Writes the whole phone book over the backing file. Returns `false`
    /// when persistence is disabled for this session.
    pub fn persist(&self) -> Result<bool> {
        let Some(path) = self.path.as_ref() else {
            return Ok(false);
        };

        let data = serde_json::to_string_pretty(&self.contacts)?;
        fs::write(path, data).map_err(|e| {
            Error::Io(format!("Writing phone book file {} error: {e}", path.display()))
        })?;

        debug!("Saved {} contacts to {}", self.contacts.len(), path.display());
        Ok(true)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => Ok(regex),
        Err(e) => {
            debug!("Pattern '{}' is not a regular expression ({e}), matching literally", pattern);
            RegexBuilder::new(&regex::escape(pattern))
                .case_insensitive(true)
                .build()
                .map_err(Error::from)
        }
    }
}
