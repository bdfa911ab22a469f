//! Interactive menu
//!
//! A numbered-menu session over any line-based input and text output. The
//! session only mutates the shared [`AddressBook`]; saving on exit is the
//! caller's job.

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::book::AddressBook;
use crate::contact::Contact;
use crate::error::Result;
use crate::generator::Generator;
use crate::storage::format_timestamp;

/// Contacts created by the "Generate Test Data" choice
pub const GENERATED_BATCH: usize = 10;

const MENU: &str = "\nAddress Book CLI
1. Add Contact
2. List Contacts
3. Search Contacts
4. Update Contact
5. Delete Contact
6. Generate Test Data
7. Save and Exit
Enter your choice (1-7): ";

/// Editable fields, in prompt order
const FIELD_LABELS: [&str; 5] = ["first name", "last name", "email", "phone", "address"];

/// One parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Add,
    List,
    Search,
    Update,
    Delete,
    Generate,
    Exit,
}

impl Choice {
    /// Parse a menu line; `None` for anything unrecognized
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Search),
            "4" => Some(Self::Update),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Generate),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// An interactive session bound to one address book
pub struct Session<R, W> {
    book: Arc<AddressBook>,
    input: R,
    output: W,
    generator: Generator,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(book: Arc<AddressBook>, input: R, output: W) -> Self {
        Self::with_generator(book, input, output, Generator::new())
    }

    pub fn with_generator(book: Arc<AddressBook>, input: R, output: W, generator: Generator) -> Self {
        Self {
            book,
            input,
            output,
            generator,
        }
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// Data-layer errors are reported and the loop continues; only errors
    /// writing to the output abort the session.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            match Choice::parse(&line) {
                Some(Choice::Add) => self.add_contact()?,
                Some(Choice::List) => self.list_contacts()?,
                Some(Choice::Search) => self.search_contacts()?,
                Some(Choice::Update) => self.update_contact()?,
                Some(Choice::Delete) => self.delete_contact()?,
                Some(Choice::Generate) => self.generate_test_data()?,
                Some(Choice::Exit) => return Ok(()),
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn add_contact(&mut self) -> Result<()> {
        let mut fields: [String; 5] = Default::default();
        for (slot, label) in fields.iter_mut().zip(FIELD_LABELS) {
            match self.prompt(&format!("Enter {}: ", label))? {
                Some(value) => *slot = value,
                None => return Ok(()),
            }
        }
        let [first, last, email, phone, address] = fields;

        let contact = Contact::new(first, last, email, phone, address);
        match self.book.add(contact) {
            Ok(()) => writeln!(self.output, "Contact added successfully!")?,
            Err(e) => writeln!(self.output, "Error adding contact: {}", e)?,
        }
        Ok(())
    }

    fn list_contacts(&mut self) -> Result<()> {
        let contacts = self.book.list_all();
        if contacts.is_empty() {
            writeln!(self.output, "No contacts found.")?;
            return Ok(());
        }

        writeln!(self.output, "\nContacts:")?;
        self.print_contacts(&contacts)
    }

    fn search_contacts(&mut self) -> Result<()> {
        let Some(query) = self.prompt("Enter search query: ")? else {
            return Ok(());
        };

        let contacts = self.book.search(&query);
        if contacts.is_empty() {
            writeln!(self.output, "No contacts found matching your search.")?;
            return Ok(());
        }

        writeln!(self.output, "\nSearch Results:")?;
        self.print_contacts(&contacts)
    }

    fn update_contact(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter contact ID to update: ")? else {
            return Ok(());
        };

        let mut contact = match self.book.get(id.trim()) {
            Ok(contact) => contact,
            Err(e) => {
                writeln!(self.output, "Error finding contact: {}", e)?;
                return Ok(());
            }
        };

        writeln!(self.output, "Current contact: {}", contact.full_name())?;

        for (index, label) in FIELD_LABELS.iter().enumerate() {
            let prompt = format!("Enter new {} (or press Enter to keep current): ", label);
            let Some(value) = self.prompt(&prompt)? else {
                return Ok(());
            };
            if !value.is_empty() {
                *field_mut(&mut contact, index) = value;
            }
        }

        match self.book.update(contact) {
            Ok(()) => writeln!(self.output, "Contact updated successfully!")?,
            Err(e) => writeln!(self.output, "Error updating contact: {}", e)?,
        }
        Ok(())
    }

    fn delete_contact(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Enter contact ID to delete: ")? else {
            return Ok(());
        };

        match self.book.delete(id.trim()) {
            Ok(()) => writeln!(self.output, "Contact deleted successfully!")?,
            Err(e) => writeln!(self.output, "Error deleting contact: {}", e)?,
        }
        Ok(())
    }

    fn generate_test_data(&mut self) -> Result<()> {
        for contact in self.generator.generate_contacts(GENERATED_BATCH) {
            if let Err(e) = self.book.add(contact) {
                writeln!(self.output, "Error adding test contact: {}", e)?;
                return Ok(());
            }
        }

        writeln!(
            self.output,
            "Generated {} test contacts successfully!",
            GENERATED_BATCH
        )?;
        Ok(())
    }

    fn print_contacts(&mut self, contacts: &[Contact]) -> Result<()> {
        for contact in contacts {
            writeln!(self.output, "\nID: {}", contact.id())?;
            writeln!(self.output, "Name: {} {}", contact.first_name, contact.last_name)?;
            writeln!(self.output, "Email: {}", contact.email)?;
            writeln!(self.output, "Phone: {}", contact.phone)?;
            writeln!(self.output, "Address: {}", contact.address)?;
            writeln!(self.output, "Created: {}", format_timestamp(contact.created_at()))?;
            writeln!(self.output, "Updated: {}", format_timestamp(contact.updated_at()))?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line without its line ending; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

fn field_mut(contact: &mut Contact, index: usize) -> &mut String {
    match index {
        0 => &mut contact.first_name,
        1 => &mut contact.last_name,
        2 => &mut contact.email,
        3 => &mut contact.phone,
        _ => &mut contact.address,
    }
}
