use crate::domain::model::{AnimalRecord, Species};
use crate::domain::ports::AnimalStore;
use crate::utils::error::Result;
use crate::utils::validation::{
    is_valid_age, is_valid_species, prompt_until_valid, read_trimmed_line,
};
use std::io::{BufRead, Write};

/// Interactive menu over a store. Owns the console streams for the
/// lifetime of the session; the store is passed in by the caller.
pub struct MenuSession<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until the user picks Exit. Errors only on console I/O
    /// failure or a closed input stream.
    pub fn run(&mut self, store: &mut impl AnimalStore) -> Result<()> {
        loop {
            let choice = self.show_menu()?;
            match choice.as_str() {
                "1" => self.add_animal(store)?,
                "2" => self.remove_animal(store)?,
                "3" => store.display_all(&mut self.output)?,
                "4" => {
                    writeln!(self.output, "Exiting program.")?;
                    return Ok(());
                }
                other => {
                    tracing::debug!("Rejected menu choice {:?}", other);
                    writeln!(self.output, "Invalid choice. Try again.")?;
                }
            }
        }
    }

    fn show_menu(&mut self) -> Result<String> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Animal Shelter Management ---")?;
        writeln!(self.output, "1. Add Animal")?;
        writeln!(self.output, "2. Remove Animal")?;
        writeln!(self.output, "3. Display All Animals")?;
        writeln!(self.output, "4. Exit")?;
        read_trimmed_line(&mut self.input, &mut self.output, "Enter your choice: ")
    }

    fn add_animal(&mut self, store: &mut impl AnimalStore) -> Result<()> {
        let species: Species = prompt_until_valid(
            &mut self.input,
            &mut self.output,
            "Enter species (dog/cat): ",
            is_valid_species,
            "Invalid input. Only 'dog' or 'cat' are accepted.",
        )?
        .parse()?;

        let name = read_trimmed_line(&mut self.input, &mut self.output, "Enter name: ")?;

        let age: u32 = prompt_until_valid(
            &mut self.input,
            &mut self.output,
            "Enter age (number): ",
            is_valid_age,
            "Invalid age. Please enter a non-negative number.",
        )?
        .parse()?;

        let animal = match species {
            Species::Dog => {
                let breed = read_trimmed_line(&mut self.input, &mut self.output, "Enter breed: ")?;
                AnimalRecord::dog(name, age, breed)
            }
            Species::Cat => {
                let color = read_trimmed_line(&mut self.input, &mut self.output, "Enter color: ")?;
                AnimalRecord::cat(name, age, color)
            }
        };

        store.add(animal, &mut self.output)
    }

    fn remove_animal(&mut self, store: &mut impl AnimalStore) -> Result<()> {
        if store.is_empty() {
            writeln!(self.output, "No animals to remove.")?;
            return Ok(());
        }

        store.display_all(&mut self.output)?;
        let name = read_trimmed_line(
            &mut self.input,
            &mut self.output,
            "Enter the name of the animal to remove: ",
        )?;
        store.remove(&name, &mut self.output)?;
        Ok(())
    }
}
