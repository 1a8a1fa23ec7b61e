use crate::domain::model::AnimalRecord;
use crate::domain::ports::AnimalStore;
use crate::utils::error::Result;
use std::io::Write;

/// In-memory store backing a single session. Records live in insertion
/// order; nothing is indexed and nothing survives process exit.
#[derive(Debug, Default)]
pub struct Shelter {
    animals: Vec<AnimalRecord>,
}

impl Shelter {
    pub fn new() -> Self {
        Self {
            animals: Vec::new(),
        }
    }

    pub fn animals(&self) -> &[AnimalRecord] {
        &self.animals
    }
}

impl AnimalStore for Shelter {
    fn add(&mut self, animal: AnimalRecord, out: &mut dyn Write) -> Result<()> {
        animal.speak(out)?;
        tracing::debug!("Adding record for {}", animal.name());
        self.animals.push(animal);
        writeln!(out, "Animal added successfully!")?;
        Ok(())
    }

    fn remove(&mut self, name: &str, out: &mut dyn Write) -> Result<bool> {
        let target = name.to_lowercase();
        // First match wins when names repeat.
        match self
            .animals
            .iter()
            .position(|animal| animal.name().to_lowercase() == target)
        {
            Some(index) => {
                let removed = self.animals.remove(index);
                tracing::debug!("Removed record for {}", removed.name());
                writeln!(out, "Animal removed successfully!")?;
                Ok(true)
            }
            None => {
                writeln!(out, "Animal not found!")?;
                Ok(false)
            }
        }
    }

    fn display_all(&self, out: &mut dyn Write) -> Result<()> {
        if self.animals.is_empty() {
            writeln!(out, "No animals currently in the shelter.")?;
            return Ok(());
        }

        writeln!(out)?;
        writeln!(
            out,
            "{:<15} {:<5} {:<10} {:<20}",
            "Name", "Age", "Species", "Detail"
        )?;
        writeln!(out, "{}", "-".repeat(55))?;
        for animal in &self.animals {
            writeln!(
                out,
                "{:<15} {:<5} {:<10} {:<20}",
                animal.name(),
                animal.age(),
                animal.species(),
                animal.detail()
            )?;
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.animals.len()
    }
}
