use crate::utils::error::{Result, ShelterError};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
        }
    }

    pub fn sound(&self) -> &'static str {
        match self {
            Species::Dog => "Woof! Woof!",
            Species::Cat => "Meow! Meow!",
        }
    }

    pub fn detail_label(&self) -> &'static str {
        match self {
            Species::Dog => "Breed",
            Species::Cat => "Color",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = ShelterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dog" => Ok(Species::Dog),
            "cat" => Ok(Species::Cat),
            _ => Err(ShelterError::InvalidSpeciesError {
                value: s.to_string(),
            }),
        }
    }
}

/// One shelter entry. The detail field is the breed for dogs and the
/// color for cats; it is fixed together with the species at construction.
#[derive(Debug, Clone)]
pub struct AnimalRecord {
    name: String,
    age: u32,
    species: Species,
    detail: String,
}

impl AnimalRecord {
    pub fn dog(name: String, age: u32, breed: String) -> Self {
        Self {
            name,
            age,
            species: Species::Dog,
            detail: breed,
        }
    }

    pub fn cat(name: String, age: u32, color: String) -> Self {
        Self {
            name,
            age,
            species: Species::Cat,
            detail: color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn detail(&self) -> String {
        format!("{}: {}", self.species.detail_label(), self.detail)
    }

    pub fn speak<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.species.sound())?;
        Ok(())
    }
}

impl fmt::Display for AnimalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Species: {}, {}",
            self.name,
            self.age,
            self.species,
            self.detail()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_parses_case_insensitively() {
        assert_eq!("dog".parse::<Species>().unwrap(), Species::Dog);
        assert_eq!("CAT".parse::<Species>().unwrap(), Species::Cat);
        assert!("parrot".parse::<Species>().is_err());
    }

    #[test]
    fn test_detail_rendering() {
        let dog = AnimalRecord::dog("Rex".to_string(), 3, "Labrador".to_string());
        let cat = AnimalRecord::cat("Mia".to_string(), 2, "Black".to_string());

        assert_eq!(dog.detail(), "Breed: Labrador");
        assert_eq!(cat.detail(), "Color: Black");
    }

    #[test]
    fn test_speak_writes_species_sound() {
        let dog = AnimalRecord::dog("Rex".to_string(), 3, "Labrador".to_string());
        let cat = AnimalRecord::cat("Mia".to_string(), 2, "Black".to_string());

        let mut out = Vec::new();
        dog.speak(&mut out).unwrap();
        cat.speak(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Woof! Woof!\nMeow! Meow!\n");
    }

    #[test]
    fn test_display_line() {
        let dog = AnimalRecord::dog("Rex".to_string(), 3, "Labrador".to_string());
        assert_eq!(
            dog.to_string(),
            "Name: Rex, Age: 3, Species: Dog, Breed: Labrador"
        );
    }

    #[test]
    fn test_set_age() {
        let mut dog = AnimalRecord::dog("Rex".to_string(), 3, "Labrador".to_string());
        dog.set_age(4);
        assert_eq!(dog.age(), 4);
    }
}
