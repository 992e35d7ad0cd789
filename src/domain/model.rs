use crate::utils::error::{HofError, Result};
use crate::utils::validation::{
    validate_date, validate_non_empty_string, validate_range, Validate,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Shelter paperwork writes dates as `M/D/YY`.
pub const SHELTER_DATE_FORMAT: &str = "%m/%d/%y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Bird,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Bird => "bird",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Adoption {
    Yes,
    No,
}

impl fmt::Display for Adoption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yes => "yes",
            Self::No => "no",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub species: Species,
    pub breed: String,
    pub name: String,
    pub sex: Sex,
    pub weight: u32,
    pub age_in_months: u32,
    pub shots: bool,
    pub color: String,
    pub adopted: Adoption,
    pub admission_date: String,
    /// Empty while the animal is still at the shelter.
    pub release_date: String,
}

impl Animal {
    pub fn admitted_on(&self) -> Result<NaiveDate> {
        validate_date("admission_date", &self.admission_date, SHELTER_DATE_FORMAT)
    }

    pub fn released_on(&self) -> Result<Option<NaiveDate>> {
        if self.release_date.is_empty() {
            return Ok(None);
        }
        validate_date("release_date", &self.release_date, SHELTER_DATE_FORMAT).map(Some)
    }
}

impl Validate for Animal {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_string("breed", &self.breed)?;
        validate_range("weight", self.weight, 1, 1_000)?;

        let admitted = self.admitted_on()?;
        if let Some(released) = self.released_on()? {
            if released < admitted {
                return Err(HofError::invalid_value(
                    "release_date",
                    &self.release_date,
                    format!(
                        "{} was released before admission on {}",
                        self.name, self.admission_date
                    ),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dog {
    pub id: u32,
    pub legs: u8,
    pub color: String,
    pub breed: String,
    pub months: u32,
}

impl Dog {
    pub fn description(&self) -> String {
        format!("{} month old {} beautiful {}", self.months, self.color, self.breed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimeClassification {
    pub value: i64,
    pub is_prime: bool,
}

impl fmt::Display for PrimeClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_prime {
            write!(f, "{} is a prime number", self.value)
        } else {
            write!(f, "{} is NOT a prime number", self.value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimeReport {
    pub primes: Vec<i64>,
    /// `None` when the primes could not be reduced (empty or overflowing).
    pub product: Option<i64>,
    pub classifications: Vec<PrimeClassification>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShelterReport {
    pub species: Vec<Species>,
    pub adoption_lines: Vec<String>,
    pub dogs: Vec<Animal>,
    pub oldest_first: Vec<Animal>,
    pub total_weight: u32,
    pub vaccinated_heavy: Vec<Animal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicsReport {
    pub description: String,
    pub sum: i64,
    pub contact_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal(admission: &str, release: &str) -> Animal {
        Animal {
            species: Species::Cat,
            breed: "maincoon".to_string(),
            name: "Sassy".to_string(),
            sex: Sex::Female,
            weight: 23,
            age_in_months: 6,
            shots: false,
            color: "red".to_string(),
            adopted: Adoption::No,
            admission_date: admission.to_string(),
            release_date: release.to_string(),
        }
    }

    #[test]
    fn test_dog_description() {
        let dog = Dog {
            id: 953,
            legs: 4,
            color: "red".to_string(),
            breed: "doberman".to_string(),
            months: 8,
        };
        assert_eq!(dog.description(), "8 month old red beautiful doberman");
    }

    #[test]
    fn test_classification_display() {
        let prime = PrimeClassification { value: 3, is_prime: true };
        let not_prime = PrimeClassification { value: 4, is_prime: false };
        assert_eq!(prime.to_string(), "3 is a prime number");
        assert_eq!(not_prime.to_string(), "4 is NOT a prime number");
    }

    #[test]
    fn test_animal_without_release_date_validates() {
        let sassy = animal("12/12/20", "");
        assert!(sassy.validate().is_ok());
        assert_eq!(sassy.released_on().unwrap(), None);
    }

    #[test]
    fn test_release_before_admission_is_rejected() {
        let err = animal("10/15/21", "10/1/21").validate().unwrap_err();
        assert!(matches!(
            err,
            HofError::InvalidValueError { ref field, .. } if field == "release_date"
        ));
    }

    #[test]
    fn test_zero_weight_is_rejected() {
        let mut sassy = animal("12/12/20", "");
        sassy.weight = 0;
        assert!(sassy.validate().is_err());
    }

    #[test]
    fn test_animal_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(animal("12/12/20", "")).unwrap();
        assert_eq!(json["ageInMonths"], 6);
        assert_eq!(json["sex"], "F");
        assert_eq!(json["adopted"], "no");
        assert_eq!(json["species"], "cat");
    }
}
