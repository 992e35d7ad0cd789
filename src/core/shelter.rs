use crate::domain::dataset::shelter_animals;
use crate::domain::model::{Animal, Sex, ShelterReport, Species};
use crate::domain::ports::{OutputSink, Pipeline};
use crate::utils::error::{HofError, Result};
use crate::utils::validation::Validate;
use serde_json::json;

pub const HEAVY_WEIGHT_THRESHOLD: u32 = 50;

pub fn species_of(animals: &[Animal]) -> Vec<Species> {
    animals.iter().map(|animal| animal.species).collect()
}

pub fn adoption_lines(animals: &[Animal]) -> Vec<String> {
    animals
        .iter()
        .map(|animal| format!("{} is adopted {}", animal.name, animal.adopted))
        .collect()
}

pub fn dogs_only(animals: &[Animal]) -> Vec<Animal> {
    animals
        .iter()
        .filter(|animal| animal.species == Species::Dog)
        .cloned()
        .collect()
}

pub fn oldest_first(animals: &[Animal]) -> Vec<Animal> {
    let mut sorted = animals.to_vec();
    sorted.sort_by(|a, b| b.age_in_months.cmp(&a.age_in_months));
    sorted
}

/// Running total of weights seeded with 0.
pub fn total_weight(animals: &[Animal]) -> Result<u32> {
    animals
        .iter()
        .enumerate()
        .try_fold(0u32, |total, (i, animal)| {
            total
                .checked_add(animal.weight)
                .ok_or_else(|| HofError::OverflowError {
                    operation: "total_weight".to_string(),
                    processed: i,
                })
        })
}

/// Vaccinated animals of at least [`HEAVY_WEIGHT_THRESHOLD`], females first.
pub fn vaccinated_heavy(animals: &[Animal]) -> Vec<Animal> {
    let mut vaccinated: Vec<Animal> = animals.iter().filter(|a| a.shots).cloned().collect();
    // stable: keeps roster order within each sex
    vaccinated.sort_by_key(|animal| animal.sex == Sex::Male);
    vaccinated
        .into_iter()
        .filter(|animal| animal.weight >= HEAVY_WEIGHT_THRESHOLD)
        .collect()
}

pub struct ShelterPipeline {
    animals: Vec<Animal>,
}

impl ShelterPipeline {
    pub fn new(animals: Vec<Animal>) -> Self {
        Self { animals }
    }
}

impl Default for ShelterPipeline {
    fn default() -> Self {
        Self::new(shelter_animals())
    }
}

impl Pipeline for ShelterPipeline {
    type Input = Vec<Animal>;
    type Output = ShelterReport;

    fn name(&self) -> &str {
        "shelter"
    }

    fn extract(&self) -> Result<Vec<Animal>> {
        self.animals.validate()?;
        Ok(self.animals.clone())
    }

    fn transform(&self, input: Vec<Animal>) -> Result<ShelterReport> {
        Ok(ShelterReport {
            species: species_of(&input),
            adoption_lines: adoption_lines(&input),
            dogs: dogs_only(&input),
            oldest_first: oldest_first(&input),
            total_weight: total_weight(&input)?,
            vaccinated_heavy: vaccinated_heavy(&input),
        })
    }

    fn load(&self, output: &ShelterReport, sink: &mut dyn OutputSink) -> Result<()> {
        for species in &output.species {
            sink.emit("species", &json!(species.to_string()))?;
        }
        sink.emit("adoptions", &json!(output.adoption_lines))?;
        sink.emit("dogs", &serde_json::to_value(&output.dogs)?)?;
        sink.emit("oldest_first", &serde_json::to_value(&output.oldest_first)?)?;
        sink.emit("total_weight", &json!(output.total_weight))?;
        sink.emit("vaccinated_heavy", &serde_json::to_value(&output.vaccinated_heavy)?)?;
        Ok(())
    }
}
