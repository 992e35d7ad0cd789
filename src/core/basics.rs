use crate::domain::dataset::sample_dog;
use crate::domain::model::{BasicsReport, Dog};
use crate::domain::ports::{OutputSink, Pipeline};
use crate::utils::error::Result;
use serde_json::json;

pub fn add() -> i64 {
    let x = 5;
    let y = 3;
    x + y
}

/// Builds the dog's full name and hands it to `callback`.
pub fn call_my_dog<F, R>(first_name: &str, last_name: &str, callback: F) -> R
where
    F: FnOnce(&str) -> R,
{
    let dog_name = format!("{} {} ", first_name, last_name);
    callback(&dog_name)
}

pub fn dog_contact_list(sink: &mut dyn OutputSink, dog_name: &str) -> Result<()> {
    sink.emit(
        "contact_list",
        &json!(format!("check contact list for name of dog ===> {}", dog_name)),
    )
}

pub struct BasicsPipeline {
    dog: Dog,
    first_name: String,
    last_name: String,
}

impl BasicsPipeline {
    pub fn new(dog: Dog, first_name: &str, last_name: &str) -> Self {
        Self {
            dog,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

impl Default for BasicsPipeline {
    fn default() -> Self {
        Self::new(sample_dog(), "bingo", "smith")
    }
}

impl Pipeline for BasicsPipeline {
    type Input = Dog;
    type Output = BasicsReport;

    fn name(&self) -> &str {
        "basics"
    }

    fn extract(&self) -> Result<Dog> {
        Ok(self.dog.clone())
    }

    fn transform(&self, input: Dog) -> Result<BasicsReport> {
        Ok(BasicsReport {
            description: input.description(),
            sum: add(),
            contact_name: call_my_dog(&self.first_name, &self.last_name, str::to_string),
        })
    }

    fn load(&self, output: &BasicsReport, sink: &mut dyn OutputSink) -> Result<()> {
        sink.emit("description", &json!(output.description))?;
        sink.emit("add", &json!(output.sum))?;
        call_my_dog(&self.first_name, &self.last_name, |name| {
            dog_contact_list(sink, name)
        })
    }
}
