use crate::domain::model::{Adoption, Animal, Dog, Sex, Species};

pub fn sample_numbers() -> Vec<i64> {
    (1..=9).collect()
}

pub fn sample_dog() -> Dog {
    Dog {
        id: 953,
        legs: 4,
        color: "red".to_string(),
        breed: "doberman".to_string(),
        months: 8,
    }
}

pub fn shelter_animals() -> Vec<Animal> {
    vec![
        Animal {
            species: Species::Dog,
            breed: "lab".to_string(),
            name: "Fido".to_string(),
            sex: Sex::Female,
            weight: 80,
            age_in_months: 19,
            shots: true,
            color: "tan".to_string(),
            adopted: Adoption::Yes,
            admission_date: "10/15/21".to_string(),
            release_date: "10/21/21".to_string(),
        },
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
            admission_date: "12/12/20".to_string(),
            release_date: String::new(),
        },
        Animal {
            species: Species::Dog,
            breed: "bulldog".to_string(),
            name: "Chesty".to_string(),
            sex: Sex::Male,
            weight: 100,
            age_in_months: 36,
            shots: true,
            color: "tricolor".to_string(),
            adopted: Adoption::Yes,
            admission_date: "10/1/21".to_string(),
            release_date: "12/26/21".to_string(),
        },
        Animal {
            species: Species::Bird,
            breed: "bald eagle".to_string(),
            name: "Bradley".to_string(),
            sex: Sex::Male,
            weight: 16,
            age_in_months: 28,
            shots: false,
            color: "brown".to_string(),
            adopted: Adoption::No,
            admission_date: "7/4/21".to_string(),
            release_date: String::new(),
        },
    ]
}
