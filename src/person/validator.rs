use serde_json::{Number, Value};

use super::{PersonFields, PersonPatch};

/// The first schema rule a candidate record breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("Name is required")]
    NameRequired,
    #[error("Age must be a number")]
    AgeNotANumber,
    #[error("Hobbies must be an array of strings")]
    HobbiesNotStrings,
}

struct Rule {
    holds: fn(&PersonCandidate) -> bool,
    violation: Violation,
}

fn name_is_present(candidate: &PersonCandidate) -> bool {
    matches!(&candidate.name, Some(Value::String(name)) if !name.is_empty())
}

fn age_is_number(candidate: &PersonCandidate) -> bool {
    matches!(&candidate.age, Some(Value::Number(_)))
}

fn hobbies_are_strings(candidate: &PersonCandidate) -> bool {
    matches!(&candidate.hobbies, Some(Value::Array(hobbies)) if hobbies.iter().all(Value::is_string))
}

/// Evaluated top to bottom, the first rule that does not hold is reported.
const RULES: [Rule; 3] = [
    Rule {
        holds: name_is_present,
        violation: Violation::NameRequired,
    },
    Rule {
        holds: age_is_number,
        violation: Violation::AgeNotANumber,
    },
    Rule {
        holds: hobbies_are_strings,
        violation: Violation::HobbiesNotStrings,
    },
];

/// A fully materialized record, about to be checked against the schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonCandidate {
    pub name: Option<Value>,
    pub age: Option<Value>,
    pub hobbies: Option<Value>,
}

impl PersonCandidate {
    /// Overlays every field supplied by `patch`, keeping the current value of the others.
    pub fn overlay(self, patch: PersonPatch) -> Self {
        Self {
            name: patch.name.or(self.name),
            age: patch.age.or(self.age),
            hobbies: patch.hobbies.or(self.hobbies),
        }
    }

    pub fn validate(&self) -> Result<(), Violation> {
        match RULES.iter().find(|rule| !(rule.holds)(self)) {
            Some(rule) => Err(rule.violation),
            None => Ok(()),
        }
    }

    pub fn into_fields(self) -> Result<PersonFields, Violation> {
        self.validate()?;

        let Some(Value::String(name)) = self.name else {
            return Err(Violation::NameRequired);
        };

        let Some(Value::Number(age)) = self.age else {
            return Err(Violation::AgeNotANumber);
        };

        let Some(Value::Array(hobbies)) = self.hobbies else {
            return Err(Violation::HobbiesNotStrings);
        };

        let hobbies = hobbies
            .into_iter()
            .map(|hobby| match hobby {
                Value::String(hobby) => Ok(hobby),
                _ => Err(Violation::HobbiesNotStrings),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PersonFields {
            name,
            age: integral_age(age),
            hobbies,
        })
    }
}

/// Largest magnitude below which every integral `f64` is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Writes `30.0` as `30`, JSON does not tell the two apart.
fn integral_age(age: Number) -> Number {
    match age.as_f64() {
        Some(value)
            if age.is_f64() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER =>
        {
            Number::from(value as i64)
        }
        _ => age,
    }
}

impl From<PersonPatch> for PersonCandidate {
    fn from(patch: PersonPatch) -> Self {
        PersonCandidate::default().overlay(patch)
    }
}

impl From<&PersonFields> for PersonCandidate {
    fn from(fields: &PersonFields) -> Self {
        Self {
            name: Some(Value::String(fields.name.clone())),
            age: Some(Value::Number(fields.age.clone())),
            hobbies: Some(Value::Array(
                fields.hobbies.iter().cloned().map(Value::String).collect(),
            )),
        }
    }
}
