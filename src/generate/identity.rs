use rand::Rng;

use crate::model::names::{CLASS_LABELS, FIRST_NAMES, LAST_NAMES, RANDOM_CLASS_LABEL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassAssignment {
    Random,
    Fixed(String),
}

impl ClassAssignment {
    /// An empty label or the "Random Assignment" label selects random classes.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case(RANDOM_CLASS_LABEL) {
            ClassAssignment::Random
        } else {
            ClassAssignment::Fixed(label.to_string())
        }
    }
}

pub fn student_id(prefix: &str, index: usize) -> String {
    format!("{}{:04}", prefix, index + 1)
}

pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}

pub fn assign_class<R: Rng + ?Sized>(rng: &mut R, assignment: &ClassAssignment) -> String {
    match assignment {
        ClassAssignment::Random => {
            CLASS_LABELS[rng.random_range(0..CLASS_LABELS.len())].to_string()
        }
        ClassAssignment::Fixed(label) => label.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/generate/identity.rs"]
mod tests;
