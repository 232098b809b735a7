use std::fmt;

/// Fixed-shape record used by the demonstration comparators.
#[derive(Clone, Debug, PartialEq)]
pub struct Student {
    pub name: String,
    pub id: i64,
    pub age: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, id: i64, age: f64) -> Self {
        Self {
            name: name.into(),
            id,
            age,
        }
    }

    /// Less-than on `age`, suitable for [`crate::sort_by_less`].
    pub fn younger(a: &Student, b: &Student) -> bool {
        a.age < b.age
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.name, self.id, self.age)
    }
}
