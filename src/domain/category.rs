use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Life Expenses")]
    LifeExpenses,
    Electricity,
    Gas,
    Rental,
    Grocery,
    Savings,
    Education,
    Charity,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::LifeExpenses,
        Category::Electricity,
        Category::Gas,
        Category::Rental,
        Category::Grocery,
        Category::Savings,
        Category::Education,
        Category::Charity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LifeExpenses => "Life Expenses",
            Category::Electricity => "Electricity",
            Category::Gas => "Gas",
            Category::Rental => "Rental",
            Category::Grocery => "Grocery",
            Category::Savings => "Savings",
            Category::Education => "Education",
            Category::Charity => "Charity",
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Case-insensitive; spaces, dashes and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Category::ALL
            .into_iter()
            .find(|c| normalize(c.as_str()) == wanted)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub(crate) fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
