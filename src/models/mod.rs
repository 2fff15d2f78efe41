mod errors;
mod transaction;

use serde::Deserialize;
use std::fmt;
use std::fmt::{Display, Formatter};

pub use errors::RecordError;
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
pub enum CardType {
    Gold,
    Platinum,
    Signature,
    Silver
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
pub enum ExpenseType {
    Bills,
    Entertainment,
    Food,
    Fuel,
    Grocery,
    Travel
}

/// Gender marker exactly as present in the source data (`F`/`M`).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
pub enum Gender {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male
}

impl Display for CardType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Signature => "Signature",
            Self::Silver => "Silver"
        };

        formatter.write_str(label)
    }
}

impl Display for ExpenseType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Food => "Food",
            Self::Fuel => "Fuel",
            Self::Grocery => "Grocery",
            Self::Travel => "Travel"
        };

        formatter.write_str(label)
    }
}

impl Display for Gender {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Female => "F",
            Self::Male => "M"
        };

        formatter.write_str(label)
    }
}
