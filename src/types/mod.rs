mod month;

pub use month::Month;

pub type TransactionId = u32;
