//! The pending inputs of the form for adding a transaction.

use crate::transaction::{PriceInput, TransactionFields};

/// The text currently typed into the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInputs {
    /// The price followed by the name, e.g. "12.50 Coffee Shop".
    pub price_and_name: String,
    /// The value of the `datetime-local` input, e.g. "2024-05-01T08:15".
    pub datetime: String,
    /// The description of the transaction.
    pub description: String,
}

impl FormInputs {
    /// The fields to submit for these inputs.
    ///
    /// The price is sent exactly as typed, the server decides whether it is a number.
    pub fn to_fields(&self) -> TransactionFields {
        let PriceAndName { price, name } = parse_price_and_name(&self.price_and_name);

        TransactionFields {
            name: Some(name),
            description: Some(self.description.clone()),
            datetime: Some(self.datetime.clone()),
            price: Some(PriceInput::Text(price)),
        }
    }

    /// Empty every input.
    pub fn clear(&mut self) {
        self.price_and_name.clear();
        self.datetime.clear();
        self.description.clear();
    }
}

/// The two parts of the combined price and name input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceAndName {
    /// The first word of the input.
    pub price: String,
    /// The remaining words, joined by single spaces.
    pub name: String,
}

/// Split the combined input on whitespace: the first word is the price and
/// the rest is the name.
pub fn parse_price_and_name(input: &str) -> PriceAndName {
    let mut words = input.split_whitespace();
    let price = words.next().unwrap_or_default().to_owned();
    let name = words.collect::<Vec<_>>().join(" ");

    PriceAndName { price, name }
}
