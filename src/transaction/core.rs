//! Defines the core data models for transactions and the table that stores them.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset,
    format_description::well_known::Iso8601,
};

use crate::{Error, database_id::TransactionId, timezone::assume_local_time};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are immutable once stored. To create one, validate a
/// [TransactionFields] into a [NewTransaction] and hand it to a
/// [TransactionStore](crate::stores::TransactionStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID assigned by the store.
    pub id: TransactionId,
    /// A short label, e.g. "Coffee Shop".
    pub name: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub datetime: OffsetDateTime,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Negative values are expenses, zero and positive values are income.
    pub price: f64,
}

/// A transaction that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// A short, non-empty label.
    pub name: String,
    /// A non-empty description.
    pub description: String,
    /// When the transaction happened, normalised to UTC.
    pub datetime: OffsetDateTime,
    /// The signed amount of the transaction.
    pub price: f64,
}

/// The fields submitted to create a transaction.
///
/// Every field is optional so that a request with missing fields can be
/// reported as a validation error rather than a parsing error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFields {
    /// A short label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// A text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// An RFC 3339 date-time or an HTML `datetime-local` value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    /// The signed amount, as a number or as numeric text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceInput>,
}

/// A price as it arrives over the wire.
///
/// The web form sends the price as the raw text typed by the user, while
/// other clients send a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    /// A JSON number, e.g. `-1200`.
    Number(f64),
    /// Numeric text, e.g. `"12.50"`.
    Text(String),
}

impl TransactionFields {
    /// Check that every field is present and well-formed.
    ///
    /// Date-times without an offset are read as wall-clock time in
    /// `local_timezone`, a canonical timezone name such as "Pacific/Auckland".
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingFields] if any field is absent or empty,
    /// - [Error::InvalidField] if the price is not a finite number or the date-time cannot be parsed,
    /// - or [Error::InvalidTimezone] if `local_timezone` is needed but is not a valid timezone.
    pub fn validate(self, local_timezone: &str) -> Result<NewTransaction, Error> {
        let (Some(name), Some(description), Some(datetime), Some(price)) = (
            non_empty(self.name),
            non_empty(self.description),
            non_empty(self.datetime),
            self.price,
        ) else {
            return Err(Error::MissingFields);
        };

        let price = parse_price(price)?;
        let datetime = parse_datetime(&datetime, local_timezone)?;

        Ok(NewTransaction {
            name,
            description,
            datetime,
            price,
        })
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|text| !text.is_empty())
}

/// Zero sent as a number counts as a missing price, while the text "0" is a valid price.
fn parse_price(price: PriceInput) -> Result<f64, Error> {
    let price = match price {
        PriceInput::Number(number) if number == 0.0 => return Err(Error::MissingFields),
        PriceInput::Number(number) => number,
        PriceInput::Text(text) if text.trim().is_empty() => return Err(Error::MissingFields),
        PriceInput::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidField("price"))?,
    };

    if price.is_finite() {
        Ok(price)
    } else {
        Err(Error::InvalidField("price"))
    }
}

/// Parse an ISO 8601 date-time and normalise it to UTC.
///
/// - With an offset, e.g. "2024-05-01T10:30Z" or "2024-05-01T10:30:00.000+0200", the
///   offset is used as is.
/// - Without an offset, e.g. the `datetime-local` value "2024-05-01T10:30", the time is
///   wall-clock time in `local_timezone`.
/// - A date on its own, e.g. "2024-05-01", is midnight UTC on that day.
fn parse_datetime(text: &str, local_timezone: &str) -> Result<OffsetDateTime, Error> {
    if let Ok(datetime) = OffsetDateTime::parse(text, &Iso8601::DEFAULT) {
        return Ok(datetime.to_offset(UtcOffset::UTC));
    }

    if let Ok(local) = PrimitiveDateTime::parse(text, &Iso8601::DEFAULT) {
        return assume_local_time(local, local_timezone)
            .map(|datetime| datetime.to_offset(UtcOffset::UTC))
            .ok_or_else(|| Error::InvalidTimezone(local_timezone.to_owned()));
    }

    Date::parse(text, &Iso8601::DEFAULT)
        .map(|date| date.with_time(Time::MIDNIGHT).assume_utc())
        .map_err(|_| Error::InvalidField("datetime"))
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                datetime TEXT NOT NULL,
                price REAL NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;
    let description = row.get(2)?;
    let datetime = row.get(3)?;
    let price = row.get(4)?;

    Ok(Transaction {
        id,
        name,
        description,
        datetime,
        price,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod validation_tests {
    use time::macros::datetime;

    use crate::{
        Error,
        transaction::{NewTransaction, PriceInput, TransactionFields},
    };

    fn valid_fields() -> TransactionFields {
        TransactionFields {
            name: Some("Rent".to_owned()),
            description: Some("May rent".to_owned()),
            datetime: Some("2024-05-01T00:00:00Z".to_owned()),
            price: Some(PriceInput::Number(-1200.0)),
        }
    }

    #[test]
    fn accepts_complete_fields() {
        let got = valid_fields().validate("Etc/UTC");

        assert_eq!(
            got,
            Ok(NewTransaction {
                name: "Rent".to_owned(),
                description: "May rent".to_owned(),
                datetime: datetime!(2024-05-01 0:00 UTC),
                price: -1200.0,
            })
        );
    }

    #[test]
    fn rejects_each_missing_field() {
        let cases = [
            TransactionFields {
                name: None,
                ..valid_fields()
            },
            TransactionFields {
                description: None,
                ..valid_fields()
            },
            TransactionFields {
                datetime: None,
                ..valid_fields()
            },
            TransactionFields {
                price: None,
                ..valid_fields()
            },
        ];

        for fields in cases {
            assert_eq!(
                fields.clone().validate("Etc/UTC"),
                Err(Error::MissingFields),
                "want missing fields error for {fields:?}"
            );
        }
    }

    #[test]
    fn rejects_empty_fields() {
        let cases = [
            TransactionFields {
                name: Some(String::new()),
                ..valid_fields()
            },
            TransactionFields {
                description: Some(String::new()),
                ..valid_fields()
            },
            TransactionFields {
                datetime: Some(String::new()),
                ..valid_fields()
            },
            TransactionFields {
                price: Some(PriceInput::Text(String::new())),
                ..valid_fields()
            },
        ];

        for fields in cases {
            assert_eq!(
                fields.clone().validate("Etc/UTC"),
                Err(Error::MissingFields),
                "want missing fields error for {fields:?}"
            );
        }
    }

    #[test]
    fn parses_price_text() {
        let fields = TransactionFields {
            price: Some(PriceInput::Text("12.50".to_owned())),
            ..valid_fields()
        };

        assert_eq!(fields.validate("Etc/UTC").unwrap().price, 12.5);
    }

    #[test]
    fn numeric_zero_price_is_missing() {
        let fields = TransactionFields {
            price: Some(PriceInput::Number(0.0)),
            ..valid_fields()
        };

        assert_eq!(fields.validate("Etc/UTC"), Err(Error::MissingFields));
    }

    #[test]
    fn zero_price_text_is_valid() {
        let fields = TransactionFields {
            price: Some(PriceInput::Text("0".to_owned())),
            ..valid_fields()
        };

        assert_eq!(fields.validate("Etc/UTC").unwrap().price, 0.0);
    }

    #[test]
    fn parses_iso_8601_datetime_shapes() {
        let cases = [
            ("2024-05-01T10:30:00.000Z", datetime!(2024-05-01 10:30 UTC)),
            ("2024-05-01T10:30Z", datetime!(2024-05-01 10:30 UTC)),
            ("2024-05-01T10:30:00.000+0200", datetime!(2024-05-01 8:30 UTC)),
            ("2024-05-01T10:30:00-05:00", datetime!(2024-05-01 15:30 UTC)),
        ];

        for (text, want) in cases {
            let fields = TransactionFields {
                datetime: Some(text.to_owned()),
                ..valid_fields()
            };

            assert_eq!(
                fields.validate("Pacific/Auckland").map(|t| t.datetime),
                Ok(want),
                "want {want} for {text:?}"
            );
        }
    }

    #[test]
    fn date_only_is_midnight_utc() {
        let fields = TransactionFields {
            datetime: Some("2024-05-01".to_owned()),
            ..valid_fields()
        };

        let got = fields.validate("Pacific/Auckland").unwrap().datetime;

        assert_eq!(got, datetime!(2024-05-01 0:00 UTC));
    }

    #[test]
    fn rejects_non_numeric_price() {
        let fields = TransactionFields {
            price: Some(PriceInput::Text("Coffee".to_owned())),
            ..valid_fields()
        };

        assert_eq!(fields.validate("Etc/UTC"), Err(Error::InvalidField("price")));
    }

    #[test]
    fn rejects_unparsable_datetime() {
        let fields = TransactionFields {
            datetime: Some("yesterday".to_owned()),
            ..valid_fields()
        };

        assert_eq!(
            fields.validate("Etc/UTC"),
            Err(Error::InvalidField("datetime"))
        );
    }

    #[test]
    fn normalises_offset_to_utc() {
        let fields = TransactionFields {
            datetime: Some("2024-05-01T12:00:00+12:00".to_owned()),
            ..valid_fields()
        };

        let got = fields.validate("Etc/UTC").unwrap().datetime;

        assert_eq!(got, datetime!(2024-05-01 0:00 UTC));
        assert!(got.offset().is_utc());
    }

    #[test]
    fn reads_datetime_local_in_local_timezone() {
        let fields = TransactionFields {
            datetime: Some("2024-07-01T10:30".to_owned()),
            ..valid_fields()
        };

        let got = fields.validate("Pacific/Auckland").unwrap().datetime;

        assert_eq!(got, datetime!(2024-06-30 22:30 UTC));
    }

    #[test]
    fn reads_datetime_local_with_seconds() {
        let fields = TransactionFields {
            datetime: Some("2024-07-01T10:30:15".to_owned()),
            ..valid_fields()
        };

        let got = fields.validate("Etc/UTC").unwrap().datetime;

        assert_eq!(got, datetime!(2024-07-01 10:30:15 UTC));
    }

    #[test]
    fn datetime_local_needs_valid_timezone() {
        let fields = TransactionFields {
            datetime: Some("2024-07-01T10:30".to_owned()),
            ..valid_fields()
        };

        assert_eq!(
            fields.validate("Not/A_Zone"),
            Err(Error::InvalidTimezone("Not/A_Zone".to_owned()))
        );
    }

    #[test]
    fn deserializes_price_as_number_or_text() {
        let number: TransactionFields = serde_json::from_str(r#"{"price": -1200}"#).unwrap();
        let text: TransactionFields = serde_json::from_str(r#"{"price": "12.50"}"#).unwrap();

        assert_eq!(number.price, Some(PriceInput::Number(-1200.0)));
        assert_eq!(text.price, Some(PriceInput::Text("12.50".to_owned())));
    }
}
