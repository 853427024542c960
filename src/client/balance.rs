//! Derives the running balance from the transactions in view.

use crate::client::TransactionView;

/// Sum the price of every transaction, starting from positive zero.
pub fn balance(transactions: &[TransactionView]) -> f64 {
    transactions
        .iter()
        .fold(0.0, |total, transaction| total + transaction.price)
}

/// Format `balance` with exactly two decimal places.
pub fn format_balance(balance: f64) -> String {
    format!("{balance:.2}")
}

#[cfg(test)]
mod tests {
    use crate::client::TransactionView;

    use super::{balance, format_balance};

    fn with_price(id: i64, price: f64) -> TransactionView {
        TransactionView {
            id,
            name: "name".to_owned(),
            description: "description".to_owned(),
            datetime: "May 1, 2024 at 12:00:00 AM".to_owned(),
            price,
        }
    }

    #[test]
    fn empty_balance_is_zero() {
        assert_eq!(format_balance(balance(&[])), "0.00");
    }

    #[test]
    fn empty_balance_is_not_negative_zero() {
        assert!(balance(&[]).is_sign_positive());
    }

    #[test]
    fn rounds_sum_to_two_decimal_places() {
        let transactions = [with_price(1, 10.005), with_price(2, -3.002)];

        assert_eq!(format_balance(balance(&transactions)), "7.00");
    }

    #[test]
    fn pads_to_two_decimal_places() {
        let transactions = [with_price(1, 12.5), with_price(2, -1200.0)];

        assert_eq!(format_balance(balance(&transactions)), "-1187.50");
    }
}
