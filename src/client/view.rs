//! Renders the balance, the form for adding a transaction and the list of transactions.

use maud::{Markup, html};

use crate::{
    client::{FormInputs, TransactionView, balance, format_balance},
    html::{base, price_style},
};

/// Render the whole page for `transactions` with the pending `form` inputs.
pub fn transactions_view(transactions: &[TransactionView], form: &FormInputs) -> Markup {
    let content = html! {
        main
        {
            h1 { "Welcome to Expense Tracker" }

            h3 { "BALANCE LEFT = " (format_balance(balance(transactions))) }

            form action=""
            {
                div class="basic"
                {
                    input
                        type="text"
                        name="price_and_name"
                        value=(form.price_and_name)
                        placeholder="price and name";
                    input type="datetime-local" name="datetime" value=(form.datetime);
                }

                div class="description"
                {
                    input
                        type="text"
                        name="description"
                        value=(form.description)
                        placeholder="description";
                }

                button type="submit" { "Add new transaction" }
            }

            div class="transactions"
            {
                @for transaction in transactions
                {
                    (transaction_row(transaction))
                }
            }
        }
    };

    base("Transactions", &content)
}

fn transaction_row(transaction: &TransactionView) -> Markup {
    html! {
        div class="transaction" data-id=(transaction.id)
        {
            div class="left"
            {
                div class="name" { (transaction.name) }
                div class="description" { (transaction.description) }
            }

            div class="right"
            {
                div class=(price_style(transaction.price)) { (transaction.price) }
                div class="datetime" { (transaction.datetime) }
                button
                    type="button"
                    class="delete"
                    data-id=(transaction.id)
                    title="Delete transaction"
                {
                    "Delete"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{ElementRef, Html, Selector};

    use crate::{
        client::{FormInputs, TransactionView},
        test_utils::{
            assert_form_input, assert_form_submit_button_with_text, assert_valid_html,
            must_get_form, parse_html_document,
        },
    };

    use super::transactions_view;

    fn view(id: i64, name: &str, price: f64) -> TransactionView {
        TransactionView {
            id,
            name: name.to_owned(),
            description: format!("{name} description"),
            datetime: "May 1, 2024 at 12:00:00 AM".to_owned(),
            price,
        }
    }

    fn render(transactions: &[TransactionView], form: &FormInputs) -> Html {
        let html = parse_html_document(&transactions_view(transactions, form).into_string());
        assert_valid_html(&html);
        html
    }

    #[track_caller]
    fn must_get_text(html: &Html, selector: &str) -> String {
        html.select(&Selector::parse(selector).unwrap())
            .next()
            .unwrap_or_else(|| panic!("No element found for {selector}"))
            .text()
            .collect::<String>()
    }

    fn rows(html: &Html) -> Vec<ElementRef<'_>> {
        html.select(&Selector::parse("div.transaction").unwrap())
            .collect()
    }

    #[test]
    fn shows_balance_to_two_decimal_places() {
        let html = render(
            &[view(1, "a", 10.005), view(2, "b", -3.002)],
            &FormInputs::default(),
        );

        assert_eq!(must_get_text(&html, "h3"), "BALANCE LEFT = 7.00");
    }

    #[test]
    fn shows_form_with_pending_inputs() {
        let inputs = FormInputs {
            price_and_name: "12.50 Coffee Shop".to_owned(),
            datetime: "2024-05-01T08:15".to_owned(),
            description: "Flat white".to_owned(),
        };
        let html = render(&[], &inputs);
        let form = must_get_form(&html);

        assert_form_input(&form, "price_and_name", "text", "12.50 Coffee Shop");
        assert_form_input(&form, "datetime", "datetime-local", "2024-05-01T08:15");
        assert_form_input(&form, "description", "text", "Flat white");
        assert_form_submit_button_with_text(&form, "Add new transaction");
    }

    #[test]
    fn shows_no_rows_without_transactions() {
        let html = render(&[], &FormInputs::default());

        assert!(rows(&html).is_empty());
        assert_eq!(must_get_text(&html, "h3"), "BALANCE LEFT = 0.00");
    }

    #[test]
    fn shows_rows_in_list_order() {
        let transactions = [view(3, "Salary", 3000.0), view(1, "Rent", -1200.0)];
        let html = render(&transactions, &FormInputs::default());

        let rows = rows(&html);

        assert_eq!(rows.len(), 2);
        for (row, transaction) in rows.iter().zip(&transactions) {
            assert_eq!(
                row.value().attr("data-id"),
                Some(transaction.id.to_string().as_str())
            );
            let name = row
                .select(&Selector::parse(".name").unwrap())
                .next()
                .expect("No name found")
                .text()
                .collect::<String>();
            assert_eq!(name, transaction.name);
        }
    }

    #[test]
    fn colours_prices_by_sign() {
        let html = render(
            &[view(1, "Salary", 3000.0), view(2, "Rent", -1200.0)],
            &FormInputs::default(),
        );

        assert_eq!(must_get_text(&html, ".price.green"), "3000");
        assert_eq!(must_get_text(&html, ".price.red"), "-1200");
    }

    #[test]
    fn each_row_has_delete_button_for_its_id() {
        let html = render(&[view(5, "Rent", -1200.0)], &FormInputs::default());

        let button = html
            .select(&Selector::parse("button.delete").unwrap())
            .next()
            .expect("No delete button found");

        assert_eq!(button.value().attr("data-id"), Some("5"));
        assert_eq!(must_get_text(&html, ".datetime"), "May 1, 2024 at 12:00:00 AM");
    }
}
