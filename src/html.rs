use maud::{DOCTYPE, Markup, PreEscaped, html};

// Price styles
pub const PRICE_NEGATIVE_STYLE: &str = "price red";
pub const PRICE_POSITIVE_STYLE: &str = "price green";

const PAGE_STYLE: &str = r#"
    main {
        max-width: 32rem;
        margin: 0 auto;
        font-family: sans-serif;
    }

    .transaction {
        display: flex;
        justify-content: space-between;
        padding: 0.5rem 0;
        border-bottom: 1px solid #ccc;
    }

    .price.red {
        color: #c0392b;
    }

    .price.green {
        color: #27ae60;
    }

    .delete {
        color: red;
        margin-left: 10px;
        cursor: pointer;
        background: transparent;
        border: none;
    }
"#;

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Expense Tracker" }
                style { (PreEscaped(PAGE_STYLE)) }
            }

            body
            {
                (content)
            }
        }
    }
}

/// The class for a price, red for expenses and green for income.
pub fn price_style(price: f64) -> &'static str {
    if price < 0.0 {
        PRICE_NEGATIVE_STYLE
    } else {
        PRICE_POSITIVE_STYLE
    }
}
