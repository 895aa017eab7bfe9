//! Money formatting for tables and cards.

/// `1234567.891` → `"$1,234,567.89"`. Always the absolute value; pair with
/// [`format_signed_amount`] or [`amount_class`] when direction matters.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}.{fraction:02}")
}

/// Signed rendering used in transaction tables: `+$500.00` / `-$42.50`.
pub fn format_signed_amount(amount: f64) -> String {
    let sign = if amount >= 0.0 { '+' } else { '-' };
    format!("{sign}{}", format_currency(amount))
}

/// CSS class for an amount cell.
pub fn amount_class(amount: f64) -> &'static str {
    if amount >= 0.0 {
        "amount-positive"
    } else {
        "amount-negative"
    }
}

/// `"mutual_fund"` → `"Mutual Fund"` for option labels.
pub fn label_from_snake(value: &str) -> String {
    value
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5000.0), "$5,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn signed_amounts_keep_the_absolute_value() {
        assert_eq!(format_signed_amount(500.0), "+$500.00");
        assert_eq!(format_signed_amount(-42.5), "-$42.50");
        assert_eq!(amount_class(500.0), "amount-positive");
        assert_eq!(amount_class(-0.01), "amount-negative");
    }

    #[test]
    fn snake_labels() {
        assert_eq!(label_from_snake("mutual_fund"), "Mutual Fund");
        assert_eq!(label_from_snake("stock"), "Stock");
        assert_eq!(label_from_snake("bank_account"), "Bank Account");
    }
}
