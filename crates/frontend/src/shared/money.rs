//! Форматирование денежных сумм операций

/// Сумма с разделителем тысяч (пробел) и двумя знаками после точки
///
/// Округление идёт до копеек, поэтому `-0.001` выводится как `0.00`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();

    let digits = (abs / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    format!("{}{}.{:02}", sign, grouped, abs % 100)
}

/// Сумма с символом рубля
pub fn format_money_rub(amount: f64) -> String {
    format!("{} ₽", format_money(amount))
}
