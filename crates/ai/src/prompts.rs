//! Prompt construction for the three insight sections.

use finsight_core::insights::MetricsPayload;
use rust_decimal::Decimal;
use serde::Serialize;

const JSON_ONLY_RULE: &str =
    "Return only valid JSON. Do not include markdown, backticks, or explanation.";

/// Formats an amount with thousands separators and two decimals, e.g. `₹1,234.50`.
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.abs().round_dp(2));
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}.{}", sign, symbol, grouped, fraction)
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string())
}

pub fn income_prompt(payload: &MetricsPayload, symbol: &str) -> String {
    format!(
        "As a financial advisor, analyze this data and provide insights:\n\
- Total Income: {}\n\
- Balance: {}\n\
- Monthly Trends: {}\n\n\
Provide a detailed analysis focusing on income patterns, growth opportunities, and specific actionable recommendations.\n\
Format your response strictly as a JSON with this structure:\n\
{{\"analysis\": \"detailed income analysis\", \"recommendations\": [\"rec1\", \"rec2\"], \"opportunities\": [\"opp1\", \"opp2\"]}}\n\n\
{}",
        format_amount(symbol, payload.total_income),
        format_amount(symbol, payload.current_balance),
        to_json(&payload.monthly_trends),
        JSON_ONLY_RULE
    )
}

pub fn expense_prompt(payload: &MetricsPayload, symbol: &str) -> String {
    format!(
        "As a financial advisor, analyze these spending patterns:\n\
- Total Expenses: {}\n\
- Expenses By Category: {}\n\
- Monthly Trends: {}\n\n\
Provide detailed spending analysis, identify patterns, and suggest optimization strategies.\n\
Format your response strictly as a JSON with this structure:\n\
{{\"analysis\": \"detailed expense analysis\", \"optimization\": [\"opt1\", \"opt2\"], \"savings_opportunities\": [\"save1\", \"save2\"]}}\n\n\
{}",
        format_amount(symbol, payload.total_expenses),
        to_json(&payload.expense_by_category),
        to_json(&payload.monthly_trends),
        JSON_ONLY_RULE
    )
}

pub fn investment_prompt(payload: &MetricsPayload, symbol: &str) -> String {
    let allocation = payload
        .allocation_classes
        .iter()
        .map(|class| format!("\"{}\": \"percent\"", class))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "As a financial advisor, suggest investment strategies based on:\n\
- Current Balance: {}\n\
- Total Income: {}\n\
- Total Expenses: {}\n\
- Savings Rate: {}%\n\n\
Provide detailed investment strategy considering risk tolerance and market conditions.\n\
Format your response strictly as a JSON with this structure:\n\
{{\"strategy\": \"detailed strategy\", \"recommendations\": [\"rec1\", \"rec2\"], \"allocation\": {{{}}}}}\n\n\
{}",
        format_amount(symbol, payload.current_balance),
        format_amount(symbol, payload.total_income),
        format_amount(symbol, payload.total_expenses),
        payload.savings_rate.round_dp(2),
        allocation,
        JSON_ONLY_RULE
    )
}
