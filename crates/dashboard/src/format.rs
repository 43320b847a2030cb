const DEFAULT_CURRENCY: &str = "USD";
const MISSING: &str = "-";

/// Zero and NaN count as missing, like an empty upstream field.
pub fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Two-decimal formatting where an exact half rounds away from zero, the way
/// browsers format prices. `{:.2}` alone would round such ties to even.
pub fn fixed2(value: f64) -> String {
    let doubled = value * 200.0;
    let exact = value.mul_add(200.0, -doubled) == 0.0;
    if exact && doubled.fract() == 0.0 && doubled % 2.0 != 0.0 {
        return format!("{:.2}", (doubled + doubled.signum()) / 200.0);
    }
    format!("{:.2}", value)
}

pub fn format_price(value: Option<f64>, currency: Option<&str>) -> String {
    let Some(value) = value else {
        return MISSING.to_string();
    };

    match currency.unwrap_or(DEFAULT_CURRENCY) {
        DEFAULT_CURRENCY => format!("${}", fixed2(value)),
        other => format!("{} {}", other, fixed2(value)),
    }
}

pub fn format_number(value: Option<f64>) -> String {
    let Some(value) = present(value) else {
        return MISSING.to_string();
    };

    if value >= 1e9 {
        format!("{}B", fixed2(value / 1e9))
    } else if value >= 1e6 {
        format!("{}M", fixed2(value / 1e6))
    } else {
        value.to_string()
    }
}

pub fn format_market_cap(value: Option<f64>) -> String {
    format_number(value)
}
