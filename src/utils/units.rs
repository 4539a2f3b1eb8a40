use crate::errors::ImpactError;

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

pub fn rad_to_deg(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

pub fn km_to_m(km: f64) -> f64 {
    km * 1_000.0
}

pub fn m_to_km(m: f64) -> f64 {
    m / 1_000.0
}

pub fn days_to_seconds(days: f64) -> f64 {
    days * crate::constants::SECONDS_PER_DAY
}

/// Formats a number with `,` thousands separators and at most `max_decimals`
/// fraction digits. Trailing zeros in the fraction are dropped.
pub fn format_number(value: f64, max_decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.*}", max_decimals, value.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value.is_sign_negative() && !is_zero {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

pub fn require_finite(name: &'static str, value: f64) -> Result<f64, ImpactError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ImpactError::invalid(name, value, "must be finite"))
    }
}

pub fn require_positive(name: &'static str, value: f64) -> Result<f64, ImpactError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ImpactError::invalid(name, value, "must be greater than zero"))
    }
}

pub fn require_non_negative(name: &'static str, value: f64) -> Result<f64, ImpactError> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ImpactError::invalid(name, value, "must not be negative"))
    }
}
