use rayon::prelude::*;

use crate::{
    catalogue::TransportCatalogue,
    requests::{Answer, text::TextQuery},
};

pub struct Config {
    /// Significant digits used when printing curvature.
    pub curvature_digits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            curvature_digits: 6,
        }
    }
}

/// Renders an answer as a single text line.
pub fn format_answer(answer: &Answer, config: &Config) -> String {
    match answer {
        Answer::Bus {
            name,
            info: Some(info),
        } => format!(
            "Bus {name}: {} stops on route, {} unique stops, {:.0} route length, {} curvature",
            info.stop_count,
            info.unique_stop_count,
            info.route_length.as_meters(),
            format_significant(info.curvature, config.curvature_digits),
        ),
        Answer::Bus { name, info: None } => format!("Bus {name}: not found"),
        Answer::Stop {
            name,
            buses: Some(buses),
        } if buses.is_empty() => format!("Stop {name}: no buses"),
        Answer::Stop {
            name,
            buses: Some(buses),
        } => format!("Stop {name}: buses {}", buses.join(" ")),
        Answer::Stop { name, buses: None } => format!("Stop {name}: not found"),
    }
}

pub fn format_invalid(line: &str) -> String {
    format!("{line}: not a valid query")
}

/// Answers parsed text queries in parallel and renders one line per query, in order.
pub fn text_report(
    catalogue: &TransportCatalogue,
    queries: &[TextQuery],
    config: &Config,
) -> Vec<String> {
    queries
        .par_iter()
        .map(|query| match query {
            TextQuery::Stat(query) => format_answer(&catalogue.answer(query), config),
            TextQuery::Invalid(line) => format_invalid(line),
        })
        .collect()
}

/// Formats `value` with at most `digits` significant digits, dropping trailing zeros.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let digits = digits.max(1);
    let exponent = value.abs().log10().floor() as i32;
    if exponent < -5 || exponent >= digits as i32 {
        let formatted = format!("{:.*e}", digits - 1, value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{exp}", trim_zeros(mantissa)),
            None => formatted,
        };
    }
    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    trim_zeros(&format!("{value:.decimals$}")).to_string()
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn significant_digits() {
        assert_eq!(format_significant(1.0, 6), "1");
        assert_eq!(format_significant(1.361239, 6), "1.36124");
        assert_eq!(format_significant(1.25, 6), "1.25");
        assert_eq!(format_significant(12.7, 2), "13");
    }
}
