//! Money formatting helpers for order cards

/// Format an amount with a thousands separator (space) and no decimal part.
pub fn format_grouped(value: f64) -> String {
    let formatted = format!("{:.0}", value);

    // Insert a space every 3 digits, counting from the end
    let mut result = String::new();
    let chars: Vec<char> = formatted.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }

    result.chars().rev().collect()
}

/// Format a money amount in Vietnamese đồng with the currency suffix.
pub fn format_vnd(value: f64) -> String {
    format!("{}₫", format_grouped(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(1234567.0), "1 234 567");
        assert_eq!(format_grouped(450000.0), "450 000");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(-1234.0), "-1 234");
    }

    #[test]
    fn test_format_grouped_rounds_fractions() {
        assert_eq!(format_grouped(1234.56), "1 235");
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(450000.0), "450 000₫");
        assert_eq!(format_vnd(0.0), "0₫");
    }
}
