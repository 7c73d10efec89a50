// src/core/odds.rs
//
// Price/line text as printed on odds pages -> numbers.

/// American odds ("-150", "+130", "EVEN") -> implied probability.
/// Unparseable or zero prices give None.
pub fn american_to_prob(odds: &str) -> Option<f64> {
    let t = odds.trim();
    if t.eq_ignore_ascii_case("even") || t.eq_ignore_ascii_case("ev") {
        return Some(0.5);
    }
    let price: f64 = t.parse().ok()?;
    if !price.is_finite() || price == 0.0 {
        return None;
    }
    Some(if price > 0.0 {
        100.0 / (price + 100.0)
    } else {
        -price / (-price + 100.0)
    })
}

/// Inverse of [`american_to_prob`], rounded to a whole price.
pub fn prob_to_american(p: f64) -> Option<i32> {
    if !(p > 0.0 && p < 1.0) {
        return None;
    }
    let price = if p >= 0.5 {
        -100.0 * p / (1.0 - p)
    } else {
        100.0 * (1.0 - p) / p
    };
    Some(price.round() as i32)
}

/// "+170" / "-200"
pub fn fmt_american(price: i32) -> String {
    if price > 0 { format!("+{price}") } else { price.to_string() }
}

/// Spread or total line ("-3.5", "+7", "o220.5", "u6", "PK") -> points.
pub fn parse_point(line: &str) -> Option<f64> {
    let t = line.trim();
    if t.eq_ignore_ascii_case("pk") || t.eq_ignore_ascii_case("even") {
        return Some(0.0);
    }
    let t = t
        .strip_prefix(['o', 'O', 'u', 'U'])
        .unwrap_or(t);
    let v: f64 = t.trim().parse().ok()?;
    v.is_finite().then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn american_prices() {
        assert!(close(american_to_prob("-150").unwrap(), 0.6));
        assert!(close(american_to_prob("+150").unwrap(), 0.4));
        assert!(close(american_to_prob("EVEN").unwrap(), 0.5));
        assert!(close(american_to_prob("+100").unwrap(), 0.5));
        assert_eq!(american_to_prob(""), None);
        assert_eq!(american_to_prob("OFF"), None);
        assert_eq!(american_to_prob("0"), None);
    }

    #[test]
    fn back_to_american() {
        assert_eq!(prob_to_american(0.6), Some(-150));
        assert_eq!(prob_to_american(0.4), Some(150));
        assert_eq!(prob_to_american(1.0), None);
        assert_eq!(fmt_american(170), "+170");
        assert_eq!(fmt_american(-200), "-200");
    }

    #[test]
    fn points() {
        assert_eq!(parse_point("-3.5"), Some(-3.5));
        assert_eq!(parse_point("+7"), Some(7.0));
        assert_eq!(parse_point("o220.5"), Some(220.5));
        assert_eq!(parse_point("U6"), Some(6.0));
        assert_eq!(parse_point("PK"), Some(0.0));
        assert_eq!(parse_point("N/A"), None);
    }
}
