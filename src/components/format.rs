/// "1st", "2nd", "13th", "22nd".
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Explicit sign for positive numbers, as on a goal-difference column.
pub fn signed(value: i32) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

pub fn percent(value: f64) -> String {
    if value > 0.0 && value < 0.1 {
        "<0.1%".to_string()
    } else {
        format!("{value:.1}%")
    }
}

/// Truncate to `width` characters, marking the cut with an ellipsis.
pub fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 101, 112].map(ordinal).to_vec();
        assert_eq!(
            got,
            vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "101st", "112th"]
        );
    }

    #[test]
    fn signs() {
        assert_eq!(signed(3), "+3");
        assert_eq!(signed(0), "0");
        assert_eq!(signed(-2), "-2");
    }

    #[test]
    fn percents() {
        assert_eq!(percent(71.24), "71.2%");
        assert_eq!(percent(0.04), "<0.1%");
        assert_eq!(percent(0.0), "0.0%");
    }

    #[test]
    fn clipping() {
        assert_eq!(clip("Arsenal", 10), "Arsenal");
        assert_eq!(clip("Wolverhampton Wanderers", 8), "Wolverh…");
    }
}
