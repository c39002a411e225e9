use crate::models::format::plain_number;

pub struct PaletteColor {
    pub bar: &'static str,
    pub text: &'static str,
}

/// Fixed chart palette; level `i` uses entry `i % 4`.
pub static PALETTE: [PaletteColor; 4] = [
    PaletteColor { bar: "bg-blue", text: "text-blue" },
    PaletteColor { bar: "bg-green", text: "text-green" },
    PaletteColor { bar: "bg-yellow", text: "text-yellow" },
    PaletteColor { bar: "bg-red", text: "text-red" },
];

pub fn palette_color(index: usize) -> &'static PaletteColor {
    &PALETTE[index % PALETTE.len()]
}

pub struct EducationLevel {
    pub label: String,
    pub count: f64,
    pub percentage: f64,
    pub color: &'static PaletteColor,
}

impl EducationLevel {
    pub fn count_label(&self) -> String {
        plain_number(self.count)
    }

    /// One decimal place, e.g. `30.0`.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}", self.percentage)
    }
}

#[derive(Default)]
pub struct EducationBreakdown {
    pub total: f64,
    pub levels: Vec<EducationLevel>,
}

impl EducationBreakdown {
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Share of `count` in `total`, in percent; 0 when the total is 0.
pub fn percentage(count: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    count * 100.0 / total
}

/// Percentages are always recomputed from the raw counts.
pub fn education_breakdown(counts: &[(String, f64)]) -> EducationBreakdown {
    let total: f64 = counts.iter().map(|(_, count)| count).sum();
    let levels = counts
        .iter()
        .enumerate()
        .map(|(index, (label, count))| EducationLevel {
            label: label.clone(),
            count: *count,
            percentage: percentage(*count, total),
            color: palette_color(index),
        })
        .collect();
    EducationBreakdown { total, levels }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs.iter().map(|(l, c)| (l.to_string(), *c)).collect()
    }

    #[test]
    fn thirty_fifty_twenty() {
        let b = education_breakdown(&counts(&[("Primary", 30.0), ("Secondary", 50.0), ("Graduate", 20.0)]));
        assert_eq!(b.total, 100.0);
        let pct: Vec<f64> = b.levels.iter().map(|l| l.percentage).collect();
        assert_eq!(pct, vec![30.0, 50.0, 20.0]);
        let sum: f64 = pct.iter().sum();
        assert!((sum - 100.0).abs() < 1e-9);
        let labels: Vec<String> = b.levels.iter().map(|l| l.percentage_label()).collect();
        assert_eq!(labels, ["30.0", "50.0", "20.0"]);
    }

    #[test]
    fn zero_total_gives_zero_not_nan() {
        let b = education_breakdown(&counts(&[("Primary", 0.0), ("Graduate", 0.0)]));
        assert_eq!(b.total, 0.0);
        assert!(b.levels.iter().all(|l| l.percentage == 0.0));
        assert_eq!(b.levels[0].percentage_label(), "0.0");
    }

    #[test]
    fn one_decimal_rounding() {
        let b = education_breakdown(&counts(&[("A", 1.0), ("B", 2.0)]));
        assert_eq!(b.levels[0].percentage_label(), "33.3");
        assert_eq!(b.levels[1].percentage_label(), "66.7");
        assert_eq!(b.levels[1].count_label(), "2");
    }

    #[test]
    fn palette_cycles_by_index() {
        let b = education_breakdown(&counts(&[
            ("None", 1.0),
            ("Primary", 1.0),
            ("Secondary", 1.0),
            ("Higher Secondary", 1.0),
            ("Graduate", 1.0),
        ]));
        let bars: Vec<&str> = b.levels.iter().map(|l| l.color.bar).collect();
        assert_eq!(bars, ["bg-blue", "bg-green", "bg-yellow", "bg-red", "bg-blue"]);
    }
}
