//! Stock chart

use std::io;

use crate::inventory::StockLevel;

/// Renders an ordered stock snapshot as a visual artifact.
///
/// The inventory hands renderers nothing beyond the `(name, stock)` pairs in
/// add order; everything about the artifact is the renderer's concern.
pub trait ChartRenderer {
    /// Renders the snapshot to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    fn render(&self, levels: &[StockLevel], out: &mut dyn io::Write) -> io::Result<()>;
}

/// Text bar chart with one labeled bar per product.
///
/// Bars are scaled to the largest stock level in the snapshot and each bar
/// carries its stock value as a label. Negative stock renders as an empty bar
/// with the value still shown.
#[derive(Debug, Clone, Copy)]
pub struct TextBarChart {
    width: usize,
}

impl TextBarChart {
    /// Creates a chart renderer with the given maximum bar width.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Default for TextBarChart {
    fn default() -> Self {
        Self::new(40)
    }
}

impl ChartRenderer for TextBarChart {
    fn render(&self, levels: &[StockLevel], out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Inventory Levels")?;
        writeln!(out)?;

        if levels.is_empty() {
            return writeln!(out, "(no products)");
        }

        let label_width = levels.iter().map(|level| level.name.len()).max().unwrap_or(0);
        let max_stock = levels.iter().map(|level| level.stock.max(0)).max().unwrap_or(0);

        for level in levels {
            let bar = self.bar(level.stock, max_stock);

            writeln!(
                out,
                "{name:<label_width$} | {bar} {stock}",
                name = level.name,
                stock = level.stock,
            )?;
        }

        Ok(())
    }
}

impl TextBarChart {
    fn bar(&self, stock: i64, max_stock: i64) -> String {
        if stock <= 0 || max_stock <= 0 {
            return String::new();
        }

        // Widened so the product cannot overflow even at `i64::MAX` stock.
        let width = u128::try_from(self.width).unwrap_or(u128::MAX);
        let stock = u128::try_from(stock).unwrap_or(0);
        let max_stock = u128::try_from(max_stock).unwrap_or(1).max(1);

        let len = (stock * width / max_stock).max(1);
        let len = usize::try_from(len).unwrap_or(self.width).min(self.width);

        "\u{2588}".repeat(len)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn level(name: &str, stock: i64) -> StockLevel {
        StockLevel {
            name: name.to_string(),
            stock,
        }
    }

    fn render_to_string(levels: &[StockLevel]) -> TestResult<String> {
        let mut out = Vec::new();
        TextBarChart::new(10).render(levels, &mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn bars_scale_to_the_largest_stock() -> TestResult {
        let rendered = render_to_string(&[level("Aspirin", 100), level("Tylenol", 50)])?;

        let aspirin_bar = "\u{2588}".repeat(10);
        let tylenol_bar = "\u{2588}".repeat(5);

        assert!(rendered.contains(&format!("Aspirin | {aspirin_bar} 100")));
        assert!(rendered.contains(&format!("Tylenol | {tylenol_bar} 50")));

        Ok(())
    }

    #[test]
    fn labels_align_on_the_longest_name() -> TestResult {
        let rendered = render_to_string(&[level("Aspirin", 10), level("Amoxicillin", 10)])?;

        assert!(rendered.contains("Aspirin     |"));
        assert!(rendered.contains("Amoxicillin |"));

        Ok(())
    }

    #[test]
    fn negative_stock_renders_an_empty_bar_with_the_value() -> TestResult {
        let rendered = render_to_string(&[level("Aspirin", -5), level("Tylenol", 20)])?;

        assert!(rendered.contains("Aspirin |  -5"));

        Ok(())
    }

    #[test]
    fn extreme_stock_levels_render_without_overflow() -> TestResult {
        let rendered = render_to_string(&[level("Everything", i64::MAX), level("One", 1)])?;

        let full_bar = "\u{2588}".repeat(10);
        let minimal_bar = "\u{2588}";

        assert!(rendered.contains(&format!("Everything | {full_bar} {}", i64::MAX)));
        assert!(rendered.contains(&format!("One        | {minimal_bar} 1")));

        Ok(())
    }

    #[test]
    fn empty_snapshot_renders_a_placeholder() -> TestResult {
        let rendered = render_to_string(&[])?;

        assert!(rendered.contains("(no products)"));

        Ok(())
    }
}
