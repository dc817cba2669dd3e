//! Human and machine readable output for datasets and evaluation results.

use std::fmt::Write as _;
use std::io::{self, Write};

use csv::{Terminator, WriterBuilder};

use crate::classify::Rule;
use crate::evaluate::ConfusionMatrix;
use crate::point::{Dataset, Label};

/// Matrix row/column order: index 0 is the positive ("big") class.
const AXIS: [Label; 2] = [Label::Positive, Label::Negative];

/// Writes identical report text to every sink it owns.
pub struct Reporter {
    sinks: Vec<Box<dyn Write>>,
}

impl Reporter {
    pub fn new(sinks: Vec<Box<dyn Write>>) -> Self {
        Reporter { sinks }
    }

    /// Sends `text` to each sink in order, stopping at the first failure.
    pub fn emit(&mut self, text: &str) -> io::Result<()> {
        for sink in &mut self.sinks {
            sink.write_all(text.as_bytes())?;
        }
        Ok(())
    }

    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        let text = format!("{title}\n{}\n", "=".repeat(title.chars().count()));
        self.emit(&text)
    }

    pub fn results(
        &mut self,
        name: &str,
        rule: Rule,
        data: &Dataset,
        cm: &ConfusionMatrix,
    ) -> io::Result<()> {
        let text = format_results(name, rule.space(), data.len(), cm);
        self.emit(&text)
    }

    pub fn read_failure(&mut self, path: &str, err: &dyn std::error::Error) -> io::Result<()> {
        self.emit(&format!("Failed to read {path}: {err}\n"))
    }

    /// Closing legend describing both decision rules and the class encoding.
    pub fn legend(&mut self, plot_dir: &str, results_file: &str) -> io::Result<()> {
        let mut text = String::from("\n=== Classification Rules ===\n");
        let _ = writeln!(text, "Original data: {}", Rule::Original.description());
        let _ = writeln!(text, "Normalized data: {}", Rule::Normalized.description());
        text.push_str("Classes: 0 = Small Car, 1 = Big Car\n");
        text.push_str("True Positive (TP): Correctly identified big cars (class 1)\n");
        let _ = writeln!(text, "Data files for plotting generated in {plot_dir}/");
        let _ = writeln!(text, "Analysis results saved to: {results_file}");
        self.emit(&text)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}

/// Renders the result block for one dataset.
pub fn format_results(name: &str, space: &str, total: usize, cm: &ConfusionMatrix) -> String {
    let m = cm.metrics();
    let mut out = String::new();
    let _ = writeln!(out, "\n=== {name} ({space}) Results ===");
    let _ = writeln!(out, "Total data points: {total}");
    out.push_str("\nConfusion Matrix:\n");
    out.push_str("                 Predicted\n");
    out.push_str("               Big  Small\n");
    let _ = writeln!(
        out,
        "Actual   Big   {:>3}   {:>3}",
        cm.true_positive, cm.false_negative
    );
    let _ = writeln!(
        out,
        "        Small  {:>3}   {:>3}",
        cm.false_positive, cm.true_negative
    );
    out.push_str("\nMetrics:\n");
    let _ = writeln!(out, "Accuracy:  {:.4}", m.accuracy);
    let _ = writeln!(out, "Precision: {:.4}", m.precision);
    let _ = writeln!(out, "Recall:    {:.4}", m.recall);
    let _ = writeln!(out, "F1-Score:  {:.4}", m.f1_score);
    out
}

/// Writes `<row> <col> <count>` lines, row = actual, col = predicted.
pub fn write_matrix_data<W: Write>(mut writer: W, cm: &ConfusionMatrix) -> io::Result<()> {
    for (row, &actual) in AXIS.iter().enumerate() {
        for (col, &predicted) in AXIS.iter().enumerate() {
            writeln!(writer, "{row} {col} {}", cm.get(actual, predicted))?;
        }
    }
    writer.flush()
}

/// Writes points as `x,y,class` with six decimals per coordinate.
pub fn write_dataset<W: Write>(writer: W, data: &Dataset) -> io::Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    for p in data {
        wtr.write_record([
            format!("{:.6}", p.x),
            format!("{:.6}", p.y),
            p.class.as_class().to_string(),
        ])?;
    }
    wtr.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    fn cm() -> ConfusionMatrix {
        ConfusionMatrix {
            true_positive: 12,
            false_positive: 3,
            true_negative: 40,
            false_negative: 5,
        }
    }

    #[test]
    fn matrix_data_layout() {
        let mut out = Vec::new();
        write_matrix_data(&mut out, &cm()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 0 12\n0 1 5\n1 0 3\n1 1 40\n");
    }

    #[test]
    fn dataset_uses_six_decimals() {
        let data: Dataset = [
            Point::new(0.0, 1.0, Label::Negative),
            Point::new(1.0 / 3.0, 0.5, Label::Positive),
        ]
        .into_iter()
        .collect();
        let mut out = Vec::new();
        write_dataset(&mut out, &data).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0.000000,1.000000,0\n0.333333,0.500000,1\n"
        );
    }

    #[test]
    fn results_block_layout() {
        let text = format_results("Group A", "Normalized", 60, &cm());
        let expected = "\n=== Group A (Normalized) Results ===\n\
            Total data points: 60\n\
            \n\
            Confusion Matrix:\n                 Predicted\n               Big  Small\n\
            Actual   Big    12     5\n        Small    3    40\n\
            \n\
            Metrics:\n\
            Accuracy:  0.8667\n\
            Precision: 0.8000\n\
            Recall:    0.7059\n\
            F1-Score:  0.7500\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn every_sink_gets_the_same_text() {
        let a = SharedBuf::default();
        let b = SharedBuf::default();
        let mut reporter = Reporter::new(vec![Box::new(a.clone()), Box::new(b.clone())]);
        reporter.banner("Confusion Matrix Analysis").unwrap();
        let data = Dataset::default();
        reporter
            .results("Group B", Rule::Normalized, &data, &ConfusionMatrix::default())
            .unwrap();
        reporter.legend("plots", "plots/results.txt").unwrap();
        reporter.flush().unwrap();

        assert_eq!(a.text(), b.text());
        assert!(a.text().starts_with("Confusion Matrix Analysis\n=========================\n"));
        assert!(a.text().contains("Total data points: 0"));
        assert!(a.text().contains("Accuracy:  0.0000"));
        assert!(a.text().contains("-2.22*x + 107643"));
    }
}
