use std::io;
use std::sync::{Arc, Mutex};

use scatter_rs::ChartError;
use scatter_rs::core::parse_dataset;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer lock").clone();
        String::from_utf8(bytes).expect("utf-8 log output")
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer lock")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn parse_with_captured_warnings(body: &str) -> (usize, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let rows = tracing::subscriber::with_default(subscriber, || {
        parse_dataset(body).expect("parsed dataset").len()
    });
    (rows, logs.contents())
}

#[test]
fn non_numeric_field_is_reported_per_field_and_in_summary() {
    let (rows, output) =
        parse_with_captured_warnings("abbr,poverty,healthcare\nA,10,5\nB,n/a,10\nC,20,12\n");
    assert_eq!(rows, 3);

    let field_warnings: Vec<&str> = output
        .lines()
        .filter(|line| line.contains("did not coerce to a finite number"))
        .collect();
    assert_eq!(field_warnings.len(), 1, "{output}");
    let warning = field_warnings[0];
    assert!(warning.contains("WARN"), "{warning}");
    assert!(warning.contains("row_index=1"), "{warning}");
    assert!(warning.contains("abbreviation=B"), "{warning}");
    assert!(warning.contains("field=\"poverty\""), "{warning}");
    assert!(warning.contains("raw=\"n/a\""), "{warning}");

    let summary: Vec<&str> = output
        .lines()
        .filter(|line| line.contains("rows with non-finite numeric fields"))
        .collect();
    assert_eq!(summary.len(), 1, "{output}");
    assert!(summary[0].contains("non_finite_rows=1"), "{}", summary[0]);
    assert!(summary[0].contains("rows=3"), "{}", summary[0]);
}

#[test]
fn finite_dataset_logs_no_warnings() {
    let (rows, output) = parse_with_captured_warnings("abbr,poverty,healthcare\nA,10,5\n");
    assert_eq!(rows, 1);
    assert!(output.is_empty(), "{output}");
}

#[test]
fn padded_header_names_do_not_match_required_columns() {
    let err = parse_dataset("abbr, poverty,healthcare\nA,10,5\n").expect_err("padded header");
    assert!(matches!(err, ChartError::InvalidData(_)), "{err}");
}
