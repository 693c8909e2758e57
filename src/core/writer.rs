use crate::domain::model::RouteReport;
use crate::utils::error::{EtlError, Result};
use csv::Writer;

pub const OUTPUT_HEADER: [&str; 5] = [
    "SITE_CODE",
    "SITE_NAME",
    "TERMINAL_CODE",
    "DISTANCE_KM",
    "DURATION",
];

/// Renders the report as CSV, one record per input row in input order.
pub fn render_report(report: &RouteReport) -> Result<Vec<u8>> {
    if !report.is_aligned() {
        return Err(EtlError::ProcessingError {
            message: format!(
                "Result columns are not aligned: {} site codes, {} site names, {} terminal codes, {} distances, {} durations",
                report.site_codes.len(),
                report.site_names.len(),
                report.terminal_codes.len(),
                report.distances.len(),
                report.durations.len()
            ),
        });
    }

    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(OUTPUT_HEADER)?;

    let entries = report
        .site_codes
        .iter()
        .zip(&report.site_names)
        .zip(&report.terminal_codes)
        .zip(&report.distances)
        .zip(&report.durations);

    for ((((code, name), terminal), distance), duration) in entries {
        let distance = format!("{:.2}", distance);
        writer.write_record([
            code.as_str(),
            name.as_str(),
            terminal.as_str(),
            distance.as_str(),
            duration.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LookupResult, RouteRow};

    fn row(code: &str, name: &str) -> RouteRow {
        RouteRow {
            site_code: code.to_string(),
            site_name: name.to_string(),
            terminal_code: format!("T-{}", code),
            origin: "10.0,20.0".to_string(),
            destination: "11.0,21.0".to_string(),
        }
    }

    #[test]
    fn test_render_report_formats_rows() {
        let mut report = RouteReport::default();
        report.record(&row("S1", "Site One"), LookupResult::new(12.345, "18 mins"));
        report.record_failure(&row("S2", "Site Two"));
        report.record(&row("S3", "Site Three"), LookupResult::new(7.0, "1 hour 2 mins"));

        let output = String::from_utf8(render_report(&report).unwrap()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "SITE_CODE,SITE_NAME,TERMINAL_CODE,DISTANCE_KM,DURATION",
                "S1,Site One,T-S1,12.35,18 mins",
                "S2,Site Two,T-S2,0.00,N/A",
                "S3,Site Three,T-S3,7.00,1 hour 2 mins",
            ]
        );
    }

    #[test]
    fn test_render_empty_report_writes_header_only() {
        let output = render_report(&RouteReport::default()).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "SITE_CODE,SITE_NAME,TERMINAL_CODE,DISTANCE_KM,DURATION\n"
        );
    }

    #[test]
    fn test_render_report_quotes_fields_with_commas() {
        let mut report = RouteReport::default();
        report.record(&row("S1", "Depot, North"), LookupResult::new(1.5, "3 mins"));

        let output = String::from_utf8(render_report(&report).unwrap()).unwrap();

        assert!(output.contains("S1,\"Depot, North\",T-S1,1.50,3 mins"));
    }

    #[test]
    fn test_render_misaligned_report_fails() {
        let mut report = RouteReport::default();
        report.record(&row("S1", "Site One"), LookupResult::new(1.0, "1 min"));
        report.distances.push(2.0);

        assert!(matches!(
            render_report(&report),
            Err(EtlError::ProcessingError { .. })
        ));
    }
}
