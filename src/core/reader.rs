use crate::domain::model::RouteRow;
use crate::utils::error::{EtlError, Result};
use csv::{ByteRecord, ReaderBuilder};

pub const MIN_COLUMNS: usize = 7;

/// 解析路線 CSV：第一列為標題，之後每列至少 7 欄
///
/// Columns (1-based): site code, site name, destination lat, destination lng,
/// terminal code, origin lat, origin lng. Values are passed through untrimmed;
/// bytes that are not valid UTF-8 are replaced with U+FFFD instead of failing.
pub fn parse_routes(data: &[u8]) -> Result<Vec<RouteRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let records = reader
        .byte_records()
        .collect::<std::result::Result<Vec<ByteRecord>, csv::Error>>()?;

    if records.len() < 2 {
        return Err(EtlError::MalformedInput {
            row: None,
            reason: format!(
                "CSV file must contain a header and at least one data row, found {} row(s)",
                records.len()
            ),
        });
    }

    let mut rows = Vec::with_capacity(records.len() - 1);
    for (i, record) in records.iter().enumerate().skip(1) {
        // 標題是第 1 列
        let line = i + 1;
        rows.push(parse_record(line, record)?);
    }

    tracing::debug!("Parsed {} route rows", rows.len());
    Ok(rows)
}

fn parse_record(line: usize, record: &ByteRecord) -> Result<RouteRow> {
    if record.len() < MIN_COLUMNS {
        return Err(EtlError::MalformedInput {
            row: Some(line),
            reason: format!(
                "CSV row {} has insufficient columns: expected at least {}, found {}",
                line,
                MIN_COLUMNS,
                record.len()
            ),
        });
    }

    let field = |i: usize| String::from_utf8_lossy(&record[i]).into_owned();

    Ok(RouteRow {
        site_code: field(0),
        site_name: field(1),
        terminal_code: field(4),
        origin: format!("{},{}", field(5), field(6)),
        destination: format!("{},{}", field(2), field(3)),
    })
}
