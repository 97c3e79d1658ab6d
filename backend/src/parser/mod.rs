//! Listing sheet parser with encoding and delimiter auto-detection.
//!
//! Spreadsheet exports of the sheet arrive in whatever encoding the exporting
//! machine used, so the raw bytes are sniffed and decoded before the `csv`
//! reader sees them. Rows are deserialized straight into [`SourceRow`].

use std::collections::HashSet;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::models::SourceRow;

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed rows, in file order
    pub rows: Vec<SourceRow>,
    /// Source line each row starts on, parallel to `rows`
    pub lines: Vec<u64>,
    /// Detected encoding
    pub encoding: String,
    /// Detected delimiter
    pub delimiter: char,
    /// Column headers, trimmed
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet.
///
/// Valid UTF-8 is taken as UTF-8 without asking chardet, which tends to guess
/// a single-byte charset for short samples with a few accented letters.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" | "utf-8-sig" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding.
///
/// A leading byte order mark is dropped. Unknown encodings fall back to
/// lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let decoded = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => String::from_utf8_lossy(bytes).to_string(),
        },
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.to_string()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        other => match encoding_rs::Encoding::for_label(other.as_bytes()) {
            Some(enc) => enc.decode(bytes).0.to_string(),
            None => String::from_utf8_lossy(bytes).to_string(),
        },
    };

    decoded.trim_start_matches('\u{feff}').to_string()
}

/// Detect the delimiter by counting occurrences in the first line.
///
/// Defaults to a comma when the header has no separator at all.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse decoded CSV content with an explicit delimiter.
///
/// Blank content parses to zero rows. When two headers name the same column
/// (an alias next to the canonical spelling, or a repeated header) only the
/// first one is read.
pub fn parse_str(content: &str, delimiter: char, encoding: String) -> CsvResult<ParseResult> {
    if content.trim().is_empty() {
        return Ok(ParseResult {
            rows: Vec::new(),
            lines: Vec::new(),
            encoding,
            delimiter,
            headers: Vec::new(),
        });
    }

    let delimiter_byte = u8::try_from(delimiter).map_err(|_| CsvError::Parse {
        line: 1,
        message: format!("delimiter '{}' is not a single byte", delimiter),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let header_record = reader.headers().map_err(CsvError::from_csv)?.clone();
    let headers: Vec<String> = header_record.iter().map(|h| h.to_string()).collect();

    if !headers.iter().any(|h| h == SourceRow::TITLE_COLUMN) {
        return Err(CsvError::MissingColumn(SourceRow::TITLE_COLUMN.to_string()));
    }

    let columns = first_columns(&headers);
    let kept_headers: csv::StringRecord = columns.iter().map(|&i| headers[i].as_str()).collect();

    let mut rows = Vec::new();
    let mut lines = Vec::new();
    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record).map_err(CsvError::from_csv)? {
        let line = record
            .position()
            .map(|pos| record_line(content.as_bytes(), pos))
            .unwrap_or(0);
        let aligned = align_record(&record, &columns, line);
        let row: SourceRow = aligned
            .deserialize(Some(&kept_headers))
            .map_err(CsvError::from_csv)?;
        lines.push(line);
        rows.push(row);
    }

    Ok(ParseResult {
        rows,
        lines,
        encoding,
        delimiter,
        headers,
    })
}

/// Indexes of the headers to read: the first one for each canonical column.
fn first_columns(headers: &[String]) -> Vec<usize> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for (i, header) in headers.iter().enumerate() {
        if seen.insert(SourceRow::canonical_column(header)) {
            columns.push(i);
        }
    }
    columns
}

/// Line a record starts on.
///
/// The reader stamps a record with the position where the previous one
/// ended, so blank lines skipped in between are counted here.
fn record_line(content: &[u8], pos: &csv::Position) -> u64 {
    let start = (pos.byte() as usize).min(content.len());
    let skipped = content[start..]
        .iter()
        .take_while(|&&b| b == b'\n' || b == b'\r')
        .filter(|&&b| b == b'\n')
        .count();
    pos.line() + skipped as u64
}

/// Pick `columns` out of a record, padding short rows with empty cells,
/// and stamp it with its source line.
fn align_record(record: &csv::StringRecord, columns: &[usize], line: u64) -> csv::StringRecord {
    let mut aligned: csv::StringRecord =
        columns.iter().map(|&i| record.get(i).unwrap_or("")).collect();
    let mut pos = record.position().cloned().unwrap_or_else(csv::Position::new);
    pos.set_line(line);
    aligned.set_position(Some(pos));
    aligned
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8]) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = detect_delimiter(&content);

    parse_str(&content, delimiter, encoding)
}

/// Parse a CSV file with auto-detection of encoding and delimiter.
///
/// # Example
/// ```ignore
/// let result = parse_csv_file_auto("database/listings.csv")?;
/// println!("Encoding: {}, Delimiter: '{}'", result.encoding, result.delimiter);
/// println!("Rows: {}", result.rows.len());
/// ```
pub fn parse_csv_file_auto<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes)
}
