//! Constituency dataset import from CSV.

use serde::Serialize;
use sqlx::PgPool;

use crate::db::uk_data;
use crate::models::uk_data::UkDataRecord;

/// Result of an import run.
#[derive(Debug, Default, Serialize)]
pub struct ImportResult {
    pub total: usize,
    pub imported: usize,
    pub errors: Vec<ImportError>,
}

/// A rejected CSV row. `line` is 1-based and counts the header.
#[derive(Debug, Serialize)]
pub struct ImportError {
    pub line: usize,
    pub constituency: Option<String>,
    pub message: String,
}

/// Parse the dataset, separating usable records from rejected rows.
///
/// Blank numeric cells become missing values; a row without a constituency
/// name or region, or with a non-numeric figure, is rejected.
pub fn parse_csv(data: &[u8]) -> Result<(Vec<UkDataRecord>, Vec<ImportError>), csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data);
    // Fail early on a missing or unreadable header row.
    reader.headers()?;

    let mut records = Vec::new();
    let mut errors = Vec::new();

    for (i, result) in reader.deserialize::<UkDataRecord>().enumerate() {
        let line = i + 2;
        match result {
            Ok(record) if record.constituency_name.is_empty() => errors.push(ImportError {
                line,
                constituency: None,
                message: "Missing constituency_name".to_string(),
            }),
            Ok(record) if record.region.is_empty() => errors.push(ImportError {
                line,
                constituency: Some(record.constituency_name),
                message: "Missing region".to_string(),
            }),
            Ok(record) => records.push(record),
            Err(e) => errors.push(ImportError {
                line,
                constituency: None,
                message: format!("CSV parse error: {e}"),
            }),
        }
    }

    Ok((records, errors))
}

/// Upsert every valid row; database failures on individual rows are
/// reported alongside parse failures.
pub async fn import(pool: &PgPool, data: &[u8]) -> Result<ImportResult, csv::Error> {
    let (records, mut errors) = parse_csv(data)?;
    let total = records.len() + errors.len();
    let mut imported = 0;

    for record in &records {
        match uk_data::upsert(pool, record).await {
            Ok(()) => imported += 1,
            Err(e) => {
                tracing::warn!(
                    constituency = %record.constituency_name,
                    error = %e,
                    "Failed to import constituency"
                );
                errors.push(ImportError {
                    line: 0,
                    constituency: Some(record.constituency_name.clone()),
                    message: e.to_string(),
                });
            }
        }
    }

    tracing::info!(total, imported, rejected = errors.len(), "Dataset import finished");
    Ok(ImportResult {
        total,
        imported,
        errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "constituency_name,region,c11Female,c11FulltimeStudent,c11Retired,c11HouseOwned,TotalVote19,LabVote19,ConVote19,LDVote19\n";

    #[test]
    fn parses_rows_with_blank_cells() {
        let csv = format!(
            "{HEADER}Aberavon,Wales,50.8,4.1,16.2,62.9,31598,17008,6518,1072\n\
             Nowhere,North East,,,,,,,,\n"
        );
        let (records, errors) = parse_csv(csv.as_bytes()).unwrap();
        assert!(errors.is_empty());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].constituency_name, "Aberavon");
        assert_eq!(records[0].c11_female, Some(50.8));
        assert_eq!(records[0].lab_vote19, Some(17008.0));
        assert_eq!(records[1].total_vote19, None);
    }

    #[test]
    fn rejects_bad_rows_with_line_numbers() {
        let csv = format!(
            "{HEADER}Aberavon,Wales,abc,4.1,16.2,62.9,31598,17008,6518,1072\n\
             ,Wales,50,4,16,62,100,50,40,10\n\
             Bath,,50,4,16,62,100,50,40,10\n\
             York Central,Yorkshire,51,10,15,55,100,50,40,10\n"
        );
        let (records, errors) = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].constituency_name, "York Central");
        let lines: Vec<usize> = errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![2, 3, 4]);
        assert_eq!(errors[2].constituency.as_deref(), Some("Bath"));
    }
}
