use std::io::Read;

use tracing::{debug, trace};

use crate::api::SurfaceConfig;
use crate::core::{Dataset, RawRecord, drop_leading_non_data_rows, keep_rows_with_any_data};
use crate::error::{DatasetStage, SurfaceResult};

/// Reads a headed CSV stream into column-name-keyed records.
///
/// Cells are trimmed. Short rows are accepted and simply lack the trailing
/// columns, which the row parser reports as `MissingColumn`.
pub fn read_raw_records<R: Read>(reader: R) -> SurfaceResult<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(
            headers
                .iter()
                .zip(record.iter())
                .map(|(column, value)| (column.to_owned(), value.to_owned()))
                .collect::<RawRecord>(),
        );
    }

    trace!(
        columns = headers.len(),
        records = records.len(),
        "read raw csv records"
    );
    Ok(records)
}

/// Runs the ingest pipeline: drop the preamble, parse every remaining row,
/// keep rows with at least one rate.
///
/// Row numbers in parse errors are CSV line numbers (the header is line 1).
pub fn load_dataset<R: Read>(reader: R, config: &SurfaceConfig) -> SurfaceResult<Dataset> {
    config.validate()?;
    let records = read_raw_records(reader)?;
    let read = records.len();

    let dropped = config.leading_rows_to_drop;
    let records = drop_leading_non_data_rows(records, dropped);
    let first_row = dropped + 2;
    let observations = config.row_parser().parse_all(&records, first_row)?;
    let parsed = observations.len();

    let observations = keep_rows_with_any_data(observations);
    debug!(
        read,
        parsed,
        kept = observations.len(),
        "loaded yield curve dataset"
    );
    Dataset::new(observations, DatasetStage::Filtering)
}
