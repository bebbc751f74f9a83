//! CSV writer for generated tables.

use crate::error::CSVPopulatorError;
use csv::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use synth_core::{Dataset, TableKind, TableRow};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Result of writing one table of a dataset.
#[derive(Debug, Clone)]
pub struct TableOutput {
    pub table: TableKind,
    pub path: PathBuf,
    pub metrics: PopulateMetrics,
}

/// Writes generated tables as comma-separated files with a header row.
#[derive(Debug, Clone, Default)]
pub struct CSVPopulator;

impl CSVPopulator {
    pub fn new() -> Self {
        Self
    }

    /// Write the header and `rows` to any writer, returning the number of
    /// data rows written.
    pub fn write_rows<T: TableRow, W: Write>(
        &self,
        rows: &[T],
        writer: W,
    ) -> Result<u64, CSVPopulatorError> {
        let mut writer = Writer::from_writer(writer);

        writer.write_record(T::column_names())?;

        let mut written = 0u64;
        for row in rows {
            writer.write_record(row.to_record())?;
            written += 1;

            if written % 10000 == 0 {
                debug!("Written {} {} rows", written, T::KIND);
            }
        }

        writer.flush()?;
        Ok(written)
    }

    /// Write one table to `output_path`, replacing any existing file.
    pub fn populate<T: TableRow, P: AsRef<Path>>(
        &self,
        rows: &[T],
        output_path: P,
    ) -> Result<PopulateMetrics, CSVPopulatorError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!(
            "Writing CSV file '{}' with {} rows for table '{}'",
            output_path.display(),
            rows.len(),
            T::KIND
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let rows_written = self.write_rows(rows, buf_writer)?;

        let metrics = PopulateMetrics {
            rows_written,
            file_size_bytes: std::fs::metadata(output_path)?.len(),
            total_duration: start_time.elapsed(),
        };

        info!(
            "CSV write complete: {} rows, {} bytes in {:?} ({:.2} rows/sec, {:.0} bytes/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second(),
            metrics.bytes_per_second()
        );

        Ok(metrics)
    }

    /// Write the selected tables of `dataset` into `output_dir`, one file per
    /// table, creating the directory when it does not exist.
    pub fn populate_dataset<P: AsRef<Path>>(
        &self,
        dataset: &Dataset,
        output_dir: P,
        tables: &[TableKind],
    ) -> Result<Vec<TableOutput>, CSVPopulatorError> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir).map_err(|source| CSVPopulatorError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut outputs = Vec::with_capacity(tables.len());
        for &table in tables {
            let path = output_dir.join(table.file_name());
            let metrics = match table {
                TableKind::Traffic => self.populate(&dataset.traffic, &path)?,
                TableKind::Orders => self.populate(&dataset.orders, &path)?,
                TableKind::Customers => self.populate(&dataset.customers, &path)?,
                TableKind::AbTests => self.populate(&dataset.ab_tests, &path)?,
            };
            outputs.push(TableOutput {
                table,
                path,
                metrics,
            });
        }

        Ok(outputs)
    }
}
