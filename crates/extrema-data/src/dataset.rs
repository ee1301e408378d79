//! Loading transaction tables into numeric sample sequences.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use csv::{ReaderBuilder, StringRecord, Trim};
use extrema_config::{DatasetConfig, ValueColumn};
use tracing::{info, warn};

use crate::error::{DataError, Result};

/// One usable table row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    /// Numeric value searched by the min/max strategies.
    pub value: f64,
    /// Category label, if a category column was configured and filled.
    pub category: Option<String>,
}

/// The usable rows of a table, in file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    skipped: usize,
}

// Header positions resolved once per table.
enum ValueSource {
    Single(usize),
    Product { quantity: usize, price: usize },
}

impl ValueSource {
    fn resolve(value: &ValueColumn, headers: &StringRecord) -> Result<Self> {
        match value {
            ValueColumn::Revenue {
                quantity_column,
                price_column,
            } => Ok(ValueSource::Product {
                quantity: column_index(headers, quantity_column)?,
                price: column_index(headers, price_column)?,
            }),
            ValueColumn::Column { name } => Ok(ValueSource::Single(column_index(headers, name)?)),
        }
    }

    fn extract(&self, row: &StringRecord) -> Option<f64> {
        let value = match *self {
            ValueSource::Single(index) => parse_number(row.get(index))?,
            ValueSource::Product { quantity, price } => {
                parse_number(row.get(quantity))? * parse_number(row.get(price))?
            }
        };
        value.is_finite().then_some(value)
    }
}

impl Dataset {
    /// Builds a dataset directly from records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }

    /// Loads a table, choosing the reader by extension.
    ///
    /// `.xlsx` and `.xlsm` files are read as workbooks, anything else as CSV.
    ///
    /// # Errors
    ///
    /// See [`Dataset::from_reader`] and [`Dataset::from_xlsx`].
    pub fn load(path: impl AsRef<Path>, config: &DatasetConfig) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("xlsx") | Some("xlsm") => Self::from_xlsx(path, config),
            _ => Self::from_reader(File::open(path)?, config),
        }
    }

    /// Reads the first worksheet of a workbook.
    ///
    /// The first row of the sheet is the header. Cells are read as text and
    /// go through the same filtering as CSV fields.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Xlsx`] for unreadable workbooks and
    /// [`DataError::EmptyWorkbook`] when there is no sheet or no header row.
    pub fn from_xlsx(path: impl AsRef<Path>, config: &DatasetConfig) -> Result<Self> {
        let mut workbook: Xlsx<_> = open_workbook(path.as_ref())?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(DataError::EmptyWorkbook)??;

        let mut rows = range.rows().map(cells_to_record);
        let headers = rows.next().ok_or(DataError::EmptyWorkbook)?;
        Self::from_rows(&headers, rows.map(Ok), config)
    }

    /// Reads CSV data with a header row.
    ///
    /// Rows whose value cells are empty, non-numeric or non-finite are
    /// skipped and counted. A configured category column that is absent from
    /// the header only disables the category breakdown.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MissingColumn`] if a value column is absent,
    /// [`DataError::NoUsableRows`] if every row was skipped, and
    /// [`DataError::Csv`] for malformed input.
    ///
    /// # Example
    ///
    /// ```
    /// use extrema_config::DatasetConfig;
    /// use extrema_data::Dataset;
    ///
    /// let csv = "\
    /// transaction_qty,unit_price,product_category
    /// 2,3.5,Coffee
    /// 1,,Tea
    /// 3,2.0,Tea
    /// ";
    ///
    /// let dataset = Dataset::from_reader(csv.as_bytes(), &DatasetConfig::default()).unwrap();
    /// assert_eq!(dataset.values(), vec![7.0, 6.0]);
    /// assert_eq!(dataset.skipped(), 1);
    /// ```
    pub fn from_reader<R: Read>(reader: R, config: &DatasetConfig) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        Self::from_rows(
            &headers,
            reader.records().map(|row| row.map_err(DataError::from)),
            config,
        )
    }

    fn from_rows<I>(headers: &StringRecord, rows: I, config: &DatasetConfig) -> Result<Self>
    where
        I: IntoIterator<Item = Result<StringRecord>>,
    {
        let source = ValueSource::resolve(&config.value, headers)?;
        let category_index = match config.category_column.as_deref() {
            Some(name) => {
                let index = headers.iter().position(|h| h == name);
                if index.is_none() {
                    warn!(
                        event = "category_column_missing",
                        column = name,
                        "category breakdown disabled"
                    );
                }
                index
            }
            None => None,
        };

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for row in rows {
            let row = row?;
            let Some(value) = source.extract(&row) else {
                skipped += 1;
                continue;
            };
            let category = category_index
                .and_then(|index| row.get(index))
                .filter(|label| !label.is_empty())
                .map(str::to_string);
            records.push(Record { value, category });
        }

        if skipped > 0 {
            warn!(
                event = "rows_skipped",
                skipped = skipped as u64,
                "rows with missing or non-numeric values were excluded"
            );
        }
        if records.is_empty() {
            return Err(DataError::NoUsableRows { skipped });
        }

        info!(
            event = "dataset_loaded",
            rows = records.len() as u64,
            skipped = skipped as u64,
        );

        Ok(Self { records, skipped })
    }

    /// Returns the usable records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the ordered value sequence.
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }

    /// Returns the number of usable rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no rows are usable.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of rows excluded while loading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns true if any record carries a category label.
    pub fn has_categories(&self) -> bool {
        self.records.iter().any(|r| r.category.is_some())
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))
}

fn cells_to_record(cells: &[Data]) -> StringRecord {
    cells
        .iter()
        .map(|cell| match cell {
            Data::Empty => String::new(),
            other => other.to_string().trim().to_string(),
        })
        .collect()
}

fn parse_number(field: Option<&str>) -> Option<f64> {
    match field {
        Some(s) if !s.is_empty() => s.parse().ok(),
        _ => None,
    }
}
