//! Steel Section Catalog
//!
//! Read-only reference table of candidate sections for beam and girder
//! selection. The table is normally exported from the AISC Shapes Database
//! with a few derived columns (`plastic`, `Lp`, `Lr`) added.
//!
//! ## CSV Format
//!
//! The header row drives the column lookup (case-insensitive):
//!
//! | Column | Meaning | Required |
//! |--------|---------|----------|
//! | `EDI_Std_Nomenclature` or `AISC_Manual_Label` | identifier | yes |
//! | `W` | weight (plf) | yes |
//! | `d` | depth (in) | yes |
//! | `tw` | web thickness (in) | yes |
//! | `Sx`, `plastic`, `Lp`, `Lr`, `J`, `rts`, `ho` | flexural/LTB properties | no |
//!
//! All numeric cells arrive as text. Empty cells, dashes and non-numeric
//! text parse as missing. Rows missing the identifier, `W`, `d` or `tw` are
//! skipped with a warning and counted in [`SectionCatalog::skipped_rows`].
//!
//! ## Example
//!
//! ```rust
//! use frame_core::catalog::SectionCatalog;
//!
//! let csv = "EDI_Std_Nomenclature,W,d,tw,Sx,plastic,Lp,Lr,J,rts,ho\n\
//!            W8X10,10,7.89,0.17,7.81,399,2.98,8.62,0.0426,0.983,7.69\n";
//! let catalog = SectionCatalog::from_csv_reader(csv.as_bytes(), "inline").unwrap();
//!
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.lookup("w8x10").unwrap().weight_plf, 10.0);
//! ```

mod builtin;
mod section;

pub use builtin::builtin_catalog;
pub use section::SectionRecord;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use crate::errors::{FrameError, FrameResult};

/// Ordered, read-only collection of [`SectionRecord`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionCatalog {
    records: Vec<SectionRecord>,

    /// Number of data rows excluded while loading
    pub skipped_rows: usize,

    /// Where the catalog came from (file path, "builtin-common", ...)
    pub source: Option<String>,
}

impl SectionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records already in memory.
    pub fn from_records(records: impl IntoIterator<Item = SectionRecord>) -> Self {
        SectionCatalog {
            records: records.into_iter().collect(),
            skipped_rows: 0,
            source: None,
        }
    }

    /// Load a catalog from a CSV file on disk.
    pub fn load_from_csv(path: impl AsRef<Path>) -> FrameResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let file = File::open(path).map_err(|e| {
            FrameError::file_error("open", &display, format!("Failed to open CSV: {}", e))
        })?;
        Self::from_csv_reader(BufReader::new(file), &display)
    }

    /// Parse a catalog from any buffered CSV source.
    ///
    /// `source` is only used for error messages and [`SectionCatalog::source`].
    pub fn from_csv_reader<R: BufRead>(reader: R, source: &str) -> FrameResult<Self> {
        let mut lines = reader.lines();

        let header_line = lines
            .next()
            .ok_or_else(|| FrameError::file_error("read", source, "CSV file is empty"))?
            .map_err(|e| {
                FrameError::file_error("read", source, format!("Failed to read header: {}", e))
            })?;

        let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();
        let col_index = |name: &str| -> Option<usize> {
            headers.iter().position(|h| h.eq_ignore_ascii_case(name))
        };

        let id_idx = col_index("EDI_Std_Nomenclature")
            .or_else(|| col_index("AISC_Manual_Label"))
            .ok_or_else(|| FrameError::missing_field("EDI_Std_Nomenclature"))?;
        let w_idx = col_index("W").ok_or_else(|| FrameError::missing_field("W"))?;
        let d_idx = col_index("d").ok_or_else(|| FrameError::missing_field("d"))?;
        let tw_idx = col_index("tw").ok_or_else(|| FrameError::missing_field("tw"))?;

        let sx_idx = col_index("Sx");
        let plastic_idx = col_index("plastic");
        let lp_idx = col_index("Lp");
        let lr_idx = col_index("Lr");
        let j_idx = col_index("J");
        let rts_idx = col_index("rts");
        let ho_idx = col_index("ho");

        let mut catalog = SectionCatalog::new();
        catalog.source = Some(source.to_string());
        let mut line_num = 1;

        for line_result in lines {
            line_num += 1;
            let line = line_result.map_err(|e| {
                FrameError::file_error(
                    "read",
                    source,
                    format!("Failed to read line {}: {}", line_num, e),
                )
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();

            let get_opt_f64 = |idx: Option<usize>| -> Option<f64> {
                idx.and_then(|i| fields.get(i)).and_then(|v| parse_optional_f64(v))
            };

            let id = fields.get(id_idx).map(|s| s.trim()).unwrap_or("");
            let required = (
                get_opt_f64(Some(w_idx)),
                get_opt_f64(Some(d_idx)),
                get_opt_f64(Some(tw_idx)),
            );

            let (weight_plf, depth_in, tw_in) = match required {
                (Some(w), Some(d), Some(tw)) if !id.is_empty() => (w, d, tw),
                _ => {
                    warn!(
                        "{}: skipping line {} ('{}'): missing identifier, W, d or tw",
                        source, line_num, id
                    );
                    catalog.skipped_rows += 1;
                    continue;
                }
            };

            catalog.insert(SectionRecord {
                id: id.to_string(),
                weight_plf,
                depth_in,
                tw_in,
                sx_in3: get_opt_f64(sx_idx),
                plastic: get_opt_f64(plastic_idx),
                lp_ft: get_opt_f64(lp_idx),
                lr_ft: get_opt_f64(lr_idx),
                j_in4: get_opt_f64(j_idx),
                rts_in: get_opt_f64(rts_idx),
                ho_in: get_opt_f64(ho_idx),
            });
        }

        debug!(
            "{}: loaded {} sections ({} rows skipped)",
            source,
            catalog.len(),
            catalog.skipped_rows
        );

        Ok(catalog)
    }

    /// Append a record
    pub fn insert(&mut self, record: SectionRecord) {
        self.records.push(record);
    }

    /// All records in catalog order
    pub fn records(&self) -> &[SectionRecord] {
        &self.records
    }

    /// Look up a section by identifier (case-insensitive).
    pub fn lookup(&self, id: &str) -> FrameResult<&SectionRecord> {
        self.records
            .iter()
            .find(|r| r.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| FrameError::section_not_found(id))
    }

    /// Get the number of sections in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse an optional f64 from a CSV field
///
/// Returns None for empty strings, dashes, or invalid numbers.
fn parse_optional_f64(s: &str) -> Option<f64> {
    let trimmed = s.trim().trim_matches('"');
    if trimmed.is_empty() || trimmed == "-" || trimmed == "–" || trimmed == "—" {
        return None;
    }
    f64::from_str(trimmed).ok().filter(|v| v.is_finite())
}
