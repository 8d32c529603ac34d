//! Row add/delete for the data bands
//!
//! New rows are cloned from the band's last row with text and styling
//! cleared, so they inherit band membership and land just before the band
//! boundary (the notice row for the top band, the table end for the bottom
//! band). Column alignment needs no copying here: widths live on the
//! document, not on cells.

use thiserror::Error;

use super::core::{BandKind, TableDoc};

/// Errors from row mutation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowMutationError {
    /// Only the data bands accept row mutation
    #[error("rows cannot be added to or removed from this part of the table")]
    FixedBand,

    /// The band has no template row to clone
    #[error("the band has no rows to clone")]
    EmptyBand,

    /// Refuse to remove a band's only remaining row
    #[error("at least one row must remain in this part of the table")]
    LastRow,
}

impl TableDoc {
    /// Append a cleared clone of the band's last row, returning the index
    /// the new row was inserted at.
    pub fn add_row(&mut self, band: BandKind) -> Result<usize, RowMutationError> {
        if !band.is_mutable() {
            return Err(RowMutationError::FixedBand);
        }
        let last = *self
            .rows_in_band(band)
            .last()
            .ok_or(RowMutationError::EmptyBand)?;

        let mut row = self.rows[last].clone();
        for cell in &mut row.cells {
            cell.reset();
        }

        let index = last + 1;
        self.rows.insert(index, row);
        Ok(index)
    }

    /// Remove the band's last row, returning its former index. Refused when
    /// it is the only row left in the band.
    pub fn delete_row(&mut self, band: BandKind) -> Result<usize, RowMutationError> {
        if !band.is_mutable() {
            return Err(RowMutationError::FixedBand);
        }
        let indices = self.rows_in_band(band);
        if indices.len() <= 1 {
            return Err(RowMutationError::LastRow);
        }

        let Some(&last) = indices.last() else {
            return Err(RowMutationError::EmptyBand);
        };
        self.rows.remove(last);
        Ok(last)
    }
}
