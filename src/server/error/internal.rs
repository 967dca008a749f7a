use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored PDF row carries a fiche type outside the known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("PDF {pdf_id} has unknown fiche type '{value}'")]
    UnknownFicheType {
        /// ID of the offending PDF row
        pdf_id: i32,
        /// The stored value
        value: String,
    },

    /// A stored PDF row has a negative size.
    #[error("PDF {pdf_id} has invalid size {size}")]
    InvalidPdfSize {
        /// ID of the offending PDF row
        pdf_id: i32,
        /// The stored value
        size: i64,
    },
}
