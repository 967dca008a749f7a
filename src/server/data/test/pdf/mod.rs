use crate::{
    model::pdf::FicheType,
    server::{
        data::pdf::PdfRepository,
        error::AppError,
        model::pdf::{CreatePdfParam, PdfFilter},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_filenames;
mod get_filtered;
