use crate::server::{
    error::{upload::UploadError, AppError},
    model::pdf::{UploadPdfParam, PDF_MIME_TYPE},
    service::{pdf::PdfService, storage::PdfStorage},
};
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod download;
mod list;
mod reconcile;
mod upload;

const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\n%%EOF\n";

fn storage() -> (TempDir, PdfStorage) {
    let dir = tempfile::tempdir().unwrap();
    let storage = PdfStorage::new(dir.path().join("uploads"));
    (dir, storage)
}

fn upload_param() -> UploadPdfParam {
    UploadPdfParam {
        original_name: "plan-formation.pdf".to_string(),
        content_type: Some(PDF_MIME_TYPE.to_string()),
        bytes: PDF_BYTES.to_vec(),
        fiche_type: Some("plan".to_string()),
        client_id: None,
        form_data: None,
        created_by: None,
    }
}
