//! PDF document service.
//!
//! Owns the pairing between an artifact in the upload directory and its metadata
//! row. Uploads validate everything before writing, write the file, then insert the
//! row; a failed insert removes the file again. Deletes remove the file first and the
//! row second, tolerating an already missing file.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{client::ClientRepository, pdf::PdfRepository, user::UserRepository},
    error::{upload::UploadError, AppError},
    model::pdf::{
        CreatePdfParam, Pdf, PdfFilter, PdfWithRelations, ReconcileReport, UploadPdfParam,
        PDF_MIME_TYPE,
    },
    service::storage::PdfStorage,
};

pub struct PdfService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a PdfStorage,
}

impl<'a> PdfService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a PdfStorage) -> Self {
        Self { db, storage }
    }

    /// Validates, stores, and indexes an uploaded PDF.
    ///
    /// Nothing is written when validation fails. When the metadata insert fails the
    /// written file is removed before the error is returned.
    ///
    /// # Returns
    /// - `Ok(Pdf)` - The stored record
    /// - `Err(AppError::UploadErr)` - Rejected upload, nothing stored
    /// - `Err(AppError::IoErr)` - Writing the file failed
    /// - `Err(AppError::DbErr)` - Inserting the record failed, file removed
    pub async fn upload(&self, param: UploadPdfParam) -> Result<Pdf, AppError> {
        let upload = param.validate()?;

        if let Some(client_id) = upload.client_id {
            if !ClientRepository::new(self.db).exists(client_id).await? {
                return Err(UploadError::ClientNotFound(client_id).into());
            }
        }

        let size = upload.bytes.len() as u64;
        let (filename, path) = self
            .storage
            .store(&upload.original_name, &upload.bytes)
            .await?;

        let result = PdfRepository::new(self.db)
            .create(CreatePdfParam {
                filename: filename.clone(),
                original_name: upload.original_name,
                path: path.to_string_lossy().into_owned(),
                size,
                mimetype: PDF_MIME_TYPE.to_string(),
                fiche_type: upload.fiche_type,
                client_id: upload.client_id,
                form_data: upload.form_data,
                created_by: upload.created_by,
            })
            .await;

        match result {
            Ok(pdf) => {
                tracing::info!(
                    "Stored PDF {} as {} ({} bytes, {})",
                    pdf.id,
                    pdf.filename,
                    pdf.size,
                    pdf.fiche_type
                );

                Ok(pdf)
            }
            Err(err) => {
                match self.storage.remove(&filename).await {
                    Ok(_) => tracing::warn!(
                        "Removed {} after failed metadata insert: {}",
                        filename,
                        err
                    ),
                    Err(remove_err) => tracing::error!(
                        "Failed to remove {} after failed metadata insert: {}",
                        filename,
                        remove_err
                    ),
                }

                Err(err)
            }
        }
    }

    /// Lists PDF records matching the filter, newest first, with client and creator
    /// resolved. Dangling references resolve to `None`.
    pub async fn list(&self, filter: PdfFilter) -> Result<Vec<PdfWithRelations>, AppError> {
        let pdfs = PdfRepository::new(self.db).get_filtered(filter).await?;

        let client_ids: Vec<i32> = pdfs
            .iter()
            .filter_map(|p| p.client_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let creator_ids: Vec<i32> = pdfs
            .iter()
            .filter_map(|p| p.created_by)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let clients: HashMap<i32, _> = ClientRepository::new(self.db)
            .find_by_ids(client_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let creators: HashMap<i32, _> = UserRepository::new(self.db)
            .find_by_ids(creator_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(pdfs
            .into_iter()
            .map(|pdf| PdfWithRelations {
                client: pdf.client_id.and_then(|id| clients.get(&id).cloned()),
                creator: pdf.created_by.and_then(|id| creators.get(&id).cloned()),
                pdf,
            })
            .collect())
    }

    /// Loads a record and its file content.
    ///
    /// # Returns
    /// - `Ok((Pdf, bytes))` - Record and file content
    /// - `Err(AppError::NotFound("PDF not found"))` - No record with that ID
    /// - `Err(AppError::NotFound("File not found on server"))` - Record exists, file
    ///   is missing
    pub async fn download(&self, id: i32) -> Result<(Pdf, Vec<u8>), AppError> {
        let pdf = self.find(id).await?;

        let Some(bytes) = self.storage.read(&pdf.filename).await? else {
            tracing::warn!("PDF {} has no file at {}", pdf.id, pdf.filename);
            return Err(AppError::NotFound("File not found on server".to_string()));
        };

        Ok((pdf, bytes))
    }

    /// Removes the file, then the record.
    ///
    /// # Returns
    /// - `Ok(())` - Record deleted; the file is gone whether or not it existed
    /// - `Err(AppError::NotFound)` - No record with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let pdf = self.find(id).await?;

        if !self.storage.remove(&pdf.filename).await? {
            tracing::warn!("PDF {} file {} was already missing", pdf.id, pdf.filename);
        }

        PdfRepository::new(self.db).delete(pdf.id).await?;

        tracing::info!("Deleted PDF {} ({})", pdf.id, pdf.filename);

        Ok(())
    }

    /// Brings the upload directory and the PDF table back in line.
    ///
    /// Upload artifacts no record references are removed; files whose names this
    /// store never generates are left alone. Records whose file is missing are
    /// reported and left in place.
    pub async fn reconcile(&self) -> Result<ReconcileReport, AppError> {
        let records = PdfRepository::new(self.db).get_all_filenames().await?;
        let files: HashSet<String> = self.storage.list().await?.into_iter().collect();
        let referenced: HashSet<&str> = records.iter().map(|(_, f)| f.as_str()).collect();

        let mut report = ReconcileReport::default();

        let mut orphans: Vec<&String> = Vec::new();
        for file in &files {
            if referenced.contains(file.as_str()) {
                continue;
            }
            if PdfStorage::is_generated_name(file) {
                orphans.push(file);
            } else {
                tracing::warn!("Leaving unrecognized file {} in the upload directory", file);
            }
        }
        orphans.sort();

        for orphan in orphans {
            if self.storage.remove(orphan).await? {
                tracing::info!("Removed orphaned upload {}", orphan);
                report.removed_orphans.push(orphan.clone());
            }
        }

        for (id, filename) in &records {
            if !files.contains(filename) {
                tracing::warn!("PDF {} references missing file {}", id, filename);
                report.missing_artifacts.push(*id);
            }
        }

        Ok(report)
    }

    async fn find(&self, id: i32) -> Result<Pdf, AppError> {
        PdfRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("PDF not found".to_string()))
    }
}
