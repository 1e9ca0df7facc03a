//! 多文档打包
//!
//! 在内存中把若干 [`GeneratedDocument`] 打成一个 zip (Deflated)，
//! 条目名即文档的 `file_name`。

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::FileOptions;

use super::GeneratedDocument;
use crate::utils::{AppError, ErrorCode};

fn archive_error(e: impl std::fmt::Display) -> AppError {
    AppError::with_message(ErrorCode::ArchiveFailed, format!("Failed to pack documents: {e}"))
}

/// 打包文档，返回 zip 字节
pub fn pack_documents(documents: &[GeneratedDocument]) -> Result<Vec<u8>, AppError> {
    if documents.is_empty() {
        return Err(AppError::new(ErrorCode::NoDocumentsSelected));
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut zip = ZipWriter::new(&mut buf);
        let options: FileOptions<()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for doc in documents {
            zip.start_file(doc.file_name.as_str(), options)
                .map_err(archive_error)?;
            zip.write_all(&doc.bytes).map_err(archive_error)?;
        }

        zip.finish().map_err(archive_error)?;
    }

    tracing::debug!(count = documents.len(), "Documents packed");
    Ok(buf.into_inner())
}
