//! 模板目录
//!
//! ```text
//! templates/
//! ├── payment/<customer>/<payment>.docx
//! ├── guarantee/<template>/<guarantee>_payment.docx
//! └── warranty/warranty_<doc>.docx|xlsx
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shared::models::{CustomerClass, GuaranteeKind, PaymentKind, WarrantyDocumentType};

use crate::utils::{AppError, ErrorCode};

/// 模板定位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateRef {
    Payment(CustomerClass, PaymentKind),
    Guarantee(CustomerClass, GuaranteeKind),
    Warranty(WarrantyDocumentType),
}

impl TemplateRef {
    /// 相对模板根目录的路径
    pub fn relative_path(&self) -> PathBuf {
        match self {
            Self::Payment(customer, kind) => Path::new("payment")
                .join(customer.as_str())
                .join(format!("{}.docx", kind.as_str())),
            Self::Guarantee(template, kind) => Path::new("guarantee")
                .join(template.as_str())
                .join(format!("{}_payment.docx", kind.as_str())),
            Self::Warranty(doc) => Path::new("warranty").join(doc.template_file_name()),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Warranty(doc) => doc.extension(),
            _ => "docx",
        }
    }
}

/// 模板文件存储 (只读)
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, template: &TemplateRef) -> PathBuf {
        self.root.join(template.relative_path())
    }

    /// 读取模板字节; 文件不存在时返回 TemplateNotFound
    pub async fn load(&self, template: &TemplateRef) -> Result<Vec<u8>, AppError> {
        let path = self.path_of(template);
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                tracing::debug!(path = %path.display(), size = bytes.len(), "Template loaded");
                Ok(bytes)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Template not found");
                Err(AppError::template_not_found(
                    template.relative_path().to_string_lossy(),
                ))
            }
            Err(e) => Err(AppError::with_message(
                ErrorCode::FileSystemError,
                format!("Failed to read template {}: {e}", path.display()),
            )),
        }
    }
}
