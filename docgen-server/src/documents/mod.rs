//! 文档生成
//!
//! - [`templates`] - 模板目录与路径规则
//! - [`variables`] - 模板变量构造
//! - [`renderer`] - OOXML 占位符渲染
//! - [`archive`] - 多文档 zip 打包

pub mod archive;
pub mod renderer;
pub mod templates;
pub mod variables;

pub use archive::pack_documents;
pub use renderer::{OoxmlRenderer, RenderError, TemplateRenderer};
pub use templates::{TemplateRef, TemplateStore};
pub use variables::TemplateVariables;

/// 生成完成的单个文档
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// 下载文件名 (含扩展名)
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl GeneratedDocument {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// 根据扩展名推断 Content-Type
    pub fn content_type(&self) -> String {
        mime_guess::from_path(&self.file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_by_extension() {
        let docx = GeneratedDocument::new("a.docx", vec![]);
        assert_eq!(
            docx.content_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        let xlsx = GeneratedDocument::new("b.xlsx", vec![]);
        assert_eq!(
            xlsx.content_type(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        let zip = GeneratedDocument::new("warranty_docs.zip", vec![]);
        assert_eq!(zip.content_type(), "application/zip");
    }
}
