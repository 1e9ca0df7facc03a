//! 文件下载响应

use axum::body::Body;
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};

use crate::documents::GeneratedDocument;

/// RFC 5987 编码: 非 unreserved 字节转为 `%XX`
fn encode_rfc5987(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// ASCII 回退文件名: 非 ASCII 字符替换为 `_`
fn ascii_fallback(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// `attachment; filename="..."; filename*=UTF-8''...`
pub fn content_disposition(file_name: &str) -> String {
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii_fallback(file_name),
        encode_rfc5987(file_name)
    )
}

impl IntoResponse for GeneratedDocument {
    fn into_response(self) -> Response {
        let content_type = self.content_type();
        let disposition = content_disposition(&self.file_name);

        let mut response = Body::from(self.bytes).into_response();
        let headers = response.headers_mut();
        if let Ok(v) = HeaderValue::from_str(&content_type) {
            headers.insert(header::CONTENT_TYPE, v);
        }
        if let Ok(v) = HeaderValue::from_str(&disposition) {
            headers.insert(header::CONTENT_DISPOSITION, v);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_ascii() {
        assert_eq!(
            content_disposition("warranty_docs.zip"),
            "attachment; filename=\"warranty_docs.zip\"; filename*=UTF-8''warranty_docs.zip"
        );
    }

    #[test]
    fn test_content_disposition_chinese() {
        let value = content_disposition("付款_a.docx");
        assert!(value.starts_with("attachment; filename=\"___a.docx\""));
        assert!(value.ends_with("filename*=UTF-8''%E4%BB%98%E6%AC%BE_a.docx"));
    }

    #[test]
    fn test_document_response_headers() {
        let response =
            GeneratedDocument::new("warranty_doc.xlsx", b"data".to_vec()).into_response();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert!(
            response.headers()[header::CONTENT_DISPOSITION]
                .to_str()
                .unwrap()
                .contains("warranty_doc.xlsx")
        );
    }
}
