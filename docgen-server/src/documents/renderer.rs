//! OOXML 模板渲染
//!
//! .docx / .xlsx 都是 zip 包。渲染时逐个读取 `word/` 与 `xl/` 下的 XML 部件，
//! 只改写文本节点 (`<w:t>`, `<t>`) 中的 `{变量名}` 占位符，其余条目原样复制。
//!
//! Word 经常把一个占位符拆到多个 run 里 (`{contract` + `No}`)，
//! 渲染前先把未闭合的占位符与同一段落 (`w:p` / `si`) 内的后续文本节点合并。
//! 合并后仍未闭合的保持原样。

use std::io::{Cursor, Read, Write};

use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::variables::TemplateVariables;
use crate::utils::{AppError, ErrorCode};

/// 占位符名的最大长度，超过则视为普通文本
const MAX_PLACEHOLDER_LEN: usize = 64;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template is not a valid OOXML package: {0}")]
    InvalidPackage(String),

    #[error("Failed to render {part}: {message}")]
    Xml { part: String, message: String },

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        let code = match err {
            RenderError::InvalidPackage(_) => ErrorCode::TemplateInvalid,
            _ => ErrorCode::TemplateRenderFailed,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// 模板渲染器: 模板字节 + 变量 → 输出文档字节
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &[u8], variables: &TemplateVariables)
    -> Result<Vec<u8>, RenderError>;
}

/// 基于 zip + quick-xml 的 OOXML 占位符渲染器
#[derive(Debug, Clone, Copy, Default)]
pub struct OoxmlRenderer;

impl OoxmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for OoxmlRenderer {
    fn render(
        &self,
        template: &[u8],
        variables: &TemplateVariables,
    ) -> Result<Vec<u8>, RenderError> {
        let mut archive = ZipArchive::new(Cursor::new(template))
            .map_err(|e| RenderError::InvalidPackage(e.to_string()))?;

        let mut buf = Cursor::new(Vec::new());
        {
            let mut zip = ZipWriter::new(&mut buf);
            let options =
                SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

            for i in 0..archive.len() {
                let mut entry = archive.by_index(i)?;
                let name = entry.name().to_string();
                if entry.is_dir() {
                    zip.add_directory(name, options)?;
                    continue;
                }

                let mut data = Vec::new();
                entry.read_to_end(&mut data)?;
                let data = if is_text_part(&name) {
                    render_part(&name, &data, variables)?
                } else {
                    data
                };

                zip.start_file(name, options)?;
                zip.write_all(&data)?;
            }

            zip.finish()?;
        }

        Ok(buf.into_inner())
    }
}

/// 需要替换占位符的 XML 部件
fn is_text_part(name: &str) -> bool {
    (name.starts_with("word/") || name.starts_with("xl/")) && name.ends_with(".xml")
}

fn xml_error(part: &str, e: impl std::fmt::Display) -> RenderError {
    RenderError::Xml {
        part: part.to_string(),
        message: e.to_string(),
    }
}

/// 渲染单个 XML 部件
fn render_part(
    part: &str,
    xml: &[u8],
    variables: &TemplateVariables,
) -> Result<Vec<u8>, RenderError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    let mut events: Vec<Event<'static>> = Vec::new();
    // (event index, paragraph, unescaped text) of every text node inside a `t` element
    let mut text_nodes: Vec<(usize, usize, String)> = Vec::new();
    let mut in_text_element = false;
    let mut paragraph = 0usize;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_error(part, e))?;
        match &event {
            Event::Eof => break,
            Event::Start(e) => {
                let name = e.local_name();
                if is_paragraph(name.as_ref()) {
                    paragraph += 1;
                }
                in_text_element = name.as_ref() == b"t";
            }
            Event::End(e) => {
                if is_paragraph(e.local_name().as_ref()) {
                    paragraph += 1;
                }
                in_text_element = false;
            }
            Event::Text(t) if in_text_element => {
                let text = t.unescape().map_err(|e| xml_error(part, e))?;
                text_nodes.push((events.len(), paragraph, text.into_owned()));
            }
            _ => {}
        }
        events.push(event.into_owned());
        buf.clear();
    }

    if text_nodes.is_empty() {
        return Ok(xml.to_vec());
    }

    let mut texts: Vec<String> = text_nodes.iter().map(|(_, _, t)| t.clone()).collect();
    let mut start = 0;
    while start < texts.len() {
        let paragraph = text_nodes[start].1;
        let len = text_nodes[start..]
            .iter()
            .take_while(|(_, p, _)| *p == paragraph)
            .count();
        merge_split_placeholders(&mut texts[start..start + len]);
        start += len;
    }

    let mut replaced = vec![None; events.len()];
    for ((index, _, _), text) in text_nodes.iter().zip(texts) {
        replaced[*index] = Some(substitute(&text, variables));
    }

    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    for (event, text) in events.into_iter().zip(replaced) {
        let result = match text {
            Some(text) => writer.write_event(Event::Text(BytesText::new(&text))),
            None => writer.write_event(event),
        };
        result.map_err(|e| xml_error(part, e))?;
    }
    Ok(writer.into_inner())
}

/// Word 段落 / Excel 共享字符串与内联字符串
fn is_paragraph(local_name: &[u8]) -> bool {
    matches!(local_name, b"p" | b"si" | b"is")
}

fn is_placeholder_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().count() <= MAX_PLACEHOLDER_LEN
        && name.chars().all(is_placeholder_char)
}

/// 文本以未闭合的占位符结尾 (`...{contract`) 时返回 `{` 的位置
fn open_placeholder(text: &str) -> Option<usize> {
    let pos = text.rfind('{')?;
    let tail = &text[pos + 1..];
    (tail.chars().count() < MAX_PLACEHOLDER_LEN && tail.chars().all(is_placeholder_char))
        .then_some(pos)
}

/// `pos` 处的 `{` 后紧跟合法变量名和 `}`
fn closes_at(text: &str, pos: usize) -> bool {
    let tail = &text[pos + 1..];
    tail.find('}').is_some_and(|end| is_placeholder_name(&tail[..end]))
}

/// 把同一段落内被拆开的占位符合并回第一个文本节点，被吸收的节点置空。
/// 合并到末尾仍未闭合时不做任何改动。
fn merge_split_placeholders(texts: &mut [String]) {
    let mut i = 0;
    while i < texts.len() {
        let mut j = i + 1;
        while let Some(open) = open_placeholder(&texts[i]) {
            let mut merged = texts[i].clone();
            let mut k = j;
            while k < texts.len() && open_placeholder(&merged) == Some(open) {
                merged.push_str(&texts[k]);
                k += 1;
            }
            if !closes_at(&merged, open) {
                break;
            }
            texts[i] = merged;
            for absorbed in &mut texts[j..k] {
                absorbed.clear();
            }
            j = k;
        }
        i = j;
    }
}

/// 替换 `{name}`; 未知变量替换为空串，非法占位符保留原文
fn substitute(text: &str, variables: &TemplateVariables) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) if is_placeholder_name(after[..end].trim()) => {
                out.push_str(variables.get(after[..end].trim()).unwrap_or(""));
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
