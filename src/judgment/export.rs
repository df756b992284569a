//! Download artifact for a generated judgment.

use std::io::Cursor;
use std::string::FromUtf8Error;

use actix_web::http::header::{
    Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::HttpResponse;
use base64::engine::general_purpose::URL_SAFE as BASE64;
use base64::Engine;
use thiserror::Error;

/// Filename offered to the browser ("judgment.txt").
pub const DOWNLOAD_FILENAME: &str = "판결문.txt";
/// ASCII fallback for clients that ignore `filename*`.
pub const FALLBACK_FILENAME: &str = "judgment.txt";
pub const MIME_TYPE: &str = "text/plain";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("download payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("download payload is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// In-memory UTF-8 encoding of a judgment, positioned at the start.
#[derive(Debug)]
pub struct ExportBuffer {
    cursor: Cursor<Vec<u8>>,
}

/// Encode `text` as UTF-8 into a fresh buffer.
pub fn export_document(text: &str) -> ExportBuffer {
    ExportBuffer {
        cursor: Cursor::new(text.as_bytes().to_vec()),
    }
}

impl ExportBuffer {
    /// Rebuild a buffer from the value produced by [`ExportBuffer::to_form_value`].
    pub fn from_form_value(value: &str) -> Result<Self, ExportError> {
        let bytes = BASE64.decode(value.trim())?;
        let text = String::from_utf8(bytes)?;
        Ok(export_document(&text))
    }

    /// Base64 form of the bytes, for carrying them through an HTML form.
    ///
    /// Browsers rewrite line breaks in form fields to CRLF and drop a leading
    /// newline inside `<textarea>`; the encoded value survives both.
    pub fn to_form_value(&self) -> String {
        BASE64.encode(self.cursor.get_ref())
    }

    pub fn filename(&self) -> &'static str {
        DOWNLOAD_FILENAME
    }

    pub fn mime_type(&self) -> &'static str {
        MIME_TYPE
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.cursor.into_inner()
    }

    /// `200 OK` attachment response carrying the whole buffer.
    pub fn into_response(self) -> HttpResponse {
        let disposition = ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![
                DispositionParam::Filename(FALLBACK_FILENAME.to_string()),
                DispositionParam::FilenameExt(ExtendedValue {
                    charset: Charset::Ext("UTF-8".to_string()),
                    language_tag: None,
                    value: self.filename().as_bytes().to_vec(),
                }),
            ],
        };

        HttpResponse::Ok()
            .content_type(format!("{}; charset=utf-8", self.mime_type()))
            .insert_header(disposition)
            .body(self.into_bytes())
    }
}
