//! Metadata of an object headed for (or read back from) a filestore.

use std::path::Path;

use bytes::Bytes;
use chrono::Utc;
use uuid::Uuid;

use docsvc_core::error::{AppError, ErrorKind};
use docsvc_core::result::AppResult;

/// Layout of the date segment of generated paths.
pub const DATE_PATH_LAYOUT: &str = "%Y/%m/%d";

/// How [`put_object`](crate::Filestore::put_object) transfers the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PutMethod {
    /// Upload through the driver's client.
    Direct,
    /// HTTP `PUT` against a pre-signed URL.
    #[default]
    SignedUrl,
}

/// An object with everything needed to place it in storage.
#[derive(Debug, Clone, Default)]
pub struct ObjectMetadata {
    pub id: String,
    pub token: String,
    /// Generated stored name, without extension.
    pub name: String,
    pub name_prefix: String,
    pub name_suffix: String,
    /// Name of the object as uploaded.
    pub original_name: String,
    pub content_type: String,
    /// Category slug, used as the first path segment.
    pub slug: String,
    /// `YYYY/MM/DD` segment.
    pub date: String,
    /// Extension with its leading dot, or empty.
    pub extension: String,
    pub size: i64,
    pub content: Bytes,
    pub include_slug: bool,
    pub include_date: bool,
    /// Overrides the generated path when non-empty.
    pub custom_path: String,
    pub put_method: PutMethod,
    pub put_signed_url: String,
}

impl ObjectMetadata {
    /// Build metadata for raw content, sniffing its type.
    pub fn from_bytes(content: impl Into<Bytes>, slug: impl Into<String>) -> Self {
        let content = content.into();
        let id = Uuid::new_v4().to_string();

        let (content_type, extension) = match infer::get(&content) {
            Some(kind) => (kind.mime_type().to_string(), format!(".{}", kind.extension())),
            None => ("application/octet-stream".to_string(), String::new()),
        };

        Self {
            name: id.clone(),
            original_name: format!("{id}{extension}"),
            id,
            content_type,
            slug: slug.into(),
            date: today(),
            extension,
            size: content.len() as i64,
            content,
            ..Default::default()
        }
    }

    /// Read a file and build its metadata.
    ///
    /// The original name is the file name; the type falls back to the
    /// extension when the content cannot be sniffed.
    pub async fn from_file(path: impl AsRef<Path>, slug: impl Into<String>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {}", path.display()))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read file {}", path.display()),
                    e,
                )
            }
        })?;

        let mut object = Self::from_bytes(content, slug);
        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            object.original_name = file_name.to_string();
        }
        if object.extension.is_empty() {
            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                object.extension = format!(".{ext}");
                object.content_type = mime_guess::from_path(path)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_string();
            }
        }
        Ok(object)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    pub fn with_name_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.name_suffix = suffix.into();
        self
    }

    /// Put the slug in front of generated paths.
    pub fn include_slug(mut self) -> Self {
        self.include_slug = true;
        self
    }

    /// Put the date segment in generated paths, filling it with today when empty.
    pub fn include_date(mut self) -> Self {
        self.include_date = true;
        if self.date.is_empty() {
            self.date = today();
        }
        self
    }

    pub fn with_custom_path(mut self, path: impl Into<String>) -> Self {
        self.custom_path = path.into();
        self
    }

    pub fn with_put_method(mut self, method: PutMethod) -> Self {
        self.put_method = method;
        self
    }

    pub fn with_put_signed_url(mut self, url: impl Into<String>) -> Self {
        self.put_signed_url = url.into();
        self
    }

    /// `{prefix}{name}{suffix}{extension}`.
    pub fn filename(&self) -> String {
        format!(
            "{}{}{}{}",
            self.name_prefix, self.name, self.name_suffix, self.extension
        )
    }

    /// Storage key of the object, before any driver prefix.
    pub fn filepath(&self) -> String {
        if !self.custom_path.is_empty() {
            return self.custom_path.clone();
        }
        self.generated_path()
    }

    /// Generated path of a copy of this object carrying `name_suffix`.
    pub fn copy_filepath(&self, name_suffix: &str) -> String {
        let mut copy = self.clone();
        copy.name_suffix = name_suffix.to_string();
        copy.generated_path()
    }

    fn generated_path(&self) -> String {
        let mut path = String::new();
        if self.include_slug && !self.slug.is_empty() {
            path.push_str(&self.slug);
            path.push('/');
        }
        if self.include_date && !self.date.is_empty() {
            path.push_str(&self.date);
            path.push('/');
        }
        path.push_str(&self.filename());
        path
    }
}

fn today() -> String {
    Utc::now().format(DATE_PATH_LAYOUT).to_string()
}
