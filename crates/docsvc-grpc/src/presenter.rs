//! Conversions between entities and wire messages.

use chrono::SecondsFormat;

use docsvc_core::parameter::{ResponseMetadata, RpcParameters};
use docsvc_entity::DocumentCategory;
use docsvc_entity::document_category::{CreateDocumentCategory, UpdateDocumentCategory};

use crate::pb;

impl From<DocumentCategory> for pb::DocumentCategory {
    fn from(category: DocumentCategory) -> Self {
        Self {
            created_at: category.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            id: category.id,
            name: category.name,
            slug: category.slug,
            size: category.size,
            mime_types: category.mime_types,
            desc: category.description,
        }
    }
}

impl From<ResponseMetadata> for pb::DocumentCategoryMeta {
    fn from(meta: ResponseMetadata) -> Self {
        Self {
            page: clamp(meta.page),
            per_page: clamp(meta.per_page),
            total: clamp(meta.total),
        }
    }
}

impl From<pb::Parameters> for RpcParameters {
    fn from(p: pb::Parameters) -> Self {
        Self {
            search_condition: p.search_condition,
            page: i64::from(p.page),
            per_page: i64::from(p.per_page),
            order_by: p.order_by,
            order_method: p.order_method,
            equal: p.equal,
            not: p.not,
            like: p.like,
            date_range_by: p.date_range_by,
            date_start: p.date_start,
            date_end: p.date_end,
        }
    }
}

impl From<pb::SaveDocumentCategoryRequest> for CreateDocumentCategory {
    fn from(request: pb::SaveDocumentCategoryRequest) -> Self {
        Self {
            id: String::new(),
            slug: request.slug,
            name: request.name,
            description: request.description,
            mime_types: request.mime_types,
            size: request.size,
        }
    }
}

impl From<&pb::UpdateDocumentCategoryRequest> for UpdateDocumentCategory {
    fn from(request: &pb::UpdateDocumentCategoryRequest) -> Self {
        Self {
            slug: request.slug.clone(),
            name: request.name.clone(),
            description: request.description.clone(),
            mime_types: request.mime_types.clone(),
            size: request.size,
        }
    }
}

fn clamp(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
