//! `DocumentCategoryService` implementation.

use tonic::{Request, Response, Status};
use tracing::debug;
use validator::Validate;

use docsvc_core::error::AppError;
use docsvc_core::parameter::RpcParameters;
use docsvc_database::repositories::DocumentCategoryRepository;
use docsvc_entity::document_category::{CreateDocumentCategory, UpdateDocumentCategory};

use crate::pb;
use crate::pb::document_category_service_server::DocumentCategoryService;
use crate::status::{CATEGORY_NOT_FOUND, INTERNAL_SERVER_ERROR, to_status};

/// Serves document categories over gRPC.
#[derive(Debug, Clone)]
pub struct DocumentCategoryHandler {
    categories: DocumentCategoryRepository,
}

impl DocumentCategoryHandler {
    pub fn new(categories: DocumentCategoryRepository) -> Self {
        Self { categories }
    }
}

fn status(err: AppError) -> Status {
    to_status(err, CATEGORY_NOT_FOUND)
}

#[tonic::async_trait]
impl DocumentCategoryService for DocumentCategoryHandler {
    async fn find_document_category(
        &self,
        request: Request<pb::FindDocumentCategoryRequest>,
    ) -> Result<Response<pb::DocumentCategory>, Status> {
        let id = request.into_inner().id;
        let category = self.categories.find(&id).await.map_err(status)?;
        Ok(Response::new(category.into()))
    }

    async fn find_document_category_by_slug(
        &self,
        request: Request<pb::FindDocumentCategoryBySlugRequest>,
    ) -> Result<Response<pb::DocumentCategory>, Status> {
        let slug = request.into_inner().slug;
        let category = self.categories.find_by_slug(&slug).await.map_err(status)?;
        Ok(Response::new(category.into()))
    }

    async fn get_document_categories(
        &self,
        request: Request<pb::GetDocumentCategoriesRequest>,
    ) -> Result<Response<pb::DocumentCategories>, Status> {
        let parameters = request.into_inner().parameters.unwrap_or_default();
        let params = RpcParameters::from(parameters).to_sql_query_parameters();

        let (categories, meta) = self.categories.get_list(&params).await.map_err(status)?;
        debug!(returned = categories.len(), total = meta.total, "Listed document categories");

        Ok(Response::new(pb::DocumentCategories {
            data: categories.into_iter().map(Into::into).collect(),
            meta: Some(meta.into()),
        }))
    }

    async fn save_document_category(
        &self,
        request: Request<pb::SaveDocumentCategoryRequest>,
    ) -> Result<Response<pb::DocumentCategory>, Status> {
        let payload = CreateDocumentCategory::from(request.into_inner());
        payload.validate().map_err(|e| status(e.into()))?;

        let category = self.categories.save(payload).await.map_err(status)?;
        Ok(Response::new(category.into()))
    }

    async fn update_document_category(
        &self,
        request: Request<pb::UpdateDocumentCategoryRequest>,
    ) -> Result<Response<pb::DocumentCategory>, Status> {
        let request = request.into_inner();
        let existing = self.categories.find(&request.id).await.map_err(status)?;

        let changes = UpdateDocumentCategory::from(&request);
        changes.validate().map_err(|e| status(e.into()))?;

        let category = self
            .categories
            .update(&existing.id, &changes)
            .await
            .map_err(status)?;
        Ok(Response::new(category.into()))
    }

    async fn delete_document_category(
        &self,
        request: Request<pb::DeleteDocumentCategoryRequest>,
    ) -> Result<Response<pb::DocumentCategoryDeleted>, Status> {
        let id = request.into_inner().id;
        let existing = self.categories.find(&id).await.map_err(status)?;

        let deleted = self.categories.delete(&existing.id).await.map_err(status)?;
        let deleted_at = deleted
            .deleted_at
            .ok_or_else(|| Status::internal(INTERNAL_SERVER_ERROR))?;

        Ok(Response::new(pb::DocumentCategoryDeleted {
            deleted_at: deleted_at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        }))
    }
}
