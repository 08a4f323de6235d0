//! Integration tests for the document service HTTP and gRPC surfaces and
//! its repositories.

mod category_repository_test;
mod document_category_test;
mod document_repository_test;
mod grpc_test;
mod helpers;
mod ping_test;
mod seeder_test;
