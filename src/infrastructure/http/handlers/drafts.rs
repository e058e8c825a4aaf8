//! Draft HTTP Handlers
//!
//! 待审阅章节批次：创建、查看、修改、删除章节、丢弃、导出

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    BulkSubmission, CreateDraftBatch, DiscardDraftBatch, DraftBatchSummary, DraftBatchView,
    EditDraftChapter, ExportDraftSubmission, GetDraftBatch, ListDraftBatches, RemoveDraftChapter,
};
use crate::domain::chapter::ChapterSubmission;
use crate::domain::Strategy;
use crate::infrastructure::http::dto::{default_starting_number, ApiResponse, ChapterDto, Empty};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDraftRequest {
    #[serde(default)]
    pub book_id: Option<String>,
    pub content: String,
    #[serde(default = "default_starting_number", alias = "startingChapterNumber")]
    pub starting_number: u32,
}

#[derive(Debug, Deserialize)]
pub struct DraftIdRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDraftChapterRequest {
    pub id: Uuid,
    #[serde(alias = "number")]
    pub chapter_number: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveDraftChapterRequest {
    pub id: Uuid,
    #[serde(alias = "number")]
    pub chapter_number: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBatchDto {
    pub id: Uuid,
    pub book_id: Option<String>,
    pub starting_number: u32,
    pub strategy: Strategy,
    pub chapter_count: usize,
    pub total_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub chapters: Vec<ChapterDto>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<DraftBatchView> for DraftBatchDto {
    fn from(view: DraftBatchView) -> Self {
        Self {
            id: view.id,
            book_id: view.book_id,
            starting_number: view.starting_number,
            strategy: view.strategy,
            chapter_count: view.chapters.len(),
            total_words: view.total_words,
            warning: view.warning,
            chapters: view.chapters.into_iter().map(ChapterDto::from).collect(),
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSummaryDto {
    pub id: Uuid,
    pub book_id: Option<String>,
    pub chapter_count: usize,
    pub total_words: usize,
    pub updated_at: String,
}

impl From<DraftBatchSummary> for DraftSummaryDto {
    fn from(s: DraftBatchSummary) -> Self {
        Self {
            id: s.id,
            book_id: s.book_id,
            chapter_count: s.chapter_count,
            total_words: s.total_words,
            updated_at: s.updated_at,
        }
    }
}

/// 批量提交请求体，与后端 bulk 接口字段一致
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSubmissionDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<String>,
    pub chapters: Vec<ChapterSubmission>,
}

impl From<BulkSubmission> for BulkSubmissionDto {
    fn from(s: BulkSubmission) -> Self {
        Self {
            book_id: s.book_id,
            chapters: s.chapters,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn create_draft(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateDraftRequest>,
) -> Result<Json<ApiResponse<DraftBatchDto>>, ApiError> {
    let command = CreateDraftBatch {
        book_id: req.book_id,
        text: req.content,
        starting_number: req.starting_number,
    };

    let view = state.create_draft_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(view.into())))
}

pub async fn get_draft(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DraftIdRequest>,
) -> Result<Json<ApiResponse<DraftBatchDto>>, ApiError> {
    let view = state
        .get_draft_handler
        .handle(GetDraftBatch { batch_id: req.id })
        .await?;

    Ok(Json(ApiResponse::success(view.into())))
}

pub async fn list_drafts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<DraftSummaryDto>>>, ApiError> {
    let summaries = state.list_drafts_handler.handle(ListDraftBatches).await?;

    Ok(Json(ApiResponse::success(
        summaries.into_iter().map(DraftSummaryDto::from).collect(),
    )))
}

pub async fn edit_draft_chapter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EditDraftChapterRequest>,
) -> Result<Json<ApiResponse<DraftBatchDto>>, ApiError> {
    let command = EditDraftChapter {
        batch_id: req.id,
        number: req.chapter_number,
        title: req.title,
        content: req.content,
    };

    let view = state.edit_draft_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(view.into())))
}

pub async fn remove_draft_chapter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RemoveDraftChapterRequest>,
) -> Result<Json<ApiResponse<DraftBatchDto>>, ApiError> {
    let command = RemoveDraftChapter {
        batch_id: req.id,
        number: req.chapter_number,
    };

    let view = state.remove_draft_chapter_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(view.into())))
}

pub async fn discard_draft(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DraftIdRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state
        .discard_draft_handler
        .handle(DiscardDraftBatch { batch_id: req.id })
        .await?;

    Ok(Json(ApiResponse::ok()))
}

pub async fn export_draft(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DraftIdRequest>,
) -> Result<Json<ApiResponse<BulkSubmissionDto>>, ApiError> {
    let submission = state
        .export_draft_handler
        .handle(ExportDraftSubmission { batch_id: req.id })
        .await?;

    Ok(Json(ApiResponse::success(submission.into())))
}
