//! Chapter HTTP Handlers
//!
//! 供管理后台"添加章节"弹窗调用的解析预览接口

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{ParseChapters, ParseChaptersResponse};
use crate::domain::Strategy;
use crate::infrastructure::http::dto::{default_starting_number, ApiResponse, ChapterDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// UTF-8 BOM
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseChaptersRequest {
    pub content: String,
    #[serde(default = "default_starting_number", alias = "startingChapterNumber")]
    pub starting_number: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseChaptersDto {
    pub strategy: Strategy,
    pub chapter_count: usize,
    pub total_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub chapters: Vec<ChapterDto>,
}

impl From<ParseChaptersResponse> for ParseChaptersDto {
    fn from(result: ParseChaptersResponse) -> Self {
        Self {
            strategy: result.strategy,
            chapter_count: result.chapters.len(),
            total_words: result.total_words,
            warning: result.warning,
            chapters: result.chapters.into_iter().map(ChapterDto::from).collect(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 解析粘贴的章节文本（只预览，不保存）
pub async fn parse_chapters(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ParseChaptersRequest>,
) -> Result<Json<ApiResponse<ParseChaptersDto>>, ApiError> {
    let command = ParseChapters {
        text: req.content,
        starting_number: req.starting_number,
    };

    let result = state.parse_chapters_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(result.into())))
}

/// 上传 TXT 文件并解析章节
///
/// multipart 字段：
/// - file: TXT 文件（UTF-8，可带 BOM）
/// - starting_number: 可选，起始章节号
pub async fn upload_chapters(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ParseChaptersDto>>, ApiError> {
    let mut content: Option<String> = None;
    let mut starting_number = default_starting_number();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "starting_number" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read starting_number: {}", e))
                })?;
                starting_number = value.trim().parse().map_err(|_| {
                    ApiError::BadRequest(format!("Invalid starting_number: {}", value.trim()))
                })?;
            }
            "file" => {
                let filename = field.file_name().map(|s| s.to_string());

                // 验证文件类型
                let content_type = field.content_type().unwrap_or("application/octet-stream");
                let is_txt = filename
                    .as_ref()
                    .map(|f| f.to_lowercase().ends_with(".txt"))
                    .unwrap_or(false);
                if !is_txt && !content_type.starts_with("text/") {
                    return Err(ApiError::BadRequest(
                        "Only TXT files are allowed".to_string(),
                    ));
                }

                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;

                if bytes.len() > state.max_upload_size {
                    return Err(ApiError::BadRequest(format!(
                        "File too large. Maximum size is {} MB",
                        state.max_upload_size / 1024 / 1024
                    )));
                }

                content = Some(decode_text(&bytes)?);

                tracing::debug!(filename = ?filename, size = bytes.len(), "Chapter file received");
            }
            _ => {}
        }
    }

    let content = content.ok_or_else(|| ApiError::BadRequest("File is required".to_string()))?;

    let command = ParseChapters {
        text: content,
        starting_number,
    };
    let result = state.parse_chapters_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(result.into())))
}

/// 解码 UTF-8 文本，去掉 BOM
fn decode_text(bytes: &[u8]) -> Result<String, ApiError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8(bytes.to_vec())
        .map_err(|_| ApiError::BadRequest("File must be valid UTF-8 text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("#One\nBody".as_bytes());
        assert_eq!(decode_text(&bytes).unwrap(), "#One\nBody");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert!(decode_text(&[0xFF, 0xFE, 0x00]).is_err());
    }

    #[test]
    fn test_request_accepts_dashboard_field_name() {
        let req: ParseChaptersRequest =
            serde_json::from_str(r#"{"content":"x","startingChapterNumber":21}"#).unwrap();
        assert_eq!(req.starting_number, 21);

        let req: ParseChaptersRequest = serde_json::from_str(r#"{"content":"x"}"#).unwrap();
        assert_eq!(req.starting_number, 1);
    }
}
