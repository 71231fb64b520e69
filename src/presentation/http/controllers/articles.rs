// src/presentation/http/controllers/articles.rs
use crate::application::{
    ApplicationResult,
    commands::articles::{
        CreateArticleCommand, CreateArticlesCommand, DeleteArticleCommand, UpdateArticleCommand,
    },
    dto::{ArticleDto, CreatedArticleDto},
    error::ApplicationError,
    queries::articles::{GetArticleByIdQuery, GetArticlesByIdsQuery, ListArticlesByUserQuery},
};
use crate::domain::article::{ArticleId, UserId};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, QueryParams};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Comma separated article ids, e.g. `1,2,3`.
    #[serde(default)]
    pub ids: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateArticleRequest {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// `POST /articles` accepts one object or an array of them.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CreateArticlesPayload {
    Many(Vec<CreateArticleRequest>),
    One(CreateArticleRequest),
}

/// Mirrors the shape of the request: object in, object out.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CreateArticlesResponse {
    One(CreatedArticleDto),
    Many(Vec<CreatedArticleDto>),
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateArticleRequest {
    pub title: String,
    pub body: String,
}

impl From<CreateArticleRequest> for CreateArticleCommand {
    fn from(request: CreateArticleRequest) -> Self {
        Self {
            user_id: request.user_id,
            title: request.title,
            body: request.body,
        }
    }
}

/// Split an `ids` query value; blank segments are skipped.
pub fn parse_id_list(raw: &str) -> ApplicationResult<Vec<ArticleId>> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| ArticleId::parse(segment).map_err(ApplicationError::from))
        .collect()
}

fn parse_article_id(raw: &str) -> HttpResult<ArticleId> {
    ArticleId::parse(raw).map_err(ApplicationError::from).into_http()
}

#[utoipa::path(
    get,
    path = "/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "All articles, or the requested ids in order.", body = [ArticleDto]),
        (status = 404, description = "One of the requested ids does not exist.", body = ErrorResponse),
        (status = 500, description = "Storage or aggregation failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let queries = &state.services.article_queries;

    let articles = match params.ids.as_deref() {
        None => queries.list_articles().into_http()?,
        Some(raw) => {
            let ids = parse_id_list(raw).into_http()?;
            queries
                .get_articles_by_ids(GetArticlesByIdsQuery { ids })
                .await
                .into_http()?
        }
    };

    Ok(Json(articles))
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = CreateArticlesPayload,
    responses(
        (status = 201, description = "Assigned ids, one per submitted article.", body = CreateArticlesResponse),
        (status = 500, description = "Storage or aggregation failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_articles(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateArticlesPayload>,
) -> HttpResult<(StatusCode, Json<CreateArticlesResponse>)> {
    let commands = &state.services.article_commands;

    let response = match payload {
        CreateArticlesPayload::One(request) => CreateArticlesResponse::One(
            commands.create_article(request.into()).into_http()?,
        ),
        CreateArticlesPayload::Many(requests) => {
            let command = CreateArticlesCommand {
                articles: requests.into_iter().map(Into::into).collect(),
            };
            CreateArticlesResponse::Many(commands.create_articles(command).await.into_http()?)
        }
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/articles/{article_id}",
    params(("article_id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The requested article.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let id = parse_article_id(&raw_id)?;
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/articles/{article_id}",
    params(("article_id" = i64, Path, description = "Article identifier")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "The stored article after replacement.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let id = parse_article_id(&raw_id)?;
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        body: payload.body,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/articles/{article_id}",
    params(("article_id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article removed.", body = StatusResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    let id = parse_article_id(&raw_id)?;
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}

#[utoipa::path(
    get,
    path = "/articles/by-user/{user_id}",
    params(("user_id" = i64, Path, description = "Owning user identifier")),
    responses(
        (status = 200, description = "Articles owned by the user; empty when none.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_articles_by_user(
    Extension(state): Extension<HttpState>,
    Path(raw_user_id): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let user_id = UserId::parse(&raw_user_id)
        .map_err(ApplicationError::from)
        .into_http()?;

    state
        .services
        .article_queries
        .list_articles_by_user(ListArticlesByUserQuery { user_id })
        .into_http()
        .map(Json)
}
