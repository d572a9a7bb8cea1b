//! Storefront REST API Client
//!
//! Native HTTP client for the storefront backend, built on `reqwest`.

use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::de::DeserializeOwned;

use super::endpoints;
use super::error::{ApiError, ApiResult};
use super::StoreApi;
use crate::draft::ProductUpdate;
use crate::models::{
    Category, DeleteResponse, DeletedProduct, ImageUpload, Product, ProductPage, UploadResponse,
};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:5000")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// `reqwest` implementation of [`StoreApi`]
pub struct HttpStoreApi {
    client: Client,
    config: ClientConfig,
}

impl HttpStoreApi {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        endpoints::url(&self.config.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        decode(response).await
    }
}

/// Decode a success body or turn the response into a status error
async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(ApiError::from)
    } else {
        let text = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status.as_u16(), &text);
        tracing::warn!(status = status.as_u16(), error = %err, "Backend request failed");
        Err(err)
    }
}

#[async_trait(?Send)]
impl StoreApi for HttpStoreApi {
    async fn all_products(&self) -> ApiResult<Vec<Product>> {
        self.get(endpoints::ALL_PRODUCTS).await
    }

    async fn search_products(&self, keyword: Option<&str>) -> ApiResult<ProductPage> {
        self.get(&endpoints::search_products(keyword)).await
    }

    async fn product(&self, id: &str) -> ApiResult<Product> {
        self.get(&endpoints::product(id)).await
    }

    async fn categories(&self) -> ApiResult<Vec<Category>> {
        self.get(endpoints::CATEGORIES).await
    }

    async fn update_product(&self, id: &str, update: &ProductUpdate) -> ApiResult<Product> {
        let url = self.url(&endpoints::product(id));
        tracing::debug!(%url, "PUT");

        let response = self.client.put(&url).json(update).send().await?;
        decode(response).await
    }

    async fn delete_product(&self, id: &str) -> ApiResult<DeletedProduct> {
        let url = self.url(&endpoints::product(id));
        tracing::debug!(%url, "DELETE");

        let response = self.client.delete(&url).send().await?;
        let body: DeleteResponse = decode(response).await?;
        Ok(body.into())
    }

    async fn upload_image(&self, upload: ImageUpload) -> ApiResult<UploadResponse> {
        let url = self.url(endpoints::UPLOAD);
        tracing::debug!(%url, file = %upload.file_name, bytes = upload.bytes.len(), "POST multipart");

        let part = multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)?;
        let form = multipart::Form::new().part(endpoints::UPLOAD_FIELD, part);

        let response = self.client.post(&url).multipart(form).send().await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Multipart, Path, Query},
        http::StatusCode,
        response::{IntoResponse, Response as AxumResponse},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn product_json(id: &str, name: &str) -> Value {
        json!({
            "_id": id,
            "name": name,
            "description": "Noise cancelling",
            "price": 2499,
            "category": { "_id": "c1", "name": "Audio" },
            "quantity": 2,
            "brand": "Sonic",
            "countInStock": 9,
            "image": "/uploads/headphones.png",
            "createdAt": "2024-05-04T12:00:00.000Z"
        })
    }

    async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        let products = match params.get("keyword").map(String::as_str) {
            Some("nothing") => vec![],
            Some(keyword) => vec![product_json("p9", keyword)],
            None => vec![product_json("p1", "Headphones"), product_json("p2", "Speaker")],
        };
        Json(json!({ "products": products, "page": 1, "pages": 1, "hasMore": false }))
    }

    async fn get_product(Path(id): Path<String>) -> AxumResponse {
        if id == "missing" {
            (StatusCode::NOT_FOUND, Json(json!({ "message": "Product not found" }))).into_response()
        } else {
            Json(product_json(&id, "Headphones")).into_response()
        }
    }

    async fn update_product(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
        let mut product = product_json(&id, body["name"].as_str().unwrap_or_default());
        product["countInStock"] = body["countInStock"].clone();
        product["price"] = body["price"].clone();
        Json(product)
    }

    async fn delete_product(Path(id): Path<String>) -> Json<Value> {
        Json(json!({ "data": { "_id": id, "name": "Headphones" } }))
    }

    async fn upload(mut multipart: Multipart) -> AxumResponse {
        while let Ok(Some(field)) = multipart.next_field().await {
            if field.name() != Some("image") {
                continue;
            }
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let bytes = field.bytes().await.unwrap_or_default();

            return Json(json!({
                "message": format!("{} bytes of {}", bytes.len(), content_type),
                "image": format!("/uploads/{}", file_name),
            }))
            .into_response();
        }

        (StatusCode::BAD_REQUEST, Json(json!({ "message": "No image file provided" }))).into_response()
    }

    async fn spawn_backend() -> String {
        let app = Router::new()
            .route(
                "/api/products/allproducts",
                get(|| async {
                    Json(json!([
                        product_json("p1", "Headphones"),
                        product_json("p2", "Speaker"),
                        product_json("p3", "Turntable"),
                    ]))
                }),
            )
            .route("/api/products", get(search))
            .route(
                "/api/products/:id",
                get(get_product).put(update_product).delete(delete_product),
            )
            .route(
                "/api/category/categories",
                get(|| async { Json(json!([{ "_id": "c1", "name": "Audio" }, { "_id": "c2", "name": "Video" }])) }),
            )
            .route("/api/upload", post(upload));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    async fn create_test_client() -> HttpStoreApi {
        let base_url = spawn_backend().await;
        HttpStoreApi::new(ClientConfig {
            base_url,
            request_timeout_ms: 5000,
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.request_timeout_ms, 10_000);
    }

    #[tokio::test]
    async fn test_all_products() {
        let api = create_test_client().await;

        let products = api.all_products().await.unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[2].name, "Turntable");
    }

    #[tokio::test]
    async fn test_search_products() {
        let api = create_test_client().await;

        let page = api.search_products(None).await.unwrap();
        assert_eq!(page.products.len(), 2);

        let page = api.search_products(Some("vinyl player")).await.unwrap();
        assert_eq!(page.products[0].name, "vinyl player");

        let page = api.search_products(Some("nothing")).await.unwrap();
        assert!(page.products.is_empty());
    }

    #[tokio::test]
    async fn test_product_and_not_found() {
        let api = create_test_client().await;

        let product = api.product("p1").await.unwrap();
        assert_eq!(product.category_id(), Some("c1"));
        assert_eq!(product.count_in_stock, 9);

        let err = api.product("missing").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                message: "Product not found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_categories() {
        let api = create_test_client().await;

        let categories = api.categories().await.unwrap();
        assert_eq!(categories, vec![Category::new("c1", "Audio"), Category::new("c2", "Video")]);
    }

    #[tokio::test]
    async fn test_update_sends_backend_field_names() {
        let api = create_test_client().await;

        let mut update = crate::draft::ProductDraft::from_product(&api.product("p1").await.unwrap());
        update.name = "Headphones II".to_string();
        update.stock = 42;
        update.price = 1999.0;

        let updated = api.update_product("p1", &update.to_update()).await.unwrap();
        assert_eq!(updated.name, "Headphones II");
        assert_eq!(updated.count_in_stock, 42);
        assert_eq!(updated.price, 1999.0);
    }

    #[tokio::test]
    async fn test_delete_unwraps_summary() {
        let api = create_test_client().await;

        let deleted = api.delete_product("p2").await.unwrap();
        assert_eq!(deleted.id, "p2");
        assert_eq!(deleted.name, "Headphones");
    }

    #[tokio::test]
    async fn test_upload_image_multipart() {
        let api = create_test_client().await;

        let upload = ImageUpload::new("cover.png", "image/png", vec![0x89, b'P', b'N', b'G']);
        let response = api.upload_image(upload).await.unwrap();

        assert_eq!(response.image, "/uploads/cover.png");
        assert_eq!(response.message, "4 bytes of image/png");
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let api = HttpStoreApi::new(ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_ms: 2000,
        })
        .unwrap();

        let err = api.categories().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_) | ApiError::Timeout));
    }
}
