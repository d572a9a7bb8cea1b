//! Fetch-based API Client
//!
//! [`StoreApi`] over `gloo-net`, for the browser.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use storefront::api::endpoints;
use storefront::models::DeleteResponse;
use storefront::{
    ApiError, ApiResult, Category, DeletedProduct, ImageUpload, Product, ProductPage,
    ProductUpdate, StoreApi, UploadResponse,
};

/// Browser client for the storefront backend
#[derive(Debug, Clone)]
pub struct GlooStoreApi {
    base_url: String,
}

impl GlooStoreApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoints::url(&self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(network_error)?;
        decode(response).await
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::InvalidRequest(
        err.as_string()
            .unwrap_or_else(|| "Browser rejected the request body".to_string()),
    )
}

/// Decode a success body or turn the response into a status error
async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let text = response.text().await.map_err(network_error)?;

    if response.ok() {
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(ApiError::from_response(status, &text))
    }
}

/// Multipart body holding the picked image under the upload field
fn upload_form(upload: &ImageUpload) -> ApiResult<web_sys::FormData> {
    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&upload.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;

    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(endpoints::UPLOAD_FIELD, &blob, &upload.file_name)
        .map_err(js_error)?;
    Ok(form)
}

#[async_trait(?Send)]
impl StoreApi for GlooStoreApi {
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
        let response = Request::put(&self.url(&endpoints::product(id)))
            .json(update)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        decode(response).await
    }

    async fn delete_product(&self, id: &str) -> ApiResult<DeletedProduct> {
        let response = Request::delete(&self.url(&endpoints::product(id)))
            .send()
            .await
            .map_err(network_error)?;
        let body: DeleteResponse = decode(response).await?;
        Ok(body.into())
    }

    async fn upload_image(&self, upload: ImageUpload) -> ApiResult<UploadResponse> {
        let form = upload_form(&upload)?;

        let response = Request::post(&self.url(endpoints::UPLOAD))
            .body(form)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        decode(response).await
    }
}
