//! In-memory [`StoreApi`] double for page tests

use async_trait::async_trait;
use std::cell::RefCell;

use super::{ApiError, ApiResult, StoreApi};
use crate::draft::ProductUpdate;
use crate::models::{
    Category, DeletedProduct, ImageUpload, Product, ProductPage, UploadResponse,
};

/// Backend calls seen by the double
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AllProducts,
    Search(Option<String>),
    Product(String),
    Categories,
    Update(String, ProductUpdate),
    Delete(String),
    Upload(String),
}

/// Canned backend with per-endpoint failure switches
#[derive(Default)]
pub struct MockStore {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub fail_fetch: Option<ApiError>,
    pub fail_categories: Option<ApiError>,
    pub fail_update: Option<ApiError>,
    pub fail_delete: Option<ApiError>,
    pub fail_upload: Option<ApiError>,
    pub(crate) log: RefCell<Vec<Call>>,
}

impl MockStore {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }

    fn fail(err: &Option<ApiError>) -> ApiResult<()> {
        match err {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn find(&self, id: &str) -> ApiResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::from_response(404, r#"{"message":"Product not found"}"#))
    }
}

#[async_trait(?Send)]
impl StoreApi for MockStore {
    async fn all_products(&self) -> ApiResult<Vec<Product>> {
        self.record(Call::AllProducts);
        Self::fail(&self.fail_fetch)?;
        Ok(self.products.clone())
    }

    async fn search_products(&self, keyword: Option<&str>) -> ApiResult<ProductPage> {
        self.record(Call::Search(keyword.map(str::to_string)));
        Self::fail(&self.fail_fetch)?;

        let needle = keyword.unwrap_or_default().to_lowercase();
        let products: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        Ok(ProductPage {
            products,
            page: 1,
            pages: 1,
            has_more: false,
        })
    }

    async fn product(&self, id: &str) -> ApiResult<Product> {
        self.record(Call::Product(id.to_string()));
        Self::fail(&self.fail_fetch)?;
        self.find(id).cloned()
    }

    async fn categories(&self) -> ApiResult<Vec<Category>> {
        self.record(Call::Categories);
        Self::fail(&self.fail_categories)?;
        Ok(self.categories.clone())
    }

    async fn update_product(&self, id: &str, update: &ProductUpdate) -> ApiResult<Product> {
        self.record(Call::Update(id.to_string(), update.clone()));
        Self::fail(&self.fail_update)?;

        let mut product = self.find(id)?.clone();
        product.name = update.name.clone();
        product.price = update.price;
        product.count_in_stock = update.count_in_stock;
        Ok(product)
    }

    async fn delete_product(&self, id: &str) -> ApiResult<DeletedProduct> {
        self.record(Call::Delete(id.to_string()));
        Self::fail(&self.fail_delete)?;

        let product = self.find(id)?;
        Ok(DeletedProduct {
            id: product.id.clone(),
            name: product.name.clone(),
        })
    }

    async fn upload_image(&self, upload: ImageUpload) -> ApiResult<UploadResponse> {
        self.record(Call::Upload(upload.file_name.clone()));
        Self::fail(&self.fail_upload)?;

        Ok(UploadResponse {
            message: "Image uploaded successfully".to_string(),
            image: format!("/uploads/{}", upload.file_name),
        })
    }
}
