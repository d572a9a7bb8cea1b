//! Product edit page
//!
//! State machine behind the Update / Delete Product page:
//!
//! ```text
//!   Loading ──fetch ok──▶ Ready ──submit──▶ Submitting ──done──▶ Ready
//!      │                   │ ▲                                (navigates on success)
//!   fetch err         upload / delete
//!      ▼
//!   Failed
//! ```
//!
//! Each mutation comes in two shapes: synchronous `begin_*` / `finish_*`
//! steps for reactive front ends that keep the page in a signal across the
//! await, and an async method that runs both steps against a [`StoreApi`].

use thiserror::Error;

use crate::api::{ApiResult, StoreApi};
use crate::draft::{DraftError, DraftField, ProductDraft, ProductUpdate};
use crate::models::{Category, DeletedProduct, ImageUpload, Product, UploadResponse};
use crate::routes::Route;
use crate::view::Notice;

pub const UPDATE_FAILED: &str = "Product update failed. Try again.";
pub const UPLOAD_SUCCEEDED: &str = "Image uploaded successfully";
pub const UPLOAD_FAILED: &str = "Image upload failed. Please try again.";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this product?";
pub const DELETE_FAILED: &str = "Delete failed. Try again.";
pub const LOAD_FAILED: &str = "Product could not be loaded";

/// Lifecycle of the edit page
#[derive(Debug, Clone, PartialEq)]
pub enum EditState {
    /// Initial state; no draft exists yet
    Loading,
    /// Draft populated from the fetched product
    Ready { draft: ProductDraft },
    /// Update request in flight
    Submitting { draft: ProductDraft },
    /// Product fetch failed
    Failed { message: String },
}

/// Where the page goes after a mutation completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Stay,
    Navigate(Route),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EditError {
    #[error("Product is not ready for editing")]
    NotReady,

    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// Update / Delete Product page
#[derive(Debug)]
pub struct ProductEditPage {
    product_id: String,
    state: EditState,
    categories: Vec<Category>,
    notices: Vec<Notice>,
}

impl ProductEditPage {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            state: EditState::Loading,
            categories: Vec::new(),
            notices: Vec::new(),
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Options for the category selector
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The draft, once the product has been fetched
    pub fn draft(&self) -> Option<&ProductDraft> {
        match &self.state {
            EditState::Ready { draft } | EditState::Submitting { draft } => Some(draft),
            _ => None,
        }
    }

    fn draft_mut(&mut self) -> Option<&mut ProductDraft> {
        match &mut self.state {
            EditState::Ready { draft } | EditState::Submitting { draft } => Some(draft),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, EditState::Ready { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, EditState::Submitting { .. })
    }

    /// Notices emitted since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Draft of a page that accepts interaction
    pub fn ensure_ready(&self) -> Result<&ProductDraft, EditError> {
        match &self.state {
            EditState::Ready { draft } => Ok(draft),
            _ => Err(EditError::NotReady),
        }
    }

    // ------------------------------------------------------------------
    // Load
    // ------------------------------------------------------------------

    /// Apply the product and category query results
    ///
    /// A failed category fetch leaves the selector empty and does not block
    /// the page. A product whose id differs from the page's belongs to an
    /// earlier navigation and is dropped.
    pub fn finish_load(&mut self, product: ApiResult<Product>, categories: ApiResult<Vec<Category>>) {
        if let Ok(product) = &product {
            if product.id != self.product_id {
                tracing::warn!(
                    expected = %self.product_id,
                    received = %product.id,
                    "Ignoring product fetched for another page"
                );
                return;
            }
        }

        match categories {
            Ok(categories) => self.categories = categories,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch categories");
                self.categories.clear();
            }
        }

        self.state = match product {
            Ok(product) => {
                tracing::debug!(id = %product.id, "Product loaded for editing");
                EditState::Ready {
                    draft: ProductDraft::from_product(&product),
                }
            }
            Err(err) => {
                tracing::warn!(id = %self.product_id, error = %err, "Failed to fetch product");
                EditState::Failed {
                    message: LOAD_FAILED.to_string(),
                }
            }
        };
    }

    /// Fetch the product and the category list
    pub async fn load<A: StoreApi + ?Sized>(&mut self, api: &A) {
        let product = api.product(&self.product_id).await;
        let categories = api.categories().await;
        self.finish_load(product, categories);
    }

    // ------------------------------------------------------------------
    // Edit
    // ------------------------------------------------------------------

    /// Apply input text to a draft field
    pub fn edit(&mut self, field: DraftField, value: &str) -> Result<(), EditError> {
        match &mut self.state {
            EditState::Ready { draft } => Ok(draft.set(field, value)?),
            _ => Err(EditError::NotReady),
        }
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Ready → Submitting; returns the request body to send
    pub fn begin_submit(&mut self) -> Result<ProductUpdate, EditError> {
        let draft = self.ensure_ready()?.clone();
        let update = draft.to_update();
        self.state = EditState::Submitting { draft };
        Ok(update)
    }

    /// Submitting → Ready with the update result
    ///
    /// The draft keeps its pre-submit values either way.
    pub fn finish_submit(&mut self, result: ApiResult<Product>) -> EditOutcome {
        self.state = match std::mem::replace(&mut self.state, EditState::Loading) {
            EditState::Submitting { draft } => EditState::Ready { draft },
            other => other,
        };

        match result {
            Ok(product) => {
                tracing::info!(id = %product.id, name = %product.name, "Product updated");
                self.notices.push(Notice::success(format!(
                    "Product successfully updated: {}",
                    product.name
                )));
                EditOutcome::Navigate(Route::AllProducts)
            }
            Err(err) => {
                tracing::warn!(id = %self.product_id, error = %err, "Product update failed");
                self.notices.push(Notice::error(UPDATE_FAILED));
                EditOutcome::Stay
            }
        }
    }

    pub async fn submit<A: StoreApi + ?Sized>(&mut self, api: &A) -> Result<EditOutcome, EditError> {
        let update = self.begin_submit()?;
        let result = api.update_product(&self.product_id, &update).await;
        Ok(self.finish_submit(result))
    }

    // ------------------------------------------------------------------
    // Image upload
    // ------------------------------------------------------------------

    /// Patch only the image path on success
    ///
    /// Without a draft there is nothing to patch; the result is dropped.
    pub fn finish_upload(&mut self, result: ApiResult<UploadResponse>) {
        match result {
            Ok(response) => {
                let Some(draft) = self.draft_mut() else {
                    tracing::warn!(image = %response.image, "Upload finished with no draft to patch");
                    return;
                };
                tracing::info!(image = %response.image, "Image uploaded");
                draft.apply_image(response.image);
                self.notices.push(Notice::success(UPLOAD_SUCCEEDED));
            }
            Err(err) => {
                tracing::warn!(error = %err, "Image upload failed");
                self.notices.push(Notice::error(UPLOAD_FAILED));
            }
        }
    }

    pub async fn upload_image<A: StoreApi + ?Sized>(
        &mut self,
        api: &A,
        upload: ImageUpload,
    ) -> Result<(), EditError> {
        self.ensure_ready()?;
        let result = api.upload_image(upload).await;
        self.finish_upload(result);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    pub fn finish_delete(&mut self, result: ApiResult<DeletedProduct>) -> EditOutcome {
        match result {
            Ok(deleted) => {
                let name = if deleted.name.is_empty() {
                    self.draft().map(|d| d.name.clone()).unwrap_or_default()
                } else {
                    deleted.name
                };
                tracing::info!(id = %self.product_id, %name, "Product deleted");
                self.notices.push(Notice::success(format!("\"{}\" is deleted", name)));
                EditOutcome::Navigate(Route::AllProducts)
            }
            Err(err) => {
                tracing::warn!(id = %self.product_id, error = %err, "Product delete failed");
                self.notices.push(Notice::error(DELETE_FAILED));
                EditOutcome::Stay
            }
        }
    }

    /// Delete after asking `confirm`; a declined prompt sends nothing
    pub async fn delete<A, F>(&mut self, api: &A, confirm: F) -> Result<EditOutcome, EditError>
    where
        A: StoreApi + ?Sized,
        F: FnOnce(&str) -> bool,
    {
        self.ensure_ready()?;
        if !confirm(DELETE_CONFIRM) {
            tracing::debug!(id = %self.product_id, "Delete cancelled");
            return Ok(EditOutcome::Stay);
        }

        let result = api.delete_product(&self.product_id).await;
        Ok(self.finish_delete(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{Call, MockStore};
    use crate::api::ApiError;
    use crate::view::NoticeLevel;

    fn product() -> Product {
        Product::new("p1", "Espresso Machine", 15999.0)
            .description("15 bar pump")
            .brand("Brewster")
            .quantity(2)
            .stock(6)
            .category(Category::new("c1", "Kitchen"))
            .image("/uploads/espresso.jpg")
    }

    fn store() -> MockStore {
        MockStore {
            categories: vec![Category::new("c1", "Kitchen"), Category::new("c2", "Garden")],
            ..MockStore::with_products(vec![product()])
        }
    }

    async fn ready_page(api: &MockStore) -> ProductEditPage {
        let mut page = ProductEditPage::new("p1");
        page.load(api).await;
        assert!(page.is_ready());
        page
    }

    #[tokio::test]
    async fn test_load_seeds_draft_from_product() {
        let api = store();
        let page = ready_page(&api).await;
        let draft = page.draft().unwrap();
        let source = product();

        assert_eq!(draft.name, source.name);
        assert_eq!(draft.price, source.price);
        assert_eq!(draft.description, source.description);
        assert_eq!(draft.brand, source.brand);
        assert_eq!(draft.quantity, source.quantity);
        assert_eq!(draft.stock, source.count_in_stock);
        assert_eq!(draft.image, source.image);
        assert_eq!(draft.category.as_deref(), Some("c1"));
        assert_eq!(page.categories().len(), 2);
        assert_eq!(api.calls(), vec![Call::Product("p1".to_string()), Call::Categories]);
    }

    #[tokio::test]
    async fn test_load_failure() {
        let api = store();
        let mut page = ProductEditPage::new("nope");

        page.load(&api).await;

        assert_eq!(
            page.state(),
            &EditState::Failed {
                message: LOAD_FAILED.to_string()
            }
        );
        assert!(page.draft().is_none());
    }

    #[tokio::test]
    async fn test_category_failure_does_not_block() {
        let api = MockStore {
            fail_categories: Some(ApiError::Timeout),
            ..store()
        };

        let page = ready_page(&api).await;
        assert!(page.categories().is_empty());
    }

    #[tokio::test]
    async fn test_interaction_rejected_before_load() {
        let api = store();
        let mut page = ProductEditPage::new("p1");

        assert_eq!(page.edit(DraftField::Name, "x"), Err(EditError::NotReady));
        assert_eq!(page.submit(&api).await, Err(EditError::NotReady));
        assert_eq!(
            page.upload_image(&api, ImageUpload::new("a.png", "image/png", vec![1])).await,
            Err(EditError::NotReady)
        );
        assert_eq!(page.delete(&api, |_| true).await, Err(EditError::NotReady));

        assert!(api.calls().is_empty());
        assert_eq!(page.state(), &EditState::Loading);
    }

    #[tokio::test]
    async fn test_submit_success_navigates() {
        let api = store();
        let mut page = ready_page(&api).await;

        page.edit(DraftField::Name, "Espresso Machine Pro").unwrap();
        page.edit(DraftField::Stock, "11").unwrap();

        let outcome = page.submit(&api).await.unwrap();

        assert_eq!(outcome, EditOutcome::Navigate(Route::AllProducts));
        let notices = page.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(notices[0].text, "Product successfully updated: Espresso Machine Pro");

        match api.calls().last() {
            Some(Call::Update(id, body)) => {
                assert_eq!(id, "p1");
                assert_eq!(body.name, "Espresso Machine Pro");
                assert_eq!(body.count_in_stock, 11);
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_draft() {
        let api = MockStore {
            fail_update: Some(ApiError::from_response(500, "")),
            ..store()
        };
        let mut page = ready_page(&api).await;
        page.edit(DraftField::Price, "14999").unwrap();
        let before = page.draft().cloned();

        let outcome = page.submit(&api).await.unwrap();

        assert_eq!(outcome, EditOutcome::Stay);
        assert!(page.is_ready());
        assert_eq!(page.draft().cloned(), before);
        let notices = page.take_notices();
        assert!(notices[0].is_error());
        assert_eq!(notices[0].text, UPDATE_FAILED);
    }

    #[tokio::test]
    async fn test_submitting_blocks_second_submit() {
        let api = store();
        let mut page = ready_page(&api).await;

        let update = page.begin_submit().unwrap();
        assert!(page.is_submitting());
        assert_eq!(update.name, "Espresso Machine");
        assert_eq!(page.begin_submit(), Err(EditError::NotReady));
        assert_eq!(page.edit(DraftField::Name, "x"), Err(EditError::NotReady));

        let outcome = page.finish_submit(Err(ApiError::Timeout));
        assert_eq!(outcome, EditOutcome::Stay);
        assert!(page.is_ready());
    }

    #[tokio::test]
    async fn test_upload_changes_only_image() {
        let api = store();
        let mut page = ready_page(&api).await;
        let before = page.draft().cloned().unwrap();

        page.upload_image(&api, ImageUpload::new("new.png", "image/png", vec![1, 2, 3]))
            .await
            .unwrap();

        let after = page.draft().cloned().unwrap();
        assert_eq!(after.image, "/uploads/new.png");
        assert_eq!(
            ProductDraft {
                image: before.image.clone(),
                ..after
            },
            before
        );
        assert_eq!(page.take_notices(), vec![Notice::success(UPLOAD_SUCCEEDED)]);
    }

    #[tokio::test]
    async fn test_upload_failure_leaves_image() {
        let api = MockStore {
            fail_upload: Some(ApiError::from_response(400, r#"{"message":"No image file provided"}"#)),
            ..store()
        };
        let mut page = ready_page(&api).await;
        let before = page.draft().cloned();

        page.upload_image(&api, ImageUpload::new("x.gif", "image/gif", vec![]))
            .await
            .unwrap();

        assert_eq!(page.draft().cloned(), before);
        assert_eq!(page.take_notices(), vec![Notice::error(UPLOAD_FAILED)]);
    }

    #[tokio::test]
    async fn test_delete_declined_sends_nothing() {
        let api = store();
        let mut page = ready_page(&api).await;
        let calls_before = api.calls();
        let state_before = page.state().clone();

        let mut prompt = None;
        let outcome = page
            .delete(&api, |question| {
                prompt = Some(question.to_string());
                false
            })
            .await
            .unwrap();

        assert_eq!(outcome, EditOutcome::Stay);
        assert_eq!(prompt.as_deref(), Some(DELETE_CONFIRM));
        assert_eq!(api.calls(), calls_before);
        assert_eq!(page.state(), &state_before);
        assert!(page.notices().is_empty());
    }

    #[tokio::test]
    async fn test_delete_confirmed() {
        let api = store();
        let mut page = ready_page(&api).await;

        let outcome = page.delete(&api, |_| true).await.unwrap();

        assert_eq!(outcome, EditOutcome::Navigate(Route::AllProducts));
        assert_eq!(api.calls().last(), Some(&Call::Delete("p1".to_string())));
        assert_eq!(
            page.take_notices(),
            vec![Notice::success("\"Espresso Machine\" is deleted")]
        );
    }

    #[tokio::test]
    async fn test_delete_failure() {
        let api = MockStore {
            fail_delete: Some(ApiError::Network("reset".to_string())),
            ..store()
        };
        let mut page = ready_page(&api).await;

        let outcome = page.delete(&api, |_| true).await.unwrap();

        assert_eq!(outcome, EditOutcome::Stay);
        assert!(page.is_ready());
        assert_eq!(page.take_notices(), vec![Notice::error(DELETE_FAILED)]);
    }

    #[test]
    fn test_load_failure_hides_server_message() {
        let mut page = ProductEditPage::new("p1");
        page.finish_load(
            Err(ApiError::from_response(500, r#"{"message":"MongoServerError: E11000"}"#)),
            Ok(vec![]),
        );

        assert_eq!(
            page.state(),
            &EditState::Failed {
                message: LOAD_FAILED.to_string()
            }
        );
    }

    #[test]
    fn test_load_for_another_product_is_dropped() {
        let mut page = ProductEditPage::new("p2");

        page.finish_load(
            Ok(Product::new("p1", "Old Product", 10.0)),
            Ok(vec![Category::new("c1", "Kitchen")]),
        );

        assert_eq!(page.state(), &EditState::Loading);
        assert!(page.categories().is_empty());
        assert_eq!(page.begin_submit(), Err(EditError::NotReady));

        page.finish_load(Ok(Product::new("p2", "Current Product", 20.0)), Ok(vec![]));
        let update = page.begin_submit().unwrap();
        assert_eq!(update.name, "Current Product");
    }

    #[test]
    fn test_upload_without_draft_emits_nothing() {
        let mut page = ProductEditPage::new("p1");

        page.finish_upload(Ok(UploadResponse {
            message: "Image uploaded successfully".to_string(),
            image: "/uploads/x.png".to_string(),
        }));

        assert_eq!(page.state(), &EditState::Loading);
        assert!(page.notices().is_empty());
    }
}
