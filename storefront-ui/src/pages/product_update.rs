//! Product Update Page
//!
//! Update / Delete Product form. The page state machine lives in a signal;
//! handlers run its synchronous steps around each request.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use storefront::pages::product_edit::DELETE_CONFIRM;
use storefront::{
    ApiError, ApiResult, DraftField, EditOutcome, EditState, ImageUpload, Message, Notice,
    ProductEditPage, StoreApi,
};

use crate::components::{AdminMenu, Loader, MessageBanner};
use crate::state::GlobalState;

/// Coarse page phase; the form is only rebuilt when this changes
#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Loading,
    Failed(String),
    Editing,
}

impl Phase {
    fn of(state: &EditState) -> Self {
        match state {
            EditState::Loading => Phase::Loading,
            EditState::Failed { message } => Phase::Failed(message.clone()),
            EditState::Ready { .. } | EditState::Submitting { .. } => Phase::Editing,
        }
    }
}

#[component]
pub fn ProductUpdate() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();
    let product_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let page = create_rw_signal(ProductEditPage::new(product_id()));

    // Fetch product and categories on mount and whenever the id changes
    let api = state.api.clone();
    create_effect(move |_| {
        let id = product_id();
        page.set(ProductEditPage::new(id.clone()));

        let api = api.clone();
        spawn_local(async move {
            let product = api.product(&id).await;
            let categories = api.categories().await;
            // The route may have moved on while the requests were in flight
            if page.with_untracked(|p| p.product_id() != id) {
                return;
            }
            page.update(|p| p.finish_load(product, categories));
        });
    });

    let phase = create_memo(move |_| page.with(|p| Phase::of(p.state())));

    view! {
        <div class="container xl:mx-[9rem] sm:mx-[0]">
            <div class="flex flex-col md:flex-row">
                <div class="md:w-1/4 p-3">
                    <AdminMenu />
                </div>

                <div class="md:w-3/4 p-3">
                    <h2 class="h-12 text-2xl font-bold">"Update / Delete Product"</h2>

                    {move || match phase.get() {
                        Phase::Loading => view! { <Loader /> }.into_view(),
                        Phase::Failed(message) => view! {
                            <MessageBanner message=Message::danger(message) />
                        }
                        .into_view(),
                        Phase::Editing => view! { <EditForm page=page /> }.into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

/// Push the page's pending notices to the toast container
fn flush_notices(page: RwSignal<ProductEditPage>, state: &GlobalState) {
    if let Some(notices) = page.try_update(|p| p.take_notices()) {
        state.notify_all(notices);
    }
}

#[component]
fn EditForm(page: RwSignal<ProductEditPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let image = move || page.with(|p| p.draft().map(|d| d.image.clone()).unwrap_or_default());
    let submitting = move || page.with(|p| p.is_submitting());

    // Image upload
    let upload_state = state.clone();
    let on_upload = move |ev: ev::Event| {
        let Some(file) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };
        if page.with_untracked(|p| p.ensure_ready().is_err()) {
            return;
        }

        let state = upload_state.clone();
        spawn_local(async move {
            let result = match read_file(&file).await {
                Ok(upload) => state.api.upload_image(upload).await,
                Err(err) => Err(err),
            };
            page.update(|p| p.finish_upload(result));
            flush_notices(page, &state);
        });
    };

    // Update
    let submit_state = state.clone();
    let submit_navigate = navigate.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(Ok(update)) = page.try_update(|p| p.begin_submit()) else {
            return;
        };
        let id = page.with_untracked(|p| p.product_id().to_string());

        let state = submit_state.clone();
        let navigate = submit_navigate.clone();
        spawn_local(async move {
            let result = state.api.update_product(&id, &update).await;
            let outcome = page.try_update(|p| p.finish_submit(result));
            flush_notices(page, &state);

            if let Some(EditOutcome::Navigate(route)) = outcome {
                navigate(&route.path(), Default::default());
            }
        });
    };

    // Delete
    let delete_state = state.clone();
    let on_delete = move |_| {
        if page.with_untracked(|p| p.ensure_ready().is_err()) {
            return;
        }
        if !window().confirm_with_message(DELETE_CONFIRM).unwrap_or(false) {
            return;
        }
        let id = page.with_untracked(|p| p.product_id().to_string());

        let state = delete_state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = state.api.delete_product(&id).await;
            let outcome = page.try_update(|p| p.finish_delete(result));
            flush_notices(page, &state);

            if let Some(EditOutcome::Navigate(route)) = outcome {
                navigate(&route.path(), Default::default());
            }
        });
    };

    view! {
        <Show when=move || !image().is_empty()>
            <div class="text-center">
                <img src=image alt="Product" class="block mx-auto w-full h-[40%] object-contain" />
            </div>
        </Show>

        <div class="mb-3">
            <label class="border text-white px-4 block w-full text-center rounded-lg cursor-pointer font-bold py-11">
                {move || {
                    let image = image();
                    if image.is_empty() { "Upload Image".to_string() } else { image }
                }}
                <input
                    type="file"
                    name="image"
                    accept="image/*"
                    on:change=on_upload
                    class="hidden"
                    aria-label="Upload product image"
                />
            </label>
        </div>

        <form on:submit=on_submit>
            <div class="p-3">
                <div class="flex flex-wrap">
                    <TextField page=page field=DraftField::Name />
                    <NumberField page=page field=DraftField::Price />
                </div>

                <div class="flex flex-wrap">
                    <NumberField page=page field=DraftField::Quantity min="1" />
                    <TextField page=page field=DraftField::Brand />
                </div>

                <DescriptionField page=page />

                <div class="flex justify-between">
                    <NumberField page=page field=DraftField::Stock />
                    <CategorySelect page=page />
                </div>

                <div>
                    <button
                        type="submit"
                        disabled=submitting
                        class="py-4 px-10 mt-5 rounded-lg text-lg font-bold bg-green-600
                               disabled:bg-gray-600 mr-6"
                    >
                        {move || if submitting() { "Updating..." } else { "Update" }}
                    </button>
                    <button
                        type="button"
                        on:click=on_delete
                        class="py-4 px-10 mt-5 rounded-lg text-lg font-bold bg-pink-600"
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </form>
    }
}

const INPUT_CLASS: &str = "p-4 mb-3 w-[30rem] border rounded-lg bg-[#101011] text-white mr-[5rem]";

fn field_value(page: RwSignal<ProductEditPage>, field: DraftField) -> String {
    page.with(|p| p.draft().map(|d| d.get(field)).unwrap_or_default())
}

/// Apply input text; a rejected value is reported and the draft keeps its value
fn apply_edit(page: RwSignal<ProductEditPage>, state: &GlobalState, field: DraftField, value: String) {
    if let Some(Err(err)) = page.try_update(|p| p.edit(field, &value)) {
        state.notify(Notice::error(err.to_string()));
    }
}

#[component]
fn TextField(page: RwSignal<ProductEditPage>, field: DraftField) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div>
            <label for=field.as_str() class="block">{field.label()}</label>
            <input
                type="text"
                id=field.as_str()
                name=field.as_str()
                class=INPUT_CLASS
                prop:value=move || field_value(page, field)
                on:input=move |ev| apply_edit(page, &state, field, event_target_value(&ev))
            />
        </div>
    }
}

/// Numeric input; parsed when the value is committed
#[component]
fn NumberField(
    page: RwSignal<ProductEditPage>,
    field: DraftField,
    #[prop(default = "0")] min: &'static str,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div>
            <label for=field.as_str() class="block">{field.label()}</label>
            <input
                type="number"
                id=field.as_str()
                name=field.as_str()
                min=min
                step="any"
                class=INPUT_CLASS
                prop:value=move || field_value(page, field)
                on:change=move |ev| apply_edit(page, &state, field, event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn DescriptionField(page: RwSignal<ProductEditPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let field = DraftField::Description;

    view! {
        <label for=field.as_str() class="my-5 block">{field.label()}</label>
        <textarea
            id=field.as_str()
            name=field.as_str()
            class="p-2 mb-3 bg-[#101011] border rounded-lg w-[95%] text-white"
            prop:value=move || field_value(page, field)
            on:input=move |ev| apply_edit(page, &state, field, event_target_value(&ev))
        />
    }
}

#[component]
fn CategorySelect(page: RwSignal<ProductEditPage>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let field = DraftField::Category;
    let categories = move || page.with(|p| p.categories().to_vec());

    view! {
        <div>
            <label for=field.as_str() class="block">{field.label()}</label>
            <select
                id=field.as_str()
                name=field.as_str()
                class=INPUT_CLASS
                prop:value=move || field_value(page, field)
                on:change=move |ev| apply_edit(page, &state, field, event_target_value(&ev))
            >
                <For
                    each=categories
                    key=|category| category.id.clone()
                    children=move |category| {
                        let selected = {
                            let id = category.id.clone();
                            move || field_value(page, field) == id
                        };
                        view! {
                            <option value=category.id.clone() selected=selected>
                                {category.name}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Read a picked file into an upload
async fn read_file(file: &web_sys::File) -> ApiResult<ImageUpload> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::InvalidRequest(format!("Could not read {}", file.name())))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let file_name = file.name();
    let content_type = match file.type_() {
        mime if mime.is_empty() => ImageUpload::content_type_for(&file_name).to_string(),
        mime => mime,
    };

    Ok(ImageUpload::new(file_name, content_type, bytes))
}
