pub mod state;

use contracts::domain::orders::{Order, ORDER_STATUS_DISPATCHED};
use leptos::prelude::*;

use crate::domain::orders::api;
use crate::domain::orders::labels::{order_status_label, payment_status_label};
use crate::shared::api_utils::image_url;
use crate::shared::number_format::format_vnd;
use crate::system::auth::session::use_session;

use state::{create_state, ReadyOrdersState};

/// Blocking operator notification via the browser alert dialog.
fn notify(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Screen listing orders awaiting pickup with a bulk "picked up" action.
#[component]
pub fn ReadyOrdersList() -> impl IntoView {
    let state = create_state();
    let session = use_session();

    let load_data = {
        let session = session.clone();
        move || {
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                state.update(|s| s.loading = true);

                match api::fetch_ready_orders(&session).await {
                    Ok(orders) => {
                        state.update(|s| s.replace_orders(orders));
                    }
                    Err(e) => {
                        // Keep the stale list; the operator can reload manually
                        log::error!("Failed to load ready orders: {}", e);
                    }
                }

                state.update(|s| s.loading = false);
            });
        }
    };

    let mark_dispatched = {
        let session = session.clone();
        let load_data = load_data.clone();
        move || {
            let ids: Vec<String> = state.with(|s| s.selected_ids.iter().cloned().collect());
            if ids.is_empty() {
                return;
            }

            let session = session.clone();
            let load_data = load_data.clone();
            wasm_bindgen_futures::spawn_local(async move {
                state.update(|s| s.updating = true);

                match api::change_order_status(&session, ids, ORDER_STATUS_DISPATCHED).await {
                    Ok(()) => {
                        notify("✅ Đã chuyển sang đang giao");
                        // Refetch for the authoritative post-update list
                        load_data();
                    }
                    Err(e) => {
                        notify(&format!("❌ {}", e));
                    }
                }

                state.update(|s| s.updating = false);
            });
        }
    };

    load_data();

    view! {
        <div class="page">
            {move || {
                if state.with(|s| s.loading) {
                    view! { <div class="page__placeholder">"Đang tải đơn hàng…"</div> }.into_any()
                } else if state.with(|s| s.orders.is_empty()) {
                    view! { <div class="page__placeholder">"Không có đơn chờ lấy."</div> }.into_any()
                } else {
                    let mark = mark_dispatched.clone();
                    view! {
                        <div>
                            <div class="header">
                                <div class="header__content">
                                    <h1 class="header__title">"Đơn hàng chờ lấy"</h1>
                                </div>
                                <div class="header__actions">
                                    <button
                                        class="button button--primary"
                                        on:click=move |_| mark()
                                        disabled=move || !state.with(|s| s.can_dispatch())
                                    >
                                        {move || state.with(|s| s.dispatch_button_label())}
                                    </button>
                                </div>
                            </div>

                            <div class="order-list">
                                {move || state.with(|s| s.orders.clone()).into_iter().map(|order| {
                                    view! { <OrderCard order=order state=state /> }
                                }).collect_view()}
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn OrderCard(order: Order, state: RwSignal<ReadyOrdersState>) -> impl IntoView {
    let id_for_checked = order.order_id.clone();
    let id_for_toggle = order.order_id.clone();

    view! {
        <div class="order-card">
            <input
                type="checkbox"
                class="order-card__checkbox"
                checked=move || state.with(|s| s.is_selected(&id_for_checked))
                on:change=move |_| state.update(|s| s.toggle_select(&id_for_toggle))
            />
            <div class="order-card__body">
                <h3 class="order-card__title">{format!("Mã đơn: {}", order.order_id)}</h3>
                <div class="order-card__fields">
                    <p><span class="order-card__label">"User ID: "</span>{order.user_id}</p>
                    <p><span class="order-card__label">"Địa chỉ: "</span>{order.shipping_address.address}</p>
                    <p><span class="order-card__label">"Phone: "</span>{order.shipping_address.phone}</p>
                    <p><span class="order-card__label">"Trạng thái: "</span>{order_status_label(&order.order_status).to_string()}</p>
                    <p><span class="order-card__label">"Thanh toán: "</span>{payment_status_label(&order.payment_status).to_string()}</p>
                    <p><span class="order-card__label">"Giá gốc: "</span>{format_vnd(order.raw_total)}</p>
                    <p><span class="order-card__label">"Thanh toán: "</span>{format_vnd(order.purchase_total)}</p>
                </div>
                <div class="order-card__products">
                    {order.products.into_iter().map(|product| {
                        view! {
                            <div class="product-line">
                                <img
                                    class="product-line__image"
                                    src=image_url(&product.first_image)
                                    alt=product.name.clone()
                                />
                                <div class="product-line__info">
                                    <p class="product-line__name">{product.name}</p>
                                    <p class="product-line__price">{format!("Giá: {}", format_vnd(product.price))}</p>
                                    {product.variants.into_iter().map(|v| {
                                        view! {
                                            <p class="product-line__variant">
                                                {format!(
                                                    "– Màu: {}, Size: {}, Số lượng: {}, Giá: {}",
                                                    v.color, v.size, v.quantity, format_vnd(v.price),
                                                )}
                                            </p>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
