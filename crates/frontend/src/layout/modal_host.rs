use leptos::prelude::*;

use super::dashboard_store::{use_dashboard, ModalTarget};
use crate::domain::a001_item::ui::create::CreateItemModal;
use crate::domain::a001_item::ui::delete::DeleteItemModal;
use crate::domain::a002_stock::ui::AdjustStockModal;
use crate::domain::a003_movement::ui::checkout::CheckoutModal;
use crate::domain::a003_movement::ui::return_item::ReturnModal;
use crate::system::auth::context::use_session;

/// Renders the dialog named by [`DashboardStore::modal`]; at most one at a time
///
/// [`DashboardStore::modal`]: super::dashboard_store::DashboardStore
#[component]
pub fn ModalHost() -> impl IntoView {
    let store = use_dashboard();
    let session = use_session();

    move || match store.modal.get() {
        None => view! { <></> }.into_any(),
        Some(ModalTarget::CreateItem) => view! { <CreateItemModal /> }.into_any(),
        Some(ModalTarget::DeleteItem { item_id, name }) => {
            view! { <DeleteItemModal item_id=item_id name=name /> }.into_any()
        }
        Some(ModalTarget::Checkout { item_id, name }) => {
            view! { <CheckoutModal item_id=item_id name=name /> }.into_any()
        }
        Some(ModalTarget::Return {
            item_id,
            name,
            quantity,
        }) => view! { <ReturnModal item_id=item_id name=name quantity=quantity /> }.into_any(),
        Some(ModalTarget::AdjustStock {
            item_id,
            name,
            stock,
        }) => {
            if session.get().is_admin() {
                view! { <AdjustStockModal item_id=item_id name=name stock=stock /> }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }
    }
}
