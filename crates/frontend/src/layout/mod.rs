pub mod dashboard_store;
pub mod modal_host;
pub mod sections;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::domain::a001_item::ui::list::ItemList;
use crate::domain::a003_movement::ui::list::MovementBoardView;
use crate::domain::a004_audit_log::ui::AuditLogList;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::{do_logout, use_session};
use crate::system::auth::guard::RequireAdmin;
use dashboard_store::{use_dashboard, DashboardStore};
use modal_host::ModalHost;
use sections::{Section, SectionTable};

/// Activation of each section: opening it fetches its data again
fn section_table(store: DashboardStore) -> SectionTable {
    SectionTable::new()
        .on(Section::Items, move || store.reload_items())
        .on(Section::Movements, move || store.reload_movements())
        .on(Section::Audit, move || store.reload_audit())
}

/// Dashboard shell.
///
/// ```text
/// +------------------------------------------+
/// |  title          role  |  Sair            |
/// +------------------------------------------+
/// |  Nav  |        active section            |
/// +------------------------------------------+
/// ```
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let store = use_dashboard();
    let session = use_session();
    let navigate = use_navigate();
    let toasts = use_toasts();

    let sections = Section::visible_for(session.get_untracked().role());

    let logout = move |_| {
        store.close_modal();
        do_logout();
        toasts.info("Sessão encerrada.");
        navigate("/", Default::default());
    };

    view! {
        <div class="app-layout">
            <header class="top-header">
                <h1 class="top-header__title">"Controle de Almoxarifado"</h1>
                <div class="top-header__actions">
                    <span class="top-header__role">
                        {move || session.get().role().map(|r| r.label()).unwrap_or_default()}
                    </span>
                    <button class="button button--secondary" on:click=logout>
                        {icon("log-out")}
                        "Sair"
                    </button>
                </div>
            </header>

            <div class="app-body">
                <nav class="main-nav-bar">
                    <ul>
                        {sections
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li
                                        class:active=move || store.section.get() == section
                                        on:click=move |_| {
                                            let role = session.get_untracked().role();
                                            let opened = section_table(store).activate(section, role);
                                            store.section.set(opened);
                                        }
                                    >
                                        {icon(section.icon())}
                                        <span>{section.title()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <main class="app-main">
                    {move || match store.section.get() {
                        Section::Items => view! { <ItemList /> }.into_any(),
                        Section::Movements => view! { <MovementBoardView /> }.into_any(),
                        Section::Audit => view! {
                            <RequireAdmin>
                                <AuditLogList />
                            </RequireAdmin>
                        }
                        .into_any(),
                    }}
                </main>
            </div>

            <ModalHost />
        </div>
    }
}
