//! Login panel: tab switching between the three login forms, plus the
//! toggle into the identity-verification view.

use leptos::*;
use web_sys::MouseEvent;

use crate::components::IdentificationForm;
use crate::types::{LoginTab, LoginView};

#[component]
pub fn LoginPage() -> impl IntoView {
    // Estado del panel: pestaña activa y vista actual
    let (active_tab, set_active_tab) = create_signal(LoginTab::DEFAULT);
    let (view_mode, set_view_mode) = create_signal(LoginView::Login);

    let on_identificar = move |ev: MouseEvent| {
        ev.prevent_default();
        set_view_mode.set(LoginView::Identification);
    };

    view! {
        <div class="login-panel">
            <Show
                when=move || view_mode.get() == LoginView::Login
                fallback=move || view! { <IdentificationForm set_view=set_view_mode/> }
            >
                <ul class="login-items">
                    {LoginTab::ALL
                        .iter()
                        .map(|tab| {
                            let tab = *tab;
                            view! {
                                <li
                                    class:active=move || active_tab.get() == tab
                                    on:click=move |_| set_active_tab.set(tab)
                                >
                                    {tab.label()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="forms-container">
                    {move || match active_tab.get() {
                        LoginTab::Student => view! { <StudentLoginForm/> }.into_view(),
                        LoginTab::CreateAccount => view! { <CreateAccountForm/> }.into_view(),
                        LoginTab::StaffServices => view! { <StaffLoginForm/> }.into_view(),
                    }}
                </div>

                <button
                    type="button"
                    class="identificar"
                    on:click=on_identificar
                >
                    "¿No puedes ingresar? Identifícate"
                </button>
            </Show>
        </div>
    }
}

/// Login form for egresados. Posts to the external server; nothing here
/// intercepts the submission.
#[component]
fn StudentLoginForm() -> impl IntoView {
    view! {
        <form method="post" action="/" class="login-datos active">
            <input type="hidden" name="form_type" value=LoginTab::Student.form_type()/>
            <label>"Número de control"</label>
            <input type="text" name="username" required/>
            <label>"Contraseña"</label>
            <input type="password" name="password" required/>
            <button type="submit" class="boton">"Ingresar"</button>
        </form>
    }
}

/// First-time account creation for egresados, keyed by CURP.
#[component]
fn CreateAccountForm() -> impl IntoView {
    view! {
        <form method="post" action="/" class="login-datos active">
            <input type="hidden" name="form_type" value=LoginTab::CreateAccount.form_type()/>
            <label>"CURP"</label>
            <input type="text" name="curp" required/>
            <label>"Correo electrónico"</label>
            <input type="email" name="email" required/>
            <label>"Contraseña"</label>
            <input type="password" name="password" required/>
            <button type="submit" class="boton">"Crear cuenta"</button>
        </form>
    }
}

/// Login form for servicios escolares staff.
#[component]
fn StaffLoginForm() -> impl IntoView {
    view! {
        <form method="post" action="/" class="login-datos active">
            <input type="hidden" name="form_type" value=LoginTab::StaffServices.form_type()/>
            <label>"Usuario"</label>
            <input type="text" name="username" required/>
            <label>"Contraseña"</label>
            <input type="password" name="password" required/>
            <button type="submit" class="boton">"Ingresar"</button>
        </form>
    }
}
