//! Identity-verification form.
//!
//! Shown when the user cannot log in: collects CURP, name, contact email
//! and an identification document (PDF, max 2.5 MB). Submission is
//! simulated client-side; on success the panel returns to the login view
//! after a fixed delay. The pending return is cancelled if the user goes
//! back manually or the view is torn down, so the timer never fires
//! against a stale view.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, MouseEvent};

use crate::config::LOGIN_RETURN_DELAY_MS;
use crate::types::LoginView;
use crate::validation::{
    exceeds_size_limit, validate_identification, FileMeta, RequiredField, FILE_TOO_LARGE_MESSAGE,
};

/// State of the quick file picker's label.
#[derive(Clone, PartialEq)]
enum PickerState {
    Empty,
    Selected(String),
    TooLarge,
}

#[component]
pub fn IdentificationForm(set_view: WriteSignal<LoginView>) -> impl IntoView {
    let (picker, set_picker) = create_signal(PickerState::Empty);

    let curp_ref = create_node_ref::<html::Input>();
    let nombre_ref = create_node_ref::<html::Input>();
    let correo_ref = create_node_ref::<html::Input>();
    let file_ref = create_node_ref::<html::Input>();

    // Época del retorno pendiente: cualquier incremento invalida el
    // temporizador que siga en vuelo.
    let return_epoch = Rc::new(Cell::new(0u32));

    {
        let epoch = Rc::clone(&return_epoch);
        on_cleanup(move || epoch.set(epoch.get().wrapping_add(1)));
    }

    // Quick picker: show the file name, reject over-size files outright.
    let on_picker_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if exceeds_size_limit(file.size()) {
            set_picker.set(PickerState::TooLarge);
            input.set_value("");
        } else {
            set_picker.set(PickerState::Selected(file.name()));
        }
    };

    let on_volver = {
        let epoch = Rc::clone(&return_epoch);
        move |ev: MouseEvent| {
            ev.prevent_default();
            epoch.set(epoch.get().wrapping_add(1));
            set_view.set(LoginView::Login);
        }
    };

    let on_submit = {
        let epoch = Rc::clone(&return_epoch);
        move |ev: MouseEvent| {
            ev.prevent_default();

            let curp = curp_ref.get().map(|i| i.value()).unwrap_or_default();
            let nombre = nombre_ref.get().map(|i| i.value()).unwrap_or_default();
            let correo = correo_ref.get().map(|i| i.value()).unwrap_or_default();
            let file = file_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| FileMeta::from_web_file(&file));

            let fields = [
                RequiredField { label: "CURP", value: &curp },
                RequiredField { label: "Nombre completo", value: &nombre },
                RequiredField { label: "Correo electrónico", value: &correo },
            ];
            let errors = validate_identification(&fields, file.as_ref());
            if !errors.is_empty() {
                let _ = window().alert_with_message(&errors.join("\n"));
                return;
            }

            log::info!("Formulario de identificación válido, simulando envío");
            let _ = window()
                .alert_with_message("Solicitud enviada. Nos pondremos en contacto con usted.");

            let scheduled = epoch.get().wrapping_add(1);
            epoch.set(scheduled);
            let epoch = Rc::clone(&epoch);
            spawn_local(async move {
                TimeoutFuture::new(LOGIN_RETURN_DELAY_MS).await;
                if epoch.get() == scheduled {
                    // try_set: la vista puede haberse desmontado entre tanto
                    let _ = set_view.try_set(LoginView::Login);
                }
            });
        }
    };

    let picker_text = move || match picker.get() {
        PickerState::Empty => "Seleccionar archivo (PDF)".to_string(),
        PickerState::Selected(name) => name,
        PickerState::TooLarge => FILE_TOO_LARGE_MESSAGE.to_string(),
    };
    let picker_style = move || match picker.get() {
        PickerState::Empty => "",
        PickerState::Selected(_) => "color: #27ae60;",
        PickerState::TooLarge => "color: #E87A2B;",
    };

    view! {
        <form class="identificacion-form">
            <h2>"Verificación de identidad"</h2>

            <label>"CURP"</label>
            <input type="text" name="curp" required node_ref=curp_ref/>
            <label>"Nombre completo"</label>
            <input type="text" name="nombre" required node_ref=nombre_ref/>
            <label>"Correo electrónico"</label>
            <input type="email" name="correo" required node_ref=correo_ref/>

            <label class="custom-upload">
                <span class="custom-upload-text" style=picker_style>
                    {picker_text}
                </span>
                <input
                    type="file"
                    accept="application/pdf"
                    name="id"
                    style="display: none;"
                    node_ref=file_ref
                    on:change=on_picker_change
                />
            </label>

            <button type="button" class="boton" on:click=on_submit>
                "Enviar solicitud"
            </button>
            <button type="button" class="volver" on:click=on_volver>
                "Volver al inicio de sesión"
            </button>
        </form>
    }
}
