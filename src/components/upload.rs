//! Per-document upload widget with drag & drop support.
//!
//! Each pending document gets its own widget instance bound to one real
//! `<input type="file">`. A dropped file is transplanted onto that input
//! so the surrounding form's native submission carries it; this code
//! never transmits anything itself.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement, MouseEvent};

use crate::config::EGRESADO_SUBMIT_PATH;
use crate::types::{DocumentRow, DocumentStatus, SelectedFile};
use crate::validation::{format_file_size, is_pdf, PDF_ONLY_MESSAGE};

/// Documents the server would render for the logged-in egresado.
fn pending_documents() -> Vec<DocumentRow> {
    vec![
        DocumentRow {
            clave: "curp",
            titulo: "CURP",
            estado: DocumentStatus::Pendiente,
        },
        DocumentRow {
            clave: "acta",
            titulo: "Acta de nacimiento",
            estado: DocumentStatus::Rechazado,
        },
        DocumentRow {
            clave: "certificado",
            titulo: "Certificado de estudios",
            estado: DocumentStatus::Aceptado,
        },
    ]
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    view! {
        <div class="container">
            <h1>"Mis documentos"</h1>
            <form method="post" action=EGRESADO_SUBMIT_PATH enctype="multipart/form-data">
                {pending_documents()
                    .into_iter()
                    .map(|doc| view! { <DocumentUploadWidget doc/> })
                    .collect_view()}
                <button type="submit" class="boton">
                    "Enviar documentos"
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn DocumentUploadWidget(doc: DocumentRow) -> impl IntoView {
    let clave = doc.clave;
    let titulo = doc.titulo;
    let estado = doc.estado;

    let (expanded, set_expanded) = create_signal(false);
    let on_toggle = move |_| set_expanded.update(|open| *open = !*open);

    let header = move || {
        view! {
            <div class="container-abri">
                <span class="documento-titulo">{titulo}</span>
                <span class=format!("estado-badge estado-{}", estado.as_value())>
                    {estado.label()}
                </span>
                <span class="icon" class:rotated=move || expanded.get() on:click=on_toggle>
                    "▾"
                </span>
            </div>
        }
    };

    // Documentos ya aceptados: solo el acordeón, sin área de carga
    if estado.is_accepted() {
        return view! {
            <div class="documento-container">
                {header()}
                <div class="file-input-container" class:show=move || expanded.get()>
                    <p class="documento-aceptado">"Documento aceptado. No requiere acción."</p>
                </div>
            </div>
        }
        .into_view();
    }

    let (drag_active, set_drag_active) = create_signal(false);
    let (selected, set_selected) = create_signal(None::<SelectedFile>);
    let input_ref = create_node_ref::<html::Input>();

    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(true);
    };
    let on_drag_over = on_drag_enter;
    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);

        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        let Some(file) = files.get(0) else {
            return;
        };
        if !is_pdf(&file.type_()) {
            let _ = window().alert_with_message(PDF_ONLY_MESSAGE);
            return;
        }

        // Asignar el archivo arrastrado al input real del formulario,
        // para que el envío nativo lo incluya.
        match input_ref.get() {
            Some(input) => input.set_files(Some(&files)),
            None => log::warn!("Falta el input de archivo del documento '{}'", titulo),
        }
        set_selected.set(Some(SelectedFile::from_web_file(&file)));
    };

    // Selección manual: misma validación que el drop
    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if !is_pdf(&file.type_()) {
            let _ = window().alert_with_message(PDF_ONLY_MESSAGE);
            input.set_value("");
            return;
        }
        set_selected.set(Some(SelectedFile::from_web_file(&file)));
    };

    // prevent_default + stop_propagation: el botón vive dentro del label
    // y sin esto reabriría el selector de archivos.
    let on_remove = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        match input_ref.get() {
            Some(input) => input.set_value(""),
            None => log::warn!("Falta el input de archivo del documento '{}'", titulo),
        }
        set_selected.set(None);
    };

    view! {
        <div class="documento-container">
            {header()}
            <div class="file-input-container" class:show=move || expanded.get()>
                <label
                    class="custom-upload-area"
                    class:dragover=move || drag_active.get()
                    class=("has-file", move || selected.get().is_some())
                    on:dragenter=on_drag_enter
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <Show
                        when=move || selected.get().is_none()
                        fallback=move || {
                            view! {
                                <div class="file-info">
                                    <span class="file-name">
                                        {move || {
                                            selected.get().map(|f| f.name).unwrap_or_default()
                                        }}
                                    </span>
                                    <span class="file-size">
                                        {move || {
                                            selected
                                                .get()
                                                .map(|f| format_file_size(f.size))
                                                .unwrap_or_default()
                                        }}
                                    </span>
                                    <button type="button" class="file-remove" on:click=on_remove>
                                        "✕"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div class="upload-content">
                            <span class="upload-icon">"📄"</span>
                            <span>"Arrastra tu archivo aquí o haz clic para seleccionar"</span>
                            <span class="upload-hint">"Solo PDF, máximo 2.5 MB"</span>
                        </div>
                    </Show>
                    <input
                        type="file"
                        accept="application/pdf"
                        name=format!("subir_{clave}")
                        style="display: none;"
                        node_ref=input_ref
                        on:change=on_change
                    />
                </label>
            </div>
        </div>
    }
    .into_view()
}
