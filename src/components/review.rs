//! Servicios escolares review page.
//!
//! Bulk selection of egresados for the "activar línea de pago" action,
//! plus per-document decision radios. Note checkboxes for a document are
//! interactive only while its decision holds the literal value
//! "rechazado"; see [`crate::validation::notes_enabled`].

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::config::REVISION_SUBMIT_PATH;
use crate::types::{DocumentStatus, EgresadoRow, ReviewDocument};
use crate::validation::notes_enabled;

/// Note options offered for a rejected document.
const NOTE_OPTIONS: [&str; 4] = [
    "Documento ilegible",
    "Documento incompleto",
    "Documento incorrecto",
    "Falta firma o sello",
];

/// Egresados the server would render for the current review etapa.
fn egresados_en_revision() -> Vec<EgresadoRow> {
    vec![
        EgresadoRow { numero_control: "19010101", nombre: "Ana Martínez López" },
        EgresadoRow { numero_control: "19010102", nombre: "Carlos Gómez Rivera" },
        EgresadoRow { numero_control: "19010103", nombre: "Lucía Hernández Cruz" },
    ]
}

/// Documents pending a decision, with any state already recorded.
fn documentos_en_revision() -> Vec<ReviewDocument> {
    vec![
        ReviewDocument { id: 101, titulo: "CURP", estado: DocumentStatus::Pendiente },
        ReviewDocument { id: 102, titulo: "Acta de nacimiento", estado: DocumentStatus::Rechazado },
        ReviewDocument { id: 103, titulo: "Certificado de estudios", estado: DocumentStatus::Aceptado },
    ]
}

#[component]
pub fn ReviewPage() -> impl IntoView {
    let rows: Vec<(EgresadoRow, RwSignal<bool>)> = egresados_en_revision()
        .into_iter()
        .map(|egresado| (egresado, create_rw_signal(false)))
        .collect();

    // El checkbox maestro replica su propio estado en todo el grupo
    let selection: Vec<RwSignal<bool>> = rows.iter().map(|(_, checked)| *checked).collect();
    let on_select_all = move |ev: Event| {
        let source: HtmlInputElement = event_target(&ev);
        for checked in &selection {
            checked.set(source.checked());
        }
    };

    view! {
        <div class="container">
            <h1>"Revisión de documentos"</h1>
            <form method="post" action=REVISION_SUBMIT_PATH>
                <table class="egresados-table">
                    <thead>
                        <tr>
                            <th>
                                <input type="checkbox" on:change=on_select_all/>
                            </th>
                            <th>"Número de control"</th>
                            <th>"Nombre"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|(egresado, checked)| {
                                view! {
                                    <tr>
                                        <td>
                                            <input
                                                type="checkbox"
                                                class="egresado-checkbox"
                                                name="egresados_seleccionados"
                                                value=egresado.numero_control
                                                prop:checked=move || checked.get()
                                                on:change=move |ev: Event| {
                                                    let input: HtmlInputElement = event_target(&ev);
                                                    checked.set(input.checked());
                                                }
                                            />
                                        </td>
                                        <td>{egresado.numero_control}</td>
                                        <td>{egresado.nombre}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>

                <h2>"Documentos"</h2>
                {documentos_en_revision()
                    .into_iter()
                    .map(|doc| view! { <DocumentDecisionRow doc/> })
                    .collect_view()}

                <button type="submit" class="boton">
                    "Guardar revisión"
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn DocumentDecisionRow(doc: ReviewDocument) -> impl IntoView {
    let titulo = doc.titulo;
    // El estado inicial viene del servidor; la habilitación de notas se
    // deriva de él, así que una recarga queda consistente sin pasos extra.
    let (decision, set_decision) = create_signal(doc.estado.as_value().to_string());
    let notes: Vec<(&'static str, RwSignal<bool>)> = NOTE_OPTIONS
        .iter()
        .map(|label| (*label, create_rw_signal(false)))
        .collect();

    let enabled = move || notes_enabled(&decision.get());

    let choose = {
        let notes = notes.clone();
        move |value: &'static str| {
            set_decision.set(value.to_string());
            if !notes_enabled(value) {
                for (_, checked) in &notes {
                    checked.set(false);
                }
            }
        }
    };
    let choose_aceptar = choose.clone();
    let choose_rechazar = choose;

    let radio_name = format!("estado_{}", doc.id);
    let notes_name = format!("notas_{}", doc.id);

    view! {
        <div class="documento-revision">
            <h3>{titulo}</h3>
            <div class="decision">
                <label>
                    <input
                        type="radio"
                        name=radio_name.clone()
                        value="aceptado"
                        prop:checked=move || decision.get() == "aceptado"
                        on:change=move |_| choose_aceptar("aceptado")
                    />
                    "Aceptar"
                </label>
                <label>
                    <input
                        type="radio"
                        name=radio_name
                        value="rechazado"
                        prop:checked=move || decision.get() == "rechazado"
                        on:change=move |_| choose_rechazar("rechazado")
                    />
                    "Rechazar"
                </label>
            </div>
            <div class="notas">
                {notes
                    .into_iter()
                    .map(|(label_text, checked)| {
                        let notes_name = notes_name.clone();
                        view! {
                            <label
                                style:opacity=move || if enabled() { "1" } else { "0.5" }
                                style:cursor=move || {
                                    if enabled() { "pointer" } else { "not-allowed" }
                                }
                            >
                                <input
                                    type="checkbox"
                                    name=notes_name
                                    value=label_text
                                    prop:checked=move || checked.get()
                                    disabled=move || !enabled()
                                    on:change=move |ev: Event| {
                                        let input: HtmlInputElement = event_target(&ev);
                                        checked.set(input.checked());
                                    }
                                />
                                {label_text}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
