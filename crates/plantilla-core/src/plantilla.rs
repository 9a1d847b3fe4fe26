//! Fetch → transform → render pipelines behind each front-end action.
//!
//! Every operation awaits one gateway request. When that request yields
//! no payload the operation returns without rendering or presenting
//! anything; failures never propagate to the caller.

use serde_json::Value;
use tracing::{debug, error, info};

use crate::info::{ABOUT_FIELDS, HOME_FIELDS, about_html, normalize};
use crate::ports::{Alert, GATEWAY_UNREACHABLE, Gateway, Presenter};
use crate::record::{Field, Record, RecordPage};
use crate::sort_key::{sort_by_folded, sort_by_number, sort_by_text};
use crate::table::{FieldSet, render_list, render_one};

/// Relative routes on the API gateway.
pub mod routes {
    pub const HOME: &str = "/plantilla/";
    pub const ABOUT: &str = "/plantilla/acercade";
    pub const ALL: &str = "/plantilla/getTodos";
    pub const BY_ID: &str = "/plantilla/getPorId/";
}

/// Titles handed to the presenter.
pub mod titles {
    pub const HOME: &str = "Plantilla Home";
    pub const ABOUT: &str = "Plantilla Acerca de";
    pub const LIST: &str = "Listado de plantillas";
    pub const NAMES: &str = "Listado de nombres";
    pub const ONE: &str = "Mostrar una persona";
}

/// Front-end actions for MS Plantilla, wired to a gateway, a page
/// presenter, and an operator alert.
pub struct Plantilla<G, P, A> {
    gateway: G,
    presenter: P,
    alert: A,
}

impl<G: Gateway, P: Presenter, A: Alert> Plantilla<G, P, A> {
    pub fn new(gateway: G, presenter: P, alert: A) -> Self {
        Self {
            gateway,
            presenter,
            alert,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn alert_sink(&self) -> &A {
        &self.alert
    }

    /// Download `path` once. Unreachable gateways raise the operator alert;
    /// every failure is logged and yields `None`.
    pub async fn fetch_route(&self, path: &str) -> Option<Value> {
        match self.gateway.get_json(path).await {
            Ok(value) => Some(value),
            Err(e) => {
                if e.is_transport() {
                    self.alert.alert(GATEWAY_UNREACHABLE);
                }
                error!(path, error = %e, "gateway fetch failed");
                None
            }
        }
    }

    async fn fetch_all(&self) -> Option<Vec<Record>> {
        let value = self.fetch_route(routes::ALL).await?;
        match serde_json::from_value::<RecordPage>(value) {
            Ok(page) => {
                info!(count = page.data.len(), "fetched records");
                Some(page.data)
            }
            Err(e) => {
                error!(error = %e, "malformed record list");
                None
            }
        }
    }

    async fn fetch_one(&self, id: &str) -> Option<Record> {
        let value = self.fetch_route(&format!("{}{}", routes::BY_ID, id)).await?;
        match serde_json::from_value::<Record>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                error!(id, error = %e, "malformed record");
                None
            }
        }
    }

    // ── Home / About ──

    /// Show the home message of an already-downloaded payload.
    pub fn display_home(&self, input: Option<&Value>) {
        let info = normalize(input, HOME_FIELDS);
        self.presenter.present(titles::HOME, &info.mensaje);
    }

    /// Show the about box of an already-downloaded payload.
    pub fn display_about(&self, input: Option<&Value>) {
        let info = normalize(input, ABOUT_FIELDS);
        self.presenter.present(titles::ABOUT, &about_html(&info));
    }

    pub async fn show_home(&self) {
        if let Some(value) = self.fetch_route(routes::HOME).await {
            self.display_home(Some(&value));
        }
    }

    pub async fn show_about(&self) {
        if let Some(value) = self.fetch_route(routes::ABOUT).await {
            self.display_about(Some(&value));
        }
    }

    // ── Rendering ──

    /// Full table titled "Listado de plantillas".
    pub fn print(&self, records: &[Record]) {
        self.presenter
            .present(titles::LIST, &render_list(records, FieldSet::Full));
    }

    /// Names-only table titled "Listado de nombres".
    pub fn print_names(&self, records: &[Record]) {
        self.presenter
            .present(titles::NAMES, &render_list(records, FieldSet::NamesOnly));
    }

    pub fn print_one(&self, record: &Record) {
        self.presenter
            .present(titles::ONE, &render_one(record, FieldSet::Full));
    }

    // ── List operations ──

    pub async fn list_all(&self) {
        if let Some(records) = self.fetch_all().await {
            self.print(&records);
        }
    }

    pub async fn list_names(&self) {
        if let Some(records) = self.fetch_all().await {
            self.print_names(&records);
        }
    }

    pub async fn list_sorted_by_surname(&self) {
        if let Some(mut records) = self.fetch_all().await {
            sort_by_text(&mut records, Field::Apellidos);
            self.print_names(&records);
        }
    }

    /// Case-insensitive sort on a field's text.
    pub async fn list_by_field(&self, field: Field) {
        if let Some(mut records) = self.fetch_all().await {
            debug!(%field, "sorting by text");
            sort_by_text(&mut records, field);
            self.print(&records);
        }
    }

    /// Numeric sort on a field; non-numeric values go last.
    pub async fn list_by_numeric_field(&self, field: Field) {
        if let Some(mut records) = self.fetch_all().await {
            debug!(%field, "sorting by number");
            sort_by_number(&mut records, field);
            self.print(&records);
        }
    }

    /// Case- and accent-insensitive sort on a nested field.
    pub async fn list_by_nested_field(&self, field: Field) {
        if let Some(mut records) = self.fetch_all().await {
            debug!(%field, "sorting by folded text");
            sort_by_folded(&mut records, field);
            self.print(&records);
        }
    }

    /// Keep records whose first name is exactly `nombre`.
    pub async fn filter_by_name(&self, nombre: &str) {
        if let Some(records) = self.fetch_all().await {
            self.print(&filter_by_name(records, nombre));
        }
    }

    /// Keep records matching every criterion.
    pub async fn search_all(&self, nombre: &str, localidad: &str, estilo: &str, anio: &str) {
        if let Some(records) = self.fetch_all().await {
            self.print(&search_all(records, nombre, localidad, estilo, anio));
        }
    }

    /// Keep records matching at least one criterion.
    pub async fn search_any(&self, nombre: &str, localidad: &str, estilo: &str, pais: &str) {
        if let Some(records) = self.fetch_all().await {
            self.print(&search_any(records, nombre, localidad, estilo, pais));
        }
    }

    pub async fn get_one(&self, id: &str) {
        if let Some(record) = self.fetch_one(id).await {
            self.print_one(&record);
        }
    }
}

pub fn filter_by_name(records: Vec<Record>, nombre: &str) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| r.data.nombre_completo.nombre == nombre)
        .collect()
}

pub fn search_all(
    records: Vec<Record>,
    nombre: &str,
    localidad: &str,
    estilo: &str,
    anio: &str,
) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| {
            r.data.nombre_completo.nombre == nombre
                && r.data.direccion.localidad == localidad
                && r.data.mejor_estilo == estilo
                && r.participated_in(anio)
        })
        .collect()
}

pub fn search_any(
    records: Vec<Record>,
    nombre: &str,
    localidad: &str,
    estilo: &str,
    pais: &str,
) -> Vec<Record> {
    records
        .into_iter()
        .filter(|r| {
            r.data.nombre_completo.nombre == nombre
                || r.data.direccion.localidad == localidad
                || r.data.mejor_estilo == estilo
                || r.data.direccion.pais == pais
        })
        .collect()
}
