//! HTML table rendering for record listings.
//!
//! Header and footer are fixed per [`FieldSet`]; each record becomes one
//! `<tr>` tagged with its id so the page can bind actions to it later.
//! Cell values are interpolated verbatim.

use crate::record::{Field, Record};

const FULL_HEADER: &str = r#"<table class="listado-plantilla"><thead><th>Nombre</th><th>Apellidos</th><th>Fecha</th><th>Direccion</th><th>Años participación</th><th>Nº participaciones mundiales en JJOO</th><th>Mejor estilo de natación</th></thead><tbody>"#;

const NAMES_HEADER: &str = r#"<table class="listado-plantilla"><thead><th>Nombres</th><th>Apellidos</th></thead><tbody>"#;

const FOOTER: &str = "</tbody></table>";

/// Which columns a table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSet {
    /// Name, surname, date, address, and the three swimming columns.
    Full,
    /// Name and surname only.
    NamesOnly,
}

impl FieldSet {
    pub fn header(self) -> &'static str {
        match self {
            FieldSet::Full => FULL_HEADER,
            FieldSet::NamesOnly => NAMES_HEADER,
        }
    }

    pub fn footer(self) -> &'static str {
        FOOTER
    }

    /// One `<tr>` for `record`.
    pub fn row(self, record: &Record) -> String {
        let cells = match self {
            FieldSet::Full => full_cells(record),
            FieldSet::NamesOnly => vec![
                record.field_text(Field::Nombre),
                record.field_text(Field::Apellidos),
            ],
        };
        let mut tr = format!(r#"<tr title="{}">"#, record.id());
        for cell in cells {
            tr.push_str("<td>");
            tr.push_str(&cell);
            tr.push_str("</td>");
        }
        tr.push_str("</tr>");
        tr
    }
}

fn full_cells(r: &Record) -> Vec<String> {
    vec![
        r.field_text(Field::Nombre),
        r.field_text(Field::Apellidos),
        format!(
            "{}/{}/{}",
            r.field_text(Field::Dia),
            r.field_text(Field::Mes),
            r.field_text(Field::Anio)
        ),
        format!(
            "{}, {}, {}, {}",
            r.field_text(Field::Calle),
            r.field_text(Field::Localidad),
            r.field_text(Field::Provincia),
            r.field_text(Field::Pais)
        ),
        r.field_text(Field::AniosParticipacion),
        r.field_text(Field::NumParticipaciones),
        r.field_text(Field::MejorEstilo),
    ]
}

/// Header, one row per record in order, footer.
pub fn render_list(records: &[Record], set: FieldSet) -> String {
    let mut html = String::from(set.header());
    for record in records {
        html.push_str(&set.row(record));
    }
    html.push_str(set.footer());
    html
}

/// A one-row table for a single record.
pub fn render_one(record: &Record, set: FieldSet) -> String {
    render_list(std::slice::from_ref(record), set)
}
