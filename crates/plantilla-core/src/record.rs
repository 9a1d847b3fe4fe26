//! Person records as served by `/plantilla/getTodos` and `/plantilla/getPorId/:id`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One person stored by MS Plantilla, with its database reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ref")]
    pub reference: RecordRef,
    pub data: Persona,
}

/// Database reference wrapper: `{ "@ref": { "id": "..." } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordRef {
    #[serde(rename = "@ref")]
    pub inner: RefId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefId {
    pub id: String,
}

/// Body of `/plantilla/getTodos`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPage {
    pub data: Vec<Record>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    #[serde(rename = "Nombre_completo")]
    pub nombre_completo: NombreCompleto,
    #[serde(rename = "Fecha")]
    pub fecha: Fecha,
    #[serde(rename = "Direccion")]
    pub direccion: Direccion,
    /// Number, numeric string, or list of years depending on the source row.
    #[serde(rename = "Anios_participacion_en_mundial")]
    pub anios_participacion: Value,
    #[serde(rename = "Num_participaciones_mundiales_JJOO")]
    pub num_participaciones: Value,
    #[serde(rename = "Mejor_estilo_natacion")]
    pub mejor_estilo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NombreCompleto {
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Apellidos")]
    pub apellidos: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fecha {
    pub dia: Value,
    pub mes: Value,
    #[serde(rename = "año")]
    pub anio: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Direccion {
    pub calle: String,
    pub localidad: String,
    pub provincia: String,
    pub pais: String,
}

impl Record {
    /// Stable identifier used to tag rendered rows.
    pub fn id(&self) -> &str {
        &self.reference.inner.id
    }

    /// Text of a single field, as it appears inside a table cell.
    pub fn field_text(&self, field: Field) -> String {
        let d = &self.data;
        match field {
            Field::Nombre => d.nombre_completo.nombre.clone(),
            Field::Apellidos => d.nombre_completo.apellidos.clone(),
            Field::Dia => value_text(&d.fecha.dia),
            Field::Mes => value_text(&d.fecha.mes),
            Field::Anio => value_text(&d.fecha.anio),
            Field::Calle => d.direccion.calle.clone(),
            Field::Localidad => d.direccion.localidad.clone(),
            Field::Provincia => d.direccion.provincia.clone(),
            Field::Pais => d.direccion.pais.clone(),
            Field::AniosParticipacion => value_text(&d.anios_participacion),
            Field::NumParticipaciones => value_text(&d.num_participaciones),
            Field::MejorEstilo => d.mejor_estilo.clone(),
        }
    }

    /// Whether the participation years include `year`.
    ///
    /// A list matches when any element renders as `year`; a scalar matches
    /// when its own text is `year`.
    pub fn participated_in(&self, year: &str) -> bool {
        match &self.data.anios_participacion {
            Value::Array(items) => items.iter().any(|v| value_text(v) == year),
            other => value_text(other) == year,
        }
    }
}

/// Leaf fields of a [`Record`] that list operations can sort or filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Nombre,
    Apellidos,
    Dia,
    Mes,
    Anio,
    Calle,
    Localidad,
    Provincia,
    Pais,
    AniosParticipacion,
    NumParticipaciones,
    MejorEstilo,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Nombre,
        Field::Apellidos,
        Field::Dia,
        Field::Mes,
        Field::Anio,
        Field::Calle,
        Field::Localidad,
        Field::Provincia,
        Field::Pais,
        Field::AniosParticipacion,
        Field::NumParticipaciones,
        Field::MejorEstilo,
    ];

    /// Top-level key in `data`, e.g. `Direccion` for [`Field::Localidad`].
    pub fn group(self) -> &'static str {
        match self {
            Field::Nombre | Field::Apellidos => "Nombre_completo",
            Field::Dia | Field::Mes | Field::Anio => "Fecha",
            Field::Calle | Field::Localidad | Field::Provincia | Field::Pais => "Direccion",
            Field::AniosParticipacion => "Anios_participacion_en_mundial",
            Field::NumParticipaciones => "Num_participaciones_mundiales_JJOO",
            Field::MejorEstilo => "Mejor_estilo_natacion",
        }
    }

    /// Key inside the group object, `None` for top-level scalars.
    pub fn key(self) -> Option<&'static str> {
        match self {
            Field::Nombre => Some("Nombre"),
            Field::Apellidos => Some("Apellidos"),
            Field::Dia => Some("dia"),
            Field::Mes => Some("mes"),
            Field::Anio => Some("año"),
            Field::Calle => Some("calle"),
            Field::Localidad => Some("localidad"),
            Field::Provincia => Some("provincia"),
            Field::Pais => Some("pais"),
            Field::AniosParticipacion | Field::NumParticipaciones | Field::MejorEstilo => None,
        }
    }

    /// Look up a top-level scalar field by its JSON name.
    pub fn top_level(name: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| f.key().is_none() && f.group() == name)
    }

    /// Look up a nested field by `(group, key)`, e.g. `("Direccion", "localidad")`.
    pub fn nested(name: &str, subname: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| f.group() == name && f.key() == Some(subname))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            Some(key) => write!(f, "{}.{}", self.group(), key),
            None => f.write_str(self.group()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown record field: {0}")]
pub struct UnknownField(pub String);

/// Accepts `Mejor_estilo_natacion` or dotted paths such as `Direccion.localidad`.
impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = match s.split_once('.') {
            Some((name, subname)) => Field::nested(name, subname),
            None => Field::top_level(s),
        };
        found.ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Render a JSON value the way a JavaScript template literal would.
///
/// Strings are verbatim, numbers use their shortest form, arrays are
/// comma-joined (null elements become empty) and objects collapse to
/// `[object Object]`.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => value_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    // serde_json prints 2.0 as "2.0"; f64's Display gives "2" like JavaScript.
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use serde_json::json;

    pub fn persona(id: &str, nombre: &str, apellidos: &str) -> Record {
        Record {
            reference: RecordRef {
                inner: RefId { id: id.into() },
            },
            data: Persona {
                nombre_completo: NombreCompleto {
                    nombre: nombre.into(),
                    apellidos: apellidos.into(),
                },
                fecha: Fecha {
                    dia: json!(1),
                    mes: json!(1),
                    anio: json!(2000),
                },
                direccion: Direccion {
                    calle: "Calle Falsa 123".into(),
                    localidad: "Springfield".into(),
                    provincia: "Estados Unidos".into(),
                    pais: "EEUU".into(),
                },
                anios_participacion: json!(2),
                num_participaciones: json!(1),
                mejor_estilo: "Mariposa".into(),
            },
        }
    }
}
