//! Message payloads from the non-list routes (`/plantilla/`, `/plantilla/acercade`).

use std::borrow::Cow;

use serde_json::Value;

use crate::record::value_text;

/// Keys the home route must provide.
pub const HOME_FIELDS: &[&str] = &["mensaje"];

/// Keys the about route must provide.
pub const ABOUT_FIELDS: &[&str] = &["mensaje", "autor", "email", "fecha"];

/// Validated message payload ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedInfo {
    pub mensaje: Cow<'static, str>,
    pub autor: Cow<'static, str>,
    pub email: Cow<'static, str>,
    pub fecha: Cow<'static, str>,
}

/// Substituted whenever a downloaded payload fails validation.
pub const NULL_INFO: DownloadedInfo = DownloadedInfo {
    mensaje: Cow::Borrowed("Datos Descargados No válidos"),
    autor: Cow::Borrowed(""),
    email: Cow::Borrowed(""),
    fecha: Cow::Borrowed(""),
};

impl DownloadedInfo {
    pub fn is_null(&self) -> bool {
        *self == NULL_INFO
    }
}

/// Validate `input` against `required` and build the display payload.
///
/// Returns [`NULL_INFO`] when the input is absent, is not a JSON object, or
/// lacks any required key. A key holding `null` counts as present.
pub fn normalize(input: Option<&Value>, required: &[&str]) -> DownloadedInfo {
    let Some(Value::Object(map)) = input else {
        return NULL_INFO;
    };
    if !required.iter().all(|key| map.contains_key(*key)) {
        return NULL_INFO;
    }
    let text = |key: &str| -> Cow<'static, str> {
        map.get(key)
            .map(|v| Cow::Owned(value_text(v)))
            .unwrap_or(Cow::Borrowed(""))
    };
    DownloadedInfo {
        mensaje: text("mensaje"),
        autor: text("autor"),
        email: text("email"),
        fecha: text("fecha"),
    }
}

/// Body shown for the about route.
pub fn about_html(info: &DownloadedInfo) -> String {
    format!(
        "<div>
    <p>{}</p>
    <ul>
        <li><b>Autor/a</b>: {}</li>
        <li><b>E-mail</b>: {}</li>
        <li><b>Fecha</b>: {}</li>
    </ul>
    </div>
    ",
        info.mensaje, info.autor, info.email, info.fecha
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "mensaje": "Mensaje de prueba descargado",
            "autor": "Prueba de autor",
            "email": "Prueba de email",
            "fecha": "00/00/0000"
        })
    }

    #[test]
    fn absent_input_is_null_info() {
        assert!(normalize(None, HOME_FIELDS).is_null());
        assert!(normalize(None, ABOUT_FIELDS).is_null());
    }

    #[test]
    fn non_object_input_is_null_info() {
        for input in [json!(23), json!("texto"), json!(null), json!(false), json!([1, 2])] {
            assert_eq!(normalize(Some(&input), HOME_FIELDS), NULL_INFO);
            assert_eq!(normalize(Some(&input), ABOUT_FIELDS), NULL_INFO);
        }
    }

    #[test]
    fn home_requires_mensaje() {
        assert!(normalize(Some(&json!({})), HOME_FIELDS).is_null());
        assert!(normalize(Some(&json!({ "foo": "bar" })), HOME_FIELDS).is_null());

        let info = normalize(Some(&json!({ "mensaje": "hola" })), HOME_FIELDS);
        assert_eq!(info.mensaje, "hola");
        assert_eq!(info.autor, "");
    }

    #[test]
    fn about_requires_all_four_fields() {
        let full = sample();
        for missing in ABOUT_FIELDS {
            let mut partial = full.clone();
            partial.as_object_mut().unwrap().remove(*missing);
            assert!(
                normalize(Some(&partial), ABOUT_FIELDS).is_null(),
                "expected NULL_INFO without {missing}"
            );
        }
        assert!(!normalize(Some(&full), ABOUT_FIELDS).is_null());
    }

    #[test]
    fn about_html_contains_payload_values() {
        let info = normalize(Some(&sample()), ABOUT_FIELDS);
        let html = about_html(&info);
        assert!(html.contains("<p>Mensaje de prueba descargado</p>"));
        assert!(html.contains("Prueba de autor"));
        assert!(html.contains("Prueba de email"));
        assert!(html.contains("00/00/0000"));
    }

    #[test]
    fn about_html_for_null_info_shows_diagnostic() {
        let html = about_html(&NULL_INFO);
        assert!(html.contains("Datos Descargados No válidos"));
    }

    #[test]
    fn non_string_values_render_as_text() {
        let info = normalize(Some(&json!({ "mensaje": 42 })), HOME_FIELDS);
        assert_eq!(info.mensaje, "42");
    }
}
