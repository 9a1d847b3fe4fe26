pub mod error;
pub mod info;
pub mod plantilla;
pub mod ports;
pub mod record;
pub mod sort_key;
pub mod table;

pub use error::GatewayError;
pub use info::{DownloadedInfo, NULL_INFO, normalize};
pub use plantilla::Plantilla;
pub use ports::{Alert, Gateway, Presenter};
pub use record::{Field, Record, UnknownField};
pub use table::FieldSet;
