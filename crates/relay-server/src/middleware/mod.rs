//! Middleware stack para el servidor HTTP.
//!
//! Se aplica a todas las rutas, incluidas las de playlists:
//! - `RequestIdLayer`: genera o propaga `x-request-id`
//! - `LoggingLayer`: abre un span por request y registra status y duracion

mod logging;
mod request_id;

pub use logging::{LoggingLayer, LoggingMiddleware};
pub use request_id::{REQUEST_ID_HEADER, RequestIdLayer, RequestIdMiddleware, request_id_of};
