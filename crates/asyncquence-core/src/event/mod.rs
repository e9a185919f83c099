//! Traza de ejecución de cadenas.
//!
//! El driver emite un `ChainEvent` por cada transición observable (inicio,
//! step iniciado/resuelto, parada). Los eventos van a un `EventSink` opcional;
//! sin sink la cadena sólo registra vía `log`.

mod sink;
mod types;

pub use sink::{EventSink, InMemoryEventSink};
pub use types::{ChainEvent, ChainEventKind};
