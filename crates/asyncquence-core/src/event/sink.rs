use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::{ChainEvent, ChainEventKind};

/// Destino append-only de eventos. Compartido entre cadenas que pueden correr
/// en hilos distintos, por eso opera sobre `&self`.
pub trait EventSink: Send + Sync {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn record(&self, chain_id: Uuid, kind: ChainEventKind) -> ChainEvent;
    /// Lista eventos de una cadena (orden ascendente por seq).
    fn list(&self, chain_id: Uuid) -> Vec<ChainEvent>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventSink {
    inner: DashMap<Uuid, Vec<ChainEvent>>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids de las cadenas con al menos un evento.
    pub fn chain_ids(&self) -> Vec<Uuid> {
        self.inner.iter().map(|entry| *entry.key()).collect()
    }

    /// Extrae y descarta la traza de una cadena ya terminada.
    pub fn take(&self, chain_id: Uuid) -> Vec<ChainEvent> {
        self.inner.remove(&chain_id).map(|(_, events)| events).unwrap_or_default()
    }

    /// Descarta la traza de una cadena; `true` si existía.
    pub fn clear(&self, chain_id: Uuid) -> bool {
        self.inner.remove(&chain_id).is_some()
    }

    /// Secuencia de códigos de variante de una cadena (ver `ChainEventKind::variant_code`).
    pub fn variant_codes(&self, chain_id: Uuid) -> Vec<&'static str> {
        self.list(chain_id).iter().map(|e| e.kind.variant_code()).collect()
    }
}

impl EventSink for InMemoryEventSink {
    fn record(&self, chain_id: Uuid, kind: ChainEventKind) -> ChainEvent {
        let mut events = self.inner.entry(chain_id).or_default();
        let seq = events.len() as u64;
        let ev = ChainEvent { seq, chain_id, kind, ts: Utc::now() };
        events.push(ev.clone());
        ev
    }

    fn list(&self, chain_id: Uuid) -> Vec<ChainEvent> {
        self.inner.get(&chain_id).map(|events| events.value().clone()).unwrap_or_default()
    }
}
