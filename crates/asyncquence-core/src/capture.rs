//! Side channel compartido entre steps y llamador.
//!
//! La cadena sólo entiende `{Continue, Halt}`; resultados y errores viajan por
//! fuera. `Capture<T>` es un slot clonable que un step escribe y el llamador
//! lee cuando la ejecución termina.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub struct Capture<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> Capture<T> {
    pub fn new() -> Self {
        Self { slot: Arc::new(Mutex::new(None)) }
    }

    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        // un panic en otro step no invalida el valor guardado
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Guarda `value` y devuelve el valor anterior, si había.
    pub fn set(&self, value: T) -> Option<T> {
        self.lock().replace(value)
    }

    /// Extrae el valor dejando el slot vacío.
    pub fn take(&self) -> Option<T> {
        self.lock().take()
    }

    pub fn is_set(&self) -> bool {
        self.lock().is_some()
    }

    /// Acceso exclusivo al slot, para actualizaciones in-place (p. ej. acumular
    /// en un `Vec`).
    pub fn with<R>(&self, f: impl FnOnce(&mut Option<T>) -> R) -> R {
        f(&mut self.lock())
    }
}

impl<T: Clone> Capture<T> {
    pub fn get(&self) -> Option<T> {
        self.lock().clone()
    }
}

impl<T> Clone for Capture<T> {
    fn clone(&self) -> Self {
        Self { slot: Arc::clone(&self.slot) }
    }
}

impl<T> Default for Capture<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Capture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Capture").field(&*self.lock()).finish()
    }
}
