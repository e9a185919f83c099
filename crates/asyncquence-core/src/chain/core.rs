//! Construcción de `Chain`.
//!
//! Los append condicionales evalúan la condición en el momento del append: son
//! una comodidad para armar la lista, no una bifurcación en tiempo de
//! ejecución. Hay dos estilos equivalentes:
//!
//! ```ignore
//! // Mutable:
//! let mut chain = Chain::new();
//! chain.add_fn(|next| next.proceed());
//! chain.add_if(needs_upload, upload_step);
//!
//! // Builder encadenado:
//! let chain = Chain::new().then(fetch_step).then_unless(offline, sync_step);
//! ```

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::event::EventSink;
use crate::step::{BoxedStep, CallbackStep, Continuation, Step};

/// Lista ordenada de steps + configuración de observación.
///
/// El orden de inserción es el orden de ejecución. La cadena es dueña
/// exclusiva de sus steps; `run` la consume.
pub struct Chain {
    pub(crate) id: Uuid,
    pub(crate) steps: Vec<BoxedStep>,
    pub(crate) sink: Option<Arc<dyn EventSink>>,
}

impl Default for Chain {
    fn default() -> Self {
        Self { id: Uuid::new_v4(),
               steps: Vec::new(),
               sink: None }
    }
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construye una cadena a partir de una lista de steps ya boxeados.
    pub fn from_steps<I>(steps: I) -> Self
        where I: IntoIterator<Item = BoxedStep>
    {
        Self { steps: steps.into_iter().collect(),
               ..Self::default() }
    }

    /// Identificador usado en logs y eventos.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Nombres de los steps en orden de ejecución.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Adjunta un sink que recibirá la traza de la ejecución.
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    // ---------------- append mutable ----------------

    /// Agrega `step` al final de la cadena.
    pub fn add<S>(&mut self, step: S) -> &mut Self
        where S: Step + 'static
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Agrega un bloque estilo callback al final de la cadena.
    pub fn add_fn<F>(&mut self, f: F) -> &mut Self
        where F: FnOnce(Continuation) + Send + 'static
    {
        self.add(CallbackStep::new(f))
    }

    /// Agrega `step` sólo si `condition` es verdadera.
    pub fn add_if<S>(&mut self, condition: bool, step: S) -> &mut Self
        where S: Step + 'static
    {
        if condition {
            self.add(step);
        }
        self
    }

    /// Agrega `step` sólo si `condition` es falsa.
    pub fn add_unless<S>(&mut self, condition: bool, step: S) -> &mut Self
        where S: Step + 'static
    {
        self.add_if(!condition, step)
    }

    /// Agrega `step` si `predicate` devuelve `true`. El predicado se evalúa
    /// una sola vez, ahora.
    pub fn add_when<S, P>(&mut self, predicate: P, step: S) -> &mut Self
        where S: Step + 'static,
              P: FnOnce() -> bool
    {
        self.add_if(predicate(), step)
    }

    // ---------------- builder ----------------

    #[inline]
    pub fn then<S>(mut self, step: S) -> Self
        where S: Step + 'static
    {
        self.add(step);
        self
    }

    #[inline]
    pub fn then_fn<F>(mut self, f: F) -> Self
        where F: FnOnce(Continuation) + Send + 'static
    {
        self.add_fn(f);
        self
    }

    #[inline]
    pub fn then_if<S>(mut self, condition: bool, step: S) -> Self
        where S: Step + 'static
    {
        self.add_if(condition, step);
        self
    }

    #[inline]
    pub fn then_unless<S>(mut self, condition: bool, step: S) -> Self
        where S: Step + 'static
    {
        self.add_unless(condition, step);
        self
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
         .field("id", &self.id)
         .field("steps", &self.step_names())
         .field("observed", &self.sink.is_some())
         .finish()
    }
}

impl FromIterator<BoxedStep> for Chain {
    fn from_iter<I: IntoIterator<Item = BoxedStep>>(iter: I) -> Self {
        Self::from_steps(iter)
    }
}

impl Extend<BoxedStep> for Chain {
    fn extend<I: IntoIterator<Item = BoxedStep>>(&mut self, iter: I) {
        self.steps.extend(iter);
    }
}
