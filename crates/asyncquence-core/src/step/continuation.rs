use std::fmt;

use log::warn;
use tokio::sync::oneshot;

use super::Decision;
use crate::constants::LOG_TARGET;
use crate::errors::ChainError;

/// Handle de continuación entregado a cada step.
///
/// Se consume por valor al resolverse, por lo que no puede invocarse dos veces.
/// Es `Send`: puede moverse a otro hilo o task y resolverse desde allí.
/// Descartarlo sin resolver equivale a no invocar nunca el callback: la cadena
/// se detiene en ese step (stall).
pub struct Continuation {
    index: usize,
    sender: oneshot::Sender<Decision>,
}

impl Continuation {
    /// Crea el handle para el step `index` junto con el receptor que espera el
    /// driver.
    pub(crate) fn pair(index: usize) -> (Self, oneshot::Receiver<Decision>) {
        let (sender, receiver) = oneshot::channel();
        (Self { index, sender }, receiver)
    }

    /// Posición (0-based) del step dueño de este handle.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// `true` si el driver ya no espera la resolución (el future de `run` fue
    /// descartado).
    #[inline]
    pub fn is_abandoned(&self) -> bool {
        self.sender.is_closed()
    }

    /// Resuelve el step con `decision`.
    pub fn resolve(self, decision: Decision) -> Result<(), ChainError> {
        self.sender.send(decision).map_err(|_| ChainError::DriverGone)
    }

    /// Igual que `resolve`, pero registra el error en vez de devolverlo.
    pub fn decide(self, decision: Decision) {
        let index = self.index;
        if let Err(e) = self.resolve(decision) {
            warn!(target: LOG_TARGET, "step {index} resolved with {decision:?}: {e}");
        }
    }

    /// Avanza al siguiente step.
    #[inline]
    pub fn proceed(self) {
        self.decide(Decision::Continue)
    }

    /// Detiene la cadena.
    #[inline]
    pub fn halt(self) {
        self.decide(Decision::Halt)
    }
}

impl fmt::Debug for Continuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Continuation")
         .field("index", &self.index)
         .field("abandoned", &self.is_abandoned())
         .finish()
    }
}
