//! Driver serial de la cadena.
//!
//! Para cada step: emitir `StepStarted`, invocar `execute` con una
//! continuación nueva y esperar su resolución, sin esperar a que `execute`
//! termine si el handle se resuelve antes. Sólo un step está activo a la
//! vez; el driver no lanza trabajo propio, únicamente espera.

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::{Chain, ChainOutcome};
use crate::constants::LOG_TARGET;
use crate::errors::ChainError;
use crate::event::{EventSink, ChainEventKind};
use crate::step::{Continuation, Decision};

/// Emisor de eventos de una ejecución concreta.
struct Trace {
    chain_id: Uuid,
    sink: Option<Arc<dyn EventSink>>,
}

impl Trace {
    fn emit(&self, kind: ChainEventKind) {
        if let Some(sink) = &self.sink {
            sink.record(self.chain_id, kind);
        }
    }
}

impl Chain {
    /// Ejecuta los steps en orden hasta que uno resuelva `Halt`, descarte su
    /// continuación o se agote la lista.
    ///
    /// Si un step retiene su continuación sin resolverla nunca, el future
    /// queda pendiente indefinidamente: no hay timeout.
    pub async fn run(self) -> ChainOutcome {
        let Chain { id, steps, sink } = self;
        let trace = Trace { chain_id: id, sink };
        let step_count = steps.len();

        debug!(target: LOG_TARGET, "chain {id}: start ({step_count} steps)");
        trace.emit(ChainEventKind::ChainStarted { step_count });

        for (index, mut step) in steps.into_iter().enumerate() {
            let name = step.name().to_string();
            debug!(target: LOG_TARGET, "chain {id}: step {index} '{name}' started");
            trace.emit(ChainEventKind::StepStarted { index, name: name.clone() });

            let (next, mut resolution) = Continuation::pair(index);
            // La resolución manda: si llega antes de que `execute` termine, el
            // resto de `execute` se descarta.
            let early = {
                let execution = step.execute(next);
                tokio::select! {
                    biased;
                    resolved = &mut resolution => Some(resolved),
                    _ = execution => None,
                }
            };
            // Un step que guardó su handle en sí mismo ya no puede resolverlo.
            drop(step);
            let resolved = match early {
                Some(resolved) => resolved,
                None => resolution.await,
            };

            match resolved {
                Ok(decision) => {
                    debug!(target: LOG_TARGET, "chain {id}: step {index} '{name}' resolved {decision:?}");
                    trace.emit(ChainEventKind::StepResolved { index, name, decision });
                    if decision == Decision::Halt {
                        info!(target: LOG_TARGET, "chain {id}: halted at step {index}");
                        trace.emit(ChainEventKind::ChainHalted { index });
                        return ChainOutcome::Halted { index };
                    }
                }
                Err(_) => {
                    warn!(target: LOG_TARGET, "chain {id}: step {index} '{name}' dropped its continuation; chain stalled");
                    trace.emit(ChainEventKind::ChainStalled { index });
                    return ChainOutcome::Stalled { index };
                }
            }
        }

        info!(target: LOG_TARGET, "chain {id}: exhausted after {step_count} steps");
        trace.emit(ChainEventKind::ChainExhausted { executed: step_count });
        ChainOutcome::Exhausted { executed: step_count }
    }

    /// Lanza `run` en el runtime tokio actual y devuelve su `JoinHandle`.
    pub fn spawn(self) -> Result<JoinHandle<ChainOutcome>, ChainError> {
        let handle = Handle::try_current().map_err(|_| ChainError::NoRuntime)?;
        Ok(handle.spawn(self.run()))
    }

    /// Fire-and-forget: lanza la cadena y no reporta nada al llamador. El
    /// resultado sólo es observable vía side channels, eventos o logs.
    pub fn go(self) {
        let id = self.id;
        if let Err(e) = self.spawn() {
            error!(target: LOG_TARGET, "chain {id}: cannot start: {e}");
        }
    }
}

/// Construye y ejecuta una cadena a partir de una lista de steps.
pub async fn run_all<I>(steps: I) -> ChainOutcome
    where I: IntoIterator<Item = crate::step::BoxedStep>
{
    Chain::from_steps(steps).run().await
}
