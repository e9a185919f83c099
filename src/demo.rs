//! Cadena de demostración: reproduce el ejemplo clásico `Test1 -> Test2 (End)
//! -> Test3` con steps asíncronos que simulan latencia.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use asyncquence_core::step::named_callback;
use asyncquence_core::{Capture, Chain, ChainEvent, ChainOutcome, Continuation, Decision, EventSink, InMemoryEventSink, Step};
use log::info;

use crate::config::DemoConfig;

/// Resultado observable de una corrida de la demo.
#[derive(Debug)]
pub struct DemoRun {
    pub outcome: ChainOutcome,
    /// Etiquetas de los steps en el orden en que se ejecutaron.
    pub transcript: Vec<String>,
    pub events: Vec<ChainEvent>,
}

struct LabelStep {
    label: String,
    delay: Duration,
    decision: Decision,
    transcript: Capture<Vec<String>>,
}

#[async_trait]
impl Step for LabelStep {
    fn name(&self) -> &str {
        &self.label
    }

    async fn execute(&mut self, next: Continuation) {
        tokio::time::sleep(self.delay).await;
        info!("{}", self.label);
        let label = self.label.clone();
        self.transcript.with(|slot| slot.get_or_insert_with(Vec::new).push(label));
        next.decide(self.decision);
    }
}

/// Arma la cadena de la demo. El step final `Done` sólo se agrega si la
/// configuración no pide detenerse antes.
pub fn build_chain(config: &DemoConfig, transcript: &Capture<Vec<String>>) -> Chain {
    let mut chain = Chain::new();
    for i in 0..config.steps {
        let decision = if config.halt_at == Some(i) { Decision::Halt } else { Decision::Continue };
        chain.add(LabelStep { label: format!("Test{}", i + 1),
                              delay: Duration::from_millis(config.step_delay_ms),
                              decision,
                              transcript: transcript.clone() });
    }
    let done = transcript.clone();
    chain.add_unless(config.halt_at.is_some_and(|k| k < config.steps),
                     named_callback("Done", move |next: Continuation| {
                         done.with(|slot| slot.get_or_insert_with(Vec::new).push("Done".to_string()));
                         next.proceed();
                     }));
    chain
}

pub async fn run(config: &DemoConfig) -> DemoRun {
    let transcript: Capture<Vec<String>> = Capture::new();
    let sink = Arc::new(InMemoryEventSink::new());
    let chain = build_chain(config, &transcript).with_event_sink(sink.clone());
    let chain_id = chain.id();

    let outcome = chain.run().await;
    info!("chain {chain_id} finished: {outcome:?}");

    DemoRun { outcome,
              transcript: transcript.take().unwrap_or_default(),
              events: sink.list(chain_id) }
}
