//! asyncquence-core: ejecución secuencial de steps asíncronos.
//!
//! Una `Chain` ejecuta sus steps de a uno. Cada step recibe una
//! `Continuation` de un solo uso y la resuelve con `Decision::Continue` para
//! avanzar o `Decision::Halt` para detenerse; descartarla sin resolver también
//! detiene la cadena (stall). No hay canal de error: los steps comunican
//! resultados por side channels (`Capture`).
pub mod capture;
pub mod chain;
pub mod constants;
pub mod errors;
pub mod event;
pub mod macros;
pub mod step;

pub use capture::Capture;
pub use chain::{run_all, Chain, ChainOutcome};
pub use errors::ChainError;
pub use event::{ChainEvent, ChainEventKind, EventSink, InMemoryEventSink};
pub use step::{BoxedStep, Continuation, Decision, Step};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) + Clone + Send + 'static) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&log);
        (log, move |label| writer.lock().expect("lock").push(label))
    }

    #[tokio::test]
    async fn macro_chain_stops_at_halting_step() {
        let (seen, record) = recorder();
        let (r1, r2, r3) = (record.clone(), record.clone(), record);

        let chain = asyncquence![
            move |next: Continuation| { r1("Test1"); next.proceed() },
            move |next: Continuation| { r2("Test2"); next.halt() },
            move |next: Continuation| { r3("Test3"); next.proceed() },
        ];
        assert_eq!(chain.len(), 3);

        let outcome = chain.run().await;
        assert_eq!(outcome, ChainOutcome::Halted { index: 1 });
        assert_eq!(*seen.lock().expect("lock"), vec!["Test1", "Test2"]);
    }

    #[tokio::test]
    async fn named_macro_form_sets_step_names() {
        let sink = Arc::new(InMemoryEventSink::new());
        let chain = asyncquence![
            "fetch" => |next: Continuation| next.proceed(),
            "store" => |next: Continuation| next.proceed(),
        ];
        assert_eq!(chain.step_names(), vec!["fetch", "store"]);

        let chain = chain.with_event_sink(sink.clone());
        let id = chain.id();
        assert!(chain.run().await.is_exhausted());
        assert_eq!(sink.variant_codes(id), vec!["I", "S", "R", "S", "R", "C"]);
    }

    #[tokio::test]
    async fn empty_macro_chain_is_exhausted_immediately() {
        let outcome = asyncquence![].run().await;
        assert_eq!(outcome, ChainOutcome::Exhausted { executed: 0 });
    }

    #[tokio::test]
    async fn run_all_accepts_boxed_steps() {
        let steps: Vec<BoxedStep> = vec![Box::new(step::callback(|next| next.proceed())),
                                         Box::new(step::from_future(|| async { Decision::Halt })),
                                         Box::new(step::callback(|next| next.proceed()))];
        assert_eq!(run_all(steps).await, ChainOutcome::Halted { index: 1 });
    }
}
