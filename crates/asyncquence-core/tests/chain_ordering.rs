use std::sync::{Arc, Mutex};

use asyncquence_core::step::named_callback;
use asyncquence_core::{Chain, ChainOutcome, Continuation, Decision};

type Seen = Arc<Mutex<Vec<usize>>>;

/// Step que registra su índice y resuelve con `decision`.
fn recording_step(seen: &Seen, label: usize, decision: Decision) -> impl FnOnce(Continuation) + Send + 'static {
    let seen = Arc::clone(seen);
    move |next: Continuation| {
        seen.lock().expect("lock").push(label);
        next.decide(decision);
    }
}

#[tokio::test]
async fn all_continue_runs_every_step_once_in_order() {
    let seen: Seen = Arc::default();
    let mut chain = Chain::new();
    for i in 0..5 {
        chain.add_fn(recording_step(&seen, i, Decision::Continue));
    }

    let outcome = chain.run().await;

    assert_eq!(outcome, ChainOutcome::Exhausted { executed: 5 });
    assert_eq!(*seen.lock().expect("lock"), vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn halt_at_k_skips_remaining_steps() {
    for k in 0..4 {
        let seen: Seen = Arc::default();
        let mut chain = Chain::new();
        for i in 0..4 {
            let decision = if i == k { Decision::Halt } else { Decision::Continue };
            chain.add_fn(recording_step(&seen, i, decision));
        }

        let outcome = chain.run().await;

        assert_eq!(outcome, ChainOutcome::Halted { index: k });
        assert_eq!(*seen.lock().expect("lock"), (0..=k).collect::<Vec<_>>());
    }
}

#[tokio::test]
async fn continue_halt_continue_yields_first_two() {
    let seen: Arc<Mutex<Vec<&'static str>>> = Arc::default();
    let (a, b, c) = (Arc::clone(&seen), Arc::clone(&seen), Arc::clone(&seen));

    let chain = Chain::new().then(named_callback("A", move |next: Continuation| {
                                a.lock().expect("lock").push("A");
                                next.proceed();
                            }))
                            .then(named_callback("B", move |next: Continuation| {
                                b.lock().expect("lock").push("B");
                                next.halt();
                            }))
                            .then(named_callback("C", move |next: Continuation| {
                                c.lock().expect("lock").push("C");
                                next.proceed();
                            }));

    assert_eq!(chain.run().await, ChainOutcome::Halted { index: 1 });
    assert_eq!(*seen.lock().expect("lock"), vec!["A", "B"]);
}

#[tokio::test]
async fn conditional_append_controls_executed_sequence() {
    let seen: Seen = Arc::default();
    let mut chain = Chain::new();
    chain.add_fn(recording_step(&seen, 0, Decision::Continue))
         .add_if(false, named_callback("off", recording_step(&seen, 99, Decision::Continue)))
         .add_if(true, named_callback("on", recording_step(&seen, 1, Decision::Continue)))
         .add_unless(true, named_callback("off_unless", recording_step(&seen, 98, Decision::Continue)))
         .add_fn(recording_step(&seen, 2, Decision::Continue));

    assert_eq!(chain.run().await, ChainOutcome::Exhausted { executed: 3 });
    assert_eq!(*seen.lock().expect("lock"), vec![0, 1, 2]);
}

#[tokio::test]
async fn empty_chain_completes_without_running_anything() {
    let outcome = Chain::new().run().await;
    assert_eq!(outcome, ChainOutcome::Exhausted { executed: 0 });
    assert_eq!(outcome.executed(), 0);
}

#[tokio::test]
async fn async_steps_are_awaited_in_order() {
    let seen: Seen = Arc::default();
    let mut chain = Chain::new();
    for i in 0..3 {
        let seen = Arc::clone(&seen);
        chain.add(asyncquence_core::step::from_future(move || async move {
                 // el primer step tarda más: el orden no debe depender del tiempo
                 tokio::time::sleep(std::time::Duration::from_millis(((3 - i) * 10) as u64)).await;
                 seen.lock().expect("lock").push(i);
                 Decision::Continue
             }));
    }

    assert!(chain.run().await.is_exhausted());
    assert_eq!(*seen.lock().expect("lock"), vec![0, 1, 2]);
}
