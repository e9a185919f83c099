//! Adaptadores de closures a `Step`.
//!
//! - `CallbackStep`: un bloque que recibe el callback de
//!   continuación y lo invoca cuando quiera (o nunca).
//! - `AsyncStep`: una closure que produce un future con la `Decision`; el
//!   driver lo espera y resuelve el handle con el resultado.
use std::borrow::Cow;
use std::future::Future;

use async_trait::async_trait;
use log::warn;

use super::{Continuation, Decision, Step};
use crate::constants::{ANONYMOUS_STEP_NAME, LOG_TARGET};

pub struct CallbackStep<F> {
    name: Cow<'static, str>,
    callback: Option<F>,
}

impl<F> CallbackStep<F> where F: FnOnce(Continuation) + Send + 'static
{
    pub fn new(callback: F) -> Self {
        Self { name: Cow::Borrowed(ANONYMOUS_STEP_NAME),
               callback: Some(callback) }
    }

    pub fn named(name: impl Into<Cow<'static, str>>, callback: F) -> Self {
        Self { name: name.into(),
               callback: Some(callback) }
    }
}

#[async_trait]
impl<F> Step for CallbackStep<F> where F: FnOnce(Continuation) + Send + 'static
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&mut self, next: Continuation) {
        match self.callback.take() {
            Some(callback) => callback(next),
            None => {
                warn!(target: LOG_TARGET, "step '{}' executed twice; halting", self.name);
                next.halt();
            }
        }
    }
}

pub struct AsyncStep<F> {
    name: Cow<'static, str>,
    factory: Option<F>,
}

impl<F, Fut> AsyncStep<F>
    where F: FnOnce() -> Fut + Send + 'static,
          Fut: Future<Output = Decision> + Send + 'static
{
    pub fn new(factory: F) -> Self {
        Self { name: Cow::Borrowed(ANONYMOUS_STEP_NAME),
               factory: Some(factory) }
    }

    pub fn named(name: impl Into<Cow<'static, str>>, factory: F) -> Self {
        Self { name: name.into(),
               factory: Some(factory) }
    }
}

#[async_trait]
impl<F, Fut> Step for AsyncStep<F>
    where F: FnOnce() -> Fut + Send + 'static,
          Fut: Future<Output = Decision> + Send + 'static
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&mut self, next: Continuation) {
        match self.factory.take() {
            Some(factory) => {
                let decision = factory().await;
                next.decide(decision);
            }
            None => {
                warn!(target: LOG_TARGET, "step '{}' executed twice; halting", self.name);
                next.halt();
            }
        }
    }
}

/// Step a partir de un bloque estilo callback.
pub fn callback<F>(f: F) -> CallbackStep<F>
    where F: FnOnce(Continuation) + Send + 'static
{
    CallbackStep::new(f)
}

pub fn named_callback<F>(name: impl Into<Cow<'static, str>>, f: F) -> CallbackStep<F>
    where F: FnOnce(Continuation) + Send + 'static
{
    CallbackStep::named(name, f)
}

/// Step a partir de una closure asíncrona que devuelve la decisión.
pub fn from_future<F, Fut>(f: F) -> AsyncStep<F>
    where F: FnOnce() -> Fut + Send + 'static,
          Fut: Future<Output = Decision> + Send + 'static
{
    AsyncStep::new(f)
}

pub fn named_future<F, Fut>(name: impl Into<Cow<'static, str>>, f: F) -> AsyncStep<F>
    where F: FnOnce() -> Fut + Send + 'static,
          Fut: Future<Output = Decision> + Send + 'static
{
    AsyncStep::named(name, f)
}
