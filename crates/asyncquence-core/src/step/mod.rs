//! Definiciones relacionadas a Steps.
//!
//! Un Step es una unidad de trabajo diferido: recibe una `Continuation` y, en
//! algún momento futuro (posiblemente desde otro hilo), la resuelve con
//! `Decision::Continue` o `Decision::Halt`. Este módulo define:
//! - `Step`: interfaz neutral usada por el driver de la cadena.
//! - `Continuation`: handle de un solo uso que conecta el step con el driver.
//! - `Decision`: vocabulario de control `{Continue, Halt}`.
//! - Adaptadores para closures estilo callback (`CallbackStep`) y closures
//!   asíncronas (`AsyncStep`).

pub mod adapters;
mod continuation;
mod decision;
pub mod definition;

pub use adapters::{callback, from_future, named_callback, named_future, AsyncStep, CallbackStep};
pub use continuation::Continuation;
pub use decision::Decision;
pub use definition::{BoxedStep, Step};
