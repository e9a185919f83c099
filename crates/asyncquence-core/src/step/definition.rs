use async_trait::async_trait;

use super::Continuation;
use crate::constants::ANONYMOUS_STEP_NAME;

/// Trait que define un Step de la cadena.
///
/// `execute` se invoca exactamente una vez. La implementación puede resolver
/// `next` antes de retornar, moverlo a otro hilo/task para resolverlo más
/// tarde, o descartarlo (la cadena se detiene). El driver reacciona a la
/// resolución de `next`, no al fin de `execute`: en cuanto `next` se resuelve,
/// el future de `execute` se descarta aunque siga pendiente.
#[async_trait]
pub trait Step: Send {
    /// Nombre amigable para logs y eventos.
    fn name(&self) -> &str {
        ANONYMOUS_STEP_NAME
    }

    async fn execute(&mut self, next: Continuation);
}

pub type BoxedStep = Box<dyn Step>;

#[async_trait]
impl Step for BoxedStep {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn execute(&mut self, next: Continuation) {
        (**self).execute(next).await
    }
}
