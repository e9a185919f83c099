//! Macro para declarar una cadena a partir de una lista literal de bloques.
//!
//! ```ignore
//! let chain = asyncquence![
//!     |next| { log::info!("Test1"); next.proceed() },
//!     |next| { log::info!("Test2"); next.halt() },
//!     |next| { log::info!("Test3"); next.proceed() },
//! ];
//! chain.run().await;
//! ```

/// Construye una `Chain` con un `CallbackStep` por cada closure.
///
/// Formas soportadas:
/// - `asyncquence![]` — cadena vacía.
/// - `asyncquence![f1, f2, ...]` — closures `FnOnce(Continuation)`.
/// - `asyncquence![name1 => f1, name2 => f2, ...]` — steps con nombre.
#[macro_export]
macro_rules! asyncquence {
    () => {
        $crate::Chain::new()
    };
    ($($name:literal => $step:expr),+ $(,)?) => {{
        let mut chain = $crate::Chain::new();
        $( chain.add($crate::step::named_callback($name, $step)); )+
        chain
    }};
    ($($step:expr),+ $(,)?) => {{
        let mut chain = $crate::Chain::new();
        $( chain.add_fn($step); )+
        chain
    }};
}
