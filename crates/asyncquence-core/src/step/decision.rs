use serde::{Deserialize, Serialize};

/// Señal con la que un step resuelve su `Continuation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Avanzar al siguiente step (o terminar si no quedan).
    Continue,
    /// Detener la cadena. No distingue entre parada deliberada y fallo.
    Halt,
}

impl Decision {
    #[inline]
    pub fn is_continue(self) -> bool {
        matches!(self, Decision::Continue)
    }

    #[inline]
    pub fn is_halt(self) -> bool {
        matches!(self, Decision::Halt)
    }
}

/// `true` significa continuar; útil para steps que derivan la decisión de una
/// condición (`next.decide((status == 200).into())`).
impl From<bool> for Decision {
    fn from(advance: bool) -> Self {
        if advance { Decision::Continue } else { Decision::Halt }
    }
}
