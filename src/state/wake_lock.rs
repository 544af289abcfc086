// ============================================================================
// WAKE LOCK LEDGER - Máquina de estados pura del wake lock
// ============================================================================
// Separa la INTENCIÓN del usuario (desired) del recurso realmente en mano
// (held). Las operaciones del usuario solo mutan `desired`, de forma
// síncrona; un bucle de reconciliación asíncrono (ver hooks/use_wake_lock)
// consulta `next_step()` después de CADA await y acerca `held` a `desired`.
// Así una ráfaga de toggles termina siempre en el estado que produciría
// aplicarlos serializados, por rápido que lleguen.
// ============================================================================

/// Siguiente paso que debe dar el reconciliador.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WakeLockStep {
    /// Hay que pedir el sentinel a la plataforma
    Acquire,
    /// Hay que soltar el sentinel en mano
    Release,
    /// Intención y recurso coinciden, nada que hacer
    Settled,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WakeLockLedger {
    desired: bool,
    held: bool,
}

impl WakeLockLedger {
    /// El usuario quiere el bloqueo activo. Idempotente si ya lo está.
    pub fn request(&mut self) {
        self.desired = true;
    }

    /// El usuario quiere el bloqueo inactivo. Idempotente si ya lo está.
    pub fn release(&mut self) {
        self.desired = false;
    }

    /// Invierte la intención actual (no el recurso: eso lo hace el
    /// reconciliador cuando le toque).
    pub fn toggle(&mut self) {
        self.desired = !self.desired;
    }

    /// La plataforma concedió el sentinel.
    pub fn acquired(&mut self) {
        self.held = true;
    }

    /// El sentinel ya no está en mano: lo soltamos nosotros o lo soltó el
    /// sistema por su cuenta. La intención NO cambia aquí; si sigue siendo
    /// "activo", visibilitychange re-adquirirá.
    pub fn lost(&mut self) {
        self.held = false;
    }

    /// La plataforma rechazó la petición. El intento es terminal: se
    /// abandona también la intención para no armar re-adquisiciones de un
    /// bloqueo que nunca se concedió.
    pub fn acquire_failed(&mut self) {
        self.desired = false;
    }

    /// Hay un recurso en mano ahora mismo.
    pub fn is_active(&self) -> bool {
        self.held
    }

    /// Última intención registrada del usuario.
    pub fn wants_lock(&self) -> bool {
        self.desired
    }

    pub fn next_step(&self) -> WakeLockStep {
        match (self.desired, self.held) {
            (true, false) => WakeLockStep::Acquire,
            (false, true) => WakeLockStep::Release,
            _ => WakeLockStep::Settled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Simula un reconciliador contra una plataforma que siempre concede.
    fn settle(ledger: &mut WakeLockLedger) {
        loop {
            match ledger.next_step() {
                WakeLockStep::Acquire => ledger.acquired(),
                WakeLockStep::Release => ledger.lost(),
                WakeLockStep::Settled => break,
            }
        }
    }

    #[test]
    fn rafaga_de_toggles_equivale_a_aplicarlos_en_orden() {
        for n in 0..=7 {
            let mut ledger = WakeLockLedger::default();
            // Todos los toggles llegan antes de que resuelva ningún await
            for _ in 0..n {
                ledger.toggle();
            }
            settle(&mut ledger);

            // Modelo serializado: cada toggle invierte el estado final
            let esperado = n % 2 == 1;
            assert_eq!(ledger.is_active(), esperado, "ráfaga de {} toggles", n);
            assert_eq!(ledger.next_step(), WakeLockStep::Settled);
        }
    }

    #[test]
    fn toggles_intercalados_con_resoluciones_parciales() {
        let mut ledger = WakeLockLedger::default();
        ledger.toggle(); // -> quiere activo
        ledger.acquired(); // la plataforma concede
        ledger.toggle(); // -> quiere inactivo, con el sentinel aún en mano
        ledger.toggle(); // -> quiere activo otra vez, antes de soltar nada
        settle(&mut ledger);
        assert!(ledger.is_active());
    }

    #[test]
    fn release_es_idempotente() {
        let mut ledger = WakeLockLedger::default();
        ledger.request();
        settle(&mut ledger);
        assert!(ledger.is_active());

        ledger.release();
        settle(&mut ledger);
        assert!(!ledger.is_active());

        // Segundo release sin nada en mano: no-op
        ledger.release();
        assert_eq!(ledger.next_step(), WakeLockStep::Settled);
        assert!(!ledger.is_active());
    }

    #[test]
    fn request_con_bloqueo_ya_en_mano_es_noop() {
        let mut ledger = WakeLockLedger::default();
        ledger.request();
        settle(&mut ledger);
        ledger.request();
        assert_eq!(ledger.next_step(), WakeLockStep::Settled);
    }

    #[test]
    fn liberacion_del_sistema_conserva_la_intencion() {
        let mut ledger = WakeLockLedger::default();
        ledger.request();
        settle(&mut ledger);

        // El SO suelta el lock al ocultar la pestaña
        ledger.lost();
        assert!(!ledger.is_active());
        assert!(ledger.wants_lock());

        // Al volver a ser visible, el reconciliador re-adquiere
        settle(&mut ledger);
        assert!(ledger.is_active());
    }

    #[test]
    fn peticion_rechazada_no_deja_intencion_armada() {
        let mut ledger = WakeLockLedger::default();
        ledger.toggle();
        assert_eq!(ledger.next_step(), WakeLockStep::Acquire);

        // La plataforma deniega el permiso
        ledger.acquire_failed();
        assert_eq!(ledger.next_step(), WakeLockStep::Settled);
        assert!(!ledger.is_active());
        assert!(!ledger.wants_lock());
    }
}
