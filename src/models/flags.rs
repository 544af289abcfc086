// ============================================================================
// FEATURE FLAGS - Evaluación pura de toggles de UI opcional
// ============================================================================

/// Conjunto completo de flags. Se recalcula SIEMPRE como objeto entero
/// (nunca campo a campo) para que los consumidores no vean estados a medias.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub sync_settings: bool,
}

impl FeatureFlags {
    /// Evalúa los flags a partir de la query string actual y del valor
    /// persistido bajo `nekogata-debug-sync`.
    ///
    /// `sync_settings` se habilita si CUALQUIERA de:
    /// - existe el parámetro `sync` (con o sin valor)
    /// - `debug` vale exactamente `sync`
    /// - el valor persistido es exactamente el string `"true"`
    pub fn evaluate(query: &str, stored_debug_sync: Option<&str>) -> Self {
        let sync_settings = query_param_present(query, "sync")
            || query_param_eq(query, "debug", "sync")
            || stored_debug_sync == Some("true");

        Self { sync_settings }
    }
}

fn query_pairs(query: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|p| match p.split_once('=') {
            Some((k, v)) => (k, Some(v)),
            None => (p, None),
        })
}

fn query_param_present(query: &str, name: &str) -> bool {
    query_pairs(query).any(|(k, _)| k == name)
}

fn query_param_eq(query: &str, name: &str, value: &str) -> bool {
    query_pairs(query).any(|(k, v)| k == name && v == Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parametro_sync_habilita_con_o_sin_valor() {
        assert!(FeatureFlags::evaluate("?sync", None).sync_settings);
        assert!(FeatureFlags::evaluate("?sync=1", None).sync_settings);
        assert!(FeatureFlags::evaluate("?sync=false", None).sync_settings);
    }

    #[test]
    fn debug_sync_habilita_solo_con_valor_exacto() {
        assert!(FeatureFlags::evaluate("?debug=sync", None).sync_settings);
        assert!(!FeatureFlags::evaluate("?debug=other", None).sync_settings);
        assert!(!FeatureFlags::evaluate("?debug", None).sync_settings);
    }

    #[test]
    fn valor_persistido_exige_el_string_true() {
        assert!(FeatureFlags::evaluate("", Some("true")).sync_settings);
        assert!(!FeatureFlags::evaluate("", Some("false")).sync_settings);
        assert!(!FeatureFlags::evaluate("", Some("TRUE")).sync_settings);
        assert!(!FeatureFlags::evaluate("", None).sync_settings);
    }

    #[test]
    fn parametros_ajenos_no_afectan() {
        assert!(FeatureFlags::evaluate("?foo=1&debug=sync&bar", None).sync_settings);
        assert!(!FeatureFlags::evaluate("?foo=1&bar=2", None).sync_settings);
        // `mysync` no es `sync`
        assert!(!FeatureFlags::evaluate("?mysync", None).sync_settings);
    }

    #[test]
    fn query_vacia_y_sin_persistencia_queda_deshabilitado() {
        assert_eq!(FeatureFlags::evaluate("", None), FeatureFlags::default());
        assert_eq!(FeatureFlags::evaluate("?", None), FeatureFlags::default());
    }
}
