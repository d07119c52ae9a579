use std::env;

#[derive(Clone, Debug)]
pub(crate) struct ServiceContext {
    pub(crate) service_name: String,
    pub(crate) environment: String,
    pub(crate) component: String,
}

#[derive(Clone, Debug)]
pub(crate) struct ObservabilityConfig {
    pub(crate) service_context: ServiceContext,
}

impl ObservabilityConfig {
    pub(crate) fn from_env(component: &str) -> Self {
        Self::from_lookup(component, |key| env::var(key).ok())
    }

    fn from_lookup(component: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let component = component.trim().to_string();

        let service_name = lookup("SERVICE_NAME")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| component.clone());

        let environment = lookup("STAGE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            service_context: ServiceContext {
                service_name,
                environment,
                component,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_component_and_unknown_stage() {
        let config = ObservabilityConfig::from_lookup(" put-upload ", lookup_from(&[]));
        assert_eq!(config.service_context.service_name, "put-upload");
        assert_eq!(config.service_context.component, "put-upload");
        assert_eq!(config.service_context.environment, "unknown");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ObservabilityConfig::from_lookup(
            "put-upload",
            lookup_from(&[("SERVICE_NAME", "  "), ("STAGE", "")]),
        );
        assert_eq!(config.service_context.service_name, "put-upload");
        assert_eq!(config.service_context.environment, "unknown");
    }

    #[test]
    fn reads_service_name_and_stage() {
        let config = ObservabilityConfig::from_lookup(
            "put-upload",
            lookup_from(&[("SERVICE_NAME", "egress"), ("STAGE", "production")]),
        );
        assert_eq!(config.service_context.service_name, "egress");
        assert_eq!(config.service_context.environment, "production");
    }
}
