use serde::{Deserialize, Serialize};

/// Names the analysis matches against. Defaults follow the host binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Method called on the definition to attach the implementation table.
    pub registration_method: String,
    /// The one generic type accepted in annotations (default: `TypedArray`).
    pub array_container: String,
    /// Classes descending from this get a resource hint instead of a class name.
    pub resource_base_class: String,
    /// Annotation name meaning "accepts any value".
    pub any_type: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            registration_method: "RegisterImpl".to_string(),
            array_container: "TypedArray".to_string(),
            resource_base_class: "Resource".to_string(),
            any_type: "Variant".to_string(),
        }
    }
}
