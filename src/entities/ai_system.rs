// AI System Entity
// Descriptive metadata for documented targeting/surveillance systems.
// Not linked to the ownership model; shown on the dashboard for context.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSystem {
    pub name: String,

    /// Short type line ("AI target generation", "Biometric database")
    pub system_type: String,

    pub description: String,

    /// Illustrative figures as reported ("37,000 flagged individuals")
    pub figures: Vec<String>,
}

impl AiSystem {
    pub fn new(name: &str, system_type: &str, description: &str, figures: &[&str]) -> Self {
        AiSystem {
            name: name.to_string(),
            system_type: system_type.to_string(),
            description: description.to_string(),
            figures: figures.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_system_construction() {
        let system = AiSystem::new(
            "Lavender",
            "AI target generation",
            "Machine learning system assigning target scores to individuals.",
            &["37,000 flagged individuals", "~20 seconds per review"],
        );

        assert_eq!(system.name, "Lavender");
        assert_eq!(system.figures.len(), 2);
    }
}
