//! Prompt construction for HR content generation.

use super::GenerationSpec;

/// Persona sent as the system message of every generation.
pub const SYSTEM_PROMPT: &str = "Você é um assistente de RH especialista em gestão de \
competências, descrições de cargo, feedbacks e PDIs (Planos de Desenvolvimento Individual). \
Sempre responda no idioma do usuário e siga exatamente o formato pedido.";

/// Renders the user message from the validated fields.
pub fn user_prompt(spec: &GenerationSpec) -> String {
    format!(
        "Título: {}\nObjetivo: {}\nDados:\n{}\n\nFormato de retorno: {}",
        spec.title, spec.objective, spec.data, spec.return_format
    )
}
