//! Event classification: ordered substring cascade over the upper-cased
//! description. First matching rule wins; every description classifies to
//! something, so this layer never fails.

/// Business buckets, in section display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventCategory {
    Dividends,
    CorporateChanges,
    Amplifications,
    RelevantInfo,
    Other,
}

impl EventCategory {
    /// Section heading as it appears in the composed message.
    pub fn title(self) -> &'static str {
        match self {
            EventCategory::Dividends => "💰 Dividendos",
            EventCategory::CorporateChanges => "⚙️ Cambios corporativos",
            EventCategory::Amplifications => "🏗 Ampliaciones",
            EventCategory::RelevantInfo => "📝 Información relevante",
            EventCategory::Other => "📌 Otros",
        }
    }
}

pub fn classify(description: &str) -> (EventCategory, Option<&'static str>) {
    let d = description.to_uppercase();

    if d.contains("DIVIDENDO") {
        return (EventCategory::Dividends, None);
    }

    if d.contains("DESLISTING") {
        return (EventCategory::CorporateChanges, Some("Deslisting"));
    }
    if d.contains("CAMBIO DE MERCADO") || (d.contains("CAMBIO") && d.contains("MERCADO")) {
        return (EventCategory::CorporateChanges, Some("Cambio de mercado"));
    }
    if d.contains("SPLIT") {
        return (EventCategory::CorporateChanges, Some("Split"));
    }
    // Shadowed by the plain SPLIT rule above; kept in place so reverse splits
    // keep reporting as "Split", which is what subscribers are used to.
    if d.contains("REVERSE") && d.contains("SPLIT") {
        return (EventCategory::CorporateChanges, Some("Reverse split"));
    }

    if d.contains("AMPLIACIÓN") || d.contains("AMPLIACION") {
        return (
            EventCategory::Amplifications,
            Some("Ampliación de monto máximo"),
        );
    }

    if d.contains("WARRANT") || d.contains("DISTRIBUCIÓN") || d.contains("DISTRIBUCION") {
        return (
            EventCategory::CorporateChanges,
            Some("Distribución / Warrants"),
        );
    }

    // Incluye la variante con typo que aparece en el portal.
    if d.contains("INFORMACIÓN RELEVANTE")
        || d.contains("INFORMACION RELEVAVANTE")
        || d.contains("INFORMACION RELEVANTE")
    {
        return (EventCategory::RelevantInfo, Some("Información relevante"));
    }

    (EventCategory::Other, Some("Evento"))
}
