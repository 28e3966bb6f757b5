use super::mbti_type::MbtiType;
use super::risk::RiskTier;
use super::traits::{Dichotomy, TraitScores};

fn percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

fn risk_lines(risk: f64) -> Vec<String> {
    let pct = percent(risk);
    match RiskTier::from_score(risk) {
        RiskTier::High => vec![
            format!("• HIGH BULLYING RISK ({pct})"),
            "• May show aggression toward peers".to_string(),
            "• Tends to dominate the group".to_string(),
            "Recommendations: empathy development, team sports, sessions with a psychologist"
                .to_string(),
        ],
        RiskTier::Medium => vec![
            format!("• MEDIUM BULLYING RISK ({pct})"),
            "• May turn aggressive in conflict situations".to_string(),
            "Recommendations: teach constructive conflict resolution".to_string(),
        ],
        RiskTier::Low => vec![
            format!("• LOW BULLYING RISK ({pct})"),
            "• Most likely to get along peacefully with peers".to_string(),
        ],
    }
}

/// Human-readable report over already computed values. Never changes them.
pub fn render_analysis(
    mbti_type: MbtiType,
    scores: &TraitScores,
    confidence: f64,
    risk: f64,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("PERSONALITY ANALYSIS".to_string());
    lines.push(String::new());
    lines.push(format!("MBTI type: {} ({})", mbti_type, mbti_type.title()));
    lines.push(format!("Prediction confidence: {}", percent(confidence)));
    lines.push(String::new());

    lines.push("TRAIT DISTRIBUTION:".to_string());
    for dichotomy in Dichotomy::ALL {
        let (primary, complement) = (dichotomy.primary(), dichotomy.complement());
        lines.push(format!(
            "• {} ({}): {} / {} ({}): {}",
            primary.name(),
            primary,
            percent(scores.score(primary)),
            complement.name(),
            complement,
            percent(scores.score(complement)),
        ));
    }
    lines.push(String::new());

    lines.push("RISK ANALYSIS:".to_string());
    lines.extend(risk_lines(risk));
    lines.push(String::new());

    lines.push(format!("TYPE PROFILE {mbti_type}:"));
    lines.push(mbti_type.description().to_string());

    lines.join("\n")
}
