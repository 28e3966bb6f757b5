use console::{measure_text_width, Style};

use crate::prediction::blend::{
    environmental_extraversion, environmental_intuition, environmental_judging,
    environmental_thinking,
};
use crate::prediction::{
    find_strategy, strategy_names, ConfidenceTier, Dichotomy, EnvironmentalProfile,
    GeneticProfile, PredictionError, PredictionResult, RiskTier,
};
use crate::settings::Report;

const TREE_BRANCH: char = '\u{251C}';
const TREE_END: char = '\u{2514}';
const TREE_HORIZ: char = '\u{2500}';
const TREE_VERT: char = '\u{2502}';

const TREE_PREFIX_WIDTH: usize = 4;
const VALUE_COLUMN: usize = 25;
const NEUTRAL_TERM: f64 = 0.5;

fn tree_connector(corner: char) -> String {
    dim()
        .apply_to(format!("{corner}{TREE_HORIZ}{TREE_HORIZ} "))
        .to_string()
}

fn tree_branch() -> String {
    tree_connector(TREE_BRANCH)
}

fn tree_end() -> String {
    tree_connector(TREE_END)
}

fn tree_indent() -> String {
    dim().apply_to(format!("{}   ", TREE_VERT)).to_string()
}

fn tree_space() -> String {
    " ".repeat(TREE_PREFIX_WIDTH)
}

fn branch_for(index: usize, count: usize) -> String {
    if index + 1 == count {
        tree_end()
    } else {
        tree_branch()
    }
}

fn dim() -> Style {
    Style::new().dim()
}

fn blue() -> Style {
    Style::new().blue()
}

fn magenta() -> Style {
    Style::new().magenta()
}

fn cyan() -> Style {
    Style::new().cyan()
}

fn green() -> Style {
    Style::new().green()
}

fn red() -> Style {
    Style::new().red()
}

fn yellow() -> Style {
    Style::new().yellow()
}

fn bold() -> Style {
    Style::new().bold()
}

fn init_prefix() -> String {
    blue().apply_to("[INIT]").to_string()
}

fn compare_prefix() -> String {
    magenta().apply_to("[COMPARE]").to_string()
}

fn error_prefix() -> String {
    red().apply_to("[ERROR]").to_string()
}

fn pad_label(label: &str, depth: usize) -> String {
    let prefix_width = depth * TREE_PREFIX_WIDTH;
    let target_width = VALUE_COLUMN.saturating_sub(prefix_width);
    let current_width = measure_text_width(label);
    if current_width < target_width {
        format!("{}{}", label, " ".repeat(target_width - current_width))
    } else {
        format!("{} ", label)
    }
}

fn format_signed(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "-" };
    format!("{}{:.2}", dim().apply_to(sign), value.abs())
}

fn format_percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

fn risk_style(tier: RiskTier) -> Style {
    match tier {
        RiskTier::High => red().bold(),
        RiskTier::Medium => yellow(),
        RiskTier::Low => green(),
    }
}

fn confidence_style(tier: ConfidenceTier) -> Style {
    match tier {
        ConfidenceTier::Strong | ConfidenceTier::High => green(),
        ConfidenceTier::Moderate => yellow(),
        ConfidenceTier::Low => dim(),
    }
}

pub fn log_init(source: &str, strategy: &str) {
    println!(
        "{} predicting from {} with {}...",
        init_prefix(),
        cyan().apply_to(source),
        bold().apply_to(strategy),
    );
    if let Ok(found) = find_strategy(strategy) {
        println!("{} {}", init_prefix(), dim().apply_to(found.description()));
    }
}

pub fn log_input_error(source: &str, error: &anyhow::Error) {
    println!(
        "{} could not load {}: {}",
        error_prefix(),
        cyan().apply_to(source),
        red().apply_to(format!("{error:#}"))
    );
}

pub fn log_prediction_error(strategy: &str, error: &PredictionError) {
    let hint = match error {
        PredictionError::UnknownStrategy(_) => format!(
            " (available: {})",
            strategy_names().join(", ")
        ),
        PredictionError::Validation(_) => String::new(),
    };
    println!(
        "{} {} failed: {}{}",
        error_prefix(),
        bold().apply_to(strategy),
        red().apply_to(error),
        dim().apply_to(hint)
    );
}

#[derive(Debug, Clone)]
pub struct PredictionAssessment {
    pub source: String,
    pub strategy: String,
    pub genetic: Option<GeneticProfile>,
    pub environment: Option<EnvironmentalProfile>,
    pub outcome: Option<Result<PredictionResult, PredictionError>>,
}

impl PredictionAssessment {
    pub fn new(source: &str, strategy: &str) -> Self {
        Self {
            source: source.to_string(),
            strategy: strategy.to_string(),
            genetic: None,
            environment: None,
            outcome: None,
        }
    }

    pub fn set_profiles(&mut self, genetic: &GeneticProfile, environment: &EnvironmentalProfile) {
        self.genetic = Some(genetic.clone());
        self.environment = Some(environment.clone());
    }

    pub fn set_outcome(&mut self, outcome: Result<PredictionResult, PredictionError>) {
        self.outcome = Some(outcome);
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, Some(Ok(_)))
    }

    fn profile_lines(&self, lines: &mut Vec<String>) {
        let (Some(genetic), Some(environment)) = (&self.genetic, &self.environment) else {
            return;
        };

        lines.push(String::new());
        lines.push(format!("{}", bold().apply_to("PROFILE")));

        lines.push(format!("{}{}", tree_branch(), pad_label("genetic", 1)));
        for (i, d) in Dichotomy::ALL.iter().enumerate() {
            let value = match genetic.genetic_term(*d) {
                Ok(v) => format!("{:.2}", v),
                Err(_) => dim().apply_to("n/a").to_string(),
            };
            lines.push(format!(
                "{}{}{} {}",
                tree_indent(),
                branch_for(i, Dichotomy::ALL.len()),
                pad_label(d.primary().name(), 2),
                value
            ));
        }

        let env_terms = [
            ("extraversion", environmental_extraversion(environment)),
            ("intuition", environmental_intuition(environment)),
            ("thinking", environmental_thinking(environment)),
            ("judging", environmental_judging(environment)),
            ("overall impact", environment.overall_impact()),
        ];
        lines.push(format!("{}{}", tree_end(), pad_label("environment", 1)));
        for (i, (label, term)) in env_terms.iter().enumerate() {
            lines.push(format!(
                "{}{}{}{}",
                tree_space(),
                branch_for(i, env_terms.len()),
                pad_label(label, 2),
                format_signed(term - NEUTRAL_TERM)
            ));
        }
    }

    fn result_lines(result: &PredictionResult, report: &Report, lines: &mut Vec<String>) {
        let scores = result.trait_scores();
        let mbti_type = result.mbti_type();

        lines.push(String::new());
        lines.push(format!("{}", bold().apply_to("TRAITS")));
        for (i, d) in Dichotomy::ALL.iter().enumerate() {
            let (primary, complement) = (d.primary(), d.complement());
            let (p, c) = (scores.score(primary), scores.score(complement));
            let (p_style, c_style, winner) = if p >= NEUTRAL_TERM {
                (bold(), dim(), primary)
            } else {
                (dim(), bold(), complement)
            };
            lines.push(format!(
                "{}{} {} / {}  {}",
                branch_for(i, Dichotomy::ALL.len()),
                pad_label(&format!("{}/{}", primary, complement), 1),
                p_style.apply_to(format!("{} {}", primary, format_percent(p))),
                c_style.apply_to(format!("{} {}", complement, format_percent(c))),
                dim().apply_to(winner.description()),
            ));
        }

        let risk_tier = RiskTier::from_score(result.bullying_risk());
        let type_group = mbti_type.risk_group();
        lines.push(String::new());
        lines.push(format!("{}", bold().apply_to("RISK")));
        lines.push(format!(
            "{}{} {}",
            tree_branch(),
            pad_label("bullying", 1),
            risk_style(risk_tier).apply_to(format!(
                "{} ({})",
                format_percent(result.bullying_risk()),
                risk_tier
            ))
        ));
        lines.push(format!(
            "{}{} {}",
            tree_end(),
            pad_label("type group", 1),
            risk_style(type_group).apply_to(type_group)
        ));

        let confidence_tier = ConfidenceTier::from_score(result.confidence());
        lines.push(String::new());
        lines.push(format!("{}", bold().apply_to("RESULT")));
        lines.push(format!(
            "{}{} {} {}",
            tree_branch(),
            pad_label("type", 1),
            green().bold().apply_to(mbti_type),
            dim().apply_to(format!("{}, {}", mbti_type.title(), mbti_type.summary()))
        ));
        lines.push(format!(
            "{}{} {}",
            tree_branch(),
            pad_label("confidence", 1),
            confidence_style(confidence_tier).apply_to(format!(
                "{} ({})",
                format_percent(result.confidence()),
                confidence_tier
            ))
        ));
        let rules = find_strategy(result.strategy_used())
            .map(|strategy| {
                format!(
                    " ({} confidence, {} risk)",
                    strategy.confidence_rule(),
                    strategy.risk_rule()
                )
            })
            .unwrap_or_default();
        lines.push(format!(
            "{}{} {}{}",
            tree_end(),
            pad_label("strategy", 1),
            result.strategy_used(),
            dim().apply_to(rules)
        ));

        if report.show_analysis {
            lines.push(String::new());
            lines.push(format!("{}", bold().apply_to("ANALYSIS")));
            for line in result.analysis().lines() {
                lines.push(format!("{}", dim().apply_to(line)));
            }
        }
    }

    pub fn print(&self, report: &Report) {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!(
            "{} {} {}",
            magenta().apply_to(bold().apply_to("[PREDICTION]")),
            dim().apply_to(&self.source),
            cyan().apply_to(&self.strategy)
        ));

        if report.show_profile {
            self.profile_lines(&mut lines);
        }

        match &self.outcome {
            Some(Ok(result)) => Self::result_lines(result, report, &mut lines),
            Some(Err(error)) => {
                lines.push(String::new());
                lines.push(format!("{}", bold().apply_to("RESULT")));
                lines.push(format!(
                    "{}{} {}",
                    tree_branch(),
                    pad_label("status", 1),
                    red().bold().apply_to("failed")
                ));
                lines.push(format!(
                    "{}{} {}",
                    tree_end(),
                    pad_label("reason", 1),
                    dim().apply_to(error)
                ));
            }
            None => {}
        }

        println!("{}\n", lines.join("\n"));
    }
}

pub fn log_comparison_header(source: &str, strategies: usize) {
    println!(
        "{} running {} strategies on {}",
        compare_prefix(),
        bold().apply_to(strategies),
        cyan().apply_to(source)
    );
}

pub fn log_comparison_row(
    strategy: &str,
    outcome: &Result<PredictionResult, PredictionError>,
    last: bool,
) {
    let branch = if last { tree_end() } else { tree_branch() };
    match outcome {
        Ok(result) => {
            let risk_tier = RiskTier::from_score(result.bullying_risk());
            println!(
                "{}{} {}  conf {}  risk {}",
                branch,
                pad_label(strategy, 1),
                green().bold().apply_to(result.mbti_type()),
                bold().apply_to(format_percent(result.confidence())),
                risk_style(risk_tier).apply_to(format!(
                    "{} ({})",
                    format_percent(result.bullying_risk()),
                    risk_tier
                )),
            );
        }
        Err(error) => {
            println!(
                "{}{} {}",
                branch,
                pad_label(strategy, 1),
                red().apply_to(error)
            );
        }
    }
}
